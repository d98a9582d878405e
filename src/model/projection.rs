//! Orthographic 3D -> 2D projection for the plot canvas
//!
//! The plot widget is two-dimensional, so positions are rotated by a yaw
//! around the z axis, then tilted by a pitch toward the viewer.

use super::bounds::Bounds;
use super::position::Position;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Rotation around z, degrees
    pub yaw: f64,
    /// Elevation of the camera above the xy plane, degrees
    pub pitch: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            yaw: 30.0,
            pitch: 20.0,
        }
    }
}

impl Projection {
    pub fn project(&self, p: Position) -> [f64; 2] {
        self.project_f64([p.x as f64, p.y as f64, p.z as f64])
    }

    fn project_f64(&self, [x, y, z]: [f64; 3]) -> [f64; 2] {
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        let (sp, cp) = self.pitch.to_radians().sin_cos();

        let rx = x * cy - y * sy;
        let depth = x * sy + y * cy;
        [rx, z * cp + depth * sp]
    }

    /// The 12 edges of the bounding cube, already projected
    pub fn cube_edges(&self, bounds: Bounds) -> Vec<[[f64; 2]; 2]> {
        let (lo, hi) = (bounds.min() as f64, bounds.max() as f64);
        let corner = |i: usize| {
            [
                if i & 1 == 0 { lo } else { hi },
                if i & 2 == 0 { lo } else { hi },
                if i & 4 == 0 { lo } else { hi },
            ]
        };

        let mut edges = Vec::with_capacity(12);
        for a in 0..8usize {
            for bit in [1usize, 2, 4] {
                // each edge once: from the corner with the bit cleared
                if a & bit == 0 {
                    let b = a | bit;
                    edges.push([self.project_f64(corner(a)), self.project_f64(corner(b))]);
                }
            }
        }
        edges
    }
}
