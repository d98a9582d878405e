//! A single simulated node and its two movement policies

use std::collections::VecDeque;

use rand::Rng;
use tracing::trace;

use super::bounds::Bounds;
use super::error::NodeError;
use super::policy::MovementPolicy;
use super::position::Position;

/// One simulated point: current position plus every position it has held
#[derive(Debug, Clone)]
pub struct Node {
    bounds: Bounds,
    position: Position,
    /// Oldest first. Trimmed from the front when `history_limit` is set.
    history: VecDeque<Position>,
    history_limit: Option<usize>,
    updates: u64,
}

impl Node {
    /// New node at the origin with an empty, unbounded history
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            position: Position::ORIGIN,
            history: VecDeque::new(),
            history_limit: None,
            updates: 0,
        }
    }

    pub fn with_bounds(min: i64, max: i64) -> Result<Self, NodeError> {
        Ok(Self::new(Bounds::new(min, max)?))
    }

    /// Keep only the newest `limit` positions (ring buffer)
    pub fn with_history_limit(bounds: Bounds, limit: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(limit),
            history_limit: Some(limit),
            ..Self::new(bounds)
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn current_position(&self) -> Position {
        self.position
    }

    /// Positions held so far, oldest first
    pub fn past_positions(&self) -> &VecDeque<Position> {
        &self.history
    }

    /// Number of updates applied, including any trimmed from history
    pub fn update_count(&self) -> u64 {
        self.updates
    }

    /// Jump policy: independent uniform draw per axis from `[min, max)`
    pub fn jump_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Position {
        let range = self.bounds.min()..self.bounds.max();
        let next = Position::new(
            rng.gen_range(range.clone()),
            rng.gen_range(range.clone()),
            rng.gen_range(range),
        );
        self.record(next);
        next
    }

    /// Walk policy: draw a step per axis from the step range, add, clamp.
    ///
    /// Fails without touching state when the step range is empty.
    pub fn walk_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Position, NodeError> {
        let range = self.bounds.step_range()?;
        let step = Position::new(
            rng.gen_range(range.clone()),
            rng.gen_range(range.clone()),
            rng.gen_range(range),
        );
        Ok(self.walk_by(step))
    }

    /// Add `step` to the current position, clamping each axis on its own
    pub fn walk_by(&mut self, step: Position) -> Position {
        let [sx, sy, sz] = step.axes();
        let p = self.position;
        let next = Position::new(
            self.bounds.clamp(p.x.saturating_add(sx)),
            self.bounds.clamp(p.y.saturating_add(sy)),
            self.bounds.clamp(p.z.saturating_add(sz)),
        );
        self.record(next);
        next
    }

    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        policy: MovementPolicy,
        rng: &mut R,
    ) -> Result<Position, NodeError> {
        match policy {
            MovementPolicy::Jump => Ok(self.jump_random(rng)),
            MovementPolicy::Walk => self.walk_random(rng),
        }
    }

    fn record(&mut self, next: Position) {
        self.position = next;
        self.updates += 1;
        match self.history_limit {
            Some(0) => {}
            Some(limit) => {
                while self.history.len() >= limit {
                    self.history.pop_front();
                }
                self.history.push_back(next);
            }
            None => self.history.push_back(next),
        }

        trace!(
            x = next.x,
            y = next.y,
            z = next.z,
            history_len = self.history.len(),
            "Node moved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn starts_at_origin_with_empty_history() {
        let node = Node::with_bounds(-100, 100).unwrap();
        assert_eq!(node.current_position(), Position::ORIGIN);
        assert!(node.past_positions().is_empty());
        assert_eq!(node.update_count(), 0);
    }

    #[test]
    fn rejects_inverted_bounds_at_construction() {
        assert_eq!(
            Node::with_bounds(100, -100).unwrap_err(),
            NodeError::InvalidBounds { min: 100, max: -100 }
        );
    }

    #[test]
    fn single_jump_stays_below_upper_bound() {
        let mut node = Node::with_bounds(0, 10).unwrap();
        let p = node.jump_random(&mut rng());

        for v in p.axes() {
            assert!((0..10).contains(&v), "{v} outside [0, 10)");
        }
        assert_eq!(node.past_positions().len(), 1);
        assert_eq!(node.past_positions().back(), Some(&p));
    }

    #[test]
    fn walk_clamps_each_axis_independently() {
        let mut node = Node::with_bounds(-100, 100).unwrap();
        node.walk_by(Position::new(95, -98, 0));
        let p = node.walk_by(Position::new(8, -5, 3));

        assert_eq!(p, Position::new(100, -100, 3));
        assert_eq!(node.current_position(), p);
        assert_eq!(
            node.past_positions().iter().copied().collect::<Vec<_>>(),
            vec![Position::new(95, -98, 0), Position::new(100, -100, 3)]
        );
    }

    #[test]
    fn clamping_one_axis_leaves_others_alone() {
        let mut node = Node::with_bounds(-100, 100).unwrap();
        node.walk_by(Position::new(99, 10, -20));
        let p = node.walk_by(Position::new(9, 1, -2));
        assert_eq!(p, Position::new(100, 11, -22));
    }

    #[test]
    fn pinned_at_max_under_non_negative_steps() {
        let mut node = Node::with_bounds(-100, 100).unwrap();
        node.walk_by(Position::new(100, 100, 100));
        for step in [Position::new(0, 0, 0), Position::new(9, 3, 1), Position::new(5, 0, 9)] {
            assert_eq!(node.walk_by(step), Position::new(100, 100, 100));
        }
        assert_eq!(node.walk_by(Position::new(-1, 0, 0)), Position::new(99, 100, 100));
    }

    #[test]
    fn walk_with_empty_step_range_is_an_error() {
        let mut node = Node::with_bounds(0, 5).unwrap();
        let err = node.walk_random(&mut rng()).unwrap_err();

        assert_eq!(err, NodeError::EmptyStepRange { low: 0, high: 0 });
        assert_eq!(node.current_position(), Position::ORIGIN);
        assert!(node.past_positions().is_empty());
        assert_eq!(node.update_count(), 0);
    }

    #[test]
    fn random_walk_steps_within_step_range() {
        let mut node = Node::with_bounds(-100, 100).unwrap();
        let mut rng = rng();
        let mut prev = node.current_position();
        for _ in 0..200 {
            let p = node.walk_random(&mut rng).unwrap();
            for (a, b) in prev.axes().into_iter().zip(p.axes()) {
                assert!((-10..10).contains(&(b - a)), "step {a} -> {b} too large");
            }
            prev = p;
        }
        assert_eq!(node.past_positions().len(), 200);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = Node::with_bounds(-100, 100).unwrap();
        let mut b = Node::with_bounds(-100, 100).unwrap();
        let (mut ra, mut rb) = (rng(), rng());
        for _ in 0..20 {
            assert_eq!(
                a.advance(MovementPolicy::Walk, &mut ra),
                b.advance(MovementPolicy::Walk, &mut rb)
            );
            assert_eq!(
                a.advance(MovementPolicy::Jump, &mut ra),
                b.advance(MovementPolicy::Jump, &mut rb)
            );
        }
    }

    #[test]
    fn history_limit_keeps_newest_positions() {
        let mut node = Node::with_history_limit(Bounds::default(), 3);
        for i in 1..=5 {
            node.walk_by(Position::new(1, 0, 0));
            assert_eq!(node.update_count(), i);
        }
        let kept: Vec<i64> = node.past_positions().iter().map(|p| p.x).collect();
        assert_eq!(kept, vec![3, 4, 5]);
        assert_eq!(node.past_positions().back(), Some(&node.current_position()));
    }

    #[test]
    fn zero_history_limit_records_nothing() {
        let mut node = Node::with_history_limit(Bounds::default(), 0);
        node.walk_by(Position::new(1, 2, 3));
        assert!(node.past_positions().is_empty());
        assert_eq!(node.current_position(), Position::new(1, 2, 3));
        assert_eq!(node.update_count(), 1);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn bounds() -> impl Strategy<Value = Bounds> {
            (-10_000i64..10_000, 1i64..20_000)
                .prop_map(|(min, width)| Bounds::new(min, min + width).unwrap())
        }

        fn walkable_bounds() -> impl Strategy<Value = Bounds> {
            bounds().prop_filter("step range must be non-empty", |b| b.step_range().is_ok())
        }

        proptest! {
            #[test]
            fn jumps_stay_in_half_open_cube(b in bounds(), seed in any::<u64>(), calls in 1usize..64) {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut node = Node::new(b);
                for _ in 0..calls {
                    let p = node.jump_random(&mut rng);
                    prop_assert!(b.contains_half_open(p), "{} outside {:?}", p, b);
                }
                prop_assert_eq!(node.past_positions().len(), calls);
                prop_assert_eq!(node.past_positions().back().copied(), Some(node.current_position()));
            }

            #[test]
            fn walks_stay_in_closed_cube(b in walkable_bounds(), seed in any::<u64>(), calls in 1usize..128) {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut node = Node::new(b);
                for _ in 0..calls {
                    let p = node.walk_random(&mut rng).unwrap();
                    prop_assert!(b.contains(p), "{} outside {:?}", p, b);
                }
                prop_assert_eq!(node.past_positions().len(), calls);
                prop_assert_eq!(node.update_count(), calls as u64);
                prop_assert_eq!(node.past_positions().back().copied(), Some(node.current_position()));
            }

            #[test]
            fn clamping_is_per_axis(
                start in prop::array::uniform3(-100i64..=100),
                step in prop::array::uniform3(-1_000i64..1_000),
            ) {
                let b = Bounds::default();
                let mut node = Node::new(b);
                node.walk_by(Position::from_axes(start));
                let p = node.walk_by(Position::from_axes(step));

                for ((s, d), v) in start.into_iter().zip(step).zip(p.axes()) {
                    prop_assert_eq!(v, (s + d).clamp(b.min(), b.max()));
                }
            }
        }
    }
}
