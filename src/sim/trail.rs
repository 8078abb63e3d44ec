//! Primary pointer trail
//!
//! A bounded history of pointer positions, oldest at the front. While the
//! pointer is present each tick appends a point; while it is absent nothing is
//! appended and the oldest point ages out, so the visible trail shrinks to
//! nothing instead of vanishing at once.

use std::collections::VecDeque;

use glam::Vec2;

use crate::consts::MAX_TRAIL_LENGTH;

/// One command of a smoothed trail path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    LineTo(Vec2),
}

#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Default for Trail {
    fn default() -> Self {
        Self::with_capacity(MAX_TRAIL_LENGTH)
    }
}

impl Trail {
    /// Capacity is clamped to [2, MAX_TRAIL_LENGTH]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(2, MAX_TRAIL_LENGTH);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Newest point
    pub fn head(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    /// Per-tick update with this tick's pointer reading
    pub fn update(&mut self, pointer: Option<Vec2>) {
        match pointer {
            Some(pos) => {
                self.points.push_back(pos);
                while self.points.len() > self.capacity {
                    self.points.pop_front();
                }
            }
            None => {
                self.points.pop_front();
            }
        }
    }

    /// Smoothed path through the trail.
    ///
    /// Consecutive midpoints are joined by quadratic curves using the shared
    /// point as the control, then a final line reaches the newest point.
    /// Returns an empty path for fewer than two points.
    pub fn smoothed_path(&self) -> Vec<PathCmd> {
        if self.points.len() < 2 {
            return Vec::new();
        }

        let mut path = Vec::with_capacity(self.points.len() + 1);
        path.push(PathCmd::MoveTo(self.points[0]));
        for (p1, p2) in self.points.iter().zip(self.points.iter().skip(1)) {
            path.push(PathCmd::QuadTo {
                ctrl: *p1,
                to: (*p1 + *p2) * 0.5,
            });
        }
        if let Some(last) = self.head() {
            path.push(PathCmd::LineTo(last));
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_evicts_oldest() {
        let mut trail = Trail::default();
        for i in 0..20 {
            trail.update(Some(Vec2::new(i as f32, 0.0)));
        }
        assert_eq!(trail.len(), MAX_TRAIL_LENGTH);
        assert_eq!(trail.head(), Some(Vec2::new(19.0, 0.0)));
        assert_eq!(trail.points().next(), Some(Vec2::new(8.0, 0.0)));
    }

    #[test]
    fn test_absent_pointer_drains() {
        let mut trail = Trail::default();
        for i in 0..MAX_TRAIL_LENGTH {
            trail.update(Some(Vec2::splat(i as f32)));
        }
        trail.update(None);
        assert_eq!(trail.len(), MAX_TRAIL_LENGTH - 1);
        // Newest point is kept while older ones age out
        assert_eq!(trail.head(), Some(Vec2::splat((MAX_TRAIL_LENGTH - 1) as f32)));

        for _ in 0..50 {
            trail.update(None);
        }
        assert!(trail.is_empty());
    }

    #[test]
    fn test_smoothed_path_shape() {
        let mut trail = Trail::default();
        assert!(trail.smoothed_path().is_empty());

        trail.update(Some(Vec2::new(0.0, 0.0)));
        assert!(trail.smoothed_path().is_empty());

        trail.update(Some(Vec2::new(10.0, 0.0)));
        trail.update(Some(Vec2::new(10.0, 10.0)));
        let path = trail.smoothed_path();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], PathCmd::MoveTo(Vec2::ZERO));
        assert_eq!(
            path[1],
            PathCmd::QuadTo {
                ctrl: Vec2::ZERO,
                to: Vec2::new(5.0, 0.0)
            }
        );
        assert_eq!(path[3], PathCmd::LineTo(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_capacity_clamped() {
        assert_eq!(Trail::with_capacity(0).capacity(), 2);
        assert_eq!(Trail::with_capacity(100).capacity(), MAX_TRAIL_LENGTH);
    }

    proptest! {
        #[test]
        fn prop_trail_bounded(
            readings in proptest::collection::vec(
                proptest::option::of((-500.0f32..2500.0, -500.0f32..1500.0)),
                0..200,
            ),
            capacity in 0usize..32,
        ) {
            let mut trail = Trail::with_capacity(capacity);
            for reading in readings {
                trail.update(reading.map(|(x, y)| Vec2::new(x, y)));
                prop_assert!(trail.len() <= MAX_TRAIL_LENGTH);
                prop_assert!(trail.len() <= trail.capacity());
            }
        }
    }
}
