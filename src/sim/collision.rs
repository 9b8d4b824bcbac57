//! Axis-aligned collision tests between characters
//!
//! Characters are 32x32 boxes keyed by their top-left corner. Boxes are
//! closed on both ends (max = min + size - 1), so two characters standing on
//! adjacent tiles do not touch.

use glam::Vec2;

use crate::consts::{CHARACTER_HEIGHT, CHARACTER_WIDTH};

/// An axis-aligned bounding box with inclusive corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build a box from inclusive corners.
    ///
    /// Requires `min <= max` on both axes.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y,
            "degenerate box: {min} .. {max}"
        );
        Self { min, max }
    }

    /// The 32x32 character box anchored at `top_left`
    pub fn character(top_left: Vec2) -> Self {
        Self::new(
            top_left,
            top_left + Vec2::new(CHARACTER_WIDTH - 1.0, CHARACTER_HEIGHT - 1.0),
        )
    }

    /// True iff the boxes overlap on both axes
    pub fn intersects(&self, other: &Aabb) -> bool {
        (self.min.x <= other.max.x && self.max.x >= other.min.x)
            && (self.min.y <= other.max.y && self.max.y >= other.min.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_character_box_is_inclusive() {
        let cat = Aabb::character(Vec2::new(64.0, 96.0));
        assert_eq!(cat.min, Vec2::new(64.0, 96.0));
        assert_eq!(cat.max, Vec2::new(95.0, 127.0));
    }

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = Aabb::character(Vec2::new(0.0, 0.0));
        let b = Aabb::character(Vec2::new(16.0, 16.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_corner_touch_counts_as_intersection() {
        // Closed boxes: sharing the single pixel (31, 31) is an overlap.
        let a = Aabb::character(Vec2::new(0.0, 0.0));
        let b = Aabb::character(Vec2::new(31.0, 31.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_adjacent_tiles_do_not_intersect() {
        let a = Aabb::character(Vec2::new(0.0, 0.0));
        let b = Aabb::character(Vec2::new(32.0, 0.0));
        assert!(!a.intersects(&b));

        let below = Aabb::character(Vec2::new(0.0, 32.0));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_disjoint_on_one_axis_is_a_miss() {
        // Overlapping x ranges, separated y ranges.
        let a = Aabb::character(Vec2::new(0.0, 0.0));
        let b = Aabb::character(Vec2::new(8.0, 100.0));
        assert!(!a.intersects(&b));
    }

    proptest! {
        #[test]
        fn prop_intersection_is_symmetric(
            ax in 0.0f32..640.0, ay in 0.0f32..480.0,
            bx in 0.0f32..640.0, by in 0.0f32..480.0,
        ) {
            let a = Aabb::character(Vec2::new(ax, ay));
            let b = Aabb::character(Vec2::new(bx, by));
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn prop_every_box_intersects_itself(x in 0.0f32..640.0, y in 0.0f32..480.0) {
            let a = Aabb::character(Vec2::new(x, y));
            prop_assert!(a.intersects(&a));
        }
    }
}
