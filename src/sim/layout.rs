//! Ring layout and clickable collider sizing
//!
//! Items sit evenly spaced on a horizontal ring that turns with the
//! platter. Placements are derived, never stored: given an index, a count,
//! and the current rotation, the same pose always comes back, so hosts can
//! rebuild the scene from the rotation angle alone.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::ring_point;
use crate::tuning::LayoutTuning;

/// World pose for one carousel item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemPlacement {
    /// Item center on the ring
    pub position: Vec3,
    /// Heading around the y axis, radians; items face outward
    pub yaw: f32,
}

/// Resting angle of the item slot at `index`, before platter rotation
#[inline]
pub fn slot_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    std::f32::consts::TAU * index as f32 / count as f32
}

/// Pose of one item slot under the given platter rotation
pub fn item_placement(index: usize, count: usize, radius: f32, rotation: f32) -> ItemPlacement {
    let theta = slot_angle(index, count) + rotation;
    ItemPlacement {
        position: ring_point(radius, theta),
        yaw: theta,
    }
}

/// Poses for every slot on the ring, in slot order
pub fn ring_placements(count: usize, radius: f32, rotation: f32) -> Vec<ItemPlacement> {
    (0..count)
        .map(|index| item_placement(index, count, radius, rotation))
        .collect()
}

/// Full extents of an item's clickable volume
///
/// Height grows with the title so long labels stay clickable end to end.
pub fn collider_size(title_len: usize, tuning: &LayoutTuning) -> Vec3 {
    let text_height = title_len as f32 * tuning.title_char_height;
    Vec3::new(
        tuning.collider_width,
        text_height + tuning.collider_padding,
        tuning.collider_depth,
    )
}

/// Offset from the item position to its collider center
///
/// Titles render downward from their anchor, so the volume shifts down by
/// a quarter of the text height to stay centered on the visible label.
pub fn collider_offset(title_len: usize, tuning: &LayoutTuning) -> Vec3 {
    let text_height = title_len as f32 * tuning.title_char_height;
    Vec3::new(0.0, -text_height / 4.0, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn test_four_slots_quarter_turns_apart() {
        assert_eq!(slot_angle(0, 4), 0.0);
        assert!((slot_angle(1, 4) - PI / 2.0).abs() < 1e-6);
        assert!((slot_angle(2, 4) - PI).abs() < 1e-6);
        assert!((slot_angle(3, 4) - 3.0 * PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_ring_is_safe() {
        assert_eq!(slot_angle(0, 0), 0.0);
        assert!(ring_placements(0, 1.6, 0.0).is_empty());
    }

    #[test]
    fn test_placements_sit_on_the_ring() {
        for placement in ring_placements(5, 1.6, 0.7) {
            let radial = (placement.position.x * placement.position.x
                + placement.position.z * placement.position.z)
                .sqrt();
            assert!((radial - 1.6).abs() < 1e-5);
            assert_eq!(placement.position.y, 0.0);
        }
    }

    #[test]
    fn test_rotation_carries_slots_around() {
        // A quarter turn moves slot 0 into slot 1's resting pose
        let turned = item_placement(0, 4, 1.6, PI / 2.0);
        let resting = item_placement(1, 4, 1.6, 0.0);
        assert!((turned.position - resting.position).length() < 1e-5);
        assert!((turned.yaw - resting.yaw).abs() < 1e-6);
    }

    #[test]
    fn test_full_turn_returns_home() {
        let home = item_placement(2, 4, 1.6, 0.0);
        let around = item_placement(2, 4, 1.6, TAU);
        assert!((home.position - around.position).length() < 1e-4);
    }

    #[test]
    fn test_collider_grows_with_title() {
        let tuning = LayoutTuning::default();
        // An eight character title
        let size = collider_size(8, &tuning);
        assert!((size.x - 0.4).abs() < 1e-6);
        assert!((size.y - (8.0 * 0.16 + 0.6)).abs() < 1e-5);
        assert!((size.z - 0.1).abs() < 1e-6);

        let offset = collider_offset(8, &tuning);
        assert!((offset.y + 8.0 * 0.16 / 4.0).abs() < 1e-6);
        assert_eq!(offset.x, 0.0);
        assert_eq!(offset.z, 0.0);
    }
}
