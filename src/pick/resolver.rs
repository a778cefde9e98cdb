//! Pointer resolution strategies
//!
//! `Geometry` casts a camera ray against every item's clickable volume and
//! takes the nearest hit. `Angular` ignores the 3D scene and maps the
//! pointer's bearing around the screen center straight onto ring slots;
//! it is cheap and camera-free but only trustworthy when the camera faces
//! the ring roughly head on. The two can disagree, so callers choose one
//! explicitly and a miss is always reported as a miss.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

use crate::items::CarouselItem;
use crate::pick::{Camera, OrientedBox, Viewport};
use crate::sim::{collider_offset, collider_size, item_placement};
use crate::tuning::LayoutTuning;

/// How a pointer position becomes an item index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickStrategy {
    /// Ray cast against each item's clickable volume; nearest hit wins
    Geometry,
    /// Screen-bearing heuristic; approximate away from head-on framings
    Angular,
}

/// Resolve a pointer position to an item index with the chosen strategy
pub fn resolve(
    pointer: Vec2,
    viewport: Viewport,
    camera: &Camera,
    rotation: f32,
    items: &[CarouselItem],
    layout: &LayoutTuning,
    strategy: PickStrategy,
) -> Option<usize> {
    match strategy {
        PickStrategy::Geometry => pick_geometry(pointer, viewport, camera, rotation, items, layout),
        PickStrategy::Angular => pick_angular(pointer, viewport, rotation, items.len()),
    }
}

/// Cast a ray through the pointer and return the nearest item it enters
pub fn pick_geometry(
    pointer: Vec2,
    viewport: Viewport,
    camera: &Camera,
    rotation: f32,
    items: &[CarouselItem],
    layout: &LayoutTuning,
) -> Option<usize> {
    if items.is_empty() || !rotation.is_finite() {
        return None;
    }
    let ray = camera.screen_to_world_ray(pointer, viewport)?;

    let mut nearest: Option<(f32, usize)> = None;
    for (index, item) in items.iter().enumerate() {
        let title_len = item.title.chars().count();
        let placement = item_placement(index, items.len(), layout.ring_radius, rotation);
        let collider = OrientedBox::new(
            placement.position + collider_offset(title_len, layout),
            collider_size(title_len, layout) * 0.5,
            placement.yaw,
        );
        if let Some(entry) = collider.intersect(&ray) {
            if nearest.is_none_or(|(t, _)| entry < t) {
                nearest = Some((entry, index));
            }
        }
    }

    let hit = nearest.map(|(_, index)| index);
    log::debug!("geometry pick at {pointer:?} resolved to {hit:?}");
    hit
}

/// Map the pointer's bearing around the screen center onto ring slots
///
/// The bearing is taken in screen space with zero at the bottom of the
/// screen, then unwound by the platter rotation so slots are matched in
/// their resting order. Purely 2D: perspective and collider shapes never
/// enter into it.
pub fn pick_angular(
    pointer: Vec2,
    viewport: Viewport,
    rotation: f32,
    item_count: usize,
) -> Option<usize> {
    if item_count == 0 || !rotation.is_finite() {
        return None;
    }
    let ndc = viewport.to_ndc(pointer)?;

    // Bearing measured from screen bottom, counterclockwise, in [0, TAU)
    let bearing = (ndc.x.atan2(ndc.y) + PI).rem_euclid(TAU);
    let unwound = (bearing - rotation).rem_euclid(TAU);
    let index = ((unwound / TAU * item_count as f32).floor() as usize) % item_count;
    log::debug!("angular pick at {pointer:?} resolved to slot {index}");
    Some(index)
}
