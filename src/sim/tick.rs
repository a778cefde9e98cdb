//! Per-frame advancement of a whole carousel
//!
//! [`Carousel`] bundles the items, the platter physics, and the entrance
//! controller behind one `tick`. Hosts run it from a fixed-step accumulator,
//! feed pointer state through [`FrameInput`], and drain events afterward to
//! learn about phase changes and selections.

use serde::{Deserialize, Serialize};

use crate::items::CarouselItem;
use crate::pick::{Camera, PickStrategy, Viewport, resolve};
use crate::sim::layout::{ItemPlacement, ring_placements};
use crate::sim::phase::{SpinPhase, SpinPhaseController};
use crate::sim::physics::RotationPhysics;
use crate::tuning::Tuning;

/// Pointer state for one tick
///
/// `force` and `touch_velocity` are one-shot: the host clears them after
/// the first substep of a frame so a single pointer event is not applied
/// once per substep.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Platter force from drag or wheel, already scaled
    pub force: Option<f32>,
    /// Fling velocity sample, already scaled
    pub touch_velocity: Option<f32>,
    /// Pointer is resting over the carousel
    pub hovered: bool,
}

/// Something hosts may want to react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The entrance choreography moved on
    PhaseChanged(SpinPhase),
    /// An item was selected; the payload is its index
    ItemSelected(usize),
}

/// A complete carousel: items, platter, entrance, selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Carousel {
    items: Vec<CarouselItem>,
    tuning: Tuning,
    physics: RotationPhysics,
    entrance: SpinPhaseController,
    active_index: Option<usize>,
    time: f32,
    #[serde(skip)]
    events: Vec<CarouselEvent>,
}

impl Carousel {
    pub fn new(items: Vec<CarouselItem>, tuning: Tuning) -> Self {
        let tuning = tuning.validated();
        let physics = RotationPhysics::with_tuning(tuning.physics.clone());
        let entrance = SpinPhaseController::with_tuning(tuning.entrance.clone());
        log::info!("carousel ready with {} items", items.len());
        Self {
            items,
            tuning,
            physics,
            entrance,
            active_index: None,
            time: 0.0,
            events: Vec::new(),
        }
    }

    /// Resolve a pointer position and select whatever it lands on
    ///
    /// A miss leaves the current selection untouched.
    pub fn select_at(
        &mut self,
        pointer: glam::Vec2,
        viewport: Viewport,
        camera: &Camera,
        strategy: PickStrategy,
    ) -> Option<usize> {
        let hit = resolve(
            pointer,
            viewport,
            camera,
            self.physics.rotation(),
            &self.items,
            &self.tuning.layout,
            strategy,
        )?;
        self.select(hit);
        Some(hit)
    }

    /// Select an item by index; out of range indices are ignored
    pub fn select(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            log::warn!("selection index {index} out of range");
            return;
        };
        log::info!("selected '{}' -> {}", item.title, item.route);
        self.active_index = Some(index);
        self.events.push(CarouselEvent::ItemSelected(index));
    }

    /// Current pose of every item under the live rotation
    pub fn placements(&self) -> Vec<ItemPlacement> {
        ring_placements(
            self.items.len(),
            self.tuning.layout.ring_radius,
            self.physics.rotation(),
        )
    }

    /// Take everything that happened since the last drain
    pub fn drain_events(&mut self) -> Vec<CarouselEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn rotation(&self) -> f32 {
        self.physics.rotation()
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn phase(&self) -> SpinPhase {
        self.entrance.phase()
    }

    pub fn physics(&self) -> &RotationPhysics {
        &self.physics
    }

    /// Direct physics access for input trackers that feed forces mid-frame
    pub fn physics_mut(&mut self) -> &mut RotationPhysics {
        &mut self.physics
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Seconds of simulated time since construction
    pub fn time(&self) -> f32 {
        self.time
    }
}

/// Advance the carousel by one fixed step
pub fn tick(carousel: &mut Carousel, input: &FrameInput, dt: f32) {
    if !dt.is_finite() || dt <= 0.0 {
        return;
    }
    if let Some(force) = input.force {
        carousel.physics.apply_user_force(force);
    }
    if let Some(velocity) = input.touch_velocity {
        carousel.physics.add_touch_velocity(velocity);
    }

    let phase_before = carousel.entrance.phase();
    carousel.time += dt;
    carousel
        .entrance
        .update(carousel.time, input.hovered, &mut carousel.physics);
    carousel.physics.update(dt);

    let phase_after = carousel.entrance.phase();
    if phase_after != phase_before {
        carousel
            .events
            .push(CarouselEvent::PhaseChanged(phase_after));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::items::ItemKind;
    use crate::sim::layout::{collider_offset, item_placement};
    use glam::Vec2;

    fn menu() -> Vec<CarouselItem> {
        vec![
            CarouselItem::new("Projects", "projects", ItemKind::Projects),
            CarouselItem::new("Contact", "contact", ItemKind::Contact),
            CarouselItem::new("About", "about", ItemKind::About),
            CarouselItem::new("Consult", "consulting", ItemKind::Consulting),
        ]
    }

    fn run(carousel: &mut Carousel, input: &FrameInput, seconds: f32) {
        let steps = (seconds / SIM_DT).round() as usize;
        for _ in 0..steps {
            tick(carousel, input, SIM_DT);
        }
    }

    #[test]
    fn test_tick_advances_rotation_and_clock() {
        let mut carousel = Carousel::new(menu(), Tuning::default());
        run(&mut carousel, &FrameInput::default(), 0.5);
        assert!(carousel.rotation() > 0.0);
        assert!((carousel.time() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_entrance_emits_each_phase_once() {
        let mut carousel = Carousel::new(menu(), Tuning::default());
        run(&mut carousel, &FrameInput::default(), 4.0);

        let phases: Vec<_> = carousel
            .drain_events()
            .into_iter()
            .filter_map(|event| match event {
                CarouselEvent::PhaseChanged(phase) => Some(phase),
                _ => None,
            })
            .collect();
        assert_eq!(phases, vec![SpinPhase::SlowDown, SpinPhase::Normal]);
        assert_eq!(carousel.phase(), SpinPhase::Normal);
    }

    #[test]
    fn test_forced_tick_outspins_idle_tick() {
        let mut driven = Carousel::new(menu(), Tuning::default());
        let mut idle = Carousel::new(menu(), Tuning::default());
        let shove = FrameInput {
            force: Some(50.0),
            ..FrameInput::default()
        };
        for _ in 0..30 {
            tick(&mut driven, &shove, SIM_DT);
            tick(&mut idle, &FrameInput::default(), SIM_DT);
        }
        assert!(driven.physics().angular_velocity() > idle.physics().angular_velocity());
    }

    #[test]
    fn test_hover_crawls_at_the_idle_floor() {
        let mut carousel = Carousel::new(menu(), Tuning::default());
        run(&mut carousel, &FrameInput::default(), 4.0);

        let hover = FrameInput {
            hovered: true,
            ..FrameInput::default()
        };
        run(&mut carousel, &hover, 8.0);
        // Hover parks the target at zero, but the idle floor keeps a crawl
        let velocity = carousel.physics().angular_velocity();
        assert!((velocity - 0.05).abs() < 0.01, "velocity {velocity}");
        assert!(carousel.physics().target_velocity() < 0.01);
    }

    #[test]
    fn test_select_at_picks_the_projected_item() {
        let mut carousel = Carousel::new(menu(), Tuning::default());
        run(&mut carousel, &FrameInput::default(), 1.0);

        let viewport = Viewport::new(1280.0, 720.0);
        let camera = Camera::default_framing(viewport);
        let layout = carousel.tuning().layout.clone();

        let index = 2;
        let title_len = carousel.items()[index].title.chars().count();
        let placement = item_placement(
            index,
            carousel.items().len(),
            layout.ring_radius,
            carousel.rotation(),
        );
        let center = placement.position + collider_offset(title_len, &layout);
        let pixel = camera.world_to_screen(center, viewport).unwrap();

        let hit = carousel.select_at(pixel, viewport, &camera, PickStrategy::Geometry);
        assert_eq!(hit, Some(index));
        assert_eq!(carousel.active_index(), Some(index));
        let events = carousel.drain_events();
        assert!(events.contains(&CarouselEvent::ItemSelected(index)));
    }

    #[test]
    fn test_miss_keeps_previous_selection() {
        let mut carousel = Carousel::new(menu(), Tuning::default());
        carousel.select(1);

        let viewport = Viewport::new(1280.0, 720.0);
        let camera = Camera::default_framing(viewport);
        let corner = Vec2::new(2.0, 2.0);
        let hit = carousel.select_at(corner, viewport, &camera, PickStrategy::Geometry);
        assert_eq!(hit, None);
        assert_eq!(carousel.active_index(), Some(1));
    }

    #[test]
    fn test_out_of_range_select_is_ignored() {
        let mut carousel = Carousel::new(menu(), Tuning::default());
        carousel.select(99);
        assert_eq!(carousel.active_index(), None);
        assert!(carousel.drain_events().is_empty());
    }

    #[test]
    fn test_snapshot_resumes_identically() {
        let mut carousel = Carousel::new(menu(), Tuning::default());
        run(&mut carousel, &FrameInput::default(), 1.3);
        carousel.drain_events();

        let json = serde_json::to_string(&carousel).unwrap();
        let mut restored: Carousel = serde_json::from_str(&json).unwrap();

        run(&mut carousel, &FrameInput::default(), 1.0);
        run(&mut restored, &FrameInput::default(), 1.0);
        assert_eq!(carousel.rotation(), restored.rotation());
        assert_eq!(carousel.phase(), restored.phase());
    }

    #[test]
    fn test_placements_follow_the_platter() {
        let mut carousel = Carousel::new(menu(), Tuning::default());
        run(&mut carousel, &FrameInput::default(), 0.25);
        let placements = carousel.placements();
        assert_eq!(placements.len(), 4);
        assert!((placements[0].yaw - carousel.rotation()).abs() < 1e-6);
    }
}
