//! Headless core for a rotating 3D carousel menu
//!
//! Simulates a ring of menu items on a spinning platter: drag to shove it,
//! flick to fling it, leave it alone and it settles back into a lazy idle
//! spin. The crate is renderer-agnostic: it owns rotation state, the
//! entrance choreography, and pointer hit-testing, and hands hosts plain
//! placements to draw however they like.
//!
//! Modules:
//! - [`sim`]: rotation physics, entrance phases, ring layout, frame tick
//! - [`pick`]: camera rays and pointer-to-item resolution
//! - [`input`]: pointer drag/fling/wheel translation and gesture classification
//! - [`items`]: the menu items riding the carousel
//! - [`tuning`]: serde-backed balance tables

pub mod input;
pub mod items;
pub mod pick;
pub mod sim;
pub mod tuning;

pub use items::{CarouselItem, ItemKind};
pub use sim::Carousel;
pub use tuning::Tuning;

use glam::Vec3;

/// Simulation constants, overridable per carousel through [`tuning::Tuning`]
pub mod consts {
    use std::f32::consts::TAU;

    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Max physics substeps per rendered frame
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Platter mass in arbitrary units
    pub const PLATTER_MASS: f32 = 1000.0;
    /// Platter radius; also the lever arm for user force
    pub const PLATTER_RADIUS: f32 = 5.0;
    /// Idle spin rate the platter starts with and drifts back to (rad/s)
    pub const TARGET_VELOCITY: f32 = 0.2;
    /// Quadratic drag coefficient
    pub const DRAG_COEFFICIENT: f32 = 0.015;
    /// Per-tick velocity retention factor
    pub const FRICTION: f32 = 0.995;
    /// Hard cap on |angular velocity| (rad/s)
    pub const MAX_VELOCITY: f32 = 3.0;
    /// Idle floor on |angular velocity| (rad/s)
    pub const MIN_VELOCITY: f32 = 0.05;
    /// Gain of the correction torque pulling spin toward the target
    pub const AUTO_ROTATE_FORCE: f32 = 0.05;
    /// Seconds after the last user force before interaction ends
    pub const INTERACTION_TIMEOUT: f32 = 0.1;
    /// Pointer velocity samples retained for fling smoothing
    pub const TOUCH_HISTORY_LEN: usize = 5;

    /// Seconds spent in the entrance fast-spin phase
    pub const FAST_SPIN_DURATION: f32 = 0.5;
    /// Full revolutions the fast-spin phase aims for
    pub const FAST_SPIN_TURNS: f32 = 3.0;
    /// Target spin rate during fast-spin (rad/s)
    pub const FAST_SPIN_SPEED: f32 = FAST_SPIN_TURNS / FAST_SPIN_DURATION * TAU;
    /// Seconds after mount when the slow-down ease begins
    pub const SLOW_DOWN_START: f32 = 1.0;
    /// Seconds the slow-down ease takes once started
    pub const SLOW_DOWN_DURATION: f32 = 1.5;
    /// Cruise spin rate once the entrance settles (rad/s)
    pub const NORMAL_SPEED: f32 = 0.3;
    /// Per-tick target smoothing during the entrance
    pub const INTRO_SMOOTHING: f32 = 0.02;
    /// Per-tick target smoothing once settled
    pub const NORMAL_SMOOTHING: f32 = 0.05;

    /// Radius of the item ring in world units
    pub const RING_RADIUS: f32 = 1.6;
    /// World-space height contributed by each title character
    pub const TITLE_CHAR_HEIGHT: f32 = 0.16;
    /// Clickable collider extent along the item's local x
    pub const COLLIDER_WIDTH: f32 = 0.4;
    /// Clickable collider extent along the item's local z
    pub const COLLIDER_DEPTH: f32 = 0.1;
    /// Extra collider height beyond the title text
    pub const COLLIDER_PADDING: f32 = 0.6;

    /// Platter force per pixel of horizontal drag
    pub const DRAG_FORCE_SCALE: f32 = 0.01;
    /// Fling sample gain applied to the windowed pointer velocity (px/ms)
    pub const FLING_VELOCITY_SCALE: f32 = 10.0;
    /// Platter force per wheel delta unit
    pub const WHEEL_FORCE_SCALE: f32 = 0.001;
    /// Seconds of pointer velocity history kept for fling smoothing
    pub const VELOCITY_WINDOW: f32 = 0.1;

    /// Default camera position framing the ring
    pub const CAMERA_EYE: [f32; 3] = [6.0, -0.5, 0.0];
    /// Vertical field of view for wide viewports (degrees)
    pub const CAMERA_FOV_DEG: f32 = 50.0;
    /// Vertical field of view below [`CAMERA_NARROW_WIDTH`] (degrees)
    pub const CAMERA_FOV_NARROW_DEG: f32 = 80.0;
    /// Viewport width threshold for the narrow field of view (px)
    pub const CAMERA_NARROW_WIDTH: f32 = 768.0;
}

/// Wrap an angle into [0, TAU)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}

/// Point on a horizontal ring of `radius` at angle `theta`
///
/// Angle zero faces +z, increasing toward +x, matching the carousel's
/// front-facing slot under a right-handed y-up camera.
#[inline]
pub fn ring_point(radius: f32, theta: f32) -> Vec3 {
    Vec3::new(theta.sin() * radius, 0.0, theta.cos() * radius)
}
