//! Data-driven balance tables for the carousel
//!
//! Every tuned constant lives here so hosts can ship balance tweaks as JSON
//! instead of recompiling. Defaults mirror [`crate::consts`]. Loaded tables
//! pass through `validated()` which replaces non-finite values and clamps
//! the rest into ranges the simulation can survive.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Replace non-finite values with a fallback, then clamp
fn sane(value: f32, fallback: f32, min: f32, max: f32) -> f32 {
    let value = if value.is_finite() { value } else { fallback };
    value.clamp(min, max)
}

/// Constants for the rotational integrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Platter mass in arbitrary units (combines with radius into inertia)
    pub mass: f32,
    /// Platter radius, also the lever arm for user force
    pub radius: f32,
    /// Spin rate the platter starts with, in rad/s
    pub initial_velocity: f32,
    /// Quadratic drag coefficient
    pub drag_coefficient: f32,
    /// Per-tick velocity retention factor
    pub friction: f32,
    /// Hard cap on |angular velocity|, rad/s
    pub max_velocity: f32,
    /// Idle floor on |angular velocity|, rad/s
    pub min_velocity: f32,
    /// Reserved for a spring-based easing mode; carried in tables but unread
    pub spring_constant: f32,
    /// Reserved alongside `spring_constant`
    pub damping_ratio: f32,
    /// Gain of the correction torque pulling spin toward the target
    pub auto_rotate_force: f32,
    /// Seconds after the last user force before interaction ends
    pub interaction_timeout: f32,
    /// Pointer velocity samples retained for fling smoothing
    pub touch_history_len: usize,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            mass: consts::PLATTER_MASS,
            radius: consts::PLATTER_RADIUS,
            initial_velocity: consts::TARGET_VELOCITY,
            drag_coefficient: consts::DRAG_COEFFICIENT,
            friction: consts::FRICTION,
            max_velocity: consts::MAX_VELOCITY,
            min_velocity: consts::MIN_VELOCITY,
            spring_constant: 0.1,
            damping_ratio: 0.8,
            auto_rotate_force: consts::AUTO_ROTATE_FORCE,
            interaction_timeout: consts::INTERACTION_TIMEOUT,
            touch_history_len: consts::TOUCH_HISTORY_LEN,
        }
    }
}

impl PhysicsTuning {
    /// Solid-disc moment of inertia, `0.5 * m * r^2`
    #[inline]
    pub fn moment_of_inertia(&self) -> f32 {
        0.5 * self.mass * self.radius * self.radius
    }

    /// Clamp every field into a range the integrator can survive
    pub fn validate(&mut self) {
        let d = Self::default();
        self.mass = sane(self.mass, d.mass, 1e-3, 1e9);
        self.radius = sane(self.radius, d.radius, 1e-3, 1e6);
        self.drag_coefficient = sane(self.drag_coefficient, d.drag_coefficient, 0.0, 1e6);
        self.friction = sane(self.friction, d.friction, 1e-3, 1.0);
        self.max_velocity = sane(self.max_velocity, d.max_velocity, 0.0, 1e6);
        self.min_velocity = sane(self.min_velocity, d.min_velocity, 0.0, self.max_velocity);
        self.initial_velocity = sane(
            self.initial_velocity,
            d.initial_velocity,
            -self.max_velocity,
            self.max_velocity,
        );
        self.spring_constant = sane(self.spring_constant, d.spring_constant, 0.0, 1e6);
        self.damping_ratio = sane(self.damping_ratio, d.damping_ratio, 0.0, 1e6);
        self.auto_rotate_force = sane(self.auto_rotate_force, d.auto_rotate_force, 0.0, 1e6);
        self.interaction_timeout = sane(self.interaction_timeout, d.interaction_timeout, 0.0, 60.0);
        self.touch_history_len = self.touch_history_len.clamp(1, 64);
    }
}

/// Constants for the entrance spin choreography
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntranceTuning {
    /// Seconds spent in the fast-spin phase
    pub fast_spin_duration: f32,
    /// Full revolutions the fast-spin phase aims for
    pub fast_spin_turns: f32,
    /// Seconds after mount when the slow-down ease begins
    pub slow_down_start: f32,
    /// Seconds the slow-down ease takes once started
    pub slow_down_duration: f32,
    /// Cruise spin rate after the entrance settles, rad/s
    pub normal_speed: f32,
    /// Per-tick smoothing factor during fast-spin and slow-down
    pub intro_smoothing: f32,
    /// Per-tick smoothing factor once settled
    pub normal_smoothing: f32,
}

impl Default for EntranceTuning {
    fn default() -> Self {
        Self {
            fast_spin_duration: consts::FAST_SPIN_DURATION,
            fast_spin_turns: consts::FAST_SPIN_TURNS,
            slow_down_start: consts::SLOW_DOWN_START,
            slow_down_duration: consts::SLOW_DOWN_DURATION,
            normal_speed: consts::NORMAL_SPEED,
            intro_smoothing: consts::INTRO_SMOOTHING,
            normal_smoothing: consts::NORMAL_SMOOTHING,
        }
    }
}

impl EntranceTuning {
    /// Target spin rate of the fast-spin phase, rad/s
    #[inline]
    pub fn fast_speed(&self) -> f32 {
        self.fast_spin_turns / self.fast_spin_duration * std::f32::consts::TAU
    }

    pub fn validate(&mut self) {
        let d = Self::default();
        self.fast_spin_duration = sane(self.fast_spin_duration, d.fast_spin_duration, 1e-3, 60.0);
        self.fast_spin_turns = sane(self.fast_spin_turns, d.fast_spin_turns, 0.0, 100.0);
        self.slow_down_start = sane(self.slow_down_start, d.slow_down_start, 0.0, 60.0);
        self.slow_down_duration = sane(self.slow_down_duration, d.slow_down_duration, 1e-3, 60.0);
        self.normal_speed = sane(self.normal_speed, d.normal_speed, 0.0, 1e3);
        self.intro_smoothing = sane(self.intro_smoothing, d.intro_smoothing, 0.0, 1.0);
        self.normal_smoothing = sane(self.normal_smoothing, d.normal_smoothing, 0.0, 1.0);
    }
}

/// Constants for ring placement and clickable collider sizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTuning {
    /// Radius of the item ring in world units
    pub ring_radius: f32,
    /// World-space height contributed by each title character
    pub title_char_height: f32,
    /// Collider extent along the item's local x
    pub collider_width: f32,
    /// Collider extent along the item's local z
    pub collider_depth: f32,
    /// Extra collider height beyond the title text
    pub collider_padding: f32,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            ring_radius: consts::RING_RADIUS,
            title_char_height: consts::TITLE_CHAR_HEIGHT,
            collider_width: consts::COLLIDER_WIDTH,
            collider_depth: consts::COLLIDER_DEPTH,
            collider_padding: consts::COLLIDER_PADDING,
        }
    }
}

impl LayoutTuning {
    pub fn validate(&mut self) {
        let d = Self::default();
        self.ring_radius = sane(self.ring_radius, d.ring_radius, 1e-3, 1e6);
        self.title_char_height = sane(self.title_char_height, d.title_char_height, 0.0, 1e3);
        self.collider_width = sane(self.collider_width, d.collider_width, 1e-3, 1e3);
        self.collider_depth = sane(self.collider_depth, d.collider_depth, 1e-3, 1e3);
        self.collider_padding = sane(self.collider_padding, d.collider_padding, 0.0, 1e3);
    }
}

/// Constants mapping raw pointer deltas onto physics inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionTuning {
    /// Platter force per pixel of horizontal drag
    pub drag_force_scale: f32,
    /// Fling sample gain applied to the windowed pointer velocity (px/ms)
    pub fling_velocity_scale: f32,
    /// Platter force per wheel delta unit
    pub wheel_force_scale: f32,
    /// Seconds of pointer velocity history kept for fling smoothing
    pub velocity_window: f32,
}

impl Default for InteractionTuning {
    fn default() -> Self {
        Self {
            drag_force_scale: consts::DRAG_FORCE_SCALE,
            fling_velocity_scale: consts::FLING_VELOCITY_SCALE,
            wheel_force_scale: consts::WHEEL_FORCE_SCALE,
            velocity_window: consts::VELOCITY_WINDOW,
        }
    }
}

impl InteractionTuning {
    pub fn validate(&mut self) {
        let d = Self::default();
        self.drag_force_scale = sane(self.drag_force_scale, d.drag_force_scale, -1e6, 1e6);
        self.fling_velocity_scale =
            sane(self.fling_velocity_scale, d.fling_velocity_scale, -1e6, 1e6);
        self.wheel_force_scale = sane(self.wheel_force_scale, d.wheel_force_scale, -1e6, 1e6);
        self.velocity_window = sane(self.velocity_window, d.velocity_window, 1e-3, 10.0);
    }
}

/// Complete balance table for one carousel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub physics: PhysicsTuning,
    pub entrance: EntranceTuning,
    pub layout: LayoutTuning,
    pub interaction: InteractionTuning,
}

impl Tuning {
    /// Run every section's validator and return the cleaned table
    pub fn validated(mut self) -> Self {
        self.physics.validate();
        self.entrance.validate();
        self.layout.validate();
        self.interaction.validate();
        self
    }

    /// Parse a JSON balance table, falling back to defaults on parse failure
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Self>(json) {
            Ok(tuning) => tuning.validated(),
            Err(err) => {
                log::warn!("invalid tuning json, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Serialize the table as pretty JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
