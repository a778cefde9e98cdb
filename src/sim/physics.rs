//! Rotational physics for the carousel platter
//!
//! One rotational degree of freedom driven by three competing torques: the
//! user's drag, quadratic air drag, and an auto-rotate correction that pulls
//! the spin back toward a target whenever the user lets go. Friction and a
//! velocity clamp keep the result bounded; an idle floor keeps the platter
//! from ever quite stopping.

use serde::{Deserialize, Serialize};

use crate::tuning::PhysicsTuning;

/// One pointer velocity sample, stamped with the simulation clock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchSample {
    /// Pointer velocity at the time of the sample
    pub velocity: f32,
    /// Simulation time the sample was taken, seconds
    pub time: f32,
}

/// Angular motion state for the carousel platter
///
/// `rotation` accumulates without wrapping so hosts can animate full turns;
/// wrap with [`crate::wrap_angle`] for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationPhysics {
    tuning: PhysicsTuning,
    rotation: f32,
    angular_velocity: f32,
    angular_acceleration: f32,
    target_velocity: f32,
    user_input_torque: f32,
    is_user_interacting: bool,
    last_interaction_time: f32,
    touch_history: Vec<TouchSample>,
    /// Simulation clock, advanced by `update`
    time: f32,
}

impl Default for RotationPhysics {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationPhysics {
    pub fn new() -> Self {
        Self::with_tuning(PhysicsTuning::default())
    }

    pub fn with_tuning(mut tuning: PhysicsTuning) -> Self {
        tuning.validate();
        let initial_velocity = tuning.initial_velocity;
        let history_capacity = tuning.touch_history_len;
        Self {
            tuning,
            rotation: 0.0,
            angular_velocity: initial_velocity,
            angular_acceleration: 0.0,
            target_velocity: initial_velocity,
            user_input_torque: 0.0,
            is_user_interacting: false,
            last_interaction_time: 0.0,
            touch_history: Vec::with_capacity(history_capacity),
            time: 0.0,
        }
    }

    /// Apply a user force at the platter rim for the next update only
    ///
    /// Repeated calls within one tick overwrite, not stack; hosts that batch
    /// several pointer deltas per frame should sum them first. Also opens the
    /// interaction window, which suspends auto-rotate and the idle floor.
    pub fn apply_user_force(&mut self, force: f32) {
        if !force.is_finite() {
            return;
        }
        self.user_input_torque = force * self.tuning.radius;
        self.is_user_interacting = true;
        self.last_interaction_time = self.time;
    }

    /// Record a pointer velocity sample for fling smoothing
    pub fn add_touch_velocity(&mut self, velocity: f32) {
        if !velocity.is_finite() {
            return;
        }
        self.touch_history.push(TouchSample {
            velocity,
            time: self.time,
        });
        if self.touch_history.len() > self.tuning.touch_history_len {
            self.touch_history.remove(0);
        }
    }

    /// Smoothed fling velocity: mean of the three most recent samples
    ///
    /// A single sample is noise, not a fling, so this stays 0 until at
    /// least two samples exist.
    pub fn touch_velocity(&self) -> f32 {
        if self.touch_history.len() < 2 {
            return 0.0;
        }
        let recent = &self.touch_history[self.touch_history.len().saturating_sub(3)..];
        recent.iter().map(|s| s.velocity).sum::<f32>() / recent.len() as f32
    }

    /// Retarget the auto-rotate correction
    ///
    /// Takes effect gradually through the correction torque; the platter
    /// never jumps straight to the new rate.
    pub fn set_target_velocity(&mut self, velocity: f32) {
        if !velocity.is_finite() {
            return;
        }
        self.target_velocity = velocity;
    }

    /// Advance the integrator by `dt` seconds
    ///
    /// Non-positive or non-finite `dt` is a no-op. Call with a fixed substep
    /// for deterministic replays.
    pub fn update(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.time += dt;

        // The interaction window closes a beat after the last user force
        if self.time - self.last_interaction_time > self.tuning.interaction_timeout {
            self.is_user_interacting = false;
        }

        // Quadratic drag pushes back harder at speed
        let speed = self.angular_velocity.abs();
        let drag_torque = -self.tuning.drag_coefficient * self.angular_velocity * speed;

        // Correction toward the target, suspended while the user drives
        let auto_torque = if self.is_user_interacting {
            0.0
        } else {
            (self.target_velocity - self.angular_velocity) * self.tuning.auto_rotate_force
        };

        let total_torque = self.user_input_torque + drag_torque + auto_torque;
        self.angular_acceleration = total_torque / self.tuning.moment_of_inertia();

        self.angular_velocity += self.angular_acceleration * dt;
        self.angular_velocity *= self.tuning.friction;
        self.angular_velocity = self
            .angular_velocity
            .clamp(-self.tuning.max_velocity, self.tuning.max_velocity);

        // Idle floor: the platter never quite stops on its own. Suspended
        // while interacting so a held drag can pin it still.
        if !self.is_user_interacting && self.angular_velocity.abs() < self.tuning.min_velocity {
            self.angular_velocity = if self.angular_velocity >= 0.0 {
                self.tuning.min_velocity
            } else {
                -self.tuning.min_velocity
            };
        }

        self.rotation += self.angular_velocity * dt;
        self.user_input_torque = 0.0;
    }

    /// Cumulative rotation angle in radians, unbounded
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Signed spin rate in rad/s
    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Spin rate the auto-rotate correction is pulling toward
    pub fn target_velocity(&self) -> f32 {
        self.target_velocity
    }

    /// True while a drag is active or ended less than the timeout ago
    pub fn is_user_interacting(&self) -> bool {
        self.is_user_interacting
    }

    /// Simulation clock in seconds
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn tuning(&self) -> &PhysicsTuning {
        &self.tuning
    }
}
