//! Entrance choreography for the carousel
//!
//! On mount the platter whips through a fast spin, eases off with a
//! cubic-out curve, then settles into its cruise speed. The controller
//! never writes angular velocity directly; it only retargets the physics
//! auto-rotate correction, so a user grabbing the platter mid-entrance
//! fights believable inertia instead of an animation curve.

use serde::{Deserialize, Serialize};

use crate::sim::RotationPhysics;
use crate::tuning::EntranceTuning;

/// Where the entrance choreography currently is
///
/// Phases only ever advance. `Normal` is terminal until [`SpinPhaseController::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpinPhase {
    /// Whip the platter up to several turns per second
    FastSpin,
    /// Ease the target back down toward cruise speed
    SlowDown,
    /// Settled; hover can park the platter
    Normal,
}

/// Drives [`RotationPhysics`]'s target velocity through the entrance phases
///
/// The host clock is captured lazily on the first `update`, so construction
/// time does not matter; the choreography starts when the first frame does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinPhaseController {
    tuning: EntranceTuning,
    phase: SpinPhase,
    mount_time: Option<f32>,
    smoothed_target: f32,
}

impl Default for SpinPhaseController {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinPhaseController {
    pub fn new() -> Self {
        Self::with_tuning(EntranceTuning::default())
    }

    pub fn with_tuning(mut tuning: EntranceTuning) -> Self {
        tuning.validate();
        Self {
            tuning,
            phase: SpinPhase::FastSpin,
            mount_time: None,
            smoothed_target: 0.0,
        }
    }

    /// Advance the choreography to host time `now` and retarget `physics`
    ///
    /// `hovered` parks the platter once the entrance has settled; it is
    /// ignored during the intro. Non-finite `now` is a no-op.
    pub fn update(&mut self, now: f32, hovered: bool, physics: &mut RotationPhysics) {
        if !now.is_finite() {
            return;
        }
        let mount = match self.mount_time {
            Some(mount) => mount,
            None => {
                self.mount_time = Some(now);
                self.smoothed_target = physics.target_velocity();
                now
            }
        };
        let elapsed = (now - mount).max(0.0);

        // Sequential checks so a stalled first frame can skip straight
        // through to Normal
        if self.phase == SpinPhase::FastSpin && elapsed >= self.tuning.fast_spin_duration {
            self.phase = SpinPhase::SlowDown;
            log::info!("entrance phase {:?} at {elapsed:.2}s", self.phase);
        }
        if self.phase == SpinPhase::SlowDown
            && elapsed >= self.tuning.slow_down_start + self.tuning.slow_down_duration
        {
            self.phase = SpinPhase::Normal;
            // Snap to cruise so the settle point never depends on how the
            // intro smoothing lagged
            self.smoothed_target = self.tuning.normal_speed;
            log::info!("entrance phase {:?} at {elapsed:.2}s", self.phase);
        }

        let desired = self.desired_target(elapsed, hovered);
        let factor = if self.phase == SpinPhase::Normal {
            self.tuning.normal_smoothing
        } else {
            self.tuning.intro_smoothing
        };
        self.smoothed_target += (desired - self.smoothed_target) * factor;
        physics.set_target_velocity(self.smoothed_target);
    }

    /// Raw (pre-smoothing) target for the current phase
    fn desired_target(&self, elapsed: f32, hovered: bool) -> f32 {
        match self.phase {
            SpinPhase::FastSpin => self.tuning.fast_speed(),
            SpinPhase::SlowDown => {
                // Ease only begins at slow_down_start; before that the
                // clamp holds progress at zero and the platter coasts at
                // full fast speed
                let progress = ((elapsed - self.tuning.slow_down_start)
                    / self.tuning.slow_down_duration)
                    .clamp(0.0, 1.0);
                let eased = 1.0 - (1.0 - progress).powi(3);
                let fast = self.tuning.fast_speed();
                fast - (fast - self.tuning.normal_speed) * eased
            }
            SpinPhase::Normal => {
                if hovered {
                    0.0
                } else {
                    self.tuning.normal_speed
                }
            }
        }
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    /// Target velocity after smoothing, as last written to the physics
    pub fn smoothed_target(&self) -> f32 {
        self.smoothed_target
    }

    /// Restart the choreography; the clock re-captures on the next update
    pub fn reset(&mut self) {
        self.phase = SpinPhase::FastSpin;
        self.mount_time = None;
    }
}
