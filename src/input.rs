//! Pointer input translation
//!
//! Bridges raw pointer events to physics inputs: horizontal drag deltas
//! become platter forces, pointer speed over a short sliding window becomes
//! fling velocity, wheel deltas become nudges. Also classifies release
//! gestures (tap, swipe, long press) from start/end samples alone, so hosts
//! can route taps to selection without consulting the tracker.

use glam::Vec2;

use crate::sim::RotationPhysics;
use crate::tuning::InteractionTuning;

/// Minimum travel for a swipe, px
pub const SWIPE_MIN_DISTANCE: f32 = 50.0;
/// Maximum press duration for a swipe, seconds
pub const SWIPE_MAX_DURATION: f32 = 0.5;
/// Maximum travel for a tap, px
pub const TAP_MAX_DISTANCE: f32 = 10.0;
/// Maximum press duration for a tap, seconds
pub const TAP_MAX_DURATION: f32 = 0.2;
/// Maximum travel for a long press, px
pub const LONG_PRESS_MAX_DISTANCE: f32 = 20.0;
/// Minimum press duration for a long press, seconds
pub const LONG_PRESS_MIN_DURATION: f32 = 0.8;

/// Follows one pointer drag and feeds the physics as it moves
///
/// Deltas are measured against the previous sample before the sample is
/// stored, so the first move after `begin` already produces force. Times
/// are host-clock seconds; velocities are kept in px/ms to match the
/// fling scale.
#[derive(Debug, Clone)]
pub struct DragTracker {
    tuning: InteractionTuning,
    dragging: bool,
    last_position: Vec2,
    last_time: f32,
    /// (velocity px/ms, sample time) pairs inside the sliding window
    velocity_window: Vec<(f32, f32)>,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(InteractionTuning::default())
    }
}

impl DragTracker {
    pub fn new(mut tuning: InteractionTuning) -> Self {
        tuning.validate();
        Self {
            tuning,
            dragging: false,
            last_position: Vec2::ZERO,
            last_time: 0.0,
            velocity_window: Vec::new(),
        }
    }

    /// Start a drag at `position`, clearing any previous fling history
    pub fn begin(&mut self, position: Vec2, time: f32) {
        if !position.is_finite() || !time.is_finite() {
            return;
        }
        log::debug!("drag begin at {position:?}");
        self.dragging = true;
        self.last_position = position;
        self.last_time = time;
        self.velocity_window.clear();
    }

    /// Feed one pointer move; applies drag force and fling velocity
    pub fn move_to(&mut self, position: Vec2, time: f32, physics: &mut RotationPhysics) {
        if !self.dragging || !position.is_finite() || !time.is_finite() {
            return;
        }
        let dx = position.x - self.last_position.x;

        let dt_ms = (time - self.last_time) * 1000.0;
        if dt_ms > 0.0 {
            self.velocity_window.push((dx / dt_ms, time));
            self.velocity_window
                .retain(|(_, t)| time - t <= self.tuning.velocity_window);
            let sum: f32 = self.velocity_window.iter().map(|(v, _)| v).sum();
            let average = sum / self.velocity_window.len() as f32;
            physics.add_touch_velocity(average * self.tuning.fling_velocity_scale);
        }

        physics.apply_user_force(dx * self.tuning.drag_force_scale);

        self.last_position = position;
        self.last_time = time;
    }

    /// End the drag; fling history sticks around to suppress the click
    /// that browsers deliver after release
    pub fn end(&mut self) {
        if self.dragging {
            log::debug!("drag end, {} velocity samples", self.velocity_window.len());
        }
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// True when the pointer actually moved during the last drag, meaning
    /// the release click should not count as a selection
    pub fn suppress_click(&self) -> bool {
        !self.velocity_window.is_empty()
    }
}

/// Platter force for one wheel event
pub fn wheel_force(delta_y: f32, tuning: &InteractionTuning) -> f32 {
    if !delta_y.is_finite() {
        return 0.0;
    }
    delta_y * tuning.wheel_force_scale
}

/// What a completed press turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    Swipe(SwipeDirection),
    LongPress,
}

/// Dominant screen-space direction of a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Classify a completed press from its endpoints and duration
///
/// Swipe outranks tap outranks long press; presses that fit nothing
/// return `None`. `Down` means toward the bottom of the screen.
pub fn classify_gesture(start: Vec2, end: Vec2, duration: f32) -> Option<Gesture> {
    if !start.is_finite() || !end.is_finite() || !duration.is_finite() || duration < 0.0 {
        return None;
    }
    let delta = end - start;
    let distance = delta.length();

    if distance > SWIPE_MIN_DISTANCE && duration < SWIPE_MAX_DURATION {
        let direction = if delta.x.abs() > delta.y.abs() {
            if delta.x > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            }
        } else if delta.y > 0.0 {
            SwipeDirection::Down
        } else {
            SwipeDirection::Up
        };
        return Some(Gesture::Swipe(direction));
    }
    if distance < TAP_MAX_DISTANCE && duration < TAP_MAX_DURATION {
        return Some(Gesture::Tap);
    }
    if distance < LONG_PRESS_MAX_DISTANCE && duration > LONG_PRESS_MIN_DURATION {
        return Some(Gesture::LongPress);
    }
    None
}
