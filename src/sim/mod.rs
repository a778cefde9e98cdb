//! Carousel simulation: platter physics, entrance phases, ring layout
//!
//! Everything in this module is pure and deterministic. State advances only
//! through explicit `update`/`tick` calls with a caller-supplied timestep;
//! there is no wall clock and no rendering dependency, so the same input
//! script always replays to the same rotation.

pub mod layout;
pub mod phase;
pub mod physics;
pub mod tick;

pub use layout::{
    ItemPlacement, collider_offset, collider_size, item_placement, ring_placements, slot_angle,
};
pub use phase::{SpinPhase, SpinPhaseController};
pub use physics::{RotationPhysics, TouchSample};
pub use tick::{Carousel, CarouselEvent, FrameInput, tick};
