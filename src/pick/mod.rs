//! Pointer-to-item hit testing
//!
//! Turns a pointer position in viewport pixels into a carousel item index.
//! Two strategies: cast a camera ray against each item's clickable volume,
//! or skip the geometry entirely and map the pointer's bearing around the
//! screen center onto the ring. Callers pick one; nothing falls back
//! silently, so a miss always means a miss.

pub mod camera;
pub mod ray;
pub mod resolver;

pub use camera::{Camera, Viewport};
pub use ray::{OrientedBox, Ray};
pub use resolver::{PickStrategy, pick_angular, pick_geometry, resolve};
