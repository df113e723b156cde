//! Cameras: orbit view state driven by pointer drags, plus projection and
//! viewport parameters.
//!
//! # Invariants
//! - Orbit distance never drops below the camera's minimum distance.
//! - A view matrix is always the exact inverse of the camera's pose.

mod orbit;
mod projection;

pub use orbit::OrbitCamera;
pub use projection::{Projection, Viewport};
