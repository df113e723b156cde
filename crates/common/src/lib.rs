//! Shared pose algebra: rigid poses, local-frame commands and step sizes.
//!
//! # Invariants
//! - A pose's rotation is always unit length.
//! - Local increments right-multiply the pose they edit.

pub mod command;
pub mod pose;

pub use command::{Command, Step};
pub use pose::{ORTHONORMAL_TOLERANCE, Pose, PoseError};
