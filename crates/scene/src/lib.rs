//! Scene: the bodies and cameras the exercises drive, input dispatch, and
//! per-frame composition of model-view matrices.
//!
//! # Invariants
//! - Each body owns its pose; each camera slot owns its rig. Nothing shares
//!   mutable pose state.
//! - Local edits right-multiply; views left-multiply world → camera⁻¹ →
//!   body → part.
//! - Input handling never fails: unbound keys and out-of-range bindings are
//!   ignored.

pub mod body;
pub mod config;
pub mod frame;
pub mod rig;
pub mod scene;

pub use body::{Body, JointAxis, Part};
pub use config::{ConfigError, Preset, SceneConfig, WindowSize};
pub use frame::{DrawItem, DrawKind, Frame, View};
pub use rig::CameraRig;
pub use scene::{Layout, Scene, SceneError};
