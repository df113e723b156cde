//! Input mapping: keys become bindings, pointer drags become camera deltas.
//!
//! # Invariants
//! - Unbound keys are ignored, never reported as errors.
//! - Drag deltas are only produced while a tracked button is held.

pub mod action;
pub mod drag;
pub mod event;
pub mod keymap;

pub use action::{Binding, Target};
pub use drag::{Drag, DragTracker};
pub use event::{InputEvent, Modifiers, PointerButton};
pub use keymap::Keymap;
