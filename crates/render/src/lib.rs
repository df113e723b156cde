//! Rendering collaborator: consumes composed frames, never scene state.
//!
//! # Invariants
//! - A renderer cannot mutate the scene; it only reads a [`Frame`].
//! - Frame buffer rows are stored bottom-up, like GL pixel transfers.
//!
//! [`Frame`]: skyframe_scene::Frame

mod framebuffer;
mod gl;
mod points;
mod renderer;

pub use framebuffer::{FrameBuffer, RenderError, Rgb};
pub use gl::{GlMatrices, gl_matrix, gl_matrix_bytes};
pub use points::{PointRenderer, kind_color, project_origin};
pub use renderer::{DebugTextRenderer, Renderer};
