//! # Modulo Renderer
//!
//! Pan/zoom viewport for the composition canvas and the frame data the view
//! layer draws from. Drawing itself happens outside Rust; this crate only
//! defines the transform and the JSON-serializable frame contract.

pub mod viewport;
pub mod render_data;

pub use viewport::{Viewport, ZoomLimits};
pub use render_data::{GhostStyle, RenderFrame, RenderGhost, RenderShape};
