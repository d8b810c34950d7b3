//! Rendering module
//!
//! Backend-agnostic draw submission for text blocks and sprites:
//! - backend: capability traits implemented by the GPU layer
//! - commands: recording backend that keeps submission order
//! - bold: faux-bold overdraw adapter
//! - batch: sprite-batch style helpers over a backend

pub mod backend;
pub mod commands;
pub mod bold;
pub mod batch;

pub use backend::{BlockRenderer, GlyphRenderer, RenderError};
pub use commands::{DrawCommand, DrawQueue};
pub use bold::FauxBold;
pub use batch::{BatchError, BlockStyle, SpriteBatch};
