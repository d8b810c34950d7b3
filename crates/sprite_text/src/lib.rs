//! # Sprite Text
//!
//! Word-wrapped text blocks and sprite-sheet drawing helpers for 2D UI.
//!
//! ## Features
//!
//! - **Text Blocks**: Greedy word wrapping against any font metrics provider
//! - **Sprite Tables**: Named sprite regions resolved through an asset store
//! - **Backend Agnostic**: Rendering goes through small capability traits
//! - **Configurable**: Default styles and sprite tables load from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sprite_text::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let metrics = MonospaceMetrics::new(8.0, 16.0);
//!     let mut queue = DrawQueue::new();
//!
//!     let size = SpriteBatch::new(&mut queue).draw_string_block(
//!         &metrics,
//!         Some("The quick brown fox jumps over the lazy dog"),
//!         Vec2::new(32.0, 32.0),
//!         160.0,
//!         &TextBlockOptions::default(),
//!     )?;
//!
//!     println!("{}x{} in {} draw calls", size.width, size.height, queue.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod assets;
pub mod config;
pub mod render;
pub mod text;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, AssetStore, SpriteRegion, SpriteTable, TextureHandle, TextureRegistry},
        config::{Config, ConfigError, StyleConfig},
        foundation::math::{Color, Rect, Vec2},
        render::{
            BatchError, BlockRenderer, BlockStyle, DrawCommand, DrawQueue, FauxBold, GlyphRenderer,
            RenderError, SpriteBatch,
        },
        text::{
            FontError, FontMetrics, FontdueMetrics, GlyphRun, LayoutResult, MonospaceMetrics,
            TextBlock, TextBlockLayout, TextBlockOptions, TextError, TextSize,
        },
    };
}
