//! Text system
//!
//! Measures and lays out word-wrapped text blocks:
//! - metrics: font measurement capability and providers
//! - layout: greedy word-wrap layout and per-word draw submission

pub mod metrics;
pub mod layout;

pub use metrics::{FontError, FontMetrics, FontResult, FontdueMetrics, MonospaceMetrics, TextSize};
pub use layout::{GlyphRun, LayoutResult, TextBlock, TextBlockLayout, TextBlockOptions};

use crate::render::RenderError;

/// Errors raised while laying out and drawing a text block
///
/// Both variants come from collaborators; layout itself has no failure modes.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The font metrics provider failed
    #[error("Font metrics error: {0}")]
    Font(#[from] FontError),

    /// The glyph renderer failed
    #[error("Glyph render error: {0}")]
    Render(#[from] RenderError),
}
