//! Render Backend Traits
//!
//! Defines the draw-submission capabilities that text and sprite helpers
//! record into. Keeps layout independent of the GPU API underneath. Calls
//! are drawn in submission order, so later calls paint over earlier ones.

use crate::assets::TextureHandle;
use crate::foundation::math::{Color, Rect, Vec2};

/// Errors reported by a draw-submission backend
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Backend-specific submission failure
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Capability that draws one run of text
pub trait GlyphRenderer {
    /// Draw `word` with its top-left corner at `position`
    ///
    /// `bold` selects the emphasis rendering path; backends without a bold
    /// face can be wrapped in [`FauxBold`](super::FauxBold).
    fn draw_word(
        &mut self,
        word: &str,
        position: Vec2,
        color: Color,
        scale: f32,
        bold: bool,
    ) -> Result<(), RenderError>;
}

/// Capability that blits regions of a sprite sheet
pub trait BlockRenderer {
    /// Draw `source` from `texture` at `position`, uniformly scaled
    fn draw_block(
        &mut self,
        texture: TextureHandle,
        source: Rect,
        position: Vec2,
        color: Color,
        scale: f32,
    ) -> Result<(), RenderError>;

    /// Stretch `source` from `texture` over the `destination` rectangle
    fn draw_stretched(
        &mut self,
        texture: TextureHandle,
        source: Rect,
        destination: Rect,
        color: Color,
    ) -> Result<(), RenderError>;
}

impl<R: GlyphRenderer + ?Sized> GlyphRenderer for &mut R {
    fn draw_word(
        &mut self,
        word: &str,
        position: Vec2,
        color: Color,
        scale: f32,
        bold: bool,
    ) -> Result<(), RenderError> {
        (**self).draw_word(word, position, color, scale, bold)
    }
}

impl<R: BlockRenderer + ?Sized> BlockRenderer for &mut R {
    fn draw_block(
        &mut self,
        texture: TextureHandle,
        source: Rect,
        position: Vec2,
        color: Color,
        scale: f32,
    ) -> Result<(), RenderError> {
        (**self).draw_block(texture, source, position, color, scale)
    }

    fn draw_stretched(
        &mut self,
        texture: TextureHandle,
        source: Rect,
        destination: Rect,
        color: Color,
    ) -> Result<(), RenderError> {
        (**self).draw_stretched(texture, source, destination, color)
    }
}
