//! Faux-bold text rendering
//!
//! Thickens glyphs by drawing the regular face four times, offset by one
//! scaled pixel to the right, down, and diagonally.

use super::backend::{BlockRenderer, GlyphRenderer, RenderError};
use crate::assets::TextureHandle;
use crate::foundation::math::{Color, Rect, Vec2};

/// Glyph renderer adapter that emulates bold by overdrawing
///
/// Regular words pass straight through. Block draws are forwarded untouched
/// when the inner renderer supports them.
#[derive(Debug, Clone, Default)]
pub struct FauxBold<R> {
    inner: R,
}

impl<R> FauxBold<R> {
    /// Overdraw offsets in units of one scaled pixel
    pub const OFFSETS: [(f32, f32); 4] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

    /// Wrap a renderer
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped renderer
    pub const fn inner(&self) -> &R {
        &self.inner
    }

    /// Unwrap the renderer
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: GlyphRenderer> GlyphRenderer for FauxBold<R> {
    fn draw_word(
        &mut self,
        word: &str,
        position: Vec2,
        color: Color,
        scale: f32,
        bold: bool,
    ) -> Result<(), RenderError> {
        if !bold {
            return self.inner.draw_word(word, position, color, scale, false);
        }

        for (dx, dy) in Self::OFFSETS {
            let offset = Vec2::new(dx * scale, dy * scale);
            self.inner.draw_word(word, position + offset, color, scale, false)?;
        }
        Ok(())
    }
}

impl<R: BlockRenderer> BlockRenderer for FauxBold<R> {
    fn draw_block(
        &mut self,
        texture: TextureHandle,
        source: Rect,
        position: Vec2,
        color: Color,
        scale: f32,
    ) -> Result<(), RenderError> {
        self.inner.draw_block(texture, source, position, color, scale)
    }

    fn draw_stretched(
        &mut self,
        texture: TextureHandle,
        source: Rect,
        destination: Rect,
        color: Color,
    ) -> Result<(), RenderError> {
        self.inner.draw_stretched(texture, source, destination, color)
    }
}
