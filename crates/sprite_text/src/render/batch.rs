//! Sprite batch helpers
//!
//! [`SpriteBatch`] wraps a borrowed draw-submission backend and exposes the
//! block, line, and text block operations UI code draws with.

use serde::{Deserialize, Serialize};

use super::backend::{BlockRenderer, GlyphRenderer, RenderError};
use crate::assets::{AssetError, AssetStore, SpriteRegion, SpriteTable, TextureHandle};
use crate::foundation::math::{Color, Rect, Vec2};
use crate::text::{FontMetrics, LayoutResult, TextBlockLayout, TextBlockOptions, TextError};

/// Errors from batch operations that touch assets as well as the backend
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// Sprite or sheet lookup failed
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// The backend rejected a draw
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Text block layout failed
    #[error("Text error: {0}")]
    Text(#[from] TextError),
}

/// Tint and scale for block draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockStyle {
    /// Sprite tint (default white, i.e. untinted)
    pub color: Color,
    /// Uniform scale (default 1)
    pub scale: f32,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            scale: 1.0,
        }
    }
}

impl BlockStyle {
    /// Set the tint color
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the uniform scale
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Thin wrapper over a draw-submission backend
///
/// Every call is forwarded immediately, so draws land in the order the
/// wrapper's methods are invoked.
pub struct SpriteBatch<'r, R: ?Sized> {
    renderer: &'r mut R,
}

impl<'r, R: ?Sized> SpriteBatch<'r, R> {
    /// Wrap `renderer` for the duration of a draw pass
    pub fn new(renderer: &'r mut R) -> Self {
        Self { renderer }
    }

    /// Borrow the wrapped backend
    pub fn renderer(&mut self) -> &mut R {
        &mut *self.renderer
    }
}

impl<R: BlockRenderer + ?Sized> SpriteBatch<'_, R> {
    /// Draw a sprite-sheet region with its top-left corner at `(x, y)`
    pub fn draw_block(
        &mut self,
        sheet: TextureHandle,
        sprite: Rect,
        x: f32,
        y: f32,
        style: BlockStyle,
    ) -> Result<(), RenderError> {
        self.renderer
            .draw_block(sheet, sprite, Vec2::new(x, y), style.color, style.scale)
    }

    /// Resolve `sprite`'s sheet through `assets` and draw it at `(x, y)`
    pub fn draw_sprite<A: AssetStore + ?Sized>(
        &mut self,
        assets: &mut A,
        sprite: &SpriteRegion,
        x: f32,
        y: f32,
        style: BlockStyle,
    ) -> Result<(), BatchError> {
        let sheet = assets.get_texture(&sprite.sheet)?;
        self.draw_block(sheet, sprite.source, x, y, style)?;
        Ok(())
    }

    /// Draw a solid line by stretching the line pixel sprite over `size`
    ///
    /// The destination rectangle is truncated to whole pixels.
    pub fn draw_line<A: AssetStore + ?Sized>(
        &mut self,
        assets: &mut A,
        sprites: &SpriteTable,
        x: f32,
        y: f32,
        size: Vec2,
        color: Color,
    ) -> Result<(), BatchError> {
        let pixel = sprites.line_pixel()?;
        let sheet = assets.get_texture(&pixel.sheet)?;
        let destination = Rect::from_truncated(x, y, size.x, size.y);
        self.renderer
            .draw_stretched(sheet, pixel.source, destination, color)?;
        Ok(())
    }
}

impl<R: GlyphRenderer + ?Sized> SpriteBatch<'_, R> {
    /// Draw a block of text wrapped at `wrap_width`, returning its dimensions
    ///
    /// `None` draws nothing and returns a zero size.
    pub fn draw_string_block<M: FontMetrics + ?Sized>(
        &mut self,
        metrics: &M,
        text: Option<&str>,
        position: Vec2,
        wrap_width: f32,
        options: &TextBlockOptions,
    ) -> Result<LayoutResult, TextError> {
        TextBlockLayout::new(metrics).draw(&mut *self.renderer, text, position, wrap_width, options)
    }
}
