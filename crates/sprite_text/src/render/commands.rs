//! Recorded draw commands
//!
//! [`DrawQueue`] implements both render capabilities by appending a
//! [`DrawCommand`] per call. The GPU layer replays the queue once per frame;
//! tests inspect it directly.

use super::backend::{BlockRenderer, GlyphRenderer, RenderError};
use crate::assets::TextureHandle;
use crate::foundation::math::{Color, Rect, Vec2};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// One run of text
    Word {
        /// Text to draw
        text: String,
        /// Top-left corner in screen pixels
        position: Vec2,
        /// Tint color
        color: Color,
        /// Uniform glyph scale
        scale: f32,
        /// Whether the bold path was requested
        bold: bool,
    },
    /// A sprite-sheet region at its natural size times `scale`
    Block {
        /// Sheet texture
        texture: TextureHandle,
        /// Region of the sheet
        source: Rect,
        /// Top-left corner in screen pixels
        position: Vec2,
        /// Tint color
        color: Color,
        /// Uniform scale
        scale: f32,
    },
    /// A sprite-sheet region stretched to a destination rectangle
    Stretched {
        /// Sheet texture
        texture: TextureHandle,
        /// Region of the sheet
        source: Rect,
        /// Destination in screen pixels
        destination: Rect,
        /// Tint color
        color: Color,
    },
}

/// Ordered list of draw commands for one frame
///
/// Commands stay in submission order; nothing is sorted, so overlapping UI
/// layers exactly as it was submitted.
#[derive(Debug, Clone, Default)]
pub struct DrawQueue {
    commands: Vec<DrawCommand>,
}

impl DrawQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all recorded commands, keeping the allocation
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded commands in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Take all recorded commands, leaving the queue empty
    pub fn drain(&mut self) -> std::vec::Drain<'_, DrawCommand> {
        self.commands.drain(..)
    }

    /// Iterate over recorded word commands as `(text, position)`
    pub fn words(&self) -> impl Iterator<Item = (&str, Vec2)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Word { text, position, .. } => Some((text.as_str(), *position)),
            _ => None,
        })
    }

    /// Replay every command through `draw_func` in submission order
    pub fn execute<F>(&self, mut draw_func: F)
    where
        F: FnMut(&DrawCommand),
    {
        for command in &self.commands {
            draw_func(command);
        }
    }
}

impl GlyphRenderer for DrawQueue {
    fn draw_word(
        &mut self,
        word: &str,
        position: Vec2,
        color: Color,
        scale: f32,
        bold: bool,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Word {
            text: word.to_owned(),
            position,
            color,
            scale,
            bold,
        });
        Ok(())
    }
}

impl BlockRenderer for DrawQueue {
    fn draw_block(
        &mut self,
        texture: TextureHandle,
        source: Rect,
        position: Vec2,
        color: Color,
        scale: f32,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Block {
            texture,
            source,
            position,
            color,
            scale,
        });
        Ok(())
    }

    fn draw_stretched(
        &mut self,
        texture: TextureHandle,
        source: Rect,
        destination: Rect,
        color: Color,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Stretched {
            texture,
            source,
            destination,
            color,
        });
        Ok(())
    }
}
