//! Word-wrapped text block layout
//!
//! Lays out plain text as a block of greedily wrapped lines and submits one
//! draw call per word.
//!
//! # Layout Coordinate System
//!
//! - Origin (0, 0) is the top-left corner of the block
//! - +X axis points right
//! - +Y axis points down (screen convention)
//!
//! Line breaks in the input are treated as ordinary word separators, so a
//! block only wraps when the next word would overflow the wrap width. Words
//! are never split: a word wider than the wrap width gets a line to itself
//! and widens the block.

use serde::{Deserialize, Serialize};

use super::metrics::{FontMetrics, FontResult};
use super::TextError;
use crate::foundation::math::{Color, Vec2};
use crate::render::GlyphRenderer;

/// Reference string for line height
const LINE_HEIGHT_SAMPLE: &str = "ABC";

/// Per-call text styling, with documented defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBlockOptions {
    /// Text tint (default black)
    pub color: Color,
    /// Request the bold rendering path (default false)
    pub bold: bool,
    /// Uniform multiplier on glyph size and all metrics (default 1)
    pub scale: f32,
}

impl Default for TextBlockOptions {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            bold: false,
            scale: 1.0,
        }
    }
}

impl TextBlockOptions {
    /// Set the tint color
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the bold flag
    pub const fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set the uniform scale
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Measured dimensions of a laid-out block
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutResult {
    /// Widest used line width
    pub width: f32,
    /// Line height times the number of lines
    pub height: f32,
}

impl LayoutResult {
    /// Size of an absent block
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    /// Dimensions as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// One word with its measured width and block-local position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphRun<'t> {
    /// The word, borrowed from the input text
    pub word: &'t str,
    /// Measured width at the active scale
    pub width: f32,
    /// Top-left corner relative to the block origin
    pub position: Vec2,
}

/// A measured block that has not been drawn yet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextBlock<'t> {
    /// Words in reading order
    pub runs: Vec<GlyphRun<'t>>,
    /// Block dimensions
    pub size: LayoutResult,
    /// Height of one line at the active scale
    pub line_height: f32,
    /// Number of lines the block occupies
    pub line_count: usize,
}

impl TextBlock<'_> {
    /// The block for absent text
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Running cursor state for a single layout call
struct LayoutState {
    cursor_offset: f32,
    line_offset: f32,
    line_height: f32,
    block_width: f32,
    line_count: usize,
}

impl LayoutState {
    /// A line is always reserved, even before the first word
    const fn new(line_height: f32) -> Self {
        Self {
            cursor_offset: 0.0,
            line_offset: 0.0,
            line_height,
            block_width: 0.0,
            line_count: 1,
        }
    }

    /// Whether `width` must start a new line
    ///
    /// A line holding nothing yet (cursor under one whole pixel) never wraps.
    fn needs_break(&self, width: f32, wrap_width: f32) -> bool {
        self.cursor_offset + width > wrap_width && self.cursor_offset.trunc() != 0.0
    }

    fn break_line(&mut self) {
        self.cursor_offset = 0.0;
        self.line_offset += self.line_height;
        self.line_count += 1;
    }

    /// Place a word at the cursor and advance past it and one space
    fn place(&mut self, width: f32, space_width: f32) -> Vec2 {
        let position = Vec2::new(self.cursor_offset, self.line_offset);
        self.block_width = self.block_width.max(self.cursor_offset + width);
        self.cursor_offset += width + space_width;
        position
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(self) -> (LayoutResult, usize) {
        let size = LayoutResult {
            width: self.block_width,
            height: self.line_height * self.line_count as f32,
        };
        (size, self.line_count)
    }
}

/// Whether `ch` separates words; line breaks count as plain separators
///
/// No-break spaces are part of the word they join.
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() && !matches!(ch, '\u{a0}' | '\u{2007}' | '\u{202f}')
}

/// Split text into words, dropping the empty tokens between repeated separators
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|word| !word.is_empty())
}

/// Text block layout engine over a font metrics provider
pub struct TextBlockLayout<'m, M: ?Sized> {
    metrics: &'m M,
}

impl<'m, M: FontMetrics + ?Sized> TextBlockLayout<'m, M> {
    /// Create a layout engine measuring with `metrics`
    pub const fn new(metrics: &'m M) -> Self {
        Self { metrics }
    }

    /// Height of one line at `scale`
    pub fn line_height(&self, scale: f32) -> FontResult<f32> {
        Ok(self.metrics.measure(LINE_HEIGHT_SAMPLE, scale)?.height)
    }

    /// Marginal width of one inter-word space at `scale`
    ///
    /// Measured as `"A B"` minus `"AB"`, which includes the kerning a space
    /// interrupts rather than trusting the font's space glyph advance.
    pub fn space_width(&self, scale: f32) -> FontResult<f32> {
        let spaced = self.metrics.measure("A B", scale)?.width;
        let joined = self.metrics.measure("AB", scale)?.width;
        Ok(spaced - joined)
    }

    /// Lay out `text` without drawing it
    ///
    /// `None` yields an empty zero-sized block. Any other input, including an
    /// empty or whitespace-only string, occupies at least one line.
    pub fn measure<'t>(
        &self,
        text: Option<&'t str>,
        wrap_width: f32,
        scale: f32,
    ) -> FontResult<TextBlock<'t>> {
        let Some(text) = text else {
            return Ok(TextBlock::empty());
        };

        let line_height = self.line_height(scale)?;
        let space_width = self.space_width(scale)?;
        let mut state = LayoutState::new(line_height);
        let mut runs = Vec::new();

        for word in words(text) {
            let width = self.metrics.measure(word, scale)?.width;
            if state.needs_break(width, wrap_width) {
                state.break_line();
                log::trace!("wrapped before {word:?} onto line {}", state.line_count);
            }

            let position = state.place(width, space_width);
            runs.push(GlyphRun { word, width, position });
        }

        let (size, line_count) = state.finish();
        Ok(TextBlock {
            runs,
            size,
            line_height,
            line_count,
        })
    }

    /// Lay out `text` at `origin` and submit one draw call per word
    ///
    /// The whole block is measured before anything is drawn, so a metrics
    /// failure submits nothing. A renderer failure stops at the failing word.
    ///
    /// # Example
    ///
    /// ```
    /// use sprite_text::prelude::*;
    ///
    /// let metrics = MonospaceMetrics::new(10.0, 12.0);
    /// let mut queue = DrawQueue::new();
    /// let size = TextBlockLayout::new(&metrics)
    ///     .draw(&mut queue, Some("abcd efgh"), Vec2::zeros(), 60.0, &TextBlockOptions::default())
    ///     .unwrap();
    /// assert_eq!(queue.len(), 2);
    /// assert_eq!(size.height, 24.0);
    /// ```
    pub fn draw<R: GlyphRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        text: Option<&str>,
        origin: Vec2,
        wrap_width: f32,
        options: &TextBlockOptions,
    ) -> Result<LayoutResult, TextError> {
        let block = self.measure(text, wrap_width, options.scale)?;

        for run in &block.runs {
            renderer.draw_word(
                run.word,
                origin + run.position,
                options.color,
                options.scale,
                options.bold,
            )?;
        }

        log::trace!(
            "text block at ({}, {}): {} words, {} lines, {}x{}",
            origin.x,
            origin.y,
            block.runs.len(),
            block.line_count,
            block.size.width,
            block.size.height
        );
        Ok(block.size)
    }
}
