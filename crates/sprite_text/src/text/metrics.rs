//! Font metrics providers
//!
//! Layout only needs to know how big a string is at a given scale. The
//! [`FontMetrics`] trait is that capability; this module also ships a
//! TrueType provider backed by `fontdue` and a fixed-cell provider for
//! bitmap fonts.

use fontdue::{Font, FontSettings};

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur while loading or measuring a font
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Failed to load font from file or data
    #[error("Failed to load font: {0}")]
    LoadError(String),

    /// The font has no horizontal line metrics, so line height is unknown
    #[error("Font has no horizontal line metrics at {0}px")]
    MissingLineMetrics(f32),

    /// The provider could not measure the given text
    #[error("Failed to measure {text:?}: {reason}")]
    Measure {
        /// Text that was being measured
        text: String,
        /// Provider-specific failure description
        reason: String,
    },
}

/// Measured pixel extent of a string
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSize {
    /// Horizontal extent in pixels
    pub width: f32,
    /// Vertical extent in pixels
    pub height: f32,
}

impl TextSize {
    /// Create a new size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Capability that reports the pixel size of arbitrary strings
pub trait FontMetrics {
    /// Measure `text` drawn at the uniform `scale`
    ///
    /// Multi-line strings report the widest line and the combined height of
    /// all lines.
    fn measure(&self, text: &str, scale: f32) -> FontResult<TextSize>;
}

impl<M: FontMetrics + ?Sized> FontMetrics for &M {
    fn measure(&self, text: &str, scale: f32) -> FontResult<TextSize> {
        (**self).measure(text, scale)
    }
}

/// Fixed-cell metrics for bitmap fonts where every glyph has the same advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Horizontal advance of every character at scale 1
    pub advance: f32,
    /// Height of one line at scale 1
    pub line_height: f32,
}

impl MonospaceMetrics {
    /// Create metrics for a font with the given cell size
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self { advance, line_height }
    }
}

impl FontMetrics for MonospaceMetrics {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &str, scale: f32) -> FontResult<TextSize> {
        let mut widest = 0usize;
        let mut lines = 0usize;
        for line in text.split('\n') {
            widest = widest.max(line.trim_end_matches('\r').chars().count());
            lines += 1;
        }

        Ok(TextSize::new(
            widest as f32 * self.advance * scale,
            lines as f32 * self.line_height * scale,
        ))
    }
}

/// TrueType/OpenType metrics backed by `fontdue`
///
/// Widths are the sum of horizontal advances plus kerning; height is the
/// font's line spacing, both at `pixel_size * scale`.
pub struct FontdueMetrics {
    /// Underlying fontdue font
    font: Font,

    /// Font size in pixels at scale 1
    pixel_size: f32,
}

impl FontdueMetrics {
    /// Load metrics from TrueType/OpenType font data
    ///
    /// # Arguments
    ///
    /// * `font_data` - Raw font file bytes (TTF or OTF format)
    /// * `pixel_size` - Nominal size in pixels at scale 1
    pub fn from_bytes(font_data: &[u8], pixel_size: f32) -> FontResult<Self> {
        let font = Font::from_bytes(font_data, FontSettings::default())
            .map_err(|e| FontError::LoadError(format!("fontdue error: {e}")))?;

        log::info!("Loaded font metrics at {pixel_size}px size");

        Ok(Self { font, pixel_size })
    }

    /// Nominal pixel size at scale 1
    pub const fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    fn line_width(&self, line: &str, px: f32) -> f32 {
        let mut width = 0.0;
        let mut previous = None;
        for ch in line.chars() {
            if let Some(prev) = previous {
                width += self.font.horizontal_kern(prev, ch, px).unwrap_or(0.0);
            }
            width += self.font.metrics(ch, px).advance_width;
            previous = Some(ch);
        }
        width
    }
}

impl FontMetrics for FontdueMetrics {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &str, scale: f32) -> FontResult<TextSize> {
        let px = self.pixel_size * scale;
        let line_size = self
            .font
            .horizontal_line_metrics(px)
            .ok_or(FontError::MissingLineMetrics(px))?
            .new_line_size;

        let mut widest = 0.0f32;
        let mut lines = 0usize;
        for line in text.split('\n') {
            widest = widest.max(self.line_width(line.trim_end_matches('\r'), px));
            lines += 1;
        }

        Ok(TextSize::new(widest, lines as f32 * line_size))
    }
}

impl std::fmt::Debug for FontdueMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontdueMetrics")
            .field("font", &"fontdue::Font")
            .field("pixel_size", &self.pixel_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monospace_single_line() {
        let metrics = MonospaceMetrics::new(8.0, 16.0);
        let size = metrics.measure("hello", 1.0).unwrap();
        assert_relative_eq!(size.width, 40.0);
        assert_relative_eq!(size.height, 16.0);
    }

    #[test]
    fn test_monospace_scales_uniformly() {
        let metrics = MonospaceMetrics::new(8.0, 16.0);
        let size = metrics.measure("AB", 2.5).unwrap();
        assert_relative_eq!(size.width, 40.0);
        assert_relative_eq!(size.height, 40.0);
    }

    #[test]
    fn test_monospace_multi_line_uses_widest_line() {
        let metrics = MonospaceMetrics::new(10.0, 12.0);
        let size = metrics.measure("ab\r\nabcd\nc", 1.0).unwrap();
        assert_relative_eq!(size.width, 40.0);
        assert_relative_eq!(size.height, 36.0);
    }

    #[test]
    fn test_monospace_empty_string_is_one_line() {
        let metrics = MonospaceMetrics::new(10.0, 12.0);
        let size = metrics.measure("", 1.0).unwrap();
        assert_relative_eq!(size.width, 0.0);
        assert_relative_eq!(size.height, 12.0);
    }

    const DEJAVU_MONO: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fonts/DejaVuSansMono.ttf"
    ));

    #[test]
    fn test_fontdue_space_adds_width() {
        let metrics = FontdueMetrics::from_bytes(DEJAVU_MONO, 16.0).unwrap();
        let tight = metrics.measure("AB", 1.0).unwrap();
        let spaced = metrics.measure("A B", 1.0).unwrap();

        assert!(tight.width > 0.0);
        assert!(tight.width < spaced.width);
        assert_relative_eq!(tight.height, spaced.height);
    }

    #[test]
    fn test_fontdue_height_scales_with_scale() {
        let metrics = FontdueMetrics::from_bytes(DEJAVU_MONO, 16.0).unwrap();
        let single = metrics.measure("ABC", 1.0).unwrap();
        let double = metrics.measure("ABC", 2.0).unwrap();

        assert!(single.height > 0.0);
        assert_relative_eq!(double.height, single.height * 2.0, max_relative = 1e-4);
        assert_relative_eq!(double.width, single.width * 2.0, max_relative = 1e-4);
    }

    #[test]
    fn test_fontdue_counts_lines() {
        let metrics = FontdueMetrics::from_bytes(DEJAVU_MONO, 16.0).unwrap();
        let one = metrics.measure("a", 1.0).unwrap();
        let two = metrics.measure("a\r\nb", 1.0).unwrap();

        assert_relative_eq!(two.height, one.height * 2.0, max_relative = 1e-4);
        assert_relative_eq!(two.width, one.width, max_relative = 1e-4);
    }

    #[test]
    fn test_fontdue_drives_block_layout() {
        let metrics = FontdueMetrics::from_bytes(DEJAVU_MONO, 16.0).unwrap();
        let layout = crate::text::TextBlockLayout::new(&metrics);

        assert!(layout.space_width(1.0).unwrap() > 0.0);
        let wide = layout.measure(Some("one two three"), 10_000.0, 1.0).unwrap();
        let narrow = layout.measure(Some("one two three"), 1.0, 1.0).unwrap();
        assert_eq!(wide.line_count, 1);
        assert_eq!(narrow.line_count, 3);
        assert_relative_eq!(narrow.size.height, wide.size.height * 3.0, max_relative = 1e-4);
    }

    #[test]
    fn test_fontdue_rejects_garbage() {
        let result = FontdueMetrics::from_bytes(b"definitely not a font", 16.0);
        assert!(matches!(result, Err(FontError::LoadError(_))));
    }
}
