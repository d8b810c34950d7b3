//! Sprite lookup table
//!
//! Each sprite is a rectangle inside a named sprite sheet. The table is
//! built once (from defaults or a config file) and only read afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::AssetError;
use crate::foundation::math::Rect;

/// Location of one sprite inside a sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteRegion {
    /// Asset name of the sheet texture
    pub sheet: String,
    /// Coordinates and dimensions within the sheet
    pub source: Rect,
}

impl SpriteRegion {
    /// Create a region on `sheet`
    pub fn new(sheet: impl Into<String>, source: Rect) -> Self {
        Self {
            sheet: sheet.into(),
            source,
        }
    }
}

/// Read-only mapping from sprite name to sheet region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteTable {
    sprites: BTreeMap<String, SpriteRegion>,
}

impl SpriteTable {
    /// Letter background, including edges and corners
    pub const LETTER: &'static str = "letter";

    /// A single pixel that can be tinted and stretched to draw a line
    pub const LINE_PIXEL: &'static str = "line_pixel";

    /// Sheet holding the letter background
    pub const LETTER_SHEET: &'static str = "LooseSprites/letterBG";

    /// Sheet holding the cursor and form sprites
    pub const CURSORS_SHEET: &'static str = "LooseSprites/Cursors";

    /// A table with no sprites
    pub fn empty() -> Self {
        Self {
            sprites: BTreeMap::new(),
        }
    }

    /// Add or replace a sprite while building the table
    #[must_use]
    pub fn with_sprite(mut self, name: impl Into<String>, region: SpriteRegion) -> Self {
        self.sprites.insert(name.into(), region);
        self
    }

    /// Look up a sprite by name
    pub fn get(&self, name: &str) -> Result<&SpriteRegion, AssetError> {
        self.sprites
            .get(name)
            .ok_or_else(|| AssetError::UnknownSprite(name.to_owned()))
    }

    /// The letter background sprite
    pub fn letter(&self) -> Result<&SpriteRegion, AssetError> {
        self.get(Self::LETTER)
    }

    /// The stretchable line pixel sprite
    pub fn line_pixel(&self) -> Result<&SpriteRegion, AssetError> {
        self.get(Self::LINE_PIXEL)
    }

    /// Sprite names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sprites.keys().map(String::as_str)
    }

    /// Number of sprites
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Whether the table has no sprites
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl Default for SpriteTable {
    fn default() -> Self {
        Self::empty()
            .with_sprite(
                Self::LETTER,
                SpriteRegion::new(Self::LETTER_SHEET, Rect::new(0, 0, 320, 180)),
            )
            .with_sprite(
                Self::LINE_PIXEL,
                SpriteRegion::new(Self::CURSORS_SHEET, Rect::new(123, 1889, 1, 1)),
            )
    }
}
