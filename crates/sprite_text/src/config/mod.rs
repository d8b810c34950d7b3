//! Configuration system
//!
//! Default text and block styles plus the sprite table, loadable from TOML
//! or RON files.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

use crate::assets::SpriteTable;
use crate::render::BlockStyle;
use crate::text::TextBlockOptions;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = Format::of(path)?;
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        let config = match format {
            Format::Toml => Self::from_toml_str(&contents)?,
            Format::Ron => Self::from_ron_str(&contents)?,
        };
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::of(path)? {
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Parse configuration from TOML text
    fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse configuration from RON text
    fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// File formats selected by extension
enum Format {
    Toml,
    Ron,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Default styles and sprite table for a UI draw pass
///
/// Every section is optional in files; missing sections keep their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Defaults for text blocks
    pub text: TextBlockOptions,
    /// Defaults for sprite blocks
    pub block: BlockStyle,
    /// Named sprite regions
    pub sprites: SpriteTable,
}

impl Config for StyleConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SpriteRegion;
    use crate::foundation::math::{Color, Rect};
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_toml_is_default() {
        let config = StyleConfig::from_toml_str("").unwrap();
        assert_eq!(config, StyleConfig::default());
    }

    #[test]
    fn test_toml_overrides_text_section() {
        let config = StyleConfig::from_toml_str(
            r#"
            [text]
            bold = true
            scale = 1.5
            color = { r = 0.2, g = 0.3, b = 0.4 }
            "#,
        )
        .unwrap();

        assert!(config.text.bold);
        assert_relative_eq!(config.text.scale, 1.5);
        assert_eq!(config.text.color, Color::rgb(0.2, 0.3, 0.4));
        assert_eq!(config.block, BlockStyle::default());
        assert_eq!(config.sprites, SpriteTable::default());
    }

    #[test]
    fn test_toml_sprite_table_replaces_defaults() {
        let config = StyleConfig::from_toml_str(
            r#"
            [sprites.line_pixel]
            sheet = "ui/atlas"
            source = { x = 4, y = 8, width = 1, height = 1 }
            "#,
        )
        .unwrap();

        assert_eq!(config.sprites.len(), 1);
        assert_eq!(
            config.sprites.line_pixel().unwrap(),
            &SpriteRegion::new("ui/atlas", Rect::new(4, 8, 1, 1))
        );
    }

    #[test]
    fn test_ron_block_section() {
        let config = StyleConfig::from_ron_str(
            "(block: (color: (r: 1.0, g: 0.5, b: 0.0, a: 0.8), scale: 4.0))",
        )
        .unwrap();

        assert_relative_eq!(config.block.scale, 4.0);
        assert_eq!(config.block.color, Color::rgba(1.0, 0.5, 0.0, 0.8));
        assert_eq!(config.text, TextBlockOptions::default());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = StyleConfig::from_toml_str("[text\nbold = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let result = StyleConfig::load_from_file("styles.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));

        let result = StyleConfig::default().save_to_file("styles.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_save_and_load_round_trip_through_files() {
        let dir = std::env::temp_dir().join(format!("sprite_text_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config = StyleConfig {
            text: TextBlockOptions::default().with_scale(2.0),
            ..StyleConfig::default()
        };

        for name in ["style.toml", "style.ron"] {
            let path = dir.join(name);
            config.save_to_file(&path).unwrap();
            assert_eq!(StyleConfig::load_from_file(&path).unwrap(), config);
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
