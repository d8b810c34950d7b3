//! Asset management system
//!
//! Resolves named sprite sheets to texture handles and holds the sprite
//! lookup table.

pub mod sprites;
pub mod texture_registry;

pub use sprites::{SpriteRegion, SpriteTable};
pub use texture_registry::{TextureInfo, TextureRegistry};

use thiserror::Error;

slotmap::new_key_type! {
    /// Handle to a texture known to an [`AssetStore`]
    pub struct TextureHandle;
}

/// Capability that resolves sprite sheet names to texture handles
///
/// Implementations cache: once a name resolves, later lookups return the
/// same handle without touching storage again.
pub trait AssetStore {
    /// Resolve `name` to a texture, loading it on first use
    fn get_texture(&mut self, name: &str) -> Result<TextureHandle, AssetError>;
}

impl<A: AssetStore + ?Sized> AssetStore for &mut A {
    fn get_texture(&mut self, name: &str) -> Result<TextureHandle, AssetError> {
        (**self).get_texture(name)
    }
}

/// Asset system errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found in any search path
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// No sprite with this name in the sprite table
    #[error("Unknown sprite: {0}")]
    UnknownSprite(String),

    /// Handle does not belong to this store
    #[error("Unknown texture handle: {0:?}")]
    UnknownTexture(TextureHandle),
}
