//! Texture registry
//!
//! Caching [`AssetStore`] that tracks sprite sheets by name. Sheets are
//! either registered directly by the backend that uploaded them or loaded
//! lazily from the search paths with the `image` crate.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use slotmap::SlotMap;

use super::{AssetError, AssetStore, TextureHandle};

/// Information about a registered texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    /// Asset name the texture was requested under
    pub name: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// File the texture was loaded from, if any
    pub path: Option<PathBuf>,
}

/// Name-to-handle texture cache
#[derive(Debug, Default)]
pub struct TextureRegistry {
    /// Directories searched, in order, for sheet files
    search_paths: Vec<PathBuf>,
    /// Texture storage
    textures: SlotMap<TextureHandle, TextureInfo>,
    /// Cached name lookups
    by_name: HashMap<String, TextureHandle>,
}

impl TextureRegistry {
    /// Create a registry that loads sheets from `search_paths`
    pub fn new<I, P>(search_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Register a texture that is already resident, returning its handle
    ///
    /// Registering an existing name updates its dimensions and keeps the handle.
    pub fn insert(&mut self, name: &str, width: u32, height: u32) -> TextureHandle {
        if let Some(&handle) = self.by_name.get(name) {
            if let Some(info) = self.textures.get_mut(handle) {
                info.width = width;
                info.height = height;
            }
            return handle;
        }

        let handle = self.textures.insert(TextureInfo {
            name: name.to_owned(),
            width,
            height,
            path: None,
        });
        self.by_name.insert(name.to_owned(), handle);
        log::debug!("Registered texture {name:?} ({width}x{height}) as {handle:?}");
        handle
    }

    /// Get texture information
    pub fn info(&self, handle: TextureHandle) -> Result<&TextureInfo, AssetError> {
        self.textures
            .get(handle)
            .ok_or(AssetError::UnknownTexture(handle))
    }

    /// Get number of known textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// File name a sheet is stored under, relative to a search path
    ///
    /// Accepts `\` separators and assumes `.png` when no extension is given.
    fn relative_path(name: &str) -> PathBuf {
        let mut path: PathBuf = name.split(['/', '\\']).filter(|part| !part.is_empty()).collect();
        if path.extension().is_none() {
            path.set_extension("png");
        }
        path
    }

    fn locate(&self, name: &str) -> Option<PathBuf> {
        let relative = Self::relative_path(name);
        self.search_paths
            .iter()
            .map(|root| root.join(&relative))
            .find(|candidate| candidate.is_file())
    }

    fn load(&mut self, name: &str, path: &Path) -> Result<TextureHandle, AssetError> {
        let (width, height) = image::image_dimensions(path)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {e}", path.display())))?;

        let handle = self.textures.insert(TextureInfo {
            name: name.to_owned(),
            width,
            height,
            path: Some(path.to_path_buf()),
        });
        self.by_name.insert(name.to_owned(), handle);

        log::info!("Loaded texture {name:?} {width}x{height} from {}", path.display());
        Ok(handle)
    }
}

impl AssetStore for TextureRegistry {
    fn get_texture(&mut self, name: &str) -> Result<TextureHandle, AssetError> {
        if let Some(&handle) = self.by_name.get(name) {
            return Ok(handle);
        }

        let path = self
            .locate(name)
            .ok_or_else(|| AssetError::NotFound(name.to_owned()))?;
        self.load(name, &path)
    }
}
