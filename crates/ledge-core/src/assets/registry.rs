use std::collections::HashMap;

use crate::assets::manifest::AssetManifest;

/// Resolved sprite footprint.
///
/// This is the movement-facing half of the sprite contract: entities need a
/// pixel footprint to derive bounding edges. Image data and draw calls live
/// with the renderer, on the other side of the asset boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Sprite {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Store of named sprites, built from an [`AssetManifest`].
/// Resolves identifier strings to footprints for entity construction.
pub struct SpriteStore {
    sprites: HashMap<String, Sprite>,
}

impl SpriteStore {
    pub fn new() -> Self {
        Self {
            sprites: HashMap::new(),
        }
    }

    /// Build a store from a parsed manifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut sprites = HashMap::with_capacity(manifest.sprites.len());
        for (name, desc) in &manifest.sprites {
            sprites.insert(name.clone(), Sprite::new(desc.width, desc.height));
        }
        Self { sprites }
    }

    /// Look up a sprite by identifier. Returns None if not found; an
    /// unresolved identifier is the provider's concern, not a crash here.
    pub fn get(&self, name: &str) -> Option<Sprite> {
        self.sprites.get(name).copied()
    }
}

impl Default for SpriteStore {
    fn default() -> Self {
        Self::new()
    }
}
