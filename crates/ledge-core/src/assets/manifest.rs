use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Asset manifest describing the named sprites of a game.
/// Loaded from a JSON file at startup, before any level loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named sprite lookup: identifier → pixel footprint + image path.
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
}

/// Describes a single sprite.
///
/// Only the footprint matters to movement and collision; `path` is carried
/// through for whatever renderer sits on the other side of the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Footprint width in pixels.
    pub width: u32,
    /// Footprint height in pixels.
    pub height: u32,
    /// Relative path to the image file (e.g. "sprites/hero.png").
    pub path: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "sprites": {
                "hero": { "width": 32, "height": 64, "path": "sprites/hero.png" },
                "tile_a": { "width": 32, "height": 32, "path": "sprites/a.png" }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.sprites.len(), 2);

        let hero = &manifest.sprites["hero"];
        assert_eq!(hero.width, 32);
        assert_eq!(hero.height, 64);
        assert_eq!(hero.path, "sprites/hero.png");
    }

    #[test]
    fn sprites_section_is_optional() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert!(manifest.sprites.is_empty());
    }
}
