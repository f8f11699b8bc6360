pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{Controller, World, WorldConfig};
pub use api::types::EntityId;
pub use assets::manifest::{AssetManifest, SpriteDescriptor};
pub use assets::registry::{Sprite, SpriteStore};
pub use components::entity::{Bounds, Contact, Entity, EntityLogic, SolidContact, TileProbe};
pub use components::tilemap::{
    LoadError, OutOfRangeError, TileGrid, TileKind, DEFAULT_TILE_SIZE,
};
pub use crate::core::scene::Scene;
pub use crate::core::time::FixedTimestep;
pub use systems::collision::{collect_pairs, dispatch, CollisionPair};
pub use systems::movement::{step_entity, step_scene};
