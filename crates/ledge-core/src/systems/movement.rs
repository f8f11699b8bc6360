//! Movement system — per-tick kinematics and tile-contact resolution.
//!
//! Velocity is clamped against world bounds and solid tiles *before* the
//! position integrates. An entity is stopped at a tile boundary it is
//! already touching, never pushed back out of geometry mid-tile; on a grid
//! of tiles that one-frame granularity is enough, and it keeps tunneling
//! correction out of the loop entirely.

use crate::api::game::{Controller, WorldConfig};
use crate::components::entity::Entity;
use crate::components::tilemap::TileGrid;
use crate::core::scene::Scene;

/// Advance one entity by `elapsed_ms` milliseconds.
///
/// Order per tick: refresh bounds, clamp horizontal velocity (first matching
/// condition wins), clamp vertical velocity, integrate position, refresh
/// bounds again so they stay consistent with the new position.
pub fn step_entity(
    entity: &mut Entity,
    grid: &TileGrid,
    controller: &mut dyn Controller,
    elapsed_ms: u64,
    config: &WorldConfig,
) {
    entity.update_bounds();
    let bounds = entity.bounds();

    // Horizontal cascade: world bounds take precedence over tile contact.
    if entity.vel.x < 0.0 && entity.pos.x < config.min_x {
        entity.vel.x = 0.0;
    } else if entity.vel.x > 0.0 && entity.pos.x > config.max_x {
        entity.vel.x = 0.0;
    } else if entity.vel.x < 0.0 && entity.logic.tile_left(bounds, grid) {
        entity.vel.x = 0.0;
    } else if entity.vel.x > 0.0 && entity.logic.tile_right(bounds, grid) {
        entity.vel.x = 0.0;
    }

    // Vertical: a blocked ascent ends the jump; ground contact only sticks
    // when the controller is not in its jump-initiation state, so a jump
    // impulse can coexist with ground contact for a frame.
    if entity.vel.y < 0.0 && entity.logic.tile_above(bounds, grid) {
        entity.vel.y = 0.0;
        controller.stop_jumping();
    } else if entity.logic.tile_below(bounds, grid) && !controller.is_jumping() {
        entity.vel.y = 0.0;
    }

    // Velocity is pixels/second, elapsed time milliseconds.
    entity.pos += entity.vel * (elapsed_ms as f32) / 1000.0;
    entity.update_bounds();
}

/// Advance every active entity in the scene, sequentially in spawn order.
pub fn step_scene(
    scene: &mut Scene,
    grid: &TileGrid,
    controller: &mut dyn Controller,
    elapsed_ms: u64,
    config: &WorldConfig,
) {
    for entity in scene.iter_mut() {
        if entity.active {
            step_entity(entity, grid, controller, elapsed_ms, config);
        }
    }
}
