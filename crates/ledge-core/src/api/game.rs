//! World facade: configuration, the controller boundary, and the per-tick
//! control flow (movement first, then the collision pass).

use crate::api::types::EntityId;
use crate::components::tilemap::TileGrid;
use crate::core::scene::Scene;
use crate::core::time::FixedTimestep;
use crate::systems::collision::{self, CollisionPair};
use crate::systems::movement;

/// World-level tuning, provided by the game.
#[derive(Debug, Clone)]
pub struct WorldConfig {
    /// Left world bound in pixels; entities moving left past it stop.
    pub min_x: f32,
    /// Right world bound in pixels; entities moving right past it stop.
    pub max_x: f32,
    /// Fixed tick length for [`World::advance`], in milliseconds.
    pub fixed_dt_ms: u64,
}

impl Default for WorldConfig {
    /// The classic 0..950 playfield at ~60 ticks per second.
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: 950.0,
            fixed_dt_ms: 16,
        }
    }
}

/// The two queries movement needs from the owning game controller.
///
/// Jump state lives with the game, not the entity; passing the controller in
/// per tick keeps the relation non-owning, and a test double can set the
/// state deterministically.
pub trait Controller {
    /// Whether the controlled entity is in its jump-initiation state.
    fn is_jumping(&self) -> bool;

    /// Ascent was blocked by a tile overhead; the jump is over.
    fn stop_jumping(&mut self);
}

/// Scene + grid + config bundle driving the simulation tick.
pub struct World {
    pub scene: Scene,
    pub grid: TileGrid,
    pub config: WorldConfig,
    timestep: FixedTimestep,
    collisions: Vec<CollisionPair>,
    next_id: u32,
}

impl World {
    pub fn new(grid: TileGrid) -> Self {
        Self::with_config(grid, WorldConfig::default())
    }

    pub fn with_config(grid: TileGrid, config: WorldConfig) -> Self {
        Self {
            scene: Scene::new(),
            grid,
            timestep: FixedTimestep::new(config.fixed_dt_ms),
            config,
            collisions: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// One simulation tick: move every active entity sequentially, then run
    /// the broad-phase pass and deliver collision notifications. Returns the
    /// pairs detected this tick.
    pub fn tick(&mut self, controller: &mut dyn Controller, elapsed_ms: u64) -> &[CollisionPair] {
        movement::step_scene(
            &mut self.scene,
            &self.grid,
            controller,
            elapsed_ms,
            &self.config,
        );
        self.collisions.clear();
        collision::collect_pairs(&self.scene, &mut self.collisions);
        collision::dispatch(&mut self.scene, &self.collisions);
        &self.collisions
    }

    /// Feed a variable frame delta; runs zero or more fixed ticks.
    pub fn advance(&mut self, controller: &mut dyn Controller, frame_ms: u64) {
        let dt = self.timestep.dt_ms();
        let steps = self.timestep.accumulate(frame_ms);
        for _ in 0..steps {
            self.tick(controller, dt);
        }
    }

    /// Collision pairs from the most recent tick.
    pub fn collisions(&self) -> &[CollisionPair] {
        &self.collisions
    }
}
