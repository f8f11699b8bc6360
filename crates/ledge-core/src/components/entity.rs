//! Fat entity with pluggable contact logic.
//!
//! An entity is plain data (position, velocity, footprint, bounds) plus a
//! boxed [`EntityLogic`] that decides which tiles block it and how it reacts
//! to overlapping another entity. Concrete kinds (player, enemy, hazard) are
//! logic implementations, not subclasses.
//!
//! Coordinates are world pixels, y-down: `vel.x > 0` moves right,
//! `vel.y > 0` falls.

use std::fmt;

use glam::Vec2;

use crate::api::types::EntityId;
use crate::assets::registry::Sprite;
use crate::components::tilemap::{TileGrid, TileKind};

/// Integer bounding edges derived from continuous position + footprint.
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Bounds {
    /// Derive edges from a continuous position and a pixel footprint:
    /// `left = floor(x)`, `right = left + width`, same vertically.
    pub fn of(pos: Vec2, width: u32, height: u32) -> Self {
        let left = pos.x.floor() as i32;
        let top = pos.y.floor() as i32;
        Self {
            left,
            right: left + width as i32,
            top,
            bottom: top + height as i32,
        }
    }

    /// Strict overlap: rectangles that merely touch at an edge do not
    /// intersect, and zero-area rectangles intersect nothing.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// Directional tile-contact capability.
///
/// The default probes consult the cell(s) immediately adjacent to the
/// relevant edge, across the entity's current span, and report contact iff
/// any probed cell is solid per [`TileProbe::is_solid`]. Variants override
/// `is_solid` to change which kinds block them (a ghost ignoring bricks), or
/// a whole probe to move its sample points.
pub trait TileProbe {
    /// Whether `kind` blocks this entity.
    fn is_solid(&self, kind: TileKind) -> bool;

    /// Solid tile adjacent to the left edge, anywhere in the vertical span.
    fn tile_left(&self, bounds: Bounds, grid: &TileGrid) -> bool {
        let col = grid.col_at(bounds.left - 1);
        solid_in_column(self, grid, col, bounds.top, bounds.bottom)
    }

    /// Solid tile adjacent to the right edge.
    fn tile_right(&self, bounds: Bounds, grid: &TileGrid) -> bool {
        let col = grid.col_at(bounds.right);
        solid_in_column(self, grid, col, bounds.top, bounds.bottom)
    }

    /// Solid tile adjacent to the top edge, anywhere in the horizontal span.
    fn tile_above(&self, bounds: Bounds, grid: &TileGrid) -> bool {
        let row = grid.row_at(bounds.top - 1);
        solid_in_row(self, grid, row, bounds.left, bounds.right)
    }

    /// Solid tile adjacent to the bottom edge.
    fn tile_below(&self, bounds: Bounds, grid: &TileGrid) -> bool {
        let row = grid.row_at(bounds.bottom);
        solid_in_row(self, grid, row, bounds.left, bounds.right)
    }
}

fn solid_in_column<P: TileProbe + ?Sized>(
    probe: &P,
    grid: &TileGrid,
    col: i32,
    top: i32,
    bottom: i32,
) -> bool {
    if bottom <= top {
        return false;
    }
    (grid.row_at(top)..=grid.row_at(bottom - 1))
        .any(|row| grid.get(col, row).is_some_and(|kind| probe.is_solid(kind)))
}

fn solid_in_row<P: TileProbe + ?Sized>(
    probe: &P,
    grid: &TileGrid,
    row: i32,
    left: i32,
    right: i32,
) -> bool {
    if right <= left {
        return false;
    }
    (grid.col_at(left)..=grid.col_at(right - 1))
        .any(|col| grid.get(col, row).is_some_and(|kind| probe.is_solid(kind)))
}

/// Snapshot of the other entity handed to [`EntityLogic::collided_with`].
/// A copy rather than a borrow, so the hook can run while the notified
/// entity is mutably borrowed from the scene.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: EntityId,
    pub tag: String,
    pub bounds: Bounds,
}

/// Full per-variant capability set: tile contact plus collision response.
pub trait EntityLogic: TileProbe {
    /// Notification that this entity overlaps `other` this frame.
    ///
    /// Invoked by the broad-phase pass once per detected pair and direction,
    /// after all movement for the frame has been resolved. No side effect is
    /// implied; the implementation decides what an overlap means.
    fn collided_with(&mut self, other: &Contact);
}

/// Stock logic: every solid tile kind blocks, overlaps are ignored.
#[derive(Debug, Default)]
pub struct SolidContact;

impl TileProbe for SolidContact {
    fn is_solid(&self, kind: TileKind) -> bool {
        kind.is_solid()
    }
}

impl EntityLogic for SolidContact {
    fn collided_with(&mut self, _other: &Contact) {}
}

/// A game entity: anything that moves through the level and can collide.
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Inactive entities are skipped by movement and collision passes.
    pub active: bool,
    /// Position in world pixels (fractional, not grid-aligned).
    pub pos: Vec2,
    /// Velocity in pixels per second.
    pub vel: Vec2,
    /// Footprint resolved from the sprite store.
    pub sprite: Sprite,
    /// Per-variant contact logic.
    pub logic: Box<dyn EntityLogic>,
    bounds: Bounds,
}

impl Entity {
    /// Create an entity at the origin with the stock [`SolidContact`] logic.
    pub fn new(id: EntityId, sprite: Sprite) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            bounds: Bounds::of(Vec2::ZERO, sprite.width, sprite.height),
            sprite,
            logic: Box::new(SolidContact),
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self.update_bounds();
        self
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_logic(mut self, logic: Box<dyn EntityLogic>) -> Self {
        self.logic = logic;
        self
    }

    /// Bounding edges as of the last [`Entity::update_bounds`] call. The
    /// movement system refreshes these at the start and end of every tick.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Recompute bounding edges from the current position and footprint.
    pub fn update_bounds(&mut self) {
        self.bounds = Bounds::of(self.pos, self.sprite.width, self.sprite.height);
    }

    /// Strict AABB overlap against another entity, from current positions.
    /// Symmetric and side-effect free; touching edges do not collide.
    pub fn collides_with(&self, other: &Entity) -> bool {
        let me = Bounds::of(self.pos, self.sprite.width, self.sprite.height);
        let him = Bounds::of(other.pos, other.sprite.width, other.sprite.height);
        me.intersects(&him)
    }

    /// Snapshot for collision notification.
    pub fn contact(&self) -> Contact {
        Contact {
            id: self.id,
            tag: self.tag.clone(),
            bounds: Bounds::of(self.pos, self.sprite.width, self.sprite.height),
        }
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("active", &self.active)
            .field("pos", &self.pos)
            .field("vel", &self.vel)
            .field("sprite", &self.sprite)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}
