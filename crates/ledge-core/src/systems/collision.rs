//! Broad-phase collision pass.
//!
//! Runs after all movement for a frame: collect every overlapping pair of
//! active entities, then deliver `collided_with` notifications. Detection
//! and notification are split so a caller can inspect or filter the pairs
//! in between.

use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::core::scene::Scene;

/// A detected overlap between two entities.
/// `a` was spawned before `b`; each unordered pair is reported once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub a: EntityId,
    pub b: EntityId,
}

/// Collect every overlapping pair of active entities into `out`.
pub fn collect_pairs(scene: &Scene, out: &mut Vec<CollisionPair>) {
    let active: Vec<&Entity> = scene.iter().filter(|e| e.active).collect();
    for (i, a) in active.iter().enumerate() {
        for b in &active[i + 1..] {
            if a.collides_with(b) {
                out.push(CollisionPair { a: a.id, b: b.id });
            }
        }
    }
}

/// Deliver collision notifications for each pair, in both directions:
/// `a` is notified of `b`, then `b` of `a`.
pub fn dispatch(scene: &mut Scene, pairs: &[CollisionPair]) {
    for pair in pairs {
        notify(scene, pair.a, pair.b);
        notify(scene, pair.b, pair.a);
    }
}

fn notify(scene: &mut Scene, target: EntityId, other: EntityId) {
    let contact = match scene.get(other) {
        Some(entity) => entity.contact(),
        None => return,
    };
    if let Some(entity) = scene.get_mut(target) {
        entity.logic.collided_with(&contact);
    }
}
