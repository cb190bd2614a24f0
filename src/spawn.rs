//! Enemy placement.
//!
//! Positions are drawn uniformly from the spawn rectangle and redrawn
//! while they overlap an existing enemy.  The number of draws is capped by
//! `MAX_SPAWN_ATTEMPTS`; past that the rectangle is scanned on an
//! entity-sized grid and the first free cell wins.

use log::{debug, warn};
use rand::Rng;

use crate::compute::is_colliding;
use crate::config::{
    ENTITY_SIZE, MAX_SPAWN_ATTEMPTS, SPAWN_MAX_X, SPAWN_MAX_Y, SPAWN_MIN_X, SPAWN_MIN_Y,
};
use crate::entities::Enemy;

/// Independent uniform draw inside the spawn rectangle.
pub fn random_coords(rng: &mut impl Rng) -> (f32, f32) {
    let x = rng.gen_range(SPAWN_MIN_X..SPAWN_MAX_X);
    let y = rng.gen_range(SPAWN_MIN_Y..SPAWN_MAX_Y);
    (x, y)
}

pub fn overlaps_any(enemies: &[Enemy], x: f32, y: f32) -> bool {
    enemies.iter().any(|e| is_colliding(e.x, e.y, x, y))
}

/// Pick a spot that does not overlap any of `enemies`.
pub fn find_free_position(enemies: &[Enemy], rng: &mut impl Rng) -> (f32, f32) {
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let (x, y) = random_coords(rng);
        if !overlaps_any(enemies, x, y) {
            return (x, y);
        }
    }

    warn!(
        "no free spawn position after {} draws ({} enemies), scanning grid",
        MAX_SPAWN_ATTEMPTS,
        enemies.len()
    );
    grid_fallback(enemies).unwrap_or_else(|| {
        warn!("spawn rectangle is full, stacking at its corner");
        (SPAWN_MIN_X, SPAWN_MIN_Y)
    })
}

/// First free cell of an entity-sized grid laid over the spawn rectangle,
/// scanning row by row from the top-left.
fn grid_fallback(enemies: &[Enemy]) -> Option<(f32, f32)> {
    let mut y = SPAWN_MIN_Y;
    while y < SPAWN_MAX_Y {
        let mut x = SPAWN_MIN_X;
        while x < SPAWN_MAX_X {
            if !overlaps_any(enemies, x, y) {
                return Some((x, y));
            }
            x += ENTITY_SIZE;
        }
        y += ENTITY_SIZE;
    }
    None
}

/// Create `count` enemies with consecutive ids starting at `first_id`.
///
/// Each new enemy avoids `existing` and every enemy spawned before it in
/// the same batch.  Only the new enemies are returned.
pub fn spawn_enemies(
    existing: &[Enemy],
    count: u32,
    first_id: u64,
    now: f64,
    rng: &mut impl Rng,
) -> Vec<Enemy> {
    let mut occupied: Vec<Enemy> = existing.to_vec();
    let mut spawned = Vec::with_capacity(count as usize);

    for id in first_id..first_id + u64::from(count) {
        let (x, y) = find_free_position(&occupied, rng);
        debug!("spawned enemy {} at ({:.1}, {:.1})", id, x, y);
        let enemy = Enemy {
            id,
            x,
            y,
            spawned_at: now,
        };
        occupied.push(enemy.clone());
        spawned.push(enemy);
    }

    spawned
}
