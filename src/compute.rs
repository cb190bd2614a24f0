//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, the host clock and an RNG handle) and
//! returns a brand-new `GameState`.  Side effects are limited to the
//! injected RNG and logging.

use log::{debug, info};
use rand::Rng;

use crate::config::{
    DOUBLE_SPAWN_EVERY, ENEMY_LIFETIME, ENTITY_SIZE, PLAYER_MAX_X, PLAYER_MAX_Y, PLAYER_SPEED,
    SCREEN_HEIGHT, SCREEN_WIDTH, WIN_SCORE,
};
use crate::entities::{Controls, Enemy, GameState, GameStatus, Player, Variant};
use crate::spawn::spawn_enemies;

// ── Variant tables ───────────────────────────────────────────────────────────

/// Seconds an untouched enemy stays on the board, if it ever expires.
pub fn enemy_lifetime(variant: Variant) -> Option<f64> {
    match variant {
        Variant::Classic | Variant::Swarm => None,
        Variant::Timed | Variant::Arena => Some(ENEMY_LIFETIME),
    }
}

/// Score that ends the session with a win.  Variants without one never end.
pub fn win_score(variant: Variant) -> Option<u32> {
    match variant {
        Variant::Arena => Some(WIN_SCORE),
        _ => None,
    }
}

/// Enemies spawned after a kill that brought the score to `score`.
pub fn replacement_count(variant: Variant, score: u32) -> u32 {
    match variant {
        Variant::Classic => 1,
        Variant::Swarm | Variant::Timed | Variant::Arena => {
            if score % DOUBLE_SPAWN_EVERY == 0 {
                2
            } else {
                1
            }
        }
    }
}

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Axis-aligned overlap of two entity-sized boxes with top-left corners
/// `(ax, ay)` and `(bx, by)`.  Touching edges do not overlap.
pub fn is_colliding(ax: f32, ay: f32, bx: f32, by: f32) -> bool {
    ax < bx + ENTITY_SIZE && ax + ENTITY_SIZE > bx && ay < by + ENTITY_SIZE && ay + ENTITY_SIZE > by
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: player centred, one enemy on the board.
pub fn init_state(variant: Variant, now: f64, rng: &mut impl Rng) -> GameState {
    let enemies = spawn_enemies(&[], 1, 0, now, rng);
    GameState {
        player: Player {
            x: SCREEN_WIDTH / 2.0 - ENTITY_SIZE / 2.0,
            y: SCREEN_HEIGHT / 2.0 - ENTITY_SIZE / 2.0,
        },
        next_enemy_id: enemies.len() as u64,
        enemies,
        score: 0,
        variant,
        status: GameStatus::Playing,
        restart_armed: false,
        frame: 0,
    }
}

/// Back to a fresh session: score zero and a single new enemy.  The
/// player keeps its position and enemy ids keep counting.
pub fn restart(state: &GameState, now: f64, rng: &mut impl Rng) -> GameState {
    info!(
        "restarting {} session (previous score {})",
        state.variant.name(),
        state.score
    );
    let enemies = spawn_enemies(&[], 1, state.next_enemy_id, now, rng);
    GameState {
        next_enemy_id: state.next_enemy_id + enemies.len() as u64,
        enemies,
        score: 0,
        status: GameStatus::Playing,
        restart_armed: false,
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Step the player one `PLAYER_SPEED` along every held direction, keeping
/// the sprite fully on the canvas.
pub fn move_player(state: &GameState, controls: &Controls) -> GameState {
    let mut x = state.player.x;
    let mut y = state.player.y;
    if controls.up {
        y -= PLAYER_SPEED;
    }
    if controls.down {
        y += PLAYER_SPEED;
    }
    if controls.left {
        x -= PLAYER_SPEED;
    }
    if controls.right {
        x += PLAYER_SPEED;
    }
    GameState {
        player: Player {
            x: x.clamp(0.0, PLAYER_MAX_X),
            y: y.clamp(0.0, PLAYER_MAX_Y),
        },
        ..state.clone()
    }
}

// ── Enemy passes ─────────────────────────────────────────────────────────────

/// Drop every enemy whose age has reached the variant's lifetime.
pub fn expire_enemies(state: &GameState, now: f64) -> GameState {
    let Some(lifetime) = enemy_lifetime(state.variant) else {
        return state.clone();
    };

    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .filter(|e| {
            let alive = now - e.spawned_at < lifetime;
            if !alive {
                debug!("enemy {} expired", e.id);
            }
            alive
        })
        .cloned()
        .collect();

    GameState {
        enemies,
        ..state.clone()
    }
}

/// Remove every enemy touching the player, score one point each and spawn
/// replacements.  Replacements are placed against the surviving enemies
/// and are only tested against the player on the next frame.
pub fn resolve_collisions(state: &GameState, now: f64, rng: &mut impl Rng) -> GameState {
    let (hit, survivors): (Vec<Enemy>, Vec<Enemy>) = state
        .enemies
        .iter()
        .cloned()
        .partition(|e| is_colliding(state.player.x, state.player.y, e.x, e.y));

    if hit.is_empty() {
        return state.clone();
    }

    let mut enemies = survivors;
    let mut score = state.score;
    let mut next_enemy_id = state.next_enemy_id;

    for enemy in &hit {
        score += 1;
        debug!("enemy {} caught, score {}", enemy.id, score);

        let count = replacement_count(state.variant, score);
        let fresh = spawn_enemies(&enemies, count, next_enemy_id, now, rng);
        next_enemy_id += fresh.len() as u64;
        enemies.extend(fresh);
    }

    GameState {
        enemies,
        score,
        next_enemy_id,
        ..state.clone()
    }
}

/// Derive the session outcome.  A reached target wins even if the board
/// happens to be empty.
pub fn update_status(state: &GameState) -> GameState {
    let status = match win_score(state.variant) {
        Some(target) if state.score >= target => GameStatus::Won,
        Some(_) if state.enemies.is_empty() => GameStatus::Lost,
        _ => GameStatus::Playing,
    };

    if status != state.status {
        match status {
            GameStatus::Won => info!("session won with score {}", state.score),
            GameStatus::Lost => info!("session lost with score {}", state.score),
            GameStatus::Playing => {}
        }
    }

    GameState {
        status,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — clock and RNG are injected) ───────────────

/// Advance the simulation by one frame.
///
/// Movement always applies.  While the session is over the board is
/// frozen and only an armed restart key does anything; otherwise enemies
/// expire, collide and the outcome is re-evaluated, in that order.
pub fn tick(state: &GameState, controls: &Controls, now: f64, rng: &mut impl Rng) -> GameState {
    let frame = state.frame + 1;
    let moved = move_player(state, controls);

    if state.status.is_terminal() {
        let next = if controls.restart && state.restart_armed {
            restart(&moved, now, rng)
        } else {
            moved
        };
        return GameState { frame, ..next };
    }

    let next = expire_enemies(&moved, now);
    let next = resolve_collisions(&next, now, rng);
    let next = update_status(&next);

    GameState { frame, ..next }
}

/// Mark the restart prompt as shown.  No-op while playing.
pub fn arm_restart(state: &GameState) -> GameState {
    GameState {
        restart_armed: state.restart_armed || state.status.is_terminal(),
        ..state.clone()
    }
}
