//! All game entity types — pure data, no logic.

/// Which ruleset the session runs under.  Each variant adds one feature
/// on top of the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// One enemy at a time; every kill spawns a single replacement.
    Classic,
    /// Kills that land on a multiple of three spawn two enemies.
    Swarm,
    /// Swarm rules, and enemies vanish after a fixed lifetime.
    Timed,
    /// Timed rules with a win/lose outcome and restart.
    Arena,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Classic,
        Variant::Swarm,
        Variant::Timed,
        Variant::Arena,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Swarm => "Swarm",
            Variant::Timed => "Timed",
            Variant::Arena => "Arena",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Lost,
    Won,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Playing
    }
}

/// Keys held during the current frame.  Built by the host from polled
/// keyboard state; every field is level-triggered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub restart: bool,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

/// Top-left corner of the player sprite, in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    /// Unique within a session, assigned in spawn order.
    pub id: u64,
    pub x: f32,
    pub y: f32,
    /// Host clock reading (seconds) when the enemy appeared.
    pub spawned_at: f64,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub variant: Variant,
    pub status: GameStatus,
    /// Set once the restart prompt has been drawn; the restart key is
    /// ignored until then.
    pub restart_armed: bool,
    /// Id handed to the next spawned enemy.
    pub next_enemy_id: u64,
    pub frame: u64,
}
