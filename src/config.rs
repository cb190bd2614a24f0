//! Fixed gameplay and window constants.

// ── Canvas ────────────────────────────────────────────────────────────────────

pub const WINDOW_TITLE: &str = "Arena Catch";
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

// ── Entities ──────────────────────────────────────────────────────────────────

/// Side length of both sprites after scaling.
pub const ENTITY_SIZE: f32 = 50.0;
/// Pixels moved per frame while a direction key is held.
pub const PLAYER_SPEED: f32 = 6.0;

pub const PLAYER_MAX_X: f32 = SCREEN_WIDTH - ENTITY_SIZE;
pub const PLAYER_MAX_Y: f32 = SCREEN_HEIGHT - ENTITY_SIZE;

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Spawn rectangle, kept away from the canvas edges.
pub const SPAWN_MIN_X: f32 = 100.0;
pub const SPAWN_MAX_X: f32 = 700.0;
pub const SPAWN_MIN_Y: f32 = 100.0;
pub const SPAWN_MAX_Y: f32 = 500.0;

/// Random draws tried before falling back to a grid scan.
pub const MAX_SPAWN_ATTEMPTS: u32 = 64;

/// Seconds an enemy survives in variants with a lifetime.
pub const ENEMY_LIFETIME: f64 = 2.0;

/// Every kill that lands the score on a multiple of this spawns two enemies.
pub const DOUBLE_SPAWN_EVERY: u32 = 3;

pub const WIN_SCORE: u32 = 20;

// ── Assets ────────────────────────────────────────────────────────────────────

pub const PLAYER_SPRITE_PATH: &str = "assets/player.png";
pub const ENEMY_SPRITE_PATH: &str = "assets/enemy.png";
pub const FONT_PATH: &str = "assets/font.ttf";
