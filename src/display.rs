//! Rendering layer — all drawing lives here.
//!
//! Each function receives an immutable view of the game state and the
//! loaded assets.  No game logic is performed; this module only translates
//! state into macroquad draw calls.

use macroquad::prelude::{
    clear_background, draw_text_ex, draw_texture_ex, measure_text, vec2, Color, DrawTextureParams,
    TextParams, Texture2D, WHITE,
};

use arena_catch::compute::win_score;
use arena_catch::config::{ENTITY_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use arena_catch::entities::{GameState, GameStatus, Variant};

use crate::assets::Assets;

// ── Palette & layout ─────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::new(80.0 / 255.0, 160.0 / 255.0, 240.0 / 255.0, 1.0);
const C_TEXT: Color = WHITE;
const C_LOST: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const C_WON: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const C_HINT: Color = Color::new(0.85, 0.9, 1.0, 0.8);

const HUD_SIZE: u16 = 24;
const BANNER_SIZE: u16 = 36;
const HINT_SIZE: u16 = 16;

// ── Public entry points ──────────────────────────────────────────────────────

/// Render one complete frame.  Returns `true` when the restart prompt was
/// drawn, which is what allows the restart key to take effect.
pub fn render(state: &GameState, assets: &Assets) -> bool {
    clear_background(C_BACKGROUND);

    draw_sprite(&assets.player, state.player.x, state.player.y);

    let prompt_shown = match state.status {
        GameStatus::Playing => {
            for enemy in &state.enemies {
                draw_sprite(&assets.enemy, enemy.x, enemy.y);
            }
            false
        }
        GameStatus::Lost => {
            draw_banner(assets, "You have lost!", C_LOST);
            true
        }
        GameStatus::Won => {
            draw_banner(assets, "You have won!", C_WON);
            true
        }
    };

    draw_hud(state, assets);
    draw_controls_hint(assets);

    prompt_shown
}

/// Variant selection screen.
pub fn render_menu(assets: &Assets) {
    clear_background(C_BACKGROUND);

    let cx = SCREEN_WIDTH / 2.0;
    let title = "ARENA  CATCH";
    let width = measure_text(title, Some(&assets.font), BANNER_SIZE, 1.0).width;
    draw_text_top_left(assets, title, cx - width / 2.0, 120.0, BANNER_SIZE, C_TEXT);

    draw_text_top_left(assets, "Select a game:", 200.0, 200.0, HUD_SIZE, C_TEXT);

    for (i, variant) in Variant::ALL.iter().enumerate() {
        let line = format!("[{}] {:<8} {}", i + 1, variant.name(), describe(*variant));
        draw_text_top_left(
            assets,
            &line,
            200.0,
            250.0 + i as f32 * 40.0,
            HINT_SIZE + 4,
            C_TEXT,
        );
    }

    draw_text_top_left(
        assets,
        "ESC / Q : Quit",
        200.0,
        430.0,
        HINT_SIZE,
        C_HINT,
    );
}

fn describe(variant: Variant) -> &'static str {
    match variant {
        Variant::Classic => "one enemy at a time",
        Variant::Swarm => "every third catch spawns two",
        Variant::Timed => "enemies vanish after two seconds",
        Variant::Arena => "catch 20 before they all vanish",
    }
}

// ── Sprites ──────────────────────────────────────────────────────────────────

fn draw_sprite(texture: &Texture2D, x: f32, y: f32) {
    draw_texture_ex(
        texture,
        x,
        y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(ENTITY_SIZE, ENTITY_SIZE)),
            ..Default::default()
        },
    );
}

// ── Text ─────────────────────────────────────────────────────────────────────

/// macroquad positions text by its baseline; shift so `(x, y)` is the
/// top-left corner of the rendered line.
fn draw_text_top_left(assets: &Assets, text: &str, x: f32, y: f32, size: u16, color: Color) {
    let dims = measure_text(text, Some(&assets.font), size, 1.0);
    draw_text_ex(
        text,
        x,
        y + dims.offset_y,
        TextParams {
            font: Some(&assets.font),
            font_size: size,
            color,
            ..Default::default()
        },
    );
}

fn draw_hud(state: &GameState, assets: &Assets) {
    let score = match win_score(state.variant) {
        Some(target) => format!("Score: {}/{}", state.score, target),
        None => format!("Score: {}", state.score),
    };
    draw_text_top_left(assets, &score, 7.0, 7.0, HUD_SIZE, C_TEXT);

    let label = format!("[ {} ]", state.variant.name());
    let width = measure_text(&label, Some(&assets.font), HINT_SIZE, 1.0).width;
    draw_text_top_left(
        assets,
        &label,
        SCREEN_WIDTH - width - 7.0,
        7.0,
        HINT_SIZE,
        C_HINT,
    );
}

fn draw_banner(assets: &Assets, message: &str, color: Color) {
    draw_text_top_left(assets, message, 250.0, 100.0, BANNER_SIZE, color);
    draw_text_top_left(
        assets,
        "Press SPACE to play again.",
        215.0,
        200.0,
        HUD_SIZE,
        C_TEXT,
    );
}

fn draw_controls_hint(assets: &Assets) {
    draw_text_top_left(
        assets,
        "W A S D / arrows : Move   ESC : Menu",
        7.0,
        SCREEN_HEIGHT - 24.0,
        HINT_SIZE,
        C_HINT,
    );
}
