mod assets;
mod display;

use log::{error, info};
use macroquad::prelude::{get_time, is_key_down, is_key_pressed, next_frame, Conf, KeyCode};
use rand::thread_rng;

use arena_catch::compute::{arm_restart, init_state, tick};
use arena_catch::config::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use arena_catch::entities::{Controls, Variant};

use crate::assets::Assets;

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

// ── Input ────────────────────────────────────────────────────────────────────

/// Poll the keyboard.  Each direction has a letter and an arrow binding.
fn read_controls() -> Controls {
    Controls {
        up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
        left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
        restart: is_key_down(KeyCode::Space),
    }
}

// ── Menu ─────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start(Variant),
    Quit,
}

const VARIANT_KEYS: [(KeyCode, Variant); 4] = [
    (KeyCode::Key1, Variant::Classic),
    (KeyCode::Key2, Variant::Swarm),
    (KeyCode::Key3, Variant::Timed),
    (KeyCode::Key4, Variant::Arena),
];

async fn show_menu(assets: &Assets) -> MenuResult {
    loop {
        if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
            return MenuResult::Quit;
        }
        for (key, variant) in VARIANT_KEYS {
            if is_key_pressed(key) {
                return MenuResult::Start(variant);
            }
        }

        display::render_menu(assets);
        next_frame().await;
    }
}

// ── Game loop ────────────────────────────────────────────────────────────────

/// Run one variant until Escape is pressed.  The host drives one
/// update→draw pair per frame; all game state lives in `state`.
async fn game_loop(assets: &Assets, variant: Variant) {
    let mut rng = thread_rng();
    let mut state = init_state(variant, get_time(), &mut rng);
    info!("starting {} game", variant.name());

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!(
                "leaving {} game with score {}",
                variant.name(),
                state.score
            );
            // Let the Escape press expire before the menu polls again.
            next_frame().await;
            return;
        }

        state = tick(&state, &read_controls(), get_time(), &mut rng);

        if display::render(&state, assets) {
            state = arm_restart(&state);
        }

        next_frame().await;
    }
}

// ── Entry point ──────────────────────────────────────────────────────────────

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("=== {} ===", WINDOW_TITLE);

    let assets = match Assets::load().await {
        Ok(assets) => assets,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    loop {
        match show_menu(&assets).await {
            MenuResult::Quit => break,
            MenuResult::Start(variant) => game_loop(&assets, variant).await,
        }
    }

    info!("bye");
}
