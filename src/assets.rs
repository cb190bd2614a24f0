//! Start-up resources: the two sprites and the HUD font.
//!
//! Loading happens once, before the first frame.  Any failure is handed
//! back to the caller as an `AssetError`; nothing is retried.

use log::info;
use macroquad::prelude::{load_texture, load_ttf_font, FilterMode, Font, Texture2D};
use thiserror::Error;

use arena_catch::config::{ENEMY_SPRITE_PATH, FONT_PATH, PLAYER_SPRITE_PATH};

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Sprite missing or not a decodable image
    #[error("failed to load texture {path}: {source}")]
    Texture {
        path: String,
        #[source]
        source: macroquad::Error,
    },

    /// Font missing or not a valid TrueType file
    #[error("failed to load font {path}: {source}")]
    Font {
        path: String,
        #[source]
        source: macroquad::Error,
    },
}

pub struct Assets {
    pub player: Texture2D,
    pub enemy: Texture2D,
    pub font: Font,
}

impl Assets {
    pub async fn load() -> Result<Self, AssetError> {
        let player = texture(PLAYER_SPRITE_PATH).await?;
        let enemy = texture(ENEMY_SPRITE_PATH).await?;
        let font = load_ttf_font(FONT_PATH)
            .await
            .map_err(|source| AssetError::Font {
                path: FONT_PATH.to_string(),
                source,
            })?;
        info!("loaded font {}", FONT_PATH);

        Ok(Self { player, enemy, font })
    }
}

async fn texture(path: &str) -> Result<Texture2D, AssetError> {
    let tex = load_texture(path)
        .await
        .map_err(|source| AssetError::Texture {
            path: path.to_string(),
            source,
        })?;
    tex.set_filter(FilterMode::Linear);
    info!("loaded texture {} ({}x{})", path, tex.width(), tex.height());
    Ok(tex)
}
