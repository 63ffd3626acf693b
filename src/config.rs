//! Runtime gameplay configuration loaded from `assets/trainer.toml`.
//!
//! [`TrainerConfig`] is a Bevy [`Resource`] that mirrors the gameplay
//! constants in [`crate::constants`].  At startup, [`load_trainer_config`]
//! reads `assets/trainer.toml` and overwrites the defaults with any values
//! present in the file.  Missing keys fall back to the compile-time
//! defaults, so a minimal TOML can override just the values you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<TrainerConfig>` to any system parameter list and read
//! values with `config.target_max_size`, `config.lives_limit`, etc.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `TrainerConfig::default()`.

use crate::constants::*;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/trainer.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    // ── Targets ──────────────────────────────────────────────────────────────
    pub target_max_size: f32,
    pub target_growth_rate: f32,
    pub target_spawn_interval_secs: f32,
    pub target_padding: f32,

    // ── Session ──────────────────────────────────────────────────────────────
    pub lives_limit: u32,
    pub top_bar_height: f32,
    pub name_max_len: usize,

    // ── Persistence ──────────────────────────────────────────────────────────
    pub leaderboard_display_count: usize,
    pub heatmap_dot_radius: f32,
    pub heatmap_dot_alpha: u8,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            // Targets
            target_max_size: TARGET_MAX_SIZE,
            target_growth_rate: TARGET_GROWTH_RATE,
            target_spawn_interval_secs: TARGET_SPAWN_INTERVAL_SECS,
            target_padding: TARGET_PADDING,
            // Session
            lives_limit: LIVES_LIMIT,
            top_bar_height: TOP_BAR_HEIGHT,
            name_max_len: NAME_MAX_LEN,
            // Persistence
            leaderboard_display_count: LEADERBOARD_DISPLAY_COUNT,
            heatmap_dot_radius: HEATMAP_DOT_RADIUS,
            heatmap_dot_alpha: HEATMAP_DOT_ALPHA,
        }
    }
}

/// Startup system: attempt to load `assets/trainer.toml` and overwrite the
/// `TrainerConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  TOML parse errors are
/// logged but do not abort the game.  A missing file is silently ignored
/// (defaults are already in place from `insert_resource`).
pub fn load_trainer_config(mut config: ResMut<TrainerConfig>) {
    let path = "assets/trainer.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<TrainerConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded trainer config from {path}");
            }
            Err(e) => {
                warn!("Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            info!("No {path} found; using compiled defaults");
        }
    }
}
