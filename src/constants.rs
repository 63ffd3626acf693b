//! Centralised gameplay and presentation constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::TrainerConfig`] mirrors the gameplay subset and lets a
//! TOML file override any of them without recompiling.

// ── Window ────────────────────────────────────────────────────────────────────

/// Logical window width in pixels.  The playfield, top bar, and heatmap
/// canvas are all laid out against this fixed size; the window is not
/// resizable.
pub const WINDOW_WIDTH: f32 = 800.0;

/// Logical window height in pixels.
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Fixed gameplay step rate.  Target growth advances by
/// `TARGET_GROWTH_RATE` once per tick, so changing this changes how fast
/// targets visually pulse.
pub const GAMEPLAY_TICK_HZ: f64 = 60.0;

// ── Targets ───────────────────────────────────────────────────────────────────

/// Radius (px) at which a growing target flips to shrinking.
///
/// A target therefore lives for `2 × TARGET_MAX_SIZE / TARGET_GROWTH_RATE`
/// ticks (≈ 5 s at the defaults) before it expires as a miss.
pub const TARGET_MAX_SIZE: f32 = 30.0;

/// Radius change (px) applied once per fixed tick, both growing and
/// shrinking.  Deterministic — there is no randomness in target growth.
pub const TARGET_GROWTH_RATE: f32 = 0.2;

/// Seconds between consecutive target spawns.
pub const TARGET_SPAWN_INTERVAL_SECS: f32 = 0.4;

/// Margin (px) kept clear between a spawn position and every window edge,
/// so a fully grown target never clips off-screen.
pub const TARGET_PADDING: f32 = 30.0;

// ── Session ───────────────────────────────────────────────────────────────────

/// Misses allowed before the session ends.  A miss is a target decaying to
/// zero size unclicked; stray clicks do not cost a life.
pub const LIVES_LIMIT: u32 = 3;

/// Height (px) of the grey status strip across the top of the playfield.
/// Targets never spawn underneath it.
pub const TOP_BAR_HEIGHT: f32 = 50.0;

/// Maximum committed player-name length (characters).
pub const NAME_MAX_LEN: usize = 16;

// ── Persistence ───────────────────────────────────────────────────────────────

/// Leaderboard storage file, written in the process working directory.
pub const LEADERBOARD_FILE: &str = "leaderboard.json";

/// Entries kept on disk, sorted by hit count descending.
pub const LEADERBOARD_MAX_ENTRIES: usize = 10;

/// Entries shown on the in-game leaderboard screen.
pub const LEADERBOARD_DISPLAY_COUNT: usize = 5;

/// Heatmap output file.
pub const HEATMAP_FILE: &str = "heatmap.png";

/// Radius (px) of each translucent heatmap dot.
pub const HEATMAP_DOT_RADIUS: f32 = 20.0;

/// Alpha (0–255) of a single heatmap dot.  Overlapping dots composite, so
/// dense click clusters read as progressively more opaque red.
pub const HEATMAP_DOT_ALPHA: u8 = 50;
