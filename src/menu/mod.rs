//! Screen flow: the `GameState` machine and its three non-gameplay screens.
//!
//! ## States
//!
//! | State         | Description                                         |
//! |---------------|-----------------------------------------------------|
//! | `MainMenu`    | Initial state; title, name entry, navigation keys   |
//! | `Leaderboard` | Top stored runs; any key returns to the menu        |
//! | `Playing`     | Live session; gameplay systems active               |
//! | `EndScreen`   | Frozen final stats; session persisted on entry      |
//!
//! Every gameplay system runs under `.run_if(in_state(GameState::Playing))`,
//! so screens never need to pause or unhook anything — leaving `Playing`
//! stops the session wholesale.  Escape quits from any screen.

use bevy::prelude::*;
use std::path::Path;

use crate::config::TrainerConfig;
use crate::constants::{HEATMAP_FILE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::graphics::background_color;
use crate::heatmap;
use crate::leaderboard::{self, LeaderboardEntry};
use crate::session::{ClickTrace, PlayerName};
use crate::stats::{format_time, SessionStats};

mod common;
mod end_screen;
mod leaderboard_view;
mod main_menu;

use common::*;

// ── Game state ────────────────────────────────────────────────────────────────

/// Top-level application state machine.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Title screen with name entry; shown on startup.
    #[default]
    MainMenu,
    /// Stored top-run listing, reached from the main menu.
    Leaderboard,
    /// Active session.
    Playing,
    /// Session over; final stats shown, next key quits.
    EndScreen,
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// Name-entry editor state.  `active` controls whether keystrokes edit the
/// buffer or navigate the menu; clicking the field toggles it.
#[derive(Resource, Debug, Clone, Default)]
pub struct NameEditor {
    pub buffer: String,
    pub active: bool,
}

// ── Component markers ─────────────────────────────────────────────────────────

/// Root node of the main menu; despawned on `OnExit(MainMenu)`.
#[derive(Component)]
pub struct MainMenuRoot;

/// Tags the clickable name-entry field.
#[derive(Component)]
pub struct NameFieldButton;

/// Dynamic text inside the name field showing the edit buffer.
#[derive(Component)]
pub struct NameValueText;

/// Root node of the leaderboard screen; despawned on `OnExit(Leaderboard)`.
#[derive(Component)]
pub struct LeaderboardRoot;

/// Root node of the end screen.
#[derive(Component)]
pub struct EndScreenRoot;

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers `GameState`, every screen's setup/teardown, and the input
/// systems that drive them.
///
/// This plugin must be added to the app **before** any plugin that calls
/// `.run_if(in_state(GameState::Playing))`, so the state is always
/// registered first.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<NameEditor>()
            .add_systems(OnEnter(GameState::MainMenu), main_menu::setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), main_menu::cleanup_main_menu)
            .add_systems(
                Update,
                (
                    main_menu::name_field_focus_system,
                    main_menu::name_input_system,
                    main_menu::name_display_system,
                    main_menu::menu_navigation_system,
                )
                    .run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(
                OnEnter(GameState::Leaderboard),
                leaderboard_view::setup_leaderboard_screen,
            )
            .add_systems(
                OnExit(GameState::Leaderboard),
                leaderboard_view::cleanup_leaderboard_screen,
            )
            .add_systems(
                Update,
                leaderboard_view::dismiss_system.run_if(in_state(GameState::Leaderboard)),
            )
            .add_systems(
                OnEnter(GameState::EndScreen),
                (end_screen::persist_session, end_screen::setup_end_screen),
            )
            .add_systems(
                Update,
                end_screen::dismiss_system.run_if(in_state(GameState::EndScreen)),
            )
            .add_systems(Update, escape_quit_system);
    }
}

/// Escape quits immediately from any screen, gameplay included.
pub fn escape_quit_system(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
