//! Headless tests for the [`GameState`] state machine.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering, no audio —
//! so they run fast and deterministically in CI.
//!
//! Covered scenarios:
//! 1. Default initial state is `MainMenu`.
//! 2. A `NextState` request transitions from `MainMenu` → `Playing`.
//! 3. `Playing` state persists across frames with no new transition request.
//! 4. The lives check ends the session once misses reach the limit, and not
//!    before.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use aim_trainer::config::TrainerConfig;
use aim_trainer::constants::LIVES_LIMIT;
use aim_trainer::menu::GameState;
use aim_trainer::session::lives_system;
use aim_trainer::stats::SessionStats;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with just the state registered.
///
/// `MinimalPlugins` provides the required scheduling infrastructure.
/// `StatesPlugin` adds the `StateTransition` schedule needed by
/// `init_state`.  No window or rendering is created.
fn app_with_default_state() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app
}

/// Build a headless app mid-session, with the lives check wired up the way
/// the gameplay schedule wires it.
fn app_with_lives_check() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_state(GameState::Playing);
    app.insert_resource(TrainerConfig::default());
    app.insert_resource(SessionStats::default());
    app.add_systems(Update, lives_system.run_if(in_state(GameState::Playing)));
    app
}

fn current_state(app: &App) -> GameState {
    app.world().resource::<State<GameState>>().get().clone()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The default variant of `GameState` is `MainMenu`.
#[test]
fn default_state_is_main_menu() {
    let mut app = app_with_default_state();
    app.update(); // run one frame so StateTransition fires
    assert_eq!(
        current_state(&app),
        GameState::MainMenu,
        "initial state must be MainMenu"
    );
}

/// Requesting `Playing` via `NextState` transitions the state on the next
/// `StateTransition` pass (which Bevy runs before each `Update`).
#[test]
fn transition_main_menu_to_playing() {
    let mut app = app_with_default_state();
    app.update(); // settle into MainMenu

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);

    app.update(); // StateTransition fires; state becomes Playing

    assert_eq!(
        current_state(&app),
        GameState::Playing,
        "state must be Playing after explicit transition"
    );
}

/// `Playing` state persists across additional frames — no accidental
/// reversion.
#[test]
fn playing_state_persists_across_frames() {
    let mut app = app_with_default_state();
    app.update();

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update();

    // Run several more frames without another transition request.
    for _ in 0..5 {
        app.update();
    }

    assert_eq!(
        current_state(&app),
        GameState::Playing,
        "Playing must remain stable without a new transition"
    );
}

/// The main menu can also dispatch to the leaderboard sub-view and back.
#[test]
fn leaderboard_round_trip() {
    let mut app = app_with_default_state();
    app.update();

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Leaderboard);
    app.update();
    assert_eq!(current_state(&app), GameState::Leaderboard);

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::MainMenu);
    app.update();
    assert_eq!(current_state(&app), GameState::MainMenu);
}

/// Misses below the lives limit leave the session running.
#[test]
fn session_survives_below_the_lives_limit() {
    let mut app = app_with_lives_check();
    app.update();

    app.world_mut().resource_mut::<SessionStats>().misses = LIVES_LIMIT - 1;
    for _ in 0..3 {
        app.update();
    }

    assert_eq!(
        current_state(&app),
        GameState::Playing,
        "session must keep running below the lives limit"
    );
}

/// Reaching the lives limit ends the session on the next frame, and the end
/// screen state sticks.
#[test]
fn reaching_the_lives_limit_ends_the_session() {
    let mut app = app_with_lives_check();
    app.update();

    app.world_mut().resource_mut::<SessionStats>().misses = LIVES_LIMIT;
    app.update(); // lives check requests EndScreen
    app.update(); // StateTransition applies it

    assert_eq!(
        current_state(&app),
        GameState::EndScreen,
        "reaching the lives limit must end the session"
    );

    // Gameplay systems are gated on Playing, so nothing flips the state back.
    for _ in 0..3 {
        app.update();
    }
    assert_eq!(current_state(&app), GameState::EndScreen);
}
