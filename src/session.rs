//! Gameplay plugin: target spawning, growth, click resolution, and lives.
//!
//! All systems run only in [`GameState::Playing`].  Stepped systems (clock,
//! spawn timer, growth) live in `FixedUpdate` so target growth advances by
//! an exact per-tick rate; click handling stays in `Update` where button
//! edges are reliable.  Game → audio coupling goes through messages
//! ([`TargetHit`], [`ShotMissed`], [`LifeLost`]) so the gameplay systems
//! never touch the audio device.

use bevy::prelude::*;
use rand::Rng;

use crate::config::TrainerConfig;
use crate::constants::{TARGET_SPAWN_INTERVAL_SECS, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::menu::GameState;
use crate::stats::SessionStats;
use crate::target::{self, Target};

// ── Messages (game → audio) ──────────────────────────────────────────────────

/// A target was clicked before it expired.
#[derive(Message, Debug, Clone, Copy)]
pub struct TargetHit;

/// A click landed on empty playfield.
#[derive(Message, Debug, Clone, Copy)]
pub struct ShotMissed;

/// A target decayed to nothing and cost a life.
#[derive(Message, Debug, Clone, Copy)]
pub struct LifeLost;

// ── Resources ─────────────────────────────────────────────────────────────────

/// Window-space coordinates of every click this session, in click order.
/// Consumed by the heatmap on session end.
#[derive(Resource, Default, Debug, Clone)]
pub struct ClickTrace(pub Vec<Vec2>);

/// Name committed on the main menu; stamped into the leaderboard entry.
#[derive(Resource, Default, Debug, Clone)]
pub struct PlayerName(pub String);

/// Repeating spawn clock; one target per expiry.
#[derive(Resource)]
pub struct SpawnTimer(pub Timer);

impl Default for SpawnTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(
            TARGET_SPAWN_INTERVAL_SECS,
            TimerMode::Repeating,
        ))
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers session resources, the game → audio messages, and all gameplay
/// systems, gated on [`GameState::Playing`].
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionStats>()
            .init_resource::<ClickTrace>()
            .init_resource::<PlayerName>()
            .init_resource::<SpawnTimer>()
            .add_message::<TargetHit>()
            .add_message::<ShotMissed>()
            .add_message::<LifeLost>()
            .add_systems(OnEnter(GameState::Playing), reset_session)
            .add_systems(
                FixedUpdate,
                (
                    tick_session_clock,
                    spawn_target_system,
                    target_growth_system,
                    lives_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (click_system, target::sync_target_visuals)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

// ── Click resolution ──────────────────────────────────────────────────────────

/// What a single click resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The first iterated target containing the click point.
    Hit(Entity),
    /// No active target contained the point.
    Miss,
}

/// Resolve a click against the active targets: the first target containing
/// the point wins; at most one target is ever credited per click.
pub fn resolve_click<'a>(
    point: Vec2,
    targets: impl IntoIterator<Item = (Entity, &'a Target)>,
) -> ClickOutcome {
    for (entity, target) in targets {
        if target.contains(point) {
            return ClickOutcome::Hit(entity);
        }
    }
    ClickOutcome::Miss
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Fresh counters, empty click trace, restarted spawn clock, no leftover
/// targets.  Runs on every entry into `Playing`.
pub fn reset_session(
    mut commands: Commands,
    mut stats: ResMut<SessionStats>,
    mut trace: ResMut<ClickTrace>,
    mut timer: ResMut<SpawnTimer>,
    config: Res<TrainerConfig>,
    targets: Query<Entity, With<Target>>,
) {
    *stats = SessionStats::default();
    trace.0.clear();
    timer.0 = Timer::from_seconds(config.target_spawn_interval_secs, TimerMode::Repeating);
    for entity in targets.iter() {
        commands.entity(entity).despawn();
    }
}

/// Accumulate fixed-tick time into the session clock.
pub fn tick_session_clock(time: Res<Time>, mut stats: ResMut<SessionStats>) {
    stats.elapsed += time.delta_secs_f64();
}

/// Uniform spawn position inside the play area: padded away from every
/// window edge and kept out of the top status bar.
pub fn random_spawn_position(rng: &mut impl Rng, config: &TrainerConfig) -> Vec2 {
    let x = rng.gen_range(config.target_padding..=WINDOW_WIDTH - config.target_padding);
    let y = rng.gen_range(
        config.top_bar_height + config.target_padding..=WINDOW_HEIGHT - config.target_padding,
    );
    Vec2::new(x, y)
}

/// Spawn one target per spawn-clock expiry.
pub fn spawn_target_system(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<SpawnTimer>,
    config: Res<TrainerConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    let mut rng = rand::thread_rng();
    let pos = random_spawn_position(&mut rng, &config);
    target::spawn_target(&mut commands, &mut meshes, &mut materials, pos);
}

/// Advance every target one tick; a target that decays to nothing is
/// removed, costs a life, and fires the life-lost cue.  Removal is deferred
/// through `Commands`, so iterating the query stays index-stable.
pub fn target_growth_system(
    mut commands: Commands,
    config: Res<TrainerConfig>,
    mut targets: Query<(Entity, &mut Target)>,
    mut stats: ResMut<SessionStats>,
    mut life_msg: MessageWriter<LifeLost>,
) {
    for (entity, mut target) in targets.iter_mut() {
        target.advance(config.target_growth_rate, config.target_max_size);
        if target.expired() {
            commands.entity(entity).despawn();
            stats.misses += 1;
            life_msg.write(LifeLost);
        }
    }
}

/// End the session once the miss count reaches the lives limit.
pub fn lives_system(
    stats: Res<SessionStats>,
    config: Res<TrainerConfig>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if stats.misses >= config.lives_limit {
        next_state.set(GameState::EndScreen);
    }
}

/// Handle one left click: count it, record it for the heatmap, and resolve
/// it against the active targets.  Exactly one cue fires per click: the
/// hit sound when a target was struck, otherwise a single gunshot.
#[allow(clippy::too_many_arguments)]
pub fn click_system(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    targets: Query<(Entity, &Target)>,
    mut stats: ResMut<SessionStats>,
    mut trace: ResMut<ClickTrace>,
    mut hit_msg: MessageWriter<TargetHit>,
    mut miss_msg: MessageWriter<ShotMissed>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    stats.clicks += 1;
    trace.0.push(cursor);

    match resolve_click(cursor, targets.iter()) {
        ClickOutcome::Hit(entity) => {
            commands.entity(entity).despawn();
            stats.hits += 1;
            hit_msg.write(TargetHit);
        }
        ClickOutcome::Miss => {
            miss_msg.write(ShotMissed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_target(x: f32, y: f32, size: f32) -> Target {
        Target {
            pos: Vec2::new(x, y),
            size,
            growing: true,
        }
    }

    #[test]
    fn click_inside_target_is_a_hit() {
        let mut world = World::new();
        let entity = world.spawn(fixed_target(100.0, 100.0, 10.0)).id();
        let mut query = world.query::<(Entity, &Target)>();

        let outcome = resolve_click(Vec2::new(105.0, 100.0), query.iter(&world));
        assert_eq!(outcome, ClickOutcome::Hit(entity));
    }

    #[test]
    fn click_on_empty_playfield_is_a_miss() {
        let mut world = World::new();
        world.spawn(fixed_target(100.0, 100.0, 10.0));
        let mut query = world.query::<(Entity, &Target)>();

        let outcome = resolve_click(Vec2::new(500.0, 500.0), query.iter(&world));
        assert_eq!(outcome, ClickOutcome::Miss);
    }

    #[test]
    fn overlapping_targets_credit_exactly_one() {
        let mut world = World::new();
        world.spawn(fixed_target(100.0, 100.0, 10.0));
        world.spawn(fixed_target(104.0, 100.0, 10.0));
        let mut query = world.query::<(Entity, &Target)>();

        match resolve_click(Vec2::new(102.0, 100.0), query.iter(&world)) {
            ClickOutcome::Hit(_) => {}
            ClickOutcome::Miss => panic!("overlapping click must hit one target"),
        }
    }

    #[test]
    fn spawn_positions_respect_margins() {
        let config = TrainerConfig::default();
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let pos = random_spawn_position(&mut rng, &config);
            assert!(pos.x >= config.target_padding);
            assert!(pos.x <= WINDOW_WIDTH - config.target_padding);
            assert!(pos.y >= config.top_bar_height + config.target_padding);
            assert!(pos.y <= WINDOW_HEIGHT - config.target_padding);
        }
    }
}
