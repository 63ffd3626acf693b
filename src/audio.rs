//! Sound cues: asset loading, startup validation, and fire-and-forget
//! playback.
//!
//! Gameplay never touches the audio device directly; it emits
//! [`TargetHit`] / [`ShotMissed`] / [`LifeLost`] messages, and the playback
//! systems here spawn one short-lived [`AudioPlayer`] entity per cue.
//!
//! The three WAV files are generated once with `cargo run --bin gen_sounds`;
//! startup refuses to continue without them.

use std::path::Path;

use bevy::prelude::*;

use crate::session::{LifeLost, ShotMissed, TargetHit};

/// Cue file paths relative to `assets/`.
const HIT_SOUND: &str = "sounds/shot_hit.wav";
const SHOT_SOUND: &str = "sounds/gun_shot.wav";
const LIFE_LOST_SOUND: &str = "sounds/life_lost.wav";

/// Registers cue loading and the per-cue playback systems.
pub struct AudioCuePlugin;

impl Plugin for AudioCuePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sound_assets).add_systems(
            Update,
            (play_hit_sound, play_shot_sound, play_life_lost_sound),
        );
    }
}

/// Handles for the three session cues.
#[derive(Resource)]
pub struct SoundAssets {
    pub hit: Handle<AudioSource>,
    pub shot: Handle<AudioSource>,
    pub life_lost: Handle<AudioSource>,
}

/// Verify the cue files exist on disk, then hand them to the asset server.
///
/// A missing cue is a fatal startup error: the game would otherwise run
/// silently with no indication why, so abort with a pointer at the
/// generator instead.
pub fn load_sound_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut exit: MessageWriter<AppExit>,
) {
    for relative in [HIT_SOUND, SHOT_SOUND, LIFE_LOST_SOUND] {
        if !Path::new("assets").join(relative).exists() {
            error!(
                "missing sound asset assets/{relative}; \
                 run `cargo run --bin gen_sounds` once to create the cue files"
            );
            exit.write(AppExit::error());
            return;
        }
    }

    commands.insert_resource(SoundAssets {
        hit: asset_server.load(HIT_SOUND),
        shot: asset_server.load(SHOT_SOUND),
        life_lost: asset_server.load(LIFE_LOST_SOUND),
    });
}

fn play_hit_sound(
    mut commands: Commands,
    mut events: MessageReader<TargetHit>,
    sounds: Option<Res<SoundAssets>>,
) {
    let Some(sounds) = sounds else { return };
    for _event in events.read() {
        commands.spawn((
            AudioPlayer::new(sounds.hit.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}

fn play_shot_sound(
    mut commands: Commands,
    mut events: MessageReader<ShotMissed>,
    sounds: Option<Res<SoundAssets>>,
) {
    let Some(sounds) = sounds else { return };
    for _event in events.read() {
        commands.spawn((
            AudioPlayer::new(sounds.shot.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}

fn play_life_lost_sound(
    mut commands: Commands,
    mut events: MessageReader<LifeLost>,
    sounds: Option<Res<SoundAssets>>,
) {
    let Some(sounds) = sounds else { return };
    for _event in events.read() {
        commands.spawn((
            AudioPlayer::new(sounds.life_lost.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}
