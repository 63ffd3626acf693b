use bevy::prelude::*;
use bevy::window::WindowResolution;

use aim_trainer::audio::AudioCuePlugin;
use aim_trainer::config::{self, TrainerConfig};
use aim_trainer::constants::{GAMEPLAY_TICK_HZ, WINDOW_HEIGHT, WINDOW_WIDTH};
use aim_trainer::graphics;
use aim_trainer::hud::HudPlugin;
use aim_trainer::menu::MenuPlugin;
use aim_trainer::session::SessionPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Aim Trainer".into(),
                resolution: WindowResolution::new(WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(graphics::background_color()))
        // Insert TrainerConfig with compiled defaults; load_trainer_config
        // will overwrite it from assets/trainer.toml (if present) in the
        // Startup schedule.
        .insert_resource(TrainerConfig::default())
        // Target growth advances one fixed rate step per tick, so gameplay
        // stepping is pinned to the historical 60 Hz frame pacing.
        .insert_resource(Time::<Fixed>::from_hz(GAMEPLAY_TICK_HZ))
        // MenuPlugin first: it registers GameState for everyone else.
        .add_plugins((MenuPlugin, SessionPlugin, HudPlugin, AudioCuePlugin))
        .add_systems(
            Startup,
            (
                config::load_trainer_config,
                graphics::setup_camera.after(config::load_trainer_config),
            ),
        )
        .run();
}
