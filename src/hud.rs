//! In-game top status bar: a grey strip across the top of the playfield
//! showing elapsed time, speed, hits, and remaining lives.  A pure read-only
//! view over [`SessionStats`]; nothing here mutates game state.

use bevy::prelude::*;

use crate::config::TrainerConfig;
use crate::menu::GameState;
use crate::stats::{format_time, SessionStats};

/// Registers the top-bar UI for the playing state.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), setup_top_bar)
            .add_systems(OnExit(GameState::Playing), cleanup_top_bar)
            .add_systems(
                Update,
                refresh_top_bar.run_if(in_state(GameState::Playing)),
            );
    }
}

/// Root node of the top bar; despawned on `OnExit(Playing)`.
#[derive(Component)]
pub struct TopBarRoot;

/// Tags each stat label with the value it displays.
#[derive(Component, Clone, Copy, Debug)]
pub enum StatLabel {
    Time,
    Speed,
    Hits,
    Lives,
}

fn bar_bg() -> Color {
    Color::srgb(0.75, 0.75, 0.75)
}
fn bar_text() -> Color {
    Color::BLACK
}

/// Spawn the status strip with its four stat labels.
pub fn setup_top_bar(mut commands: Commands, config: Res<TrainerConfig>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(config.top_bar_height),
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::horizontal(Val::Px(12.0)),
                ..default()
            },
            BackgroundColor(bar_bg()),
            TopBarRoot,
        ))
        .with_children(|bar| {
            for label in [
                StatLabel::Time,
                StatLabel::Speed,
                StatLabel::Hits,
                StatLabel::Lives,
            ] {
                bar.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(bar_text()),
                    label,
                ));
            }
        });
}

/// Despawn the top bar and its labels.
pub fn cleanup_top_bar(mut commands: Commands, query: Query<Entity, With<TopBarRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Refresh every stat label from the live counters.
pub fn refresh_top_bar(
    stats: Res<SessionStats>,
    config: Res<TrainerConfig>,
    mut labels: Query<(&StatLabel, &mut Text)>,
) {
    for (label, mut text) in labels.iter_mut() {
        text.0 = match label {
            StatLabel::Time => format!("Time: {}", format_time(stats.elapsed)),
            StatLabel::Speed => format!("Speed: {:.1} t/s", stats.speed()),
            StatLabel::Hits => format!("Hits: {}", stats.hits),
            StatLabel::Lives => format!("Lives: {}", stats.lives_left(config.lives_limit)),
        };
    }
}
