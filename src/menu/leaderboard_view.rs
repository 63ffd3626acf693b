use super::*;

/// Spawn the leaderboard screen with the top stored runs.
///
/// The file is re-read on every entry so a run finished in a previous
/// process launch shows up without restarting.  A read/parse failure is
/// logged and the screen falls back to its empty message.
pub(super) fn setup_leaderboard_screen(mut commands: Commands, config: Res<TrainerConfig>) {
    let entries = match leaderboard::load_top(
        &leaderboard::leaderboard_path(),
        config.leaderboard_display_count,
    ) {
        Ok(entries) => entries,
        Err(err) => {
            error!("{err}");
            Vec::new()
        }
    };

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(background_color()),
            LeaderboardRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("LEADERBOARDS"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 32.0);

            if entries.is_empty() {
                root.spawn((
                    Text::new("No runs recorded yet"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(subtitle_color()),
                ));
            }

            for (rank, entry) in entries.iter().enumerate() {
                root.spawn((
                    Text::new(format!(
                        "{}. {} - Hits: {} - Time: {} - Accuracy: {}%",
                        rank + 1,
                        entry.player,
                        entry.hits,
                        entry.time,
                        entry.accuracy
                    )),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(row_color()),
                ));
                spacer(root, 8.0);
            }

            spacer(root, 40.0);

            root.spawn((
                Text::new("Press any key to return to the main menu"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        });
}

/// Recursively despawn the leaderboard screen.
pub(super) fn cleanup_leaderboard_screen(
    mut commands: Commands,
    query: Query<Entity, With<LeaderboardRoot>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Any key or click returns to the main menu.
pub(super) fn dismiss_system(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let any_key = keys.get_just_pressed().next().is_some();
    if any_key || mouse.just_pressed(MouseButton::Left) {
        next_state.set(GameState::MainMenu);
    }
}
