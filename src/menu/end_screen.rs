use super::*;

/// Persist the finished session: append the leaderboard entry and write the
/// click heatmap.  Runs once on entering the end screen, after gameplay has
/// stopped, so the blocking file I/O never stalls a live frame.  Failures
/// are logged rather than swallowed.
pub(super) fn persist_session(
    stats: Res<SessionStats>,
    trace: Res<ClickTrace>,
    name: Res<PlayerName>,
    config: Res<TrainerConfig>,
) {
    let entry = LeaderboardEntry {
        player: name.0.clone(),
        time: format_time(stats.elapsed),
        hits: stats.hits,
        accuracy: stats.accuracy(),
    };
    match leaderboard::append(&leaderboard::leaderboard_path(), entry) {
        Ok(()) => info!("Saved session to the leaderboard"),
        Err(err) => error!("{err}"),
    }

    match heatmap::generate(
        &trace.0,
        Path::new(HEATMAP_FILE),
        WINDOW_WIDTH as u32,
        WINDOW_HEIGHT as u32,
        config.heatmap_dot_radius,
        config.heatmap_dot_alpha,
    ) {
        Ok(()) => info!("Saved click heatmap to {HEATMAP_FILE}"),
        Err(err) => error!("{err}"),
    }
}

/// Spawn the final-stats screen over the frozen playfield.
pub(super) fn setup_end_screen(mut commands: Commands, stats: Res<SessionStats>) {
    let lines = [
        format!("Time: {}", format_time(stats.elapsed)),
        format!("Speed: {:.1} t/s", stats.speed()),
        format!("Hits: {}", stats.hits),
        format!("Accuracy: {}%", stats.accuracy()),
    ];

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(background_color()),
            ZIndex(100),
            EndScreenRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("SESSION OVER"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 36.0);

            for line in lines {
                root.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 26.0,
                        ..default()
                    },
                    TextColor(stat_color()),
                ));
                spacer(root, 14.0);
            }

            spacer(root, 30.0);

            root.spawn((
                Text::new("Press any key to quit"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        });
}

/// Any key press ends the process.
pub(super) fn dismiss_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keys.get_just_pressed().next().is_some() {
        exit.write(AppExit::Success);
    }
}
