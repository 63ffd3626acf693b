use super::*;

/// Keys the name field accepts while active, with the character each one
/// contributes to the buffer.
const KEY_CHARS: &[(KeyCode, char)] = &[
    (KeyCode::KeyA, 'A'),
    (KeyCode::KeyB, 'B'),
    (KeyCode::KeyC, 'C'),
    (KeyCode::KeyD, 'D'),
    (KeyCode::KeyE, 'E'),
    (KeyCode::KeyF, 'F'),
    (KeyCode::KeyG, 'G'),
    (KeyCode::KeyH, 'H'),
    (KeyCode::KeyI, 'I'),
    (KeyCode::KeyJ, 'J'),
    (KeyCode::KeyK, 'K'),
    (KeyCode::KeyL, 'L'),
    (KeyCode::KeyM, 'M'),
    (KeyCode::KeyN, 'N'),
    (KeyCode::KeyO, 'O'),
    (KeyCode::KeyP, 'P'),
    (KeyCode::KeyQ, 'Q'),
    (KeyCode::KeyR, 'R'),
    (KeyCode::KeyS, 'S'),
    (KeyCode::KeyT, 'T'),
    (KeyCode::KeyU, 'U'),
    (KeyCode::KeyV, 'V'),
    (KeyCode::KeyW, 'W'),
    (KeyCode::KeyX, 'X'),
    (KeyCode::KeyY, 'Y'),
    (KeyCode::KeyZ, 'Z'),
    (KeyCode::Digit0, '0'),
    (KeyCode::Digit1, '1'),
    (KeyCode::Digit2, '2'),
    (KeyCode::Digit3, '3'),
    (KeyCode::Digit4, '4'),
    (KeyCode::Digit5, '5'),
    (KeyCode::Digit6, '6'),
    (KeyCode::Digit7, '7'),
    (KeyCode::Digit8, '8'),
    (KeyCode::Digit9, '9'),
    (KeyCode::Space, ' '),
    (KeyCode::Minus, '-'),
];

/// Spawn the full-screen main menu.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │               AIM TRAINER                   │
/// │   Click the targets before they shrink      │
/// │                                             │
/// │            Enter your name:                 │
/// │            [ ________ ]                     │
/// │                                             │
/// │            1. Play Game                     │
/// │            2. Leaderboards                  │
/// │            Press Esc to quit                │
/// └─────────────────────────────────────────────┘
/// ```
pub(super) fn setup_main_menu(mut commands: Commands, editor: Res<NameEditor>) {
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
            MainMenuRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("AIM TRAINER"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 10.0);

            root.spawn((
                Text::new("Click the targets before they shrink away"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(subtitle_color()),
            ));

            spacer(root, 44.0);

            root.spawn((
                Text::new("Enter your name:"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(row_color()),
            ));

            spacer(root, 8.0);

            // ── Name field ────────────────────────────────────────────────────
            root.spawn((
                Button,
                Node {
                    width: Val::Px(260.0),
                    height: Val::Px(44.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(field_bg()),
                BorderColor::all(field_border_idle()),
                NameFieldButton,
            ))
            .with_children(|field| {
                field.spawn((
                    Text::new(editor.buffer.clone()),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(field_text()),
                    NameValueText,
                ));
            });

            spacer(root, 44.0);

            for line in ["1. Play Game", "2. Leaderboards"] {
                root.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 22.0,
                        ..default()
                    },
                    TextColor(row_color()),
                ));
                spacer(root, 10.0);
            }

            spacer(root, 16.0);

            root.spawn((
                Text::new("Press Esc to quit  ·  click the field to edit your name"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        });
}

/// Recursively despawn all main-menu entities.
pub(super) fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Clicking inside the name field activates it; clicking anywhere else
/// deactivates it.
pub(super) fn name_field_focus_system(
    mouse: Res<ButtonInput<MouseButton>>,
    field: Query<&Interaction, With<NameFieldButton>>,
    mut editor: ResMut<NameEditor>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(interaction) = field.single() else {
        return;
    };
    editor.active = matches!(interaction, Interaction::Pressed | Interaction::Hovered);
}

/// While the field is active, keystrokes edit the buffer: characters
/// append, Backspace removes the last character, Enter commits and
/// deactivates.
pub(super) fn name_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<TrainerConfig>,
    mut editor: ResMut<NameEditor>,
) {
    if !editor.active {
        return;
    }

    if keys.just_pressed(KeyCode::Backspace) {
        editor.buffer.pop();
    }
    if keys.just_pressed(KeyCode::Enter) {
        editor.active = false;
        return;
    }

    for (key, ch) in KEY_CHARS {
        if keys.just_pressed(*key) {
            editor.buffer.push(*ch);
        }
    }

    let max_len = config.name_max_len;
    if editor.buffer.len() > max_len {
        editor.buffer.truncate(max_len);
    }
}

/// Mirror the edit buffer into the field text and tint the border while the
/// field is active.
pub(super) fn name_display_system(
    editor: Res<NameEditor>,
    mut value_text: Query<&mut Text, With<NameValueText>>,
    mut field_border: Query<&mut BorderColor, With<NameFieldButton>>,
) {
    if !editor.is_changed() {
        return;
    }

    for mut text in value_text.iter_mut() {
        text.0 = if editor.active {
            format!("{}_", editor.buffer)
        } else {
            editor.buffer.clone()
        };
    }
    for mut border in field_border.iter_mut() {
        *border = BorderColor::all(if editor.active {
            field_border_active()
        } else {
            field_border_idle()
        });
    }
}

/// While the field is inactive, digit keys navigate: `1` starts a session
/// (requires a non-empty name), `2` opens the leaderboards.
pub(super) fn menu_navigation_system(
    keys: Res<ButtonInput<KeyCode>>,
    editor: Res<NameEditor>,
    mut player_name: ResMut<PlayerName>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if editor.active {
        return;
    }

    if keys.just_pressed(KeyCode::Digit1) {
        let name = editor.buffer.trim();
        if !name.is_empty() {
            player_name.0 = name.to_string();
            next_state.set(GameState::Playing);
        }
    } else if keys.just_pressed(KeyCode::Digit2) {
        next_state.set(GameState::Leaderboard);
    }
}
