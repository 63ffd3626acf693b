use bevy::prelude::*;

pub(super) fn title_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}
pub(super) fn subtitle_color() -> Color {
    Color::srgb(0.55, 0.60, 0.70)
}
pub(super) fn hint_color() -> Color {
    Color::srgb(0.38, 0.44, 0.52)
}
pub(super) fn row_color() -> Color {
    Color::srgb(0.90, 0.92, 0.95)
}
pub(super) fn stat_color() -> Color {
    Color::srgb(0.92, 0.96, 1.0)
}

pub(super) fn field_bg() -> Color {
    Color::srgb(0.02, 0.13, 0.20)
}
pub(super) fn field_border_idle() -> Color {
    Color::srgb(0.35, 0.55, 0.65)
}
pub(super) fn field_border_active() -> Color {
    Color::srgb(0.95, 0.95, 0.95)
}
pub(super) fn field_text() -> Color {
    Color::srgb(0.92, 0.96, 1.0)
}

/// Spawn a fixed-height invisible spacer node.
pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}
