//! Camera setup and coordinate mapping.
//!
//! Game logic (spawn positions, hit testing, the click trace) works in
//! window space: origin at the top-left corner, y growing downward — the
//! coordinate system cursor positions arrive in.  Rendering happens in Bevy
//! world space: origin at the window centre, y growing upward.
//! [`window_to_world`] converts between the two.

use bevy::prelude::*;

use crate::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Background colour of the playfield and every menu screen.
pub fn background_color() -> Color {
    Color::srgb(0.0, 0.098, 0.157)
}

/// Setup camera for 2D rendering.
pub fn setup_camera(mut commands: Commands) {
    // Default Camera2d with default scale shows the full window area.
    commands.spawn(Camera2d);
}

/// Map a window-space position (top-left origin, y down) to world space
/// (centre origin, y up) for the fixed-size window.
pub fn window_to_world(pos: Vec2) -> Vec2 {
    Vec2::new(pos.x - WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0 - pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_centre_maps_to_world_origin() {
        let world = window_to_world(Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0));
        assert_eq!(world, Vec2::ZERO);
    }

    #[test]
    fn window_top_left_maps_to_upper_left_quadrant() {
        let world = window_to_world(Vec2::ZERO);
        assert_eq!(world, Vec2::new(-WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0));
    }

    #[test]
    fn y_axis_is_flipped() {
        let near_bottom = window_to_world(Vec2::new(0.0, WINDOW_HEIGHT));
        assert_eq!(near_bottom.y, -WINDOW_HEIGHT / 2.0);
    }
}
