//! Click-density heatmap: one translucent red disc per recorded click,
//! composited onto a transparent canvas the size of the play area and saved
//! as a PNG.  Overlapping discs accumulate opacity, so click clusters read
//! as progressively more saturated red.  No binning or smoothing — the
//! image is a literal record of where the player clicked.

use std::path::Path;

use bevy::math::Vec2;
use image::{Rgba, RgbaImage};

use crate::error::{TrainerError, TrainerResult};

const DOT_RED: [u8; 3] = [255, 0, 0];

/// Render the click trace onto a transparent RGBA canvas.
pub fn render(points: &[Vec2], width: u32, height: u32, radius: f32, alpha: u8) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    for point in points {
        blend_dot(&mut canvas, point.x, point.y, radius, alpha);
    }
    canvas
}

/// Render and save the heatmap.  Encoding or I/O failure is surfaced.
pub fn generate(
    points: &[Vec2],
    path: &Path,
    width: u32,
    height: u32,
    radius: f32,
    alpha: u8,
) -> TrainerResult<()> {
    let canvas = render(points, width, height, radius, alpha);
    canvas.save(path).map_err(|err| TrainerError::HeatmapSave {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Source-over composite one translucent disc onto the canvas.
///
/// Pixels are sampled at their centres; only the disc's bounding box is
/// visited, clamped to the canvas so off-edge clicks (or discs hanging past
/// a border) blend the visible part and skip the rest.
fn blend_dot(canvas: &mut RgbaImage, cx: f32, cy: f32, radius: f32, alpha: u8) {
    let (width, height) = canvas.dimensions();
    let min_x = (cx - radius).floor().max(0.0) as u32;
    let max_x = ((cx + radius).ceil() as i64).clamp(0, width as i64 - 1) as u32;
    let min_y = (cy - radius).floor().max(0.0) as u32;
    let max_y = ((cy + radius).ceil() as i64).clamp(0, height as i64 - 1) as u32;

    let src_alpha = alpha as f32 / 255.0;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy > radius * radius {
                continue;
            }

            let pixel = canvas.get_pixel_mut(x, y);
            *pixel = composite(*pixel, src_alpha);
        }
    }
}

/// Standard source-over blend of the red dot colour at `src_alpha` onto an
/// existing (straight-alpha) pixel.
fn composite(dst: Rgba<u8>, src_alpha: f32) -> Rgba<u8> {
    let dst_alpha = dst.0[3] as f32 / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let mut out = [0u8; 4];
    for (channel, slot) in out.iter_mut().take(3).enumerate() {
        let src = DOT_RED[channel] as f32;
        let dst_c = dst.0[channel] as f32;
        let blended = (src * src_alpha + dst_c * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        *slot = blended.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn canvas_matches_requested_dimensions() {
        let canvas = render(&[], 80, 60, 5.0, 50);
        assert_eq!(canvas.dimensions(), (80, 60));
    }

    #[test]
    fn single_dot_paints_translucent_red_at_its_centre() {
        let canvas = render(&[Vec2::new(20.0, 20.0)], 40, 40, 5.0, 50);
        let centre = canvas.get_pixel(20, 20);
        assert_eq!(centre.0[0], 255, "dot must be red");
        assert_eq!(centre.0[3], 50, "dot must keep its configured alpha");
        // Far corner untouched.
        assert_eq!(canvas.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn pixels_outside_the_radius_stay_transparent() {
        let canvas = render(&[Vec2::new(20.0, 20.0)], 40, 40, 5.0, 50);
        assert_eq!(canvas.get_pixel(20, 27).0[3], 0);
    }

    #[test]
    fn overlapping_dots_accumulate_opacity() {
        let point = Vec2::new(20.0, 20.0);
        let once = render(&[point], 40, 40, 5.0, 50);
        let twice = render(&[point, point], 40, 40, 5.0, 50);
        assert!(
            twice.get_pixel(20, 20).0[3] > once.get_pixel(20, 20).0[3],
            "stacked clicks must darken"
        );
    }

    #[test]
    fn dots_clip_cleanly_at_the_canvas_edge() {
        // A click at the very corner must not panic or wrap.
        let canvas = render(&[Vec2::new(0.0, 0.0)], 40, 40, 5.0, 50);
        assert!(canvas.get_pixel(0, 0).0[3] > 0);
        assert_eq!(canvas.get_pixel(39, 39).0[3], 0);
    }

    #[test]
    fn generate_writes_a_loadable_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("heatmap.png");

        generate(&[Vec2::new(10.0, 10.0)], &path, 40, 40, 5.0, 50).unwrap();

        let reloaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(reloaded.dimensions(), (40, 40));
        assert!(reloaded.get_pixel(10, 10).0[3] > 0);
    }
}
