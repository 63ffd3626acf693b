//! The clickable target: growth state, hit testing, and bullseye visuals.
//!
//! A target is born at radius zero, grows by a fixed per-tick rate until it
//! reaches the configured maximum, then shrinks at the same rate.  A target
//! that shrinks back to zero has expired (a miss).  Position and radius are
//! kept in window space on the component itself so hit testing runs directly
//! against cursor coordinates; [`sync_target_visuals`] mirrors the radius
//! into the render transform every frame.

use bevy::prelude::*;

use crate::graphics::window_to_world;

/// Z layer for target meshes, above the background clear colour.
const TARGET_Z: f32 = 1.0;

/// Growth state of one clickable target.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Target {
    /// Centre in window space (top-left origin, y down).
    pub pos: Vec2,
    /// Current radius in pixels.
    pub size: f32,
    /// `true` while growing toward the maximum, `false` while shrinking.
    pub growing: bool,
}

impl Target {
    /// A fresh target at `pos`: radius zero, growing.
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: 0.0,
            growing: true,
        }
    }

    /// Advance one fixed tick.
    ///
    /// The flip to shrinking happens when the *next* growth step would reach
    /// or exceed `max_size`, so the radius never overshoots the maximum.
    pub fn advance(&mut self, rate: f32, max_size: f32) {
        if self.size + rate >= max_size {
            self.growing = false;
        }
        if self.growing {
            self.size += rate;
        } else {
            self.size -= rate;
        }
    }

    /// A target that has shrunk back to nothing counts as a miss.
    pub fn expired(&self) -> bool {
        !self.growing && self.size <= 0.0
    }

    /// Hit test: `true` iff `point` lies within the current radius.
    /// A point exactly on the rim is a hit.
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) <= self.size
    }
}

// ── Visuals ───────────────────────────────────────────────────────────────────

fn ring_red() -> Color {
    Color::srgb(0.88, 0.12, 0.12)
}
fn ring_white() -> Color {
    Color::srgb(0.95, 0.95, 0.95)
}

/// Spawn a target entity with its bullseye mesh children.
///
/// The rings are unit-radius circles scaled down per ring; the parent
/// transform's uniform scale tracks the live radius, so the whole bullseye
/// pulses with the growth state.
pub fn spawn_target(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    pos: Vec2,
) {
    let rings: [(f32, Color); 4] = [
        (1.0, ring_red()),
        (0.75, ring_white()),
        (0.5, ring_red()),
        (0.25, ring_white()),
    ];

    commands
        .spawn((
            Target::new(pos),
            Transform::from_translation(window_to_world(pos).extend(TARGET_Z))
                .with_scale(Vec3::new(0.0, 0.0, 1.0)),
            Visibility::default(),
        ))
        .with_children(|parent| {
            for (layer, (radius, color)) in rings.iter().enumerate() {
                let mesh = meshes.add(Circle::new(*radius));
                let material = materials.add(ColorMaterial::from_color(*color));
                parent.spawn((
                    Mesh2d(mesh),
                    MeshMaterial2d(material),
                    // Stack the rings slightly so inner circles draw on top.
                    Transform::from_translation(Vec3::new(0.0, 0.0, 0.1 * layer as f32)),
                ));
            }
        });
}

/// Mirror each target's live radius into its render transform.
/// Only x/y scale: the ring z offsets must not stretch with the bullseye.
pub fn sync_target_visuals(mut query: Query<(&Target, &mut Transform)>) {
    for (target, mut transform) in query.iter_mut() {
        let size = target.size.max(0.0);
        transform.scale = Vec3::new(size, size, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: f32 = 0.2;
    const MAX: f32 = 30.0;

    #[test]
    fn new_target_is_not_expired() {
        assert!(!Target::new(Vec2::new(10.0, 10.0)).expired());
    }

    #[test]
    fn growth_is_monotonic_until_flip() {
        let mut target = Target::new(Vec2::ZERO);
        let mut last = target.size;
        while target.growing {
            target.advance(RATE, MAX);
            if target.growing {
                assert!(target.size > last, "growing target must gain size");
            }
            last = target.size;
        }
    }

    #[test]
    fn size_never_exceeds_max() {
        let mut target = Target::new(Vec2::ZERO);
        for _ in 0..1000 {
            target.advance(RATE, MAX);
            assert!(target.size <= MAX, "size {} exceeded max", target.size);
        }
    }

    #[test]
    fn shrink_is_monotonic_and_reaches_expiry() {
        let mut target = Target::new(Vec2::ZERO);
        // Tick until the flip, then verify strict decay to expiry.
        while target.growing {
            target.advance(RATE, MAX);
        }
        let mut last = target.size;
        let mut ticks = 0;
        while !target.expired() {
            target.advance(RATE, MAX);
            assert!(target.size < last, "shrinking target must lose size");
            last = target.size;
            ticks += 1;
            assert!(ticks < 10_000, "target never expired");
        }
    }

    #[test]
    fn contains_is_boundary_inclusive() {
        let target = Target {
            pos: Vec2::new(100.0, 100.0),
            size: 10.0,
            growing: true,
        };
        assert!(target.contains(Vec2::new(105.0, 100.0)));
        assert!(target.contains(Vec2::new(110.0, 100.0)), "rim must count as a hit");
        assert!(!target.contains(Vec2::new(110.5, 100.0)));
    }

    #[test]
    fn zero_size_target_only_contains_its_centre() {
        let target = Target::new(Vec2::new(50.0, 50.0));
        assert!(target.contains(Vec2::new(50.0, 50.0)));
        assert!(!target.contains(Vec2::new(50.1, 50.0)));
    }
}
