//! View-dependent lens flare: a primary glow at the light source and a
//! chain of secondary ghosts strung along the screen-space axis between
//! the light and the view center. Pure math over camera state; the
//! renderer decides how to draw the elements.

use glam::Vec3;

use crate::camera::OrbitCamera;

/// Sharpens falloff as the light leaves the view center.
const ALIGNMENT_POWER: f32 = 3.0;
/// Ghosts dimmer than this are not worth drawing.
const VISIBILITY_THRESHOLD: f32 = 0.1;
/// Distance damping for the primary glow.
const DISTANCE_SCALE: f32 = 60.0;
const DAMP_MIN: f32 = 0.4;
const DAMP_MAX: f32 = 1.2;

/// Fractions along the light → camera axis where ghosts sit, with
/// their relative sizes.
const GHOSTS: [(f32, f32); 4] = [(0.25, 0.6), (0.45, 0.35), (0.65, 0.5), (0.85, 0.25)];

#[derive(Debug, Clone, Copy)]
pub struct FlareElement {
    /// World-space anchor the renderer projects to screen space.
    pub position: Vec3,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Default)]
pub struct LensFlare {
    pub primary: Option<FlareElement>,
    pub ghosts: Vec<FlareElement>,
}

/// Alignment of the light with the view direction, in [0, 1].
/// Zero when the light is at or behind the camera plane.
pub fn alignment(camera: &OrbitCamera, light: Vec3) -> f32 {
    let to_light = light - camera.position;
    let distance = to_light.length();
    if distance <= f32::EPSILON {
        return 0.0;
    }
    let facing = (to_light / distance).dot(camera.forward());
    facing.max(0.0).powf(ALIGNMENT_POWER)
}

/// Evaluate the flare for this frame. `None` primary when the light is
/// out of view.
pub fn evaluate(camera: &OrbitCamera, light: Vec3) -> LensFlare {
    let intensity = alignment(camera, light);
    if intensity <= 0.0 {
        return LensFlare::default();
    }

    let distance = (light - camera.position).length();
    let damping = (DISTANCE_SCALE / distance.max(f32::EPSILON)).clamp(DAMP_MIN, DAMP_MAX);

    let primary = FlareElement {
        position: light,
        scale: damping * (0.5 + 0.5 * intensity),
        opacity: intensity,
    };

    let ghosts = GHOSTS
        .iter()
        .filter_map(|&(fraction, size)| {
            let opacity = intensity * (1.0 - fraction);
            if opacity < VISIBILITY_THRESHOLD {
                return None;
            }
            Some(FlareElement {
                position: light.lerp(camera.position, fraction),
                scale: size * damping,
                opacity,
            })
        })
        .collect();

    LensFlare {
        primary: Some(primary),
        ghosts,
    }
}
