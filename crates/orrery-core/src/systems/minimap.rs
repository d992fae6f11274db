//! Top-down minimap projection. Produces an ordered list of abstract
//! draw commands from the hierarchy's angular state; the host paints
//! them on whatever 2-D surface it has.

use glam::Vec2;

use crate::model::body::{BodyId, BodyKind};
use crate::model::hierarchy::Hierarchy;

/// Reference canvas size the pixel constants were tuned at.
pub const BASE_SIZE: f32 = 180.0;
/// World units per pixel at the reference size.
const BASE_SCALE: f32 = 1.3;
/// Camera marker keeps this margin from the panel edge.
const EDGE_MARGIN: f32 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub enum MinimapCmd {
    Clear,
    OrbitCircle { center: Vec2, radius: f32 },
    BodyDot { center: Vec2, radius: f32, color: u32, focused: bool },
    FocusRing { center: Vec2, radius: f32 },
    CameraMarker { position: Vec2, bearing: f32 },
}

/// Project the current state into draw commands for a square panel of
/// `size` pixels. Pure; call once per repaint.
pub fn project(
    hierarchy: &Hierarchy,
    sim_time: f64,
    camera_xz: Vec2,
    focused: Option<BodyId>,
    size: f32,
) -> Vec<MinimapCmd> {
    let size_mult = size / BASE_SIZE;
    let scale = BASE_SCALE / size_mult;
    let center = Vec2::splat(size / 2.0);

    let mut cmds = vec![MinimapCmd::Clear];

    for body in hierarchy.top_level() {
        if body.orbit_radius > 0.0 {
            cmds.push(MinimapCmd::OrbitCircle {
                center,
                radius: body.orbit_radius / scale,
            });
        }
    }

    // Star dot at the panel center.
    if let Some(star) = hierarchy.bodies().find(|b| b.kind == BodyKind::Star) {
        cmds.push(MinimapCmd::BodyDot {
            center,
            radius: (4.0 * size_mult).max(2.0),
            color: star.color,
            focused: false,
        });
    }

    for body in hierarchy.top_level() {
        let angle = hierarchy.orbit_angle(body.id, sim_time) as f32;
        let offset = Vec2::new(angle.cos(), angle.sin()) * (body.orbit_radius / scale);
        let dot_center = center + offset;
        let is_focused = focused == Some(body.id);
        let radius = (body.size * 1.5 * size_mult).max(1.5);
        cmds.push(MinimapCmd::BodyDot {
            center: dot_center,
            radius,
            color: body.color,
            focused: is_focused,
        });
        if is_focused {
            cmds.push(MinimapCmd::FocusRing {
                center: dot_center,
                radius: radius + 3.0 * size_mult,
            });
        }
    }

    // Camera marker: same projection, clamped inside the panel.
    let cam_distance = (camera_xz.length() / scale).min(size / 2.0 - EDGE_MARGIN);
    let bearing = camera_xz.y.atan2(camera_xz.x);
    cmds.push(MinimapCmd::CameraMarker {
        position: center + Vec2::new(bearing.cos(), bearing.sin()) * cam_distance,
        bearing,
    });

    cmds
}
