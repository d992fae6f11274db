//! Perspective orbit camera: view/projection matrices, pick rays, and
//! the focused-body follow step.

use glam::{Mat4, Vec2, Vec3};

/// Per-frame interpolation factor for camera follow. Applied once per
/// frame regardless of frame delta, a known frame-rate dependency kept
/// for compatibility with the observed behavior.
pub const FOLLOW_LERP: f32 = 0.05;

const DEFAULT_FOV_Y: f32 = 60.0_f32 * std::f32::consts::PI / 180.0;
const DEFAULT_NEAR: f32 = 0.1;
const DEFAULT_FAR: f32 = 1000.0;

/// A picking ray in world space.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Nearest non-negative intersection distance with a sphere, if any.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_d = disc.sqrt();
        let near = -b - sqrt_d;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + sqrt_d;
        (far >= 0.0).then_some(far)
    }
}

#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub position: Vec3,
    /// Orbit target (what the controls revolve around).
    pub target: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(50.0, 50.0, 80.0),
            target: Vec3::ZERO,
            fov_y: DEFAULT_FOV_Y,
            aspect,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Unit vector from the camera toward its target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Cast a world-space ray through a normalized device coordinate
    /// (x, y in [-1, 1], y up).
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray {
            origin: self.position,
            dir: (far - near).normalize_or_zero(),
        }
    }

    /// One smoothing step toward the focused body. Position chases
    /// `body_pos + offset`, the orbit target chases the body itself.
    pub fn follow_step(&mut self, body_pos: Vec3, offset: Vec3) {
        self.position = self.position.lerp(body_pos + offset, FOLLOW_LERP);
        self.target = self.target.lerp(body_pos, FOLLOW_LERP);
    }
}
