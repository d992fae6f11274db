//! Static-cloud belts: particle positions are generated once and the
//! whole cloud rotates rigidly about the vertical axis. No per-particle
//! lifecycle.

use glam::{Mat4, Vec3};

use super::rng::Rng;

#[derive(Debug, Clone)]
pub struct BeltCloud {
    positions: Vec<Vec3>,
    /// Rigid rotation about Y, radians.
    rotation: f32,
    spin_rate: f32,
    pub visible: bool,
}

impl BeltCloud {
    /// Generate `count` points uniform-in-annulus between `inner` and
    /// `outer` radius, with vertical jitter in ±`height_jitter`.
    pub fn generate(
        count: usize,
        inner: f32,
        outer: f32,
        height_jitter: f32,
        spin_rate: f32,
        seed: u64,
    ) -> Self {
        let mut rng = Rng::new(seed);
        let positions = (0..count)
            .map(|_| {
                let radius = inner + rng.next_f32() * (outer - inner);
                let angle = rng.next_f32() * std::f32::consts::TAU;
                let height = (rng.next_f32() - 0.5) * 2.0 * height_jitter;
                Vec3::new(angle.cos() * radius, height, angle.sin() * radius)
            })
            .collect();
        Self {
            positions,
            rotation: 0.0,
            spin_rate,
            visible: true,
        }
    }

    /// Advance the rigid rotation by one frame, scaled by the clock's
    /// effective rate. Hidden belts do not advance.
    pub fn tick(&mut self, effective_rate: f64) {
        if self.visible {
            self.rotation += self.spin_rate * effective_rate as f32;
        }
    }

    /// Immutable generated positions, in belt-local space.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// World transform for the whole cloud.
    pub fn model_transform(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_stay_inside_the_annulus() {
        let belt = BeltCloud::generate(500, 27.0, 33.0, 1.0, 0.0005, 42);
        assert_eq!(belt.len(), 500);
        for p in belt.positions() {
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((27.0..=33.0).contains(&r), "radius {r}");
            assert!(p.y.abs() <= 1.0, "height {}", p.y);
        }
    }

    #[test]
    fn rotation_scales_with_effective_rate() {
        let mut belt = BeltCloud::generate(10, 27.0, 33.0, 1.0, 0.0005, 1);
        belt.tick(2.0);
        assert!((belt.rotation() - 0.001).abs() < 1e-7);
        belt.tick(-2.0);
        assert!(belt.rotation().abs() < 1e-7);
    }

    #[test]
    fn zero_rate_freezes_the_cloud() {
        let mut belt = BeltCloud::generate(10, 70.0, 100.0, 2.5, 0.0002, 1);
        belt.tick(0.0);
        assert_eq!(belt.rotation(), 0.0);
    }

    #[test]
    fn hidden_belt_does_not_advance() {
        let mut belt = BeltCloud::generate(10, 27.0, 33.0, 1.0, 0.0005, 1);
        belt.visible = false;
        belt.tick(1.0);
        assert_eq!(belt.rotation(), 0.0);
    }

    #[test]
    fn positions_are_immutable_under_tick() {
        let mut belt = BeltCloud::generate(50, 27.0, 33.0, 1.0, 0.0005, 5);
        let before = belt.positions().to_vec();
        belt.tick(1.0);
        assert_eq!(before, belt.positions());
    }
}
