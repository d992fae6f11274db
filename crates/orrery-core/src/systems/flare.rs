//! Respawning flare particles around the star: a continuous fountain
//! from a fixed-size pool. Expired particles respawn on the star's
//! surface shell instead of being removed, so the population is
//! constant.

use glam::Vec3;

use super::rng::Rng;
use crate::model::catalog::{FLARE_COUNT, FLARE_SHELL_MAX, FLARE_SHELL_MIN};

/// Per-frame velocity damping; unexpired particles slow asymptotically.
const FRICTION: f32 = 0.98;
/// Outward speed as a fraction of spawn position, plus a random bonus.
const SPEED_BASE: f32 = 0.01;
const SPEED_SPREAD: f32 = 0.02;
/// Lifetime bounds, in frames.
const MAX_AGE_BASE: f32 = 50.0;
const MAX_AGE_SPREAD: f32 = 50.0;

#[derive(Debug, Clone)]
pub struct FlareParticle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub age: f32,
    pub max_age: f32,
}

#[derive(Debug, Clone)]
pub struct FlarePool {
    particles: Vec<FlareParticle>,
    rng: Rng,
}

impl FlarePool {
    pub fn new(seed: u64) -> Self {
        Self::with_count(seed, FLARE_COUNT)
    }

    pub fn with_count(seed: u64, count: usize) -> Self {
        let mut rng = Rng::new(seed);
        let particles = (0..count)
            .map(|_| {
                let position = shell_point(&mut rng);
                FlareParticle {
                    velocity: position * (SPEED_BASE + SPEED_SPREAD),
                    // Stagger initial ages so the pool starts mid-fountain.
                    age: rng.next_f32() * 100.0,
                    max_age: MAX_AGE_BASE + rng.next_f32() * MAX_AGE_SPREAD,
                    position,
                }
            })
            .collect();
        Self { particles, rng }
    }

    pub fn particles(&self) -> &[FlareParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// One frame: age everything, respawn the expired, integrate and
    /// damp the rest. Runs every frame regardless of pause; the
    /// fountain is scenery, not simulation time.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.age += 1.0;
            if p.age >= p.max_age {
                p.position = shell_point(&mut self.rng);
                let speed = SPEED_BASE + self.rng.next_f32() * SPEED_SPREAD;
                p.velocity = p.position * speed;
                p.age = 0.0;
                p.max_age = MAX_AGE_BASE + self.rng.next_f32() * MAX_AGE_SPREAD;
            } else {
                p.position += p.velocity;
                p.velocity *= FRICTION;
            }
        }
    }
}

/// Uniform point on the spawn shell: inverse-cosine latitude sampling
/// avoids pole clustering; radius is uniform within the shell band.
fn shell_point(rng: &mut Rng) -> Vec3 {
    let theta = rng.next_f32() * std::f32::consts::TAU;
    let phi = (2.0 * rng.next_f32() - 1.0).acos();
    let radius = FLARE_SHELL_MIN + rng.next_f32() * (FLARE_SHELL_MAX - FLARE_SHELL_MIN);
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_is_constant() {
        let mut pool = FlarePool::with_count(42, 64);
        for _ in 0..500 {
            pool.tick();
        }
        assert_eq!(pool.len(), 64);
    }

    #[test]
    fn age_never_exceeds_max_by_more_than_one_frame() {
        let mut pool = FlarePool::with_count(7, 64);
        for _ in 0..300 {
            pool.tick();
            for p in pool.particles() {
                assert!(p.age < p.max_age + 1.0, "age {} vs max {}", p.age, p.max_age);
            }
        }
    }

    #[test]
    fn respawn_lands_on_the_shell() {
        let mut pool = FlarePool::with_count(3, 32);
        // Enough ticks that every particle has respawned at least once.
        for _ in 0..200 {
            pool.tick();
            for p in pool.particles() {
                if p.age == 0.0 {
                    let r = p.position.length();
                    assert!(
                        (FLARE_SHELL_MIN..=FLARE_SHELL_MAX).contains(&r),
                        "respawned at radius {r}"
                    );
                }
            }
        }
    }

    #[test]
    fn surviving_particles_drift_outward_and_slow() {
        let mut pool = FlarePool::with_count(11, 1);
        // Force a fresh particle so we can watch it drift.
        while pool.particles()[0].age != 0.0 {
            pool.tick();
        }
        let r0 = pool.particles()[0].position.length();
        let v0 = pool.particles()[0].velocity.length();
        pool.tick();
        let p = &pool.particles()[0];
        if p.age > 0.0 {
            assert!(p.position.length() > r0);
            assert!(p.velocity.length() < v0);
        }
    }

    #[test]
    fn same_seed_reproduces_the_field() {
        let mut a = FlarePool::with_count(99, 16);
        let mut b = FlarePool::with_count(99, 16);
        for _ in 0..50 {
            a.tick();
            b.tick();
        }
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.position, pb.position);
        }
    }
}
