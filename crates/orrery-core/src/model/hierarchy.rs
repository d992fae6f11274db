//! Nested orbital-frame model.
//!
//! Every body's world transform is a pure function of simulation time:
//! parent chain ∘ inclination tilt ∘ orbital rotation ∘ radius translate
//! ∘ axial tilt ∘ spin rotation. Orbital angles are resampled from
//! absolute sim time each frame (deterministic, drift-free); spin is
//! integrated per frame and therefore path-dependent. The asymmetry is
//! intentional: orbital position must be exactly reproducible from
//! (initial angle, sim time) for the minimap and date resets.
//!
//! Angle math stays in f64; conversion to f32 happens at the transform
//! step only.

use std::collections::HashMap;

use glam::{Mat4, Vec3};

use super::body::{BodyId, BodyInfo, BodyKind};
use super::catalog;

/// Global orbital rate for star-orbiting bodies. Relative periods match
/// the catalog coefficients exactly; one nominal year for the
/// unit-speed body is 2π / K_ORBIT ≈ 62.8 sim units.
pub const K_ORBIT: f64 = 0.1;

/// Orbital rate for moons around their planet. Independent tunable,
/// not derived from K_ORBIT.
pub const K_MOON: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: &'static str,
    pub kind: BodyKind,
    pub color: u32,
    pub size: f32,
    pub orbit_radius: f32,
    pub orbit_speed: f64,
    pub spin_speed: f64,
    /// Orbital-plane tilt, radians.
    pub inclination: f32,
    /// Spin-axis tilt, radians.
    pub axial_tilt: f32,
    /// Orbital angle at sim time zero. Overwritten by the ephemeris
    /// adapter for top-level bodies on date changes.
    pub initial_angle: f64,
    /// Integrated spin angle, radians.
    pub spin_angle: f64,
    /// Non-owning back-reference; moons point at their planet,
    /// top-level bodies at the star.
    pub parent: Option<BodyId>,
    pub info: Option<BodyInfo>,
}

/// Owns every body in a flat arena. Moons follow their planet in the
/// arena; `BodyId` is the arena index.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    bodies: Vec<Body>,
}

impl Hierarchy {
    /// Build the full hierarchy from the static catalog: star, planets,
    /// dwarf planets, and each planet's moon table (planets without an
    /// entry get no moons).
    pub fn from_catalog() -> Self {
        let mut bodies = Vec::with_capacity(32);

        let star = &catalog::STAR;
        bodies.push(Body {
            id: BodyId(0),
            name: star.name,
            kind: star.kind,
            color: star.color,
            size: star.size,
            orbit_radius: 0.0,
            orbit_speed: 0.0,
            spin_speed: star.spin_speed,
            inclination: 0.0,
            axial_tilt: 0.0,
            initial_angle: 0.0,
            spin_angle: 0.0,
            parent: None,
            info: Some(star.info),
        });

        for spec in &catalog::PLANETS {
            let planet_id = BodyId(bodies.len() as u32);
            bodies.push(Body {
                id: planet_id,
                name: spec.name,
                kind: spec.kind,
                color: spec.color,
                size: spec.size,
                orbit_radius: spec.orbit_radius,
                orbit_speed: spec.orbit_speed,
                spin_speed: spec.spin_speed,
                inclination: spec.inclination_deg.to_radians(),
                axial_tilt: spec.axial_tilt_deg.to_radians(),
                initial_angle: 0.0,
                spin_angle: 0.0,
                parent: Some(BodyId(0)),
                info: Some(spec.info),
            });

            for moon in catalog::moons_of(spec.name) {
                bodies.push(Body {
                    id: BodyId(bodies.len() as u32),
                    name: moon.name,
                    kind: BodyKind::Moon,
                    color: moon.color,
                    size: moon.size,
                    orbit_radius: moon.orbit_radius,
                    orbit_speed: moon.orbit_speed,
                    spin_speed: 0.0,
                    inclination: 0.0,
                    axial_tilt: 0.0,
                    initial_angle: 0.0,
                    spin_angle: 0.0,
                    parent: Some(planet_id),
                    info: None,
                });
            }
        }

        Self { bodies }
    }

    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id.0 as usize]
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Star-orbiting planets and dwarf planets.
    pub fn top_level(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.kind.is_top_level())
    }

    pub fn id_of(&self, name: &str) -> Option<BodyId> {
        self.bodies.iter().find(|b| b.name == name).map(|b| b.id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Orbital angle of a body at an absolute sim time. Pure function of
    /// time; frame count never enters.
    pub fn orbit_angle(&self, id: BodyId, sim_time: f64) -> f64 {
        let body = self.body(id);
        match body.kind {
            BodyKind::Star => 0.0,
            BodyKind::Moon => body.initial_angle + sim_time * body.orbit_speed * K_MOON,
            _ => body.initial_angle + sim_time * body.orbit_speed * K_ORBIT,
        }
    }

    /// Integrate spin for one frame. Callers gate on pause; a zero rate
    /// is also a no-op. Reversed time unwinds spin because the rate
    /// carries the direction sign.
    pub fn integrate_spin(&mut self, effective_rate: f64, frame_dt: f64) {
        for body in &mut self.bodies {
            body.spin_angle += body.spin_speed * effective_rate * frame_dt;
        }
    }

    /// Local transform relative to the parent's body frame:
    /// inclination ∘ orbit rotation ∘ radius translate ∘ axial tilt ∘ spin.
    fn local_transform(&self, body: &Body, sim_time: f64) -> Mat4 {
        let orbit = self.orbit_angle(body.id, sim_time) as f32;
        Mat4::from_rotation_x(body.inclination)
            * Mat4::from_rotation_y(orbit)
            * Mat4::from_translation(Vec3::new(body.orbit_radius, 0.0, 0.0))
            * Mat4::from_rotation_z(body.axial_tilt)
            * Mat4::from_rotation_y(body.spin_angle as f32)
    }

    /// Full world transform at a sim time. Moons compose through their
    /// planet's body frame, so they inherit its tilt and spin.
    pub fn world_transform(&self, id: BodyId, sim_time: f64) -> Mat4 {
        let body = self.body(id);
        let local = self.local_transform(body, sim_time);
        match body.parent {
            Some(parent) => self.world_transform(parent, sim_time) * local,
            None => local,
        }
    }

    pub fn world_position(&self, id: BodyId, sim_time: f64) -> Vec3 {
        self.world_transform(id, sim_time).w_axis.truncate()
    }

    /// Overwrite top-level initial angles from an ephemeris mapping.
    /// A body missing from the mapping falls back to angle 0 rather
    /// than failing. Returns the number of bodies updated.
    pub fn set_initial_angles(&mut self, angles: &HashMap<&'static str, f64>) -> usize {
        let mut updated = 0;
        for body in &mut self.bodies {
            if body.kind.is_top_level() {
                body.initial_angle = angles.get(body.name).copied().unwrap_or(0.0);
                updated += 1;
            }
        }
        updated
    }
}
