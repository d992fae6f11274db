//! Ray picking and the focus / camera-follow state machine.
//!
//! Picking intersects a flat table of spheres (a body's mesh plus its
//! oversized effect shells, e.g. rings), each entry carrying its owning
//! body id. Hits on sub-meshes resolve to the body root by table
//! lookup instead of scene-graph traversal. Only top-level and dwarf
//! bodies are pickable; moons are not.

use glam::Vec3;

use crate::camera::Ray;
use crate::model::body::BodyId;
use crate::model::hierarchy::Hierarchy;

/// Atmosphere/cloud shells extend slightly past the mesh.
const EFFECT_SHELL_FACTOR: f32 = 1.2;
/// Ring systems extend well past the planet sphere.
const RING_SHELL_FACTOR: f32 = 2.6;

/// Bodies rendered with rings; their pick silhouette is wider.
const RINGED_BODIES: [&str; 2] = ["Saturn", "Uranus"];

/// One pickable sphere and the body that owns it.
#[derive(Debug, Clone, Copy)]
pub struct PickEntry {
    pub owner: BodyId,
    pub radius: f32,
}

/// Flat renderable → owning-body table, built once at startup.
#[derive(Debug, Clone)]
pub struct PickTable {
    entries: Vec<PickEntry>,
}

impl PickTable {
    pub fn from_hierarchy(hierarchy: &Hierarchy) -> Self {
        let mut entries = Vec::new();
        for body in hierarchy.top_level() {
            entries.push(PickEntry { owner: body.id, radius: body.size });
            entries.push(PickEntry {
                owner: body.id,
                radius: body.size * EFFECT_SHELL_FACTOR,
            });
            if RINGED_BODIES.contains(&body.name) {
                entries.push(PickEntry {
                    owner: body.id,
                    radius: body.size * RING_SHELL_FACTOR,
                });
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[PickEntry] {
        &self.entries
    }

    /// Intersect the ray against every entry at the current sim time and
    /// resolve the nearest hit to its owner. `None` on a clean miss.
    pub fn pick(&self, hierarchy: &Hierarchy, sim_time: f64, ray: &Ray) -> Option<BodyId> {
        let mut best: Option<(f32, BodyId)> = None;
        for entry in &self.entries {
            let center = hierarchy.world_position(entry.owner, sim_time);
            if let Some(t) = ray.intersect_sphere(center, entry.radius) {
                if best.map_or(true, |(bt, _)| t < bt) {
                    best = Some((t, entry.owner));
                }
            }
        }
        best.map(|(_, owner)| owner)
    }
}

/// Focus state machine: Unfocused ⇄ Focused-Following.
/// Invariant: `following` implies `focused` is set.
#[derive(Debug, Clone, Default)]
pub struct FocusState {
    focused: Option<BodyId>,
    following: bool,
    offset: Vec3,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter Focused-Following. The camera offset derives from the
    /// body's visual size (larger bodies get a farther framing) and
    /// stays constant until refocus.
    pub fn focus(&mut self, hierarchy: &Hierarchy, id: BodyId) {
        let size = hierarchy.body(id).size;
        let distance = size * 8.0 + 5.0;
        self.offset = Vec3::new(distance, distance * 0.6, distance);
        self.focused = Some(id);
        self.following = true;
    }

    /// Back to Unfocused. The camera is left wherever it last was.
    pub fn unfocus(&mut self) {
        self.focused = None;
        self.following = false;
    }

    pub fn focused(&self) -> Option<BodyId> {
        self.focused
    }

    pub fn is_following(&self) -> bool {
        self.following
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use crate::camera::OrbitCamera;

    fn setup() -> (Hierarchy, PickTable) {
        let h = Hierarchy::from_catalog();
        let table = PickTable::from_hierarchy(&h);
        (h, table)
    }

    #[test]
    fn moons_are_not_pickable() {
        let (h, table) = setup();
        let moon = h.id_of("Moon").unwrap();
        assert!(table.entries().iter().all(|e| e.owner != moon));
    }

    #[test]
    fn ringed_bodies_get_an_extra_shell() {
        let (h, table) = setup();
        let saturn = h.id_of("Saturn").unwrap();
        let shells = table.entries().iter().filter(|e| e.owner == saturn).count();
        let earth = h.id_of("Earth").unwrap();
        let earth_shells = table.entries().iter().filter(|e| e.owner == earth).count();
        assert_eq!(shells, earth_shells + 1);
    }

    #[test]
    fn ray_at_body_center_picks_it() {
        let (h, table) = setup();
        let earth = h.id_of("Earth").unwrap();
        let center = h.world_position(earth, 0.0);
        let origin = center + Vec3::new(0.0, 0.0, 30.0);
        let ray = Ray {
            origin,
            dir: (center - origin).normalize(),
        };
        assert_eq!(table.pick(&h, 0.0, &ray), Some(earth));
    }

    #[test]
    fn shell_hit_resolves_to_the_owning_body() {
        let (h, table) = setup();
        let saturn = h.id_of("Saturn").unwrap();
        let center = h.world_position(saturn, 0.0);
        let size = h.body(saturn).size;
        // Aim past the sphere but inside the ring shell.
        let target = center + Vec3::new(0.0, size * 2.0, 0.0);
        let origin = center + Vec3::new(0.0, 0.0, 40.0);
        let ray = Ray {
            origin,
            dir: (target - origin).normalize(),
        };
        assert_eq!(table.pick(&h, 0.0, &ray), Some(saturn));
    }

    #[test]
    fn miss_returns_none() {
        let (h, table) = setup();
        let ray = Ray {
            origin: Vec3::new(0.0, 500.0, 0.0),
            dir: Vec3::Y,
        };
        assert_eq!(table.pick(&h, 0.0, &ray), None);
    }

    #[test]
    fn pick_through_camera_ndc_center() {
        let (h, table) = setup();
        let jupiter = h.id_of("Jupiter").unwrap();
        let center = h.world_position(jupiter, 0.0);
        let mut cam = OrbitCamera::new(16.0 / 9.0);
        cam.position = center + Vec3::new(0.0, 0.0, 60.0);
        cam.target = center;
        let ray = cam.ray_through(Vec2::ZERO);
        assert_eq!(table.pick(&h, 0.0, &ray), Some(jupiter));
    }

    #[test]
    fn focus_offset_scales_with_size() {
        let h = Hierarchy::from_catalog();
        let mut focus = FocusState::new();
        focus.focus(&h, h.id_of("Jupiter").unwrap());
        let big = focus.offset();
        focus.focus(&h, h.id_of("Mercury").unwrap());
        let small = focus.offset();
        assert!(big.length() > small.length());
        assert!(focus.is_following());
    }

    #[test]
    fn unfocus_clears_both_fields() {
        let h = Hierarchy::from_catalog();
        let mut focus = FocusState::new();
        focus.focus(&h, h.id_of("Earth").unwrap());
        focus.unfocus();
        assert!(focus.focused().is_none());
        assert!(!focus.is_following());
    }
}
