use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::model::body::BodyKind;
use crate::model::hierarchy::Hierarchy;

/// Per-body render data handed to the host renderer as a flat float
/// buffer. 24 floats = 96 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyInstance {
    /// Column-major world transform.
    pub model: [[f32; 4]; 4],
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Mesh radius in world units.
    pub size: f32,
    /// 1.0 for self-lit bodies (the star), 0.0 otherwise.
    pub emissive: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 24;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

fn unpack_color(color: u32) -> (f32, f32, f32) {
    let r = ((color >> 16) & 0xff) as f32 / 255.0;
    let g = ((color >> 8) & 0xff) as f32 / 255.0;
    let b = (color & 0xff) as f32 / 255.0;
    (r, g, b)
}

/// Instance buffer rebuilt each frame from the hierarchy.
pub struct InstanceBuffer {
    instances: Vec<BodyInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(32),
        }
    }

    pub fn instances(&self) -> &[BodyInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for shared-buffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Rebuild from the current hierarchy state. Orbital angles come
    /// from absolute sim time; spin angles are whatever the hierarchy
    /// has integrated so far.
    pub fn rebuild(&mut self, hierarchy: &Hierarchy, sim_time: f64) {
        self.instances.clear();
        for body in hierarchy.bodies() {
            let model: Mat4 = hierarchy.world_transform(body.id, sim_time);
            let (r, g, b) = unpack_color(body.color);
            self.instances.push(BodyInstance {
                model: model.to_cols_array_2d(),
                r,
                g,
                b,
                size: body.size,
                emissive: if body.kind == BodyKind::Star { 1.0 } else { 0.0 },
                ..Default::default()
            });
        }
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn body_instance_is_24_floats() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), 96);
        assert_eq!(BodyInstance::FLOATS, 24);
    }

    #[test]
    fn rebuild_covers_every_body() {
        let h = Hierarchy::from_catalog();
        let mut buf = InstanceBuffer::new();
        buf.rebuild(&h, 0.0);
        assert_eq!(buf.instance_count() as usize, h.len());
    }

    #[test]
    fn only_the_star_is_emissive() {
        let h = Hierarchy::from_catalog();
        let mut buf = InstanceBuffer::new();
        buf.rebuild(&h, 3.0);
        let emissive = buf.instances().iter().filter(|i| i.emissive > 0.0).count();
        assert_eq!(emissive, 1);
    }

    #[test]
    fn instance_translation_matches_world_position() {
        let h = Hierarchy::from_catalog();
        let earth = h.id_of("Earth").unwrap();
        let mut buf = InstanceBuffer::new();
        buf.rebuild(&h, 12.5);
        let inst = &buf.instances()[earth.0 as usize];
        let translation = Vec3::new(inst.model[3][0], inst.model[3][1], inst.model[3][2]);
        let expected = h.world_position(earth, 12.5);
        assert!((translation - expected).length() < 1e-4);
    }

    #[test]
    fn color_unpacks_to_unit_channels() {
        let (r, g, b) = unpack_color(0x4488ff);
        assert!((r - 0x44 as f32 / 255.0).abs() < 1e-6);
        assert!((g - 0x88 as f32 / 255.0).abs() < 1e-6);
        assert!((b - 1.0).abs() < 1e-6);
    }
}
