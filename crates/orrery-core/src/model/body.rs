use serde::Serialize;

/// Index into the hierarchy arena. Stable for the lifetime of the
/// hierarchy; bodies are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BodyKind {
    Star,
    Planet,
    DwarfPlanet,
    Moon,
}

impl BodyKind {
    /// Top-level bodies orbit the star directly and are pickable.
    pub fn is_top_level(self) -> bool {
        matches!(self, BodyKind::Planet | BodyKind::DwarfPlanet)
    }
}

/// Static display facts surfaced to the info-panel collaborator on focus.
/// Data, not computation; values come straight from the catalog tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BodyInfo {
    pub diameter: &'static str,
    pub distance: &'static str,
    pub day_length: &'static str,
    pub year_length: &'static str,
    pub moons: u32,
    pub class: &'static str,
}

/// Fixed parameters for a star-orbiting body.
///
/// `orbit_speed` is relative to the unit-speed body (1.0 = one nominal
/// year); `spin_speed` is signed, negative for retrograde rotation.
#[derive(Debug, Clone, Copy)]
pub struct BodySpec {
    pub name: &'static str,
    pub kind: BodyKind,
    /// 0xRRGGBB display color.
    pub color: u32,
    /// Visual radius in display units (exaggerated for readability).
    pub size: f32,
    pub orbit_radius: f32,
    pub orbit_speed: f64,
    pub spin_speed: f64,
    /// Fixed tilt of the orbital plane, degrees.
    pub inclination_deg: f32,
    /// Fixed tilt of the spin axis, degrees.
    pub axial_tilt_deg: f32,
    pub info: BodyInfo,
}

/// Fixed parameters for a moon: circular orbit in the parent's
/// equatorial plane, no independent spin or info record.
#[derive(Debug, Clone, Copy)]
pub struct MoonSpec {
    pub name: &'static str,
    pub color: u32,
    pub size: f32,
    pub orbit_radius: f32,
    pub orbit_speed: f64,
}
