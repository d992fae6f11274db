//! Static body and moon tables.
//!
//! Sizes and orbit radii are display units chosen for readability, not to
//! scale. Orbit speeds are relative to the unit-speed body (Earth = 1.0);
//! spin speeds are per-frame coefficients, negative for retrograde.

use super::body::{BodyInfo, BodyKind, BodySpec, MoonSpec};

pub const STAR: BodySpec = BodySpec {
    name: "Sun",
    kind: BodyKind::Star,
    color: 0xffdd00,
    size: 5.0,
    orbit_radius: 0.0,
    orbit_speed: 0.0,
    spin_speed: 0.06,
    inclination_deg: 0.0,
    axial_tilt_deg: 0.0,
    info: BodyInfo {
        diameter: "1,392,700 km",
        distance: "0 km",
        day_length: "25 Earth days",
        year_length: "-",
        moons: 0,
        class: "G-type Star",
    },
};

pub const PLANETS: [BodySpec; 9] = [
    BodySpec {
        name: "Mercury",
        kind: BodyKind::Planet,
        color: 0x8c8c8c,
        size: 0.4,
        orbit_radius: 10.0,
        orbit_speed: 4.15,
        spin_speed: 0.01,
        inclination_deg: 7.0,
        axial_tilt_deg: 0.03,
        info: BodyInfo {
            diameter: "4,879 km",
            distance: "57.9 million km",
            day_length: "58.6 Earth days",
            year_length: "88 Earth days",
            moons: 0,
            class: "Terrestrial",
        },
    },
    BodySpec {
        name: "Venus",
        kind: BodyKind::Planet,
        color: 0xe6c87a,
        size: 0.9,
        orbit_radius: 15.0,
        orbit_speed: 1.62,
        // Retrograde rotation.
        spin_speed: -0.004,
        inclination_deg: 3.4,
        // Nearly upside down.
        axial_tilt_deg: 177.4,
        info: BodyInfo {
            diameter: "12,104 km",
            distance: "108.2 million km",
            day_length: "243 Earth days (retrograde)",
            year_length: "225 Earth days",
            moons: 0,
            class: "Terrestrial",
        },
    },
    BodySpec {
        name: "Earth",
        kind: BodyKind::Planet,
        color: 0x6b93d6,
        size: 1.0,
        orbit_radius: 20.0,
        orbit_speed: 1.0,
        spin_speed: 0.02,
        inclination_deg: 0.0,
        axial_tilt_deg: 23.4,
        info: BodyInfo {
            diameter: "12,742 km",
            distance: "149.6 million km",
            day_length: "24 hours",
            year_length: "365.25 days",
            moons: 1,
            class: "Terrestrial",
        },
    },
    BodySpec {
        name: "Mars",
        kind: BodyKind::Planet,
        color: 0xc1440e,
        size: 0.5,
        orbit_radius: 25.0,
        orbit_speed: 0.53,
        spin_speed: 0.018,
        inclination_deg: 1.85,
        axial_tilt_deg: 25.2,
        info: BodyInfo {
            diameter: "6,779 km",
            distance: "227.9 million km",
            day_length: "24.6 hours",
            year_length: "687 Earth days",
            moons: 2,
            class: "Terrestrial",
        },
    },
    BodySpec {
        name: "Jupiter",
        kind: BodyKind::Planet,
        color: 0xd8ca9d,
        size: 2.5,
        orbit_radius: 35.0,
        orbit_speed: 0.084,
        spin_speed: 0.04,
        inclination_deg: 1.31,
        axial_tilt_deg: 3.1,
        info: BodyInfo {
            diameter: "139,820 km",
            distance: "778.5 million km",
            day_length: "9.9 hours",
            year_length: "11.86 Earth years",
            moons: 95,
            class: "Gas Giant",
        },
    },
    BodySpec {
        name: "Saturn",
        kind: BodyKind::Planet,
        color: 0xead6b8,
        size: 2.2,
        orbit_radius: 45.0,
        orbit_speed: 0.034,
        spin_speed: 0.038,
        inclination_deg: 2.49,
        axial_tilt_deg: 26.7,
        info: BodyInfo {
            diameter: "116,460 km",
            distance: "1.43 billion km",
            day_length: "10.7 hours",
            year_length: "29.46 Earth years",
            moons: 146,
            class: "Gas Giant",
        },
    },
    BodySpec {
        name: "Uranus",
        kind: BodyKind::Planet,
        color: 0xc9eeff,
        size: 1.6,
        orbit_radius: 55.0,
        orbit_speed: 0.012,
        // Retrograde due to the extreme tilt.
        spin_speed: -0.03,
        inclination_deg: 0.77,
        // Rotates on its side.
        axial_tilt_deg: 97.8,
        info: BodyInfo {
            diameter: "50,724 km",
            distance: "2.87 billion km",
            day_length: "17.2 hours (retrograde)",
            year_length: "84 Earth years",
            moons: 27,
            class: "Ice Giant",
        },
    },
    BodySpec {
        name: "Neptune",
        kind: BodyKind::Planet,
        color: 0x5b7fde,
        size: 1.5,
        orbit_radius: 65.0,
        orbit_speed: 0.006,
        spin_speed: 0.032,
        inclination_deg: 1.77,
        axial_tilt_deg: 28.3,
        info: BodyInfo {
            diameter: "49,244 km",
            distance: "4.5 billion km",
            day_length: "16.1 hours",
            year_length: "164.8 Earth years",
            moons: 16,
            class: "Ice Giant",
        },
    },
    BodySpec {
        name: "Pluto",
        kind: BodyKind::DwarfPlanet,
        color: 0xb8a088,
        size: 0.3,
        orbit_radius: 75.0,
        orbit_speed: 0.004,
        spin_speed: 0.008,
        inclination_deg: 17.2,
        axial_tilt_deg: 122.5,
        info: BodyInfo {
            diameter: "2,377 km",
            distance: "5.9 billion km",
            day_length: "6.4 Earth days (retrograde)",
            year_length: "248 Earth years",
            moons: 5,
            class: "Dwarf Planet",
        },
    },
];

const EARTH_MOONS: [MoonSpec; 1] = [MoonSpec {
    name: "Moon",
    color: 0xaaaaaa,
    size: 0.27,
    orbit_radius: 2.5,
    orbit_speed: 2.0,
}];

const MARS_MOONS: [MoonSpec; 2] = [
    MoonSpec { name: "Phobos", color: 0x9c8a7a, size: 0.08, orbit_radius: 1.2, orbit_speed: 6.0 },
    MoonSpec { name: "Deimos", color: 0xab9a8a, size: 0.06, orbit_radius: 1.8, orbit_speed: 3.0 },
];

const JUPITER_MOONS: [MoonSpec; 4] = [
    MoonSpec { name: "Io",       color: 0xffff66, size: 0.3,  orbit_radius: 4.0, orbit_speed: 3.5 },
    MoonSpec { name: "Europa",   color: 0xf5f5dc, size: 0.25, orbit_radius: 5.2, orbit_speed: 2.8 },
    MoonSpec { name: "Ganymede", color: 0x8b8989, size: 0.4,  orbit_radius: 6.5, orbit_speed: 2.0 },
    MoonSpec { name: "Callisto", color: 0x4a4a4a, size: 0.35, orbit_radius: 8.0, orbit_speed: 1.2 },
];

const SATURN_MOONS: [MoonSpec; 4] = [
    // Ordered by distance: Mimas < Enceladus < Rhea < Titan.
    MoonSpec { name: "Mimas",     color: 0xa9a9a9, size: 0.12, orbit_radius: 3.2, orbit_speed: 5.0 },
    MoonSpec { name: "Enceladus", color: 0xfffafa, size: 0.15, orbit_radius: 4.0, orbit_speed: 3.5 },
    MoonSpec { name: "Rhea",      color: 0xdcdcdc, size: 0.2,  orbit_radius: 5.5, orbit_speed: 2.0 },
    MoonSpec { name: "Titan",     color: 0xdaa520, size: 0.4,  orbit_radius: 7.5, orbit_speed: 1.0 },
];

/// Moon table for a planet. Planets without an entry simply have no
/// moons; absence is configuration, not an error.
pub fn moons_of(planet_name: &str) -> &'static [MoonSpec] {
    match planet_name {
        "Earth" => &EARTH_MOONS,
        "Mars" => &MARS_MOONS,
        "Jupiter" => &JUPITER_MOONS,
        "Saturn" => &SATURN_MOONS,
        _ => &[],
    }
}

// ── Particle fields ──────────────────────────────────────────────────

/// Flare spawn shell: the star surface plus a small band.
pub const FLARE_SHELL_MIN: f32 = 5.0;
pub const FLARE_SHELL_MAX: f32 = 5.5;
pub const FLARE_COUNT: usize = 200;

/// Asteroid belt between Mars and Jupiter.
pub const ASTEROID_BELT_COUNT: usize = 2000;
pub const ASTEROID_BELT_INNER: f32 = 27.0;
pub const ASTEROID_BELT_OUTER: f32 = 33.0;
pub const ASTEROID_BELT_JITTER: f32 = 1.0;
pub const ASTEROID_BELT_SPIN: f32 = 0.0005;

/// Outer icy belt beyond Neptune, with more vertical spread.
pub const OUTER_BELT_COUNT: usize = 3000;
pub const OUTER_BELT_INNER: f32 = 70.0;
pub const OUTER_BELT_OUTER: f32 = 100.0;
pub const OUTER_BELT_JITTER: f32 = 2.5;
pub const OUTER_BELT_SPIN: f32 = 0.0002;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moon_counts_match_tables() {
        assert_eq!(moons_of("Earth").len(), 1);
        assert_eq!(moons_of("Mars").len(), 2);
        assert_eq!(moons_of("Jupiter").len(), 4);
        assert_eq!(moons_of("Saturn").len(), 4);
        assert!(moons_of("Venus").is_empty());
        assert!(moons_of("Sun").is_empty());
    }

    #[test]
    fn planet_orbits_are_ascending() {
        for pair in PLANETS.windows(2) {
            assert!(
                pair[0].orbit_radius < pair[1].orbit_radius,
                "{} should orbit inside {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn unit_speed_body_present() {
        let earth = PLANETS.iter().find(|p| p.name == "Earth").unwrap();
        assert_eq!(earth.orbit_speed, 1.0);
    }
}
