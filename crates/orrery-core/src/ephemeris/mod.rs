//! Ephemeris adapter: calendar date → orbital angles for top-level bodies.
//!
//! Consulted only on explicit date changes. Lookups are deterministic per
//! date; failures (invalid date) yield `None` and the caller retains its
//! previous angles.

use std::collections::HashMap;

/// Calendar date, proleptic Gregorian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Coarse range validation; enough to reject garbage from the UI.
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month) && (1..=31).contains(&self.day)
    }

    /// Days from the J2000.0 epoch (2000-01-01 12:00 TT, JD 2451545.0),
    /// via the standard civil-date → Julian-day-number conversion.
    pub fn days_from_j2000(&self) -> f64 {
        let (y, m, d) = (self.year as i64, self.month as i64, self.day as i64);
        let a = (14 - m) / 12;
        let y2 = y + 4800 - a;
        let m2 = m + 12 * a - 3;
        let jdn = d + (153 * m2 + 2) / 5 + 365 * y2 + y2 / 4 - y2 / 100 + y2 / 400 - 32045;
        jdn as f64 - 2451545.0
    }

    /// Inverse of `days_from_j2000`, used by the date display.
    pub fn from_days_from_j2000(days: f64) -> Self {
        let jd = days + 2451545.0;
        let z = (jd + 0.5).floor() as i64;
        let a = if z < 2299161 {
            z
        } else {
            let alpha = ((z as f64 - 1867216.25) / 36524.25).floor() as i64;
            z + 1 + alpha - alpha / 4
        };
        let b = a + 1524;
        let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
        let d = (365.25 * c as f64).floor() as i64;
        let e = ((b - d) as f64 / 30.6001).floor() as i64;

        let day = (b - d - (30.6001 * e as f64).floor() as i64) as u32;
        let month = if e < 14 { (e - 1) as u32 } else { (e - 13) as u32 };
        let year = if month > 2 { (c - 4716) as i32 } else { (c - 4715) as i32 };
        Self { year, month, day }
    }
}

/// External collaborator contract: map a date to each top-level body's
/// orbital angle in radians. Must be deterministic for a given date.
/// `None` signals lookup failure; bodies absent from the map fall back
/// to angle 0 downstream.
pub trait Ephemeris {
    fn angles_for_date(&self, date: Date) -> Option<HashMap<&'static str, f64>>;
}

/// J2000 mean longitude (degrees) and its rate (degrees per Julian
/// century) per body. Standish-style approximate elements; eccentricity
/// is ignored since the diagram's orbits are circular.
const MEAN_LONGITUDES: [(&str, f64, f64); 9] = [
    ("Mercury", 252.251, 149472.675),
    ("Venus", 181.980, 58517.816),
    ("Earth", 100.464, 35999.373),
    ("Mars", 355.453, 19140.300),
    ("Jupiter", 34.351, 3034.906),
    ("Saturn", 50.077, 1222.114),
    ("Uranus", 314.055, 428.467),
    ("Neptune", 304.349, 218.486),
    ("Pluto", 238.929, 145.18),
];

/// Ephemeris backed by the mean-longitude tables above.
#[derive(Debug, Default)]
pub struct MeanLongitudeEphemeris;

impl MeanLongitudeEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl Ephemeris for MeanLongitudeEphemeris {
    fn angles_for_date(&self, date: Date) -> Option<HashMap<&'static str, f64>> {
        if !date.is_valid() {
            return None;
        }
        let t_centuries = date.days_from_j2000() / 36525.0;
        let mut angles = HashMap::with_capacity(MEAN_LONGITUDES.len());
        for &(name, l0, l_dot) in &MEAN_LONGITUDES {
            let degrees = (l0 + l_dot * t_centuries).rem_euclid(360.0);
            angles.insert(name, degrees.to_radians());
        }
        Some(angles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn j2000_epoch_round_trips() {
        let d = Date::new(2000, 1, 1);
        // Noon epoch: civil Jan 1 is half a day before JD 2451545.0.
        assert!((d.days_from_j2000() - (-0.5)).abs() < 1.0);
        let back = Date::from_days_from_j2000(0.0);
        assert_eq!(back.year, 2000);
        assert_eq!(back.month, 1);
    }

    #[test]
    fn known_offset_lands_in_march() {
        let d = Date::from_days_from_j2000(79.0);
        assert_eq!((d.year, d.month), (2000, 3));
    }

    #[test]
    fn negative_days_go_backwards() {
        let d = Date::from_days_from_j2000(-365.0);
        assert_eq!(d.year, 1999);
    }

    #[test]
    fn lookup_is_deterministic() {
        let eph = MeanLongitudeEphemeris::new();
        let date = Date::new(2024, 6, 15);
        let a = eph.angles_for_date(date).unwrap();
        let b = eph.angles_for_date(date).unwrap();
        assert_eq!(a.len(), 9);
        for (name, angle) in &a {
            assert_eq!(b[name], *angle);
            assert!((0.0..TAU).contains(angle), "{name} angle {angle} out of range");
        }
    }

    #[test]
    fn epoch_angles_match_tables() {
        let eph = MeanLongitudeEphemeris::new();
        let angles = eph.angles_for_date(Date::new(2000, 1, 1)).unwrap();
        // Within a day of the epoch the mean longitude barely moves for
        // the outer bodies.
        let neptune = angles["Neptune"].to_degrees();
        assert!((neptune - 304.349).abs() < 0.1, "Neptune at {neptune}°");
    }

    #[test]
    fn invalid_date_yields_none() {
        let eph = MeanLongitudeEphemeris::new();
        assert!(eph.angles_for_date(Date::new(2024, 13, 1)).is_none());
        assert!(eph.angles_for_date(Date::new(2024, 2, 40)).is_none());
    }
}
