//! Geräteposition, wie sie vom Positionsdienst gemeldet wird.

use super::GeoPoint;
use serde::Serialize;

/// Umrechnungsfaktor m/s → km/h
const MPS_TO_KMH: f64 = 3.6;

/// Einzelne Positionsmeldung.
///
/// Ungültige Koordinaten werden nicht verworfen, sondern als ungültiger Fix
/// gespeichert (Diagnose); Zentrierung und Routing ignorieren ihn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionFix {
    point: Option<GeoPoint>,
    /// Höhe in Metern (None bei NaN)
    pub elevation: Option<f64>,
    /// Geschwindigkeit in m/s (None bei NaN)
    pub speed_mps: Option<f64>,
}

impl PositionFix {
    /// Baut einen Fix aus rohen Sensorwerten.
    pub fn from_raw(latitude: f64, longitude: f64, elevation: f64, speed_mps: f64) -> Self {
        let point = match GeoPoint::new(latitude, longitude) {
            Ok(point) => Some(point),
            Err(e) => {
                log::warn!("Positionsmeldung ungültig: {}", e);
                None
            }
        };

        Self {
            point,
            elevation: finite(elevation),
            speed_mps: finite(speed_mps),
        }
    }

    /// Ob der Fix eine verwertbare Position enthält
    pub fn is_valid(&self) -> bool {
        self.point.is_some()
    }

    /// Position, falls gültig
    pub fn point(&self) -> Option<GeoPoint> {
        self.point
    }

    /// Geschwindigkeit in km/h
    pub fn speed_kmh(&self) -> Option<f64> {
        self.speed_mps.map(|mps| mps * MPS_TO_KMH)
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Zuletzt bekannte Geräteposition
#[derive(Debug, Clone, Default)]
pub struct TrackedPosition {
    last_fix: Option<PositionFix>,
}

impl TrackedPosition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt eine neue Meldung (auch ungültige).
    pub fn update(&mut self, fix: PositionFix) {
        self.last_fix = Some(fix);
    }

    /// Letzte Meldung
    pub fn last_fix(&self) -> Option<&PositionFix> {
        self.last_fix.as_ref()
    }

    /// Aktuelle Position, nur wenn der letzte Fix gültig ist
    pub fn current(&self) -> Option<GeoPoint> {
        self.last_fix.and_then(|fix| fix.point())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn nan_elevation_and_speed_become_none() {
        let fix = PositionFix::from_raw(50.0, 14.0, f64::NAN, f64::NAN);

        assert!(fix.is_valid());
        assert_eq!(fix.elevation, None);
        assert_eq!(fix.speed_mps, None);
        assert_eq!(fix.speed_kmh(), None);
    }

    #[test]
    fn speed_is_converted_to_kmh() {
        let fix = PositionFix::from_raw(50.0, 14.0, 230.0, 10.0);

        assert_relative_eq!(fix.speed_kmh().unwrap(), 36.0);
        assert_eq!(fix.elevation, Some(230.0));
    }

    #[test]
    fn invalid_coordinates_give_invalid_fix() {
        let fix = PositionFix::from_raw(f64::NAN, 14.0, 0.0, 0.0);

        assert!(!fix.is_valid());
        assert_eq!(fix.point(), None);
    }

    #[test]
    fn tracked_position_hides_invalid_fix() {
        let mut tracked = TrackedPosition::new();
        tracked.update(PositionFix::from_raw(50.0, 14.0, 0.0, 0.0));
        assert!(tracked.current().is_some());

        tracked.update(PositionFix::from_raw(200.0, 14.0, 0.0, 0.0));

        assert!(tracked.current().is_none());
        assert!(tracked.last_fix().is_some());
    }
}
