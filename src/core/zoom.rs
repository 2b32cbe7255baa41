//! Stufenweiser Zoom mit festen Grenzen.

use crate::shared::options;
use crate::shared::MapScreenError;
use serde::{Deserialize, Serialize};

/// Momentaufnahme des Zoom-Zustands für die Kachel-Skalierung des Renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomState {
    /// Aktuelle Zoomstufe
    pub level: i32,
    /// Kleinste erlaubte Stufe
    pub min: i32,
    /// Größte erlaubte Stufe
    pub max: i32,
}

/// Verwaltet die Zoomstufe; `min <= level <= max` gilt jederzeit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomController {
    level: i32,
    min: i32,
    max: i32,
}

impl ZoomController {
    /// Erstellt einen Controller, lehnt inkonsistente Grenzen ab.
    pub fn new(level: i32, min: i32, max: i32) -> Result<Self, MapScreenError> {
        if min > max || level < min || level > max {
            return Err(MapScreenError::InvalidZoomRange { level, min, max });
        }
        Ok(Self { level, min, max })
    }

    /// Aktuelle Zoomstufe
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Zoom-Zustand für den Renderer
    pub fn state(&self) -> ZoomState {
        ZoomState {
            level: self.level,
            min: self.min,
            max: self.max,
        }
    }

    pub fn can_zoom_in(&self) -> bool {
        self.level < self.max
    }

    pub fn can_zoom_out(&self) -> bool {
        self.level > self.min
    }

    /// Eine Stufe hinein. An der Obergrenze No-op; gibt zurück, ob sich
    /// die Stufe geändert hat.
    pub fn zoom_in(&mut self) -> bool {
        if !self.can_zoom_in() {
            log::debug!("Zoom-In ignoriert: Maximum {} erreicht", self.max);
            return false;
        }
        self.level += 1;
        true
    }

    /// Eine Stufe heraus. An der Untergrenze No-op.
    pub fn zoom_out(&mut self) -> bool {
        if !self.can_zoom_out() {
            log::debug!("Zoom-Out ignoriert: Minimum {} erreicht", self.min);
            return false;
        }
        self.level -= 1;
        true
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self {
            level: options::ZOOM_INITIAL,
            min: options::ZOOM_MIN,
            max: options::ZOOM_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_in_at_max_is_noop() {
        let mut zoom = ZoomController::new(17, 3, 17).unwrap();

        assert!(!zoom.zoom_in());
        assert_eq!(zoom.level(), 17);
        assert!(!zoom.can_zoom_in());
        assert!(zoom.can_zoom_out());
    }

    #[test]
    fn zoom_out_at_min_is_noop() {
        let mut zoom = ZoomController::new(3, 3, 17).unwrap();

        assert!(!zoom.zoom_out());
        assert_eq!(zoom.level(), 3);
        assert!(!zoom.can_zoom_out());
    }

    #[test]
    fn steps_by_exactly_one() {
        let mut zoom = ZoomController::new(10, 3, 17).unwrap();

        assert!(zoom.zoom_in());
        assert_eq!(zoom.level(), 11);
        assert!(zoom.zoom_out());
        assert!(zoom.zoom_out());
        assert_eq!(zoom.level(), 9);
    }

    #[test]
    fn single_level_range_cannot_step() {
        let mut zoom = ZoomController::new(5, 5, 5).unwrap();

        assert!(!zoom.zoom_in());
        assert!(!zoom.zoom_out());
        assert_eq!(
            zoom.state(),
            ZoomState {
                level: 5,
                min: 5,
                max: 5
            }
        );
    }

    #[test]
    fn rejects_inconsistent_ranges() {
        assert!(ZoomController::new(5, 10, 2).is_err());
        assert!(ZoomController::new(1, 2, 10).is_err());
        assert!(matches!(
            ZoomController::new(11, 2, 10),
            Err(MapScreenError::InvalidZoomRange {
                level: 11,
                min: 2,
                max: 10
            })
        ));
    }
}
