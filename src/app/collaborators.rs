//! Schnittstellen zu externen Kollaborateuren des Kartenbildschirms.
//!
//! Positionsdienst, Positions-Freigabe und die Karten-Oberfläche werden per
//! Konstruktor bzw. Parameter injiziert; es gibt keinen globalen Kontext.
//!
//! Die Karten-Oberfläche ist ein Fähigkeiten-Set (Spur zeichnen, Navigation
//! auf der Karte, Zoom anwenden). Jede Methode meldet ohne konkrete
//! Implementierung `UnimplementedOperation`, damit fehlende Verdrahtung nicht
//! stillschweigend verschluckt wird.

use crate::core::{EndpointRole, GeoPoint, TrackedPosition, ZoomState};
use crate::shared::MapScreenError;

/// Liefert die aktuelle Geräteposition samt Gültigkeit.
pub trait PositionProvider {
    /// Aktuelle Position, `None` ohne gültigen Fix
    fn position(&self) -> Option<GeoPoint>;

    /// Ob ein gültiger Fix vorliegt
    fn is_valid(&self) -> bool {
        self.position().is_some()
    }
}

impl PositionProvider for TrackedPosition {
    fn position(&self) -> Option<GeoPoint> {
        self.current()
    }
}

/// Macht gesetzte Routing-Endpunkte für andere Kollaborateure sichtbar
/// (z.B. die Routenberechnung).
pub trait PositionSharing {
    fn publish(&mut self, role: EndpointRole, point: GeoPoint);
}

/// Freigabe ohne Empfänger: protokolliert nur.
#[derive(Debug, Default)]
pub struct NullPositionSharing;

impl PositionSharing for NullPositionSharing {
    fn publish(&mut self, role: EndpointRole, point: GeoPoint) {
        log::debug!(
            "Keine Positions-Freigabe verdrahtet, {:?} ({:.5}, {:.5}) nicht geteilt",
            role,
            point.latitude(),
            point.longitude()
        );
    }
}

/// Fähigkeit: Spurpunkte auf der Karte zeichnen
pub trait TraceDrawing {
    fn add_trace_point(&mut self, _point: GeoPoint) -> Result<(), MapScreenError> {
        Err(MapScreenError::UnimplementedOperation {
            operation: "add_trace_point",
        })
    }

    fn clear_trace(&mut self) -> Result<(), MapScreenError> {
        Err(MapScreenError::UnimplementedOperation {
            operation: "clear_trace",
        })
    }
}

/// Fähigkeit: Kartenausschnitt verschieben
pub trait MapNavigation {
    /// Zeigt einen Punkt auf der Karte (Marker + Schwenk)
    fn show_on_map(&mut self, _point: GeoPoint) -> Result<(), MapScreenError> {
        Err(MapScreenError::UnimplementedOperation {
            operation: "show_on_map",
        })
    }

    /// Zentriert die Karte auf einen Punkt
    fn center_on(&mut self, _point: GeoPoint) -> Result<(), MapScreenError> {
        Err(MapScreenError::UnimplementedOperation {
            operation: "center_on",
        })
    }
}

/// Fähigkeit: Zoomstufe an den Renderer übergeben
pub trait ZoomControl {
    fn apply_zoom(&mut self, _zoom: ZoomState) -> Result<(), MapScreenError> {
        Err(MapScreenError::UnimplementedOperation {
            operation: "apply_zoom",
        })
    }
}

/// Vollständige Karten-Oberfläche, die eine konkrete Kartenseite erfüllen muss.
pub trait MapSurface: TraceDrawing + MapNavigation + ZoomControl {}

impl<T: TraceDrawing + MapNavigation + ZoomControl> MapSurface for T {}

/// Karten-Oberfläche ohne Renderer: jede Operation meldet
/// `UnimplementedOperation`.
#[derive(Debug, Default)]
pub struct UnwiredMapSurface;

impl TraceDrawing for UnwiredMapSurface {}
impl MapNavigation for UnwiredMapSurface {}
impl ZoomControl for UnwiredMapSurface {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PositionFix;

    #[test]
    fn unwired_surface_reports_every_operation() {
        let mut surface = UnwiredMapSurface;
        let point = GeoPoint::new(50.0, 14.0).unwrap();
        let zoom = ZoomState {
            level: 10,
            min: 1,
            max: 18,
        };

        let results = [
            surface.add_trace_point(point),
            surface.clear_trace(),
            surface.show_on_map(point),
            surface.center_on(point),
            surface.apply_zoom(zoom),
        ];

        for result in results {
            assert!(matches!(
                result,
                Err(MapScreenError::UnimplementedOperation { .. })
            ));
        }
    }

    #[test]
    fn tracked_position_provides_only_valid_fix() {
        let mut tracked = TrackedPosition::new();
        assert!(!tracked.is_valid());

        tracked.update(PositionFix::from_raw(49.0, 16.0, f64::NAN, f64::NAN));

        assert!(tracked.is_valid());
        assert_eq!(tracked.position().unwrap().latitude(), 49.0);
    }
}
