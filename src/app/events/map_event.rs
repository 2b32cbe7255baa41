use crate::core::{GeoPoint, ZoomState};
use serde::Serialize;

/// Ausgehende Ereignisse für Kollaborateure (Karten-Renderer,
/// Routenberechnung, Anweisungs-Overlay, Telemetrie).
/// Werden im State gesammelt und vom Host abgeholt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapEvent {
    /// Ein Endpunkt wurde gesetzt; Routenberechnung kann neu anstoßen
    RouteChanged {
        start: Option<GeoPoint>,
        destination: Option<GeoPoint>,
    },
    /// Route verworfen; gezeichnete Geometrie entfernen
    RouteCleared,
    /// Turn-by-Turn-Navigation gestartet
    NavigationStarted,
    /// Turn-by-Turn-Navigation beendet
    NavigationStopped,
    /// Zoomstufe geändert
    ZoomChanged { zoom: ZoomState },
    /// Auto-Zentrierung ein-/ausgeschaltet
    AutoCenteringChanged { enabled: bool },
}
