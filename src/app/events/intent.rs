use crate::shared::{SettingKey, SettingValue};
use serde::Deserialize;

fn default_point_to_point() -> bool {
    true
}

/// Map-Intent Events.
/// Intents sind Eingaben aus UI, Sensoren und Kollaborateuren ohne direkte
/// Mutationslogik.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapIntent {
    /// Neues Kompass-Sample (roher Azimut in Grad)
    HeadingSampled { azimuth: f64 },
    /// Positionsmeldung des Positionsdienstes
    PositionUpdated {
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        elevation: Option<f64>,
        #[serde(default)]
        speed_mps: Option<f64>,
    },

    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,

    /// Routing-UI einschalten
    RoutingEnableRequested {
        #[serde(default = "default_point_to_point")]
        point_to_point: bool,
    },
    /// Routing-UI ausschalten
    RoutingDisableRequested,
    /// Startpunkt-Auswahl umschalten
    SelectStartToggled,
    /// Zielpunkt-Auswahl umschalten
    SelectDestinationToggled,
    /// Tap auf die Karte (Weltkoordinate)
    MapTapped { latitude: f64, longitude: f64 },
    /// Startpunkt direkt gewählt (z.B. aus Suchergebnis)
    RouteStartPicked { latitude: f64, longitude: f64 },
    /// Zielpunkt direkt gewählt
    RouteDestinationPicked { latitude: f64, longitude: f64 },
    /// Route verwerfen
    RouteClearRequested,
    /// Meldung der Routenberechnung
    RouteAvailabilityReported { available: bool },

    /// Navigationsmodus umschalten
    NavigationToggleRequested,

    /// Karte auf aktuelle Position zentrieren
    CenterOnPositionRequested,
    /// Karte manuell gezogen (Delta in Screen-Pixeln)
    MapDragged { delta: glam::Vec2 },
    /// Auto-Zentrierung umschalten
    AutoCenteringToggled,
    /// Punkt auf der Karte zeigen
    ShowOnMapRequested { latitude: f64, longitude: f64 },
    /// Neuer Spurpunkt (Track-Logging)
    TracePointReceived { latitude: f64, longitude: f64 },
    /// Spur löschen
    TraceClearRequested,

    /// Externe Einstellungsänderung
    SettingChanged { key: SettingKey, value: SettingValue },
    /// Benachrichtigung anzeigen (optional mit `#<Sekunden>`-Suffix)
    NotificationRequested { message: String },
}
