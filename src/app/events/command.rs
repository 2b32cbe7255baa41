use crate::core::PositionFix;
use crate::shared::{SettingKey, SettingValue};

/// Mutierende Commands, die vom Controller ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    // === Kompass & Position ===
    /// Kompass-Sample durch den Entfaltungsfilter schicken
    ApplyHeadingSample { azimuth: f64 },
    /// Positionsmeldung übernehmen
    UpdatePosition { fix: PositionFix },

    // === Zoom ===
    /// Eine Stufe hinein
    ZoomIn,
    /// Eine Stufe heraus
    ZoomOut,

    // === Routing ===
    /// Routing-UI aktivieren
    EnableRouting { point_to_point: bool },
    /// Routing-UI deaktivieren
    DisableRouting,
    /// Startpunkt-Auswahl umschalten
    ToggleSelectStart,
    /// Zielpunkt-Auswahl umschalten
    ToggleSelectDestination,
    /// Startpunkt setzen (wird validiert)
    SetRouteStart { latitude: f64, longitude: f64 },
    /// Zielpunkt setzen (wird validiert)
    SetRouteDestination { latitude: f64, longitude: f64 },
    /// Auswahl und Routing beenden, Route verwerfen
    ClearRoute,
    /// Routen-Verfügbarkeit übernehmen
    SetRouteAvailable { available: bool },

    // === Navigation ===
    /// Navigation umschalten (Start nur mit Route)
    ToggleNavigation,

    // === Karten-Oberfläche ===
    /// Karte auf aktuelle Position zentrieren
    CenterOnPosition,
    /// Auto-Zentrierung setzen
    SetAutoCentering { enabled: bool },
    /// Punkt auf der Karte zeigen
    ShowOnMap { latitude: f64, longitude: f64 },
    /// Spurpunkt zeichnen
    AddTracePoint { latitude: f64, longitude: f64 },
    /// Spur löschen
    ClearTrace,

    // === Einstellungen & Benachrichtigungen ===
    /// Geänderte Einstellung an Abonnenten verteilen
    ApplySetting { key: SettingKey, value: SettingValue },
    /// Benachrichtigung einreihen
    PushNotification { message: String },
}
