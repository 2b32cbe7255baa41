//! View-Snapshot als expliziter Übergabevertrag zwischen App und Präsentation.
//!
//! Lebt im shared-Modul, da `app` ihn baut und die Präsentationsschicht
//! (Kompass-Renderer, Buttons, Overlay) ihn konsumiert.

use crate::core::{GeoPoint, SelectionMode, ZoomState};
use serde::Serialize;

/// Read-only Daten für einen Frame des Kartenbildschirms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapViewSnapshot {
    /// Stetiger Rotationswinkel des Kompass-Symbols in Grad
    pub rotation_deg: f64,
    /// Zoom-Zustand für die Kachel-Skalierung
    pub zoom: ZoomState,
    /// Zoom-In-Button aktiv
    pub can_zoom_in: bool,
    /// Zoom-Out-Button aktiv
    pub can_zoom_out: bool,
    /// Kompass sichtbar
    pub show_compass: bool,
    /// Deckkraft des Kompass-Symbols
    pub compass_opacity: f32,
    /// Deckkraft der Karten-Buttons
    pub map_buttons_opacity: f32,
    /// Fortbewegungsart
    pub travel_mode: String,
    /// Auto-Zentrierung aktiv
    pub auto_centering: bool,
    /// Routing-UI aktiv
    pub routing_enabled: bool,
    /// Punkt-zu-Punkt-Routing
    pub point_to_point: bool,
    /// Aktueller Auswahlmodus
    pub selection: SelectionMode,
    /// Gesetzter Startpunkt
    pub start: Option<GeoPoint>,
    /// Gesetzter Zielpunkt
    pub destination: Option<GeoPoint>,
    /// Route berechnet
    pub route_available: bool,
    /// Navigations-Button darf angeboten werden
    pub can_start_navigation: bool,
    /// Navigation aktiv
    pub navigation_enabled: bool,
    /// Aktuelle gültige Geräteposition
    pub position: Option<GeoPoint>,
}
