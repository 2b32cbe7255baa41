//! Routing-Sitzung: Endpunkte, Auswahlmodus und Freigabe-Flags.
//!
//! Reine Daten und Zustandsübergänge. Publizieren der Endpunkte und
//! Ereignisse übernimmt `app::routing::RoutingSessionController`.

use super::GeoPoint;
use crate::shared::MapScreenError;
use serde::{Deserialize, Serialize};

/// Rolle eines Routing-Endpunkts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointRole {
    /// Startpunkt
    Start,
    /// Zielpunkt
    Destination,
}

/// Routing-Endpunkt. `None` = nicht gesetzt; ein halb gesetzter Punkt ist
/// nicht darstellbar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoutingEndpoint {
    position: Option<GeoPoint>,
}

impl RoutingEndpoint {
    /// Ob der Endpunkt gesetzt ist
    pub fn is_set(&self) -> bool {
        self.position.is_some()
    }

    /// Gesetzte Position (falls vorhanden)
    pub fn position(&self) -> Option<GeoPoint> {
        self.position
    }

    fn set(&mut self, point: GeoPoint) {
        self.position = Some(point);
    }
}

/// Auswahlmodus für Karten-Taps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Taps wählen keinen Endpunkt
    #[default]
    None,
    /// Nächster Tap setzt den Startpunkt
    SelectingStart,
    /// Nächster Tap setzt den Zielpunkt
    SelectingDestination,
}

/// Zustand einer Routing-Sitzung
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoutingSession {
    start: RoutingEndpoint,
    destination: RoutingEndpoint,
    selection: SelectionMode,
    routing_enabled: bool,
    point_to_point: bool,
    route_available: bool,
}

impl RoutingSession {
    /// Erstellt eine leere Sitzung (Routing aus, nichts gesetzt).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> RoutingEndpoint {
        self.start
    }

    pub fn destination(&self) -> RoutingEndpoint {
        self.destination
    }

    pub fn endpoint(&self, role: EndpointRole) -> RoutingEndpoint {
        match role {
            EndpointRole::Start => self.start,
            EndpointRole::Destination => self.destination,
        }
    }

    pub fn selection(&self) -> SelectionMode {
        self.selection
    }

    pub fn is_selecting_start(&self) -> bool {
        self.selection == SelectionMode::SelectingStart
    }

    pub fn is_selecting_destination(&self) -> bool {
        self.selection == SelectionMode::SelectingDestination
    }

    pub fn routing_enabled(&self) -> bool {
        self.routing_enabled
    }

    pub fn point_to_point(&self) -> bool {
        self.point_to_point
    }

    pub fn route_available(&self) -> bool {
        self.route_available
    }

    /// Aktiviert das Routing-UI. Idempotent.
    pub fn enable(&mut self, point_to_point: bool) {
        self.routing_enabled = true;
        self.point_to_point = point_to_point;
    }

    /// Deaktiviert das Routing-UI. Gesetzte Endpunkte bleiben erhalten.
    pub fn disable(&mut self) {
        self.routing_enabled = false;
        self.point_to_point = false;
    }

    /// Schaltet die Startpunkt-Auswahl um; beim Einschalten endet eine
    /// laufende Zielauswahl.
    pub fn toggle_select_start(&mut self) {
        self.selection = match self.selection {
            SelectionMode::SelectingStart => SelectionMode::None,
            _ => SelectionMode::SelectingStart,
        };
    }

    /// Schaltet die Zielpunkt-Auswahl um; beim Einschalten endet eine
    /// laufende Startauswahl.
    pub fn toggle_select_destination(&mut self) {
        self.selection = match self.selection {
            SelectionMode::SelectingDestination => SelectionMode::None,
            _ => SelectionMode::SelectingDestination,
        };
    }

    /// Validiert und speichert einen Endpunkt. Der Auswahlmodus bleibt
    /// unverändert; bei ungültiger Eingabe bleibt der Zustand unverändert.
    pub fn set_endpoint(
        &mut self,
        role: EndpointRole,
        latitude: f64,
        longitude: f64,
    ) -> Result<GeoPoint, MapScreenError> {
        let point = GeoPoint::new(latitude, longitude)?;
        match role {
            EndpointRole::Start => self.start.set(point),
            EndpointRole::Destination => self.destination.set(point),
        }
        Ok(point)
    }

    /// Verlässt Auswahl und Routing-Modus. Endpunkte bleiben stehen.
    // TODO: klären, ob `clear` auch die Endpunkte verwerfen soll; aktuell
    // übernimmt ein erneutes `enable` die alten Punkte.
    pub fn clear(&mut self) {
        self.selection = SelectionMode::None;
        self.routing_enabled = false;
    }

    /// Übernimmt die Meldung des Routenberechnungs-Dienstes.
    pub fn set_route_available(&mut self, available: bool) {
        self.route_available = available;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_inactive() {
        let session = RoutingSession::new();

        assert!(!session.routing_enabled());
        assert!(!session.point_to_point());
        assert!(!session.route_available());
        assert_eq!(session.selection(), SelectionMode::None);
        assert!(!session.start().is_set());
        assert!(!session.destination().is_set());
    }

    #[test]
    fn enable_is_idempotent() {
        let mut session = RoutingSession::new();
        session.enable(true);
        let once = session.clone();

        session.enable(true);

        assert_eq!(session, once);
    }

    #[test]
    fn disable_keeps_endpoints() {
        let mut session = RoutingSession::new();
        session.enable(true);
        session
            .set_endpoint(EndpointRole::Start, 50.0, 14.0)
            .unwrap();

        session.disable();

        assert!(!session.routing_enabled());
        assert!(!session.point_to_point());
        assert!(session.start().is_set());
    }

    #[test]
    fn selection_toggles_are_mutually_exclusive() {
        let mut session = RoutingSession::new();
        session.enable(true);

        session.toggle_select_start();
        assert!(session.is_selecting_start());
        assert!(!session.is_selecting_destination());

        session.toggle_select_destination();
        assert!(!session.is_selecting_start());
        assert!(session.is_selecting_destination());

        session.toggle_select_start();
        assert!(session.is_selecting_start());
        assert!(!session.is_selecting_destination());

        session.toggle_select_start();
        assert_eq!(session.selection(), SelectionMode::None);
    }

    #[test]
    fn clear_leaves_selection_and_routing_off() {
        let mut session = RoutingSession::new();
        session.enable(true);
        session.toggle_select_start();
        session.toggle_select_destination();

        session.clear();

        assert!(!session.is_selecting_start());
        assert!(!session.is_selecting_destination());
        assert!(!session.routing_enabled());
    }

    #[test]
    fn clear_keeps_stale_endpoints() {
        let mut session = RoutingSession::new();
        session
            .set_endpoint(EndpointRole::Destination, 49.2, 16.6)
            .unwrap();

        session.clear();

        let dest = session.destination().position().unwrap();
        assert_eq!(dest.latitude(), 49.2);
        assert_eq!(dest.longitude(), 16.6);
    }

    #[test]
    fn invalid_endpoint_leaves_state_unchanged() {
        let mut session = RoutingSession::new();
        session
            .set_endpoint(EndpointRole::Start, 10.0, 10.0)
            .unwrap();
        let before = session.clone();

        let result = session.set_endpoint(EndpointRole::Start, f64::NAN, 10.0);

        assert!(matches!(
            result,
            Err(MapScreenError::InvalidCoordinate { .. })
        ));
        assert_eq!(session, before);
    }

    #[test]
    fn set_endpoint_keeps_selection_mode() {
        let mut session = RoutingSession::new();
        session.toggle_select_start();

        session
            .set_endpoint(EndpointRole::Start, 1.0, 2.0)
            .unwrap();

        assert!(session.is_selecting_start());
    }
}
