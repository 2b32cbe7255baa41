//! Routing-Sitzung mit Publikation der Endpunkte und Ereignissen.

use super::collaborators::{NullPositionSharing, PositionProvider, PositionSharing};
use super::MapEvent;
use crate::core::{EndpointRole, RoutingSession};
use crate::shared::MapScreenError;

/// Steuert die Routing-Sitzung: Freigabe, Auswahlmodi, Endpunkte, Verwerfen.
///
/// Gesetzte Endpunkte werden an den Positions-Freigabe-Dienst gemeldet,
/// damit z.B. die Routenberechnung sie sieht.
pub struct RoutingSessionController {
    session: RoutingSession,
    position_sharing: Box<dyn PositionSharing>,
}

impl RoutingSessionController {
    /// Erstellt einen Controller mit injiziertem Freigabe-Dienst.
    pub fn new(position_sharing: Box<dyn PositionSharing>) -> Self {
        Self {
            session: RoutingSession::new(),
            position_sharing,
        }
    }

    /// Read-only Sicht auf die Sitzung
    pub fn session(&self) -> &RoutingSession {
        &self.session
    }

    /// Aktiviert das Routing-UI.
    ///
    /// Ohne Punkt-zu-Punkt startet die Route an der Geräteposition: ist noch
    /// kein Start gesetzt und liegt ein gültiger Fix vor, wird er übernommen.
    pub fn enable(
        &mut self,
        point_to_point: bool,
        position: &dyn PositionProvider,
    ) -> Option<MapEvent> {
        self.session.enable(point_to_point);
        log::info!("Routing aktiviert (point_to_point={})", point_to_point);

        if point_to_point || self.session.start().is_set() {
            return None;
        }
        let current = position.position()?;
        self.set_endpoint(EndpointRole::Start, current.latitude(), current.longitude())
            .ok()
    }

    /// Deaktiviert das Routing-UI; Endpunkte bleiben.
    pub fn disable(&mut self) {
        self.session.disable();
        log::info!("Routing deaktiviert");
    }

    pub fn toggle_select_start(&mut self) {
        self.session.toggle_select_start();
        log::debug!("Auswahlmodus: {:?}", self.session.selection());
    }

    pub fn toggle_select_destination(&mut self) {
        self.session.toggle_select_destination();
        log::debug!("Auswahlmodus: {:?}", self.session.selection());
    }

    /// Setzt den Startpunkt.
    pub fn set_start(&mut self, latitude: f64, longitude: f64) -> Result<MapEvent, MapScreenError> {
        self.set_endpoint(EndpointRole::Start, latitude, longitude)
    }

    /// Setzt den Zielpunkt.
    pub fn set_destination(
        &mut self,
        latitude: f64,
        longitude: f64,
    ) -> Result<MapEvent, MapScreenError> {
        self.set_endpoint(EndpointRole::Destination, latitude, longitude)
    }

    /// Validiert, speichert und publiziert einen Endpunkt.
    /// Bei ungültiger Eingabe bleibt die Sitzung unverändert.
    pub fn set_endpoint(
        &mut self,
        role: EndpointRole,
        latitude: f64,
        longitude: f64,
    ) -> Result<MapEvent, MapScreenError> {
        let point = self.session.set_endpoint(role, latitude, longitude)?;
        self.position_sharing.publish(role, point);
        log::info!(
            "Routing-Endpunkt {:?} gesetzt: ({:.5}, {:.5})",
            role,
            point.latitude(),
            point.longitude()
        );

        Ok(MapEvent::RouteChanged {
            start: self.session.start().position(),
            destination: self.session.destination().position(),
        })
    }

    /// Beendet Auswahl und Routing-Modus und verwirft die gezeichnete Route.
    ///
    /// Die Endpunkt-Koordinaten bleiben stehen; ein erneutes `enable`
    /// arbeitet mit ihnen weiter, bis sie überschrieben werden.
    pub fn clear(&mut self) -> MapEvent {
        self.session.clear();
        self.session.set_route_available(false);
        log::info!("Route verworfen");
        MapEvent::RouteCleared
    }

    /// Übernimmt die Meldung der Routenberechnung.
    pub fn set_route_available(&mut self, available: bool) {
        if self.session.route_available() != available {
            log::info!("Route verfügbar: {}", available);
        }
        self.session.set_route_available(available);
    }
}

impl Default for RoutingSessionController {
    fn default() -> Self {
        Self::new(Box::new(NullPositionSharing))
    }
}
