//! Handler für die Routing-Sitzung.

use crate::app::{MapEvent, MapScreenState};
use crate::core::EndpointRole;

use super::navigation;

/// Aktiviert das Routing-UI (optional mit Start an der Geräteposition).
pub fn enable(state: &mut MapScreenState, point_to_point: bool) {
    if let Some(event) = state.routing.enable(point_to_point, &state.position) {
        state.emit(event);
    }
}

/// Deaktiviert das Routing-UI.
pub fn disable(state: &mut MapScreenState) {
    state.routing.disable();
}

/// Schaltet die Startpunkt-Auswahl um.
pub fn toggle_select_start(state: &mut MapScreenState) {
    state.routing.toggle_select_start();
}

/// Schaltet die Zielpunkt-Auswahl um.
pub fn toggle_select_destination(state: &mut MapScreenState) {
    state.routing.toggle_select_destination();
}

/// Setzt einen Endpunkt. Ungültige Koordinaten werden verworfen und
/// protokolliert, der Zustand bleibt unverändert.
pub fn set_endpoint(state: &mut MapScreenState, role: EndpointRole, latitude: f64, longitude: f64) {
    match state.routing.set_endpoint(role, latitude, longitude) {
        Ok(event) => state.emit(event),
        Err(e) => log::warn!("Routing-Endpunkt {:?} abgelehnt: {}", role, e),
    }
}

/// Beendet Auswahl und Routing und verwirft die Route.
///
/// Eine laufende Navigation wird vorher beendet.
pub fn clear(state: &mut MapScreenState) {
    navigation::stop(state);
    let event = state.routing.clear();
    state.emit(event);
}

/// Übernimmt die Meldung der Routenberechnung. Ohne Route endet eine
/// laufende Navigation.
pub fn set_route_available(state: &mut MapScreenState, available: bool) {
    state.routing.set_route_available(available);
    if !available {
        navigation::stop(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_endpoint_emits_nothing() {
        let mut state = MapScreenState::new();

        set_endpoint(&mut state, EndpointRole::Start, 100.0, 0.0);

        assert!(state.events.is_empty());
        assert!(!state.routing.session().start().is_set());
    }

    #[test]
    fn second_endpoint_event_carries_both_points() {
        let mut state = MapScreenState::new();

        set_endpoint(&mut state, EndpointRole::Start, 50.0, 14.0);
        set_endpoint(&mut state, EndpointRole::Destination, 49.0, 16.0);

        let events = state.drain_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[1],
            MapEvent::RouteChanged {
                start: Some(_),
                destination: Some(_)
            }
        ));
    }

    #[test]
    fn clear_emits_route_cleared() {
        let mut state = MapScreenState::new();
        enable(&mut state, true);

        clear(&mut state);

        assert_eq!(state.drain_events(), vec![MapEvent::RouteCleared]);
        assert!(!state.routing.session().routing_enabled());
    }

    #[test]
    fn clear_while_navigating_stops_navigation_first() {
        let mut state = MapScreenState::new();
        set_route_available(&mut state, true);
        state.navigation.toggle(true).unwrap();

        clear(&mut state);

        assert!(!state.navigation.is_enabled());
        assert!(!state.routing.session().route_available());
        assert_eq!(
            state.drain_events(),
            vec![MapEvent::NavigationStopped, MapEvent::RouteCleared]
        );
    }

    #[test]
    fn route_lost_while_navigating_stops_navigation() {
        let mut state = MapScreenState::new();
        set_route_available(&mut state, true);
        state.navigation.toggle(true).unwrap();

        set_route_available(&mut state, false);

        assert!(!state.navigation.is_enabled());
        assert_eq!(state.drain_events(), vec![MapEvent::NavigationStopped]);
    }

    #[test]
    fn route_available_keeps_navigation_running() {
        let mut state = MapScreenState::new();
        set_route_available(&mut state, true);
        state.navigation.toggle(true).unwrap();

        set_route_available(&mut state, true);

        assert!(state.navigation.is_enabled());
        assert!(state.events.is_empty());
    }
}
