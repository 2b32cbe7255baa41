//! Builder für View-Snapshots aus dem MapScreenState.

use crate::app::MapScreenState;
use crate::shared::MapViewSnapshot;

/// Baut einen MapViewSnapshot aus dem aktuellen MapScreenState.
pub fn build(state: &MapScreenState) -> MapViewSnapshot {
    let session = state.routing.session();
    let navigation_enabled = state.navigation.is_enabled();
    let display = &state.view.display;

    MapViewSnapshot {
        rotation_deg: state.view.rotation_deg,
        zoom: state.view.zoom.state(),
        can_zoom_in: state.view.zoom.can_zoom_in(),
        can_zoom_out: state.view.zoom.can_zoom_out(),
        show_compass: display.show_compass,
        compass_opacity: display.compass_opacity,
        map_buttons_opacity: display.map_buttons_opacity,
        travel_mode: display.travel_mode.clone(),
        auto_centering: state.view.centering.auto_centering,
        routing_enabled: session.routing_enabled(),
        point_to_point: session.point_to_point(),
        selection: session.selection(),
        start: session.start().position(),
        destination: session.destination().position(),
        route_available: session.route_available(),
        // Der Button erscheint nur mit berechneter Route und ohne laufende Navigation
        can_start_navigation: session.route_available() && !navigation_enabled,
        navigation_enabled,
        position: state.position.current(),
    }
}
