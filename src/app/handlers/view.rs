//! Handler für Zoom, Zentrierung und Karten-Oberfläche.

use crate::app::collaborators::MapSurface;
use crate::app::{MapEvent, MapScreenState};
use crate::core::GeoPoint;
use crate::shared::MapScreenError;

/// Protokolliert das Ergebnis einer delegierten Karten-Operation.
///
/// Fehlende Verdrahtung ist ein Integrationsfehler und wird als `error`
/// gemeldet, alles andere als `warn`.
fn report(result: Result<(), MapScreenError>) {
    match result {
        Ok(()) => {}
        Err(e @ MapScreenError::UnimplementedOperation { .. }) => {
            log::error!("Karten-Oberfläche: {}", e)
        }
        Err(e) => log::warn!("Karten-Oberfläche: {}", e),
    }
}

/// Zoomt eine Stufe hinein.
pub fn zoom_in(state: &mut MapScreenState, map: &mut dyn MapSurface) {
    if state.view.zoom.zoom_in() {
        apply_zoom(state, map);
    }
}

/// Zoomt eine Stufe heraus.
pub fn zoom_out(state: &mut MapScreenState, map: &mut dyn MapSurface) {
    if state.view.zoom.zoom_out() {
        apply_zoom(state, map);
    }
}

fn apply_zoom(state: &mut MapScreenState, map: &mut dyn MapSurface) {
    let zoom = state.view.zoom.state();
    report(map.apply_zoom(zoom));
    state.emit(MapEvent::ZoomChanged { zoom });
}

/// Zentriert die Karte auf die aktuelle gültige Position.
pub fn center_on_position(state: &mut MapScreenState, map: &mut dyn MapSurface) {
    match state.position.current() {
        Some(point) => report(map.center_on(point)),
        None => {
            log::warn!("Zentrieren nicht möglich: keine gültige Position");
            state.notify("Position noch nicht bekannt");
        }
    }
}

/// Schaltet die Auto-Zentrierung.
pub fn set_auto_centering(state: &mut MapScreenState, enabled: bool) {
    if state.view.centering.auto_centering == enabled {
        return;
    }
    state.view.centering.auto_centering = enabled;
    log::info!("Auto-Zentrierung: {}", enabled);
    state.emit(MapEvent::AutoCenteringChanged { enabled });
}

/// Zeigt einen Punkt auf der Karte.
pub fn show_on_map(map: &mut dyn MapSurface, latitude: f64, longitude: f64) {
    match GeoPoint::new(latitude, longitude) {
        Ok(point) => report(map.show_on_map(point)),
        Err(e) => log::warn!("show_on_map abgelehnt: {}", e),
    }
}

/// Zeichnet einen Spurpunkt.
pub fn add_trace_point(map: &mut dyn MapSurface, latitude: f64, longitude: f64) {
    match GeoPoint::new(latitude, longitude) {
        Ok(point) => report(map.add_trace_point(point)),
        Err(e) => log::warn!("Spurpunkt abgelehnt: {}", e),
    }
}

/// Löscht die gezeichnete Spur.
pub fn clear_trace(map: &mut dyn MapSurface) {
    report(map.clear_trace());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::collaborators::{MapNavigation, TraceDrawing, UnwiredMapSurface, ZoomControl};
    use crate::core::{PositionFix, ZoomState};

    #[derive(Default)]
    struct RecordingSurface {
        zooms: Vec<ZoomState>,
        centered: Vec<GeoPoint>,
    }

    impl TraceDrawing for RecordingSurface {}
    impl MapNavigation for RecordingSurface {
        fn center_on(&mut self, point: GeoPoint) -> Result<(), MapScreenError> {
            self.centered.push(point);
            Ok(())
        }
    }
    impl ZoomControl for RecordingSurface {
        fn apply_zoom(&mut self, zoom: ZoomState) -> Result<(), MapScreenError> {
            self.zooms.push(zoom);
            Ok(())
        }
    }

    #[test]
    fn zoom_step_is_applied_and_emitted() {
        let mut state = MapScreenState::new();
        let mut surface = RecordingSurface::default();
        let before = state.view.zoom.level();

        zoom_in(&mut state, &mut surface);

        assert_eq!(state.view.zoom.level(), before + 1);
        assert_eq!(surface.zooms.len(), 1);
        assert!(matches!(
            state.drain_events().as_slice(),
            [MapEvent::ZoomChanged { .. }]
        ));
    }

    #[test]
    fn zoom_at_bound_emits_nothing() {
        let mut state = MapScreenState::new();
        let mut surface = RecordingSurface::default();
        while state.view.zoom.can_zoom_out() {
            zoom_out(&mut state, &mut surface);
        }
        state.drain_events();
        surface.zooms.clear();

        zoom_out(&mut state, &mut surface);

        assert!(surface.zooms.is_empty());
        assert!(state.events.is_empty());
    }

    #[test]
    fn zoom_with_unwired_surface_still_changes_level() {
        let mut state = MapScreenState::new();
        let before = state.view.zoom.level();

        zoom_out(&mut state, &mut UnwiredMapSurface);

        assert_eq!(state.view.zoom.level(), before - 1);
    }

    #[test]
    fn center_without_fix_notifies() {
        let mut state = MapScreenState::new();
        let mut surface = RecordingSurface::default();

        center_on_position(&mut state, &mut surface);

        assert!(surface.centered.is_empty());
        assert_eq!(state.notifications.len(), 1);
    }

    #[test]
    fn center_with_fix_delegates_to_surface() {
        let mut state = MapScreenState::new();
        state
            .position
            .update(PositionFix::from_raw(50.0, 14.0, f64::NAN, f64::NAN));
        let mut surface = RecordingSurface::default();

        center_on_position(&mut state, &mut surface);

        assert_eq!(surface.centered.len(), 1);
    }

    #[test]
    fn auto_centering_change_is_emitted_once() {
        let mut state = MapScreenState::new();

        set_auto_centering(&mut state, false);
        set_auto_centering(&mut state, false);

        assert_eq!(
            state.drain_events(),
            vec![MapEvent::AutoCenteringChanged { enabled: false }]
        );
    }
}
