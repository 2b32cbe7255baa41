//! Handler für den Navigationsmodus.

use crate::app::MapScreenState;

/// Schaltet die Navigation um.
///
/// Gibt `false` zurück, wenn der Start mangels Route abgelehnt wurde; der
/// Zustand bleibt dann unverändert und der Nutzer erhält einen Hinweis.
pub fn toggle(state: &mut MapScreenState) -> bool {
    let route_available = state.routing.session().route_available();
    match state.navigation.toggle(route_available) {
        Ok(transition) => {
            state.emit(transition.to_event());
            true
        }
        Err(e) => {
            log::warn!("Navigation nicht gestartet: {}", e);
            state.notify("Keine Route verfügbar");
            false
        }
    }
}

/// Beendet eine laufende Navigation.
pub fn stop(state: &mut MapScreenState) {
    if let Some(transition) = state.navigation.stop() {
        state.emit(transition.to_event());
    }
}
