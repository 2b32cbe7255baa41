//! Navigationsmodus: Zwei-Zustands-Automat {Idle, Navigating}.

use super::MapEvent;
use crate::shared::MapScreenError;

/// Erfolgter Übergang des Navigationsmodus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTransition {
    Started,
    Stopped,
}

impl NavigationTransition {
    /// Ereignis für Overlay und Telemetrie
    pub fn to_event(self) -> MapEvent {
        match self {
            Self::Started => MapEvent::NavigationStarted,
            Self::Stopped => MapEvent::NavigationStopped,
        }
    }
}

/// Schaltet die Turn-by-Turn-Anzeige; Start nur mit verfügbarer Route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationModeController {
    navigation_enabled: bool,
}

impl NavigationModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.navigation_enabled
    }

    /// Schaltet um. Idle → Navigating verlangt `route_available`, sonst
    /// `PreconditionNotMet` ohne Zustandsänderung.
    pub fn toggle(
        &mut self,
        route_available: bool,
    ) -> Result<NavigationTransition, MapScreenError> {
        if self.navigation_enabled {
            self.navigation_enabled = false;
            log::info!("Navigation beendet");
            return Ok(NavigationTransition::Stopped);
        }

        if !route_available {
            return Err(MapScreenError::PreconditionNotMet {
                reason: "keine Route verfügbar",
            });
        }

        self.navigation_enabled = true;
        log::info!("Navigation gestartet");
        Ok(NavigationTransition::Started)
    }

    /// Beendet eine laufende Navigation; `None`, wenn keine lief.
    pub fn stop(&mut self) -> Option<NavigationTransition> {
        if !self.navigation_enabled {
            return None;
        }
        self.navigation_enabled = false;
        log::info!("Navigation beendet");
        Some(NavigationTransition::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_without_route_is_rejected() {
        let mut nav = NavigationModeController::new();

        let result = nav.toggle(false);

        assert!(matches!(
            result,
            Err(MapScreenError::PreconditionNotMet { .. })
        ));
        assert!(!nav.is_enabled());
    }

    #[test]
    fn start_with_route_and_stop() {
        let mut nav = NavigationModeController::new();

        assert_eq!(nav.toggle(true), Ok(NavigationTransition::Started));
        assert!(nav.is_enabled());

        assert_eq!(nav.toggle(true), Ok(NavigationTransition::Stopped));
        assert!(!nav.is_enabled());
    }

    #[test]
    fn stop_via_toggle_ignores_route_availability() {
        let mut nav = NavigationModeController::new();
        nav.toggle(true).unwrap();

        assert_eq!(nav.toggle(false), Ok(NavigationTransition::Stopped));
    }

    #[test]
    fn stop_when_idle_is_none() {
        let mut nav = NavigationModeController::new();

        assert_eq!(nav.stop(), None);

        nav.toggle(true).unwrap();
        assert_eq!(nav.stop(), Some(NavigationTransition::Stopped));
        assert!(!nav.is_enabled());
    }

    #[test]
    fn transitions_map_to_events() {
        assert_eq!(
            NavigationTransition::Started.to_event(),
            MapEvent::NavigationStarted
        );
        assert_eq!(
            NavigationTransition::Stopped.to_event(),
            MapEvent::NavigationStopped
        );
    }
}
