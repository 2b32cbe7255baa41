use crate::app::collaborators::{NullPositionSharing, PositionSharing};
use crate::app::notifications::{Notification, NotificationQueue};
use crate::app::{CommandLog, MapEvent, NavigationModeController, RoutingSessionController};
use crate::core::TrackedPosition;
use crate::shared::{InMemorySettings, MapScreenOptions, SettingsService};

use super::ViewState;

/// Hauptzustand des Kartenbildschirms.
///
/// Jeder Teilzustand gehört genau einem Controller und wird nur über
/// dessen Operationen verändert.
pub struct MapScreenState {
    /// Kompass, Zoom, Anzeige, Zentrierung
    pub view: ViewState,
    /// Routing-Sitzung
    pub routing: RoutingSessionController,
    /// Navigationsmodus
    pub navigation: NavigationModeController,
    /// Zuletzt gemeldete Geräteposition
    pub position: TrackedPosition,
    /// Noch nicht abgeholte Ereignisse für Kollaborateure
    pub events: Vec<MapEvent>,
    /// Benachrichtigungen für den Nutzer
    pub notifications: NotificationQueue,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Beim Start gelesene Optionen
    pub options: MapScreenOptions,
}

impl MapScreenState {
    /// Erstellt einen Zustand mit Standardoptionen und ohne Kollaborateure.
    pub fn new() -> Self {
        Self::with_services(
            MapScreenOptions::default(),
            &InMemorySettings::new(),
            Box::new(NullPositionSharing),
        )
    }

    /// Erstellt einen Zustand mit injizierten Diensten.
    ///
    /// Der Settings-Dienst wird nur für die Startwerte gelesen; spätere
    /// Änderungen kommen als `MapIntent::SettingChanged`.
    pub fn with_services(
        options: MapScreenOptions,
        settings: &dyn SettingsService,
        position_sharing: Box<dyn PositionSharing>,
    ) -> Self {
        Self {
            view: ViewState::from_sources(&options, settings),
            routing: RoutingSessionController::new(position_sharing),
            navigation: NavigationModeController::new(),
            position: TrackedPosition::new(),
            events: Vec::new(),
            notifications: NotificationQueue::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Reiht ein Ereignis für die Kollaborateure ein.
    pub fn emit(&mut self, event: MapEvent) {
        log::debug!("Ereignis: {:?}", event);
        self.events.push(event);
    }

    /// Entnimmt alle wartenden Ereignisse in Reihenfolge.
    pub fn drain_events(&mut self) -> Vec<MapEvent> {
        std::mem::take(&mut self.events)
    }

    /// Reiht eine Benachrichtigung mit Standard-Timeout ein.
    pub fn notify(&mut self, text: &str) {
        let timeout_ms = self.options.notification_timeout_ms;
        self.notifications.push(Notification {
            text: text.to_string(),
            timeout_ms,
        });
    }
}

impl Default for MapScreenState {
    fn default() -> Self {
        Self::new()
    }
}
