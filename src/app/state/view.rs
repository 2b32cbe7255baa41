use super::{CenteringState, DisplaySettings};
use crate::core::{HeadingFilter, ZoomController};
use crate::shared::{MapScreenOptions, SettingsService};

/// View-bezogener Zustand des Kartenbildschirms
pub struct ViewState {
    /// Entfaltungsfilter für den Kompass
    pub heading: HeadingFilter,
    /// Letzter ausgegebener Rotationswinkel (Grad)
    pub rotation_deg: f64,
    /// Zoomstufe mit Grenzen
    pub zoom: ZoomController,
    /// Anzeige-Schalter
    pub display: DisplaySettings,
    /// Auto-Zentrierung
    pub centering: CenteringState,
}

impl ViewState {
    /// Erstellt den View-Zustand aus Optionen und Settings-Dienst.
    pub fn from_sources(options: &MapScreenOptions, settings: &dyn SettingsService) -> Self {
        let (level, min, max) = options.zoom_range();
        let zoom = ZoomController::new(level, min, max).unwrap_or_else(|e| {
            log::error!("{}, verwende Standard-Zoom", e);
            ZoomController::default()
        });

        Self {
            heading: HeadingFilter::with_initial(options.heading_initial_deg),
            rotation_deg: options.heading_initial_deg,
            zoom,
            display: DisplaySettings::from_sources(options, settings),
            centering: CenteringState::from_sources(options, settings),
        }
    }
}
