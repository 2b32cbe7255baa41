//! Map-Screen-Replay.
//!
//! Spielt ein Szenario (JSON-Liste von Map-Intents) gegen den
//! Kartenbildschirm ab und gibt Ereignisse, Benachrichtigungen und den
//! abschließenden View-Snapshot aus.

use anyhow::Context;
use map_screen_core::app::{MapNavigation, TraceDrawing, ZoomControl};
use map_screen_core::core::ZoomState;
use map_screen_core::{
    GeoPoint, MapIntent, MapScreenController, MapScreenError, MapScreenOptions, MapScreenState,
};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Map-Screen-Replay v{} startet...", env!("CARGO_PKG_VERSION"));

    let scenario_path = std::env::args()
        .nth(1)
        .context("Aufruf: map-screen-replay <scenario.json>")?;

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = MapScreenOptions::config_path();
    let options = MapScreenOptions::load_from_file(&config_path);

    let content = std::fs::read_to_string(&scenario_path)
        .with_context(|| format!("Szenario nicht lesbar: {}", scenario_path))?;
    let intents: Vec<MapIntent> = serde_json::from_str(&content)
        .with_context(|| format!("Szenario ungültig: {}", scenario_path))?;
    log::info!("{} Intents geladen aus {}", intents.len(), scenario_path);

    let mut state = MapScreenState::with_services(
        options,
        &map_screen_core::shared::InMemorySettings::new(),
        Box::new(map_screen_core::app::NullPositionSharing),
    );
    let mut controller = MapScreenController::with_map_surface(Box::new(LoggingMapSurface));

    for intent in intents {
        controller.handle_intent(&mut state, intent)?;

        for event in state.drain_events() {
            println!("{}", serde_json::to_string(&event)?);
        }
        for notification in state.notifications.drain() {
            log::info!(
                "Benachrichtigung ({} ms): {}",
                notification.timeout_ms,
                notification.text
            );
        }
    }

    let snapshot = controller.build_view_snapshot(&state);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    log::info!("{} Commands ausgeführt", state.command_log.len());

    Ok(())
}

/// Karten-Oberfläche, die alle Aufrufe nur protokolliert.
struct LoggingMapSurface;

impl TraceDrawing for LoggingMapSurface {
    fn add_trace_point(&mut self, point: GeoPoint) -> Result<(), MapScreenError> {
        log::info!("Spur: {:.5}, {:.5}", point.latitude(), point.longitude());
        Ok(())
    }

    fn clear_trace(&mut self) -> Result<(), MapScreenError> {
        log::info!("Spur gelöscht");
        Ok(())
    }
}

impl MapNavigation for LoggingMapSurface {
    fn show_on_map(&mut self, point: GeoPoint) -> Result<(), MapScreenError> {
        log::info!("Zeige: {:.5}, {:.5}", point.latitude(), point.longitude());
        Ok(())
    }

    fn center_on(&mut self, point: GeoPoint) -> Result<(), MapScreenError> {
        log::info!("Zentriere: {:.5}, {:.5}", point.latitude(), point.longitude());
        Ok(())
    }
}

impl ZoomControl for LoggingMapSurface {
    fn apply_zoom(&mut self, zoom: ZoomState) -> Result<(), MapScreenError> {
        log::info!("Zoom: {} ({}..={})", zoom.level, zoom.min, zoom.max);
        Ok(())
    }
}
