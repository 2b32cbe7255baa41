//! Map-Screen-Controller für zentrale Event-Verarbeitung.

use super::collaborators::{MapSurface, UnwiredMapSurface};
use super::view_snapshot;
use super::{MapCommand, MapIntent, MapScreenState};
use crate::core::EndpointRole;
use crate::shared::MapViewSnapshot;

/// Orchestriert Intents und Commands auf den MapScreenState.
///
/// Hält die Karten-Oberfläche, an die Zoom, Zentrierung und Spurzeichnung
/// delegiert werden.
pub struct MapScreenController {
    map: Box<dyn MapSurface>,
}

impl MapScreenController {
    /// Erstellt einen Controller ohne verdrahtete Karten-Oberfläche.
    pub fn new() -> Self {
        Self::with_map_surface(Box::new(UnwiredMapSurface))
    }

    /// Erstellt einen Controller mit konkreter Karten-Oberfläche.
    pub fn with_map_surface(map: Box<dyn MapSurface>) -> Self {
        Self { map }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut MapScreenState,
        intent: MapIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &MapScreenState, intent: MapIntent) -> Vec<MapCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem MapScreenState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut MapScreenState,
        command: MapCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        let map = self.map.as_mut();
        match command {
            // === Kompass & Position ===
            MapCommand::ApplyHeadingSample { azimuth } => {
                handlers::heading::apply_sample(state, azimuth)
            }
            MapCommand::UpdatePosition { fix } => handlers::heading::update_position(state, fix),

            // === Zoom ===
            MapCommand::ZoomIn => handlers::view::zoom_in(state, map),
            MapCommand::ZoomOut => handlers::view::zoom_out(state, map),

            // === Routing ===
            MapCommand::EnableRouting { point_to_point } => {
                handlers::routing::enable(state, point_to_point)
            }
            MapCommand::DisableRouting => handlers::routing::disable(state),
            MapCommand::ToggleSelectStart => handlers::routing::toggle_select_start(state),
            MapCommand::ToggleSelectDestination => {
                handlers::routing::toggle_select_destination(state)
            }
            MapCommand::SetRouteStart {
                latitude,
                longitude,
            } => handlers::routing::set_endpoint(state, EndpointRole::Start, latitude, longitude),
            MapCommand::SetRouteDestination {
                latitude,
                longitude,
            } => handlers::routing::set_endpoint(
                state,
                EndpointRole::Destination,
                latitude,
                longitude,
            ),
            MapCommand::ClearRoute => handlers::routing::clear(state),
            MapCommand::SetRouteAvailable { available } => {
                handlers::routing::set_route_available(state, available)
            }

            // === Navigation ===
            MapCommand::ToggleNavigation => {
                handlers::navigation::toggle(state);
            }

            // === Karten-Oberfläche ===
            MapCommand::CenterOnPosition => handlers::view::center_on_position(state, map),
            MapCommand::SetAutoCentering { enabled } => {
                handlers::view::set_auto_centering(state, enabled)
            }
            MapCommand::ShowOnMap {
                latitude,
                longitude,
            } => handlers::view::show_on_map(map, latitude, longitude),
            MapCommand::AddTracePoint {
                latitude,
                longitude,
            } => handlers::view::add_trace_point(map, latitude, longitude),
            MapCommand::ClearTrace => handlers::view::clear_trace(map),

            // === Einstellungen & Benachrichtigungen ===
            MapCommand::ApplySetting { key, value } => {
                handlers::settings::apply(state, key, &value)
            }
            MapCommand::PushNotification { message } => {
                handlers::settings::push_notification(state, &message)
            }
        }

        Ok(())
    }

    /// Baut den View-Snapshot aus dem aktuellen MapScreenState.
    pub fn build_view_snapshot(&self, state: &MapScreenState) -> MapViewSnapshot {
        view_snapshot::build(state)
    }
}

impl Default for MapScreenController {
    fn default() -> Self {
        Self::new()
    }
}
