//! Mapping von Map-Intents auf mutierende Commands.

use super::{MapCommand, MapIntent, MapScreenState};
use crate::core::{PositionFix, SelectionMode};

/// Übersetzt einen `MapIntent` in eine Sequenz ausführbarer `MapCommand`s.
pub fn map_intent_to_commands(state: &MapScreenState, intent: MapIntent) -> Vec<MapCommand> {
    match intent {
        MapIntent::HeadingSampled { azimuth } => vec![MapCommand::ApplyHeadingSample { azimuth }],
        MapIntent::PositionUpdated {
            latitude,
            longitude,
            elevation,
            speed_mps,
        } => {
            let fix = PositionFix::from_raw(
                latitude,
                longitude,
                elevation.unwrap_or(f64::NAN),
                speed_mps.unwrap_or(f64::NAN),
            );
            let mut commands = vec![MapCommand::UpdatePosition { fix }];
            if state.view.centering.auto_centering && fix.is_valid() {
                commands.push(MapCommand::CenterOnPosition);
            }
            commands
        }

        MapIntent::ZoomInRequested => vec![MapCommand::ZoomIn],
        MapIntent::ZoomOutRequested => vec![MapCommand::ZoomOut],

        MapIntent::RoutingEnableRequested { point_to_point } => {
            vec![MapCommand::EnableRouting { point_to_point }]
        }
        MapIntent::RoutingDisableRequested => vec![MapCommand::DisableRouting],
        MapIntent::SelectStartToggled => vec![MapCommand::ToggleSelectStart],
        MapIntent::SelectDestinationToggled => vec![MapCommand::ToggleSelectDestination],
        MapIntent::MapTapped {
            latitude,
            longitude,
        } => map_tap_to_commands(state, latitude, longitude),
        MapIntent::RouteStartPicked {
            latitude,
            longitude,
        } => vec![MapCommand::SetRouteStart {
            latitude,
            longitude,
        }],
        MapIntent::RouteDestinationPicked {
            latitude,
            longitude,
        } => vec![MapCommand::SetRouteDestination {
            latitude,
            longitude,
        }],
        MapIntent::RouteClearRequested => vec![MapCommand::ClearRoute],
        MapIntent::RouteAvailabilityReported { available } => {
            vec![MapCommand::SetRouteAvailable { available }]
        }

        MapIntent::NavigationToggleRequested => vec![MapCommand::ToggleNavigation],

        MapIntent::CenterOnPositionRequested => vec![MapCommand::CenterOnPosition],
        MapIntent::MapDragged { delta } => {
            if state.view.centering.drag_disables_centering(delta) {
                vec![MapCommand::SetAutoCentering { enabled: false }]
            } else {
                vec![]
            }
        }
        MapIntent::AutoCenteringToggled => {
            let enabled = !state.view.centering.auto_centering;
            let mut commands = vec![MapCommand::SetAutoCentering { enabled }];
            if enabled && state.position.current().is_some() {
                commands.push(MapCommand::CenterOnPosition);
            }
            commands
        }
        MapIntent::ShowOnMapRequested {
            latitude,
            longitude,
        } => vec![MapCommand::ShowOnMap {
            latitude,
            longitude,
        }],
        MapIntent::TracePointReceived {
            latitude,
            longitude,
        } => vec![MapCommand::AddTracePoint {
            latitude,
            longitude,
        }],
        MapIntent::TraceClearRequested => vec![MapCommand::ClearTrace],

        MapIntent::SettingChanged { key, value } => vec![MapCommand::ApplySetting { key, value }],
        MapIntent::NotificationRequested { message } => {
            vec![MapCommand::PushNotification { message }]
        }
    }
}

/// Ein Karten-Tap setzt nur bei aktivem Routing und laufender Auswahl einen
/// Endpunkt; der Auswahlmodus bleibt dabei bestehen.
fn map_tap_to_commands(state: &MapScreenState, latitude: f64, longitude: f64) -> Vec<MapCommand> {
    let session = state.routing.session();
    if !session.routing_enabled() {
        return vec![];
    }

    match session.selection() {
        SelectionMode::SelectingStart => vec![MapCommand::SetRouteStart {
            latitude,
            longitude,
        }],
        SelectionMode::SelectingDestination => vec![MapCommand::SetRouteDestination {
            latitude,
            longitude,
        }],
        SelectionMode::None => vec![],
    }
}
