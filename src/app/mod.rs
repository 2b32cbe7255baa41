//! Application-Layer: Controller, State, Events und Handler des Kartenbildschirms.

pub mod collaborators;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod inbox;
mod intent_mapping;
pub mod navigation;
pub mod notifications;
pub mod routing;
/// Map-Screen-State
///
/// Dieses Modul verwaltet den Zustand des Kartenbildschirms (Kompass, Zoom, Routing, Position).
pub mod state;
pub mod view_snapshot;

pub use collaborators::{
    MapNavigation, MapSurface, NullPositionSharing, PositionProvider, PositionSharing,
    TraceDrawing, UnwiredMapSurface, ZoomControl,
};
pub use command_log::CommandLog;
pub use controller::MapScreenController;
pub use events::{MapCommand, MapEvent, MapIntent};
pub use inbox::{IntentInbox, IntentSender};
pub use navigation::{NavigationModeController, NavigationTransition};
pub use notifications::{Notification, NotificationQueue};
pub use routing::RoutingSessionController;
pub use state::{CenteringState, DisplaySettings, MapScreenState, ViewState};
pub use view_snapshot::build as build_view_snapshot;
