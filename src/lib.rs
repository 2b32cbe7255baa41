//! Map-Screen-Core Library.
//! Zustandslogik des Kartenbildschirms (Kompass, Zoom, Routing, Navigation)
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    IntentInbox, IntentSender, MapCommand, MapEvent, MapIntent, MapScreenController,
    MapScreenState,
};
pub use core::{
    EndpointRole, GeoPoint, HeadingFilter, PositionFix, RoutingSession, SelectionMode,
    ZoomController, ZoomState,
};
pub use shared::{MapScreenError, MapScreenOptions, MapViewSnapshot};
