//! Core-Domänentypen: Kompass-Filter, Zoom, Routing-Sitzung, Koordinaten.

pub mod geo;
pub mod heading;
pub mod position;
/// Routing-Sitzung
///
/// Endpunkte (Start/Ziel), Auswahlmodus und Freigabe-Flags.
/// Publizieren und Ereignisse liegen im App-Layer.
pub mod routing;
pub mod zoom;

pub use geo::GeoPoint;
pub use heading::{HeadingFilter, WRAP_THRESHOLD_DEG};
pub use position::{PositionFix, TrackedPosition};
pub use routing::{EndpointRole, RoutingEndpoint, RoutingSession, SelectionMode};
pub use zoom::{ZoomController, ZoomState};
