//! Feature-Handler für MapCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod heading;
pub mod navigation;
pub mod routing;
pub mod settings;
pub mod view;
