//! Fehler-Taxonomie des Kartenbildschirm-Kerns.
//!
//! Alle Varianten werden am Aufrufort behandelt (No-op plus Diagnose),
//! keine davon soll den Host-Prozess beenden.

use thiserror::Error;

/// Fehler, die von Komponenten des Kerns gemeldet werden.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapScreenError {
    /// Nicht-endliche oder außerhalb des gültigen Bereichs liegende Koordinate
    #[error("ungültige Koordinate: lat={latitude}, lon={longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Zustandsübergang ohne erfüllte Vorbedingung (z.B. Navigation ohne Route)
    #[error("Vorbedingung nicht erfüllt: {reason}")]
    PreconditionNotMet { reason: &'static str },

    /// Karten-Operation ohne verdrahteten Kollaborateur
    #[error("Operation nicht implementiert: {operation}")]
    UnimplementedOperation { operation: &'static str },

    /// Inkonsistente Zoom-Konfiguration (min > max oder Level außerhalb)
    #[error("ungültiger Zoom-Bereich: level={level}, min={min}, max={max}")]
    InvalidZoomRange { level: i32, min: i32, max: i32 },
}
