//! Handler für Kompass-Samples und Positionsmeldungen.

use crate::app::MapScreenState;
use crate::core::PositionFix;

/// Schickt ein Kompass-Sample durch den Filter und übernimmt die Rotation.
pub fn apply_sample(state: &mut MapScreenState, azimuth: f64) {
    state.view.rotation_deg = state.view.heading.update(azimuth);
}

/// Übernimmt eine Positionsmeldung.
pub fn update_position(state: &mut MapScreenState, fix: PositionFix) {
    state.position.update(fix);
}
