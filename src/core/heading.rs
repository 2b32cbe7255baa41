//! Kompass-Entfaltung: rohe Azimut-Werte → stetiger Rotationswinkel.
//!
//! Die Anzeige dreht um den negierten Azimut. Beim Überqueren der
//! 0°/360°-Naht springt der negierte Wert um fast 360°, was als
//! Vollkreis-Animation sichtbar wäre. Der Filter korrigiert solche Sprünge
//! um ganze Umdrehungen, sodass der Ausgabewert stetig bleibt.

/// Sprünge oberhalb dieser Schwelle gelten als Naht-Überquerung.
///
/// Bewusst größer als 180°, damit schnelle echte Drehungen nicht
/// als Überlauf interpretiert werden.
pub const WRAP_THRESHOLD_DEG: f64 = 270.0;

/// Grad pro Umdrehung
const FULL_TURN_DEG: f64 = 360.0;

/// Entfaltungsfilter für Kompass-Samples.
///
/// Samples müssen in Eingangsreihenfolge verarbeitet werden, der Filter ist
/// reihenfolgeabhängig.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingFilter {
    previous_unwrapped: f64,
}

impl HeadingFilter {
    /// Erstellt einen Filter mit Startwinkel 0°.
    pub fn new() -> Self {
        Self::with_initial(0.0)
    }

    /// Erstellt einen Filter mit vorgegebenem Startwinkel.
    pub fn with_initial(previous_unwrapped: f64) -> Self {
        Self { previous_unwrapped }
    }

    /// Zuletzt ausgegebener (entfalteter) Winkel
    pub fn previous_unwrapped(&self) -> f64 {
        self.previous_unwrapped
    }

    /// Verarbeitet ein rohes Azimut-Sample und gibt den stetigen Winkel zurück.
    ///
    /// Nicht-endliche Samples werden verworfen, der vorherige Wert bleibt
    /// erhalten.
    pub fn update(&mut self, raw_azimuth: f64) -> f64 {
        if !raw_azimuth.is_finite() {
            log::warn!("Kompass-Sample verworfen (nicht endlich): {}", raw_azimuth);
            return self.previous_unwrapped;
        }

        let candidate = -raw_azimuth;
        let corrected = unwrap_towards(self.previous_unwrapped, candidate);
        log::trace!(
            "Kompass: azimuth={:.1}, candidate={:.1}, rotation={:.1}",
            raw_azimuth,
            candidate,
            corrected
        );

        self.previous_unwrapped = corrected;
        corrected
    }
}

impl Default for HeadingFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Verschiebt `candidate` um ganze Umdrehungen in Richtung `previous`,
/// bis der Abstand höchstens `WRAP_THRESHOLD_DEG` beträgt.
fn unwrap_towards(previous: f64, candidate: f64) -> f64 {
    let distance = previous - candidate;
    if distance.abs() <= WRAP_THRESHOLD_DEG {
        return candidate;
    }

    let turns = ((distance.abs() - WRAP_THRESHOLD_DEG) / FULL_TURN_DEG).ceil();
    if previous > candidate {
        candidate + turns * FULL_TURN_DEG
    } else {
        candidate - turns * FULL_TURN_DEG
    }
}
