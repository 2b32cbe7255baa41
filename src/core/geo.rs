//! Validierte geographische Koordinaten.

use crate::shared::MapScreenError;
use serde::{Deserialize, Serialize};

/// Geographischer Punkt mit geprüftem Wertebereich.
///
/// Eine Instanz existiert nur mit endlichen Werten, Breite in `[-90, 90]`
/// und Länge in `[-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Gültiger Breitengrad-Betrag.
    pub const MAX_LATITUDE: f64 = 90.0;
    /// Gültiger Längengrad-Betrag.
    pub const MAX_LONGITUDE: f64 = 180.0;

    /// Erstellt einen Punkt, lehnt ungültige Koordinaten ab.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, MapScreenError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && latitude.abs() <= Self::MAX_LATITUDE
            && longitude.abs() <= Self::MAX_LONGITUDE;

        if valid {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(MapScreenError::InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    /// Breitengrad in Grad
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Längengrad in Grad
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Deserialisierung läuft über `new`, damit auch Szenario-Dateien keine
/// ungültigen Punkte erzeugen können.
impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude: f64,
            longitude: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        GeoPoint::new(raw.latitude, raw.longitude).map_err(serde::de::Error::custom)
    }
}
