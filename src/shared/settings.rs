//! Vertrag zum Settings-Dienst: Schlüssel, Werte und Änderungs-Abonnement.
//!
//! Der Kern besitzt keine Persistenz. Startwerte werden über
//! `SettingsService::get` gelesen, spätere Änderungen kommen als
//! `SettingChanged`-Intent und werden an alle `SettingsListener` verteilt,
//! die den Schlüssel abonniert haben.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Vom Kartenbildschirm beobachtete Einstellungen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    /// Kompass-Symbol anzeigen
    ShowCompass,
    /// Deckkraft des Kompass-Symbols (0.0–1.0)
    CompassOpacity,
    /// Deckkraft der Karten-Buttons (0.0–1.0)
    MapButtonsOpacity,
    /// Fortbewegungsart ("car", "walk", ...)
    TravelMode,
    /// Drag-Schwelle für das Beenden der Auto-Zentrierung (Pixel)
    CenteringDragThreshold,
}

impl SettingKey {
    /// Schlüsselname wie im Settings-Dienst
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShowCompass => "show_compass",
            Self::CompassOpacity => "compass_opacity",
            Self::MapButtonsOpacity => "map_buttons_opacity",
            Self::TravelMode => "travel_mode",
            Self::CenteringDragThreshold => "centering_drag_threshold",
        }
    }
}

/// Einstellungswert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SettingValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// Lesezugriff auf persistierte Einstellungen
pub trait SettingsService {
    /// Aktueller Wert, `None` wenn nicht gesetzt
    fn get(&self, key: SettingKey) -> Option<SettingValue>;
}

/// Empfänger von Einstellungsänderungen.
///
/// Jeder Listener nennt die Schlüssel, die ihn interessieren; der
/// Controller ruft `on_changed` nur für diese auf.
pub trait SettingsListener {
    /// Abonnierte Schlüssel
    fn subscribed_keys(&self) -> &'static [SettingKey];

    /// Übernimmt einen geänderten Wert.
    fn on_changed(&mut self, key: SettingKey, value: &SettingValue);

    /// Ob `key` abonniert ist
    fn is_subscribed(&self, key: SettingKey) -> bool {
        self.subscribed_keys().contains(&key)
    }
}

/// Einfacher Settings-Speicher im Speicher (Replay, Tests, Hosts ohne
/// eigenen Dienst).
#[derive(Debug, Clone, Default)]
pub struct InMemorySettings {
    values: IndexMap<SettingKey, SettingValue>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt einen Wert (Builder-Stil).
    pub fn with(mut self, key: SettingKey, value: SettingValue) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: SettingKey, value: SettingValue) {
        self.values.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsService for InMemorySettings {
    fn get(&self, key: SettingKey) -> Option<SettingValue> {
        self.values.get(&key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_settings_returns_stored_values() {
        let settings = InMemorySettings::new()
            .with(SettingKey::ShowCompass, SettingValue::Bool(false))
            .with(SettingKey::TravelMode, SettingValue::Text("walk".into()));

        assert_eq!(
            settings.get(SettingKey::ShowCompass),
            Some(SettingValue::Bool(false))
        );
        assert_eq!(settings.get(SettingKey::CompassOpacity), None);
        assert_eq!(settings.len(), 2);
    }

    #[test]
    fn value_accessors_check_type() {
        assert_eq!(SettingValue::Bool(true).as_number(), None);
        assert_eq!(SettingValue::Number(0.5).as_number(), Some(0.5));
        assert_eq!(SettingValue::Number(f64::NAN).as_number(), None);
        assert_eq!(SettingValue::Text("car".into()).as_text(), Some("car"));
    }

    #[test]
    fn untagged_values_deserialize_from_json() {
        let values: Vec<SettingValue> = serde_json::from_str(r#"[true, 0.25, "walk"]"#).unwrap();

        assert_eq!(
            values,
            vec![
                SettingValue::Bool(true),
                SettingValue::Number(0.25),
                SettingValue::Text("walk".into())
            ]
        );
    }

    #[test]
    fn key_names_match_serde_names() {
        let json = serde_json::to_string(&SettingKey::MapButtonsOpacity).unwrap();

        assert_eq!(json, format!("\"{}\"", SettingKey::MapButtonsOpacity.as_str()));
    }
}
