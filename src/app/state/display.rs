use crate::shared::{MapScreenOptions, SettingKey, SettingValue, SettingsListener, SettingsService};

/// Anzeige-Schalter des Kartenbildschirms, gespeist aus Optionen und
/// Settings-Dienst.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    /// Kompass-Symbol sichtbar
    pub show_compass: bool,
    /// Deckkraft des Kompass-Symbols (0.0–1.0)
    pub compass_opacity: f32,
    /// Deckkraft der Karten-Buttons (0.0–1.0)
    pub map_buttons_opacity: f32,
    /// Fortbewegungsart ("car", "walk", ...)
    pub travel_mode: String,
}

impl DisplaySettings {
    const KEYS: &'static [SettingKey] = &[
        SettingKey::ShowCompass,
        SettingKey::CompassOpacity,
        SettingKey::MapButtonsOpacity,
        SettingKey::TravelMode,
    ];

    /// Startwerte: Optionen als Default, Settings-Dienst überschreibt.
    pub fn from_sources(options: &MapScreenOptions, settings: &dyn SettingsService) -> Self {
        let mut display = Self {
            show_compass: options.show_compass,
            compass_opacity: options.compass_opacity.clamp(0.0, 1.0),
            map_buttons_opacity: options.map_buttons_opacity.clamp(0.0, 1.0),
            travel_mode: options.travel_mode.clone(),
        };

        for &key in Self::KEYS {
            if let Some(value) = settings.get(key) {
                display.on_changed(key, &value);
            }
        }

        display
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let options = MapScreenOptions::default();
        Self {
            show_compass: options.show_compass,
            compass_opacity: options.compass_opacity,
            map_buttons_opacity: options.map_buttons_opacity,
            travel_mode: options.travel_mode,
        }
    }
}

impl SettingsListener for DisplaySettings {
    fn subscribed_keys(&self) -> &'static [SettingKey] {
        Self::KEYS
    }

    fn on_changed(&mut self, key: SettingKey, value: &SettingValue) {
        let applied = match key {
            SettingKey::ShowCompass => value.as_bool().map(|v| self.show_compass = v),
            SettingKey::CompassOpacity => value
                .as_number()
                .map(|v| self.compass_opacity = (v as f32).clamp(0.0, 1.0)),
            SettingKey::MapButtonsOpacity => value
                .as_number()
                .map(|v| self.map_buttons_opacity = (v as f32).clamp(0.0, 1.0)),
            SettingKey::TravelMode => value
                .as_text()
                .map(|v| self.travel_mode = v.to_string()),
            SettingKey::CenteringDragThreshold => None,
        };

        match applied {
            Some(()) => log::info!("Anzeige-Einstellung {} = {:?}", key.as_str(), value),
            None => log::warn!(
                "Anzeige-Einstellung {} ignoriert, unpassender Wert: {:?}",
                key.as_str(),
                value
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::InMemorySettings;

    #[test]
    fn settings_service_overrides_options() {
        let settings = InMemorySettings::new()
            .with(SettingKey::ShowCompass, SettingValue::Bool(false))
            .with(SettingKey::CompassOpacity, SettingValue::Number(0.4));

        let display = DisplaySettings::from_sources(&MapScreenOptions::default(), &settings);

        assert!(!display.show_compass);
        assert!((display.compass_opacity - 0.4).abs() < 1e-6);
        assert_eq!(display.travel_mode, "car");
    }

    #[test]
    fn opacity_is_clamped() {
        let mut display = DisplaySettings::default();

        display.on_changed(SettingKey::MapButtonsOpacity, &SettingValue::Number(3.0));
        assert_eq!(display.map_buttons_opacity, 1.0);

        display.on_changed(SettingKey::CompassOpacity, &SettingValue::Number(-1.0));
        assert_eq!(display.compass_opacity, 0.0);
    }

    #[test]
    fn mismatched_value_type_is_ignored() {
        let mut display = DisplaySettings::default();
        let before = display.clone();

        display.on_changed(SettingKey::ShowCompass, &SettingValue::Text("yes".into()));
        display.on_changed(SettingKey::TravelMode, &SettingValue::Number(1.0));

        assert_eq!(display, before);
    }

    #[test]
    fn travel_mode_change_is_applied() {
        let mut display = DisplaySettings::default();

        display.on_changed(SettingKey::TravelMode, &SettingValue::Text("walk".into()));

        assert_eq!(display.travel_mode, "walk");
    }
}
