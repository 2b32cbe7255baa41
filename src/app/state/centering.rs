use crate::shared::{MapScreenOptions, SettingKey, SettingValue, SettingsListener, SettingsService};

/// Auto-Zentrierung auf die Geräteposition.
///
/// Ein manuelles Ziehen der Karte über die Schwelle hinaus beendet die
/// Zentrierung; kleine Wackler beim Tippen nicht.
#[derive(Debug, Clone, PartialEq)]
pub struct CenteringState {
    /// Karte folgt der Geräteposition
    pub auto_centering: bool,
    /// Drag-Länge in Screen-Pixeln, ab der die Zentrierung endet
    pub drag_threshold_px: f32,
}

impl CenteringState {
    const KEYS: &'static [SettingKey] = &[SettingKey::CenteringDragThreshold];

    pub fn from_sources(options: &MapScreenOptions, settings: &dyn SettingsService) -> Self {
        let mut centering = Self {
            auto_centering: options.auto_centering,
            drag_threshold_px: options.centering_drag_threshold_px.max(0.0),
        };
        if let Some(value) = settings.get(SettingKey::CenteringDragThreshold) {
            centering.on_changed(SettingKey::CenteringDragThreshold, &value);
        }
        centering
    }

    /// Ob ein Drag mit diesem Delta die Zentrierung beenden würde
    pub fn drag_disables_centering(&self, delta: glam::Vec2) -> bool {
        self.auto_centering && delta.length() > self.drag_threshold_px
    }
}

impl Default for CenteringState {
    fn default() -> Self {
        let options = MapScreenOptions::default();
        Self {
            auto_centering: options.auto_centering,
            drag_threshold_px: options.centering_drag_threshold_px,
        }
    }
}

impl SettingsListener for CenteringState {
    fn subscribed_keys(&self) -> &'static [SettingKey] {
        Self::KEYS
    }

    fn on_changed(&mut self, key: SettingKey, value: &SettingValue) {
        match value.as_number() {
            Some(threshold) if threshold >= 0.0 => {
                self.drag_threshold_px = threshold as f32;
                log::info!("{} = {}", key.as_str(), threshold);
            }
            _ => log::warn!(
                "{} ignoriert, erwartet nicht-negative Zahl: {:?}",
                key.as_str(),
                value
            ),
        }
    }
}
