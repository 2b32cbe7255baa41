//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `core`, `app` und dem Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod error;
mod map_view;
/// Beim Start gelesene Konfiguration (TOML) samt `const`-Fallbacks.
pub mod options;
pub mod settings;

pub use error::MapScreenError;
pub use map_view::MapViewSnapshot;
pub use options::MapScreenOptions;
pub use settings::{InMemorySettings, SettingKey, SettingValue, SettingsListener, SettingsService};
