//! Zentrale Konfiguration des Kartenbildschirm-Kerns.
//!
//! `MapScreenOptions` enthält die beim Start gelesenen Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Zoom ────────────────────────────────────────────────────────────

/// Kleinste Zoomstufe.
pub const ZOOM_MIN: i32 = 1;
/// Größte Zoomstufe.
pub const ZOOM_MAX: i32 = 18;
/// Zoomstufe beim Öffnen des Kartenbildschirms.
pub const ZOOM_INITIAL: i32 = 15;

// ── Anzeige ─────────────────────────────────────────────────────────

/// Kompass standardmäßig sichtbar.
pub const SHOW_COMPASS: bool = true;
/// Standard-Deckkraft des Kompass-Symbols.
pub const COMPASS_OPACITY: f32 = 0.7;
/// Standard-Deckkraft der Karten-Buttons.
pub const MAP_BUTTONS_OPACITY: f32 = 1.0;
/// Standard-Fortbewegungsart.
pub const TRAVEL_MODE: &str = "car";

// ── Zentrierung ─────────────────────────────────────────────────────

/// Drag-Länge in Screen-Pixeln, ab der die Auto-Zentrierung endet.
pub const CENTERING_DRAG_THRESHOLD_PX: f32 = 30.0;

// ── Benachrichtigungen ──────────────────────────────────────────────

/// Standard-Anzeigedauer einer Benachrichtigung in Millisekunden.
pub const NOTIFICATION_TIMEOUT_MS: u64 = 5000;

/// Beim Start gelesene Optionen.
/// Wird als `map_screen.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapScreenOptions {
    // ── Zoom ────────────────────────────────────────────────────
    /// Kleinste Zoomstufe
    pub zoom_min: i32,
    /// Größte Zoomstufe
    pub zoom_max: i32,
    /// Start-Zoomstufe (wird auf [min, max] begrenzt)
    pub zoom_initial: i32,

    // ── Kompass ─────────────────────────────────────────────────
    /// Startwert des entfalteten Kompasswinkels
    #[serde(default)]
    pub heading_initial_deg: f64,

    // ── Anzeige-Defaults (überschreibbar durch den Settings-Dienst) ─
    pub show_compass: bool,
    pub compass_opacity: f32,
    pub map_buttons_opacity: f32,
    pub travel_mode: String,

    // ── Zentrierung ─────────────────────────────────────────────
    /// Auto-Zentrierung beim Start aktiv
    #[serde(default = "default_auto_centering")]
    pub auto_centering: bool,
    /// Drag-Schwelle in Screen-Pixeln
    pub centering_drag_threshold_px: f32,

    // ── Benachrichtigungen ──────────────────────────────────────
    pub notification_timeout_ms: u64,
}

impl Default for MapScreenOptions {
    fn default() -> Self {
        Self {
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_initial: ZOOM_INITIAL,

            heading_initial_deg: 0.0,

            show_compass: SHOW_COMPASS,
            compass_opacity: COMPASS_OPACITY,
            map_buttons_opacity: MAP_BUTTONS_OPACITY,
            travel_mode: TRAVEL_MODE.to_string(),

            auto_centering: true,
            centering_drag_threshold_px: CENTERING_DRAG_THRESHOLD_PX,

            notification_timeout_ms: NOTIFICATION_TIMEOUT_MS,
        }
    }
}

/// Serde-Default für `auto_centering` (Abwärtskompatibilität).
fn default_auto_centering() -> bool {
    true
}

impl MapScreenOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map_screen"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_screen.toml")
    }

    /// Zoom-Grenzen in konsistenter Reihenfolge und die begrenzte Startstufe.
    ///
    /// Vertauschte Grenzen aus einer handeditierten Datei werden getauscht.
    pub fn zoom_range(&self) -> (i32, i32, i32) {
        let (min, max) = if self.zoom_min <= self.zoom_max {
            (self.zoom_min, self.zoom_max)
        } else {
            log::warn!(
                "zoom_min ({}) > zoom_max ({}), Grenzen werden getauscht",
                self.zoom_min,
                self.zoom_max
            );
            (self.zoom_max, self.zoom_min)
        };
        (self.zoom_initial.clamp(min, max), min, max)
    }
}
