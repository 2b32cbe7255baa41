//! Minimales Command-Log für Diagnose und Replay-Auswertung.

use super::MapCommand;

/// Speichert ausgeführte Commands (Debug-Darstellung) in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<String>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &MapCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(format!("{command:?}"));
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut log = CommandLog::new();
        log.record(&MapCommand::ZoomIn);
        log.record(&MapCommand::ClearRoute);

        assert_eq!(log.entries(), ["ZoomIn", "ClearRoute"]);
    }

    #[test]
    fn trims_oldest_half_when_full() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(&MapCommand::ZoomOut);
        }
        log.record(&MapCommand::ZoomIn);

        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert_eq!(log.entries().last().map(String::as_str), Some("ZoomIn"));
    }
}
