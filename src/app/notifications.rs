//! Warteschlange für Benachrichtigungen an den Nutzer.

use serde::Serialize;
use std::collections::VecDeque;

/// Einzelne Benachrichtigung mit Anzeigedauer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub text: String,
    pub timeout_ms: u64,
}

impl Notification {
    /// Parst eine Nachricht mit optionalem Timeout-Suffix in Sekunden,
    /// z.B. `"Route berechnet#3"`. Ohne oder mit kaputtem Suffix gilt
    /// `default_timeout_ms`.
    ///
    /// Bei mehr als einem `#` wird nur der erste Teil angezeigt, mit
    /// Standard-Timeout.
    pub fn parse(message: &str, default_timeout_ms: u64) -> Self {
        let parts: Vec<&str> = message.split('#').collect();
        let (text, suffix) = match parts.as_slice() {
            [text] => (*text, None),
            [text, suffix] => (*text, Some(*suffix)),
            [text, ..] => {
                log::warn!(
                    "Nachricht mit {} Parametern, verwende {} ms: {}",
                    parts.len() - 1,
                    default_timeout_ms,
                    message
                );
                (*text, None)
            }
            [] => (message, None),
        };

        let Some(suffix) = suffix else {
            return Self {
                text: text.to_string(),
                timeout_ms: default_timeout_ms,
            };
        };

        let timeout_ms = match suffix.trim().parse::<f64>() {
            Ok(seconds) if seconds.is_finite() && seconds >= 0.0 => (seconds * 1000.0) as u64,
            _ => {
                log::warn!(
                    "Ungültiger Timeout '{}', verwende {} ms",
                    suffix,
                    default_timeout_ms
                );
                default_timeout_ms
            }
        };

        Self {
            text: text.to_string(),
            timeout_ms,
        }
    }
}

/// FIFO der noch nicht angezeigten Benachrichtigungen
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    /// Obergrenze, ältere Einträge werden verworfen.
    const MAX_PENDING: usize = 32;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        if self.pending.len() >= Self::MAX_PENDING {
            self.pending.pop_front();
        }
        log::info!("Benachrichtigung: {}", notification.text);
        self.pending.push_back(notification);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Entnimmt alle wartenden Benachrichtigungen.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_message_uses_default_timeout() {
        let n = Notification::parse("Hallo Welt", 5000);

        assert_eq!(n.text, "Hallo Welt");
        assert_eq!(n.timeout_ms, 5000);
    }

    #[test]
    fn suffix_sets_timeout_in_seconds() {
        let n = Notification::parse("Route berechnet#3", 5000);

        assert_eq!(n.text, "Route berechnet");
        assert_eq!(n.timeout_ms, 3000);
    }

    #[test]
    fn fractional_seconds_are_supported() {
        assert_eq!(Notification::parse("kurz#0.5", 5000).timeout_ms, 500);
    }

    #[test]
    fn broken_suffix_falls_back_to_default() {
        let n = Notification::parse("Text#bald", 4000);

        assert_eq!(n.text, "Text");
        assert_eq!(n.timeout_ms, 4000);
    }

    #[test]
    fn extra_separators_keep_first_part_and_default_timeout() {
        let n = Notification::parse("a#b#3", 5000);

        assert_eq!(n.text, "a");
        assert_eq!(n.timeout_ms, 5000);
    }

    #[test]
    fn queue_drops_oldest_when_full() {
        let mut queue = NotificationQueue::new();
        for i in 0..40 {
            queue.push(Notification::parse(&format!("n{i}"), 1000));
        }

        assert_eq!(queue.len(), NotificationQueue::MAX_PENDING);
        let drained = queue.drain();
        assert_eq!(drained[0].text, "n8");
        assert!(queue.is_empty());
    }
}
