//! Übergabe von Intents aus fremden Threads an den besitzenden Thread.
//!
//! Sensor-Callbacks dürfen auf einem Hintergrund-Thread laufen; sie senden
//! nur Intents. Der Zustand wird ausschließlich beim Abarbeiten der Inbox
//! auf dem besitzenden Thread verändert, in Eingangsreihenfolge.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::{MapIntent, MapScreenController, MapScreenState};

/// Klonbarer Sender für Intents.
#[derive(Clone)]
pub struct IntentSender {
    tx: Sender<MapIntent>,
}

impl IntentSender {
    /// Sendet einen Intent. Gibt `false` zurück, wenn die Inbox bereits
    /// verworfen wurde.
    pub fn send(&self, intent: MapIntent) -> bool {
        match self.tx.send(intent) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Intent verworfen, Inbox geschlossen: {:?}", e.0);
                false
            }
        }
    }
}

/// Empfangsseite, gehört dem Thread, der auch den Zustand besitzt.
pub struct IntentInbox {
    rx: Receiver<MapIntent>,
    tx: Sender<MapIntent>,
}

impl IntentInbox {
    /// Erstellt eine leere Inbox.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { rx, tx }
    }

    /// Liefert einen neuen Sender.
    pub fn sender(&self) -> IntentSender {
        IntentSender {
            tx: self.tx.clone(),
        }
    }

    /// Arbeitet alle wartenden Intents in Eingangsreihenfolge ab.
    ///
    /// Blockiert nicht. Gibt die Anzahl verarbeiteter Intents zurück.
    pub fn drain_into(
        &self,
        controller: &mut MapScreenController,
        state: &mut MapScreenState,
    ) -> anyhow::Result<usize> {
        let mut processed = 0;
        loop {
            match self.rx.try_recv() {
                Ok(intent) => {
                    controller.handle_intent(state, intent)?;
                    processed += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if processed > 0 {
            log::trace!("Inbox: {} Intents verarbeitet", processed);
        }
        Ok(processed)
    }
}

impl Default for IntentInbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_from_background_thread_keep_order() {
        let inbox = IntentInbox::new();
        let sender = inbox.sender();

        let handle = std::thread::spawn(move || {
            for azimuth in [10.0, 5.0, 358.0, 352.0] {
                sender.send(MapIntent::HeadingSampled { azimuth });
            }
        });
        handle.join().unwrap();

        let mut controller = MapScreenController::new();
        let mut state = MapScreenState::new();
        let processed = inbox.drain_into(&mut controller, &mut state).unwrap();

        assert_eq!(processed, 4);
        approx::assert_relative_eq!(state.view.rotation_deg, 8.0);
    }

    #[test]
    fn empty_inbox_processes_nothing() {
        let inbox = IntentInbox::new();
        let mut controller = MapScreenController::new();
        let mut state = MapScreenState::new();

        assert_eq!(inbox.drain_into(&mut controller, &mut state).unwrap(), 0);
    }
}
