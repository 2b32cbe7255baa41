//! Handler für Einstellungsänderungen und Benachrichtigungen.

use crate::app::notifications::Notification;
use crate::app::MapScreenState;
use crate::shared::{SettingKey, SettingValue, SettingsListener};

/// Verteilt eine geänderte Einstellung an alle Abonnenten des Schlüssels.
pub fn apply(state: &mut MapScreenState, key: SettingKey, value: &SettingValue) {
    let listeners: [&mut dyn SettingsListener; 2] =
        [&mut state.view.display, &mut state.view.centering];

    let mut delivered = false;
    for listener in listeners {
        if listener.is_subscribed(key) {
            listener.on_changed(key, value);
            delivered = true;
        }
    }

    if !delivered {
        log::debug!("Einstellung {} hat keinen Abonnenten", key.as_str());
    }
}

/// Reiht eine Benachrichtigung ein (`"Text#Sekunden"` erlaubt).
pub fn push_notification(state: &mut MapScreenState, message: &str) {
    let notification = Notification::parse(message, state.options.notification_timeout_ms);
    state.notifications.push(notification);
}
