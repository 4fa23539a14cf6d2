use serde::{Deserialize, Serialize};

/// Schwere einer Benachrichtigung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

/// Transiente Benachrichtigung für die Toast-UI des Hosts.
///
/// `key` ist ein Übersetzungsschlüssel oder ein Backend-Fehlercode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub key: String,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Noch nicht angezeigte Benachrichtigungen
    pub notifications: Vec<Notification>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, level: NotificationLevel, key: impl Into<String>) {
        let notification = Notification {
            level,
            key: key.into(),
        };
        log::info!("Benachrichtigung: {:?} {}", notification.level, notification.key);
        self.notifications.push(notification);
    }

    /// Entnimmt alle Benachrichtigungen (Host zeigt sie an).
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
