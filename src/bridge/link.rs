//! Verbindungszustand zur Desktop-Bridge.
//!
//! Den Socket besitzt der Host. Der Kern sieht nur, ob die Bridge verbunden
//! ist, und legt ausgehende Nachrichten in eine Queue, die der Host leert.

use super::BridgeMessage;

/// Ausgangsseite der Desktop-Bridge.
#[derive(Debug, Default)]
pub struct BridgeLink {
    connected: bool,
    outbound: Vec<BridgeMessage>,
}

impl BridgeLink {
    /// Erstellt einen getrennten Link ohne ausstehende Nachrichten.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn der Host eine offene Verbindung gemeldet hat.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Setzt den Verbindungszustand. Beim Trennen wird die Queue verworfen.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
        if !connected && !self.outbound.is_empty() {
            log::debug!(
                "Bridge getrennt, {} ausstehende Nachricht(en) verworfen",
                self.outbound.len()
            );
            self.outbound.clear();
        }
    }

    /// Stellt eine Nachricht zum Versand ein.
    ///
    /// Ohne Verbindung wird die Nachricht verworfen (nur lokaler Betrieb).
    pub fn send(&mut self, message: BridgeMessage) {
        if !self.connected {
            log::debug!(
                "Bridge nicht verbunden, '{}' wird nicht gesendet",
                message.event_type()
            );
            return;
        }
        self.outbound.push(message);
    }

    /// Ausstehende Nachrichten (read-only).
    pub fn pending(&self) -> &[BridgeMessage] {
        &self.outbound
    }

    /// Entnimmt alle ausstehenden Nachrichten in Sende-Reihenfolge.
    pub fn drain(&mut self) -> Vec<BridgeMessage> {
        std::mem::take(&mut self.outbound)
    }
}
