//! Interaktionsmodus: exklusives Werkzeug über der Karte.

use serde::{Deserialize, Serialize};

/// Aktives Werkzeug. Genau eines ist aktiv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Klick identifiziert, Hover zeigt Pointer
    #[default]
    Normal,
    /// Distanzmessung, braucht Klicks exklusiv
    Measuring,
    /// Info-Inspektion, braucht Klicks exklusiv
    Inspecting,
    /// Klicks sammeln Segmente in die Sammel-Selektion
    BulkSelecting,
}

impl InteractionMode {
    /// Gibt `true` zurück, wenn der Modus Hit-Tests für Identifikation/Selektion sperrt.
    pub fn blocks_pointer(self) -> bool {
        matches!(self, Self::Measuring | Self::Inspecting)
    }
}

/// Hält den aktiven Modus. Ein neuer Modus beendet den vorherigen.
#[derive(Debug, Clone, Default)]
pub struct ModeGate {
    mode: InteractionMode,
}

impl ModeGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktiviert `mode` und liefert den vorherigen Modus.
    pub fn set_mode(&mut self, mode: InteractionMode) -> InteractionMode {
        std::mem::replace(&mut self.mode, mode)
    }

    /// Zielmodus eines Toggles: ein bereits aktiver Modus führt zurück zu `Normal`.
    pub fn toggle_target(&self, mode: InteractionMode) -> InteractionMode {
        if self.mode == mode {
            InteractionMode::Normal
        } else {
            mode
        }
    }

    pub fn current_mode(&self) -> InteractionMode {
        self.mode
    }

    /// Gibt `true` zurück, solange ein Werkzeug die Klicks exklusiv beansprucht.
    pub fn is_blocking(&self) -> bool {
        self.mode.blocks_pointer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measuring_replaces_bulk_selecting() {
        let mut gate = ModeGate::new();
        gate.set_mode(InteractionMode::BulkSelecting);
        assert!(!gate.is_blocking());

        let previous = gate.set_mode(InteractionMode::Measuring);

        assert_eq!(previous, InteractionMode::BulkSelecting);
        assert_eq!(gate.current_mode(), InteractionMode::Measuring);
        assert!(gate.is_blocking());
    }

    #[test]
    fn toggling_active_mode_returns_to_normal() {
        let mut gate = ModeGate::new();
        gate.set_mode(InteractionMode::Inspecting);
        assert_eq!(
            gate.toggle_target(InteractionMode::Inspecting),
            InteractionMode::Normal
        );
        assert_eq!(
            gate.toggle_target(InteractionMode::Measuring),
            InteractionMode::Measuring
        );
    }
}
