//! Identifikations-Zustand: das eine Feature unter Inspektion.

use crate::core::{CameraHint, IdentifiedFeature};
use indexmap::IndexMap;

/// `Idle` (kein Feature) oder `Identified(feature)`.
///
/// Merkt sich zusätzlich Kamera-Hinweise pro Feature-ID (begrenzt,
/// in Einfüge-Reihenfolge) und ein verzögertes Highlight, das auf das
/// nächste Idle-Signal der Surface wartet.
#[derive(Debug, Clone)]
pub struct IdentificationState {
    current: Option<IdentifiedFeature>,
    hints: IndexMap<String, CameraHint>,
    hint_capacity: usize,
    deferred_highlight: Option<String>,
}

impl Default for IdentificationState {
    fn default() -> Self {
        Self::with_hint_capacity(crate::shared::options::HINT_MEMORY_CAPACITY)
    }
}

impl IdentificationState {
    pub fn with_hint_capacity(hint_capacity: usize) -> Self {
        Self {
            current: None,
            hints: IndexMap::new(),
            hint_capacity,
            deferred_highlight: None,
        }
    }

    /// Ersetzt das identifizierte Feature vollständig und liefert das vorherige.
    pub fn replace(&mut self, feature: IdentifiedFeature) -> Option<IdentifiedFeature> {
        if let Some(hint) = feature.camera_hint {
            self.remember_hint(&feature.id, hint);
        }
        if self
            .deferred_highlight
            .as_deref()
            .is_some_and(|id| id != feature.id)
        {
            self.deferred_highlight = None;
        }
        self.current.replace(feature)
    }

    /// Zurück nach `Idle`. Ein wartendes Highlight verfällt.
    pub fn clear(&mut self) -> Option<IdentifiedFeature> {
        self.deferred_highlight = None;
        self.current.take()
    }

    pub fn current(&self) -> Option<&IdentifiedFeature> {
        self.current.as_ref()
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_ref().map(|f| f.id.as_str())
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Merkt sich den Kamera-Hinweis; der älteste Eintrag fällt bei voller Kapazität heraus.
    pub fn remember_hint(&mut self, id: &str, hint: CameraHint) {
        if self.hint_capacity == 0 {
            return;
        }
        self.hints.shift_remove(id);
        self.hints.insert(id.to_string(), hint);
        while self.hints.len() > self.hint_capacity {
            self.hints.shift_remove_index(0);
        }
    }

    pub fn hint_for(&self, id: &str) -> Option<CameraHint> {
        self.hints.get(id).copied()
    }

    /// Ändert die Kapazität (Optionen); überzählige alte Hinweise fallen heraus.
    pub fn set_hint_capacity(&mut self, capacity: usize) {
        self.hint_capacity = capacity;
        while self.hints.len() > capacity {
            self.hints.shift_remove_index(0);
        }
    }

    /// Highlight für `id` bis zum nächsten Idle-Signal zurückstellen.
    pub fn defer_highlight(&mut self, id: &str) {
        self.deferred_highlight = Some(id.to_string());
    }

    pub fn cancel_deferred_highlight(&mut self) {
        self.deferred_highlight = None;
    }

    pub fn has_deferred_highlight(&self) -> bool {
        self.deferred_highlight.is_some()
    }

    /// Entnimmt das wartende Highlight (einmalig).
    pub fn take_deferred_highlight(&mut self) -> Option<String> {
        self.deferred_highlight.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeatureKind;

    fn hint(zoom: f64) -> CameraHint {
        CameraHint {
            latitude: 55.7,
            longitude: 9.5,
            zoom_level: zoom,
        }
    }

    #[test]
    fn replace_supersedes_previous_feature() {
        let mut state = IdentificationState::default();
        state.replace(IdentifiedFeature::new("S1", FeatureKind::Segment));
        let previous = state.replace(IdentifiedFeature::new("N1", FeatureKind::Node));

        assert_eq!(previous.map(|f| f.id), Some("S1".to_string()));
        assert_eq!(state.current_id(), Some("N1"));
    }

    #[test]
    fn hints_are_bounded_oldest_first() {
        let mut state = IdentificationState::with_hint_capacity(2);
        state.remember_hint("A", hint(1.0));
        state.remember_hint("B", hint(2.0));
        state.remember_hint("A", hint(3.0));
        state.remember_hint("C", hint(4.0));

        assert!(state.hint_for("B").is_none());
        assert_eq!(state.hint_for("A").map(|h| h.zoom_level), Some(3.0));
        assert!(state.hint_for("C").is_some());
    }

    #[test]
    fn new_identity_drops_foreign_deferred_highlight() {
        let mut state = IdentificationState::default();
        state.replace(IdentifiedFeature::new("S1", FeatureKind::Segment));
        state.defer_highlight("S1");
        state.replace(IdentifiedFeature::new("S1", FeatureKind::Segment));
        assert!(state.has_deferred_highlight());

        state.replace(IdentifiedFeature::new("S2", FeatureKind::Segment));
        assert!(!state.has_deferred_highlight());
    }

    #[test]
    fn clear_returns_to_idle() {
        let mut state = IdentificationState::default();
        state.replace(IdentifiedFeature::new("S1", FeatureKind::Segment).with_camera_hint(hint(15.0)));
        state.defer_highlight("S1");
        state.clear();
        assert!(state.is_idle());
        assert!(state.take_deferred_highlight().is_none());
        assert!(state.hint_for("S1").is_some());
    }
}
