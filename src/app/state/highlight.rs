//! Highlight-Registry: höchstens ein hervorgehobenes Feature.

use crate::core::{FeatureHandle, IconRule, PaintState, RenderedFeature, SymbolIcon};
use crate::surface::MapSurface;

#[derive(Debug, Clone, PartialEq)]
struct HighlightedFeature {
    handle: FeatureHandle,
    /// Normalisiertes Icon bei Symbol-Layern
    icon: Option<SymbolIcon>,
}

/// Verfolgt das eine Feature mit Highlight-Zustand auf der Surface.
#[derive(Debug, Clone, Default)]
pub struct HighlightRegistry {
    current: Option<HighlightedFeature>,
}

impl HighlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt `feature` hervor und setzt ein zuvor hervorgehobenes Feature zurück.
    ///
    /// Wiederholter Aufruf mit demselben Feature ändert nichts am Icon.
    pub fn highlight(&mut self, surface: &mut dyn MapSurface, feature: &RenderedFeature) {
        let icon = feature.icon.as_deref().map(SymbolIcon::parse);

        if self
            .current
            .as_ref()
            .is_some_and(|c| c.handle == feature.handle)
        {
            if surface.paint_state(&feature.handle) != PaintState::Highlighted {
                surface.set_paint_state(&feature.handle, PaintState::Highlighted);
            }
            return;
        }

        self.restore(surface);

        surface.set_paint_state(&feature.handle, PaintState::Highlighted);
        if let Some(icon) = &icon {
            surface.set_icon_rule(
                &feature.handle.layer_id,
                IconRule::highlighting(icon.clone(), feature.handle.feature_id),
            );
        }
        self.current = Some(HighlightedFeature {
            handle: feature.handle.clone(),
            icon,
        });
    }

    /// Setzt das hervorgehobene Feature auf den Normalzustand zurück.
    pub fn clear(&mut self, surface: &mut dyn MapSurface) {
        self.restore(surface);
    }

    /// Vergisst das Feature, ohne die Surface anzufassen (Karte entladen).
    pub fn forget(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&FeatureHandle> {
        self.current.as_ref().map(|c| &c.handle)
    }

    pub fn is_highlighted(&self, handle: &FeatureHandle) -> bool {
        self.current().is_some_and(|h| h == handle)
    }

    fn restore(&mut self, surface: &mut dyn MapSurface) {
        let Some(previous) = self.current.take() else {
            return;
        };
        surface.set_paint_state(&previous.handle, PaintState::Normal);
        if let Some(icon) = previous.icon {
            surface.set_icon_rule(&previous.handle.layer_id, IconRule::plain(icon));
        }
    }
}
