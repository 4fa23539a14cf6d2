//! Zweistufiger Paint-Zustand pro Feature und die Icon-Auflösung für Symbol-Layer.

/// Suffix der hervorgehobenen Icon-Variante im Sprite.
pub const HIGHLIGHT_SUFFIX: &str = "-highlight";

/// Paint-Zustand eines gerenderten Features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaintState {
    /// Standard-Darstellung
    #[default]
    Normal,
    /// Als identifiziert hervorgehoben
    Highlighted,
}

/// Basis-Icon eines Symbol-Layers, normalisiert ohne Highlight-Suffix.
///
/// Der Layer kann aus einem früheren Durchlauf bereits die Highlight-Variante
/// liefern; `parse` entfernt jedes Suffix, damit wiederholtes Umschalten nie
/// ein `-highlight-highlight` erzeugt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolIcon {
    base: String,
}

impl SymbolIcon {
    /// Normalisiert einen rohen Icon-Bezeichner.
    pub fn parse(raw: &str) -> Self {
        let mut base = raw;
        while let Some(stripped) = base.strip_suffix(HIGHLIGHT_SUFFIX) {
            base = stripped;
        }
        Self {
            base: base.to_string(),
        }
    }

    /// Basis-Bezeichner ohne Suffix.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Reine Abbildung Paint-Zustand → angezeigter Icon-Bezeichner.
    pub fn display(&self, state: PaintState) -> String {
        match state {
            PaintState::Normal => self.base.clone(),
            PaintState::Highlighted => format!("{}{}", self.base, HIGHLIGHT_SUFFIX),
        }
    }
}

/// Icon-Ausdruck eines Symbol-Layers: höchstens ein Feature zeigt die Highlight-Variante.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRule {
    /// Basis-Icon des Layers
    pub icon: SymbolIcon,
    /// Feature-ID mit Highlight-Variante (None = keins)
    pub highlighted_feature: Option<u64>,
}

impl IconRule {
    /// Regel ohne hervorgehobenes Feature.
    pub fn plain(icon: SymbolIcon) -> Self {
        Self {
            icon,
            highlighted_feature: None,
        }
    }

    /// Regel, die genau `feature_id` hervorhebt.
    pub fn highlighting(icon: SymbolIcon, feature_id: u64) -> Self {
        Self {
            icon,
            highlighted_feature: Some(feature_id),
        }
    }

    /// Löst das angezeigte Icon für ein Feature des Layers auf.
    pub fn resolve(&self, feature_id: u64) -> String {
        let state = if self.highlighted_feature == Some(feature_id) {
            PaintState::Highlighted
        } else {
            PaintState::Normal
        };
        self.icon.display(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_repeated_suffixes() {
        let icon = SymbolIcon::parse("cabinet-highlight-highlight");
        assert_eq!(icon.base(), "cabinet");
        assert_eq!(icon.display(PaintState::Highlighted), "cabinet-highlight");
    }

    #[test]
    fn display_is_stable_for_repeated_highlight() {
        let once = SymbolIcon::parse("manhole").display(PaintState::Highlighted);
        let twice = SymbolIcon::parse(&once).display(PaintState::Highlighted);
        assert_eq!(once, twice);
    }

    #[test]
    fn rule_highlights_only_its_feature() {
        let rule = IconRule::highlighting(SymbolIcon::parse("handhole"), 7);
        assert_eq!(rule.resolve(7), "handhole-highlight");
        assert_eq!(rule.resolve(8), "handhole");
        assert_eq!(IconRule::plain(SymbolIcon::parse("handhole")).resolve(7), "handhole");
    }
}
