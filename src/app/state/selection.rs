//! Sammel-Selektion: geordnete Menge von Segment-IDs.

use indexmap::IndexSet;

/// Menge ohne Duplikate, Einfüge-Reihenfolge bleibt erhalten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    ids: IndexSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt `id` an. Eine bereits enthaltene ID bleibt an ihrer Stelle.
    pub fn append(&mut self, id: &str) -> bool {
        if self.ids.contains(id) {
            return false;
        }
        self.ids.insert(id.to_string())
    }

    /// Entfernt `id`, die Reihenfolge der übrigen bleibt erhalten.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.shift_remove(id)
    }

    /// Ersetzt die Selektion vollständig. Gibt `true` zurück, wenn sich etwas geändert hat.
    pub fn replace<I, S>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next: IndexSet<String> = ids.into_iter().map(Into::into).collect();
        if next.iter().eq(self.ids.iter()) {
            return false;
        }
        self.ids = next;
        true
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.ids.is_empty();
        self.ids.clear();
        changed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// IDs in Einfüge-Reihenfolge.
    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_append_is_ignored() {
        let mut selection = SelectionSet::new();
        assert!(selection.append("S2"));
        assert!(selection.append("S3"));
        assert!(!selection.append("S2"));
        assert_eq!(selection.to_vec(), vec!["S2", "S3"]);
    }

    #[test]
    fn remove_keeps_order_of_remaining() {
        let mut selection = SelectionSet::new();
        for id in ["A", "B", "C"] {
            selection.append(id);
        }
        assert!(selection.remove("B"));
        assert_eq!(selection.to_vec(), vec!["A", "C"]);
    }

    #[test]
    fn replace_collapses_duplicates_and_reports_change() {
        let mut selection = SelectionSet::new();
        assert!(selection.replace(["X", "Y", "X"]));
        assert_eq!(selection.to_vec(), vec!["X", "Y"]);
        assert!(!selection.replace(vec!["X".to_string(), "Y".to_string()]));
        assert!(selection.clear());
        assert!(!selection.clear());
    }
}
