//! Spatial-Index (KD-Tree) über Anker-Punkten gerenderter Features im Screen-Space.

use std::collections::HashMap;

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

/// Read-only Index über Screen-Positionen; Slots entsprechen der Render-Reihenfolge.
///
/// Der KD-Tree hält jede Position nur einmal. Deckungsgleiche Anker (z.B. ein
/// Node-Symbol und alle dort endenden Segmente) teilen sich einen Eintrag,
/// da kiddo-Buckets identische Punkte nicht aufteilen können.
#[derive(Debug, Clone)]
pub struct ScreenIndex {
    tree: KdTree<f64, 2>,
    /// Eindeutige Positionen; Item-ID im Tree = Index hier
    positions: Vec<Vec2>,
    /// Slots pro eindeutiger Position, aufsteigend
    slots: Vec<Vec<usize>>,
    len: usize,
}

impl ScreenIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            positions: Vec::new(),
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Baut einen Index; Slot `i` gehört zu `anchors[i]`.
    pub fn from_anchors(anchors: &[Vec2]) -> Self {
        let mut by_position: HashMap<[u32; 2], usize> = HashMap::new();
        let mut positions: Vec<Vec2> = Vec::new();
        let mut slots: Vec<Vec<usize>> = Vec::new();

        for (slot, anchor) in anchors.iter().enumerate() {
            // -0.0 und 0.0 auf denselben Schlüssel abbilden
            let key = [(anchor.x + 0.0).to_bits(), (anchor.y + 0.0).to_bits()];
            let group = *by_position.entry(key).or_insert_with(|| {
                positions.push(*anchor);
                slots.push(Vec::new());
                positions.len() - 1
            });
            slots[group].push(slot);
        }

        let entries: Vec<[f64; 2]> = positions
            .iter()
            .map(|pos| [pos.x as f64, pos.y as f64])
            .collect();

        Self {
            tree: (&entries).into(),
            positions,
            slots,
            len: anchors.len(),
        }
    }

    /// Gibt die Anzahl indexierter Anker zurück.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Gibt `true` zurück, wenn keine Anker im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Findet alle Slots innerhalb eines axis-aligned Rechtecks, aufsteigend sortiert.
    ///
    /// KD-Tree-Kreisabfrage um das Rechteck + exakte Nachfilterung.
    pub fn within_rect(&self, min: Vec2, max: Vec2) -> Vec<usize> {
        if self.is_empty() {
            return Vec::new();
        }

        let center_x = (min.x + max.x) as f64 * 0.5;
        let center_y = (min.y + max.y) as f64 * 0.5;
        let half_w = (max.x - min.x) as f64 * 0.5;
        let half_h = (max.y - min.y) as f64 * 0.5;
        // Radius des umschließenden Kreises (Diagonale / 2)
        let radius_sq = half_w * half_w + half_h * half_h;

        let mut slots: Vec<usize> = self
            .tree
            .within::<SquaredEuclidean>(&[center_x, center_y], radius_sq)
            .into_iter()
            .filter_map(|entry| {
                let group = entry.item as usize;
                let pos = self.positions.get(group)?;
                if pos.x >= min.x && pos.x <= max.x && pos.y >= min.y && pos.y <= max.y {
                    self.slots.get(group)
                } else {
                    None
                }
            })
            .flatten()
            .copied()
            .collect();

        slots.sort_unstable();
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScreenIndex {
        ScreenIndex::from_anchors(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(4.0, 3.0),
        ])
    }

    #[test]
    fn rect_query_returns_slots_in_render_order() {
        let index = sample();
        assert_eq!(
            index.within_rect(Vec2::new(-1.0, -1.0), Vec2::new(5.0, 3.5)),
            vec![0, 2]
        );
    }

    #[test]
    fn rect_query_excludes_corner_outside_rect() {
        let index = ScreenIndex::from_anchors(&[Vec2::new(4.3, 0.0)]);
        // Im umschließenden Kreis, aber außerhalb des Rechtecks
        assert!(index
            .within_rect(Vec2::new(-5.0, -5.0), Vec2::new(4.0, 4.0))
            .is_empty());
    }

    #[test]
    fn colocated_anchors_keep_render_order() {
        let mut anchors = vec![Vec2::new(100.0, 100.0); 200];
        anchors.insert(50, Vec2::new(300.0, 300.0));
        let index = ScreenIndex::from_anchors(&anchors);

        assert_eq!(index.len(), 201);
        let slots = index.within_rect(Vec2::new(90.0, 90.0), Vec2::new(110.0, 110.0));
        let expected: Vec<usize> = (0..201).filter(|&slot| slot != 50).collect();
        assert_eq!(slots, expected);
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = ScreenIndex::empty();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index
            .within_rect(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0))
            .is_empty());
    }
}
