//! Map-Surface-Adapter: Vertrag zur Render-Engine.
//!
//! Die Render-Engine selbst (Kacheln, Paint-Regeln, Projektion) ist extern.
//! Der Kern sieht sie nur über `MapSurface`: Hit-Test im Screen-Space,
//! transiente Paint-Flags pro Feature, Quelldaten-Ersatz, Kamera und
//! Tile-Cache-Refresh. Das Handle wird nie global gehalten, sondern jedem
//! Aufruf als `&mut dyn MapSurface` mitgegeben.

pub mod memory;

pub use memory::{InMemorySurface, SceneFeature, SurfaceScene};

use crate::core::{
    CameraHint, Envelope, FeatureHandle, IconRule, LineGeometry, PaintState, RenderedFeature,
    TileId,
};
use glam::{DVec2, Vec2};

/// Achsen-aligniertes Fenster im Screen-Space (Pixel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ScreenRect {
    /// Quadratisches Fenster um einen Punkt (`half_extent` Pixel in jede Richtung).
    pub fn around(point: Vec2, half_extent: f32) -> Self {
        let half = Vec2::splat(half_extent.max(0.0));
        Self {
            min: point - half,
            max: point + half,
        }
    }

    /// Gibt `true` zurück, wenn der Punkt im Fenster liegt (Ränder inklusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Mauszeiger über der Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Netzwerk-Feature unter dem Zeiger
    Pointer,
    /// Backend-Anfrage läuft
    Progress,
}

/// Schnittstelle zur Render-Engine.
pub trait MapSurface {
    /// Hit-Test: gerenderte Features im Fenster (`None` = ganzer Viewport), oberstes zuerst.
    fn query_rendered_features(&self, window: Option<ScreenRect>) -> Vec<RenderedFeature>;

    /// Aktueller transienter Paint-Zustand eines Features.
    fn paint_state(&self, handle: &FeatureHandle) -> PaintState;

    /// Setzt den transienten Paint-Zustand eines Features.
    fn set_paint_state(&mut self, handle: &FeatureHandle, state: PaintState);

    /// Ersetzt den Icon-Ausdruck eines Symbol-Layers.
    fn set_icon_rule(&mut self, layer_id: &str, rule: IconRule);

    /// Legt eine leere Linien-Quelle an (idempotent).
    fn add_line_source(&mut self, source_id: &str);

    /// Ersetzt die Daten einer Linien-Quelle. Unbekannte Quellen werden ignoriert.
    fn set_line_source(&mut self, source_id: &str, lines: &[LineGeometry]);

    /// Legt eine leere Punkt-Quelle an (idempotent).
    fn add_point_source(&mut self, source_id: &str);

    /// Setzt oder entfernt den Punkt einer Punkt-Quelle.
    fn set_point_source(&mut self, source_id: &str, point: Option<DVec2>);

    /// Legt einen Filter-Layer über einer Vektor-Quelle an (idempotent).
    fn add_filter_layer(&mut self, layer_id: &str, source_id: &str);

    /// Setzt den `mrid`-Filter eines Filter-Layers.
    fn set_layer_filter(&mut self, layer_id: &str, mrids: &[String]) -> anyhow::Result<()>;

    /// Sichtbarkeit eines Layers (`None` = Layer unbekannt).
    fn layer_visible(&self, layer_id: &str) -> Option<bool>;

    /// Setzt die Sichtbarkeit eines Layers.
    fn set_layer_visible(&mut self, layer_id: &str, visible: bool);

    /// Aktuelles Kamerazentrum und Zoom.
    fn camera(&self) -> CameraHint;

    /// Springt ohne Animation auf Zentrum (lon, lat) und Zoom.
    fn jump_to(&mut self, center: DVec2, zoom: f64);

    /// Passt die Kamera an eine Envelope an.
    fn fit_bounds(&mut self, envelope: &Envelope, animate: bool);

    /// Kacheln, die der Cache einer Quelle gerade hält (`None` = Quelle nicht geladen).
    fn tracked_tiles(&self, source_id: &str) -> Option<Vec<TileId>>;

    /// Markiert den gesamten Cache einer Quelle als veraltet.
    fn reload_source(&mut self, source_id: &str);

    /// Fordert die angegebenen Kacheln einer Quelle neu an.
    fn refresh_tiles(&mut self, source_id: &str, tiles: &[TileId]);

    /// Setzt den Mauszeiger.
    fn set_cursor(&mut self, cursor: Cursor);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_around_point_includes_edges() {
        let rect = ScreenRect::around(Vec2::new(50.0, 50.0), 10.0);
        assert!(rect.contains(Vec2::new(40.0, 60.0)));
        assert!(!rect.contains(Vec2::new(39.9, 50.0)));
    }

    #[test]
    fn negative_extent_collapses_to_point() {
        let rect = ScreenRect::around(Vec2::new(5.0, 5.0), -3.0);
        assert_eq!(rect.min, rect.max);
    }
}
