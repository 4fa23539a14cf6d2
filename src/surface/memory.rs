//! In-Memory-Implementierung des `MapSurface`-Vertrags.
//!
//! Hält gerenderte Features mit Screen-Anker-Punkten in einem KD-Tree,
//! protokolliert Kamera-Fits und Tile-Refreshes und löst Symbol-Icons
//! wie die Render-Engine über die Icon-Regel des Layers auf. Wird vom
//! Headless-Runner, den Integrationstests und den Benchmarks verwendet.

use std::collections::{BTreeMap, HashMap, HashSet};

use glam::{DVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::{Cursor, MapSurface, ScreenRect};
use crate::core::{
    CameraHint, Envelope, FeatureHandle, IconRule, LineGeometry, PaintState, RenderedFeature,
    ScreenIndex, SymbolIcon, TileId,
};

/// Gerendertes Feature mit Anker-Punkt im Screen-Space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFeature {
    #[serde(flatten)]
    pub feature: RenderedFeature,
    /// Screen-Position in Pixeln
    pub anchor: [f32; 2],
}

/// Serialisierbare Ausgangsszene (Features in Render-Reihenfolge, oberstes zuerst).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurfaceScene {
    #[serde(default)]
    pub features: Vec<SceneFeature>,
    /// Geladene Tilesets mit ihren aktuell gehaltenen Kacheln
    #[serde(default)]
    pub tilesets: BTreeMap<String, Vec<TileId>>,
    /// Zusätzliche Layer (z.B. für Sichtbarkeits-Toggle)
    #[serde(default)]
    pub layers: Vec<String>,
    #[serde(default)]
    pub camera: Option<CameraHint>,
}

#[derive(Debug, Clone, Default)]
struct TileCacheState {
    tiles: Vec<TileId>,
    stale: bool,
}

/// Render-Engine-Ersatz ohne GPU.
#[derive(Debug, Clone)]
pub struct InMemorySurface {
    features: Vec<SceneFeature>,
    index: ScreenIndex,
    paint: HashMap<FeatureHandle, PaintState>,
    icon_rules: HashMap<String, IconRule>,
    line_sources: HashMap<String, Vec<LineGeometry>>,
    point_sources: HashMap<String, Option<DVec2>>,
    filter_layers: HashMap<String, Vec<String>>,
    layer_visibility: BTreeMap<String, bool>,
    tile_caches: HashMap<String, TileCacheState>,
    camera: CameraHint,
    cursor: Cursor,
    fit_log: Vec<(Envelope, bool)>,
    refresh_log: Vec<(String, Vec<TileId>)>,
}

impl Default for InMemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySurface {
    /// Erstellt eine leere Surface mit Kamera im Ursprung.
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
            index: ScreenIndex::empty(),
            paint: HashMap::new(),
            icon_rules: HashMap::new(),
            line_sources: HashMap::new(),
            point_sources: HashMap::new(),
            filter_layers: HashMap::new(),
            layer_visibility: BTreeMap::new(),
            tile_caches: HashMap::new(),
            camera: CameraHint {
                latitude: 0.0,
                longitude: 0.0,
                zoom_level: 0.0,
            },
            cursor: Cursor::Default,
            fit_log: Vec::new(),
            refresh_log: Vec::new(),
        }
    }

    /// Baut eine Surface aus einer serialisierten Szene.
    pub fn from_scene(scene: SurfaceScene) -> Self {
        let mut surface = Self::new();
        for (name, tiles) in scene.tilesets {
            surface = surface.with_tileset(&name, tiles);
        }
        for layer in scene.layers {
            surface.layer_visibility.insert(layer, true);
        }
        if let Some(camera) = scene.camera {
            surface.camera = camera;
        }
        surface.set_rendered(scene.features);
        surface
    }

    /// Builder: fügt ein gerendertes Feature unterhalb der bisherigen hinzu.
    pub fn with_feature(mut self, feature: RenderedFeature, anchor: Vec2) -> Self {
        let mut features = std::mem::take(&mut self.features);
        features.push(SceneFeature {
            feature,
            anchor: anchor.to_array(),
        });
        self.set_rendered(features);
        self
    }

    /// Builder: registriert ein geladenes Tileset mit gehaltenen Kacheln.
    pub fn with_tileset(mut self, name: &str, tiles: Vec<TileId>) -> Self {
        self.tile_caches.insert(
            name.to_string(),
            TileCacheState {
                tiles,
                stale: false,
            },
        );
        self.layer_visibility.entry(name.to_string()).or_insert(true);
        self
    }

    /// Ersetzt die gerenderten Features (z.B. nach einem Kamerasprung).
    ///
    /// Paint-Flags bleiben pro Handle erhalten, wie bei der Render-Engine.
    pub fn set_rendered(&mut self, features: Vec<SceneFeature>) {
        let anchors: Vec<Vec2> = features
            .iter()
            .map(|f| Vec2::from_array(f.anchor))
            .collect();
        for scene_feature in &features {
            self.layer_visibility
                .entry(scene_feature.feature.handle.layer_id.clone())
                .or_insert(true);
        }
        self.index = ScreenIndex::from_anchors(&anchors);
        self.features = features;
    }

    /// Alle Features mit Paint-Zustand `Highlighted`.
    pub fn highlighted_features(&self) -> Vec<FeatureHandle> {
        let mut handles: Vec<FeatureHandle> = self
            .paint
            .iter()
            .filter(|(_, state)| **state == PaintState::Highlighted)
            .map(|(handle, _)| handle.clone())
            .collect();
        handles.sort_by(|a, b| (&a.layer_id, a.feature_id).cmp(&(&b.layer_id, b.feature_id)));
        handles
    }

    /// Angezeigtes Icon eines gerenderten Features (None bei Nicht-Symbol-Features).
    pub fn displayed_icon(&self, handle: &FeatureHandle) -> Option<String> {
        let feature = self
            .features
            .iter()
            .find(|f| &f.feature.handle == handle)?;
        let raw = feature.feature.icon.as_deref()?;
        match self.icon_rules.get(&handle.layer_id) {
            Some(rule) if rule.highlighted_feature == Some(handle.feature_id) => {
                Some(rule.resolve(handle.feature_id))
            }
            _ => Some(SymbolIcon::parse(raw).display(PaintState::Normal)),
        }
    }

    /// Alle Features, deren angezeigtes Icon eine Highlight-Variante ist.
    pub fn features_with_highlight_icon(&self) -> Vec<FeatureHandle> {
        self.features
            .iter()
            .filter(|f| {
                self.displayed_icon(&f.feature.handle)
                    .is_some_and(|icon| icon.ends_with(crate::core::HIGHLIGHT_SUFFIX))
            })
            .map(|f| f.feature.handle.clone())
            .collect()
    }

    /// Aktueller Inhalt einer Linien-Quelle.
    pub fn line_source(&self, source_id: &str) -> Option<&[LineGeometry]> {
        self.line_sources.get(source_id).map(Vec::as_slice)
    }

    /// Aktueller Punkt einer Punkt-Quelle.
    pub fn point_source(&self, source_id: &str) -> Option<DVec2> {
        self.point_sources.get(source_id).copied().flatten()
    }

    /// Aktueller `mrid`-Filter eines Filter-Layers.
    pub fn layer_filter(&self, layer_id: &str) -> Option<&[String]> {
        self.filter_layers.get(layer_id).map(Vec::as_slice)
    }

    /// Alle bisherigen `fit_bounds`-Aufrufe (Envelope, animiert).
    pub fn fit_log(&self) -> &[(Envelope, bool)] {
        &self.fit_log
    }

    /// Alle bisherigen Kachel-Neuanforderungen pro Quelle.
    pub fn refresh_log(&self) -> &[(String, Vec<TileId>)] {
        &self.refresh_log
    }

    /// Gibt `true` zurück, wenn der Cache der Quelle als veraltet markiert ist.
    pub fn is_stale(&self, source_id: &str) -> bool {
        self.tile_caches
            .get(source_id)
            .is_some_and(|cache| cache.stale)
    }

    /// Aktueller Mauszeiger.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

impl MapSurface for InMemorySurface {
    fn query_rendered_features(&self, window: Option<ScreenRect>) -> Vec<RenderedFeature> {
        let visible = |f: &SceneFeature| {
            self.layer_visibility
                .get(&f.feature.handle.layer_id)
                .copied()
                .unwrap_or(true)
        };

        match window {
            Some(rect) => self
                .index
                .within_rect(rect.min, rect.max)
                .into_iter()
                .filter_map(|slot| self.features.get(slot))
                .filter(|f| visible(f))
                .map(|f| f.feature.clone())
                .collect(),
            None => self
                .features
                .iter()
                .filter(|f| visible(f))
                .map(|f| f.feature.clone())
                .collect(),
        }
    }

    fn paint_state(&self, handle: &FeatureHandle) -> PaintState {
        self.paint.get(handle).copied().unwrap_or_default()
    }

    fn set_paint_state(&mut self, handle: &FeatureHandle, state: PaintState) {
        match state {
            PaintState::Normal => {
                self.paint.remove(handle);
            }
            PaintState::Highlighted => {
                self.paint.insert(handle.clone(), state);
            }
        }
    }

    fn set_icon_rule(&mut self, layer_id: &str, rule: IconRule) {
        self.icon_rules.insert(layer_id.to_string(), rule);
    }

    fn add_line_source(&mut self, source_id: &str) {
        self.line_sources.entry(source_id.to_string()).or_default();
    }

    fn set_line_source(&mut self, source_id: &str, lines: &[LineGeometry]) {
        if let Some(data) = self.line_sources.get_mut(source_id) {
            *data = lines.to_vec();
        }
    }

    fn add_point_source(&mut self, source_id: &str) {
        self.point_sources.entry(source_id.to_string()).or_default();
    }

    fn set_point_source(&mut self, source_id: &str, point: Option<DVec2>) {
        if let Some(data) = self.point_sources.get_mut(source_id) {
            *data = point;
        }
    }

    fn add_filter_layer(&mut self, layer_id: &str, _source_id: &str) {
        self.filter_layers.entry(layer_id.to_string()).or_default();
        self.layer_visibility.entry(layer_id.to_string()).or_insert(true);
    }

    fn set_layer_filter(&mut self, layer_id: &str, mrids: &[String]) -> anyhow::Result<()> {
        let Some(filter) = self.filter_layers.get_mut(layer_id) else {
            anyhow::bail!("Filter-Layer '{layer_id}' nicht gefunden");
        };
        *filter = mrids.to_vec();
        Ok(())
    }

    fn layer_visible(&self, layer_id: &str) -> Option<bool> {
        self.layer_visibility.get(layer_id).copied()
    }

    fn set_layer_visible(&mut self, layer_id: &str, visible: bool) {
        self.layer_visibility.insert(layer_id.to_string(), visible);
    }

    fn camera(&self) -> CameraHint {
        self.camera
    }

    fn jump_to(&mut self, center: DVec2, zoom: f64) {
        self.camera = CameraHint {
            latitude: center.y,
            longitude: center.x,
            zoom_level: zoom,
        };
    }

    fn fit_bounds(&mut self, envelope: &Envelope, animate: bool) {
        self.camera.longitude = (envelope.min_x + envelope.max_x) * 0.5;
        self.camera.latitude = (envelope.min_y + envelope.max_y) * 0.5;
        self.fit_log.push((*envelope, animate));
    }

    fn tracked_tiles(&self, source_id: &str) -> Option<Vec<TileId>> {
        self.tile_caches
            .get(source_id)
            .map(|cache| cache.tiles.clone())
    }

    fn reload_source(&mut self, source_id: &str) {
        if let Some(cache) = self.tile_caches.get_mut(source_id) {
            cache.stale = true;
        }
    }

    fn refresh_tiles(&mut self, source_id: &str, tiles: &[TileId]) {
        let Some(cache) = self.tile_caches.get_mut(source_id) else {
            return;
        };
        let requested: HashSet<TileId> = tiles.iter().copied().collect();
        if cache.tiles.iter().all(|tile| requested.contains(tile)) {
            cache.stale = false;
        }
        self.refresh_log.push((source_id.to_string(), tiles.to_vec()));
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(layer: &str, id: u64, object_type: &str, mrid: &str) -> RenderedFeature {
        RenderedFeature {
            handle: FeatureHandle {
                layer_id: layer.into(),
                feature_id: id,
            },
            object_type: object_type.into(),
            mrid: mrid.into(),
            icon: None,
        }
    }

    #[test]
    fn window_query_keeps_render_order() {
        let surface = InMemorySurface::new()
            .with_feature(feature("segments", 1, "route_segment", "S1"), Vec2::new(10.0, 10.0))
            .with_feature(feature("nodes", 2, "route_node", "N1"), Vec2::new(12.0, 10.0))
            .with_feature(feature("nodes", 3, "route_node", "N2"), Vec2::new(200.0, 10.0));

        let hits = surface.query_rendered_features(Some(ScreenRect::around(Vec2::new(11.0, 10.0), 5.0)));
        let mrids: Vec<&str> = hits.iter().map(|f| f.mrid.as_str()).collect();
        assert_eq!(mrids, vec!["S1", "N1"]);
    }

    #[test]
    fn features_sharing_one_anchor_are_all_hit_in_render_order() {
        let mut surface = InMemorySurface::new();
        for id in 0..80 {
            surface = surface.with_feature(
                feature("segments", id, "route_segment", &format!("S{id}")),
                Vec2::new(100.0, 100.0),
            );
        }

        let hits = surface.query_rendered_features(Some(ScreenRect::around(Vec2::new(100.0, 100.0), 10.0)));
        let ids: Vec<u64> = hits.iter().map(|f| f.handle.feature_id).collect();
        assert_eq!(ids, (0..80).collect::<Vec<u64>>());
    }

    #[test]
    fn hidden_layers_are_not_hit() {
        let mut surface = InMemorySurface::new()
            .with_feature(feature("segments", 1, "route_segment", "S1"), Vec2::new(10.0, 10.0));
        surface.set_layer_visible("segments", false);
        assert!(surface.query_rendered_features(None).is_empty());
    }

    #[test]
    fn reload_marks_stale_until_all_tiles_refreshed() {
        let tiles = vec![TileId::new(14, 1, 1), TileId::new(14, 1, 2)];
        let mut surface = InMemorySurface::new().with_tileset("route_network", tiles.clone());
        surface.reload_source("route_network");
        assert!(surface.is_stale("route_network"));
        surface.refresh_tiles("route_network", &tiles);
        assert!(!surface.is_stale("route_network"));
        assert_eq!(surface.refresh_log().len(), 1);
    }

    #[test]
    fn unknown_filter_layer_is_an_error() {
        let mut surface = InMemorySurface::new();
        assert!(surface.set_layer_filter("route_segment_selection", &[]).is_err());
    }

    #[test]
    fn scene_deserializes_with_flattened_features() {
        let json = r#"{
            "features": [
                {"handle": {"layer_id": "nodes", "feature_id": 4}, "object_type": "route_node",
                 "mrid": "N4", "icon": "cabinet", "anchor": [1.0, 2.0]}
            ],
            "tilesets": {"route_network": [{"z": 15, "x": 1, "y": 2}]}
        }"#;
        let scene: SurfaceScene = serde_json::from_str(json).unwrap();
        let surface = InMemorySurface::from_scene(scene);
        assert_eq!(surface.query_rendered_features(None).len(), 1);
        assert_eq!(surface.tracked_tiles("route_network").unwrap().len(), 1);
    }
}
