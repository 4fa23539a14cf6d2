//! Use-Case: Sammel-Selektion von Route-Segmenten.

use glam::Vec2;

use crate::app::AppState;
use crate::core::FeatureKind;
use crate::surface::MapSurface;

use super::bridge;
use super::hit_test::pick_network_feature;

/// Klick im Sammel-Modus: getroffenes Segment anhängen.
///
/// Route-Nodes werden ignoriert; ein bereits selektiertes Segment bleibt an seiner Stelle.
pub fn append_hit(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    screen_pos: Vec2,
) -> anyhow::Result<()> {
    if state.mode.is_blocking() {
        return Ok(());
    }
    let Some(hit) = pick_network_feature(surface, screen_pos, &state.options)? else {
        return Ok(());
    };
    if hit.kind != FeatureKind::Segment {
        log::debug!("Sammel-Selektion ignoriert Route-Node '{}'", hit.feature.mrid);
        return Ok(());
    }

    if state.selection.append(&hit.feature.mrid) {
        selection_changed(state, surface, true);
    }
    Ok(())
}

/// Ersetzt die Selektion vollständig.
pub fn replace(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    ids: Vec<String>,
    publish: bool,
) -> anyhow::Result<()> {
    if state.selection.replace(ids) {
        selection_changed(state, surface, publish);
    }
    Ok(())
}

pub fn remove(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    segment_id: &str,
) -> anyhow::Result<()> {
    if state.selection.remove(segment_id) {
        selection_changed(state, surface, true);
    }
    Ok(())
}

pub fn clear(state: &mut AppState, surface: &mut dyn MapSurface) -> anyhow::Result<()> {
    if state.selection.clear() {
        selection_changed(state, surface, true);
    }
    Ok(())
}

/// Überträgt die Selektion auf den Filter-Layer.
pub fn apply_filter(state: &AppState, surface: &mut dyn MapSurface) -> anyhow::Result<()> {
    if !state.view.map_loaded {
        return Ok(());
    }
    surface.set_layer_filter(&state.view.bindings.selection_layer, &state.selection.to_vec())
}

fn selection_changed(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    publish: bool,
) {
    log::debug!("Sammel-Selektion: {} Segmente", state.selection.len());
    if let Err(e) = apply_filter(state, surface) {
        log::warn!("Selektions-Filter nicht aktualisiert: {:#}", e);
    }
    if publish {
        bridge::publish_selection(state);
    }
}
