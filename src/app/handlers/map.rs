//! Handler für Karten-Lebenszyklus, Layer und Tilesets.

use glam::DVec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Envelope;
use crate::surface::MapSurface;

/// Karte geladen: Quellen anlegen und Startansicht setzen.
pub fn initialize(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    initial_envelope: Option<Envelope>,
    initial_marker: Option<DVec2>,
) -> anyhow::Result<()> {
    use_cases::map::initialize(state, surface, initial_envelope, initial_marker)
}

/// Karte entladen.
pub fn release(state: &mut AppState) {
    use_cases::map::release(state);
}

/// Idle-Signal: zurückgestelltes Highlight einmalig auswerten.
pub fn resolve_deferred_highlight(state: &mut AppState, surface: &mut dyn MapSurface) {
    use_cases::identify::resolve_deferred_highlight(state, surface);
}

pub fn show_search_result(state: &mut AppState, surface: &mut dyn MapSurface, position: DVec2) {
    use_cases::view::show_search_result(state, surface, position);
}

pub fn toggle_layer_visibility(surface: &mut dyn MapSurface, layer_id: &str) {
    use_cases::view::toggle_layer_visibility(surface, layer_id);
}

pub fn publish_tileset_invalidation(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    tileset_name: String,
) {
    use_cases::view::publish_tileset_invalidation(state, surface, tileset_name);
}
