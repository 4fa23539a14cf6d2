//! Use-Case: Zeiger, Suchmarker und Layer-Sichtbarkeit.

use glam::{DVec2, Vec2};

use crate::app::AppState;
use crate::bridge::TilesetInvalidation;
use crate::surface::{Cursor, MapSurface};

use super::hit_test::pick_network_feature;

/// Hover: merkt sich, ob ein identifizierbares Feature unter dem Zeiger liegt.
pub fn update_hover(
    state: &mut AppState,
    surface: &dyn MapSurface,
    screen_pos: Vec2,
) -> anyhow::Result<()> {
    state.view.hover_hit = if state.mode.is_blocking() {
        false
    } else {
        pick_network_feature(surface, screen_pos, &state.options)?.is_some()
    };
    Ok(())
}

/// Setzt den Mauszeiger passend zum Zustand; schreibt nur bei Änderung.
pub fn sync_cursor(state: &mut AppState, surface: &mut dyn MapSurface) {
    if !state.view.map_loaded {
        return;
    }
    let desired = if state.is_busy() {
        Cursor::Progress
    } else if state.view.hover_hit {
        Cursor::Pointer
    } else {
        Cursor::Default
    };
    if desired != state.view.cursor {
        surface.set_cursor(desired);
        state.view.cursor = desired;
    }
}

/// Setzt den Suchmarker und springt auf das Suchergebnis.
pub fn show_search_result(state: &mut AppState, surface: &mut dyn MapSurface, position: DVec2) {
    surface.set_point_source(&state.view.bindings.search_marker_source, Some(position));
    surface.jump_to(position, state.options.search_zoom_level);
    state.view.search_marker = Some(position);
}

/// Schaltet die Sichtbarkeit eines Layers um.
pub fn toggle_layer_visibility(surface: &mut dyn MapSurface, layer_id: &str) {
    match surface.layer_visible(layer_id) {
        Some(visible) => {
            surface.set_layer_visible(layer_id, !visible);
            log::debug!("Layer '{}' sichtbar: {}", layer_id, !visible);
        }
        None => log::warn!("Layer '{}' nicht gefunden", layer_id),
    }
}

/// Verteilt eine Tileset-Invalidierung an alle angemeldeten Handler.
pub fn publish_tileset_invalidation(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    tileset_name: String,
) {
    let event = TilesetInvalidation::new(tileset_name);
    let invoked = state.tileset_bus.publish(surface, &event);
    if invoked == 0 {
        log::warn!(
            "Tileset '{}' kann nicht aktualisiert werden: keine Karte angemeldet",
            event.tileset_name
        );
    }
}
