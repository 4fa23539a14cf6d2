//! Use-Case: Lebenszyklus der Karte.

use glam::DVec2;

use crate::app::state::SurfaceBindings;
use crate::app::AppState;
use crate::bridge::refresh_tileset;
use crate::core::Envelope;
use crate::surface::MapSurface;

use super::{selection, trace};

/// Legt Quellen und Layer an, meldet den Tileset-Handler an und setzt die Startansicht.
pub fn initialize(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    initial_envelope: Option<Envelope>,
    initial_marker: Option<DVec2>,
) -> anyhow::Result<()> {
    let bindings = SurfaceBindings::from_options(&state.options);
    surface.add_line_source(&bindings.trace_source);
    surface.add_filter_layer(&bindings.selection_layer, &bindings.network_source);
    surface.add_point_source(&bindings.search_marker_source);
    surface.add_point_source(&bindings.initial_marker_source);
    state.view.bindings = bindings;

    if state.view.tileset_subscription.is_none() {
        let token = state.tileset_bus.subscribe(refresh_tileset);
        state.view.tileset_subscription = Some(token);
    }

    if let Some(envelope) = initial_envelope.filter(Envelope::is_valid) {
        surface.fit_bounds(&envelope, false);
    }
    if let Some(marker) = initial_marker {
        surface.set_point_source(&state.view.bindings.initial_marker_source, Some(marker));
    }

    state.view.map_loaded = true;
    selection::apply_filter(state, surface)?;
    trace::show_current(state, surface);

    log::info!("Karte geladen, Quelle '{}'", state.view.bindings.network_source);
    Ok(())
}

/// Meldet den Tileset-Handler ab und vergisst den Surface-Zustand.
pub fn release(state: &mut AppState) {
    if let Some(token) = state.view.tileset_subscription.take() {
        state.tileset_bus.unsubscribe(token);
    }
    state.highlight.forget();
    state.view.map_loaded = false;
    state.view.hover_hit = false;
    state.view.cursor = Default::default();
    log::info!("Karte entladen");
}
