//! Use-Case: Wechsel des Interaktionsmodus.

use crate::app::{AppState, InteractionMode};
use crate::surface::MapSurface;

use super::trace;

/// Aktiviert `mode`. Sperrende Modi leeren den Trace, die Rückkehr fordert ihn neu an.
pub fn set_mode(state: &mut AppState, surface: &mut dyn MapSurface, mode: InteractionMode) {
    let previous = state.mode.set_mode(mode);
    if previous == mode {
        return;
    }
    log::info!("Interaktionsmodus: {:?} -> {:?}", previous, mode);

    match (previous.blocks_pointer(), mode.blocks_pointer()) {
        (false, true) => {
            state.view.hover_hit = false;
            trace::clear_trace(state, surface);
        }
        (true, false) => trace::on_identified_feature_changed(state, surface),
        _ => {}
    }
}
