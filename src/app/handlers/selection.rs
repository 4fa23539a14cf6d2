//! Handler für die Sammel-Selektion.

use crate::app::use_cases;
use crate::app::AppState;
use crate::surface::MapSurface;

pub fn clear(state: &mut AppState, surface: &mut dyn MapSurface) -> anyhow::Result<()> {
    use_cases::selection::clear(state, surface)
}

pub fn remove(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    segment_id: &str,
) -> anyhow::Result<()> {
    use_cases::selection::remove(state, surface, segment_id)
}

pub fn replace(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    ids: Vec<String>,
    publish: bool,
) -> anyhow::Result<()> {
    use_cases::selection::replace(state, surface, ids, publish)
}

pub fn request_trace(state: &mut AppState) {
    use_cases::trace::request_selection_trace(state);
}
