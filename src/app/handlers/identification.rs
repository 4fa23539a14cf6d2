//! Handler für Identifikation aus Bridge, Deep-Link und Reset.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::IdentifiedFeature;
use crate::surface::MapSurface;

pub fn clear(state: &mut AppState, surface: &mut dyn MapSurface) {
    use_cases::identify::clear_identification(state, surface);
}

pub fn apply_external(state: &mut AppState, surface: &mut dyn MapSurface, feature: IdentifiedFeature) {
    use_cases::identify::external_identify(state, surface, feature);
}

pub fn open_deep_link(state: &mut AppState, surface: &mut dyn MapSurface, feature: IdentifiedFeature) {
    use_cases::identify::open_deep_link(state, surface, feature);
}
