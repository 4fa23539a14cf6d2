//! Handler für den Interaktionsmodus.

use crate::app::use_cases;
use crate::app::{AppState, InteractionMode};
use crate::surface::MapSurface;

pub fn set_mode(state: &mut AppState, surface: &mut dyn MapSurface, mode: InteractionMode) {
    use_cases::mode::set_mode(state, surface, mode);
}
