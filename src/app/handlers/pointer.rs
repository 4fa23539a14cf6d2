//! Handler für Zeiger-Ereignisse auf der Karte.

use glam::Vec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::surface::MapSurface;

/// Klick im Normal-Modus.
pub fn identify_at(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    screen_pos: Vec2,
) -> anyhow::Result<()> {
    use_cases::identify::identify_at(state, surface, screen_pos)
}

/// Klick im Sammel-Modus.
pub fn append_hit_to_selection(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    screen_pos: Vec2,
) -> anyhow::Result<()> {
    use_cases::selection::append_hit(state, surface, screen_pos)
}

pub fn update_hover(
    state: &mut AppState,
    surface: &dyn MapSurface,
    screen_pos: Vec2,
) -> anyhow::Result<()> {
    use_cases::view::update_hover(state, surface, screen_pos)
}
