//! Handler für Desktop-Bridge und Sitzung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::surface::MapSurface;

pub fn set_connected(state: &mut AppState, connected: bool) {
    use_cases::session::set_bridge_connected(state, connected);
}

pub fn publish_identification(state: &mut AppState) {
    use_cases::bridge::publish_identification(state);
}

pub fn publish_selection(state: &mut AppState) {
    use_cases::bridge::publish_selection(state);
}

pub fn set_session_user(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    username: Option<String>,
) -> anyhow::Result<()> {
    use_cases::session::set_user(state, surface, username)
}
