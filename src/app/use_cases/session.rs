//! Use-Case: An- und Abmeldung sowie Bridge-Verbindung.

use crate::app::AppState;
use crate::surface::MapSurface;

use super::{bridge, identify, selection, trace};

/// Setzt den lokalen Benutzer. Abmelden leert Identifikation, Trace und Selektion.
pub fn set_user(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    username: Option<String>,
) -> anyhow::Result<()> {
    let changed = state.session.username != username;
    state.session.username = username;

    let Some(username) = state.session.username.clone() else {
        log::info!("Benutzer abgemeldet");
        identify::clear_identification(state, surface);
        trace::clear_trace(state, surface);
        selection::replace(state, surface, Vec::new(), false)?;
        return Ok(());
    };

    if changed {
        log::info!("Benutzer angemeldet: {}", username);
        if state.bridge.is_connected() {
            bridge::request_remote_state(state);
        }
    }
    Ok(())
}

/// Übernimmt den Verbindungszustand der Desktop-Bridge.
pub fn set_bridge_connected(state: &mut AppState, connected: bool) {
    if state.bridge.is_connected() == connected {
        return;
    }
    state.bridge.set_connected(connected);
    if connected {
        log::info!("Mit Desktop-Bridge verbunden");
        bridge::request_remote_state(state);
    } else {
        log::info!(
            "Desktop-Bridge getrennt, Reconnect durch Host nach {} s",
            state.options.bridge_reconnect_secs
        );
    }
}
