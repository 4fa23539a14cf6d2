//! Use-Case: ausgehende Nachrichten an die Desktop-Bridge.
//!
//! Ohne angemeldeten Benutzer oder ohne Verbindung wird nichts gesendet;
//! der Kern arbeitet dann rein lokal weiter.

use crate::app::AppState;
use crate::bridge::BridgeMessage;

fn send_as_local_user(state: &mut AppState, build: impl FnOnce(String) -> BridgeMessage) {
    let Some(username) = state.session.username.clone() else {
        log::debug!("Kein Benutzer angemeldet, Bridge-Nachricht entfällt");
        return;
    };
    state.bridge.send(build(username));
}

/// Meldet das identifizierte Element an die anderen Fenster.
pub fn publish_identification(state: &mut AppState) {
    let Some(feature) = state.identification.current().cloned() else {
        return;
    };
    send_as_local_user(state, |username| BridgeMessage::IdentifyNetworkElement {
        identified_feature_id: feature.id,
        selected_type: feature.kind.bridge_type().to_string(),
        username,
    });
}

/// Meldet die Sammel-Selektion an die anderen Fenster.
pub fn publish_selection(state: &mut AppState) {
    let selected_features_mrid = state.selection.to_vec();
    send_as_local_user(state, |username| BridgeMessage::RetrieveSelectedResponse {
        username,
        selected_features_mrid,
    });
}

/// Meldet die Segmente des angezeigten Traces (leer nach Reset/Fehler).
pub fn publish_trace_highlight(state: &mut AppState) {
    let identified_feature_mrids = state.trace.current_trace().segment_ids.clone();
    send_as_local_user(state, |username| BridgeMessage::HighlightFeatures {
        identified_feature_mrids,
        username,
    });
}

/// Fragt Selektion und Identifikation der anderen Fenster ab (nach Verbindungsaufbau).
pub fn request_remote_state(state: &mut AppState) {
    send_as_local_user(state, |username| BridgeMessage::RetrieveSelected { username });
    send_as_local_user(state, |username| {
        BridgeMessage::RetrieveIdentifiedNetworkElement { username }
    });
}
