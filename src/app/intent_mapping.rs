//! Mapping von Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, InteractionMode};
use crate::bridge::BridgeMessage;
use crate::core::{FeatureKind, IdentifiedFeature};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapLoaded {
            initial_envelope,
            initial_marker,
        } => vec![AppCommand::InitializeMapSurface {
            initial_envelope,
            initial_marker,
        }],
        AppIntent::MapUnloaded => vec![AppCommand::ReleaseMapSurface],
        AppIntent::MapIdle => {
            if state.identification.has_deferred_highlight() {
                vec![AppCommand::ResolveDeferredHighlight]
            } else {
                vec![]
            }
        }

        AppIntent::MapClicked { screen_pos } => {
            if state.mode.is_blocking() {
                log::trace!(
                    "Klick bei {:?} durch Modus {:?} gesperrt",
                    screen_pos,
                    state.mode.current_mode()
                );
                return vec![];
            }
            match state.mode.current_mode() {
                InteractionMode::BulkSelecting => {
                    vec![AppCommand::AppendHitToSelection { screen_pos }]
                }
                _ => vec![AppCommand::IdentifyAt { screen_pos }],
            }
        }
        AppIntent::PointerMoved { screen_pos } => vec![AppCommand::UpdateHover { screen_pos }],

        AppIntent::ModeRequested { mode } => vec![AppCommand::SetInteractionMode { mode }],
        AppIntent::ModeToggled { mode } => vec![AppCommand::SetInteractionMode {
            mode: state.mode.toggle_target(mode),
        }],

        AppIntent::IdentificationCleared => vec![AppCommand::ClearIdentification],
        AppIntent::DeepLinkOpened { feature } => vec![AppCommand::OpenDeepLink { feature }],

        AppIntent::SelectionCleared => vec![AppCommand::ClearSelection],
        AppIntent::SelectionSegmentRemoved { segment_id } => {
            vec![AppCommand::RemoveFromSelection { segment_id }]
        }
        AppIntent::SelectionTraceRequested => vec![AppCommand::RequestSelectionTrace],

        AppIntent::TraceResolved { ticket, outcome } => {
            vec![AppCommand::ApplyTraceOutcome { ticket, outcome }]
        }
        AppIntent::AutoFitTraceToggled => vec![AppCommand::SetAutoFitTrace {
            enabled: !state.options.auto_fit_trace,
        }],
        AppIntent::Tick { now } => {
            if state.trace.is_loading() {
                vec![AppCommand::ExpireTrace { now }]
            } else {
                vec![]
            }
        }

        AppIntent::SpanSegmentsSelectionRequested { span_equipment_id } => {
            vec![AppCommand::RequestSpanSegments { span_equipment_id }]
        }
        AppIntent::SpanSegmentsResolved { ticket, result } => {
            vec![AppCommand::ApplySpanSegments { ticket, result }]
        }
        AppIntent::RerouteRequested { span_equipment_id } => {
            vec![AppCommand::RequestReroute { span_equipment_id }]
        }
        AppIntent::RerouteResolved { ticket, result } => {
            vec![AppCommand::ApplyRerouteResult { ticket, result }]
        }

        AppIntent::SearchResultSelected { position } => {
            vec![AppCommand::ShowSearchResult { position }]
        }
        AppIntent::LayerVisibilityToggled { layer_id } => {
            vec![AppCommand::ToggleLayerVisibility { layer_id }]
        }
        AppIntent::TilesetInvalidated { tileset_name } => {
            vec![AppCommand::PublishTilesetInvalidation { tileset_name }]
        }

        AppIntent::BridgeConnected => vec![AppCommand::SetBridgeConnected { connected: true }],
        AppIntent::BridgeDisconnected => {
            vec![AppCommand::SetBridgeConnected { connected: false }]
        }
        AppIntent::BridgeMessageReceived { payload } => map_bridge_payload(state, &payload),
        AppIntent::SessionUserChanged { username } => {
            vec![AppCommand::SetSessionUser { username }]
        }

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

/// Übersetzt eine rohe Bridge-Nachricht. Nachrichten fremder Benutzer werden ignoriert.
fn map_bridge_payload(state: &AppState, payload: &str) -> Vec<AppCommand> {
    let message = match BridgeMessage::parse(payload) {
        Ok(Some(message)) => message,
        Ok(None) => return vec![],
        Err(e) => {
            log::warn!("Bridge-Nachricht nicht lesbar: {:#}", e);
            return vec![];
        }
    };

    if !state.session.is_local_user(message.username()) {
        log::debug!(
            "Bridge-Nachricht '{}' von Benutzer '{}' ignoriert",
            message.event_type(),
            message.username()
        );
        return vec![];
    }

    match message {
        BridgeMessage::IdentifyNetworkElement {
            identified_feature_id,
            selected_type,
            ..
        } => match FeatureKind::from_bridge_type(&selected_type) {
            Some(kind) => vec![AppCommand::ApplyExternalIdentify {
                feature: IdentifiedFeature::new(identified_feature_id, kind),
            }],
            None => {
                log::debug!("Bridge-Identify mit Typ '{}' ignoriert", selected_type);
                vec![]
            }
        },
        BridgeMessage::RetrieveSelectedResponse {
            selected_features_mrid,
            ..
        } => vec![AppCommand::ReplaceSelection {
            ids: selected_features_mrid,
            publish: false,
        }],
        BridgeMessage::RetrieveSelected { .. } => vec![AppCommand::PublishSelection],
        BridgeMessage::RetrieveIdentifiedNetworkElement { .. } => {
            vec![AppCommand::PublishIdentification]
        }
        BridgeMessage::HighlightFeatures { .. } => {
            log::debug!("Eingehendes HighlightFeatures wird nicht angewendet");
            vec![]
        }
    }
}
