//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::surface::MapSurface;

/// Orchestriert Intents und Use-Cases auf den AppState.
///
/// Die Map-Surface wird nur für die Dauer eines Aufrufs geliehen.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        surface: &mut dyn MapSurface,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        let mut result = Ok(());
        for command in commands {
            if let Err(e) = self.handle_command(state, surface, command) {
                result = Err(e);
                break;
            }
        }

        super::use_cases::view::sync_cursor(state, surface);
        result
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        surface: &mut dyn MapSurface,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Karten-Lebenszyklus ===
            AppCommand::InitializeMapSurface {
                initial_envelope,
                initial_marker,
            } => handlers::map::initialize(state, surface, initial_envelope, initial_marker)?,
            AppCommand::ReleaseMapSurface => handlers::map::release(state),
            AppCommand::ResolveDeferredHighlight => {
                handlers::map::resolve_deferred_highlight(state, surface)
            }

            // === Zeiger ===
            AppCommand::IdentifyAt { screen_pos } => {
                handlers::pointer::identify_at(state, surface, screen_pos)?
            }
            AppCommand::AppendHitToSelection { screen_pos } => {
                handlers::pointer::append_hit_to_selection(state, surface, screen_pos)?
            }
            AppCommand::UpdateHover { screen_pos } => {
                handlers::pointer::update_hover(state, surface, screen_pos)?
            }

            // === Modus ===
            AppCommand::SetInteractionMode { mode } => {
                handlers::mode::set_mode(state, surface, mode)
            }

            // === Identifikation ===
            AppCommand::ClearIdentification => handlers::identification::clear(state, surface),
            AppCommand::ApplyExternalIdentify { feature } => {
                handlers::identification::apply_external(state, surface, feature)
            }
            AppCommand::OpenDeepLink { feature } => {
                handlers::identification::open_deep_link(state, surface, feature)
            }

            // === Sammel-Selektion ===
            AppCommand::ClearSelection => handlers::selection::clear(state, surface)?,
            AppCommand::RemoveFromSelection { segment_id } => {
                handlers::selection::remove(state, surface, &segment_id)?
            }
            AppCommand::ReplaceSelection { ids, publish } => {
                handlers::selection::replace(state, surface, ids, publish)?
            }
            AppCommand::RequestSelectionTrace => handlers::selection::request_trace(state),

            // === Trace ===
            AppCommand::ApplyTraceOutcome { ticket, outcome } => {
                handlers::trace::apply_outcome(state, surface, ticket, outcome)
            }
            AppCommand::SetAutoFitTrace { enabled } => handlers::trace::set_auto_fit(state, enabled),
            AppCommand::ExpireTrace { now } => handlers::trace::expire(state, surface, now),

            // === Span-Equipment ===
            AppCommand::RequestSpanSegments { span_equipment_id } => {
                handlers::network_ops::request_span_segments(state, span_equipment_id)
            }
            AppCommand::ApplySpanSegments { ticket, result } => {
                handlers::network_ops::apply_span_segments(state, surface, ticket, result)?
            }
            AppCommand::RequestReroute { span_equipment_id } => {
                handlers::network_ops::request_reroute(state, span_equipment_id)
            }
            AppCommand::ApplyRerouteResult { ticket, result } => {
                handlers::network_ops::apply_reroute_result(state, ticket, result)
            }

            // === Karte & Layer ===
            AppCommand::ShowSearchResult { position } => {
                handlers::map::show_search_result(state, surface, position)
            }
            AppCommand::ToggleLayerVisibility { layer_id } => {
                handlers::map::toggle_layer_visibility(surface, &layer_id)
            }
            AppCommand::PublishTilesetInvalidation { tileset_name } => {
                handlers::map::publish_tileset_invalidation(state, surface, tileset_name)
            }

            // === Bridge & Sitzung ===
            AppCommand::SetBridgeConnected { connected } => {
                handlers::bridge::set_connected(state, connected)
            }
            AppCommand::PublishIdentification => handlers::bridge::publish_identification(state),
            AppCommand::PublishSelection => handlers::bridge::publish_selection(state),
            AppCommand::SetSessionUser { username } => {
                handlers::bridge::set_session_user(state, surface, username)?
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options),
        }

        Ok(())
    }
}
