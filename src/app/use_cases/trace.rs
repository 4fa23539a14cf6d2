//! Use-Case: Trace anfordern, Antworten abgleichen, Trace anzeigen.

use std::time::Instant;

use crate::app::state::{BackendRequest, NotificationLevel, RequestTicket, TraceOutcome, TraceTarget};
use crate::app::AppState;
use crate::core::HighlightedTrace;
use crate::surface::MapSurface;

use super::bridge;

/// Reagiert auf eine Änderung des identifizierten Features.
///
/// Route-Segmente lösen eine neue Anfrage aus (der bisherige Trace bleibt
/// bis zur Antwort sichtbar). `Idle`, Route-Nodes und sperrende Modi leeren
/// den Trace und verwaisen jede laufende Anfrage.
pub fn on_identified_feature_changed(state: &mut AppState, surface: &mut dyn MapSurface) {
    let traceable_id = state
        .identification
        .current()
        .filter(|f| f.kind.is_traceable())
        .map(|f| f.id.clone());

    match traceable_id {
        Some(id) if !state.mode.is_blocking() => {
            request_trace(state, TraceTarget::Segment(id));
        }
        _ => clear_trace(state, surface),
    }
}

/// Fordert einen Trace über alle Segmente der Sammel-Selektion an.
pub fn request_selection_trace(state: &mut AppState) {
    if state.mode.is_blocking() {
        log::trace!("Selektions-Trace im Modus {:?} gesperrt", state.mode.current_mode());
        return;
    }
    if state.selection.is_empty() {
        log::debug!("Selektions-Trace ohne selektierte Segmente übersprungen");
        return;
    }
    let target = TraceTarget::Selection(state.selection.to_vec());
    request_trace(state, target);
}

fn request_trace(state: &mut AppState, target: TraceTarget) {
    let ticket = state.outbox.issue_ticket();
    state.trace.begin(ticket, target.clone());
    state.outbox.push(BackendRequest::Trace { ticket, target });
}

/// Wendet eine Trace-Antwort an, sofern sie noch zur aktuellen Anfrage gehört.
pub fn apply_outcome(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    ticket: RequestTicket,
    outcome: TraceOutcome,
) {
    let Some(pending) = state.trace.accept(ticket) else {
        log::debug!("Verwaiste Trace-Antwort {:?} verworfen", ticket);
        return;
    };
    if !is_still_relevant(state, &pending.target) {
        log::debug!(
            "Trace-Antwort {:?} für {:?} nicht mehr relevant",
            ticket,
            pending.target
        );
        return;
    }

    let trace = match outcome {
        TraceOutcome::Found(response) => {
            HighlightedTrace::from_response(response, state.options.auto_fit_trace)
        }
        TraceOutcome::NotFound => HighlightedTrace::empty(),
        TraceOutcome::Failed(rejection) => {
            log::warn!(
                "Trace-Anfrage {:?} fehlgeschlagen: {}",
                ticket,
                rejection.code_or_default()
            );
            state
                .ui
                .notify(NotificationLevel::Error, rejection.code_or_default());
            HighlightedTrace::empty()
        }
    };

    show_trace(state, surface, trace);
}

/// Bricht eine zu lange laufende Anfrage ab.
pub fn expire(state: &mut AppState, surface: &mut dyn MapSurface, now: Instant) {
    if !state.trace.expired(now, state.options.trace_timeout()) {
        return;
    }
    log::warn!(
        "Trace-Anfrage nach {} s ohne Antwort abgebrochen",
        state.options.trace_timeout_secs
    );
    clear_trace(state, surface);
    state.ui.notify(NotificationLevel::Warning, "TRACE_TIMEOUT");
}

/// Leert den Trace und verwaist jede laufende Anfrage.
pub fn clear_trace(state: &mut AppState, surface: &mut dyn MapSurface) {
    if !state.trace.reset() {
        return;
    }
    if state.view.map_loaded {
        surface.set_line_source(&state.view.bindings.trace_source, &[]);
    }
    bridge::publish_trace_highlight(state);
}

/// Überträgt den aktuellen Trace erneut auf die Surface (nach dem Laden der Karte).
pub fn show_current(state: &AppState, surface: &mut dyn MapSurface) {
    surface.set_line_source(
        &state.view.bindings.trace_source,
        &state.trace.current_trace().segment_geometries,
    );
}

fn show_trace(state: &mut AppState, surface: &mut dyn MapSurface, trace: HighlightedTrace) {
    if state.view.map_loaded {
        surface.set_line_source(&state.view.bindings.trace_source, &trace.segment_geometries);
        if let Some(bounds) = &trace.fit_bounds {
            surface.fit_bounds(&bounds.wgs84, false);
        }
    }
    log::debug!("Trace angezeigt: {} Segmente", trace.segment_ids.len());
    state.trace.set_current(trace);
    bridge::publish_trace_highlight(state);
}

fn is_still_relevant(state: &AppState, target: &TraceTarget) -> bool {
    if state.mode.is_blocking() {
        return false;
    }
    match target {
        TraceTarget::Segment(id) => state
            .identification
            .current()
            .is_some_and(|f| f.kind.is_traceable() && &f.id == id),
        TraceTarget::Selection(ids) => state.selection.iter().eq(ids.iter().map(String::as_str)),
    }
}
