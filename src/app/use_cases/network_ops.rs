//! Use-Case: Span-Equipment-Segmente selektieren und Span-Equipment umleiten.
//!
//! Fehler des Backends werden als Benachrichtigung gemeldet; Identifikation
//! und Selektion bleiben dabei unverändert.

use crate::app::state::{BackendRejection, BackendRequest, NotificationLevel, RequestTicket};
use crate::app::AppState;
use crate::surface::MapSurface;

use super::selection;

/// Nimmt den Slot nur, wenn das Ticket zur laufenden Operation gehört.
fn take_matching(slot: &mut Option<(RequestTicket, String)>, ticket: RequestTicket) -> Option<String> {
    match slot {
        Some((pending, _)) if *pending == ticket => slot.take().map(|(_, id)| id),
        _ => None,
    }
}

/// Fragt die Route-Segmente einer Span-Equipment ab.
pub fn request_span_segments(state: &mut AppState, span_equipment_id: String) {
    let ticket = state.outbox.issue_ticket();
    if let Some((previous, _)) = state
        .network_ops
        .span_segments
        .replace((ticket, span_equipment_id.clone()))
    {
        log::debug!("Segment-Abfrage {:?} durch {:?} ersetzt", previous, ticket);
    }
    state.outbox.push(BackendRequest::SpanSegments {
        ticket,
        span_equipment_id,
    });
}

/// Übernimmt die Segmente einer Span-Equipment als neue Selektion.
pub fn apply_span_segments(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    ticket: RequestTicket,
    result: Result<Vec<String>, BackendRejection>,
) -> anyhow::Result<()> {
    let Some(span_equipment_id) = take_matching(&mut state.network_ops.span_segments, ticket)
    else {
        log::debug!("Verwaiste Segment-Antwort {:?} verworfen", ticket);
        return Ok(());
    };

    match result {
        Ok(ids) => {
            log::info!(
                "{} Segmente von Span-Equipment '{}' selektiert",
                ids.len(),
                span_equipment_id
            );
            selection::replace(state, surface, ids, true)?;
            state.ui.notify(NotificationLevel::Success, "SELECTED");
        }
        Err(rejection) => {
            state
                .ui
                .notify(NotificationLevel::Error, rejection.code_or_default());
        }
    }
    Ok(())
}

/// Leitet eine Span-Equipment über die selektierten Segmente um.
pub fn request_reroute(state: &mut AppState, span_equipment_id: String) {
    if state.selection.is_empty() {
        state
            .ui
            .notify(NotificationLevel::Warning, "NO_ROUTE_SEGMENTS_SELECTED");
        return;
    }

    let ticket = state.outbox.issue_ticket();
    state.network_ops.reroute = Some((ticket, span_equipment_id.clone()));
    state.outbox.push(BackendRequest::Reroute {
        ticket,
        span_equipment_id,
        route_segment_ids: state.selection.to_vec(),
    });
}

pub fn apply_reroute_result(
    state: &mut AppState,
    ticket: RequestTicket,
    result: Result<(), BackendRejection>,
) {
    let Some(span_equipment_id) = take_matching(&mut state.network_ops.reroute, ticket) else {
        log::debug!("Verwaiste Umleitungs-Antwort {:?} verworfen", ticket);
        return;
    };

    match result {
        Ok(()) => {
            log::info!("Span-Equipment '{}' umgeleitet", span_equipment_id);
            state.ui.notify(NotificationLevel::Success, "SUCCESS_MOVED");
        }
        Err(rejection) => {
            log::warn!(
                "Umleitung von '{}' abgelehnt: {}",
                span_equipment_id,
                rejection.code_or_default()
            );
            state
                .ui
                .notify(NotificationLevel::Error, rejection.code_or_default());
        }
    }
}
