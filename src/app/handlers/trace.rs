//! Handler für Trace-Antworten, Auto-Fit und Timeout.

use std::time::Instant;

use crate::app::state::{RequestTicket, TraceOutcome};
use crate::app::use_cases;
use crate::app::AppState;
use crate::surface::MapSurface;

pub fn apply_outcome(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    ticket: RequestTicket,
    outcome: TraceOutcome,
) {
    use_cases::trace::apply_outcome(state, surface, ticket, outcome);
}

/// Auto-Fit gilt ab der nächsten Trace-Antwort; die Kamera bleibt jetzt unverändert.
pub fn set_auto_fit(state: &mut AppState, enabled: bool) {
    state.options.auto_fit_trace = enabled;
    log::info!("Auto-Fit für Traces: {}", enabled);
}

pub fn expire(state: &mut AppState, surface: &mut dyn MapSurface, now: Instant) {
    use_cases::trace::expire(state, surface, now);
}
