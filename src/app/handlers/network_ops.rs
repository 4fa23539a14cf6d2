//! Handler für Span-Equipment-Operationen.

use crate::app::state::{BackendRejection, RequestTicket};
use crate::app::use_cases;
use crate::app::AppState;
use crate::surface::MapSurface;

pub fn request_span_segments(state: &mut AppState, span_equipment_id: String) {
    use_cases::network_ops::request_span_segments(state, span_equipment_id);
}

pub fn apply_span_segments(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    ticket: RequestTicket,
    result: Result<Vec<String>, BackendRejection>,
) -> anyhow::Result<()> {
    use_cases::network_ops::apply_span_segments(state, surface, ticket, result)
}

pub fn request_reroute(state: &mut AppState, span_equipment_id: String) {
    use_cases::network_ops::request_reroute(state, span_equipment_id);
}

pub fn apply_reroute_result(
    state: &mut AppState,
    ticket: RequestTicket,
    result: Result<(), BackendRejection>,
) {
    use_cases::network_ops::apply_reroute_result(state, ticket, result);
}
