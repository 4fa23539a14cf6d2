use super::outbox::RequestTicket;

/// Laufende Netzwerk-Operationen außerhalb des Traces.
#[derive(Debug, Clone, Default)]
pub struct NetworkOpsState {
    /// Abfrage der Segmente einer Span-Equipment (Ticket, Span-Equipment-ID)
    pub span_segments: Option<(RequestTicket, String)>,
    /// Umleitung einer Span-Equipment (Ticket, Span-Equipment-ID)
    pub reroute: Option<(RequestTicket, String)>,
}

impl NetworkOpsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, solange eine Operation auf Antwort wartet.
    pub fn is_busy(&self) -> bool {
        self.span_segments.is_some() || self.reroute.is_some()
    }
}
