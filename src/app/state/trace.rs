//! Trace-Koordination: laufende Anfrage und angezeigter Trace.
//!
//! Es gibt nie echte Abbrüche. Jede Anfrage trägt ein Ticket; nur die
//! Antwort auf das zuletzt ausgegebene Ticket darf angewendet werden
//! (last-request-wins). Wird die Anfrage ersetzt, verworfen oder läuft sie
//! ab, ist ihre Antwort beim Eintreffen verwaist und wird ignoriert.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::outbox::{BackendRejection, RequestTicket, TraceTarget};
use crate::core::{HighlightedTrace, TraceResponse};

/// Ergebnis einer Trace-Anfrage, wie es der Host zurückmeldet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraceOutcome {
    Found(TraceResponse),
    /// Backend meldet explizit: kein Trace
    NotFound,
    Failed(BackendRejection),
}

/// Noch unbeantwortete Trace-Anfrage.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTrace {
    pub ticket: RequestTicket,
    pub target: TraceTarget,
    pub issued_at: Instant,
}

/// Hält höchstens eine laufende Anfrage und genau einen angezeigten Trace.
#[derive(Debug, Clone, Default)]
pub struct TraceCoordinator {
    pending: Option<PendingTrace>,
    current: HighlightedTrace,
}

impl TraceCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert eine neue Anfrage; eine ältere wird damit verwaist.
    pub fn begin(&mut self, ticket: RequestTicket, target: TraceTarget) {
        if let Some(previous) = &self.pending {
            log::debug!(
                "Trace-Anfrage {:?} durch {:?} ersetzt",
                previous.ticket,
                ticket
            );
        }
        self.pending = Some(PendingTrace {
            ticket,
            target,
            issued_at: Instant::now(),
        });
    }

    /// Nimmt die Antwort auf `ticket` an, falls es die laufende Anfrage ist.
    pub fn accept(&mut self, ticket: RequestTicket) -> Option<PendingTrace> {
        match &self.pending {
            Some(pending) if pending.ticket == ticket => self.pending.take(),
            _ => None,
        }
    }

    /// Verwirft die laufende Anfrage; die Anzeige bleibt unverändert.
    pub fn abandon(&mut self) -> Option<PendingTrace> {
        self.pending.take()
    }

    /// Verwirft die laufende Anfrage und leert die Anzeige.
    /// Gibt `true` zurück, wenn sich dadurch etwas geändert hat.
    pub fn reset(&mut self) -> bool {
        let had_pending = self.pending.take().is_some();
        let had_trace = !self.current.is_empty() || !self.current.segment_ids.is_empty();
        self.current = HighlightedTrace::empty();
        had_pending || had_trace
    }

    /// Ersetzt den angezeigten Trace vollständig.
    pub fn set_current(&mut self, trace: HighlightedTrace) {
        self.current = trace;
    }

    pub fn current_trace(&self) -> &HighlightedTrace {
        &self.current
    }

    pub fn pending(&self) -> Option<&PendingTrace> {
        self.pending.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Gibt `true` zurück, wenn die laufende Anfrage zum Zeitpunkt `now` älter als `timeout` ist.
    pub fn expired(&self, now: Instant, timeout: Duration) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.issued_at) >= timeout)
    }
}
