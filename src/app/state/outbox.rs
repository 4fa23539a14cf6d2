//! Ausgehende Backend-Anfragen.
//!
//! Der Kern stellt Anfragen nur ein; der Host führt sie aus und meldet das
//! Ergebnis mit demselben Ticket als Intent zurück.

use serde::{Deserialize, Serialize};

/// Eindeutige Nummer einer Backend-Anfrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestTicket(pub u64);

/// Was getraced werden soll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceTarget {
    /// Das identifizierte Route-Segment
    Segment(String),
    /// Alle Segmente der Sammel-Selektion
    Selection(Vec<String>),
}

impl TraceTarget {
    /// IDs, mit denen die Anfrage gestellt wird.
    pub fn ids(&self) -> Vec<String> {
        match self {
            Self::Segment(id) => vec![id.clone()],
            Self::Selection(ids) => ids.clone(),
        }
    }
}

/// Strukturierter Fehler des Backends.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BackendRejection {
    #[serde(default)]
    pub code: Option<String>,
}

impl BackendRejection {
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
        }
    }

    /// Fehlercode für die Benachrichtigung (`ERROR`, wenn das Backend keinen liefert).
    pub fn code_or_default(&self) -> &str {
        self.code.as_deref().unwrap_or("ERROR")
    }
}

/// Eine eingestellte Backend-Anfrage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BackendRequest {
    Trace {
        ticket: RequestTicket,
        target: TraceTarget,
    },
    SpanSegments {
        ticket: RequestTicket,
        span_equipment_id: String,
    },
    Reroute {
        ticket: RequestTicket,
        span_equipment_id: String,
        route_segment_ids: Vec<String>,
    },
}

impl BackendRequest {
    pub fn ticket(&self) -> RequestTicket {
        match self {
            Self::Trace { ticket, .. }
            | Self::SpanSegments { ticket, .. }
            | Self::Reroute { ticket, .. } => *ticket,
        }
    }
}

/// Queue ausgehender Anfragen mit fortlaufender Ticket-Vergabe.
#[derive(Debug, Default)]
pub struct Outbox {
    next_ticket: u64,
    requests: Vec<BackendRequest>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vergibt das nächste Ticket.
    pub fn issue_ticket(&mut self) -> RequestTicket {
        self.next_ticket += 1;
        RequestTicket(self.next_ticket)
    }

    pub fn push(&mut self, request: BackendRequest) {
        log::debug!("Backend-Anfrage eingestellt: {:?}", request);
        self.requests.push(request);
    }

    pub fn pending(&self) -> &[BackendRequest] {
        &self.requests
    }

    /// Entnimmt alle Anfragen in Einstell-Reihenfolge.
    pub fn drain(&mut self) -> Vec<BackendRequest> {
        std::mem::take(&mut self.requests)
    }
}
