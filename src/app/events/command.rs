use std::time::Instant;

use glam::{DVec2, Vec2};

use crate::app::state::{BackendRejection, InteractionMode, RequestTicket, TraceOutcome};
use crate::core::{Envelope, IdentifiedFeature};
use crate::shared::MapOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Karten-Lebenszyklus ===
    InitializeMapSurface {
        initial_envelope: Option<Envelope>,
        initial_marker: Option<DVec2>,
    },
    ReleaseMapSurface,
    ResolveDeferredHighlight,

    // === Zeiger ===
    /// Hit-Test am Klickpunkt identifiziert ein Feature
    IdentifyAt { screen_pos: Vec2 },
    /// Hit-Test am Klickpunkt ergänzt die Sammel-Selektion
    AppendHitToSelection { screen_pos: Vec2 },
    UpdateHover { screen_pos: Vec2 },

    // === Modus ===
    SetInteractionMode { mode: InteractionMode },

    // === Identifikation ===
    ClearIdentification,
    ApplyExternalIdentify { feature: IdentifiedFeature },
    OpenDeepLink { feature: IdentifiedFeature },

    // === Sammel-Selektion ===
    ClearSelection,
    RemoveFromSelection { segment_id: String },
    /// Selektion ersetzen; `publish = false` für Änderungen aus der Bridge
    ReplaceSelection { ids: Vec<String>, publish: bool },
    RequestSelectionTrace,

    // === Trace ===
    ApplyTraceOutcome {
        ticket: RequestTicket,
        outcome: TraceOutcome,
    },
    SetAutoFitTrace { enabled: bool },
    ExpireTrace { now: Instant },

    // === Span-Equipment ===
    RequestSpanSegments { span_equipment_id: String },
    ApplySpanSegments {
        ticket: RequestTicket,
        result: Result<Vec<String>, BackendRejection>,
    },
    RequestReroute { span_equipment_id: String },
    ApplyRerouteResult {
        ticket: RequestTicket,
        result: Result<(), BackendRejection>,
    },

    // === Karte & Layer ===
    ShowSearchResult { position: DVec2 },
    ToggleLayerVisibility { layer_id: String },
    PublishTilesetInvalidation { tileset_name: String },

    // === Bridge & Sitzung ===
    SetBridgeConnected { connected: bool },
    PublishIdentification,
    PublishSelection,
    SetSessionUser { username: Option<String> },

    // === Optionen ===
    ApplyOptions { options: MapOptions },
}
