use std::time::Instant;

use glam::{DVec2, Vec2};

use crate::app::state::{BackendRejection, InteractionMode, RequestTicket, TraceOutcome};
use crate::core::{Envelope, IdentifiedFeature};
use crate::shared::MapOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI, Bridge, Backend und Timern ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // === Karten-Lebenszyklus ===
    /// Karte fertig geladen (optional mit initialer Envelope und Marker)
    MapLoaded {
        initial_envelope: Option<Envelope>,
        initial_marker: Option<DVec2>,
    },
    /// Karte wird entfernt
    MapUnloaded,
    /// Render-Engine meldet: Rendering abgeschlossen
    MapIdle,

    // === Zeiger ===
    /// Klick auf die Karte (Screen-Pixel)
    MapClicked { screen_pos: Vec2 },
    /// Zeiger bewegt (Screen-Pixel)
    PointerMoved { screen_pos: Vec2 },

    // === Modus ===
    /// Modus direkt setzen
    ModeRequested { mode: InteractionMode },
    /// Werkzeug-Button: aktiviert den Modus oder kehrt zu `Normal` zurück
    ModeToggled { mode: InteractionMode },

    // === Identifikation ===
    /// Element gelöscht oder Kartenansicht verlassen
    IdentificationCleared,
    /// Deep-Link mit Feature und Kamera-Hinweis geöffnet
    DeepLinkOpened { feature: IdentifiedFeature },

    // === Sammel-Selektion ===
    SelectionCleared,
    SelectionSegmentRemoved { segment_id: String },
    /// Trace über alle selektierten Segmente anfordern
    SelectionTraceRequested,

    // === Trace ===
    /// Backend hat eine Trace-Anfrage beantwortet
    TraceResolved {
        ticket: RequestTicket,
        outcome: TraceOutcome,
    },
    /// Auto-Fit-Präferenz umschalten
    AutoFitTraceToggled,
    /// Timer-Tick (Trace-Timeout)
    Tick { now: Instant },

    // === Span-Equipment ===
    /// Route-Segmente einer Span-Equipment als Selektion übernehmen
    SpanSegmentsSelectionRequested { span_equipment_id: String },
    SpanSegmentsResolved {
        ticket: RequestTicket,
        result: Result<Vec<String>, BackendRejection>,
    },
    /// Span-Equipment über die selektierten Segmente umleiten
    RerouteRequested { span_equipment_id: String },
    RerouteResolved {
        ticket: RequestTicket,
        result: Result<(), BackendRejection>,
    },

    // === Karte & Layer ===
    /// Suchergebnis gewählt (lon, lat)
    SearchResultSelected { position: DVec2 },
    LayerVisibilityToggled { layer_id: String },
    /// Externer Prozess meldet ein veraltetes Tileset
    TilesetInvalidated { tileset_name: String },

    // === Bridge & Sitzung ===
    BridgeConnected,
    BridgeDisconnected,
    /// Rohe Nachricht vom Bridge-Socket
    BridgeMessageReceived { payload: String },
    /// An-/Abmeldung (`None` = abgemeldet)
    SessionUserChanged { username: Option<String> },

    // === Optionen ===
    OptionsChanged { options: MapOptions },
}
