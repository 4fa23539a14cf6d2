use crate::app::CommandLog;
use crate::bridge::{BridgeLink, TilesetBus};
use crate::shared::MapOptions;

use super::{
    HighlightRegistry, IdentificationState, ModeGate, NetworkOpsState, Outbox, SelectionSet,
    SessionState, TraceCoordinator, UiState, ViewState,
};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Exklusiver Interaktionsmodus
    pub mode: ModeGate,
    /// Identifiziertes Feature, Kamera-Hinweise, verzögertes Highlight
    pub identification: IdentificationState,
    /// Sammel-Selektion (Segment-IDs)
    pub selection: SelectionSet,
    /// Das eine hervorgehobene Feature auf der Surface
    pub highlight: HighlightRegistry,
    /// Laufende Trace-Anfrage und angezeigter Trace
    pub trace: TraceCoordinator,
    /// Tileset-Invalidierungen
    pub tileset_bus: TilesetBus,
    /// Ausgangsseite der Desktop-Bridge
    pub bridge: BridgeLink,
    /// Ausgehende Backend-Anfragen
    pub outbox: Outbox,
    /// Span-Equipment-Abfragen und Umleitungen
    pub network_ops: NetworkOpsState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Sitzung
    pub session: SessionState,
    /// Laufzeit-Optionen
    pub options: MapOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(MapOptions::default())
    }

    /// Erstellt einen neuen App-State mit den gegebenen Optionen
    pub fn with_options(options: MapOptions) -> Self {
        Self {
            mode: ModeGate::new(),
            identification: IdentificationState::with_hint_capacity(options.hint_memory_capacity),
            selection: SelectionSet::new(),
            highlight: HighlightRegistry::new(),
            trace: TraceCoordinator::new(),
            tileset_bus: TilesetBus::new(),
            bridge: BridgeLink::new(),
            outbox: Outbox::new(),
            network_ops: NetworkOpsState::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            session: SessionState::new(),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Gibt `true` zurück, solange irgendeine Backend-Anfrage offen ist.
    pub fn is_busy(&self) -> bool {
        self.trace.is_loading() || self.network_ops.is_busy()
    }
}
