//! Route-Network-Map Replay.
//!
//! Spielt ein JSON-Lines-Skript (Klicks, Moduswechsel, Bridge-Nachrichten,
//! Backend-Antworten, Tileset-Invalidierungen) gegen eine In-Memory-Surface
//! ab und protokolliert den resultierenden Zustand.
//!
//! Aufruf: `route-network-map <scene.json> <script.jsonl>`

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use glam::{DVec2, Vec2};
use route_network_map::app::{BackendRejection, BackendRequest, RequestTicket};
use route_network_map::surface::{SceneFeature, SurfaceScene};
use route_network_map::{
    AppController, AppIntent, AppState, Envelope, IdentifiedFeature, InMemorySurface,
    InteractionMode, MapOptions, TraceOutcome,
};
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

/// Ein Schritt des Replay-Skripts.
#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
enum ScriptStep {
    MapLoaded {
        #[serde(default)]
        initial_envelope: Option<Envelope>,
        #[serde(default)]
        initial_marker: Option<[f64; 2]>,
    },
    MapUnloaded,
    MapIdle,
    /// Ersetzt die gerenderten Features (z.B. nach Kamerasprung)
    Render {
        features: Vec<SceneFeature>,
    },
    Click {
        x: f32,
        y: f32,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    Mode {
        mode: InteractionMode,
    },
    ToggleMode {
        mode: InteractionMode,
    },
    ClearIdentification,
    DeepLink {
        feature: IdentifiedFeature,
    },
    ClearSelection,
    RemoveFromSelection {
        segment_id: String,
    },
    TraceSelection,
    TraceResolved {
        ticket: u64,
        outcome: TraceOutcome,
    },
    ToggleAutoFit,
    /// Timer-Tick relativ zum Skriptstart
    Tick {
        after_secs: u64,
    },
    SpanSegments {
        span_equipment_id: String,
    },
    SpanSegmentsResolved {
        ticket: u64,
        result: Result<Vec<String>, BackendRejection>,
    },
    Reroute {
        span_equipment_id: String,
    },
    RerouteResolved {
        ticket: u64,
        result: Result<(), BackendRejection>,
    },
    Search {
        lon: f64,
        lat: f64,
    },
    ToggleLayer {
        layer_id: String,
    },
    TilesetInvalidated {
        tileset_name: String,
    },
    BridgeConnected,
    BridgeDisconnected,
    BridgeMessage {
        payload: serde_json::Value,
    },
    SessionUser {
        #[serde(default)]
        username: Option<String>,
    },
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Route-Network-Map Replay v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let args: Vec<String> = std::env::args().collect();
        let (Some(scene_path), Some(script_path)) = (args.get(1), args.get(2)) else {
            anyhow::bail!("Aufruf: route-network-map <scene.json> <script.jsonl>");
        };

        let options = MapOptions::load_from_file(&MapOptions::config_path());
        let mut replay = Replay::new(Path::new(scene_path), options)?;
        replay.run_script(&PathBuf::from(script_path))?;
        replay.report();
        Ok(())
    }
}

/// Replay-Sitzung: Zustand, Controller und Surface.
struct Replay {
    state: AppState,
    controller: AppController,
    surface: InMemorySurface,
    started_at: Instant,
}

impl Replay {
    fn new(scene_path: &Path, options: MapOptions) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(scene_path)
            .with_context(|| format!("Szene nicht lesbar: {}", scene_path.display()))?;
        let scene: SurfaceScene = serde_json::from_str(&content)
            .with_context(|| format!("Szene fehlerhaft: {}", scene_path.display()))?;
        log::info!(
            "Szene geladen: {} Features, {} Tilesets",
            scene.features.len(),
            scene.tilesets.len()
        );

        Ok(Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            surface: InMemorySurface::from_scene(scene),
            started_at: Instant::now(),
        })
    }

    fn run_script(&mut self, script_path: &Path) -> anyhow::Result<()> {
        let content = std::fs::read_to_string(script_path)
            .with_context(|| format!("Skript nicht lesbar: {}", script_path.display()))?;

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            let step: ScriptStep = serde_json::from_str(line)
                .with_context(|| format!("Skriptzeile {} fehlerhaft", index + 1))?;
            log::debug!("Schritt {}: {:?}", index + 1, step);

            if let Some(intent) = self.to_intent(step) {
                if let Err(e) = self
                    .controller
                    .handle_intent(&mut self.state, &mut self.surface, intent)
                {
                    log::error!("Schritt {} fehlgeschlagen: {:#}", index + 1, e);
                }
            }
            self.flush_outgoing();
        }
        Ok(())
    }

    fn to_intent(&mut self, step: ScriptStep) -> Option<AppIntent> {
        let intent = match step {
            ScriptStep::MapLoaded {
                initial_envelope,
                initial_marker,
            } => AppIntent::MapLoaded {
                initial_envelope,
                initial_marker: initial_marker.map(DVec2::from_array),
            },
            ScriptStep::MapUnloaded => AppIntent::MapUnloaded,
            ScriptStep::MapIdle => AppIntent::MapIdle,
            ScriptStep::Render { features } => {
                self.surface.set_rendered(features);
                return None;
            }
            ScriptStep::Click { x, y } => AppIntent::MapClicked {
                screen_pos: Vec2::new(x, y),
            },
            ScriptStep::PointerMove { x, y } => AppIntent::PointerMoved {
                screen_pos: Vec2::new(x, y),
            },
            ScriptStep::Mode { mode } => AppIntent::ModeRequested { mode },
            ScriptStep::ToggleMode { mode } => AppIntent::ModeToggled { mode },
            ScriptStep::ClearIdentification => AppIntent::IdentificationCleared,
            ScriptStep::DeepLink { feature } => AppIntent::DeepLinkOpened { feature },
            ScriptStep::ClearSelection => AppIntent::SelectionCleared,
            ScriptStep::RemoveFromSelection { segment_id } => {
                AppIntent::SelectionSegmentRemoved { segment_id }
            }
            ScriptStep::TraceSelection => AppIntent::SelectionTraceRequested,
            ScriptStep::TraceResolved { ticket, outcome } => AppIntent::TraceResolved {
                ticket: RequestTicket(ticket),
                outcome,
            },
            ScriptStep::ToggleAutoFit => AppIntent::AutoFitTraceToggled,
            ScriptStep::Tick { after_secs } => AppIntent::Tick {
                now: self.started_at + Duration::from_secs(after_secs),
            },
            ScriptStep::SpanSegments { span_equipment_id } => {
                AppIntent::SpanSegmentsSelectionRequested { span_equipment_id }
            }
            ScriptStep::SpanSegmentsResolved { ticket, result } => {
                AppIntent::SpanSegmentsResolved {
                    ticket: RequestTicket(ticket),
                    result,
                }
            }
            ScriptStep::Reroute { span_equipment_id } => {
                AppIntent::RerouteRequested { span_equipment_id }
            }
            ScriptStep::RerouteResolved { ticket, result } => AppIntent::RerouteResolved {
                ticket: RequestTicket(ticket),
                result,
            },
            ScriptStep::Search { lon, lat } => AppIntent::SearchResultSelected {
                position: DVec2::new(lon, lat),
            },
            ScriptStep::ToggleLayer { layer_id } => AppIntent::LayerVisibilityToggled { layer_id },
            ScriptStep::TilesetInvalidated { tileset_name } => {
                AppIntent::TilesetInvalidated { tileset_name }
            }
            ScriptStep::BridgeConnected => AppIntent::BridgeConnected,
            ScriptStep::BridgeDisconnected => AppIntent::BridgeDisconnected,
            ScriptStep::BridgeMessage { payload } => AppIntent::BridgeMessageReceived {
                payload: payload.to_string(),
            },
            ScriptStep::SessionUser { username } => AppIntent::SessionUserChanged { username },
        };
        Some(intent)
    }

    /// Protokolliert ausgehende Backend-Anfragen, Bridge-Nachrichten und Benachrichtigungen.
    fn flush_outgoing(&mut self) {
        for request in self.state.outbox.drain() {
            match &request {
                BackendRequest::Trace { ticket, target } => {
                    log::info!("Trace-Anfrage #{}: {:?}", ticket.0, target.ids())
                }
                other => log::info!("Backend-Anfrage: {:?}", other),
            }
        }
        for message in self.state.bridge.drain() {
            match message.to_payload() {
                Ok(payload) => log::info!("Bridge ->: {}", payload),
                Err(e) => log::warn!("Bridge-Nachricht nicht serialisierbar: {:#}", e),
            }
        }
        for notification in self.state.ui.drain_notifications() {
            log::info!("Toast: {:?} {}", notification.level, notification.key);
        }
    }

    fn report(&self) {
        let state = &self.state;
        log::info!("Modus: {:?}", state.mode.current_mode());
        log::info!(
            "Identifiziert: {:?}",
            state.identification.current().map(|f| (&f.id, f.kind))
        );
        log::info!("Selektion: {:?}", state.selection.to_vec());
        log::info!(
            "Trace: {} Segmente {:?}",
            state.trace.current_trace().segment_geometries.len(),
            state.trace.current_trace().segment_ids
        );
        log::info!("Hervorgehoben: {:?}", self.surface.highlighted_features());
        log::info!("Commands ausgeführt: {}", state.command_log.len());
    }
}
