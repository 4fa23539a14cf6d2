//! Zentrale Konfiguration des Kartenclient-Kerns.
//!
//! `MapOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Hit-Test ────────────────────────────────────────────────────────

/// Halbe Kantenlänge des Hit-Test-Fensters in Screen-Pixeln.
pub const HIT_BOX_PX: f32 = 10.0;

// ── Trace ───────────────────────────────────────────────────────────

/// Nach dieser Zeit gilt eine offene Trace-Anfrage als verloren.
pub const TRACE_TIMEOUT_SECS: u64 = 30;

// ── Kamera ──────────────────────────────────────────────────────────

/// Zoom-Stufe beim Sprung auf ein Suchergebnis.
pub const SEARCH_ZOOM_LEVEL: f64 = 17.0;

// ── Bridge ──────────────────────────────────────────────────────────

/// Empfohlene Wartezeit bis zum Reconnect der Desktop-Bridge.
pub const BRIDGE_RECONNECT_SECS: u64 = 5;

/// Wie viele Kamera-Hinweise pro Feature-ID gemerkt werden.
pub const HINT_MEMORY_CAPACITY: usize = 64;

// ── Quellen & Layer ────────────────────────────────────────────────

/// Vektor-Tileset des Routennetzes.
pub const NETWORK_SOURCE: &str = "route_network";
/// GeoJSON-Quelle für den hervorgehobenen Trace.
pub const TRACE_SOURCE: &str = "route_segment_trace";
/// Filter-Layer für die Sammel-Selektion.
pub const SELECTION_LAYER: &str = "route_segment_selection";
/// Punkt-Quelle für den Suchmarker.
pub const SEARCH_MARKER_SOURCE: &str = "search_marker";
/// Punkt-Quelle für den initialen Marker (Deep-Link).
pub const INITIAL_MARKER_SOURCE: &str = "initial_marker";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `route_network_map.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    // ── Hit-Test ────────────────────────────────────────────────
    /// Halbe Kantenlänge des Hit-Test-Fensters in Screen-Pixeln
    pub hit_box_px: f32,
    /// Objekttypen, die identifiziert werden dürfen (Route-Segment/-Node)
    #[serde(default = "default_identifiable_object_types")]
    pub identifiable_object_types: Vec<String>,

    // ── Trace ───────────────────────────────────────────────────
    /// Kamera automatisch an den Trace anpassen
    pub auto_fit_trace: bool,
    /// Timeout offener Trace-Anfragen in Sekunden
    #[serde(default = "default_trace_timeout_secs")]
    pub trace_timeout_secs: u64,

    // ── Kamera ──────────────────────────────────────────────────
    /// Zoom-Stufe beim Sprung auf ein Suchergebnis
    pub search_zoom_level: f64,

    // ── Bridge ──────────────────────────────────────────────────
    /// Reconnect-Verzögerung für den Socket-Host
    #[serde(default = "default_bridge_reconnect_secs")]
    pub bridge_reconnect_secs: u64,
    /// Kapazität des Kamera-Hinweis-Speichers
    #[serde(default = "default_hint_memory_capacity")]
    pub hint_memory_capacity: usize,

    // ── Quellen & Layer ─────────────────────────────────────────
    pub network_source: String,
    pub trace_source: String,
    pub selection_layer: String,
    pub search_marker_source: String,
    pub initial_marker_source: String,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            hit_box_px: HIT_BOX_PX,
            identifiable_object_types: default_identifiable_object_types(),

            auto_fit_trace: true,
            trace_timeout_secs: TRACE_TIMEOUT_SECS,

            search_zoom_level: SEARCH_ZOOM_LEVEL,

            bridge_reconnect_secs: BRIDGE_RECONNECT_SECS,
            hint_memory_capacity: HINT_MEMORY_CAPACITY,

            network_source: NETWORK_SOURCE.to_string(),
            trace_source: TRACE_SOURCE.to_string(),
            selection_layer: SELECTION_LAYER.to_string(),
            search_marker_source: SEARCH_MARKER_SOURCE.to_string(),
            initial_marker_source: INITIAL_MARKER_SOURCE.to_string(),
        }
    }
}

/// Serde-Default für `identifiable_object_types` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_identifiable_object_types() -> Vec<String> {
    vec![
        crate::core::OBJECT_TYPE_ROUTE_SEGMENT.to_string(),
        crate::core::OBJECT_TYPE_ROUTE_NODE.to_string(),
    ]
}

fn default_trace_timeout_secs() -> u64 {
    TRACE_TIMEOUT_SECS
}

fn default_bridge_reconnect_secs() -> u64 {
    BRIDGE_RECONNECT_SECS
}

fn default_hint_memory_capacity() -> usize {
    HINT_MEMORY_CAPACITY
}

impl MapOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("route_network_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("route_network_map.toml")
    }

    /// Timeout offener Trace-Anfragen.
    pub fn trace_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.trace_timeout_secs)
    }
}
