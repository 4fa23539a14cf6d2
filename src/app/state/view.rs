use crate::bridge::SubscriptionToken;
use crate::shared::MapOptions;
use crate::surface::Cursor;
use glam::DVec2;

/// Namen der Quellen und Layer, die beim Laden der Karte angelegt wurden.
///
/// Umbenennungen in den Optionen gelten erst ab dem nächsten `MapLoaded`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceBindings {
    pub network_source: String,
    pub trace_source: String,
    pub selection_layer: String,
    pub search_marker_source: String,
    pub initial_marker_source: String,
}

impl SurfaceBindings {
    pub fn from_options(options: &MapOptions) -> Self {
        Self {
            network_source: options.network_source.clone(),
            trace_source: options.trace_source.clone(),
            selection_layer: options.selection_layer.clone(),
            search_marker_source: options.search_marker_source.clone(),
            initial_marker_source: options.initial_marker_source.clone(),
        }
    }
}

impl Default for SurfaceBindings {
    fn default() -> Self {
        Self::from_options(&MapOptions::default())
    }
}

/// Kartenbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Karte geladen und Quellen/Layer angelegt
    pub map_loaded: bool,
    /// Anmeldung des Standard-Tileset-Handlers
    pub tileset_subscription: Option<SubscriptionToken>,
    /// Zuletzt an die Surface gemeldeter Mauszeiger
    pub cursor: Cursor,
    /// Identifizierbares Feature unter dem Zeiger
    pub hover_hit: bool,
    /// Position des Suchmarkers (lon, lat)
    pub search_marker: Option<DVec2>,
    /// Beim Laden angelegte Quellen und Layer
    pub bindings: SurfaceBindings,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
