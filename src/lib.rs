//! Route-Network-Map Library.
//! Identifikations-, Selektions- und Trace-Kern des Kartenclients,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod bridge;
pub mod core;
pub mod shared;
pub mod surface;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, HighlightRegistry, IdentificationState,
    InteractionMode, ModeGate, Notification, NotificationLevel, SelectionSet, TraceCoordinator,
    TraceOutcome,
};
pub use bridge::{BridgeMessage, EventBus, SubscriptionToken, TilesetInvalidation};
pub use core::{
    CameraHint, Envelope, FeatureHandle, FeatureKind, HighlightedTrace, IdentifiedFeature,
    LineGeometry, PaintState, RenderedFeature, SymbolIcon, TileId, TraceBounds, TraceResponse,
};
pub use shared::MapOptions;
pub use surface::{Cursor, InMemorySurface, MapSurface, ScreenRect};
