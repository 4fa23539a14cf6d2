//! Core-Domänentypen: Netzwerk-Features, Paint-Zustand, Traces, Kacheln, Screen-Index.

pub mod feature;
pub mod paint;
pub mod spatial;
pub mod tiles;
pub mod trace;

pub use feature::{
    CameraHint, FeatureHandle, FeatureKind, IdentifiedFeature, RenderedFeature,
    OBJECT_TYPE_ROUTE_NODE, OBJECT_TYPE_ROUTE_SEGMENT,
};
pub use paint::{IconRule, PaintState, SymbolIcon, HIGHLIGHT_SUFFIX};
pub use spatial::ScreenIndex;
pub use tiles::TileId;
pub use trace::{Envelope, HighlightedTrace, LineGeometry, TraceBounds, TraceResponse};
