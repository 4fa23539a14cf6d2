//! Identifizierbare Netzwerk-Elemente: Route-Nodes und Route-Segmente.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Objekttyp gerenderter Route-Nodes im Tileset.
pub const OBJECT_TYPE_ROUTE_NODE: &str = "route_node";
/// Objekttyp gerenderter Route-Segmente im Tileset.
pub const OBJECT_TYPE_ROUTE_SEGMENT: &str = "route_segment";

/// Art eines identifizierbaren Netzwerk-Elements (geschlossene Menge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Punkt im Routennetz
    Node,
    /// Kante im Routennetz
    Segment,
}

impl FeatureKind {
    /// Übersetzt den Objekttyp eines gerenderten Features.
    ///
    /// Alles außer Route-Node/-Segment ist eine Vorbedingungsverletzung der
    /// Hit-Test-Pipeline und wird als Fehler gemeldet, nie geraten.
    pub fn from_object_type(object_type: &str) -> anyhow::Result<Self> {
        match object_type {
            OBJECT_TYPE_ROUTE_NODE => Ok(Self::Node),
            OBJECT_TYPE_ROUTE_SEGMENT => Ok(Self::Segment),
            other => anyhow::bail!("Objekttyp '{other}' ist kein identifizierbares Netzwerk-Element"),
        }
    }

    /// Übersetzt den `selectedType` einer Bridge-Nachricht (unbekannt = `None`).
    pub fn from_bridge_type(selected_type: &str) -> Option<Self> {
        match selected_type {
            "RouteNode" => Some(Self::Node),
            "RouteSegment" => Some(Self::Segment),
            _ => None,
        }
    }

    /// Bezeichner für ausgehende Bridge-Nachrichten.
    pub fn bridge_type(self) -> &'static str {
        match self {
            Self::Node => "RouteNode",
            Self::Segment => "RouteSegment",
        }
    }

    /// Nur Segmente haben einen Netzwerk-Trace.
    pub fn is_traceable(self) -> bool {
        matches!(self, Self::Segment)
    }
}

/// Kameraposition zum Zeitpunkt der Identifikation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraHint {
    /// Breitengrad des Kartenzentrums
    pub latitude: f64,
    /// Längengrad des Kartenzentrums
    pub longitude: f64,
    /// Zoom-Stufe der Karte
    pub zoom_level: f64,
}

impl CameraHint {
    /// Kartenzentrum als (lon, lat).
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.longitude, self.latitude)
    }
}

/// Das eine Netzwerk-Element, das gerade inspiziert wird.
///
/// Wird immer als Ganzes ersetzt, nie teilweise mutiert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifiedFeature {
    /// Opaque Domänen-ID (mRID)
    pub id: String,
    /// Node oder Segment
    pub kind: FeatureKind,
    /// Optionale Kameraposition für spätere Wiederherstellung
    pub camera_hint: Option<CameraHint>,
}

impl IdentifiedFeature {
    /// Erstellt ein identifiziertes Feature ohne Kamera-Hinweis.
    pub fn new(id: impl Into<String>, kind: FeatureKind) -> Self {
        Self {
            id: id.into(),
            kind,
            camera_hint: None,
        }
    }

    /// Hängt einen Kamera-Hinweis an.
    pub fn with_camera_hint(mut self, hint: CameraHint) -> Self {
        self.camera_hint = Some(hint);
        self
    }
}

/// Referenz auf ein gerendertes Feature der Render-Engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureHandle {
    /// Layer, in dem das Feature gerendert wird
    pub layer_id: String,
    /// Feature-ID innerhalb der Quelle
    pub feature_id: u64,
}

/// Ergebnis eines Hit-Tests: ein aktuell gerendertes Feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedFeature {
    /// Render-Referenz (Layer + Feature-ID)
    pub handle: FeatureHandle,
    /// Objekttyp aus den Feature-Properties (`objecttype`)
    pub object_type: String,
    /// Domänen-ID aus den Feature-Properties (`mrid`)
    pub mrid: String,
    /// Icon-Bezeichner bei Symbol-Layern, sonst `None`
    #[serde(default)]
    pub icon: Option<String>,
}

impl RenderedFeature {
    /// Gibt `true` zurück, wenn der Objekttyp in der Liste vorkommt.
    pub fn has_object_type(&self, object_types: &[String]) -> bool {
        object_types.iter().any(|t| t == &self.object_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_types_map_to_network_kinds() {
        assert_eq!(
            FeatureKind::from_object_type("route_node").unwrap(),
            FeatureKind::Node
        );
        assert_eq!(
            FeatureKind::from_object_type("route_segment").unwrap(),
            FeatureKind::Segment
        );
    }

    #[test]
    fn foreign_object_type_is_rejected() {
        let err = FeatureKind::from_object_type("conduit").unwrap_err();
        assert!(err.to_string().contains("conduit"));
    }

    #[test]
    fn bridge_types_round_trip_only_for_network_kinds() {
        for kind in [FeatureKind::Node, FeatureKind::Segment] {
            assert_eq!(FeatureKind::from_bridge_type(kind.bridge_type()), Some(kind));
        }
        assert_eq!(FeatureKind::from_bridge_type("SpanEquipment"), None);
    }
}
