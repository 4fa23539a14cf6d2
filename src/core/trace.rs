//! Trace-Daten: Linien-Geometrien, Bounding-Envelopes und der hervorgehobene Trace.

use serde::{Deserialize, Serialize};

/// Achsen-alignierte Bounding-Box in einem Koordinatensystem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Envelope {
    /// Erstellt eine Envelope aus den vier Grenzen.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Endliche Werte und min <= max auf beiden Achsen.
    pub fn is_valid(&self) -> bool {
        [self.min_x, self.min_y, self.max_x, self.max_y]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }
}

/// Linien-Geometrie als opake Koordinatenliste.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineGeometry(pub Vec<[f64; 2]>);

/// Envelopes eines Traces, eine pro verwendetem Koordinatensystem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceBounds {
    /// Geographisch (WGS84), wird für Kamera-Fit verwendet
    pub wgs84: Envelope,
    /// Projiziertes Koordinatensystem des Backends
    pub projected: Envelope,
}

impl TraceBounds {
    /// Gleiche Envelope für beide Koordinatensysteme.
    pub fn uniform(envelope: Envelope) -> Self {
        Self {
            wgs84: envelope,
            projected: envelope,
        }
    }
}

/// Antwort des Backends auf eine Trace-Anfrage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceResponse {
    /// Geometrien aller Segmente (ohne topologische Reihenfolge)
    pub segment_geometries: Vec<LineGeometry>,
    /// IDs der Route-Segmente des Traces
    pub segment_ids: Vec<String>,
    /// Bounding-Envelopes (fehlen bei leerem Trace)
    #[serde(default)]
    pub bounds: Option<TraceBounds>,
}

/// Abgeleiteter Visualisierungszustand des aktuellen Traces.
///
/// Ein leerer Trace ist ein gültiger Endzustand ("nichts hervorzuheben")
/// und unterscheidet sich von "Anfrage läuft" (siehe `TraceCoordinator`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HighlightedTrace {
    /// Hervorzuhebende Linien-Geometrien
    pub segment_geometries: Vec<LineGeometry>,
    /// Route-Segment-IDs des Traces
    pub segment_ids: Vec<String>,
    /// Envelopes für Auto-Fit (None bei deaktiviertem Auto-Fit oder leerem Trace)
    pub fit_bounds: Option<TraceBounds>,
}

impl HighlightedTrace {
    /// Leerer Trace.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn keine Geometrie hervorgehoben wird.
    pub fn is_empty(&self) -> bool {
        self.segment_geometries.is_empty()
    }

    /// Baut den Trace aus einer Backend-Antwort.
    pub fn from_response(response: TraceResponse, auto_fit: bool) -> Self {
        if response.segment_geometries.is_empty() {
            return Self {
                segment_ids: response.segment_ids,
                ..Self::empty()
            };
        }

        let fit_bounds = response
            .bounds
            .filter(|bounds| auto_fit && bounds.wgs84.is_valid());

        Self {
            segment_geometries: response.segment_geometries,
            segment_ids: response.segment_ids,
            fit_bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> TraceResponse {
        TraceResponse {
            segment_geometries: vec![LineGeometry(vec![[0.0, 0.0], [1.0, 1.0]])],
            segment_ids: vec!["S1".into()],
            bounds: Some(TraceBounds::uniform(Envelope::new(0.0, 0.0, 1.0, 1.0))),
        }
    }

    #[test]
    fn fit_bounds_follow_auto_fit_flag() {
        assert!(HighlightedTrace::from_response(response(), true).fit_bounds.is_some());
        assert!(HighlightedTrace::from_response(response(), false).fit_bounds.is_none());
    }

    #[test]
    fn empty_response_never_carries_fit_bounds() {
        let mut empty = response();
        empty.segment_geometries.clear();
        let trace = HighlightedTrace::from_response(empty, true);
        assert!(trace.is_empty());
        assert!(trace.fit_bounds.is_none());
    }

    #[test]
    fn inverted_envelope_is_invalid() {
        assert!(!Envelope::new(1.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!Envelope::new(0.0, 0.0, f64::NAN, 1.0).is_valid());
    }
}
