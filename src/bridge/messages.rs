//! Nachrichten der Desktop-Bridge.
//!
//! Die Bridge relayed Identifikations- und Selektions-Events zwischen
//! mehreren Fenstern desselben Benutzers. Auf dem Draht ist jede Nachricht
//! ein JSON-Objekt mit Diskriminator `eventType`.

use serde::{Deserialize, Serialize};

/// Alle bekannten `eventType`-Werte.
const KNOWN_EVENT_TYPES: [&str; 5] = [
    "IdentifyNetworkElement",
    "RetrieveSelectedResponse",
    "RetrieveSelected",
    "RetrieveIdentifiedNetworkElement",
    "HighlightFeatures",
];

/// Typisierte Bridge-Nachricht (eingehend und ausgehend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventType")]
pub enum BridgeMessage {
    /// Ein Fenster hat ein Netzwerk-Element identifiziert
    #[serde(rename_all = "camelCase")]
    IdentifyNetworkElement {
        identified_feature_id: String,
        /// `"RouteNode"` oder `"RouteSegment"`; andere Werte werden ignoriert
        selected_type: String,
        username: String,
    },
    /// Antwort mit der Sammel-Selektion eines Fensters
    #[serde(rename_all = "camelCase")]
    RetrieveSelectedResponse {
        username: String,
        selected_features_mrid: Vec<String>,
    },
    /// Fordert die aktuelle Sammel-Selektion an
    #[serde(rename_all = "camelCase")]
    RetrieveSelected { username: String },
    /// Fordert das aktuell identifizierte Element an
    #[serde(rename_all = "camelCase")]
    RetrieveIdentifiedNetworkElement { username: String },
    /// Segmente des aktuellen Traces zum Hervorheben in anderen Fenstern
    #[serde(rename_all = "camelCase")]
    HighlightFeatures {
        identified_feature_mrids: Vec<String>,
        username: String,
    },
}

impl BridgeMessage {
    /// Parst eine eingehende Nachricht.
    ///
    /// `Ok(None)` für einen unbekannten `eventType`; `Err` für Payloads,
    /// die kein gültiges JSON-Objekt sind oder Pflichtfelder vermissen.
    pub fn parse(payload: &str) -> anyhow::Result<Option<Self>> {
        let value: serde_json::Value = serde_json::from_str(payload)?;
        let Some(event_type) = value.get("eventType").and_then(|v| v.as_str()) else {
            anyhow::bail!("Bridge-Nachricht ohne 'eventType'");
        };
        if !KNOWN_EVENT_TYPES.contains(&event_type) {
            log::debug!("Unbekannter Bridge-eventType '{}' ignoriert", event_type);
            return Ok(None);
        }
        let message = serde_json::from_value(value)?;
        Ok(Some(message))
    }

    /// Serialisiert die Nachricht für den Socket.
    pub fn to_payload(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Benutzer, dem die Nachricht gehört.
    pub fn username(&self) -> &str {
        match self {
            Self::IdentifyNetworkElement { username, .. }
            | Self::RetrieveSelectedResponse { username, .. }
            | Self::RetrieveSelected { username }
            | Self::RetrieveIdentifiedNetworkElement { username }
            | Self::HighlightFeatures { username, .. } => username,
        }
    }

    /// Name des Nachrichtentyps (für Logs).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::IdentifyNetworkElement { .. } => "IdentifyNetworkElement",
            Self::RetrieveSelectedResponse { .. } => "RetrieveSelectedResponse",
            Self::RetrieveSelected { .. } => "RetrieveSelected",
            Self::RetrieveIdentifiedNetworkElement { .. } => "RetrieveIdentifiedNetworkElement",
            Self::HighlightFeatures { .. } => "HighlightFeatures",
        }
    }
}
