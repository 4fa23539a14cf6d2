//! Bridge-Layer: typisierte Bridge-Nachrichten, Event-Bus und Bridge-Link.
//!
//! - `messages`: Nachrichten der Desktop-Bridge (Tag `eventType`)
//! - `bus`: synchroner Publish/Subscribe-Kanal mit Abmelde-Token
//! - `link`: Verbindungszustand und Ausgangs-Queue zur Desktop-Bridge

pub mod bus;
pub mod link;
pub mod messages;

pub use bus::{refresh_tileset, EventBus, SubscriptionToken, TilesetBus, TilesetInvalidation};
pub use link::BridgeLink;
pub use messages::BridgeMessage;
