//! Synchroner, typisierter Publish/Subscribe-Kanal.
//!
//! Jeder Event-Typ bekommt seinen eigenen Bus. `subscribe` liefert ein
//! Token, mit dem der Handler wieder abgemeldet wird. `publish` ruft alle
//! zum Zeitpunkt der Emission angemeldeten Handler in Anmelde-Reihenfolge
//! auf; die Map-Surface wird nur für die Dauer des Aufrufs geliehen.

use crate::surface::MapSurface;

/// Abmelde-Token eines Handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

/// Handler-Signatur: Surface-Zugriff plus Event.
pub type Handler<E> = Box<dyn FnMut(&mut dyn MapSurface, &E)>;

/// Typisierter Event-Bus.
pub struct EventBus<E> {
    next_token: u64,
    handlers: Vec<(SubscriptionToken, Handler<E>)>,
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventBus<E> {
    /// Erstellt einen Bus ohne Abonnenten.
    pub fn new() -> Self {
        Self {
            next_token: 1,
            handlers: Vec::new(),
        }
    }

    /// Meldet einen Handler an.
    pub fn subscribe(
        &mut self,
        handler: impl FnMut(&mut dyn MapSurface, &E) + 'static,
    ) -> SubscriptionToken {
        let token = SubscriptionToken(self.next_token);
        self.next_token += 1;
        self.handlers.push((token, Box::new(handler)));
        token
    }

    /// Meldet einen Handler ab. Gibt `false` zurück, wenn das Token unbekannt ist.
    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(t, _)| *t != token);
        self.handlers.len() != before
    }

    /// Ruft alle aktuellen Handler auf und liefert deren Anzahl.
    pub fn publish(&mut self, surface: &mut dyn MapSurface, event: &E) -> usize {
        for (_, handler) in self.handlers.iter_mut() {
            handler(surface, event);
        }
        self.handlers.len()
    }

    /// Anzahl angemeldeter Handler.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

/// Ein benanntes Tileset ist veraltet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilesetInvalidation {
    pub tileset_name: String,
}

impl TilesetInvalidation {
    pub fn new(tileset_name: impl Into<String>) -> Self {
        Self {
            tileset_name: tileset_name.into(),
        }
    }
}

/// Bus für Tileset-Invalidierungen.
pub type TilesetBus = EventBus<TilesetInvalidation>;

/// Standard-Handler: Cache der Quelle verwerfen und gehaltene Kacheln neu laden.
///
/// Ist das Tileset nicht geladen, passiert nichts außer einer Warnung.
pub fn refresh_tileset(surface: &mut dyn MapSurface, event: &TilesetInvalidation) {
    let name = event.tileset_name.as_str();
    let Some(tiles) = surface.tracked_tiles(name) else {
        log::warn!(
            "Tileset '{}' kann nicht aktualisiert werden: Quelle nicht geladen",
            name
        );
        return;
    };

    surface.reload_source(name);
    surface.refresh_tiles(name, &tiles);
    log::info!("Tileset '{}' aktualisiert ({} Kacheln)", name, tiles.len());
}
