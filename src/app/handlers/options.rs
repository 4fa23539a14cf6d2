//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::MapOptions;

/// Übernimmt neue Optionen. Quellen- und Layer-Namen gelten ab dem nächsten `MapLoaded`.
pub fn apply(state: &mut AppState, options: MapOptions) {
    state
        .identification
        .set_hint_capacity(options.hint_memory_capacity);
    state.options = options;
    log::info!("Optionen übernommen");
}
