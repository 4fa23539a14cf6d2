//! Use-Case: Identifikation aus Hit-Test, Bridge und Deep-Link.
//!
//! Jeder Übergang nach `Identified` ersetzt das Feature vollständig, hebt
//! das gerenderte Feature hervor (oder stellt das Highlight bis zum nächsten
//! Idle-Signal zurück) und stößt den Trace an.

use glam::Vec2;

use crate::app::AppState;
use crate::core::{IdentifiedFeature, RenderedFeature};
use crate::surface::MapSurface;

use super::hit_test::{find_rendered, pick_network_feature};
use super::{bridge, trace};

/// Klick im Normal-Modus: Hit-Test und Identifikation.
pub fn identify_at(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    screen_pos: Vec2,
) -> anyhow::Result<()> {
    let Some(hit) = pick_network_feature(surface, screen_pos, &state.options)? else {
        log::debug!("Kein Netzwerk-Element bei {:?}", screen_pos);
        return Ok(());
    };

    let feature = IdentifiedFeature::new(hit.feature.mrid.clone(), hit.kind)
        .with_camera_hint(surface.camera());
    if hit_test_resolved(state, surface, feature, Some(&hit.feature)) {
        bridge::publish_identification(state);
    }
    Ok(())
}

/// Übernimmt ein per Hit-Test gefundenes Feature.
///
/// Gibt `false` zurück, wenn der Modus die Identifikation sperrt.
pub fn hit_test_resolved(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    feature: IdentifiedFeature,
    rendered: Option<&RenderedFeature>,
) -> bool {
    if state.mode.is_blocking() {
        log::trace!(
            "Identifikation von '{}' im Modus {:?} gesperrt",
            feature.id,
            state.mode.current_mode()
        );
        return false;
    }

    let id = feature.id.clone();
    state.identification.replace(feature);

    let rendered = rendered
        .cloned()
        .or_else(|| find_rendered(surface, &id, &state.options));
    match rendered {
        Some(rendered) => highlight_now(state, surface, &rendered),
        None => defer_highlight(state, surface, &id),
    }

    trace::on_identified_feature_changed(state, surface);
    true
}

/// Identifikation aus einem anderen Fenster desselben Benutzers.
///
/// Ist für die ID ein Kamera-Hinweis bekannt, springt die Kamera dorthin
/// und das Highlight wartet auf das nächste Idle-Signal.
pub fn external_identify(
    state: &mut AppState,
    surface: &mut dyn MapSurface,
    feature: IdentifiedFeature,
) {
    let hint = feature
        .camera_hint
        .or_else(|| state.identification.hint_for(&feature.id));
    let feature = match hint {
        Some(hint) => feature.with_camera_hint(hint),
        None => feature,
    };
    let id = feature.id.clone();
    log::info!("Externe Identifikation: {} ({:?})", id, feature.kind);
    state.identification.replace(feature);

    if !state.view.map_loaded {
        state.identification.defer_highlight(&id);
    } else if let Some(hint) = hint {
        surface.jump_to(hint.center(), hint.zoom_level);
        defer_highlight(state, surface, &id);
    } else {
        match find_rendered(surface, &id, &state.options) {
            Some(rendered) => highlight_now(state, surface, &rendered),
            None => defer_highlight(state, surface, &id),
        }
    }

    trace::on_identified_feature_changed(state, surface);
}

/// Deep-Link: wie eine externe Identifikation, aber lokal ausgelöst.
pub fn open_deep_link(state: &mut AppState, surface: &mut dyn MapSurface, feature: IdentifiedFeature) {
    external_identify(state, surface, feature);
    bridge::publish_identification(state);
}

/// Einmalige Auswertung des zurückgestellten Highlights nach dem Idle-Signal.
///
/// Der Listener ist danach abgebaut, auch wenn das Feature nicht gerendert ist.
pub fn resolve_deferred_highlight(state: &mut AppState, surface: &mut dyn MapSurface) {
    let Some(id) = state.identification.take_deferred_highlight() else {
        return;
    };
    if state.identification.current_id() != Some(id.as_str()) {
        log::debug!("Zurückgestelltes Highlight für '{}' veraltet", id);
        return;
    }

    match find_rendered(surface, &id, &state.options) {
        Some(rendered) => state.highlight.highlight(surface, &rendered),
        None => log::debug!("Feature '{}' nach Kamerasprung nicht gerendert", id),
    }
}

/// Zurück nach `Idle`: Highlight und Trace werden geleert.
pub fn clear_identification(state: &mut AppState, surface: &mut dyn MapSurface) {
    if state.identification.clear().is_none() {
        return;
    }
    state.highlight.clear(surface);
    trace::on_identified_feature_changed(state, surface);
}

fn highlight_now(state: &mut AppState, surface: &mut dyn MapSurface, rendered: &RenderedFeature) {
    state.identification.cancel_deferred_highlight();
    state.highlight.highlight(surface, rendered);
}

fn defer_highlight(state: &mut AppState, surface: &mut dyn MapSurface, id: &str) {
    state.highlight.clear(surface);
    state.identification.defer_highlight(id);
}
