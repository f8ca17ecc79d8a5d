//! Handler für Pointer-Bearbeitung der Kontrollpunkte.

use crate::app::AppState;
use crate::core::AddOutcome;
use glam::DVec2;

/// Greift einen getroffenen Punkt oder hängt einen neuen an.
pub fn grab_or_add(state: &mut AppState, pos: DVec2) {
    match state.control_points.add(pos) {
        AddOutcome::Grabbed(index) => {
            log::debug!("Punkt {} gegriffen bei {:?}", index, pos);
            state.grabbed_point = Some(index);
        }
        AddOutcome::Appended(index) => {
            log::debug!("Punkt {} angehängt bei {:?}", index, pos);
            state.grabbed_point = None;
        }
    }
}

/// Verschiebt den gegriffenen Punkt. Ohne gegriffenen Punkt: No-op.
pub fn move_grabbed(state: &mut AppState, pos: DVec2) {
    let Some(index) = state.grabbed_point else {
        return;
    };
    if !state.control_points.move_to(index, pos) {
        log::warn!("Gegriffener Punkt {} existiert nicht mehr", index);
        state.grabbed_point = None;
    }
}

pub fn release(state: &mut AppState) {
    state.grabbed_point = None;
}

/// Löscht den ersten getroffenen Punkt; spätere Indizes rücken nach.
pub fn remove_at(state: &mut AppState, pos: DVec2) {
    let Some(index) = state.control_points.hit_test(pos) else {
        return;
    };
    state.control_points.remove(index);
    log::debug!("Punkt {} gelöscht", index);

    state.grabbed_point = match state.grabbed_point {
        Some(grabbed) if grabbed == index => None,
        Some(grabbed) if grabbed > index => Some(grabbed - 1),
        other => other,
    };
}
