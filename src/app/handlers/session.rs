//! Handler für Sitzungs-Lebenszyklus: Reset, Modus, Play-Schleife, Beenden.

use super::animation;
use crate::app::state::{DisplayPhase, ViewMode};
use crate::app::AppState;
use crate::core::{fit_canvas, ControlPointSet, PointBuffer};
use crate::shared::DrawingSurface;
use std::time::Instant;

/// Ersetzt die Kontrollpunkte (Reset).
///
/// Bricht eine laufende Animation ab, entfernt alle Visuals und passt
/// die Canvas an die Ausdehnung der neuen Punkte an.
pub fn replace_points(
    state: &mut AppState,
    surface: &mut dyn DrawingSurface,
    mut points: PointBuffer,
) -> anyhow::Result<()> {
    if points.dim() < 2 {
        anyhow::bail!(
            "Kontrollpunkte brauchen mindestens 2 Koordinaten, gefunden: {}",
            points.dim()
        );
    }

    animation::cancel(state, surface);
    state.visuals.clear_all(surface);
    state.display = DisplayPhase::Empty;
    state.grabbed_point = None;

    if state.options.fit_canvas_to_points {
        if let Some(fit) = fit_canvas(&points, state.options.canvas_margin) {
            points.translate(&fit.offset);
            state.view.resize(fit.size);
            state.view.offset = fit.offset;
        }
    }

    log::info!(
        "Kontrollpunkte ersetzt: {} Punkte, Dimension {}",
        points.len(),
        points.dim()
    );
    state.control_points =
        ControlPointSet::from_buffer(points).with_tolerance(state.options.hit_tolerance);
    Ok(())
}

pub fn set_mode(state: &mut AppState, mode: ViewMode) {
    if state.mode != mode {
        log::info!("Modus: {} -> {}", state.mode, mode);
    }
    state.mode = mode;
}

/// Startet die Play-Schleife mit leerer Punktmenge.
pub fn start_play(state: &mut AppState, surface: &mut dyn DrawingSurface, now: Instant) {
    animation::cancel(state, surface);
    state.visuals.clear_all(surface);
    state.control_points.clear();
    state.grabbed_point = None;
    state.display = DisplayPhase::Empty;
    state
        .timers
        .play
        .start(now, state.options.play_initial_delay());
    log::info!(
        "Play-Modus: erster Refresh in {} ms",
        state.options.play_initial_delay_ms
    );
}

/// Plant den nächsten Play-Refresh.
pub fn schedule_play_tick(state: &mut AppState, now: Instant) {
    if state.mode != ViewMode::Play {
        state.timers.play.cancel();
        return;
    }
    state.timers.play.start(now, state.options.play_interval());
}

pub fn request_exit(state: &mut AppState) {
    state.timers.cancel_all();
    state.should_exit = true;
}
