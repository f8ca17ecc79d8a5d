//! Handler für den Animate-Modus.

use crate::app::state::DisplayPhase;
use crate::app::AppState;
use crate::core::{AnimationDriver, CurveError};
use crate::shared::DrawingSurface;
use glam::DVec2;
use std::time::Instant;

/// Startet eine neue Animation ab Ratio 0 und plant den ersten Tick.
pub fn start(
    state: &mut AppState,
    surface: &mut dyn DrawingSurface,
    now: Instant,
) -> anyhow::Result<()> {
    cancel(state, surface);

    let count = state.point_count();
    if count < 2 {
        return Err(CurveError::InsufficientPoints {
            required: 2,
            found: count,
        }
        .into());
    }

    state.visuals.clear_static(surface);
    state.display = DisplayPhase::Empty;

    let driver =
        AnimationDriver::with_step(state.control_points.dim(), state.options.animation_step)?;
    log::info!(
        "Animation gestartet: {} Punkte, {} Ticks à {} ms",
        count,
        AnimationDriver::ticks_to_completion(driver.step()),
        state.options.animation_interval_ms
    );
    state.animation = Some(driver);
    state
        .timers
        .animation
        .start(now, state.options.animation_interval());
    Ok(())
}

/// Führt einen Tick aus, ersetzt die Konstruktions-Visuals und plant den nächsten Tick.
pub fn advance(
    state: &mut AppState,
    surface: &mut dyn DrawingSurface,
    now: Instant,
) -> anyhow::Result<()> {
    state.timers.animation.poll(now);

    let Some(driver) = state.animation.as_mut() else {
        state.timers.animation.cancel();
        return Ok(());
    };

    let Some(frame) = driver.tick(state.control_points.all())? else {
        state.timers.animation.cancel();
        return Ok(());
    };

    state.visuals.clear_construction(surface);
    state
        .visuals
        .draw_construction(surface, &frame.construction, &state.options);
    state
        .visuals
        .update_trail(surface, &frame.state.trail.to_xy(), &state.options);
    let marker = DVec2::new(
        frame.point.first().copied().unwrap_or(0.0),
        frame.point.get(1).copied().unwrap_or(0.0),
    );
    state.visuals.update_marker(surface, marker, &state.options);

    if frame.state.is_terminal() {
        state.timers.animation.cancel();
        log::info!(
            "Animation abgeschlossen: {} Spurpunkte",
            frame.state.trail.len()
        );
    } else {
        state
            .timers
            .animation
            .start(now, state.options.animation_interval());
    }
    Ok(())
}

/// Bricht eine laufende Animation ab und entfernt Spur, Marker und Konstruktion.
pub fn cancel(state: &mut AppState, surface: &mut dyn DrawingSurface) {
    state.timers.animation.cancel();
    if let Some(driver) = state.animation.take() {
        if !driver.is_terminal() {
            log::info!("Animation abgebrochen bei Ratio {:.3}", driver.ratio());
        }
    }
    state.visuals.clear_animation(surface);
}
