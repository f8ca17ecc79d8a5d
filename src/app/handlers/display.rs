//! Handler für die statische Anzeige (Show- und Play-Modus).

use crate::app::state::DisplayPhase;
use crate::app::AppState;
use crate::core::{evaluate, Construction};
use crate::shared::DrawingSurface;

/// Leitet die komplette statische Anzeige aus den aktuellen Punkten neu ab.
///
/// Vorher gezeichnete Formen werden immer entfernt, auch wenn die Phase
/// gleich bleibt. Schlägt die Auswertung fehl, bleibt die alte Anzeige stehen.
pub fn refresh(state: &mut AppState, surface: &mut dyn DrawingSurface) -> anyhow::Result<()> {
    let phase = DisplayPhase::for_point_count(state.point_count());

    // Erst rechnen, dann abräumen
    let curve = if phase == DisplayPhase::Curve {
        let points = state.control_points.all();
        let skeleton = Construction::build_limited(points, state.options.skeleton_ratio, 1)?;
        let samples = evaluate(points, state.options.curve_steps)?;
        Some((skeleton, samples.to_xy()))
    } else {
        None
    };

    state.visuals.clear_static(surface);
    if phase != state.display {
        log::debug!("Anzeige: {:?} -> {:?}", state.display, phase);
    }
    state.display = phase;

    match phase {
        DisplayPhase::Empty => {}
        DisplayPhase::SinglePoint => {
            if let Some(pos) = state.control_points.position(0) {
                state
                    .visuals
                    .draw_single_point(surface, pos, &state.options);
            }
        }
        DisplayPhase::Curve => {
            if let Some((skeleton, samples)) = curve {
                state
                    .visuals
                    .draw_skeleton(surface, &skeleton, &state.options);
                state.visuals.draw_curve(surface, &samples, &state.options);
            }
        }
    }
    Ok(())
}
