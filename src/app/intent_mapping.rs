//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::ViewMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ControlPointsReplaced { points } => vec![
            AppCommand::CancelAnimation,
            AppCommand::ReplaceControlPoints { points },
        ],
        AppIntent::SessionStarted { mode, now } => {
            let start = match mode {
                ViewMode::Show => AppCommand::RefreshDisplay,
                ViewMode::Animate => AppCommand::StartAnimation { now },
                ViewMode::Play => AppCommand::StartPlayLoop { now },
            };
            vec![AppCommand::SetViewMode { mode }, start]
        }

        // Punkte sind nur im Play-Modus editierbar
        AppIntent::PointerPressed { pos } if state.mode.accepts_edits() => {
            vec![AppCommand::GrabOrAddControlPoint { pos }]
        }
        AppIntent::SecondaryClicked { pos } if state.mode.accepts_edits() => {
            vec![AppCommand::RemoveControlPointAt { pos }]
        }
        // Drag ohne vorherigen Treffer ist ein No-op
        AppIntent::PointerDragged { pos } if state.grabbed_point.is_some() => {
            vec![AppCommand::MoveGrabbedControlPoint { pos }]
        }
        AppIntent::PointerReleased { .. } if state.grabbed_point.is_some() => {
            vec![AppCommand::ReleaseControlPoint]
        }
        AppIntent::PointerPressed { .. }
        | AppIntent::SecondaryClicked { .. }
        | AppIntent::PointerDragged { .. }
        | AppIntent::PointerReleased { .. } => Vec::new(),

        AppIntent::TimerElapsed { now } => {
            let mut commands = Vec::new();
            if state.timers.animation.is_due(now) {
                commands.push(AppCommand::AdvanceAnimation { now });
            }
            if state.timers.play.is_due(now) {
                commands.push(AppCommand::RefreshDisplay);
                commands.push(AppCommand::SchedulePlayTick { now });
            }
            commands
        }
        AppIntent::ExitRequested => vec![AppCommand::CancelAnimation, AppCommand::RequestExit],
    }
}
