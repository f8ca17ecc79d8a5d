//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::DrawingSurface;

/// Orchestriert UI-Events und Handler auf dem AppState.
///
/// Alle Zeichenoperationen gehen an die übergebene `DrawingSurface`.
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        surface: &mut dyn DrawingSurface,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, surface, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        surface: &mut dyn DrawingSurface,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Sitzung ===
            AppCommand::ReplaceControlPoints { points } => {
                handlers::session::replace_points(state, surface, points)?
            }
            AppCommand::SetViewMode { mode } => handlers::session::set_mode(state, mode),
            AppCommand::StartPlayLoop { now } => handlers::session::start_play(state, surface, now),
            AppCommand::SchedulePlayTick { now } => {
                handlers::session::schedule_play_tick(state, now)
            }
            AppCommand::RequestExit => handlers::session::request_exit(state),

            // === Anzeige ===
            AppCommand::RefreshDisplay => handlers::display::refresh(state, surface)?,

            // === Animation ===
            AppCommand::StartAnimation { now } => {
                handlers::animation::start(state, surface, now)?
            }
            AppCommand::AdvanceAnimation { now } => {
                handlers::animation::advance(state, surface, now)?
            }
            AppCommand::CancelAnimation => handlers::animation::cancel(state, surface),

            // === Pointer ===
            AppCommand::GrabOrAddControlPoint { pos } => {
                handlers::pointer::grab_or_add(state, pos)
            }
            AppCommand::MoveGrabbedControlPoint { pos } => {
                handlers::pointer::move_grabbed(state, pos)
            }
            AppCommand::ReleaseControlPoint => handlers::pointer::release(state),
            AppCommand::RemoveControlPointAt { pos } => handlers::pointer::remove_at(state, pos),
        }

        Ok(())
    }
}
