//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod scheduler;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Punkte, Anzeige, Animation, Timer).
pub mod state;
pub mod visuals;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use scheduler::TickScheduler;
pub use state::{AppState, DisplayPhase, Timers, ViewMode, ViewState};
pub use visuals::VisualLayer;
