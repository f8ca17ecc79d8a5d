//! Application State: zentrale Datenhaltung.

mod app_state;
mod view;

pub use app_state::{AppState, DisplayPhase, Timers, ViewMode};
pub use view::ViewState;
