//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und die Zeichen-Schnittstelle, die zwischen `app`
//! und `ui` geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod retained_scene;
mod surface;

pub use options::ViewerOptions;
pub use retained_scene::{RetainedScene, SceneShape};
pub use surface::{DashPattern, DrawingSurface, LineStyle, OvalStyle, Rgba, ShapeHandle};
