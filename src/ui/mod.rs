//! UI-Layer mit egui: Canvas-Input und Malen der Szene.

pub mod input;
pub mod painter;

pub use input::InputState;
pub use painter::paint_scene;
