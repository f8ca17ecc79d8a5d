//! Canvas-Input-Handling: Maus-Events → AppIntent.

use crate::app::AppIntent;
use glam::DVec2;

/// Verwaltet den Input-Zustand für den Canvas (laufender Primär-Drag).
#[derive(Debug, Default)]
pub struct InputState {
    /// Primärtaste wurde innerhalb des Canvas gedrückt und ist noch unten
    primary_active: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_active: false,
        }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Positionen werden relativ zur linken oberen Canvas-Ecke geliefert.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let (pressed, released, down, moving, latest) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.primary_down(),
                i.pointer.is_moving(),
                i.pointer.latest_pos(),
            )
        });
        let to_canvas = |p: egui::Pos2| {
            let local = p - response.rect.min;
            DVec2::new(f64::from(local.x), f64::from(local.y))
        };

        if pressed && response.contains_pointer() {
            if let Some(pos) = latest {
                self.primary_active = true;
                events.push(AppIntent::PointerPressed {
                    pos: to_canvas(pos),
                });
            }
        } else if self.primary_active && down && moving {
            if let Some(pos) = latest {
                events.push(AppIntent::PointerDragged {
                    pos: to_canvas(pos),
                });
            }
        }

        if released && self.primary_active {
            self.primary_active = false;
            if let Some(pos) = latest {
                events.push(AppIntent::PointerReleased {
                    pos: to_canvas(pos),
                });
            }
        }

        if response.secondary_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(AppIntent::SecondaryClicked {
                    pos: to_canvas(pos),
                });
            }
        }

        events
    }
}
