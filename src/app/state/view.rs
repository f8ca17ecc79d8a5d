use glam::DVec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Canvas-Größe in Pixeln
    pub canvas_size: DVec2,
    /// Verschiebung, die beim letzten Reset auf die Startpunkte angewendet wurde
    pub offset: Vec<f64>,
    /// Signalisiert dem Host, dass sich die Canvas-Größe geändert hat
    pub canvas_dirty: bool,
}

impl ViewState {
    /// Erstellt den View-Zustand mit fester Canvas-Größe.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            canvas_size: DVec2::new(f64::from(width), f64::from(height)),
            offset: Vec::new(),
            canvas_dirty: false,
        }
    }

    /// Setzt eine neue Canvas-Größe und markiert sie für den Host.
    pub fn resize(&mut self, size: DVec2) {
        if self.canvas_size != size {
            self.canvas_size = size;
            self.canvas_dirty = true;
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(
            crate::shared::options::CANVAS_WIDTH,
            crate::shared::options::CANVAS_HEIGHT,
        )
    }
}
