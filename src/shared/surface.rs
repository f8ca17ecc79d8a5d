//! Zeichen-Schnittstelle zwischen App-Layer und externer Zeichenfläche.
//!
//! Die App zeichnet nie direkt: sie erzeugt Formen über `DrawingSurface`,
//! merkt sich die zurückgegebenen Handles und aktualisiert bzw. entfernt
//! die Formen später über diese Handles.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Farbe als RGBA (0.0 bis 1.0).
pub type Rgba = [f32; 4];

/// Opaker Verweis auf eine gezeichnete Form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeHandle(pub u64);

/// Strichmuster für gestrichelte Linien.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    /// Strichlänge in Pixeln
    pub dash: f32,
    /// Lückenlänge in Pixeln
    pub gap: f32,
}

/// Stil einer Polylinie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Rgba,
    pub width: f32,
    /// `None` = durchgezogen
    pub dash: Option<DashPattern>,
}

impl LineStyle {
    /// Durchgezogene Linie.
    pub fn solid(color: Rgba, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }
}

/// Stil eines kreisförmigen Ovals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OvalStyle {
    pub radius: f32,
    pub fill: Rgba,
    pub outline: Rgba,
    pub outline_width: f32,
}

/// Fähigkeiten einer externen Zeichenfläche.
///
/// Unbekannte Handles bei `update_*`/`remove` sind kein Fehler, sondern No-ops.
pub trait DrawingSurface {
    /// Zeichnet eine Polylinie durch `points`.
    fn draw_line(&mut self, points: &[DVec2], style: &LineStyle) -> ShapeHandle;

    /// Zeichnet ein Oval um `center`.
    fn draw_oval(&mut self, center: DVec2, style: &OvalStyle) -> ShapeHandle;

    /// Ersetzt die Punkte einer bestehenden Linie.
    fn update_line(&mut self, handle: ShapeHandle, points: &[DVec2]);

    /// Verschiebt ein bestehendes Oval.
    fn update_oval(&mut self, handle: ShapeHandle, center: DVec2);

    /// Entfernt eine Form.
    fn remove(&mut self, handle: ShapeHandle);
}
