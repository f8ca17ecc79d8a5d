//! In-Memory-Zeichenfläche mit Handle-adressierten Formen.
//!
//! Die egui-Ansicht malt den Inhalt jeden Frame neu; Tests und Benchmarks
//! prüfen direkt die gespeicherten Formen.

use super::surface::{DrawingSurface, LineStyle, OvalStyle, ShapeHandle};
use glam::DVec2;
use indexmap::IndexMap;

/// Eine gespeicherte Form.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneShape {
    Line { points: Vec<DVec2>, style: LineStyle },
    Oval { center: DVec2, style: OvalStyle },
}

/// Zeichenfläche, die alle Formen in Erstellungsreihenfolge hält.
#[derive(Debug, Default)]
pub struct RetainedScene {
    shapes: IndexMap<ShapeHandle, SceneShape>,
    next_id: u64,
}

impl RetainedScene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self {
            shapes: IndexMap::new(),
            next_id: 1,
        }
    }

    fn allocate(&mut self, shape: SceneShape) -> ShapeHandle {
        // Handle 0 bleibt unbenutzt, auch bei `Default`
        self.next_id = self.next_id.max(1);
        let handle = ShapeHandle(self.next_id);
        self.next_id += 1;
        self.shapes.insert(handle, shape);
        handle
    }

    /// Anzahl aktuell vorhandener Formen.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, handle: ShapeHandle) -> Option<&SceneShape> {
        self.shapes.get(&handle)
    }

    pub fn contains(&self, handle: ShapeHandle) -> bool {
        self.shapes.contains_key(&handle)
    }

    /// Alle Formen in Zeichenreihenfolge.
    pub fn shapes(&self) -> impl Iterator<Item = (ShapeHandle, &SceneShape)> + '_ {
        self.shapes.iter().map(|(h, s)| (*h, s))
    }

    /// Anzahl Linien.
    pub fn line_count(&self) -> usize {
        self.shapes
            .values()
            .filter(|s| matches!(s, SceneShape::Line { .. }))
            .count()
    }

    /// Anzahl Ovale.
    pub fn oval_count(&self) -> usize {
        self.shapes
            .values()
            .filter(|s| matches!(s, SceneShape::Oval { .. }))
            .count()
    }
}

impl DrawingSurface for RetainedScene {
    fn draw_line(&mut self, points: &[DVec2], style: &LineStyle) -> ShapeHandle {
        self.allocate(SceneShape::Line {
            points: points.to_vec(),
            style: *style,
        })
    }

    fn draw_oval(&mut self, center: DVec2, style: &OvalStyle) -> ShapeHandle {
        self.allocate(SceneShape::Oval {
            center,
            style: *style,
        })
    }

    fn update_line(&mut self, handle: ShapeHandle, new_points: &[DVec2]) {
        match self.shapes.get_mut(&handle) {
            Some(SceneShape::Line { points, .. }) => {
                points.clear();
                points.extend_from_slice(new_points);
            }
            Some(SceneShape::Oval { .. }) => {
                log::warn!("update_line auf Oval-Handle {:?} ignoriert", handle);
            }
            None => log::debug!("update_line: unbekanntes Handle {:?}", handle),
        }
    }

    fn update_oval(&mut self, handle: ShapeHandle, new_center: DVec2) {
        match self.shapes.get_mut(&handle) {
            Some(SceneShape::Oval { center, .. }) => *center = new_center,
            Some(SceneShape::Line { .. }) => {
                log::warn!("update_oval auf Linien-Handle {:?} ignoriert", handle);
            }
            None => log::debug!("update_oval: unbekanntes Handle {:?}", handle),
        }
    }

    fn remove(&mut self, handle: ShapeHandle) {
        // shift_remove erhält die Zeichenreihenfolge der übrigen Formen
        if self.shapes.shift_remove(&handle).is_none() {
            log::debug!("remove: unbekanntes Handle {:?}", handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::surface::LineStyle;

    const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_handles_are_unique_and_order_is_kept() {
        let mut scene = RetainedScene::new();
        let a = scene.draw_line(&[DVec2::ZERO, DVec2::ONE], &LineStyle::solid(BLACK, 1.0));
        let b = scene.draw_oval(
            DVec2::new(5.0, 5.0),
            &OvalStyle {
                radius: 5.0,
                fill: BLACK,
                outline: BLACK,
                outline_width: 2.0,
            },
        );
        let c = scene.draw_line(&[DVec2::ONE, DVec2::ZERO], &LineStyle::solid(BLACK, 1.0));
        assert_ne!(a, b);
        assert_ne!(b, c);

        scene.remove(b);
        let order: Vec<ShapeHandle> = scene.shapes().map(|(h, _)| h).collect();
        assert_eq!(order, vec![a, c]);
        assert_eq!(scene.line_count(), 2);
        assert_eq!(scene.oval_count(), 0);
    }

    #[test]
    fn test_update_line_replaces_points_and_ignores_unknown() {
        let mut scene = RetainedScene::new();
        let line = scene.draw_line(&[DVec2::ZERO], &LineStyle::solid(BLACK, 3.0));
        scene.update_line(line, &[DVec2::ZERO, DVec2::new(1.0, 2.0)]);
        match scene.get(line) {
            Some(SceneShape::Line { points, .. }) => assert_eq!(points.len(), 2),
            other => panic!("Unerwartete Form: {other:?}"),
        }

        scene.update_line(ShapeHandle(999), &[DVec2::ZERO]);
        scene.remove(ShapeHandle(999));
        assert_eq!(scene.len(), 1);
    }
}
