//! Handles aller gezeichneten Formen und ihr Lebenszyklus.
//!
//! Transiente Konstruktionslinien werden bei jedem Refresh bzw. Tick
//! vollständig entfernt und neu gezeichnet. Marker und Spur der Animation
//! werden per Handle aktualisiert.

use crate::core::Construction;
use crate::shared::{DrawingSurface, ShapeHandle, ViewerOptions};
use glam::DVec2;

/// Gezeichnete Formen einer Sitzung.
#[derive(Debug, Default)]
pub struct VisualLayer {
    /// Konstruktionslinien und -punkte (transient)
    construction: Vec<ShapeHandle>,
    /// Statische Kurve
    curve: Option<ShapeHandle>,
    /// Einzelner Punkt in der Phase `SinglePoint`
    single_point: Option<ShapeHandle>,
    /// Aktueller Kurvenpunkt der Animation
    marker: Option<ShapeHandle>,
    /// Bisher gezeichnete Animationsspur
    trail: Option<ShapeHandle>,
}

impl VisualLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_count(&self) -> usize {
        self.construction.len()
            + [self.curve, self.single_point, self.marker, self.trail]
                .iter()
                .flatten()
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.handle_count() == 0
    }

    pub fn trail(&self) -> Option<ShapeHandle> {
        self.trail
    }

    pub fn marker(&self) -> Option<ShapeHandle> {
        self.marker
    }

    pub fn curve(&self) -> Option<ShapeHandle> {
        self.curve
    }

    // ── Entfernen ───────────────────────────────────────────────────

    /// Entfernt die transienten Konstruktionslinien.
    pub fn clear_construction(&mut self, surface: &mut dyn DrawingSurface) {
        for handle in self.construction.drain(..) {
            surface.remove(handle);
        }
    }

    /// Entfernt alles, was die statische Anzeige gezeichnet hat.
    pub fn clear_static(&mut self, surface: &mut dyn DrawingSurface) {
        self.clear_construction(surface);
        remove_slot(surface, &mut self.curve);
        remove_slot(surface, &mut self.single_point);
    }

    /// Entfernt alles, was die Animation gezeichnet hat.
    pub fn clear_animation(&mut self, surface: &mut dyn DrawingSurface) {
        self.clear_construction(surface);
        remove_slot(surface, &mut self.marker);
        remove_slot(surface, &mut self.trail);
    }

    pub fn clear_all(&mut self, surface: &mut dyn DrawingSurface) {
        self.clear_static(surface);
        self.clear_animation(surface);
    }

    // ── Statische Anzeige ───────────────────────────────────────────

    pub fn draw_single_point(
        &mut self,
        surface: &mut dyn DrawingSurface,
        pos: DVec2,
        options: &ViewerOptions,
    ) {
        remove_slot(surface, &mut self.single_point);
        let style = options.point_style(options.point_outline_color);
        self.single_point = Some(surface.draw_oval(pos, &style));
    }

    /// Skelett der statischen Anzeige: Kontrollpolygon mit Punkten,
    /// optional die Mittelpunkte der ersten Subdivisions-Ebene.
    pub fn draw_skeleton(
        &mut self,
        surface: &mut dyn DrawingSurface,
        construction: &Construction,
        options: &ViewerOptions,
    ) {
        let dim = construction.dim();
        if let Some(level) = construction.level(0) {
            self.draw_level(surface, &level_xy(level, dim), 0, options, true);
        }
        if options.show_skeleton_midpoints {
            if let Some(level) = construction.level(1) {
                self.draw_level(surface, &level_xy(level, dim), 1, options, false);
            }
        }
    }

    pub fn draw_curve(
        &mut self,
        surface: &mut dyn DrawingSurface,
        samples: &[DVec2],
        options: &ViewerOptions,
    ) {
        remove_slot(surface, &mut self.curve);
        self.curve = Some(surface.draw_line(samples, &options.curve_style()));
    }

    // ── Animation ───────────────────────────────────────────────────

    /// Alle Ebenen mit mindestens zwei Punkten als Linienzug plus Punkte.
    /// Der voll reduzierte Punkt wird als Marker separat gezeichnet.
    pub fn draw_construction(
        &mut self,
        surface: &mut dyn DrawingSurface,
        construction: &Construction,
        options: &ViewerOptions,
    ) {
        let dim = construction.dim();
        for (depth, level) in construction.levels().enumerate() {
            if level.len() < 2 * dim {
                continue;
            }
            self.draw_level(surface, &level_xy(level, dim), depth, options, true);
        }
    }

    pub fn update_marker(
        &mut self,
        surface: &mut dyn DrawingSurface,
        pos: DVec2,
        options: &ViewerOptions,
    ) {
        match self.marker {
            Some(handle) => surface.update_oval(handle, pos),
            None => {
                let style = options.point_style(options.point_outline_color);
                self.marker = Some(surface.draw_oval(pos, &style));
            }
        }
    }

    /// Aktualisiert die Spur; gezeichnet wird ab zwei Punkten.
    pub fn update_trail(
        &mut self,
        surface: &mut dyn DrawingSurface,
        trail: &[DVec2],
        options: &ViewerOptions,
    ) {
        if trail.len() < 2 {
            return;
        }
        match self.trail {
            Some(handle) => surface.update_line(handle, trail),
            None => self.trail = Some(surface.draw_line(trail, &options.curve_style())),
        }
    }

    fn draw_level(
        &mut self,
        surface: &mut dyn DrawingSurface,
        points: &[DVec2],
        depth: usize,
        options: &ViewerOptions,
        with_line: bool,
    ) {
        if with_line && points.len() >= 2 {
            let style = options.construction_style(depth);
            self.construction.push(surface.draw_line(points, &style));
        }
        let oval = options.point_style(options.skeleton_color);
        for &point in points {
            self.construction.push(surface.draw_oval(point, &oval));
        }
    }
}

fn remove_slot(surface: &mut dyn DrawingSurface, slot: &mut Option<ShapeHandle>) {
    if let Some(handle) = slot.take() {
        surface.remove(handle);
    }
}

/// Projiziert eine flache Ebene auf Screen-Punkte (x, y).
pub fn level_xy(flat: &[f64], dim: usize) -> Vec<DVec2> {
    flat.chunks_exact(dim)
        .map(|p| DVec2::new(p[0], p.get(1).copied().unwrap_or(0.0)))
        .collect()
}
