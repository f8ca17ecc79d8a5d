//! Malt eine `RetainedScene` mit dem egui-Painter.

use crate::shared::{LineStyle, OvalStyle, RetainedScene, Rgba, SceneShape};
use egui::{Color32, Pos2, Shape, Stroke};
use glam::DVec2;

/// Malt alle Formen der Szene in Erstellungsreihenfolge auf `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, background: Rgba, scene: &RetainedScene) {
    painter.rect_filled(rect, 0.0, to_color(background));

    let origin = rect.min;
    for (_, shape) in scene.shapes() {
        match shape {
            SceneShape::Line { points, style } => paint_line(painter, origin, points, style),
            SceneShape::Oval { center, style } => paint_oval(painter, origin, *center, style),
        }
    }
}

fn paint_line(painter: &egui::Painter, origin: Pos2, points: &[DVec2], style: &LineStyle) {
    if points.len() < 2 {
        return;
    }
    let path: Vec<Pos2> = points.iter().map(|p| to_screen(origin, *p)).collect();
    let stroke = Stroke::new(style.width, to_color(style.color));
    match style.dash {
        Some(dash) => painter.extend(Shape::dashed_line(&path, stroke, dash.dash, dash.gap)),
        None => {
            painter.add(Shape::line(path, stroke));
        }
    }
}

fn paint_oval(painter: &egui::Painter, origin: Pos2, center: DVec2, style: &OvalStyle) {
    painter.circle(
        to_screen(origin, center),
        style.radius,
        to_color(style.fill),
        Stroke::new(style.outline_width, to_color(style.outline)),
    );
}

fn to_screen(origin: Pos2, p: DVec2) -> Pos2 {
    origin + egui::vec2(p.x as f32, p.y as f32)
}

fn to_color(c: Rgba) -> Color32 {
    Color32::from(egui::Rgba::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
}
