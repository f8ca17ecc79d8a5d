//! Bounding-Box und Canvas-Anpassung für vorgegebene Startpunkte.

use super::point_buffer::PointBuffer;
use glam::DVec2;

/// Relativer Rand um die Punkt-Ausdehnung bei der Canvas-Anpassung.
pub const CANVAS_MARGIN: f64 = 0.1;

/// Achsenparallele Box über alle Dimensionen.
///
/// Minimum und Maximum starten am Ursprung: eine Box enthält immer (0, …, 0).
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}

impl Bounds {
    /// Box um alle Punkte inklusive Ursprung.
    pub fn including_origin(points: &PointBuffer) -> Self {
        let dim = points.dim();
        let mut min = vec![0.0; dim];
        let mut max = vec![0.0; dim];
        for point in points.iter() {
            for (d, &value) in point.iter().enumerate() {
                min[d] = f64::min(min[d], value);
                max[d] = f64::max(max[d], value);
            }
        }
        Self { min, max }
    }

    /// Ausdehnung je Dimension.
    pub fn extent(&self) -> Vec<f64> {
        self.max.iter().zip(&self.min).map(|(hi, lo)| hi - lo).collect()
    }
}

/// Ergebnis der Canvas-Anpassung.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasFit {
    /// Canvas-Größe (x/y-Ausdehnung plus Rand)
    pub size: DVec2,
    /// Verschiebung, die negative Minima in den sichtbaren Bereich holt
    pub offset: Vec<f64>,
}

/// Berechnet Canvas-Größe und Verschiebung für die Punkte.
///
/// Gibt `None` zurück, wenn die Punkte keine Fläche aufspannen
/// (leer, weniger als 2 Dimensionen oder Ausdehnung 0).
pub fn fit_canvas(points: &PointBuffer, margin: f64) -> Option<CanvasFit> {
    if points.is_empty() || points.dim() < 2 {
        return None;
    }
    let bounds = Bounds::including_origin(points);
    let extent = bounds.extent();
    let size = DVec2::new(extent[0], extent[1]) * (1.0 + margin);
    if size.x <= 0.0 || size.y <= 0.0 {
        return None;
    }
    Some(CanvasFit {
        size,
        offset: bounds.min.iter().map(|m| -m).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_positive_points_keeps_origin() {
        let points = PointBuffer::from_points(&[[50.0, 350.0], [450.0, 100.0]]).expect("gültig");
        let fit = fit_canvas(&points, CANVAS_MARGIN).expect("Fläche vorhanden");
        assert_relative_eq!(fit.size.x, 495.0, epsilon = 1e-9);
        assert_relative_eq!(fit.size.y, 385.0, epsilon = 1e-9);
        assert_eq!(fit.offset, vec![0.0, 0.0]);
    }

    #[test]
    fn test_fit_moves_negative_minimum_into_view() {
        let points = PointBuffer::from_points(&[[-100.0, 20.0], [100.0, 80.0]]).expect("gültig");
        let fit = fit_canvas(&points, 0.0).expect("Fläche vorhanden");
        assert_eq!(fit.size, DVec2::new(200.0, 80.0));
        assert_eq!(fit.offset, vec![100.0, 0.0]);
    }

    #[test]
    fn test_fit_degenerate_returns_none() {
        let points = PointBuffer::from_points(&[[10.0, 0.0]]).expect("gültig");
        assert!(fit_canvas(&points, CANVAS_MARGIN).is_none());
    }
}
