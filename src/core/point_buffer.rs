//! Flacher Punktpuffer fester Dimension.
//!
//! Ein `PointBuffer` speichert `count` Punkte mit je `dim` Koordinaten
//! hintereinander: `[x0, y0, x1, y1, …]` bei `dim = 2`. Derselbe Typ dient
//! als Kontrollpunkt-Folge, abgetastete Kurve und Subdivisions-Ebene.

use super::error::{CurveError, CurveResult};
use glam::DVec2;

/// Geordnete Punktfolge mit einheitlicher Dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct PointBuffer {
    dim: usize,
    coords: Vec<f64>,
}

impl PointBuffer {
    /// Erstellt einen leeren Puffer der Dimension `dim`.
    pub fn new(dim: usize) -> CurveResult<Self> {
        if dim == 0 {
            return Err(CurveError::ZeroDimension);
        }
        Ok(Self {
            dim,
            coords: Vec::new(),
        })
    }

    /// Leerer 2D-Puffer.
    pub fn planar() -> Self {
        Self {
            dim: 2,
            coords: Vec::new(),
        }
    }

    /// Erstellt einen leeren Puffer mit reservierter Kapazität für `points` Punkte.
    pub fn with_capacity(dim: usize, points: usize) -> CurveResult<Self> {
        let mut buffer = Self::new(dim)?;
        buffer.coords.reserve(points * dim);
        Ok(buffer)
    }

    /// Übernimmt eine flache Koordinatenliste.
    ///
    /// Die Länge muss ein Vielfaches von `dim` sein.
    pub fn from_flat(coords: Vec<f64>, dim: usize) -> CurveResult<Self> {
        if dim == 0 {
            return Err(CurveError::ZeroDimension);
        }
        if coords.len() % dim != 0 {
            return Err(CurveError::RaggedBuffer {
                len: coords.len(),
                dim,
            });
        }
        Ok(Self { dim, coords })
    }

    /// Baut einen Puffer aus einzelnen Koordinaten-Tupeln.
    ///
    /// Die Dimension wird vom ersten Punkt übernommen; jeder weitere Punkt
    /// muss dieselbe Länge haben.
    pub fn from_points<P: AsRef<[f64]>>(points: &[P]) -> CurveResult<Self> {
        let Some(first) = points.first() else {
            return Err(CurveError::InsufficientPoints {
                required: 1,
                found: 0,
            });
        };
        let dim = first.as_ref().len();
        let mut buffer = Self::with_capacity(dim, points.len())?;
        for (index, point) in points.iter().enumerate() {
            let point = point.as_ref();
            if point.len() != dim {
                return Err(CurveError::DimensionMismatch {
                    index,
                    expected: dim,
                    found: point.len(),
                });
            }
            buffer.coords.extend_from_slice(point);
        }
        Ok(buffer)
    }

    /// Dimension d der Punkte.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        if self.dim == 0 {
            0
        } else {
            self.coords.len() / self.dim
        }
    }

    /// `true` wenn keine Punkte enthalten sind.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Kurvengrad n = Punktanzahl − 1 (`None` bei leerem Puffer).
    pub fn degree(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// Koordinaten des Punkts `index`.
    pub fn point(&self, index: usize) -> Option<&[f64]> {
        let start = index.checked_mul(self.dim)?;
        self.coords.get(start..start + self.dim)
    }

    /// Erster Punkt der Folge.
    pub fn first(&self) -> Option<&[f64]> {
        self.point(0)
    }

    /// Letzter Punkt der Folge.
    pub fn last(&self) -> Option<&[f64]> {
        self.len().checked_sub(1).and_then(|i| self.point(i))
    }

    /// Iteriert über alle Punkte in Reihenfolge.
    pub fn iter(&self) -> std::slice::ChunksExact<'_, f64> {
        self.coords.chunks_exact(self.dim.max(1))
    }

    /// Flache Sicht auf alle Koordinaten.
    pub fn as_flat(&self) -> &[f64] {
        &self.coords
    }

    /// Gibt die flache Koordinatenliste zurück.
    pub fn into_flat(self) -> Vec<f64> {
        self.coords
    }

    /// Hängt einen Punkt an. Die Länge muss `dim` entsprechen.
    pub fn push(&mut self, point: &[f64]) -> CurveResult<()> {
        if point.len() != self.dim {
            return Err(CurveError::DimensionMismatch {
                index: self.len(),
                expected: self.dim,
                found: point.len(),
            });
        }
        self.coords.extend_from_slice(point);
        Ok(())
    }

    /// Mutable Sicht auf die Koordinaten des Punkts `index`.
    pub fn point_mut(&mut self, index: usize) -> Option<&mut [f64]> {
        let start = index.checked_mul(self.dim)?;
        self.coords.get_mut(start..start + self.dim)
    }

    /// Entfernt den Punkt `index`; nachfolgende Punkte rücken um eins nach vorn.
    pub fn remove(&mut self, index: usize) -> Option<Vec<f64>> {
        if index >= self.len() {
            return None;
        }
        let start = index * self.dim;
        Some(self.coords.drain(start..start + self.dim).collect())
    }

    /// Entfernt alle Punkte (Dimension bleibt erhalten).
    pub fn clear(&mut self) {
        self.coords.clear();
    }

    /// Projiziert Punkt `index` auf seine ersten beiden Koordinaten.
    ///
    /// Bei `dim = 1` wird y = 0 angenommen.
    pub fn xy(&self, index: usize) -> Option<DVec2> {
        let point = self.point(index)?;
        Some(DVec2::new(point[0], point.get(1).copied().unwrap_or(0.0)))
    }

    /// Alle Punkte als 2D-Projektion (für Zeichenoberflächen).
    pub fn to_xy(&self) -> Vec<DVec2> {
        self.iter()
            .map(|p| DVec2::new(p[0], p.get(1).copied().unwrap_or(0.0)))
            .collect()
    }

    /// Verschiebt alle Punkte komponentenweise um `offset`.
    ///
    /// Überzählige Komponenten von `offset` werden ignoriert, fehlende als 0 behandelt.
    pub fn translate(&mut self, offset: &[f64]) {
        let dim = self.dim;
        for point in self.coords.chunks_exact_mut(dim) {
            for (value, delta) in point.iter_mut().zip(offset) {
                *value += delta;
            }
        }
    }
}

impl Default for PointBuffer {
    /// Leerer 2D-Puffer, siehe [`PointBuffer::planar`].
    fn default() -> Self {
        Self::planar()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_detects_dimension_mismatch() {
        let result = PointBuffer::from_points(&[vec![0.0, 0.0], vec![1.0, 2.0, 3.0]]);
        assert_eq!(
            result,
            Err(CurveError::DimensionMismatch {
                index: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_from_flat_rejects_ragged_length() {
        assert_eq!(
            PointBuffer::from_flat(vec![1.0, 2.0, 3.0], 2),
            Err(CurveError::RaggedBuffer { len: 3, dim: 2 })
        );
        assert_eq!(
            PointBuffer::from_flat(vec![], 0),
            Err(CurveError::ZeroDimension)
        );
    }

    #[test]
    fn test_point_access_and_remove_shift() {
        let mut buffer =
            PointBuffer::from_flat(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0], 2).expect("gültiger Puffer");
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.degree(), Some(2));
        assert_eq!(buffer.point(1), Some(&[2.0, 3.0][..]));
        assert_eq!(buffer.point(3), None);

        assert_eq!(buffer.remove(0), Some(vec![0.0, 1.0]));
        assert_eq!(buffer.point(0), Some(&[2.0, 3.0][..]));
        assert_eq!(buffer.last(), Some(&[4.0, 5.0][..]));
        assert_eq!(buffer.remove(5), None);
    }

    #[test]
    fn test_xy_projection_of_3d_points() {
        let buffer = PointBuffer::from_points(&[[1.0, 2.0, 9.0], [3.0, 4.0, 9.0]])
            .expect("gültiger Puffer");
        assert_eq!(
            buffer.to_xy(),
            vec![DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0)]
        );
    }

    #[test]
    fn test_default_is_planar_and_translatable() {
        let mut buffer = PointBuffer::default();
        assert_eq!(buffer.dim(), 2);
        assert!(buffer.is_empty());
        buffer.push(&[1.0, 2.0]).expect("2D-Punkt");
        buffer.translate(&[10.0, -2.0]);
        assert_eq!(buffer.point(0), Some(&[11.0, 0.0][..]));
    }
}
