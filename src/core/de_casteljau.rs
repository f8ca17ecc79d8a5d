//! De-Casteljau-Subdivision: schrittweise Reduktion benachbarter Punktpaare.
//!
//! Blend-Konvention: aus `(start, end)` entsteht `start·ratio + end·(1−ratio)`.
//! `ratio = 0` liefert also `end`, `ratio = 1` liefert `start`, umgekehrt zum
//! üblichen Kurvenparameter t. Die Animation nähert sich damit bei steigendem
//! Ratio dem ersten Kontrollpunkt.

use super::error::{CurveError, CurveResult};
use super::point_buffer::PointBuffer;

/// Ratio für das statische Mittelpunkt-Skelett.
pub const SKELETON_RATIO: f64 = 0.5;

/// Reduziert `src` (Punkte der Dimension `dim`) um eine Ebene in `dst`.
///
/// `dst` wird geleert und wiederverwendet.
fn reduce_into(src: &[f64], dim: usize, ratio: f64, dst: &mut Vec<f64>) {
    dst.clear();
    let count = src.len() / dim;
    if count < 2 {
        dst.extend_from_slice(src);
        return;
    }
    let inv = 1.0 - ratio;
    for pair in 0..count - 1 {
        let start = &src[pair * dim..(pair + 1) * dim];
        let end = &src[(pair + 1) * dim..(pair + 2) * dim];
        dst.extend(start.iter().zip(end).map(|(s, e)| s * ratio + e * inv));
    }
}

/// Eine Subdivisions-Ebene weiter: n+1 Punkte → n Punkte.
///
/// Bei weniger als 2 Punkten wird die Eingabe unverändert zurückgegeben.
pub fn reduce_once(level: &PointBuffer, ratio: f64) -> PointBuffer {
    if level.len() < 2 {
        return level.clone();
    }
    let mut next = Vec::with_capacity((level.len() - 1) * level.dim());
    reduce_into(level.as_flat(), level.dim(), ratio, &mut next);
    PointBuffer::from_flat(next, level.dim()).unwrap_or_else(|_| level.clone())
}

/// Vollständige Reduktion bis auf einen Punkt (Kurvenpunkt zum Ratio).
///
/// Iterativ über zwei wiederverwendete Puffer; Tiefe = Punktanzahl − 1.
pub fn reduce_fully(points: &PointBuffer, ratio: f64) -> CurveResult<Vec<f64>> {
    if points.is_empty() {
        return Err(CurveError::InsufficientPoints {
            required: 1,
            found: 0,
        });
    }
    let dim = points.dim();
    let mut current = points.as_flat().to_vec();
    let mut next = Vec::with_capacity(current.len());
    while current.len() > dim {
        reduce_into(&current, dim, ratio, &mut next);
        std::mem::swap(&mut current, &mut next);
    }
    Ok(current)
}

/// Alle Ebenen einer De-Casteljau-Konstruktion zu einem festen Ratio.
///
/// Die Ebenen liegen hintereinander in einem flachen Arena-Puffer;
/// Ebene k enthält `count − k` Punkte.
#[derive(Debug, Clone, PartialEq)]
pub struct Construction {
    dim: usize,
    ratio: f64,
    coords: Vec<f64>,
    /// Start-Offset (in Koordinaten) jeder Ebene in `coords`
    level_starts: Vec<usize>,
}

impl Construction {
    /// Baut die komplette Konstruktion von Ebene 0 (Kontrollpunkte) bis Ebene n (Kurvenpunkt).
    pub fn build(points: &PointBuffer, ratio: f64) -> CurveResult<Self> {
        Self::build_limited(points, ratio, usize::MAX)
    }

    /// Wie [`Construction::build`], aber höchstens `max_reductions` Reduktionsschritte.
    ///
    /// `max_reductions = 1` ergibt das einstufige Skelett (Kontrollpolygon + erste Ebene).
    pub fn build_limited(points: &PointBuffer, ratio: f64, max_reductions: usize) -> CurveResult<Self> {
        let count = points.len();
        if count == 0 {
            return Err(CurveError::InsufficientPoints {
                required: 1,
                found: 0,
            });
        }
        let dim = points.dim();
        let reductions = (count - 1).min(max_reductions);
        // Gesamtgröße: Σ (count − k) · dim für k = 0..=reductions
        let total_points: usize = (0..=reductions).map(|k| count - k).sum();
        let mut coords = Vec::with_capacity(total_points * dim);
        let mut level_starts = Vec::with_capacity(reductions + 1);

        level_starts.push(0);
        coords.extend_from_slice(points.as_flat());

        let mut scratch = Vec::with_capacity(points.as_flat().len());
        for _ in 0..reductions {
            let prev_start = *level_starts.last().unwrap_or(&0);
            reduce_into(&coords[prev_start..], dim, ratio, &mut scratch);
            level_starts.push(coords.len());
            coords.extend_from_slice(&scratch);
        }

        Ok(Self {
            dim,
            ratio,
            coords,
            level_starts,
        })
    }

    /// Dimension der Punkte.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Ratio, mit dem die Konstruktion gebaut wurde.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Anzahl der Ebenen (inkl. Ebene 0).
    pub fn depth_count(&self) -> usize {
        self.level_starts.len()
    }

    /// Flache Koordinaten der Ebene `depth`.
    pub fn level(&self, depth: usize) -> Option<&[f64]> {
        let start = *self.level_starts.get(depth)?;
        let end = self
            .level_starts
            .get(depth + 1)
            .copied()
            .unwrap_or(self.coords.len());
        Some(&self.coords[start..end])
    }

    /// Anzahl Punkte der Ebene `depth`.
    pub fn level_len(&self, depth: usize) -> usize {
        self.level(depth).map_or(0, |l| l.len() / self.dim)
    }

    /// Iteriert über alle Ebenen, beginnend bei den Kontrollpunkten.
    pub fn levels(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.depth_count()).filter_map(move |d| self.level(d))
    }

    /// Kurvenpunkt, falls die Konstruktion bis zu einem einzelnen Punkt reduziert wurde.
    pub fn curve_point(&self) -> Option<&[f64]> {
        let last = self.level(self.depth_count().checked_sub(1)?)?;
        (last.len() == self.dim).then_some(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cubic() -> PointBuffer {
        PointBuffer::from_points(&[[50.0, 350.0], [250.0, 100.0], [330.0, 350.0], [450.0, 100.0]])
            .expect("gültiger Puffer")
    }

    #[test]
    fn test_reduce_once_polarity() {
        let line = PointBuffer::from_points(&[[0.0, 0.0], [10.0, 20.0]]).expect("gültiger Puffer");
        assert_eq!(reduce_once(&line, 0.0).as_flat(), &[10.0, 20.0]);
        assert_eq!(reduce_once(&line, 1.0).as_flat(), &[0.0, 0.0]);
        assert_eq!(reduce_once(&line, 0.25).as_flat(), &[7.5, 15.0]);
    }

    #[test]
    fn test_reduce_once_is_noop_below_two_points() {
        let single = PointBuffer::from_points(&[[3.0, 4.0]]).expect("gültiger Puffer");
        assert_eq!(reduce_once(&single, 0.7), single);
    }

    #[test]
    fn test_reduce_fully_single_point_ignores_ratio() {
        let single = PointBuffer::from_points(&[[3.0, 4.0, 5.0]]).expect("gültiger Puffer");
        for &ratio in &[0.0, 0.3, 1.0] {
            assert_eq!(reduce_fully(&single, ratio).expect("Reduktion"), vec![3.0, 4.0, 5.0]);
        }
    }

    #[test]
    fn test_reduce_fully_empty_fails() {
        let empty = PointBuffer::new(2).expect("Dimension 2");
        assert!(matches!(
            reduce_fully(&empty, 0.5),
            Err(CurveError::InsufficientPoints { .. })
        ));
    }

    #[test]
    fn test_construction_level_lengths_shrink_by_one() {
        let construction = Construction::build(&cubic(), 0.4).expect("Konstruktion");
        assert_eq!(construction.depth_count(), 4);
        let lengths: Vec<usize> = (0..4).map(|d| construction.level_len(d)).collect();
        assert_eq!(lengths, vec![4, 3, 2, 1]);
        assert_eq!(construction.level(0), Some(cubic().as_flat()));
    }

    #[test]
    fn test_construction_curve_point_matches_reduce_fully() {
        let points = cubic();
        let construction = Construction::build(&points, 0.37).expect("Konstruktion");
        let direct = reduce_fully(&points, 0.37).expect("Reduktion");
        let point = construction.curve_point().expect("vollständig reduziert");
        assert_relative_eq!(point[0], direct[0], epsilon = 1e-12);
        assert_relative_eq!(point[1], direct[1], epsilon = 1e-12);
    }

    #[test]
    fn test_limited_construction_has_no_curve_point() {
        let construction = Construction::build_limited(&cubic(), SKELETON_RATIO, 1).expect("Skelett");
        assert_eq!(construction.depth_count(), 2);
        assert_eq!(construction.level_len(1), 3);
        assert!(construction.curve_point().is_none());
        // Mittelpunkte des Kontrollpolygons
        assert_eq!(construction.level(1).map(|l| &l[0..2]), Some(&[150.0, 225.0][..]));
    }
}
