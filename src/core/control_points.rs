//! Interaktiv bearbeitbare Kontrollpunkt-Menge.
//!
//! Identität eines Punkts ist seine Position in der Einfügereihenfolge.
//! Hit-Tests arbeiten in Screen-Koordinaten auf den ersten beiden Komponenten.

use super::error::CurveResult;
use super::point_buffer::PointBuffer;
use glam::DVec2;

/// Standard-Toleranz (je Achse) für Hit-Tests.
pub const HIT_TOLERANCE: f64 = 7.0;

/// Ergebnis von [`ControlPointSet::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Bestehender Punkt getroffen: Beginn eines Drags, kein neuer Punkt
    Grabbed(usize),
    /// Neuer Punkt am Ende angehängt
    Appended(usize),
}

/// Geordnete, veränderliche Liste der Kontrollpunkte.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPointSet {
    points: PointBuffer,
    tolerance: f64,
}

impl Default for ControlPointSet {
    /// Leere 2D-Menge.
    fn default() -> Self {
        Self::from_buffer(PointBuffer::planar())
    }
}

impl ControlPointSet {
    /// Leere Menge der Dimension `dim`.
    pub fn new(dim: usize) -> CurveResult<Self> {
        Ok(Self {
            points: PointBuffer::new(dim)?,
            tolerance: HIT_TOLERANCE,
        })
    }

    /// Vorbelegte Menge.
    pub fn from_buffer(points: PointBuffer) -> Self {
        Self {
            points,
            tolerance: HIT_TOLERANCE,
        }
    }

    /// Setzt die Hit-Test-Toleranz (je Achse).
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.points.dim()
    }

    /// Alle Punkte in Einfügereihenfolge.
    pub fn all(&self) -> &PointBuffer {
        &self.points
    }

    /// 2D-Position des Punkts `index`.
    pub fn position(&self, index: usize) -> Option<DVec2> {
        self.points.xy(index)
    }

    /// Erster Punkt (in Einfügereihenfolge), dessen x/y-Abstand zu `pos`
    /// auf beiden Achsen kleiner als die Toleranz ist.
    ///
    /// Überlappende Treffer werden zugunsten des früher eingefügten Punkts aufgelöst.
    pub fn hit_test(&self, pos: DVec2) -> Option<usize> {
        self.points.iter().position(|p| {
            let y = p.get(1).copied().unwrap_or(0.0);
            (pos.x - p[0]).abs() < self.tolerance && (pos.y - y).abs() < self.tolerance
        })
    }

    /// Greift einen bestehenden Punkt oder hängt einen neuen an.
    ///
    /// Bei `dim > 2` werden die übrigen Koordinaten des neuen Punkts mit 0 belegt.
    pub fn add(&mut self, pos: DVec2) -> AddOutcome {
        if let Some(index) = self.hit_test(pos) {
            return AddOutcome::Grabbed(index);
        }
        let mut point = vec![0.0; self.dim()];
        write_xy(&mut point, pos);
        let index = self.len();
        // Länge entspricht per Konstruktion der Dimension
        if let Err(e) = self.points.push(&point) {
            log::warn!("Kontrollpunkt konnte nicht angehängt werden: {}", e);
        }
        AddOutcome::Appended(index)
    }

    /// Überschreibt die x/y-Koordinaten des Punkts `index` an Ort und Stelle.
    ///
    /// Gibt `false` zurück, wenn der Index nicht existiert.
    pub fn move_to(&mut self, index: usize, pos: DVec2) -> bool {
        match self.points.point_mut(index) {
            Some(point) => {
                write_xy(point, pos);
                true
            }
            None => false,
        }
    }

    /// Entfernt den Punkt `index`; alle späteren Indizes rücken um eins nach.
    pub fn remove(&mut self, index: usize) -> Option<Vec<f64>> {
        self.points.remove(index)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

fn write_xy(point: &mut [f64], pos: DVec2) {
    if let Some(x) = point.get_mut(0) {
        *x = pos.x;
    }
    if let Some(y) = point.get_mut(1) {
        *y = pos.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with(points: &[[f64; 2]]) -> ControlPointSet {
        ControlPointSet::from_buffer(PointBuffer::from_points(points).expect("gültiger Puffer"))
    }

    #[test]
    fn test_add_appends_when_nothing_hit() {
        let mut set = ControlPointSet::new(2).expect("Dimension 2");
        assert_eq!(set.add(DVec2::new(10.0, 10.0)), AddOutcome::Appended(0));
        assert_eq!(set.add(DVec2::new(100.0, 10.0)), AddOutcome::Appended(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_add_on_existing_point_grabs_instead() {
        let mut set = set_with(&[[10.0, 10.0]]);
        assert_eq!(set.add(DVec2::new(14.0, 6.0)), AddOutcome::Grabbed(0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_hit_test_tolerance_is_strict() {
        let set = set_with(&[[0.0, 0.0]]);
        assert_eq!(set.hit_test(DVec2::new(6.9, -6.9)), Some(0));
        assert_eq!(set.hit_test(DVec2::new(7.0, 0.0)), None);
        assert_eq!(set.hit_test(DVec2::new(0.0, -7.5)), None);
    }

    #[test]
    fn test_hit_test_prefers_earliest_inserted() {
        // Beide Punkte liegen innerhalb der Toleranz, der zweite sogar näher
        let set = set_with(&[[0.0, 0.0], [4.0, 4.0]]);
        assert_eq!(set.hit_test(DVec2::new(4.0, 4.0)), Some(0));
    }

    #[test]
    fn test_move_to_overwrites_in_place() {
        let mut set = set_with(&[[0.0, 0.0], [50.0, 50.0]]);
        assert!(set.move_to(0, DVec2::new(20.0, 30.0)));
        assert_eq!(set.position(0), Some(DVec2::new(20.0, 30.0)));
        assert_eq!(set.position(1), Some(DVec2::new(50.0, 50.0)));
        assert!(!set.move_to(5, DVec2::ZERO));
    }

    #[test]
    fn test_remove_shifts_later_indices() {
        let mut set = set_with(&[[0.0, 0.0], [10.0, 0.0], [20.0, 0.0], [30.0, 0.0]]);
        assert_eq!(set.remove(1), Some(vec![10.0, 0.0]));
        assert_eq!(set.len(), 3);
        assert_eq!(set.position(0), Some(DVec2::new(0.0, 0.0)));
        assert_eq!(set.position(1), Some(DVec2::new(20.0, 0.0)));
        assert_eq!(set.position(2), Some(DVec2::new(30.0, 0.0)));
    }

    #[test]
    fn test_add_in_three_dimensions_zero_fills() {
        let mut set = ControlPointSet::new(3).expect("Dimension 3");
        set.add(DVec2::new(1.0, 2.0));
        assert_eq!(set.all().point(0), Some(&[1.0, 2.0, 0.0][..]));
    }
}
