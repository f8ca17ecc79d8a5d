//! Laden der Startpunkte aus JSON.
//!
//! Format: Array von Koordinaten-Arrays, z.B. `[[50, 350], [250, 100]]`.
//! Alle Punkte müssen dieselbe Dimension haben.

use crate::core::PointBuffer;
use anyhow::{Context, Result};
use std::path::Path;

/// Parst Startpunkte aus einem JSON-String.
///
/// Ein leeres Array ergibt einen leeren 2D-Puffer.
pub fn parse_points_json(content: &str) -> Result<PointBuffer> {
    let raw: Vec<Vec<f64>> =
        serde_json::from_str(content).context("Punkte-JSON ist kein Array von Zahlen-Arrays")?;
    if raw.is_empty() {
        return Ok(PointBuffer::planar());
    }
    let points = PointBuffer::from_points(&raw).context("Punkte-JSON ist ungültig")?;
    if let Some(index) = points
        .as_flat()
        .iter()
        .position(|value| !value.is_finite())
    {
        anyhow::bail!(
            "Punkt {} enthält eine nicht-endliche Koordinate",
            index / points.dim()
        );
    }
    Ok(points)
}

/// Lädt Startpunkte aus einer JSON-Datei.
pub fn load_points_file(path: &Path) -> Result<PointBuffer> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Punkte-Datei nicht lesbar: {}", path.display()))?;
    let points = parse_points_json(&content)
        .with_context(|| format!("Punkte-Datei fehlerhaft: {}", path.display()))?;
    log::info!(
        "{} Punkte (Dimension {}) geladen aus: {}",
        points.len(),
        points.dim(),
        path.display()
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CurveError;

    #[test]
    fn test_parse_planar_points() {
        let points = parse_points_json("[[50, 350], [250.5, 100]]").expect("gültig");
        assert_eq!(points.len(), 2);
        assert_eq!(points.dim(), 2);
        assert_eq!(points.point(1), Some(&[250.5, 100.0][..]));
    }

    #[test]
    fn test_parse_empty_array_gives_empty_buffer() {
        let points = parse_points_json("[]").expect("gültig");
        assert!(points.is_empty());
        assert_eq!(points.dim(), 2);
    }

    #[test]
    fn test_ragged_points_report_dimension_mismatch() {
        let err = parse_points_json("[[1, 2], [3, 4, 5]]").expect_err("ungleiche Längen");
        let curve_error = err
            .downcast_ref::<CurveError>()
            .expect("CurveError in der Fehlerkette");
        assert_eq!(
            *curve_error,
            CurveError::DimensionMismatch {
                index: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(parse_points_json("{\"x\": 1}").is_err());
        assert!(parse_points_json("[[1, \"a\"]]").is_err());
    }
}
