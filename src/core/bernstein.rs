//! Direkte Kurvenauswertung über die Bernstein-Form.
//!
//! B(t) = Σ C(n,k) · (1−t)^(n−k) · t^k · P_k, für beliebige Dimension und Punktanzahl.

use super::error::{CurveError, CurveResult};
use super::point_buffer::PointBuffer;

/// Abtastschritte pro Kurvengrad, wenn keine Schrittzahl angegeben ist.
pub const DEFAULT_STEPS_PER_DEGREE: usize = 10;

/// Binomialkoeffizient C(n, k).
///
/// Wird multiplikativ in `u128` berechnet (`C·(n−i)/(i+1)` ist nach jedem
/// Schritt ganzzahlig). Erst wenn ein Zwischenprodukt `u128` überlaufen würde,
/// laufen die restlichen Faktoren in `f64` weiter.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut exact: u128 = 1;
    for i in 0..k {
        let factor = (n - i) as u128;
        match exact.checked_mul(factor) {
            Some(product) => exact = product / (i as u128 + 1),
            None => {
                let mut approx = exact as f64;
                for j in i..k {
                    approx = approx * (n - j) as f64 / (j + 1) as f64;
                }
                return approx;
            }
        }
    }
    exact as f64
}

/// Natürlicher Logarithmus von C(n, k), endlich auch wo `binomial` nach `inf` läuft.
pub fn ln_binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    let k = k.min(n - k);
    (0..k)
        .map(|i| ((n - i) as f64).ln() - ((i + 1) as f64).ln())
        .sum()
}

/// Bernstein-Basisgewicht `C(n,k) · (1−t)^(n−k) · t^k` aus vorberechnetem Koeffizienten.
///
/// Ist `C(n,k)` in f64 nicht mehr darstellbar, wird im Log-Raum gerechnet;
/// `inf · 0` würde sonst NaN liefern.
fn weight(coefficient: f64, ln_coefficient: f64, n: usize, k: usize, t: f64) -> f64 {
    if coefficient.is_finite() {
        return coefficient * (1.0 - t).powi((n - k) as i32) * t.powi(k as i32);
    }
    // Faktoren mit Exponent 0 auslassen: 0 · ln(0) wäre NaN
    let mut ln_weight = ln_coefficient;
    if n > k {
        ln_weight += (n - k) as f64 * (1.0 - t).ln();
    }
    if k > 0 {
        ln_weight += k as f64 * t.ln();
    }
    ln_weight.exp()
}

/// Standard-Schrittzahl für einen Kurvengrad (`10 · n`).
pub fn default_steps(degree: usize) -> usize {
    degree * DEFAULT_STEPS_PER_DEGREE
}

/// Tastet die Bézier-Kurve der Kontrollpunkte in `steps` gleichmäßigen
/// Parameterschritten ab (`t = i / (steps − 1)`).
///
/// Ohne `steps` wird `10 · n` verwendet. Der erste Abtastpunkt entspricht
/// exakt dem ersten, der letzte exakt dem letzten Kontrollpunkt.
pub fn evaluate(points: &PointBuffer, steps: Option<usize>) -> CurveResult<PointBuffer> {
    let count = points.len();
    if count < 2 {
        return Err(CurveError::InsufficientPoints {
            required: 2,
            found: count,
        });
    }
    let n = count - 1;
    let steps = steps.unwrap_or_else(|| default_steps(n));
    if steps < 2 {
        return Err(CurveError::InvalidStep { steps });
    }

    let dim = points.dim();
    let coefficients: Vec<(f64, f64)> = (0..=n)
        .map(|k| (binomial(n, k), ln_binomial(n, k)))
        .collect();
    let mut curve = PointBuffer::with_capacity(dim, steps)?;
    let mut sample = vec![0.0; dim];
    let last_step = (steps - 1) as f64;

    for i in 0..steps {
        // Endpunkte exakt übernehmen
        let endpoint = match i {
            0 => points.first(),
            _ if i == steps - 1 => points.last(),
            _ => None,
        };
        if let Some(endpoint) = endpoint {
            curve.push(endpoint)?;
            continue;
        }

        let t = i as f64 / last_step;
        sample.iter_mut().for_each(|v| *v = 0.0);
        for (k, (control, &(coefficient, ln_coefficient))) in
            points.iter().zip(&coefficients).enumerate()
        {
            let w = weight(coefficient, ln_coefficient, n, k, t);
            for (acc, coord) in sample.iter_mut().zip(control) {
                *acc += coord * w;
            }
        }
        curve.push(&sample)?;
    }

    Ok(curve)
}

/// Variante von [`evaluate`] auf einer flachen Koordinatenliste.
///
/// Liefert `steps · dim` Werte.
pub fn evaluate_flat(flat_points: &[f64], dim: usize, steps: Option<usize>) -> CurveResult<Vec<f64>> {
    let points = PointBuffer::from_flat(flat_points.to_vec(), dim)?;
    Ok(evaluate(&points, steps)?.into_flat())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_binomial_small_values() {
        assert_eq!(binomial(0, 0), 1.0);
        assert_eq!(binomial(3, 0), 1.0);
        assert_eq!(binomial(3, 1), 3.0);
        assert_eq!(binomial(3, 2), 3.0);
        assert_eq!(binomial(6, 3), 20.0);
        assert_eq!(binomial(3, 4), 0.0);
    }

    #[test]
    fn test_binomial_large_degree_stays_exact() {
        // C(60, 30) = 118264581564861424, jenseits der exakten f64-Fakultätsquotienten
        assert_eq!(binomial(60, 30), 118_264_581_564_861_424u128 as f64);
        // Überlauf-Pfad läuft in f64 weiter
        let huge = binomial(200, 100);
        assert!(huge.is_finite());
        assert_relative_eq!(huge, 9.054_851_465_610_328e58, max_relative = 1e-9);
    }

    #[test]
    fn test_basis_weights_sum_to_one() {
        for &t in &[0.0, 0.25, 0.5, 0.9, 1.0] {
            let sum: f64 = (0..=5)
                .map(|k| weight(binomial(5, k), ln_binomial(5, k), 5, k, t))
                .sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_default_steps_is_ten_per_degree() {
        let points = PointBuffer::from_points(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]])
            .expect("gültiger Puffer");
        let curve = evaluate(&points, None).expect("Auswertung");
        assert_eq!(curve.len(), 20);
    }

    #[test]
    fn test_rejects_too_few_steps_and_points() {
        let points =
            PointBuffer::from_points(&[[0.0, 0.0], [1.0, 1.0]]).expect("gültiger Puffer");
        assert_eq!(
            evaluate(&points, Some(1)),
            Err(CurveError::InvalidStep { steps: 1 })
        );

        let single = PointBuffer::from_points(&[[0.0, 0.0]]).expect("gültiger Puffer");
        assert_eq!(
            evaluate(&single, Some(10)),
            Err(CurveError::InsufficientPoints {
                required: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_evaluate_flat_rejects_ragged_input() {
        assert_eq!(
            evaluate_flat(&[0.0, 1.0, 2.0], 2, Some(4)),
            Err(CurveError::RaggedBuffer { len: 3, dim: 2 })
        );
    }

    #[test]
    fn test_huge_degree_stays_finite_with_exact_endpoints() {
        // C(1100, 550) sprengt f64; die Auswertung muss trotzdem endlich bleiben
        let flat: Vec<f64> = (0..1101).flat_map(|i| [i as f64, (i % 3) as f64]).collect();
        let points = PointBuffer::from_flat(flat, 2).expect("gültiger Puffer");
        assert!(binomial(1100, 550).is_infinite());

        let curve = evaluate(&points, Some(3)).expect("Auswertung");
        assert_eq!(curve.first(), points.first());
        assert_eq!(curve.last(), points.last());
        let mid = curve.point(1).expect("Mittelpunkt");
        assert!(mid.iter().all(|v| v.is_finite()));
        // Symmetrische Gewichte bei t = 0.5: x liegt in der Mitte
        assert_relative_eq!(mid[0], 550.0, max_relative = 1e-6);
    }

    #[test]
    fn test_log_space_weight_matches_direct_weight() {
        for &t in &[0.1, 0.5, 0.8] {
            for k in 0..=30 {
                let direct = weight(binomial(30, k), ln_binomial(30, k), 30, k, t);
                let logspace = weight(f64::INFINITY, ln_binomial(30, k), 30, k, t);
                assert_relative_eq!(direct, logspace, max_relative = 1e-9);
            }
        }
    }
}
