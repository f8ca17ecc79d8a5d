//! Fehlertypen der Kurven-Mathematik.
//!
//! Alle Varianten sind lokale Vorbedingungsverletzungen: sie werden an der
//! aufrufenden Stelle erkannt und nie wiederholt.

use thiserror::Error;

/// Fehler bei Kurvenauswertung und Punktpuffer-Aufbau.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Weniger als 2 Abtastschritte angefordert (`t = i/(steps-1)` wäre undefiniert)
    #[error("invalid step count {steps}: at least 2 steps are required")]
    InvalidStep { steps: usize },

    /// Zu wenige Kontrollpunkte für die angeforderte Operation
    #[error("insufficient control points: {required} required, {found} supplied")]
    InsufficientPoints { required: usize, found: usize },

    /// Ein Punkt hat eine abweichende Anzahl Koordinaten
    #[error("dimension mismatch at point {index}: expected {expected} coordinates, found {found}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Flache Koordinatenliste ist kein Vielfaches der Dimension
    #[error("flat buffer of length {len} is not a multiple of dimension {dim}")]
    RaggedBuffer { len: usize, dim: usize },

    /// Dimension 0 ist nicht darstellbar
    #[error("dimension must be at least 1")]
    ZeroDimension,

    /// Ratio-Schritt der Animation ist nicht positiv oder nicht endlich
    #[error("invalid animation step {step}: must be a finite value greater than 0")]
    InvalidAnimationStep { step: f64 },
}

/// Ergebnis-Alias für Kurvenoperationen.
pub type CurveResult<T> = std::result::Result<T, CurveError>;
