//! Core-Domäne: Punktpuffer, Bernstein-Auswertung, De-Casteljau-Subdivision,
//! Kontrollpunkt-Menge und Animations-Treiber.
//!
//! Reine Berechnungen ohne UI- oder Zeichen-Abhängigkeiten.

pub mod animation;
pub mod bernstein;
pub mod bounds;
pub mod control_points;
pub mod de_casteljau;
pub mod error;
pub mod point_buffer;

pub use animation::{AnimationDriver, AnimationFrame, AnimationPhase, AnimationState, ANIMATION_STEP};
pub use bernstein::{binomial, evaluate, evaluate_flat};
pub use bounds::{fit_canvas, Bounds, CanvasFit, CANVAS_MARGIN};
pub use control_points::{AddOutcome, ControlPointSet, HIT_TOLERANCE};
pub use de_casteljau::{reduce_fully, reduce_once, Construction, SKELETON_RATIO};
pub use error::{CurveError, CurveResult};
pub use point_buffer::PointBuffer;
