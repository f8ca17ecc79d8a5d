//! Bézier-Ansicht Library.
//! Kurvenmathematik, Interaktions- und Animationszustand als Library
//! exportiert für Tests, Benchmarks und die egui-Binary.

pub mod app;
pub mod core;
pub mod io;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, DisplayPhase, ViewMode};
pub use core::{
    binomial, evaluate, evaluate_flat, fit_canvas, reduce_fully, reduce_once, AddOutcome,
    AnimationDriver, AnimationFrame, AnimationPhase, AnimationState, Construction,
    ControlPointSet, CurveError, CurveResult, PointBuffer,
};
pub use io::{load_points_file, parse_points_json};
pub use shared::{DrawingSurface, RetainedScene, ShapeHandle, ViewerOptions};
