//! Datei-Ein-/Ausgabe für Startpunkte.

pub mod points;

pub use points::{load_points_file, parse_points_json};
