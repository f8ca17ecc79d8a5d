use super::ViewState;
use crate::app::scheduler::TickScheduler;
use crate::app::visuals::VisualLayer;
use crate::app::CommandLog;
use crate::core::{AnimationDriver, ControlPointSet};
use crate::shared::ViewerOptions;
use clap::ValueEnum;
use std::fmt;

/// Anzeigemodus einer Sitzung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewMode {
    /// Statische Kurve plus Skelett der ersten Ebene
    #[default]
    Show,
    /// De-Casteljau-Konstruktion bis zum Ende animieren
    Animate,
    /// Interaktiv bearbeiten, Anzeige alle 100 ms neu ableiten
    Play,
}

impl ViewMode {
    /// Gibt `true` zurück, wenn Pointer-Eingaben Punkte verändern dürfen.
    pub fn accepts_edits(self) -> bool {
        self == ViewMode::Play
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::Show => "show",
            ViewMode::Animate => "animate",
            ViewMode::Play => "play",
        };
        f.write_str(name)
    }
}

/// Zustand der statischen Anzeige, abgeleitet aus der Punktanzahl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPhase {
    /// Keine Punkte, nichts gezeichnet
    #[default]
    Empty,
    /// Genau ein Punkt als Oval
    SinglePoint,
    /// Mindestens zwei Punkte: Skelett und Kurve
    Curve,
}

impl DisplayPhase {
    pub fn for_point_count(count: usize) -> Self {
        match count {
            0 => DisplayPhase::Empty,
            1 => DisplayPhase::SinglePoint,
            _ => DisplayPhase::Curve,
        }
    }
}

/// Timer von Animation und Play-Schleife
#[derive(Debug, Clone, Copy, Default)]
pub struct Timers {
    pub animation: TickScheduler,
    pub play: TickScheduler,
}

impl Timers {
    /// Frühester fälliger Zeitpunkt beider Timer als Restzeit.
    pub fn time_until_next(&self, now: std::time::Instant) -> Option<std::time::Duration> {
        match (
            self.animation.time_until_due(now),
            self.play.time_until_due(now),
        ) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn cancel_all(&mut self) {
        self.animation.cancel();
        self.play.cancel();
    }
}

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Aktueller Anzeigemodus
    pub mode: ViewMode,
    /// Kontrollpunkte in Canvas-Koordinaten
    pub control_points: ControlPointSet,
    /// Index des aktuell gezogenen Punkts
    pub grabbed_point: Option<usize>,
    /// Zustand der statischen Anzeige
    pub display: DisplayPhase,
    /// Laufende oder abgeschlossene Animation
    pub animation: Option<AnimationDriver>,
    /// Handles aller gezeichneten Formen
    pub visuals: VisualLayer,
    pub timers: Timers,
    pub view: ViewState,
    /// Laufzeit-Optionen (Farben, Breiten, Timing)
    pub options: ViewerOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren App-State mit Standardoptionen.
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen.
    pub fn with_options(options: ViewerOptions) -> Self {
        Self {
            mode: ViewMode::default(),
            control_points: ControlPointSet::default().with_tolerance(options.hit_tolerance),
            grabbed_point: None,
            display: DisplayPhase::Empty,
            animation: None,
            visuals: VisualLayer::new(),
            timers: Timers::default(),
            view: ViewState::new(options.canvas_width, options.canvas_height),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    pub fn point_count(&self) -> usize {
        self.control_points.len()
    }

    /// Gibt `true` zurück, solange eine Animation nicht terminal ist.
    pub fn is_animating(&self) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|driver| !driver.is_terminal())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_parses_case_insensitive() {
        assert_eq!(ViewMode::from_str("Animate", true), Ok(ViewMode::Animate));
        assert_eq!(ViewMode::from_str("play", false), Ok(ViewMode::Play));
        assert!(ViewMode::from_str("zoom", true).is_err());
        // Display und Kommandozeilen-Name stimmen überein
        for mode in ViewMode::value_variants() {
            assert_eq!(ViewMode::from_str(&mode.to_string(), false), Ok(*mode));
        }
    }

    #[test]
    fn test_display_phase_for_point_count() {
        assert_eq!(DisplayPhase::for_point_count(0), DisplayPhase::Empty);
        assert_eq!(DisplayPhase::for_point_count(1), DisplayPhase::SinglePoint);
        assert_eq!(DisplayPhase::for_point_count(5), DisplayPhase::Curve);
    }
}
