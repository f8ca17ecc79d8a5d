//! Animations-Treiber für die schrittweise De-Casteljau-Konstruktion.
//!
//! Jeder Tick erhöht das Ratio um einen festen Schritt, reduziert die
//! Kontrollpunkte vollständig und hängt den Kurvenpunkt an die Spur an.
//! Sobald das Ratio 1 überschreitet, ist der Treiber terminal.

use super::de_casteljau::Construction;
use super::error::{CurveError, CurveResult};
use super::point_buffer::PointBuffer;

/// Ratio-Zuwachs pro Tick.
pub const ANIMATION_STEP: f64 = 0.003;

/// Zustand des Treibers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    /// Weitere Ticks erlaubt
    #[default]
    Running,
    /// Ratio > 1 erreicht, keine weiteren Ticks
    Terminal,
}

/// Beobachtbarer Animationszustand.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    /// Aktuelles Ratio (monoton steigend)
    pub ratio: f64,
    /// Bereits erzeugte Kurvenpunkte in Emissionsreihenfolge
    pub trail: PointBuffer,
    pub phase: AnimationPhase,
}

impl AnimationState {
    pub fn is_terminal(&self) -> bool {
        self.phase == AnimationPhase::Terminal
    }
}

/// Ergebnis eines Ticks.
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    /// Neu an die Spur angehängter Kurvenpunkt
    pub point: Vec<f64>,
    /// Alle Subdivisions-Ebenen zum aktuellen Ratio (für die Konstruktionslinien)
    pub construction: Construction,
    /// Zustand nach dem Tick
    pub state: AnimationState,
}

/// Treibt Ratio und Spur einer Animation voran.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    step: f64,
    ticks: u64,
    state: AnimationState,
}

impl AnimationDriver {
    /// Neuer Treiber (Running, Ratio 0, leere Spur) für Punkte der Dimension `dim`.
    pub fn new(dim: usize) -> CurveResult<Self> {
        Self::with_step(dim, ANIMATION_STEP)
    }

    /// Neuer Treiber mit eigenem Ratio-Schritt.
    ///
    /// Der Schritt muss endlich und > 0 sein, sonst würde der Treiber nie terminal.
    pub fn with_step(dim: usize, step: f64) -> CurveResult<Self> {
        if !(step.is_finite() && step > 0.0) {
            return Err(CurveError::InvalidAnimationStep { step });
        }
        Ok(Self {
            step,
            ticks: 0,
            state: AnimationState {
                ratio: 0.0,
                trail: PointBuffer::new(dim)?,
                phase: AnimationPhase::Running,
            },
        })
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn ratio(&self) -> f64 {
        self.state.ratio
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Anzahl bisher ausgeführter Ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Anzahl Ticks, bis `ticks · step` die 1 überschreitet.
    ///
    /// Für den Standardschritt 0.003 ist das `ceil(1 / 0.003) = 334`.
    pub fn ticks_to_completion(step: f64) -> u64 {
        (1.0 / step).floor() as u64 + 1
    }

    /// Führt einen Tick aus.
    ///
    /// Gibt `Ok(None)` zurück, wenn der Treiber bereits terminal ist.
    pub fn tick(&mut self, buffer: &PointBuffer) -> CurveResult<Option<AnimationFrame>> {
        if self.is_terminal() {
            return Ok(None);
        }

        // Ratio aus Tick-Zähler statt Aufsummieren → kein Float-Drift
        let ticks = self.ticks + 1;
        let ratio = ticks as f64 * self.step;

        // Das geometrische Ratio bleibt in [0, 1]; der letzte Tick landet exakt auf dem Startpunkt
        let construction = Construction::build(buffer, ratio.min(1.0))?;
        let point = construction
            .curve_point()
            .map(<[f64]>::to_vec)
            .unwrap_or_default();
        // push prüft die Dimension vor dem Anhängen; Zähler und Ratio erst danach übernehmen
        self.state.trail.push(&point)?;
        self.ticks = ticks;
        self.state.ratio = ratio;

        if self.state.ratio > 1.0 {
            self.state.phase = AnimationPhase::Terminal;
            log::debug!(
                "Animation terminal nach {} Ticks (Ratio {:.3})",
                self.ticks,
                self.state.ratio
            );
        }

        Ok(Some(AnimationFrame {
            point,
            construction,
            state: self.state.clone(),
        }))
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
    fn test_reaches_terminal_after_ceil_ticks() {
        let points = cubic();
        let mut driver = AnimationDriver::new(2).expect("Treiber");
        let mut ticks = 0;
        let mut last_ratio = 0.0;
        while let Some(frame) = driver.tick(&points).expect("Tick") {
            ticks += 1;
            assert!(frame.state.ratio >= last_ratio);
            last_ratio = frame.state.ratio;
        }
        assert_eq!(ticks, 334);
        assert_eq!(ticks, (1.0 / ANIMATION_STEP).ceil() as u64);
        assert_eq!(ticks, AnimationDriver::ticks_to_completion(ANIMATION_STEP));
        assert!(driver.is_terminal());
        assert!(driver.ratio() > 1.0);
        assert_eq!(driver.state().trail.len(), 334);
    }

    #[test]
    fn test_no_progress_after_terminal() {
        let points = cubic();
        let mut driver = AnimationDriver::with_step(2, 0.5).expect("Treiber");
        assert!(driver.tick(&points).expect("Tick").is_some());
        assert!(driver.tick(&points).expect("Tick").is_some());
        // Ratio exakt 1.0 überschreitet die 1 noch nicht
        assert!(!driver.is_terminal());
        assert!(driver.tick(&points).expect("Tick").is_some());
        assert!(driver.is_terminal());
        assert!(driver.tick(&points).expect("Tick").is_none());
        assert_eq!(driver.ticks(), 3);
        assert_eq!(AnimationDriver::ticks_to_completion(0.5), 3);
    }

    #[test]
    fn test_trail_moves_towards_first_control_point() {
        let points = cubic();
        let mut driver = AnimationDriver::new(2).expect("Treiber");
        let first = driver.tick(&points).expect("Tick").expect("Frame");
        // Ratio 0.003: nahe am letzten Kontrollpunkt
        assert!((first.point[0] - 450.0).abs() < 5.0);

        let mut last = first;
        while let Some(frame) = driver.tick(&points).expect("Tick") {
            last = frame;
        }
        assert_relative_eq!(last.point[0], 50.0, epsilon = 1e-9);
        assert_relative_eq!(last.point[1], 350.0, epsilon = 1e-9);
    }

    #[test]
    fn test_frame_exposes_all_levels() {
        let points = cubic();
        let mut driver = AnimationDriver::new(2).expect("Treiber");
        let frame = driver.tick(&points).expect("Tick").expect("Frame");
        assert_eq!(frame.construction.depth_count(), 4);
        assert_eq!(frame.construction.curve_point(), Some(frame.point.as_slice()));
    }

    #[test]
    fn test_failed_tick_leaves_state_untouched() {
        let mut driver = AnimationDriver::new(2).expect("Treiber");
        driver.tick(&cubic()).expect("Tick").expect("Frame");

        let spatial = PointBuffer::from_points(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]])
            .expect("gültiger Puffer");
        assert!(matches!(
            driver.tick(&spatial),
            Err(CurveError::DimensionMismatch { .. })
        ));
        assert!(driver.tick(&PointBuffer::planar()).is_err());

        assert_eq!(driver.ticks(), 1);
        assert_relative_eq!(driver.ratio(), ANIMATION_STEP);
        assert_eq!(driver.state().trail.len(), 1);
        assert!(!driver.is_terminal());
    }

    #[test]
    fn test_rejects_steps_that_never_terminate() {
        for step in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                AnimationDriver::with_step(2, step),
                Err(CurveError::InvalidAnimationStep { .. })
            ));
        }
        assert!(AnimationDriver::with_step(2, 0.25).is_ok());
    }
}
