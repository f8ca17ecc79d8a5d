//! Zentrale Konfiguration für die Bézier-Ansicht.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::surface::{DashPattern, LineStyle, OvalStyle, Rgba};
use crate::core::{ANIMATION_STEP, CANVAS_MARGIN, HIT_TOLERANCE, SKELETON_RATIO};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Fenster ─────────────────────────────────────────────────────────

/// Fenstertitel.
pub const WINDOW_TITLE: &str = "curves";
/// Standard-Canvas-Breite in Pixeln.
pub const CANVAS_WIDTH: f32 = 600.0;
/// Standard-Canvas-Höhe in Pixeln.
pub const CANVAS_HEIGHT: f32 = 450.0;
/// Hintergrundfarbe (RGBA: Weiß).
pub const BACKGROUND_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];

// ── Punkte ──────────────────────────────────────────────────────────

/// Radius der Punkt-Ovale in Pixeln.
pub const POINT_RADIUS: f32 = 5.0;
/// Outline-Breite der Punkt-Ovale.
pub const POINT_OUTLINE_WIDTH: f32 = 2.0;
/// Füllfarbe der Punkt-Ovale (RGBA: Weiß).
pub const POINT_FILL_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];
/// Outline-Farbe der Punkt-Ovale (RGBA: Schwarz).
pub const POINT_OUTLINE_COLOR: Rgba = [0.0, 0.0, 0.0, 1.0];

// ── Kurve ───────────────────────────────────────────────────────────

/// Farbe der Kurve und der Animationsspur (RGBA: Rot).
pub const CURVE_COLOR: Rgba = [1.0, 0.0, 0.0, 1.0];
/// Linienstärke der Kurve.
pub const CURVE_WIDTH: f32 = 3.0;

// ── Konstruktionslinien ─────────────────────────────────────────────

/// Farbe der Konstruktionslinien (RGBA: Schwarz).
pub const SKELETON_COLOR: Rgba = [0.0, 0.0, 0.0, 1.0];
/// Linienstärke der Ebene 0 (Kontrollpolygon).
pub const SKELETON_WIDTH: f32 = 3.0;
/// Linienstärke tieferer Ebenen.
pub const CONSTRUCTION_WIDTH: f32 = 1.0;
/// Strichmuster tieferer Ebenen: [Strich, Lücke].
pub const CONSTRUCTION_DASH: [f32; 2] = [5.0, 3.0];

// ── Timing ──────────────────────────────────────────────────────────

/// Intervall zwischen zwei Animations-Ticks (ms).
pub const ANIMATION_INTERVAL_MS: u64 = 10;
/// Intervall zwischen zwei Play-Refreshes (ms).
pub const PLAY_INTERVAL_MS: u64 = 100;
/// Verzögerung bis zum ersten Play-Refresh (ms).
pub const PLAY_INITIAL_DELAY_MS: u64 = 1000;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `bezier_view.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    // ── Fenster ─────────────────────────────────────────────────
    /// Fenstertitel
    pub window_title: String,
    /// Canvas-Breite, solange keine Anpassung an Startpunkte erfolgt
    pub canvas_width: f32,
    /// Canvas-Höhe, solange keine Anpassung an Startpunkte erfolgt
    pub canvas_height: f32,
    /// Canvas an die Ausdehnung der Startpunkte anpassen
    pub fit_canvas_to_points: bool,
    /// Relativer Rand bei der Canvas-Anpassung
    pub canvas_margin: f64,
    pub background_color: Rgba,

    // ── Punkte ──────────────────────────────────────────────────
    /// Hit-Test-Toleranz je Achse in Pixeln
    pub hit_tolerance: f64,
    pub point_radius: f32,
    pub point_outline_width: f32,
    pub point_fill_color: Rgba,
    pub point_outline_color: Rgba,

    // ── Kurve ───────────────────────────────────────────────────
    pub curve_color: Rgba,
    pub curve_width: f32,
    /// Abtastschritte der statischen Kurve (`None` = 10 · Grad)
    pub curve_steps: Option<usize>,

    // ── Konstruktion ────────────────────────────────────────────
    pub skeleton_color: Rgba,
    /// Linienstärke der Ebene 0
    pub skeleton_width: f32,
    /// Linienstärke ab Ebene 1
    pub construction_width: f32,
    /// Strichmuster ab Ebene 1 [Strich, Lücke]
    pub construction_dash: [f32; 2],
    /// Ratio des statischen Skeletts
    pub skeleton_ratio: f64,
    /// Mittelpunkte der ersten Ebene im statischen Skelett anzeigen
    pub show_skeleton_midpoints: bool,

    // ── Animation / Play ───────────────────────────────────────
    /// Ratio-Zuwachs pro Animations-Tick
    pub animation_step: f64,
    pub animation_interval_ms: u64,
    pub play_interval_ms: u64,
    pub play_initial_delay_ms: u64,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            fit_canvas_to_points: true,
            canvas_margin: CANVAS_MARGIN,
            background_color: BACKGROUND_COLOR,

            hit_tolerance: HIT_TOLERANCE,
            point_radius: POINT_RADIUS,
            point_outline_width: POINT_OUTLINE_WIDTH,
            point_fill_color: POINT_FILL_COLOR,
            point_outline_color: POINT_OUTLINE_COLOR,

            curve_color: CURVE_COLOR,
            curve_width: CURVE_WIDTH,
            curve_steps: None,

            skeleton_color: SKELETON_COLOR,
            skeleton_width: SKELETON_WIDTH,
            construction_width: CONSTRUCTION_WIDTH,
            construction_dash: CONSTRUCTION_DASH,
            skeleton_ratio: SKELETON_RATIO,
            show_skeleton_midpoints: true,

            animation_step: ANIMATION_STEP,
            animation_interval_ms: ANIMATION_INTERVAL_MS,
            play_interval_ms: PLAY_INTERVAL_MS,
            play_initial_delay_ms: PLAY_INITIAL_DELAY_MS,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML und korrigiert unbrauchbare Werte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        Ok(opts.sanitized())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier-view"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_view.toml")
    }

    /// Ersetzt Werte, mit denen Animation oder Auswertung nicht terminieren würden.
    pub fn sanitized(mut self) -> Self {
        if !(self.animation_step > 0.0 && self.animation_step.is_finite()) {
            log::warn!(
                "animation_step {} ungültig, verwende {}",
                self.animation_step,
                ANIMATION_STEP
            );
            self.animation_step = ANIMATION_STEP;
        }
        if !(0.0..=1.0).contains(&self.skeleton_ratio) {
            log::warn!(
                "skeleton_ratio {} außerhalb [0, 1], verwende {}",
                self.skeleton_ratio,
                SKELETON_RATIO
            );
            self.skeleton_ratio = SKELETON_RATIO;
        }
        if let Some(steps) = self.curve_steps.filter(|&s| s < 2) {
            log::warn!("curve_steps {} < 2, verwende Standard-Schrittzahl", steps);
            self.curve_steps = None;
        }
        self
    }

    /// Linienstil der Konstruktionsebene `depth`.
    ///
    /// Ebene 0 durchgezogen und breit, tiefere Ebenen dünn und gestrichelt.
    pub fn construction_style(&self, depth: usize) -> LineStyle {
        if depth == 0 {
            LineStyle::solid(self.skeleton_color, self.skeleton_width)
        } else {
            LineStyle {
                color: self.skeleton_color,
                width: self.construction_width,
                dash: Some(DashPattern {
                    dash: self.construction_dash[0],
                    gap: self.construction_dash[1],
                }),
            }
        }
    }

    /// Linienstil von Kurve und Animationsspur.
    pub fn curve_style(&self) -> LineStyle {
        LineStyle::solid(self.curve_color, self.curve_width)
    }

    /// Stil der Punkt-Ovale mit Outline-Farbe `outline`.
    pub fn point_style(&self, outline: Rgba) -> OvalStyle {
        OvalStyle {
            radius: self.point_radius,
            fill: self.point_fill_color,
            outline,
            outline_width: self.point_outline_width,
        }
    }

    pub fn animation_interval(&self) -> Duration {
        Duration::from_millis(self.animation_interval_ms)
    }

    pub fn play_interval(&self) -> Duration {
        Duration::from_millis(self.play_interval_ms)
    }

    pub fn play_initial_delay(&self) -> Duration {
        Duration::from_millis(self.play_initial_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let opts = ViewerOptions::from_toml_str("curve_width = 5.0\nhit_tolerance = 10.0\n")
            .expect("TOML gültig");
        assert_eq!(opts.curve_width, 5.0);
        assert_eq!(opts.hit_tolerance, 10.0);
        assert_eq!(opts.animation_step, ANIMATION_STEP);
        assert_eq!(opts.window_title, WINDOW_TITLE);
    }

    #[test]
    fn test_sanitize_rejects_non_positive_step() {
        let opts = ViewerOptions::from_toml_str("animation_step = 0.0\ncurve_steps = 1\n")
            .expect("TOML gültig");
        assert_eq!(opts.animation_step, ANIMATION_STEP);
        assert_eq!(opts.curve_steps, None);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut opts = ViewerOptions::default();
        opts.curve_steps = Some(64);
        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let parsed = ViewerOptions::from_toml_str(&text).expect("TOML gültig");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_construction_style_by_depth() {
        let opts = ViewerOptions::default();
        let top = opts.construction_style(0);
        assert_eq!(top.width, SKELETON_WIDTH);
        assert!(top.dash.is_none());

        let deep = opts.construction_style(2);
        assert_eq!(deep.width, CONSTRUCTION_WIDTH);
        assert_eq!(deep.dash, Some(DashPattern { dash: 5.0, gap: 3.0 }));
    }
}
