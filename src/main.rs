//! Bézier-Ansicht.
//!
//! Zeigt, animiert oder bearbeitet eine Bézier-Kurve in einem egui-Fenster.
//! Aufruf: `bezier-view [show|animate|play] [points.json] [--write-config]`

use bezier_view::{
    load_points_file, ui, AppController, AppIntent, AppState, PointBuffer, RetainedScene,
    ViewMode, ViewerOptions,
};
use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

/// Demo-Punkte für show/animate ohne Punkte-Datei.
const DEMO_POINTS: [[f64; 2]; 4] = [[50.0, 350.0], [250.0, 100.0], [330.0, 350.0], [450.0, 100.0]];

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

/// Kommandozeilen-Argumente
#[derive(Debug, Parser)]
#[command(name = "bezier-view", version, about = "Zeigt, animiert oder bearbeitet eine Bézier-Kurve")]
struct CliArgs {
    /// Anzeigemodus
    #[arg(value_enum, ignore_case = true, default_value_t = ViewMode::Show)]
    mode: ViewMode,
    /// JSON-Datei mit Kontrollpunkten (Array von Koordinaten-Arrays)
    points_file: Option<PathBuf>,
    /// Aktuelle Optionen als TOML neben die Programmdatei schreiben und beenden
    #[arg(long)]
    write_config: bool,
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        let cli = CliArgs::parse();

        log::info!("Bézier-Ansicht v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let options = ViewerOptions::load_from_file(&config_path);
        if cli.write_config {
            return options.save_to_file(&config_path);
        }

        let points = Self::startup_points(&cli)?;
        let app = ViewerApp::new(options, cli.mode, points);

        let size = app.state.view.canvas_size;
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([size.x as f32, size.y as f32])
                .with_title(app.state.options.window_title.clone()),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        let title = app.state.options.window_title.clone();
        eframe::run_native(&title, native_options, Box::new(move |_cc| Ok(Box::new(app))))
            .map_err(|e| anyhow::anyhow!("Fenster konnte nicht gestartet werden: {}", e))
    }

    /// Startpunkte aus Datei, Demo-Punkte oder keine (Play-Modus).
    fn startup_points(cli: &CliArgs) -> anyhow::Result<Option<PointBuffer>> {
        if cli.mode == ViewMode::Play {
            if cli.points_file.is_some() {
                log::warn!("Play-Modus startet immer leer, Punkte-Datei wird ignoriert");
            }
            return Ok(None);
        }
        match &cli.points_file {
            Some(path) => load_points_file(path).map(Some),
            None => Ok(Some(PointBuffer::from_points(&DEMO_POINTS)?)),
        }
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    scene: RetainedScene,
    input: ui::InputState,
}

impl ViewerApp {
    fn new(options: ViewerOptions, mode: ViewMode, points: Option<PointBuffer>) -> Self {
        let mut app = Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            scene: RetainedScene::new(),
            input: ui::InputState::new(),
        };

        let mut events = Vec::new();
        if let Some(points) = points {
            events.push(AppIntent::ControlPointsReplaced { points });
        }
        events.push(AppIntent::SessionStarted {
            mode,
            now: Instant::now(),
        });
        app.process_events(events);
        // Start-Canvas wird direkt als Fenstergröße übernommen
        app.state.view.canvas_dirty = false;
        app
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self
                .controller
                .handle_intent(&mut self.state, &mut self.scene, event)
            {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        if self.state.view.canvas_dirty {
            self.state.view.canvas_dirty = false;
            let size = self.state.view.canvas_size;
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
                size.x as f32,
                size.y as f32,
            )));
        }

        let mut events = Vec::new();
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(AppIntent::ExitRequested);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_canvas_events(ui, &response));
                events.push(AppIntent::TimerElapsed {
                    now: Instant::now(),
                });
                self.process_events(std::mem::take(&mut events));

                ui::paint_scene(
                    ui.painter(),
                    rect,
                    self.state.options.background_color,
                    &self.scene,
                );
            });

        if let Some(delay) = self.state.timers.time_until_next(Instant::now()) {
            ctx.request_repaint_after(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(list: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("bezier-view").chain(list.iter().copied()))
    }

    #[test]
    fn test_cli_defaults_to_show_without_file() {
        let cli = parse(&[]).expect("gültig");
        assert_eq!(cli.mode, ViewMode::Show);
        assert!(cli.points_file.is_none());
        assert!(!cli.write_config);
    }

    #[test]
    fn test_cli_mode_and_file() {
        let cli = parse(&["Animate", "points.json", "--write-config"]).expect("gültig");
        assert_eq!(cli.mode, ViewMode::Animate);
        assert_eq!(cli.points_file, Some(PathBuf::from("points.json")));
        assert!(cli.write_config);
    }

    #[test]
    fn test_cli_rejects_extra_arguments() {
        assert!(parse(&["show", "a.json", "b.json"]).is_err());
        assert!(parse(&["--fast"]).is_err());
        assert!(parse(&["zoom"]).is_err());
        let help = parse(&["-h"]).expect_err("Hilfe beendet das Parsen");
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
