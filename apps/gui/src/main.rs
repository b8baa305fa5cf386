use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use eframe::egui;
use egui::{Align2, Color32, FontId, Key, Pos2, Stroke};
use epicycles_core::{Point, Simulation};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod pacing;
mod settings;

use pacing::FramePacer;
use settings::AppConfig;

const CONFIG_PATH: &str = "config.json";

const CONTROLS: [&str; 8] = [
    "Controls:",
    "  + / Up    = add term",
    "  - / Down  = remove term",
    "  F         = switch function",
    "  Space     = pause",
    "  R         = reset",
    "  [ / ]     = rot speed - / +",
    "  ESC       = quit",
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    ChangeTerms(i64),
    TogglePause,
    ToggleWaveform,
    Reset,
    Faster,
    Slower,
    Quit,
}

struct EpicycleApp {
    config: AppConfig,
    simulation: Simulation,
    pacer: FramePacer,
}

impl EpicycleApp {
    fn new(config: AppConfig, simulation: Simulation) -> Self {
        let pacer = FramePacer::new(config.window.fps);
        Self {
            config,
            simulation,
            pacer,
        }
    }

    fn collect_commands(ctx: &egui::Context) -> Vec<Command> {
        ctx.input(|i| {
            let mut commands = Vec::new();
            if i.key_pressed(Key::Escape) {
                commands.push(Command::Quit);
            }
            if i.key_pressed(Key::Plus) || i.key_pressed(Key::Equals) || i.key_pressed(Key::ArrowUp) {
                commands.push(Command::ChangeTerms(1));
            }
            if i.key_pressed(Key::Minus) || i.key_pressed(Key::ArrowDown) {
                commands.push(Command::ChangeTerms(-1));
            }
            if i.key_pressed(Key::Space) {
                commands.push(Command::TogglePause);
            }
            if i.key_pressed(Key::F) {
                commands.push(Command::ToggleWaveform);
            }
            if i.key_pressed(Key::R) {
                commands.push(Command::Reset);
            }
            if i.key_pressed(Key::OpenBracket) {
                commands.push(Command::Slower);
            }
            if i.key_pressed(Key::CloseBracket) {
                commands.push(Command::Faster);
            }
            let scroll = i.raw_scroll_delta.y;
            if scroll > 0.0 {
                commands.push(Command::ChangeTerms(1));
            } else if scroll < 0.0 {
                commands.push(Command::ChangeTerms(-1));
            }
            commands
        })
    }

    fn apply(&mut self, ctx: &egui::Context, command: Command) {
        match command {
            Command::ChangeTerms(delta) => self.simulation.change_term_count(delta),
            Command::TogglePause => self.simulation.toggle_pause(),
            Command::ToggleWaveform => self.simulation.toggle_waveform(),
            Command::Reset => self.simulation.reset(),
            Command::Faster => self.simulation.speed_up(),
            Command::Slower => self.simulation.slow_down(),
            Command::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        let colors = &self.config.colors;
        let epicycle = rgb(colors.epicycle);
        let line = Stroke::new(1.0, rgb(colors.line));
        let origin_x = self.config.view.wave_origin_x;
        let to_screen = |p: Point| rect.min + egui::vec2(p.x as f32, p.y as f32);

        let state = self.simulation.drawable_state();

        for segment in state.chain {
            let start = to_screen(segment.start);
            painter.circle_stroke(start, segment.radius as f32, Stroke::new(1.0, epicycle));
            painter.line_segment([start, to_screen(segment.end)], Stroke::new(2.0, epicycle));
        }

        let tip = to_screen(state.tip);
        painter.line_segment([tip, Pos2::new(rect.min.x + origin_x, tip.y)], line);
        painter.line_segment(
            [
                Pos2::new(rect.min.x + origin_x, rect.min.y),
                Pos2::new(rect.min.x + origin_x, rect.max.y),
            ],
            line,
        );

        if state.trace.len() > 1 {
            let points: Vec<Pos2> = state
                .trace
                .iter()
                .map(|p| Pos2::new(rect.min.x + origin_x + p.offset as f32, rect.min.y + p.y as f32))
                .collect();
            painter.add(egui::Shape::line(points, Stroke::new(2.0, rgb(colors.wave))));
        }

        let mut lines = vec![
            format!("Function: {}", state.waveform),
            format!("Terms: {}", state.term_count),
            format!("Rot speed: {:.2}", state.rotation_speed),
        ];
        if state.paused {
            lines.push("PAUSED".to_string());
        }
        lines.extend(CONTROLS.iter().map(|s| s.to_string()));

        let font = FontId::monospace(self.config.view.font_size);
        let line_height = self.config.view.font_size + 4.0;
        for (row, text) in lines.iter().enumerate() {
            painter.text(
                rect.min + egui::vec2(20.0, 20.0 + row as f32 * line_height),
                Align2::LEFT_TOP,
                text,
                font.clone(),
                rgb(colors.text),
            );
        }
    }
}

impl eframe::App for EpicycleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for command in Self::collect_commands(ctx) {
            self.apply(ctx, command);
        }

        let now = ctx.input(|i| i.time);
        if self.pacer.poll(now) {
            self.simulation.update();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(rgb(self.config.colors.background)))
            .show(ctx, |ui| {
                self.paint(ui.painter(), ui.max_rect());
            });

        ctx.request_repaint_after(Duration::from_secs_f64(self.pacer.until_next(now)));
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("epicycles_gui=info,epicycles_core=info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_PATH));
    let config = AppConfig::load_or_create(&path)?;
    let simulation =
        Simulation::new(config.simulation.clone()).context("failed to build simulation")?;
    info!(path = %path.display(), "config loaded");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(config.window.title.clone()),
        ..Default::default()
    };
    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(EpicycleApp::new(config, simulation))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
