use anyhow::Context;
use eframe::egui;
use eframe::egui::{Pos2, Rect, Stroke, Ui};
use eframe::run_native;
use log::{info, warn};
use shared::input::pixel_to_cell;
use shared::tick::TickCounter;
use shared::{Input, InteractionController, InteractionState, SimulationConfig};
use std::time::{Duration, Instant};

const CELL_SIZE: f32 = 25.0;
const GRID_AREA_WIDTH: f32 = 1280.0;
const GRID_AREA_HEIGHT: f32 = 720.0;
const HEADER_HEIGHT: f32 = 80.0;
const PANEL_MARGIN: f32 = 16.0;
const GRID_LINE_COLOR: egui::Color32 = egui::Color32::from_gray(60);
const CURSOR_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 190, 60);

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut config = SimulationConfig::from_viewport(GRID_AREA_WIDTH, GRID_AREA_HEIGHT, CELL_SIZE);
    config.apply_env_overrides();
    let controller = InteractionController::new(config).context("create simulation")?;
    info!(
        "{}x{} grid, one generation every {} ticks",
        config.width, config.height, config.ticks_per_generation
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            config.width as f32 * CELL_SIZE + PANEL_MARGIN,
            config.height as f32 * CELL_SIZE + HEADER_HEIGHT,
        ]),
        ..Default::default()
    };

    run_native(
        "Game of Life GUI",
        options,
        Box::new(|_cc| Ok(Box::new(GuiOfLife::new(controller)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run eframe: {err}"))
}

struct GuiOfLife {
    controller: InteractionController,
    ticks: TickCounter,
    frame_count: u32,
    last_fps_log: Instant,
}

impl GuiOfLife {
    fn new(controller: InteractionController) -> Self {
        Self {
            controller,
            ticks: TickCounter::new(),
            frame_count: 0,
            last_fps_log: Instant::now(),
        }
    }

    fn apply(&mut self, input: Input) {
        if let Err(err) = self.controller.dispatch(input) {
            warn!("rejected {input:?}: {err}");
        }
    }

    fn keyboard_inputs(ctx: &egui::Context) -> Vec<Input> {
        // Consumed so a focused button does not also react to space.
        ctx.input_mut(|i| {
            let mut inputs = Vec::new();
            if i.consume_key(egui::Modifiers::NONE, egui::Key::Space) {
                inputs.push(Input::ToggleState);
            }
            if i.consume_key(egui::Modifiers::NONE, egui::Key::R) {
                inputs.push(Input::Randomize);
            }
            let moves = [
                (egui::Key::ArrowLeft, -1, 0),
                (egui::Key::ArrowRight, 1, 0),
                (egui::Key::ArrowUp, 0, -1),
                (egui::Key::ArrowDown, 0, 1),
            ];
            for (key, d_col, d_row) in moves {
                if i.consume_key(egui::Modifiers::NONE, key) {
                    inputs.push(Input::MoveCursor { d_col, d_row });
                }
            }
            inputs
        })
    }

    fn header(&mut self, ui: &mut Ui) {
        let state = self.controller.state();
        let grid = self.controller.grid();
        ui.heading("Game of Life");
        ui.horizontal(|ui| {
            ui.label(format!("State: {state}"));
            ui.separator();
            ui.label(format!("Generation: {}", self.controller.generation()));
            ui.separator();
            ui.label(format!("Population: {}", grid.population()));
            if self.controller.is_stable() {
                ui.separator();
                ui.label("stable");
            }
        });

        let (advance, randomize) = ui
            .horizontal(|ui| {
                let advance_label = match state {
                    InteractionState::Idle => "Seed (space)",
                    InteractionState::Seeding => "Run (space)",
                    InteractionState::Running => "Stop (space)",
                };
                let advance = ui.button(advance_label).clicked();
                let randomize = ui
                    .add_enabled(state == InteractionState::Seeding, egui::Button::new("Randomize"))
                    .clicked();
                (advance, randomize)
            })
            .inner;
        if advance {
            self.apply(Input::ToggleState);
        }
        if randomize {
            self.apply(Input::Randomize);
        }
    }

    /// Paints the board and returns the cell edit for a click on it, if any.
    fn create_grid(&self, ui: &mut Ui) -> Option<Input> {
        let grid = self.controller.grid();
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(
                CELL_SIZE * grid.width() as f32,
                CELL_SIZE * grid.height() as f32,
            ),
            egui::Sense::click(),
        );
        let painter = ui.painter();

        for (col, row, cell) in grid.iter() {
            if cell.is_alive() {
                let pos = rect.min + egui::vec2(col as f32 * CELL_SIZE, row as f32 * CELL_SIZE);
                painter.rect_filled(
                    Rect::from_min_size(pos, egui::vec2(CELL_SIZE, CELL_SIZE)),
                    0.0,
                    egui::Color32::WHITE,
                );
            }
        }

        let line = Stroke::new(1.0, GRID_LINE_COLOR);
        for col in 0..=grid.width() {
            let x = rect.min.x + col as f32 * CELL_SIZE;
            painter.line_segment([Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)], line);
        }
        for row in 0..=grid.height() {
            let y = rect.min.y + row as f32 * CELL_SIZE;
            painter.line_segment([Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)], line);
        }

        let cursor = self.controller.cursor();
        let cursor_pos = rect.min + egui::vec2(cursor.col as f32 * CELL_SIZE, cursor.row as f32 * CELL_SIZE);
        painter.rect_stroke(
            Rect::from_min_size(cursor_pos, egui::vec2(CELL_SIZE, CELL_SIZE)),
            0.0,
            Stroke::new(2.0, CURSOR_COLOR),
        );

        if !response.clicked() {
            return None;
        }
        let pointer = response.interact_pointer_pos()?;
        let offset = pointer - rect.min;
        let (col, row) = pixel_to_cell(offset.x, offset.y, CELL_SIZE);
        Some(Input::EditCell { col, row })
    }

    fn log_fps(&mut self) {
        self.frame_count += 1;
        let elapsed = self.last_fps_log.elapsed();
        if elapsed >= Duration::from_secs(1) {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            info!("fps: {:.1}", fps);
            self.frame_count = 0;
            self.last_fps_log = Instant::now();
        }
    }
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for input in Self::keyboard_inputs(ctx) {
            self.apply(input);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.header(ui);
            if let Some(edit) = self.create_grid(ui) {
                self.apply(edit);
            }
        });

        let tick = self.ticks.advance();
        self.apply(Input::Tick(tick));
        self.log_fps();

        // Every frame is a tick, so keep frames coming.
        ctx.request_repaint();
    }
}
