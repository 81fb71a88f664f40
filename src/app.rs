use std::time::Instant;

use chrono::Local;
use eframe::egui::{self, CentralPanel};
use egui_extras::{Size, StripBuilder};

use crate::config::{self, DashboardConfig};
use crate::constants::layout::{METRICS_HEIGHT, SIDEBAR_WIDTH, SUMMARY_HEIGHT};
use crate::constants::signal::LAST_STEP;
use crate::constants::timing::REPAINT_INTERVAL;
use crate::sim::{RunState, Tick};
use crate::state::AppState;
use crate::ui;

/// ErgoScope application
pub struct ErgoScope {
    pub state: AppState,
}

impl Default for ErgoScope {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl ErgoScope {
    /// Trigger a run after validating the configuration at the boundary
    pub fn start_run(&mut self) {
        if let Err(e) = self.state.config.validate() {
            self.state.ui.set_error(e.user_message());
            return;
        }
        self.state.ui.clear_error();
        self.state.run.start(self.state.config.seed);
    }

    /// Snapshot the current settings for persistence
    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            threshold_cm: self.state.config.threshold_cm,
            seed: self.state.config.seed,
            dark_mode: self.state.view.dark_mode,
            show_grid: self.state.view.show_grid,
            show_legend: self.state.view.show_legend,
            show_summary: self.state.view.show_summary,
        }
    }

    /// Apply a loaded configuration to the live state
    pub fn apply_dashboard_config(&mut self, config: DashboardConfig) {
        self.state.config.threshold_cm = config.threshold_cm;
        self.state.config.seed = config.seed;
        self.state.view.dark_mode = config.dark_mode;
        self.state.view.show_grid = config.show_grid;
        self.state.view.show_legend = config.show_legend;
        self.state.view.show_summary = config.show_summary;
    }

    pub fn save_config_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("ergoscope.json")
            .save_file()
        {
            if let Err(e) = config::save_config(&self.dashboard_config(), &path) {
                self.state.ui.set_error(e.user_message());
            }
        }
    }

    pub fn load_config_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            match config::load_config(&path) {
                Ok(config) => {
                    self.apply_dashboard_config(config);
                    self.state.ui.clear_error();
                }
                Err(e) => self.state.ui.set_error(e.user_message()),
            }
        }
    }

    /// Advance the run state machine by at most one step this frame
    fn advance_run(&mut self) {
        if let Tick::Finished(_) = self.state.run.tick(Instant::now()) {
            self.state.last_completed = Some(Local::now());
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let mut start_requested = false;
        ctx.input(|i| {
            if i.key_pressed(egui::Key::G) {
                self.state.view.show_grid = !self.state.view.show_grid;
            }
            if i.key_pressed(egui::Key::L) {
                self.state.view.show_legend = !self.state.view.show_legend;
            }
            if i.key_pressed(egui::Key::T) {
                self.state.view.toggle_dark_mode();
            }
            if i.key_pressed(egui::Key::W) {
                self.state.view.show_summary = !self.state.view.show_summary;
            }
            if i.key_pressed(egui::Key::H) || i.key_pressed(egui::Key::F1) {
                self.state.view.show_help = !self.state.view.show_help;
            }
            if i.key_pressed(egui::Key::Escape) {
                self.state.view.show_help = false;
            }
            if i.key_pressed(egui::Key::Space) && !self.state.run.is_running() {
                start_requested = true;
            }
        });
        if start_requested {
            self.start_run();
        }
    }
}

impl eframe::App for ErgoScope {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::scope!("update");

        // Set theme
        if self.state.view.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.handle_shortcuts(ctx);

        self.advance_run();
        if self.state.run.is_running() {
            ctx.request_repaint_after(REPAINT_INTERVAL);
        }

        let frame = self.state.display_frame();

        CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::exact(SIDEBAR_WIDTH))
                .size(Size::remainder())
                .horizontal(|mut strip| {
                    // Left panel: run trigger and settings
                    strip.cell(|ui| {
                        egui::ScrollArea::vertical().show(ui, |ui| {
                            ui::render_controls(self, ui);
                        });
                    });

                    // Center: metrics, banner, trend chart, summary
                    strip.cell(|ui| {
                        let mut vertical_strip = StripBuilder::new(ui)
                            .size(Size::exact(METRICS_HEIGHT))
                            .size(Size::initial(40.0))
                            .size(Size::remainder());

                        if self.state.view.show_summary {
                            vertical_strip = vertical_strip.size(Size::exact(SUMMARY_HEIGHT));
                        }

                        vertical_strip.vertical(|mut strip| {
                            strip.cell(|ui| {
                                ui::render_metrics(&frame, ui);
                            });
                            strip.cell(|ui| {
                                ui::render_banner(self, ui);
                            });
                            strip.cell(|ui| {
                                ui::render_trend(self, &frame, ui);
                            });
                            if self.state.view.show_summary {
                                strip.cell(|ui| {
                                    ui::render_summary(self, ui);
                                });
                            }
                        });
                    });
                });

            // Status bar at bottom
            ui.add_space((ui.available_height() - 20.0).max(0.0));
            ui.separator();
            ui.horizontal(|ui| {
                match self.state.run.state() {
                    RunState::Idle => ui.label("Idle"),
                    RunState::Running { next_step } => {
                        ui.label(format!("Running: step {}/{}", next_step, LAST_STEP))
                    }
                };
                ui.separator();
                ui.label(format!("Threshold: {} cm", self.state.config.threshold_cm));
                if let Some(completed) = self.state.last_completed {
                    ui.separator();
                    ui.label(format!("Last run: {}", completed.format("%H:%M:%S")));
                }
                if let Some(ref message) = self.state.ui.error_message {
                    ui.separator();
                    ui.colored_label(egui::Color32::RED, message);
                }
            });
        });

        // Help dialog
        ui::render_help_dialog(self, ctx);
    }
}
