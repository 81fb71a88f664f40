use egui::{Button, DragValue, Slider, Ui};

use crate::app::ErgoScope;
use crate::constants::threshold::{MAX_CM, MIN_CM};

/// Render the sidebar: run trigger, technical settings, view toggles, and
/// config persistence.
pub fn render_controls(app: &mut ErgoScope, ui: &mut Ui) {
    ui.heading("Technical Settings");
    ui.separator();

    let running = app.state.run.is_running();

    // Threshold is immutable for the duration of one run
    ui.label("Reference threshold (cm)");
    ui.add_enabled(
        !running,
        Slider::new(&mut app.state.config.threshold_cm, MIN_CM..=MAX_CM),
    );

    ui.add_space(4.0);

    // Optional fixed seed for reproducible runs
    let mut fixed_seed = app.state.config.seed.is_some();
    ui.add_enabled_ui(!running, |ui| {
        if ui.checkbox(&mut fixed_seed, "Fixed RNG seed").changed() {
            app.state.config.seed = if fixed_seed { Some(0) } else { None };
        }
        if let Some(seed) = app.state.config.seed.as_mut() {
            ui.add(DragValue::new(seed).speed(1));
        }
    });

    ui.separator();

    let start = Button::new("🚀 Start biofeedback test (10 s)");
    if ui.add_enabled(!running, start).clicked() {
        app.start_run();
    }

    if running {
        ui.label("Test in progress...");
    }

    ui.separator();
    ui.label("Display");
    ui.checkbox(&mut app.state.view.show_grid, "Grid (G)");
    ui.checkbox(&mut app.state.view.show_legend, "Legend (L)");
    ui.checkbox(&mut app.state.view.show_summary, "Workday summary");

    ui.horizontal(|ui| {
        let theme = if app.state.view.dark_mode {
            "🌙 Dark"
        } else {
            "☀ Light"
        };
        if ui.button(theme).clicked() {
            app.state.view.toggle_dark_mode();
        }
        if ui.button("? Help").clicked() {
            app.state.view.show_help = !app.state.view.show_help;
        }
    });

    ui.separator();
    ui.label("Config");
    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            app.save_config_dialog();
        }
        if ui.button("Load").clicked() {
            app.load_config_dialog();
        }
    });

    ui.add_space(8.0);
    ui.small(
        "The smooth transitions imitate how the body slowly fatigues and \
         quickly reacts to the correction stimulus.",
    );
}
