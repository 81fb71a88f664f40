use egui::{Color32, Ui};
use egui_plot::{HLine, Line, Plot};

use crate::app::ErgoScope;
use crate::constants::summary::{
    ALERT_COUNT, CORRECT_SHARE_PCT, HOUR_LABELS, HOUR_VALUES, LONGEST_STREAK_MIN, SEATED_HOURS,
};

/// Render the static 8-hour workday summary: four cumulative metrics and a
/// filled area chart over fixed hourly values. The numbers are a mock
/// fixture and are not derived from run history.
pub fn render_summary(app: &ErgoScope, ui: &mut Ui) {
    profiling::scope!("render_summary");

    ui.separator();
    ui.heading("8-Hour Workday Summary");

    ui.horizontal(|ui| {
        let cell_width = (ui.available_width() / 4.0 - 12.0).max(100.0);

        for (label, value) in [
            ("Time seated", format!("{:.1} h", SEATED_HOURS)),
            ("Posture alerts", format!("{}", ALERT_COUNT)),
            ("Correct posture", format!("{:.0} %", CORRECT_SHARE_PCT)),
            ("Longest streak", format!("{} min", LONGEST_STREAK_MIN)),
        ] {
            ui.group(|ui| {
                ui.set_min_width(cell_width);
                ui.vertical(|ui| {
                    ui.label(label);
                    ui.strong(value);
                });
            });
        }
    });

    let points: Vec<[f64; 2]> = HOUR_VALUES
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64, v])
        .collect();

    let mut plot = Plot::new("workday_summary")
        .show_grid(app.state.view.show_grid)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .include_y(0.0)
        .height(140.0)
        .x_axis_formatter(|mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() < 1e-6 && idx >= 0.0 && (idx as usize) < HOUR_LABELS.len()
            {
                HOUR_LABELS[idx as usize].to_string()
            } else {
                String::new()
            }
        });

    if app.state.view.show_legend {
        plot = plot.legend(egui_plot::Legend::default().position(egui_plot::Corner::RightTop));
    }

    plot.show(ui, |plot_ui| {
        plot_ui.line(
            Line::new("Activity", points)
                .color(Color32::from_rgb(31, 119, 180))
                .fill(0.0)
                .width(2.0),
        );
        plot_ui.hline(
            HLine::new("Reference", app.state.config.threshold())
                .color(Color32::from_rgb(214, 39, 40))
                .style(egui_plot::LineStyle::Dashed { length: 8.0 })
                .width(1.5),
        );
    });
}
