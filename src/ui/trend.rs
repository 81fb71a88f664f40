use egui::{Color32, Ui};
use egui_plot::{Line, Plot};

use crate::app::ErgoScope;
use crate::constants::layout::MIN_PLOT_HEIGHT;
use crate::sim::DisplayFrame;

/// Render the rolling trend chart: the windowed user series plus the
/// constant threshold reference series, both indexed from 0.
pub fn render_trend(app: &ErgoScope, frame: &DisplayFrame, ui: &mut Ui) {
    profiling::scope!("render_trend");

    let plot_height = ui.available_height().max(MIN_PLOT_HEIGHT);

    let mut plot = Plot::new("trend")
        .show_grid(app.state.view.show_grid)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .include_y(0.0)
        .include_y(30.0)
        .height(plot_height)
        .x_axis_formatter(|mark, _range| {
            if mark.value.fract() == 0.0 && mark.value >= 0.0 {
                format!("{:.0}", mark.value)
            } else {
                String::new()
            }
        });

    if app.state.view.show_legend {
        plot = plot.legend(egui_plot::Legend::default().position(egui_plot::Corner::RightTop));
    }

    plot.show(ui, |plot_ui| {
        plot_ui.line(
            Line::new("User (cm)", frame.user_series.clone())
                .color(Color32::from_rgb(31, 119, 180))
                .width(2.0),
        );
        plot_ui.line(
            Line::new("Reference", frame.reference_series.clone())
                .color(Color32::from_rgb(214, 39, 40))
                .style(egui_plot::LineStyle::Dashed { length: 8.0 })
                .width(1.5),
        );
    });
}
