use egui::{Color32, RichText, Ui};

use crate::sim::{DisplayFrame, Posture};

/// Render the three live metrics: distance, presence, and evaluation
pub fn render_metrics(frame: &DisplayFrame, ui: &mut Ui) {
    ui.horizontal(|ui| {
        let cell_width = (ui.available_width() / 3.0 - 12.0).max(120.0);

        ui.group(|ui| {
            ui.set_min_width(cell_width);
            ui.vertical(|ui| {
                ui.label("Distance (ultrasound)");
                ui.heading(frame.distance_label());
            });
        });

        ui.group(|ui| {
            ui.set_min_width(cell_width);
            ui.vertical(|ui| {
                ui.label("Presence (IR)");
                ui.heading(frame.presence_label());
            });
        });

        ui.group(|ui| {
            ui.set_min_width(cell_width);
            ui.vertical(|ui| {
                ui.label("Evaluation");
                ui.colored_label(
                    posture_color(frame.posture),
                    RichText::new(frame.posture.label()).heading(),
                );
                ui.colored_label(delta_color(frame.delta_cm), frame.delta_label());
            });
        });
    });
}

fn posture_color(posture: Posture) -> Color32 {
    match posture {
        Posture::Correct => Color32::from_rgb(44, 160, 44),
        Posture::BadPosture => Color32::from_rgb(214, 39, 40),
    }
}

/// Inverse delta coloring: under the threshold is good
fn delta_color(delta_cm: f64) -> Color32 {
    if delta_cm < 0.0 {
        Color32::from_rgb(44, 160, 44)
    } else {
        Color32::from_rgb(214, 39, 40)
    }
}
