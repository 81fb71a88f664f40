use egui::{Color32, RichText, Ui};

use crate::app::ErgoScope;
use crate::sim::Severity;

/// Render the single status banner for the current run state
pub fn render_banner(app: &ErgoScope, ui: &mut Ui) {
    let (severity, message) = app.state.run.banner();
    let (color, icon) = severity_style(severity);

    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.colored_label(color, icon);
            ui.colored_label(color, RichText::new(message).strong());
        });
    });
}

fn severity_style(severity: Severity) -> (Color32, &'static str) {
    match severity {
        Severity::Success => (Color32::from_rgb(44, 160, 44), "✅"),
        Severity::Warning => (Color32::from_rgb(255, 165, 0), "⚠"),
        Severity::Alert => (Color32::from_rgb(214, 39, 40), "🚨"),
        Severity::Info => (Color32::from_rgb(31, 119, 180), "ℹ"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_styles_are_distinct() {
        let styles = [
            severity_style(Severity::Success),
            severity_style(Severity::Warning),
            severity_style(Severity::Alert),
            severity_style(Severity::Info),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a.0, b.0);
                assert_ne!(a.1, b.1);
            }
        }
    }

    #[test]
    fn test_alert_style_is_red() {
        let (color, icon) = severity_style(Severity::Alert);
        assert_eq!(color, Color32::from_rgb(214, 39, 40));
        assert_eq!(icon, "🚨");
    }
}
