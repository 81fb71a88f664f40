use egui::{Align2, Context, Window};

use crate::app::ErgoScope;

pub fn render_help_dialog(app: &mut ErgoScope, ctx: &Context) {
    if app.state.view.show_help {
        Window::new("⌨ Keyboard Shortcuts")
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("Display");
                ui.label("G - Toggle grid");
                ui.label("L - Toggle legend");
                ui.label("T - Toggle dark/light theme");
                ui.label("W - Toggle workday summary");
                ui.label("H / F1 - Toggle help");
                ui.label("ESC - Close help");

                ui.separator();
                ui.heading("Run");
                ui.label("Space - Start the biofeedback test (when idle)");

                ui.separator();
                if ui.button("Close").clicked() {
                    app.state.view.show_help = false;
                }
            });
    }
}
