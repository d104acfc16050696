use egui::{Align2, Context, Window};

use crate::app::TwinPlot;

/// Render the blocking, dismissible error notice. While it is open no plot
/// window is shown, so a failed request never leaves a partial plot behind.
pub fn render_error_dialog(app: &mut TwinPlot, ctx: &Context) {
    let Some(error) = &app.state.ui.pending_error else {
        return;
    };

    let title = error.title();
    let message = error.user_message();
    let mut dismissed = false;

    Window::new(format!("⚠ {}", title))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        app.state.ui.clear_error();
    }
}
