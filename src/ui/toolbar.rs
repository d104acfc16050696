use egui::{CollapsingHeader, ComboBox, Context, Slider, Ui};

use crate::app::TwinPlot;
use crate::constants::analysis::FREQUENCIES;

/// Render the toolbar: file operations, frequency picker, plot buttons, and
/// display toggles.
pub fn render_toolbar(app: &mut TwinPlot, ctx: &Context, ui: &mut Ui) {
    ui.horizontal(|ui| {
        if ui.button("📂").on_hover_text("Open Data File").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Data Files", &["csv", "parquet"])
                .pick_file()
            {
                if let Err(e) = app.load_file(path) {
                    app.state.ui.set_error(e);
                }
            }
        }

        // Recent files menu
        if !app.state.recent_files.is_empty() {
            ComboBox::from_label("")
                .selected_text("📋")
                .show_ui(ui, |ui| {
                    ui.label("Recent Files:");
                    ui.separator();
                    for path in app.state.recent_files.clone().iter() {
                        if let Some(name) = path.file_name() {
                            if ui.button(name.to_string_lossy()).clicked() {
                                if let Err(e) = app.load_file(path.clone()) {
                                    app.state.ui.set_error(e);
                                }
                            }
                        }
                    }
                });
        }

        ui.separator();

        if ui.button("⚙").on_hover_text("Save View Config").clicked() {
            app.save_config();
        }
        if ui.button("📥").on_hover_text("Load View Config").clicked() {
            app.load_config();
        }

        ui.separator();
        if ui
            .button(if app.state.view.dark_mode { "🌙" } else { "☀" })
            .on_hover_text("Toggle theme")
            .clicked()
        {
            app.state.view.dark_mode = !app.state.view.dark_mode;
        }
    });

    // Handle drag and drop
    let dropped = ctx.input(|i| i.raw.dropped_files.first().and_then(|f| f.path.clone()));
    if let Some(path) = dropped {
        if let Err(e) = app.load_file(path) {
            app.state.ui.set_error(e);
        }
    }

    ui.separator();

    if !app.state.has_table() {
        ui.vertical_centered(|ui| {
            ui.label("Open a data file to begin");
        });
        return;
    }

    CollapsingHeader::new("⏱ Sampling Frequency")
        .default_open(true)
        .show(ui, |ui| {
            for freq in FREQUENCIES {
                ui.radio_value(&mut app.state.view.frequency, freq, format!("{}", freq));
            }
        });

    CollapsingHeader::new("🖵 Display")
        .default_open(false)
        .show(ui, |ui| {
            ui.checkbox(&mut app.state.view.show_grid, "Grid");
            ui.checkbox(&mut app.state.view.show_legend, "Legend");
            ui.horizontal(|ui| {
                ui.label("Overlay opacity:");
                ui.add(Slider::new(&mut app.state.view.anomaly_opacity, 0.1..=1.0));
            });
        });

    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("📈 Plot Channels").clicked() {
            app.plot_channels();
        }
        if ui.button("⚠ Plot Anomalies").clicked() {
            app.plot_anomalies();
        }
    });
}
