use egui::{Color32, Context, ScrollArea, Ui, vec2};

use crate::app::TwinPlot;

/// Render the channel selection panel (left sidebar): one multi-select list
/// per value axis. A channel may be toggled on either axis; the validator
/// rejects overlapping picks when a plot is requested.
pub fn render_channel_panel(app: &mut TwinPlot, _ctx: &Context, ui: &mut Ui) {
    let names = app.channel_names();

    if names.is_empty() {
        ui.label("Open a CSV or Parquet file to select channels");
        return;
    }

    ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Primary Axis");
        ui.separator();
        render_axis_list(ui, &names, &mut app.state.view.selection.primary, 0);

        ui.add_space(10.0);

        ui.heading("Secondary Axis");
        ui.separator();
        let offset = app.state.view.selection.primary.len();
        render_axis_list(ui, &names, &mut app.state.view.selection.secondary, offset);
    });
}

fn render_axis_list(ui: &mut Ui, names: &[String], selected: &mut Vec<String>, color_offset: usize) {
    for name in names {
        let is_selected = selected.contains(name);

        let color = if is_selected {
            let pos = selected.iter().position(|s| s == name).unwrap_or(0);
            TwinPlot::get_series_color(color_offset + pos)
        } else {
            Color32::GRAY
        };

        ui.horizontal(|ui| {
            let response = ui.selectable_label(is_selected, name);
            if is_selected {
                ui.painter().circle_filled(
                    response.rect.left_center() - vec2(10.0, 0.0),
                    4.0,
                    color,
                );
            }

            if response.clicked() {
                if is_selected {
                    selected.retain(|s| s != name);
                } else {
                    selected.push(name.clone());
                }
            }
        });
    }
}
