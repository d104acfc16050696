use egui::{Color32, Context, Window};
use egui_plot::{Legend, Plot, PlotBounds, Points};

use crate::app::TwinPlot;
use crate::constants::layout::DEFAULT_PLOT_SIZE;
use crate::constants::plot::ANOMALY_MARKER_RADIUS;

/// Render the anomaly overlay window: flagged points only, drawn as red
/// crosses in a translucent window that shares the main plot's bounds so the
/// two can be visually superimposed.
pub fn render_anomaly_window(app: &mut TwinPlot, ctx: &Context) {
    profiling::scope!("render_anomaly_window");

    let Some(spec) = app.state.view.anomaly_plot.clone() else {
        return;
    };
    if !app.state.view.show_anomaly_window {
        return;
    }

    let mut open = app.state.view.show_anomaly_window;
    let reset_bounds = app.state.view.reset_anomaly_bounds;
    let opacity = app.state.view.anomaly_opacity;
    let show_grid = app.state.view.show_grid;
    let show_legend = app.state.view.show_legend;

    Window::new("Anomalies Detected")
        .open(&mut open)
        .default_size(DEFAULT_PLOT_SIZE)
        .show(ctx, |ui| {
            ui.set_opacity(opacity);

            let mut plot = Plot::new("anomaly_plot")
                .show_grid(show_grid)
                .x_axis_label("Time")
                .label_formatter(|name, value| {
                    // Hover annotation with the point's coordinates
                    if name.is_empty() {
                        format!("({:.2}, {:.2})", value.x, value.y)
                    } else {
                        format!("{}\n({:.2}, {:.2})", name, value.x, value.y)
                    }
                });

            if show_legend {
                plot = plot.legend(Legend::default().position(egui_plot::Corner::RightTop));
            }

            plot.show(ui, |plot_ui| {
                if reset_bounds {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                        [spec.x_range.min, spec.y_range.min],
                        [spec.x_range.max, spec.y_range.max],
                    ));
                }

                for series in &spec.series {
                    if series.points.is_empty() {
                        continue;
                    }
                    plot_ui.points(
                        Points::new(
                            format!("Anomaly ({})", series.channel),
                            series.points.clone(),
                        )
                        .color(Color32::RED)
                        .radius(ANOMALY_MARKER_RADIUS)
                        .shape(egui_plot::MarkerShape::Cross),
                    );
                }
            });
        });

    app.state.view.show_anomaly_window = open;
    app.state.view.reset_anomaly_bounds = false;
}
