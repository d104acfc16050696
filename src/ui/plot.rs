use egui::{Context, Ui, Window};
use egui_plot::{Legend, Line, Plot, PlotBounds};

use crate::analysis::{AxisSide, PlotSpec, SeriesStyle};
use crate::app::TwinPlot;
use crate::constants::layout::DEFAULT_PLOT_SIZE;

/// Render the main dual-axis plot window from the last built PlotSpec.
pub fn render_main_plot_window(app: &mut TwinPlot, ctx: &Context) {
    profiling::scope!("render_main_plot_window");

    let Some(spec) = app.state.view.main_plot.clone() else {
        return;
    };
    if !app.state.view.show_main_window {
        return;
    }

    let mut open = app.state.view.show_main_window;
    let reset_bounds = app.state.view.reset_main_bounds;
    let show_grid = app.state.view.show_grid;
    let show_legend = app.state.view.show_legend;

    Window::new("Channel Plot")
        .open(&mut open)
        .default_size(DEFAULT_PLOT_SIZE)
        .show(ctx, |ui| {
            render_series_plot(ui, "main_plot", &spec, reset_bounds, show_grid, show_legend);
        });

    app.state.view.show_main_window = open;
    app.state.view.reset_main_bounds = false;
}

/// Draw all series of a PlotSpec into one egui_plot area with the spec's
/// shared bounds.
fn render_series_plot(
    ui: &mut Ui,
    id: &str,
    spec: &PlotSpec,
    reset_bounds: bool,
    show_grid: bool,
    show_legend: bool,
) {
    let mut plot = Plot::new(id.to_string())
        .show_grid(show_grid)
        .x_axis_label("Time")
        .label_formatter(|name, value| {
            if name.is_empty() {
                format!("({:.2}, {:.2})", value.x, value.y)
            } else {
                format!("{}\n({:.2}, {:.2})", name, value.x, value.y)
            }
        });

    if show_legend {
        plot = plot.legend(Legend::default().position(egui_plot::Corner::LeftTop));
    }

    plot.show(ui, |plot_ui| {
        if reset_bounds {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [spec.x_range.min, spec.y_range.min],
                [spec.x_range.max, spec.y_range.max],
            ));
        }

        for (idx, series) in spec.series.iter().enumerate() {
            let color = TwinPlot::get_series_color(idx);
            let label = match series.axis {
                AxisSide::Primary => format!("Primary: {}", series.channel),
                AxisSide::Secondary => format!("Secondary: {}", series.channel),
            };

            let mut line = Line::new(label, series.points.clone()).color(color);
            if series.style == SeriesStyle::Dashed {
                line = line.style(egui_plot::LineStyle::Dashed { length: 10.0 });
            }
            plot_ui.line(line);
        }
    });
}
