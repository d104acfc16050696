use log::info;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::assemble;
use crate::constants::analysis::DEFAULT_ANOMALY_THRESHOLD;
use crate::constants::performance::MAX_RECENT_FILES;
use crate::error::{PlotError, Result};
use crate::data::SampleTable;
use crate::state::AppState;
use crate::ui;

/// Display settings that can be saved to / loaded from a JSON file.
/// Analysis results are never persisted.
#[derive(Serialize, Deserialize)]
pub struct ViewConfig {
    pub frequency: f64,
    pub anomaly_opacity: f32,
    pub dark_mode: bool,
    pub show_grid: bool,
    pub show_legend: bool,
}

pub struct TwinPlot {
    pub state: AppState,
}

impl Default for TwinPlot {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl TwinPlot {
    pub fn channel_names(&self) -> Vec<String> {
        self.state.channel_names()
    }

    pub fn get_series_color(index: usize) -> eframe::egui::Color32 {
        let colors = [
            eframe::egui::Color32::from_rgb(31, 119, 180),  // Blue
            eframe::egui::Color32::from_rgb(255, 127, 14),  // Orange
            eframe::egui::Color32::from_rgb(44, 160, 44),   // Green
            eframe::egui::Color32::from_rgb(214, 39, 40),   // Red
            eframe::egui::Color32::from_rgb(148, 103, 189), // Purple
            eframe::egui::Color32::from_rgb(140, 86, 75),   // Brown
            eframe::egui::Color32::from_rgb(227, 119, 194), // Pink
            eframe::egui::Color32::from_rgb(127, 127, 127), // Gray
        ];
        colors[index % colors.len()]
    }

    /// Load a sample table, resetting selections and open plots
    pub fn load_file(&mut self, path: PathBuf) -> Result<()> {
        let table = SampleTable::load(&path)?;
        info!(
            "loaded {} with {} channels, {} rows",
            path.display(),
            table.width(),
            table.height()
        );

        self.state.table = Some(table);
        self.state.view.clear_plots();
        self.state.current_file = Some(path.clone());

        self.state.recent_files.retain(|p| p != &path);
        self.state.recent_files.insert(0, path);
        self.state.recent_files.truncate(MAX_RECENT_FILES);

        Ok(())
    }

    /// "Plot Channels" button: build the main dual-axis plot
    pub fn plot_channels(&mut self) {
        let Some(table) = &self.state.table else {
            return;
        };
        match assemble::build_main_plot(table, &self.state.view.selection, self.state.view.frequency)
        {
            Ok(spec) => self.state.view.set_main_plot(spec),
            Err(e) => self.state.ui.set_error(e),
        }
    }

    /// "Plot Anomalies" button: build the anomaly scatter overlay
    pub fn plot_anomalies(&mut self) {
        let Some(table) = &self.state.table else {
            return;
        };
        match assemble::build_anomaly_plot(
            table,
            &self.state.view.selection,
            self.state.view.frequency,
            DEFAULT_ANOMALY_THRESHOLD,
        ) {
            Ok(spec) => self.state.view.set_anomaly_plot(spec),
            Err(e) => self.state.ui.set_error(e),
        }
    }

    pub fn save_config(&mut self) {
        let config = ViewConfig {
            frequency: self.state.view.frequency,
            anomaly_opacity: self.state.view.anomaly_opacity,
            dark_mode: self.state.view.dark_mode,
            show_grid: self.state.view.show_grid,
            show_legend: self.state.view.show_legend,
        };

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("view_config.json")
            .save_file()
        {
            if let Err(e) = Self::write_config(&config, &path) {
                self.state.ui.set_error(e);
            }
        }
    }

    fn write_config(config: &ViewConfig, path: &std::path::Path) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_config(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            match Self::read_config(&path) {
                Ok(config) => self.apply_config(&config),
                Err(e) => self.state.ui.set_error(e),
            }
        }
    }

    fn read_config(path: &std::path::Path) -> Result<ViewConfig> {
        let contents = std::fs::read_to_string(path)?;
        let config: ViewConfig = serde_json::from_str(&contents)?;
        if !config.frequency.is_finite() || config.frequency <= 0.0 {
            return Err(PlotError::Config(format!(
                "frequency must be positive, got {}",
                config.frequency
            )));
        }
        Ok(config)
    }

    pub fn apply_config(&mut self, config: &ViewConfig) {
        self.state.view.frequency = config.frequency;
        self.state.view.anomaly_opacity = config.anomaly_opacity.clamp(0.0, 1.0);
        self.state.view.dark_mode = config.dark_mode;
        self.state.view.show_grid = config.show_grid;
        self.state.view.show_legend = config.show_legend;
    }
}

impl eframe::App for TwinPlot {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        profiling::scope!("update");

        if self.state.view.dark_mode {
            ctx.set_visuals(eframe::egui::Visuals::dark());
        } else {
            ctx.set_visuals(eframe::egui::Visuals::light());
        }

        eframe::egui::SidePanel::left("channel_panel")
            .default_width(crate::constants::layout::CHANNEL_PANEL_WIDTH)
            .show(ctx, |ui_| {
                ui::render_channel_panel(self, ctx, ui_);
            });

        eframe::egui::CentralPanel::default().show(ctx, |ui_| {
            ui::render_toolbar(self, ctx, ui_);

            // Status bar at bottom
            ui_.add_space(ui_.available_height() - 20.0);
            ui_.separator();
            ui_.horizontal(|ui_| {
                if let Some(ref file) = self.state.current_file {
                    if let Some(name) = file.file_name() {
                        ui_.label(format!("📁 {}", name.to_string_lossy()));
                        ui_.separator();
                    }
                }
                ui_.label(format!(
                    "Rows: {} | Channels: {}",
                    self.state.row_count(),
                    self.channel_names().len()
                ));
                ui_.separator();
                ui_.label(format!("Frequency: {}", self.state.view.frequency));
            });
        });

        // Plot windows; the error notice blocks them until dismissed
        if !self.state.ui.has_error() {
            ui::render_main_plot_window(self, ctx);
            ui::render_anomaly_window(self, ctx);
        }

        ui::render_error_dialog(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn app_with_table() -> TwinPlot {
        let mut app = TwinPlot::default();
        let df = df![
            "temp" => [1.0, 2.0, 3.0, 4.0, 100.0],
            "pressure" => [10.0, 20.0, 30.0, 40.0, 50.0],
        ]
        .unwrap();
        app.state.table = Some(SampleTable::from_dataframe(df));
        app
    }

    #[test]
    fn test_plot_channels_stores_spec_on_success() {
        let mut app = app_with_table();
        app.state.view.selection.primary = vec!["temp".to_string()];
        app.state.view.selection.secondary = vec!["pressure".to_string()];

        app.plot_channels();
        assert!(app.state.view.main_plot.is_some());
        assert!(app.state.view.show_main_window);
        assert!(!app.state.ui.has_error());
    }

    #[test]
    fn test_overlap_surfaces_error_and_no_plot() {
        let mut app = app_with_table();
        app.state.view.selection.primary = vec!["temp".to_string()];
        app.state.view.selection.secondary = vec!["temp".to_string()];

        app.plot_channels();
        assert!(app.state.view.main_plot.is_none());
        assert!(matches!(
            app.state.ui.pending_error,
            Some(PlotError::Overlap { .. })
        ));
    }

    #[test]
    fn test_empty_anomaly_selection_surfaces_error() {
        let mut app = app_with_table();

        app.plot_anomalies();
        assert!(app.state.view.anomaly_plot.is_none());
        assert!(matches!(
            app.state.ui.pending_error,
            Some(PlotError::EmptySelection)
        ));
    }

    #[test]
    fn test_apply_config_clamps_opacity() {
        let mut app = TwinPlot::default();
        app.apply_config(&ViewConfig {
            frequency: 64.0,
            anomaly_opacity: 1.5,
            dark_mode: false,
            show_grid: false,
            show_legend: true,
        });

        assert_eq!(app.state.view.frequency, 64.0);
        assert_eq!(app.state.view.anomaly_opacity, 1.0);
        assert!(!app.state.view.dark_mode);
    }
}
