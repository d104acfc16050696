//! View and visualization state

use crate::analysis::{ChannelSelection, PlotSpec};
use crate::constants::analysis::DEFAULT_FREQUENCY;
use crate::constants::plot::DEFAULT_ANOMALY_OPACITY;

/// View state: current pickers, display options, and the last built plots
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Channels picked for the primary/secondary axes
    pub selection: ChannelSelection,

    /// Current sampling frequency (samples per unit time)
    pub frequency: f64,

    /// Opacity of the anomaly overlay window
    pub anomaly_opacity: f32,

    // Display options
    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Grid visibility
    pub show_grid: bool,

    /// Legend visibility
    pub show_legend: bool,

    // Plot windows
    /// Last built main plot, if any
    pub main_plot: Option<PlotSpec>,

    /// Last built anomaly plot, if any
    pub anomaly_plot: Option<PlotSpec>,

    /// Main plot window visibility
    pub show_main_window: bool,

    /// Anomaly window visibility
    pub show_anomaly_window: bool,

    /// Re-apply plot bounds from the main PlotSpec on the next frame
    pub reset_main_bounds: bool,

    /// Re-apply plot bounds from the anomaly PlotSpec on the next frame
    pub reset_anomaly_bounds: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selection: ChannelSelection::default(),
            frequency: DEFAULT_FREQUENCY,
            anomaly_opacity: DEFAULT_ANOMALY_OPACITY,
            dark_mode: true,
            show_grid: true,
            show_legend: true,
            main_plot: None,
            anomaly_plot: None,
            show_main_window: false,
            show_anomaly_window: false,
            reset_main_bounds: false,
            reset_anomaly_bounds: false,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop selections and built plots (called when a new file loads)
    pub fn clear_plots(&mut self) {
        self.selection = ChannelSelection::default();
        self.main_plot = None;
        self.anomaly_plot = None;
        self.show_main_window = false;
        self.show_anomaly_window = false;
    }

    /// Store a freshly built main plot and open its window
    pub fn set_main_plot(&mut self, spec: PlotSpec) {
        self.main_plot = Some(spec);
        self.show_main_window = true;
        self.reset_main_bounds = true;
    }

    /// Store a freshly built anomaly plot and open its window
    pub fn set_anomaly_plot(&mut self, spec: PlotSpec) {
        self.anomaly_plot = Some(spec);
        self.show_anomaly_window = true;
        self.reset_anomaly_bounds = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AxisRange;

    fn empty_spec() -> PlotSpec {
        PlotSpec {
            series: Vec::new(),
            x_range: AxisRange::new(0.0, 1.0),
            y_range: AxisRange::new(0.0, 1.0),
        }
    }

    #[test]
    fn test_setting_a_plot_opens_its_window() {
        let mut view = ViewState::default();
        assert!(!view.show_main_window);

        view.set_main_plot(empty_spec());
        assert!(view.show_main_window);
        assert!(view.reset_main_bounds);

        view.set_anomaly_plot(empty_spec());
        assert!(view.show_anomaly_window);
    }

    #[test]
    fn test_clear_plots_resets_selection_and_windows() {
        let mut view = ViewState::default();
        view.selection.primary.push("temp".to_string());
        view.set_main_plot(empty_spec());

        view.clear_plots();
        assert!(view.selection.is_empty());
        assert!(view.main_plot.is_none());
        assert!(!view.show_main_window);
    }
}
