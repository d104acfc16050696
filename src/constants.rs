//! Application-wide constants and default values
//!
//! Centralizes the magic numbers used throughout the application so they are
//! easy to find and adjust.

/// Analysis defaults
pub mod analysis {
    /// Default anomaly detection threshold (Z-score)
    pub const DEFAULT_ANOMALY_THRESHOLD: f64 = 3.0;

    /// Sampling frequencies offered by the picker (samples per unit time)
    pub const FREQUENCIES: [f64; 5] = [256.0, 64.0, 32.0, 100.0, 200.0];

    /// Default sampling frequency
    pub const DEFAULT_FREQUENCY: f64 = 256.0;
}

/// Axis range computation
pub mod range {
    /// Relative padding applied to a degenerate (zero-span) range
    pub const PAD_FRACTION: f64 = 0.05;

    /// Minimum absolute padding for a degenerate range
    pub const MIN_PAD: f64 = 0.5;
}

/// Plotting and window defaults
pub mod plot {
    /// Default opacity of the anomaly overlay window
    pub const DEFAULT_ANOMALY_OPACITY: f32 = 0.7;

    /// Scatter marker radius for anomaly points
    pub const ANOMALY_MARKER_RADIUS: f32 = 5.0;
}

/// Performance constants
pub mod performance {
    /// Maximum number of recent files to track
    pub const MAX_RECENT_FILES: usize = 10;
}

/// UI layout defaults
pub mod layout {
    /// Left panel (channel selector) default width
    pub const CHANNEL_PANEL_WIDTH: f32 = 220.0;

    /// Default plot window size
    pub const DEFAULT_PLOT_SIZE: [f32; 2] = [720.0, 480.0];
}
