//! Error types for TwinPlot
//!
//! Structured error handling using thiserror. Every analysis error is a
//! synchronous return value to the immediate caller; the UI presents it as a
//! blocking notice before any rendering attempt.

use thiserror::Error;

/// Main error type for TwinPlot operations
#[derive(Error, Debug)]
pub enum PlotError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Unsupported file format
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Channels selected for both the primary and the secondary axis
    #[error("Channels selected for both axes: {}", channels.join(", "))]
    Overlap { channels: Vec<String> },

    /// No valid channel available for the requested operation
    #[error("No valid channels selected")]
    EmptySelection,

    /// Requested channel does not exist in the table
    #[error("Channel '{channel}' not found in table")]
    UnknownChannel { channel: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for TwinPlot operations
pub type Result<T> = std::result::Result<T, PlotError>;

/// UI-friendly error message formatting
impl PlotError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            PlotError::FileIo(e) => format!("File error: {}", e),
            PlotError::Polars(e) => format!("Data error: {}", e),
            PlotError::UnsupportedFormat { extension } => {
                format!("Unsupported file format: '.{}'", extension)
            }
            PlotError::Overlap { channels } => format!(
                "The following channels are selected for both the primary and secondary axes: {}",
                channels.join(", ")
            ),
            PlotError::EmptySelection => {
                "No valid channels selected for this operation".to_string()
            }
            PlotError::UnknownChannel { channel } => {
                format!("Channel '{}' not found in the loaded table", channel)
            }
            PlotError::Json(e) => format!("JSON error: {}", e),
            PlotError::Config(msg) => format!("Config error: {}", msg),
        }
    }

    /// Get a short title for the error (for the notice window)
    pub fn title(&self) -> &'static str {
        match self {
            PlotError::FileIo(_) => "File Error",
            PlotError::Polars(_) => "Data Error",
            PlotError::UnsupportedFormat { .. } => "Unsupported Format",
            PlotError::Overlap { .. } => "Axis Overlap",
            PlotError::EmptySelection => "Empty Selection",
            PlotError::UnknownChannel { .. } => "Channel Not Found",
            PlotError::Json(_) => "JSON Error",
            PlotError::Config(_) => "Configuration Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PlotError::Overlap {
            channels: vec!["temp".to_string(), "pressure".to_string()],
        };
        assert_eq!(
            err.user_message(),
            "The following channels are selected for both the primary and secondary axes: temp, pressure"
        );
        assert_eq!(err.title(), "Axis Overlap");

        let err = PlotError::UnknownChannel {
            channel: "voltage".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Channel 'voltage' not found in the loaded table"
        );
        assert_eq!(err.title(), "Channel Not Found");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let plot_err: PlotError = io_err.into();
        assert!(matches!(plot_err, PlotError::FileIo(_)));
    }
}
