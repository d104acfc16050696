//! Application state management
//!
//! The shell alone holds transient UI state (current frequency, selections,
//! window visibility, last built plots); every analysis call receives these
//! as explicit parameters.

mod ui;
mod view;

pub use ui::UiState;
pub use view::ViewState;

use crate::data::SampleTable;
use std::path::PathBuf;

/// Main application state container
#[derive(Default)]
pub struct AppState {
    /// Currently loaded sample table
    pub table: Option<SampleTable>,

    /// View and visualization state
    pub view: ViewState,

    /// UI interaction state
    pub ui: UiState,

    /// Currently loaded file path
    pub current_file: Option<PathBuf>,

    /// Recently opened files
    pub recent_files: Vec<PathBuf>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a table is loaded
    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    /// Channel names of the loaded table
    pub fn channel_names(&self) -> Vec<String> {
        self.table
            .as_ref()
            .map(|t| t.channel_names())
            .unwrap_or_default()
    }

    /// Number of rows in the loaded table
    pub fn row_count(&self) -> usize {
        self.table.as_ref().map(|t| t.height()).unwrap_or(0)
    }
}
