//! UI interaction state

use crate::error::PlotError;

/// UI state: the pending blocking notice, if any
#[derive(Debug, Default)]
pub struct UiState {
    /// Error waiting to be acknowledged by the user. While set, it is shown
    /// as a blocking dismissible notice and no new plot is rendered.
    pub pending_error: Option<PlotError>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an error for display
    pub fn set_error(&mut self, error: PlotError) {
        self.pending_error = Some(error);
    }

    /// Dismiss the current notice
    pub fn clear_error(&mut self) {
        self.pending_error = None;
    }

    /// Whether a notice is waiting for acknowledgement
    pub fn has_error(&self) -> bool {
        self.pending_error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_lifecycle() {
        let mut ui = UiState::new();
        assert!(!ui.has_error());

        ui.set_error(PlotError::EmptySelection);
        assert!(ui.has_error());

        ui.clear_error();
        assert!(!ui.has_error());
    }
}
