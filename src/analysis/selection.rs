//! Primary/secondary channel selection and its validation rules
//!
//! Plotting is strict: overlapping selections, empty selections, and unknown
//! channel names all abort the request. Anomaly detection is lenient about
//! unknown names (they are dropped with a warning) but still requires the
//! resulting union to be non-empty.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};

/// The channels picked for the primary and secondary value axes,
/// in picker order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelSelection {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
}

impl ChannelSelection {
    pub fn new(primary: Vec<String>, secondary: Vec<String>) -> Self {
        Self { primary, secondary }
    }

    /// Whether neither axis has any channel selected
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// Channels selected for both axes, sorted for stable reporting
    pub fn overlap(&self) -> Vec<String> {
        let mut common: Vec<String> = self
            .primary
            .iter()
            .filter(|name| self.secondary.contains(name))
            .cloned()
            .collect();
        common.sort();
        common.dedup();
        common
    }

    /// Validate this selection for a main-plot request.
    ///
    /// Fails fast on overlapping axes, an entirely empty selection, or any
    /// channel name missing from `known` -- the shared range computation
    /// would be undefined otherwise.
    pub fn validate_for_plot(&self, known: &[String]) -> Result<()> {
        let common = self.overlap();
        if !common.is_empty() {
            return Err(PlotError::Overlap { channels: common });
        }

        if self.is_empty() {
            return Err(PlotError::EmptySelection);
        }

        for name in self.primary.iter().chain(&self.secondary) {
            if !known.contains(name) {
                return Err(PlotError::UnknownChannel {
                    channel: name.clone(),
                });
            }
        }

        Ok(())
    }

    /// The de-duplicated union of primary + secondary for an anomaly request,
    /// filtered to channels present in `known`.
    ///
    /// Unknown names are dropped with a warning; an empty result is an error.
    pub fn anomaly_channels(&self, known: &[String]) -> Result<Vec<String>> {
        let mut valid = Vec::new();
        for name in self.primary.iter().chain(&self.secondary) {
            if valid.contains(name) {
                continue;
            }
            if known.contains(name) {
                valid.push(name.clone());
            } else {
                warn!("dropping unknown channel '{}' from anomaly detection", name);
            }
        }

        if valid.is_empty() {
            return Err(PlotError::EmptySelection);
        }

        Ok(valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Vec<String> {
        vec!["temp".to_string(), "pressure".to_string(), "flow".to_string()]
    }

    fn sel(primary: &[&str], secondary: &[&str]) -> ChannelSelection {
        ChannelSelection::new(
            primary.iter().map(|s| s.to_string()).collect(),
            secondary.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_overlap_is_rejected_and_named() {
        let err = sel(&["temp"], &["temp"]).validate_for_plot(&known()).unwrap_err();
        match err {
            PlotError::Overlap { channels } => assert_eq!(channels, vec!["temp"]),
            other => panic!("expected Overlap, got {:?}", other),
        }
    }

    #[test]
    fn test_overlap_reports_all_shared_channels_sorted() {
        let err = sel(&["temp", "flow"], &["flow", "temp"])
            .validate_for_plot(&known())
            .unwrap_err();
        match err {
            PlotError::Overlap { channels } => assert_eq!(channels, vec!["flow", "temp"]),
            other => panic!("expected Overlap, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let err = sel(&[], &[]).validate_for_plot(&known()).unwrap_err();
        assert!(matches!(err, PlotError::EmptySelection));
    }

    #[test]
    fn test_one_sided_selection_is_accepted() {
        assert!(sel(&["temp"], &[]).validate_for_plot(&known()).is_ok());
        assert!(sel(&[], &["pressure"]).validate_for_plot(&known()).is_ok());
    }

    #[test]
    fn test_unknown_channel_fails_plotting() {
        let err = sel(&["temp"], &["voltage"]).validate_for_plot(&known()).unwrap_err();
        assert!(matches!(
            err,
            PlotError::UnknownChannel { channel } if channel == "voltage"
        ));
    }

    #[test]
    fn test_anomaly_union_drops_unknown_names() {
        let channels = sel(&["temp", "voltage"], &["pressure"])
            .anomaly_channels(&known())
            .unwrap();
        assert_eq!(channels, vec!["temp", "pressure"]);
    }

    #[test]
    fn test_anomaly_union_dedupes_preserving_order() {
        let channels = sel(&["pressure", "temp"], &["temp", "flow"])
            .anomaly_channels(&known())
            .unwrap();
        assert_eq!(channels, vec!["pressure", "temp", "flow"]);
    }

    #[test]
    fn test_anomaly_with_no_valid_channels_is_rejected() {
        let err = sel(&[], &[]).anomaly_channels(&known()).unwrap_err();
        assert!(matches!(err, PlotError::EmptySelection));

        let err = sel(&["voltage"], &[]).anomaly_channels(&known()).unwrap_err();
        assert!(matches!(err, PlotError::EmptySelection));
    }
}
