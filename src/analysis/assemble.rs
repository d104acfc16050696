//! Plot assembly
//!
//! Turns a validated channel selection plus a sampling frequency into an
//! immutable [`PlotSpec`] the rendering layer can draw without further
//! decisions. Two independent operations: the main dual-axis plot and the
//! anomaly scatter overlay. Both share the same x/y range contract so the
//! overlay window superimposes on the main window.

use crate::analysis::detector::detect_anomalies;
use crate::analysis::range::{self, AxisRange};
use crate::analysis::selection::ChannelSelection;
use crate::data::SampleTable;
use crate::error::Result;

/// Which value axis a series is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Primary,
    Secondary,
}

/// Rendering style hint for a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Solid,
    Dashed,
    Scatter,
}

/// One renderable series: a channel's `[time, value]` points plus how to
/// draw them
#[derive(Debug, Clone)]
pub struct SeriesSpec {
    pub channel: String,
    pub points: Vec<[f64; 2]>,
    pub axis: AxisSide,
    pub style: SeriesStyle,
}

/// The immutable output of a plot request, handed to the rendering layer
#[derive(Debug, Clone)]
pub struct PlotSpec {
    pub series: Vec<SeriesSpec>,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

fn time_value_points(values: &[f64], frequency: f64) -> Vec<[f64; 2]> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64 / frequency, v])
        .collect()
}

/// Build the main dual-axis plot: one series per selected channel, primary
/// channels solid, secondary channels dashed, with the shared ranges
/// computed over primary ∪ secondary.
///
/// Fails without producing any partial plot when the selection overlaps, is
/// empty, or names a channel missing from the table.
pub fn build_main_plot(
    table: &SampleTable,
    selection: &ChannelSelection,
    frequency: f64,
) -> Result<PlotSpec> {
    profiling::scope!("build_main_plot");

    selection.validate_for_plot(&table.channel_names())?;

    let mut channels: Vec<(String, Vec<f64>, AxisSide)> = Vec::new();
    for name in &selection.primary {
        channels.push((name.clone(), table.channel_values(name)?, AxisSide::Primary));
    }
    for name in &selection.secondary {
        channels.push((name.clone(), table.channel_values(name)?, AxisSide::Secondary));
    }

    let x_range = range::time_range(table.height(), frequency);
    let y_range = range::value_range(channels.iter().map(|(_, values, _)| values.as_slice()));

    let series = channels
        .into_iter()
        .map(|(channel, values, axis)| SeriesSpec {
            points: time_value_points(&values, frequency),
            style: match axis {
                AxisSide::Primary => SeriesStyle::Solid,
                AxisSide::Secondary => SeriesStyle::Dashed,
            },
            channel,
            axis,
        })
        .collect();

    Ok(PlotSpec {
        series,
        x_range,
        y_range,
    })
}

/// Build the anomaly overlay: per selected channel, only the samples whose
/// |z-score| exceeds `threshold`, as scatter points.
///
/// The ranges are computed over the channels' full value sets, not just the
/// flagged points, so the overlay aligns spatially with the main plot.
/// Unknown channel names are dropped; an empty remainder is an error.
pub fn build_anomaly_plot(
    table: &SampleTable,
    selection: &ChannelSelection,
    frequency: f64,
    threshold: f64,
) -> Result<PlotSpec> {
    profiling::scope!("build_anomaly_plot");

    let channels = selection.anomaly_channels(&table.channel_names())?;

    let mut values_per_channel: Vec<(String, Vec<f64>)> = Vec::new();
    for name in &channels {
        values_per_channel.push((name.clone(), table.channel_values(name)?));
    }

    let x_range = range::time_range(table.height(), frequency);
    let y_range = range::value_range(
        values_per_channel
            .iter()
            .map(|(_, values)| values.as_slice()),
    );

    let series = values_per_channel
        .into_iter()
        .map(|(channel, values)| {
            let mask = detect_anomalies(&values, threshold);
            let points = values
                .iter()
                .enumerate()
                .zip(&mask)
                .filter(|&(_, &flagged)| flagged)
                .map(|((i, &v), _)| [i as f64 / frequency, v])
                .collect();
            SeriesSpec {
                channel,
                points,
                axis: AxisSide::Primary,
                style: SeriesStyle::Scatter,
            }
        })
        .collect();

    Ok(PlotSpec {
        series,
        x_range,
        y_range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::analysis::DEFAULT_ANOMALY_THRESHOLD;
    use crate::error::PlotError;
    use polars::prelude::*;

    fn table() -> SampleTable {
        let df = df![
            "temp" => [1.0, 2.0, 3.0, 4.0, 100.0],
            "pressure" => [10.0, 20.0, 30.0, 40.0, 50.0],
        ]
        .unwrap();
        SampleTable::from_dataframe(df)
    }

    fn sel(primary: &[&str], secondary: &[&str]) -> ChannelSelection {
        ChannelSelection::new(
            primary.iter().map(|s| s.to_string()).collect(),
            secondary.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_main_plot_tags_axes_and_styles() {
        let spec = build_main_plot(&table(), &sel(&["temp"], &["pressure"]), 1.0).unwrap();

        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].channel, "temp");
        assert_eq!(spec.series[0].axis, AxisSide::Primary);
        assert_eq!(spec.series[0].style, SeriesStyle::Solid);
        assert_eq!(spec.series[1].channel, "pressure");
        assert_eq!(spec.series[1].axis, AxisSide::Secondary);
        assert_eq!(spec.series[1].style, SeriesStyle::Dashed);

        // time = index / frequency
        assert_eq!(spec.series[0].points[0], [0.0, 1.0]);
        assert_eq!(spec.series[0].points[4], [4.0, 100.0]);

        // Shared ranges over primary ∪ secondary
        assert_eq!(spec.x_range, AxisRange::new(0.0, 4.0));
        assert_eq!(spec.y_range, AxisRange::new(1.0, 100.0));
    }

    #[test]
    fn test_main_plot_time_scales_with_frequency() {
        let spec = build_main_plot(&table(), &sel(&["temp"], &[]), 2.0).unwrap();
        assert_eq!(spec.x_range, AxisRange::new(0.0, 2.0));
        assert_eq!(spec.series[0].points[4][0], 2.0);
    }

    #[test]
    fn test_main_plot_rejects_overlap_without_partial_output() {
        let err = build_main_plot(&table(), &sel(&["temp"], &["temp"]), 1.0).unwrap_err();
        match err {
            PlotError::Overlap { channels } => assert_eq!(channels, vec!["temp"]),
            other => panic!("expected Overlap, got {:?}", other),
        }
    }

    #[test]
    fn test_main_plot_rejects_unknown_channel() {
        let err = build_main_plot(&table(), &sel(&["voltage"], &[]), 1.0).unwrap_err();
        assert!(matches!(err, PlotError::UnknownChannel { .. }));
    }

    #[test]
    fn test_anomaly_plot_contains_only_flagged_points() {
        // Threshold 1.5 flags exactly the spike at index 4 of `temp`;
        // `pressure` is an even ramp with no |z| above 1.5.
        let spec = build_anomaly_plot(&table(), &sel(&["temp"], &["pressure"]), 1.0, 1.5).unwrap();

        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].channel, "temp");
        assert_eq!(spec.series[0].style, SeriesStyle::Scatter);
        assert_eq!(spec.series[0].points, vec![[4.0, 100.0]]);
        assert!(spec.series[1].points.is_empty());
    }

    #[test]
    fn test_anomaly_ranges_reflect_full_value_sets() {
        let spec = build_anomaly_plot(&table(), &sel(&["temp"], &[]), 1.0, 1.5).unwrap();

        // Only one point survives, but the window still spans all of `temp`
        // so it superimposes on the main plot.
        assert_eq!(spec.x_range, AxisRange::new(0.0, 4.0));
        assert_eq!(spec.y_range, AxisRange::new(1.0, 100.0));
    }

    #[test]
    fn test_anomaly_plot_default_threshold_on_short_table() {
        // n = 5 caps |z| below 3, so the default threshold flags nothing.
        let spec =
            build_anomaly_plot(&table(), &sel(&["temp"], &[]), 1.0, DEFAULT_ANOMALY_THRESHOLD)
                .unwrap();
        assert!(spec.series[0].points.is_empty());
    }

    #[test]
    fn test_anomaly_plot_drops_unknown_and_rejects_empty() {
        let spec = build_anomaly_plot(&table(), &sel(&["temp", "voltage"], &[]), 1.0, 1.5).unwrap();
        assert_eq!(spec.series.len(), 1);

        let err = build_anomaly_plot(&table(), &sel(&[], &[]), 1.0, 1.5).unwrap_err();
        assert!(matches!(err, PlotError::EmptySelection));

        let err = build_anomaly_plot(&table(), &sel(&["voltage"], &[]), 1.0, 1.5).unwrap_err();
        assert!(matches!(err, PlotError::EmptySelection));
    }

    #[test]
    fn test_main_and_anomaly_windows_share_ranges() {
        let selection = sel(&["temp"], &["pressure"]);
        let main = build_main_plot(&table(), &selection, 1.0).unwrap();
        let anomalies =
            build_anomaly_plot(&table(), &selection, 1.0, DEFAULT_ANOMALY_THRESHOLD).unwrap();

        assert_eq!(main.x_range, anomalies.x_range);
        assert_eq!(main.y_range, anomalies.y_range);
    }
}
