//! Z-score anomaly detection
//!
//! A sample is flagged when its absolute deviation from the channel mean
//! exceeds `threshold` standard deviations. The standard deviation is the
//! population one (ddof = 0), matching the statistics the rest of the
//! application reports.

/// Mean and population standard deviation of a channel
pub fn channel_stats(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    (mean, variance.sqrt())
}

/// Per-sample anomaly mask: true where |z-score| exceeds `threshold`.
///
/// A constant channel (std == 0) flags nothing rather than dividing by zero.
pub fn detect_anomalies(values: &[f64], threshold: f64) -> Vec<bool> {
    let (mean, std_dev) = channel_stats(values);

    if std_dev == 0.0 {
        return vec![false; values.len()];
    }

    values
        .iter()
        .map(|v| ((v - mean) / std_dev).abs() > threshold)
        .collect()
}
