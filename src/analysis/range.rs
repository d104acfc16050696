//! Shared axis range computation
//!
//! The main plot and the anomaly overlay use one x-range derived from the row
//! index domain and one y-range derived from the union of every selected
//! channel's values, so the two windows can be superimposed and series on the
//! primary and secondary axes stay visually comparable.

use crate::constants::range::{MIN_PAD, PAD_FRACTION};

/// An inclusive (min, max) axis range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, other: &AxisRange) -> bool {
        self.min <= other.min && self.max >= other.max
    }

    /// Pad a zero-span range symmetrically so the renderer never receives a
    /// degenerate window. Non-degenerate ranges pass through unchanged.
    fn ensure_non_degenerate(self) -> Self {
        if self.span() > 0.0 {
            return self;
        }
        let pad = (self.min.abs() * PAD_FRACTION).max(MIN_PAD);
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }
}

/// The time range covered by `rows` samples at `frequency`:
/// (0, (rows - 1) / frequency). Identical for every plot derived from the
/// same table and frequency.
pub fn time_range(rows: usize, frequency: f64) -> AxisRange {
    let last = rows.saturating_sub(1) as f64 / frequency;
    AxisRange::new(0.0, last).ensure_non_degenerate()
}

/// The value range over the union of all finite samples across every channel
/// passed in.
pub fn value_range<'a, I>(channels: I) -> AxisRange
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for values in channels {
        for &v in values {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
    }

    if min > max {
        // No finite samples at all
        return AxisRange::new(0.0, 0.0).ensure_non_degenerate();
    }

    AxisRange::new(min, max).ensure_non_degenerate()
}
