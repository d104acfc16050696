//! Analysis core: anomaly detection, selection validation, axis range
//! unification, and plot assembly.
//!
//! Every function here is a pure, synchronous mapping from its inputs to a
//! value or an error; no module holds state across calls.

pub mod assemble;
pub mod detector;
pub mod range;
pub mod selection;

pub use assemble::{AxisSide, PlotSpec, SeriesSpec, SeriesStyle};
pub use range::AxisRange;
pub use selection::ChannelSelection;
