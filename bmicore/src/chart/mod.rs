//! History line chart and vertical category meter

pub mod history;
pub mod meter;
pub mod trace;

pub use history::{render_history, HistoryLayout};
pub use meter::{render_meter, render_meter_empty};
pub use trace::{HistoryChart, TraceState};

/// Both charts map BMI onto a fixed 0..50 axis.
pub const AXIS_MAX: f64 = 50.0;

/// Map a BMI value onto a vertical pixel span, 0 at `bottom`, `AXIS_MAX`
/// at `bottom - span`.
pub(crate) fn scale_y(value: f64, bottom: f32, span: f32) -> f32 {
    bottom - (value / AXIS_MAX) as f32 * span
}
