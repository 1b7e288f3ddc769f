//! Vertical category meter with a pointer at the current value.
//!
//! Band edges are 0, 18.5, 24.9, 25, 29.9, 30 and 50. The slivers between
//! 24.9..25 and 29.9..30 are left unpainted.

use egui::{pos2, Align2, Color32, Rect};

use super::scale_y;
use crate::bmi::{format_value, Category};
use crate::draw::DrawCommand;

pub const METER_HEIGHT: f32 = 300.0;
/// Width of the colored column.
pub const METER_BAND_WIDTH: f32 = 60.0;
/// Whole canvas, including the labels to the right of the column.
pub const METER_WIDTH: f32 = 100.0;

const LABEL_X: f32 = 65.0;
const LABEL_SIZE: f32 = 8.0;

/// `(start, end, category)` for each painted band.
pub const METER_BANDS: [(f64, f64, Category); 4] = [
    (0.0, 18.5, Category::Underweight),
    (18.5, 24.9, Category::Normal),
    (25.0, 29.9, Category::Overweight),
    (30.0, 50.0, Category::Obese),
];

fn meter_y(value: f64) -> f32 {
    scale_y(value, METER_HEIGHT, METER_HEIGHT)
}

/// Bands and their upper-bound labels, without a pointer.
pub fn render_meter_empty() -> Vec<DrawCommand> {
    let mut cmds = Vec::with_capacity(METER_BANDS.len() * 2);
    for (start, end, cat) in METER_BANDS {
        let y1 = meter_y(start);
        let y2 = meter_y(end);
        cmds.push(DrawCommand::Rect {
            rect: Rect::from_min_max(pos2(0.0, y2), pos2(METER_BAND_WIDTH, y1)),
            fill: cat.meter_color(),
        });
        cmds.push(DrawCommand::text(
            pos2(LABEL_X, (y1 + y2) / 2.0),
            Align2::LEFT_CENTER,
            format_value(end),
            LABEL_SIZE,
            Color32::BLACK,
        ));
    }
    cmds
}

/// Bands plus a triangular pointer at `current`. Values past 50 land above
/// the canvas and are clipped by the painter.
pub fn render_meter(current: f64) -> Vec<DrawCommand> {
    let mut cmds = render_meter_empty();
    let y = meter_y(current);
    cmds.push(DrawCommand::Polygon {
        points: vec![
            pos2(0.0, y - 5.0),
            pos2(METER_BAND_WIDTH, y - 5.0),
            pos2(METER_BAND_WIDTH / 2.0, y + 10.0),
        ],
        fill: Color32::BLACK,
    });
    cmds
}
