//! Static layout of the history line chart.
//!
//! The Y axis ticks are fixed at 0..50 while point heights are scaled to the
//! data's own min/max. The two scales do not agree; a tick label is not the
//! value of a point drawn at the same height.

use egui::{pos2, Align2, Color32, Pos2};

use super::scale_y;
use crate::bmi::Category;
use crate::draw::DrawCommand;

/// Canvas is square.
pub const CHART_SIZE: f32 = 300.0;
/// Space around the plot area for axes and labels.
pub const CHART_PADDING: f32 = 50.0;

pub const AXIS_WIDTH: f32 = 2.0;
pub const LINE_WIDTH: f32 = 3.0;
pub const MARKER_RADIUS: f32 = 4.0;

const TICK_LEN: f32 = 5.0;
const LABEL_SIZE: f32 = 9.0;
const TITLE_SIZE: f32 = 10.0;

const PLOT: f32 = CHART_SIZE - 2.0 * CHART_PADDING;
const BOTTOM: f32 = CHART_SIZE - CHART_PADDING;
const RIGHT: f32 = CHART_SIZE - CHART_PADDING;

/// Per-point plot positions and colors for a history sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLayout {
    pub points: Vec<Pos2>,
    pub colors: Vec<Color32>,
}

impl HistoryLayout {
    pub fn new(values: &[f64]) -> Self {
        let n = values.len();
        if n == 0 {
            return Self::default();
        }

        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let span = if max != min { max - min } else { 1.0 };

        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let y = BOTTOM - ((v - min) / span) as f32 * PLOT;
                pos2(x_for_index(i, n), y)
            })
            .collect();
        let colors = values.iter().map(|v| Category::from_value(*v).color()).collect();

        Self { points, colors }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Full segment `i -> i+1`, colored by its starting point.
    pub fn segment(&self, i: usize) -> DrawCommand {
        DrawCommand::line(self.points[i], self.points[i + 1], LINE_WIDTH, self.colors[i])
    }

    pub fn markers(&self) -> Vec<DrawCommand> {
        self.points
            .iter()
            .zip(&self.colors)
            .map(|(p, c)| DrawCommand::Circle {
                center: *p,
                radius: MARKER_RADIUS,
                fill: *c,
            })
            .collect()
    }
}

/// X position of entry `i` out of `n`; a lone entry sits in the middle.
fn x_for_index(i: usize, n: usize) -> f32 {
    if n > 1 {
        CHART_PADDING + (i as f32 / (n - 1) as f32) * PLOT
    } else {
        CHART_SIZE / 2.0
    }
}

/// Axes, ticks, labels and titles for a chart of `n` entries.
pub fn axes(n: usize) -> Vec<DrawCommand> {
    let mut cmds = Vec::new();
    if n == 0 {
        return cmds;
    }

    // X then Y axis
    cmds.push(DrawCommand::line(
        pos2(CHART_PADDING, BOTTOM),
        pos2(RIGHT, BOTTOM),
        AXIS_WIDTH,
        Color32::BLACK,
    ));
    cmds.push(DrawCommand::line(
        pos2(CHART_PADDING, CHART_PADDING),
        pos2(CHART_PADDING, BOTTOM),
        AXIS_WIDTH,
        Color32::BLACK,
    ));

    for val in (0..=50).step_by(10) {
        let y = scale_y(val as f64, BOTTOM, PLOT);
        cmds.push(DrawCommand::line(
            pos2(CHART_PADDING - TICK_LEN, y),
            pos2(CHART_PADDING, y),
            1.0,
            Color32::BLACK,
        ));
        cmds.push(DrawCommand::text(
            pos2(CHART_PADDING - 15.0, y),
            Align2::RIGHT_CENTER,
            val.to_string(),
            LABEL_SIZE,
            Color32::BLACK,
        ));
    }
    cmds.push(DrawCommand::text(
        pos2(CHART_PADDING, CHART_PADDING - 20.0),
        Align2::CENTER_BOTTOM,
        "BMI Value",
        TITLE_SIZE,
        Color32::BLACK,
    ));

    if n > 1 {
        for i in 0..n {
            let x = x_for_index(i, n);
            cmds.push(DrawCommand::line(
                pos2(x, BOTTOM),
                pos2(x, BOTTOM + TICK_LEN),
                1.0,
                Color32::BLACK,
            ));
            cmds.push(DrawCommand::text(
                pos2(x, BOTTOM + 15.0),
                Align2::CENTER_TOP,
                (i + 1).to_string(),
                LABEL_SIZE,
                Color32::BLACK,
            ));
        }
    } else {
        cmds.push(DrawCommand::text(
            pos2(CHART_SIZE / 2.0, BOTTOM + 15.0),
            Align2::CENTER_TOP,
            "1",
            LABEL_SIZE,
            Color32::BLACK,
        ));
    }
    cmds.push(DrawCommand::text(
        pos2(CHART_SIZE / 2.0, CHART_SIZE - 15.0),
        Align2::CENTER_CENTER,
        "Entry Number",
        TITLE_SIZE,
        Color32::BLACK,
    ));

    cmds
}

/// The finished chart: axes, every segment, then every marker.
pub fn render_history(values: &[f64]) -> Vec<DrawCommand> {
    let layout = HistoryLayout::new(values);
    let mut cmds = axes(layout.len());
    for i in 0..layout.len().saturating_sub(1) {
        cmds.push(layout.segment(i));
    }
    cmds.extend(layout.markers());
    cmds
}

/// Shown on the chart canvas right after the history is cleared.
pub fn cleared_message() -> Vec<DrawCommand> {
    vec![DrawCommand::text(
        pos2(CHART_SIZE / 2.0, CHART_SIZE / 2.0),
        Align2::CENTER_CENTER,
        "History Cleared",
        14.0,
        Color32::GRAY,
    )]
}
