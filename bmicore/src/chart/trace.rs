//! Animated tracing of the history polyline.
//!
//! `next_frame` is a pure step function: given the layout and a state it
//! returns the next state and the commands to add to the canvas. Whoever
//! owns the event loop decides when to call it.

use egui::Pos2;

use super::history::{axes, HistoryLayout, LINE_WIDTH};
use crate::draw::DrawCommand;

/// Default pixels traced per tick.
pub const DEFAULT_TRACE_SPEED: f32 = 8.0;

/// Where the pen is: heading from `points[index]` toward `points[index + 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceState {
    pub index: usize,
    pub current: Pos2,
    pub finished: bool,
}

impl TraceState {
    pub fn start(layout: &HistoryLayout) -> Self {
        Self {
            index: 0,
            current: layout.points.first().copied().unwrap_or(Pos2::ZERO),
            finished: layout.is_empty(),
        }
    }
}

/// Advance the pen by one tick of at most `speed` pixels.
pub fn next_frame(layout: &HistoryLayout, speed: f32, state: TraceState) -> (TraceState, Vec<DrawCommand>) {
    if state.finished {
        return (state, Vec::new());
    }

    if state.index + 1 >= layout.len() {
        let done = TraceState { finished: true, ..state };
        return (done, layout.markers());
    }

    let target = layout.points[state.index + 1];
    let color = layout.colors[state.index];
    let delta = target - state.current;
    let dist = delta.length();

    // A non-finite distance can never shrink; draw the segment outright
    if dist <= speed || !dist.is_finite() {
        // Finish the segment in one stroke from its true start
        let next = TraceState {
            index: state.index + 1,
            current: target,
            finished: false,
        };
        (next, vec![layout.segment(state.index)])
    } else {
        let step = state.current + delta / dist * speed;
        let next = TraceState { current: step, ..state };
        (next, vec![DrawCommand::line(state.current, step, LINE_WIDTH, color)])
    }
}

/// A history chart being traced onto its canvas.
#[derive(Debug, Clone)]
pub struct HistoryChart {
    layout: HistoryLayout,
    axes: Vec<DrawCommand>,
    drawn: Vec<DrawCommand>,
    state: TraceState,
    speed: f32,
}

impl HistoryChart {
    pub fn new(values: &[f64], speed: f32) -> Self {
        let layout = HistoryLayout::new(values);
        let axes = axes(layout.len());
        let state = TraceState::start(&layout);
        Self {
            layout,
            axes,
            drawn: Vec::new(),
            state,
            speed: speed.max(f32::EPSILON),
        }
    }

    /// Run `ticks` animation steps.
    pub fn advance(&mut self, ticks: u32) {
        for _ in 0..ticks {
            if self.state.finished {
                break;
            }
            let (state, cmds) = next_frame(&self.layout, self.speed, self.state);
            self.state = state;
            self.drawn.extend(cmds);
        }
    }

    /// Skip the animation and draw everything that remains.
    pub fn finish(&mut self) {
        while !self.state.finished {
            self.advance(1);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    pub fn state(&self) -> TraceState {
        self.state
    }

    pub fn layout(&self) -> &HistoryLayout {
        &self.layout
    }

    /// Everything on the canvas so far, axes first.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.axes.iter().chain(self.drawn.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn circle_count<'a>(cmds: impl Iterator<Item = &'a DrawCommand>) -> usize {
        cmds.filter(|c| matches!(c, DrawCommand::Circle { .. })).count()
    }

    #[test]
    fn test_empty_chart_is_finished() {
        let chart = HistoryChart::new(&[], DEFAULT_TRACE_SPEED);
        assert!(chart.is_finished());
        assert_eq!(chart.commands().count(), 0);
    }

    #[test]
    fn test_single_point_finishes_in_one_tick() {
        let mut chart = HistoryChart::new(&[22.86], DEFAULT_TRACE_SPEED);
        assert!(!chart.is_finished());
        chart.advance(1);
        assert!(chart.is_finished());
        assert_eq!(circle_count(chart.commands()), 1);
    }

    #[test]
    fn test_partial_step_moves_by_speed() {
        let layout = HistoryLayout::new(&[20.0, 30.0]);
        // (50,250) -> (250,50)
        let state = TraceState::start(&layout);
        let (next, cmds) = next_frame(&layout, 8.0, state);
        assert_eq!(next.index, 0);
        assert!(((next.current - state.current).length() - 8.0).abs() < 1e-3);
        assert_eq!(cmds.len(), 1);
        assert!(matches!(cmds[0], DrawCommand::Line { from, .. } if from == pos2(50.0, 250.0)));
    }

    #[test]
    fn test_close_target_completes_segment() {
        let layout = HistoryLayout::new(&[20.0, 30.0]);
        let state = TraceState {
            index: 0,
            current: layout.points[1] - egui::vec2(3.0, 0.0),
            finished: false,
        };
        let (next, cmds) = next_frame(&layout, 8.0, state);
        assert_eq!(next.index, 1);
        assert_eq!(next.current, layout.points[1]);
        assert_eq!(cmds, vec![layout.segment(0)]);
    }

    #[test]
    fn test_finished_state_emits_nothing() {
        let layout = HistoryLayout::new(&[20.0, 30.0]);
        let state = TraceState {
            index: 1,
            current: layout.points[1],
            finished: true,
        };
        let (next, cmds) = next_frame(&layout, 8.0, state);
        assert_eq!(next, state);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_full_trace_ends_with_markers() {
        let values = [22.86, 17.58, 31.14];
        let mut chart = HistoryChart::new(&values, DEFAULT_TRACE_SPEED);
        chart.finish();
        assert!(chart.is_finished());
        assert_eq!(chart.state().index, 2);

        let cmds: Vec<&DrawCommand> = chart.commands().collect();
        assert_eq!(circle_count(cmds.iter().copied()), 3);
        // every full segment of the static picture was laid down
        for i in 0..2 {
            let seg = chart.layout().segment(i);
            assert!(cmds.contains(&&seg));
        }
        // markers come after the last line
        let last_line = cmds.iter().rposition(|c| matches!(c, DrawCommand::Line { .. }));
        let first_circle = cmds.iter().position(|c| matches!(c, DrawCommand::Circle { .. }));
        assert!(first_circle > last_line);
    }

    #[test]
    fn test_trace_is_repeatable() {
        let values = [18.0, 26.0, 21.0];
        let mut a = HistoryChart::new(&values, DEFAULT_TRACE_SPEED);
        let mut b = HistoryChart::new(&values, DEFAULT_TRACE_SPEED);
        a.finish();
        b.advance(3);
        b.advance(10_000);
        let a: Vec<_> = a.commands().cloned().collect();
        let b: Vec<_> = b.commands().cloned().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_finite_point_still_finishes() {
        let mut chart = HistoryChart::new(&[20.0, f64::NAN], DEFAULT_TRACE_SPEED);
        chart.advance(1_000);
        assert!(chart.is_finished());
    }

    #[test]
    fn test_advance_stops_when_finished() {
        let mut chart = HistoryChart::new(&[20.0, 21.0], DEFAULT_TRACE_SPEED);
        chart.advance(10_000);
        let count = chart.commands().count();
        chart.advance(10);
        assert_eq!(chart.commands().count(), count);
    }
}
