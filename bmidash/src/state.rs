//! Dashboard state, independent of the egui context

use bmicore::animation::{BackgroundCycle, BarGrowth, Bounce, TickClock};
use bmicore::chart::{self, HistoryChart};
use bmicore::draw::DrawCommand;
use bmicore::{calculate, BmiResult, DashConfig, History, InputError};
use egui::Color32;

/// Longest step fed to animations in one frame; a window that was asleep
/// should not jump every animation to its end. The background cycle gets
/// the real elapsed time.
const MAX_ANIMATION_DT: f32 = 0.25;

/// What the history canvas currently shows.
pub enum ChartView {
    /// Nothing calculated yet
    Blank,
    /// "History Cleared" until the next calculation
    Cleared(Vec<DrawCommand>),
    Chart(HistoryChart),
}

pub struct DashState {
    config: DashConfig,
    pub weight_input: String,
    pub height_input: String,
    history: History,
    result: Option<BmiResult>,
    chart: ChartView,
    chart_clock: TickClock,
    meter: Vec<DrawCommand>,
    bar: Option<BarGrowth>,
    bounce: Option<Bounce>,
    background: BackgroundCycle,
    /// Error waiting to be shown in the modal
    pub error: Option<InputError>,
    /// Clear-history confirmation is open
    pub confirm_clear: bool,
}

impl DashState {
    pub fn new(config: DashConfig) -> Self {
        Self {
            weight_input: String::new(),
            height_input: String::new(),
            history: History::new(),
            result: None,
            chart: ChartView::Blank,
            chart_clock: TickClock::new(config.trace_tick_ms),
            meter: chart::render_meter_empty(),
            bar: None,
            bounce: None,
            background: BackgroundCycle::new(config.background_interval_ms),
            error: None,
            confirm_clear: false,
            config,
        }
    }

    /// Calculate from the input fields. On success the value joins the
    /// history and every animation restarts; on error nothing changes
    /// except the pending error.
    pub fn submit(&mut self) {
        if self.modal_open() {
            return;
        }
        let result = match calculate(&self.weight_input, &self.height_input) {
            Ok(result) => result,
            Err(e) => {
                log::warn!(
                    "rejected input weight={:?} height={:?}: {}",
                    self.weight_input, self.height_input, e
                );
                self.error = Some(e);
                return;
            }
        };

        log::debug!("bmi {} ({})", result.value, result.category.label());
        self.history.append(result.value);
        self.result = Some(result);

        // A new result replaces any animation still in flight
        self.chart = ChartView::Chart(HistoryChart::new(&self.history.values(), self.config.trace_speed));
        self.chart_clock.reset();
        self.meter = chart::render_meter(result.value);

        let target = BarGrowth::target_width(result.value, self.config.bar_scale, self.config.bar_max_width);
        self.bar = Some(BarGrowth::new(target, self.config.bar_step, self.config.bar_tick_ms));
        self.bounce = Some(Bounce::new(self.config.bounce_step_ms));
    }

    /// An error or the clear confirmation is waiting for the user.
    pub fn modal_open(&self) -> bool {
        self.error.is_some() || self.confirm_clear
    }

    /// Open the clear-history confirmation.
    pub fn request_clear(&mut self) {
        if self.error.is_none() {
            self.confirm_clear = true;
        }
    }

    /// Empty the history. Callers confirm with the user first.
    pub fn clear_history(&mut self) {
        log::info!("clearing {} history entries", self.history.len());
        self.history.clear();
        self.chart = ChartView::Cleared(chart::history::cleared_message());
        self.confirm_clear = false;
    }

    /// Advance every running effect by `dt` seconds of real time.
    pub fn update(&mut self, dt: f32) {
        if self.config.animate_background {
            self.background.update(dt);
        }

        let dt = dt.min(MAX_ANIMATION_DT);

        if let ChartView::Chart(chart) = &mut self.chart {
            if !chart.is_finished() {
                let ticks = self.chart_clock.update(dt);
                chart.advance(ticks);
            }
        }
        if let Some(bar) = &mut self.bar {
            bar.update(dt);
        }
        if let Some(bounce) = &mut self.bounce {
            bounce.update(dt);
        }
    }

    /// Whether anything needs a steady frame rate.
    pub fn is_animating(&self) -> bool {
        let tracing = matches!(&self.chart, ChartView::Chart(c) if !c.is_finished());
        let growing = self.bar.map_or(false, |b| !b.is_done());
        let bouncing = self.bounce.map_or(false, |b| !b.is_done());
        tracing || growing || bouncing
    }

    /// Seconds until the background changes, if it is cycling.
    pub fn next_background_change(&self) -> Option<f32> {
        self.config.animate_background.then(|| self.background.until_next())
    }

    pub fn background(&self) -> Color32 {
        self.background.color()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn result(&self) -> Option<&BmiResult> {
        self.result.as_ref()
    }

    pub fn chart_commands(&self) -> Vec<&DrawCommand> {
        match &self.chart {
            ChartView::Blank => Vec::new(),
            ChartView::Cleared(cmds) => cmds.iter().collect(),
            ChartView::Chart(chart) => chart.commands().collect(),
        }
    }

    pub fn meter_commands(&self) -> &[DrawCommand] {
        &self.meter
    }

    pub fn bar_width(&self) -> f32 {
        self.bar.map_or(0.0, |b| b.width())
    }

    pub fn emoji_offset(&self) -> f32 {
        self.bounce.map_or(0.0, |b| b.offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DashState {
        DashState::new(DashConfig::default())
    }

    fn submit(s: &mut DashState, w: &str, h: &str) -> Result<BmiResult, InputError> {
        s.weight_input = w.to_string();
        s.height_input = h.to_string();
        s.error = None;
        let before = s.history().len();
        s.submit();
        match s.error {
            Some(e) => {
                assert_eq!(s.history().len(), before);
                Err(e)
            }
            None => Ok(*s.result().unwrap()),
        }
    }

    #[test]
    fn test_successful_submit_appends() {
        let mut s = state();
        submit(&mut s, "70", "175").unwrap();
        submit(&mut s, "45", "160").unwrap();
        submit(&mut s, "90", "170").unwrap();
        assert_eq!(s.history().values(), vec![22.86, 17.58, 31.14]);
        assert_eq!(s.result().map(|r| r.value), Some(31.14));
        assert!(s.is_animating());
    }

    #[test]
    fn test_error_leaves_state_alone() {
        let mut s = state();
        submit(&mut s, "70", "175").unwrap();
        let before = s.meter_commands().to_vec();

        assert_eq!(submit(&mut s, "abc", "170"), Err(InputError::NonNumeric));
        assert_eq!(submit(&mut s, "70", "0"), Err(InputError::NonPositiveHeight));
        assert_eq!(s.error, Some(InputError::NonPositiveHeight));
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.meter_commands(), before.as_slice());
        assert_eq!(s.result().map(|r| r.value), Some(22.86));
    }

    #[test]
    fn test_clear_shows_message() {
        let mut s = state();
        submit(&mut s, "70", "175").unwrap();
        s.confirm_clear = true;
        s.clear_history();
        assert!(s.history().is_empty());
        assert!(!s.confirm_clear);
        let cmds = s.chart_commands();
        assert_eq!(cmds.len(), 1);
        assert!(matches!(cmds[0], DrawCommand::Text { text, .. } if text == "History Cleared"));
    }

    #[test]
    fn test_animations_settle() {
        let mut s = state();
        submit(&mut s, "70", "175").unwrap();
        submit(&mut s, "90", "170").unwrap();
        for _ in 0..400 {
            s.update(0.033);
        }
        assert!(!s.is_animating());
        assert_eq!(s.bar_width(), 300.0);
        assert_eq!(s.emoji_offset(), 0.0);
        let circles = s
            .chart_commands()
            .into_iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(circles, 2);
    }

    #[test]
    fn test_new_result_restarts_trace() {
        let mut s = state();
        submit(&mut s, "70", "175").unwrap();
        for _ in 0..100 {
            s.update(0.033);
        }
        submit(&mut s, "45", "160").unwrap();
        // fresh chart: axes only, nothing traced yet
        let traced = s
            .chart_commands()
            .into_iter()
            .any(|c| matches!(c, DrawCommand::Circle { .. }));
        assert!(!traced);
    }

    #[test]
    fn test_blank_before_first_result() {
        let s = state();
        assert!(s.chart_commands().is_empty());
        assert!(!s.is_animating());
        assert_eq!(s.meter_commands(), chart::render_meter_empty().as_slice());
    }

    #[test]
    fn test_idle_background_keeps_time() {
        let mut s = state();
        let start = s.background();
        // idle wake-ups land a little after each scheduled change
        let mut changes = 0;
        let mut elapsed = 0.0;
        let mut last = start;
        while elapsed < 4.0 {
            let wait = s.next_background_change().unwrap() + 0.01;
            elapsed += wait;
            s.update(wait);
            if s.background() != last {
                changes += 1;
                last = s.background();
            }
        }
        // one change per 800 ms
        assert!(changes >= 4, "only {} changes in {:.2}s", changes, elapsed);
    }

    #[test]
    fn test_late_frame_still_changes_background() {
        let mut s = state();
        let start = s.background();
        s.update(0.9);
        assert_ne!(s.background(), start);
    }

    #[test]
    fn test_late_frame_does_not_skip_animations() {
        let mut s = state();
        submit(&mut s, "90", "170").unwrap();
        s.update(5.0);
        // capped step: the bar is partway, not at its 300 px target
        assert!(s.bar_width() < 300.0);
        assert!(s.is_animating());
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut s = state();
        assert_eq!(submit(&mut s, "1e307", "100"), Err(InputError::OutOfRange));
        assert!(s.history().is_empty());
        assert!(!s.is_animating());
    }

    #[test]
    fn test_open_dialog_blocks_input() {
        let mut s = state();
        submit(&mut s, "70", "175").unwrap();

        s.request_clear();
        assert!(s.modal_open());
        s.weight_input = "90".to_string();
        s.height_input = "170".to_string();
        s.submit();
        assert_eq!(s.history().len(), 1);

        s.confirm_clear = false;
        s.height_input = "0".to_string();
        s.submit();
        assert_eq!(s.error, Some(InputError::NonPositiveHeight));
        // no confirmation stacked on top of an error
        s.request_clear();
        assert!(!s.confirm_clear);
        s.height_input = "170".to_string();
        s.submit();
        assert_eq!(s.history().len(), 1);
    }
}
