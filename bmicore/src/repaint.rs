//! Repaint scheduling for the dashboard
//!
//! egui only redraws on input unless asked. The dashboard has two kinds of
//! timed work:
//!
//! 1. **Animations** (chart trace, bar growth, emoji bounce) need a steady
//!    frame rate while they run. Call `set_continuous(true)`.
//! 2. **Slow timers** (the background color cycle) only need one wake-up at
//!    a known time. Call `schedule_in(delay)`.
//!
//! Call [`RepaintController::begin_frame`] at the top of `update()`; it
//! returns the real seconds since the previous frame. Call
//! [`RepaintController::end_frame`] at the bottom.

use std::time::{Duration, Instant};

/// Frame interval while an animation is running (~30 Hz).
const FAST_REPAINT_INTERVAL: Duration = Duration::from_millis(33);

pub struct RepaintController {
    continuous: bool,
    interval: Duration,
    /// Earliest pending one-shot wake-up requested this frame
    scheduled: Option<Duration>,
    /// Start of the previous frame; `None` before the first one
    last_frame: Option<Instant>,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            continuous: false,
            interval: FAST_REPAINT_INTERVAL,
            scheduled: None,
            last_frame: None,
        }
    }

    /// Keep repainting at the fast interval until turned off.
    pub fn set_continuous(&mut self, continuous: bool) {
        self.continuous = continuous;
    }

    /// Ask for one repaint after `delay`. The earliest request in a frame wins.
    pub fn schedule_in(&mut self, delay: Duration) {
        self.scheduled = Some(match self.scheduled {
            Some(existing) => existing.min(delay),
            None => delay,
        });
    }

    /// Call at the **start** of `update()`. Returns seconds since the
    /// previous frame, uncapped; 0 on the first frame.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
        self.last_frame = Some(now);
        self.scheduled = None;
        dt
    }

    /// The wake-up `end_frame` will request, if any.
    pub fn next_wakeup(&self) -> Option<Duration> {
        match (self.continuous, self.scheduled) {
            (true, Some(delay)) => Some(delay.min(self.interval)),
            (true, None) => Some(self.interval),
            (false, delay) => delay,
        }
    }

    /// Call at the **end** of `update()` to schedule the next wake-up.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if let Some(delay) = self.next_wakeup() {
            ctx.request_repaint_after(delay);
        }
    }
}
