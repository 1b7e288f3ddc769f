//! Timer-driven effects for the dashboard
//!
//! Every effect here is a small state machine advanced by frame time
//! (`dt` in seconds). Each one owns a [`TickClock`] that turns the uneven
//! frame deltas into whole fixed-length ticks, so the on-screen speed is
//! the same whatever the repaint rate.

use egui::Color32;

/// Converts frame time into fixed-length ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickClock {
    /// Tick length in seconds
    interval: f32,
    /// Time carried over from previous updates
    carry: f32,
}

impl TickClock {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: (interval_ms.max(1) as f32) / 1000.0,
            carry: 0.0,
        }
    }

    /// Add `dt` seconds, return how many ticks are now due.
    pub fn update(&mut self, dt: f32) -> u32 {
        self.carry += dt.max(0.0);
        let ticks = (self.carry / self.interval).floor();
        self.carry -= ticks * self.interval;
        ticks as u32
    }

    /// Seconds until the next tick fires.
    pub fn remaining(&self) -> f32 {
        (self.interval - self.carry).max(0.0)
    }

    pub fn reset(&mut self) {
        self.carry = 0.0;
    }
}

/// The result bar growing from empty to its target width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGrowth {
    width: f32,
    target: f32,
    step: f32,
    clock: TickClock,
}

impl BarGrowth {
    /// Bar width for a BMI value: `min(bmi * scale, max_width)`.
    pub fn target_width(bmi: f64, scale: f32, max_width: f32) -> f32 {
        (bmi as f32 * scale).clamp(0.0, max_width)
    }

    pub fn new(target: f32, step: f32, tick_ms: u64) -> Self {
        Self {
            width: 0.0,
            target,
            step: step.max(f32::EPSILON),
            clock: TickClock::new(tick_ms),
        }
    }

    pub fn update(&mut self, dt: f32) {
        let ticks = self.clock.update(dt);
        self.width = (self.width + ticks as f32 * self.step).min(self.target);
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.width >= self.target
    }
}

/// Number of half-bounces the emoji makes.
pub const BOUNCE_STEPS: u32 = 7;
/// Pixels the emoji jumps up.
pub const BOUNCE_HEIGHT: f32 = 6.0;

/// Emoji hop: up, down, up ... then rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    step: u32,
    clock: TickClock,
}

impl Bounce {
    pub fn new(step_ms: u64) -> Self {
        Self {
            step: 0,
            clock: TickClock::new(step_ms),
        }
    }

    pub fn update(&mut self, dt: f32) {
        let ticks = self.clock.update(dt);
        self.step = (self.step + ticks).min(BOUNCE_STEPS);
    }

    /// Vertical offset in pixels; negative is up.
    pub fn offset(&self) -> f32 {
        if !self.is_done() && self.step % 2 == 0 {
            -BOUNCE_HEIGHT
        } else {
            0.0
        }
    }

    pub fn is_done(&self) -> bool {
        self.step >= BOUNCE_STEPS
    }
}

pub const BACKGROUND_COLORS: [Color32; 5] = [
    Color32::from_rgb(0xFF, 0xD8, 0xE8),
    Color32::from_rgb(0xFF, 0xEE, 0xD4),
    Color32::from_rgb(0xE8, 0xFF, 0xD8),
    Color32::from_rgb(0xD8, 0xF1, 0xFF),
    Color32::from_rgb(0xF0, 0xD8, 0xFF),
];

/// Endless walk through [`BACKGROUND_COLORS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundCycle {
    index: usize,
    clock: TickClock,
}

impl BackgroundCycle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            index: 0,
            clock: TickClock::new(interval_ms),
        }
    }

    pub fn update(&mut self, dt: f32) {
        let ticks = self.clock.update(dt) as usize;
        self.index = (self.index + ticks) % BACKGROUND_COLORS.len();
    }

    pub fn color(&self) -> Color32 {
        BACKGROUND_COLORS[self.index]
    }

    /// Seconds until the color changes.
    pub fn until_next(&self) -> f32 {
        self.clock.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_clock_carries_remainder() {
        let mut clock = TickClock::new(10);
        assert_eq!(clock.update(0.004), 0);
        assert_eq!(clock.update(0.004), 0);
        // 0.012 total
        assert_eq!(clock.update(0.004), 1);
        assert_eq!(clock.update(0.035), 3);
        assert!(clock.remaining() > 0.0);
    }

    #[test]
    fn test_tick_clock_ignores_negative_time() {
        let mut clock = TickClock::new(10);
        assert_eq!(clock.update(-1.0), 0);
        assert_eq!(clock.update(0.0105), 1);
    }

    #[test]
    fn test_bar_target_is_capped() {
        assert_eq!(BarGrowth::target_width(20.0, 12.0, 300.0), 240.0);
        assert_eq!(BarGrowth::target_width(31.14, 12.0, 300.0), 300.0);
    }

    #[test]
    fn test_bar_grows_to_target() {
        let mut bar = BarGrowth::new(22.0, 5.0, 7);
        assert_eq!(bar.width(), 0.0);
        bar.update(0.0075);
        assert_eq!(bar.width(), 5.0);
        assert!(!bar.is_done());
        bar.update(1.0);
        assert_eq!(bar.width(), 22.0);
        assert!(bar.is_done());
    }

    #[test]
    fn test_bounce_returns_to_rest() {
        let mut b = Bounce::new(80);
        assert_eq!(b.offset(), -BOUNCE_HEIGHT);
        b.update(0.085);
        assert_eq!(b.offset(), 0.0);
        b.update(0.08);
        assert_eq!(b.offset(), -BOUNCE_HEIGHT);
        b.update(10.0);
        assert!(b.is_done());
        assert_eq!(b.offset(), 0.0);
    }

    #[test]
    fn test_background_wraps() {
        let mut bg = BackgroundCycle::new(800);
        assert_eq!(bg.color(), BACKGROUND_COLORS[0]);
        bg.update(0.81);
        assert_eq!(bg.color(), BACKGROUND_COLORS[1]);
        bg.update(0.8 * 4.0 + 0.001);
        assert_eq!(bg.color(), BACKGROUND_COLORS[0]);
    }
}
