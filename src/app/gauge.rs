//! Gauge state: the value animation and the mapping from a value onto the
//! dial's ring, needle and colour band.

mod timer;

use std::borrow::Cow;

pub use timer::AnimationTimer;

use crate::constants::*;

/// Which of the two gauges an event is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaugeId {
    Download,
    Upload,
}

/// The colour band a gauge reading falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedBand {
    Slow,
    Medium,
    Fast,
}

impl SpeedBand {
    /// Below 33% is slow, below 66% is medium, anything else is fast.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < MEDIUM_BAND_THRESHOLD {
            SpeedBand::Slow
        } else if percentage < FAST_BAND_THRESHOLD {
            SpeedBand::Medium
        } else {
            SpeedBand::Fast
        }
    }
}

/// How full a gauge is, from 0 to 100. A non-positive maximum reads as empty.
pub fn gauge_percentage(displayed: f64, max_value: f64) -> f64 {
    if max_value <= 0.0 || !max_value.is_finite() {
        return 0.0;
    }

    let percentage = displayed / max_value * 100.0;
    if percentage.is_finite() {
        percentage.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// The needle angle in degrees, where 0 points straight up and positive is
/// clockwise. Sweeps from -135 at 0% to 135 at 100%.
pub fn needle_angle(percentage: f64) -> f64 {
    percentage / 100.0 * NEEDLE_SWEEP_DEGREES + NEEDLE_START_DEGREES
}

/// The dash offset of the progress ring at the given percentage.
pub fn progress_dash_offset(percentage: f64) -> f64 {
    RING_GAP + (RING_DASH - RING_GAP) * (1.0 - percentage / 100.0)
}

/// The circumference of the gauge ring.
pub fn ring_circumference() -> f64 {
    2.0 * std::f64::consts::PI * RING_RADIUS
}

/// The visible parts of a ring stroked with a `RING_DASH`-long dash, a
/// `RING_DASH`-long gap, and the given dash offset. Each part is a
/// `(start, end)` pair of distances along the ring, from the top going
/// clockwise.
pub fn dash_segments(offset: f64) -> Vec<(f64, f64)> {
    let circumference = ring_circumference();
    let pattern = RING_DASH * 2.0;

    let mut segments = Vec::with_capacity(2);
    let mut dash_start = -offset.rem_euclid(pattern);
    while dash_start < circumference {
        let start = dash_start.max(0.0);
        let end = (dash_start + RING_DASH).min(circumference);
        if end > start {
            segments.push((start, end));
        }
        dash_start += pattern;
    }

    segments
}

/// Animates a displayed value from 0 toward a target in equal steps.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeAnimation {
    target: f64,
    increment: f64,
    displayed: f64,
    finished: bool,
}

impl Default for GaugeAnimation {
    fn default() -> Self {
        Self {
            target: 0.0,
            increment: 0.0,
            displayed: 0.0,
            finished: true,
        }
    }
}

impl GaugeAnimation {
    pub fn new(target: f64, steps: u32) -> Self {
        let target = if target.is_finite() { target } else { 0.0 };

        Self {
            target,
            increment: target / f64::from(steps.max(1)),
            displayed: 0.0,
            finished: false,
        }
    }

    /// Advances by one step. Once the next step would reach the target,
    /// snaps to it exactly.
    ///
    /// Returns whether more steps remain.
    pub fn step(&mut self) -> bool {
        if self.finished {
            return false;
        }

        let next = self.displayed + self.increment;
        if next >= self.target {
            self.displayed = self.target;
            self.finished = true;
        } else {
            self.displayed = next;
        }

        !self.finished
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// A gauge's state, including its running animation timer.
#[derive(Debug)]
pub struct SpeedGauge {
    label: Cow<'static, str>,
    max_value: f64,
    animation: GaugeAnimation,
    generation: u64,
    timer: Option<AnimationTimer>,
}

impl SpeedGauge {
    pub fn new<L: Into<Cow<'static, str>>>(label: L, max_value: f64) -> Self {
        Self {
            label: label.into(),
            max_value,
            animation: GaugeAnimation::default(),
            generation: 0,
            timer: None,
        }
    }

    /// Points the gauge at a new target, restarting the animation from 0.
    ///
    /// Returns the generation of the new animation, or `None` if the target
    /// did not change. Any running timer is cancelled.
    pub fn set_target(&mut self, value: f64) -> Option<u64> {
        if value == self.animation.target() {
            return None;
        }

        self.cancel_timer();
        self.generation += 1;
        self.animation = GaugeAnimation::new(value, ANIMATION_STEPS);

        Some(self.generation)
    }

    /// Hands the timer driving the current animation to the gauge.
    pub fn attach_timer(&mut self, timer: AnimationTimer) {
        self.cancel_timer();
        self.timer = Some(timer);
    }

    /// Advances the animation if `generation` is the current one. Ticks from
    /// a replaced animation are ignored.
    ///
    /// Returns whether the tick changed anything.
    pub fn on_tick(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.animation.is_finished() {
            return false;
        }

        if !self.animation.step() {
            self.cancel_timer();
        }

        true
    }

    pub fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    #[cfg(test)]
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn unit_label(&self) -> &str {
        DEFAULT_GAUGE_UNIT
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn target(&self) -> f64 {
        self.animation.target()
    }

    pub fn displayed(&self) -> f64 {
        self.animation.displayed()
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        !self.animation.is_finished()
    }

    pub fn percentage(&self) -> f64 {
        gauge_percentage(self.displayed(), self.max_value)
    }
}
