//! Virtual scroll interpolation
//!
//! The virtual position trails the latest raw input sample along a fixed
//! duration easing curve. A new sample restarts the ease from the current
//! position, so the motion stays continuous under rapid input.

use kinema_animation::Easing;

/// Scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Eased stand-in for the raw scroll offset.
#[derive(Clone, Debug)]
pub struct VirtualScroll {
    /// Smoothing time constant in seconds.
    duration_secs: f32,
    easing: Easing,
    /// Axis the raw samples are measured along.
    orientation: Orientation,
    /// When false, raw samples are adopted without interpolation.
    smooth: bool,
    from: f32,
    target: f32,
    current: f32,
    elapsed_secs: f32,
}

impl VirtualScroll {
    pub fn new(duration_secs: f32, easing: Easing, orientation: Orientation, smooth: bool) -> Self {
        Self {
            duration_secs: duration_secs.max(1e-3),
            easing,
            orientation,
            smooth,
            from: 0.0,
            target: 0.0,
            current: 0.0,
            elapsed_secs: 0.0,
        }
    }

    /// The configured scroll axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Feed the latest raw input sample.
    pub fn set_target(&mut self, raw: f32) {
        if !self.smooth {
            self.from = raw;
            self.target = raw;
            self.current = raw;
            self.elapsed_secs = self.duration_secs;
            return;
        }
        if (raw - self.target).abs() > f32::EPSILON {
            self.from = self.current;
            self.target = raw;
            self.elapsed_secs = 0.0;
        }
    }

    /// Advance the ease by `dt_secs` and return the new position.
    ///
    /// Converges exactly onto the target once the duration elapses; with a
    /// monotonic easing the position never overshoots the target.
    pub fn tick(&mut self, dt_secs: f32) -> f32 {
        if !self.is_settled() {
            self.elapsed_secs += dt_secs;
            let t = (self.elapsed_secs / self.duration_secs).min(1.0);
            self.current = self.from + (self.target - self.from) * self.easing.apply(t);
        }
        self.current
    }

    /// The current virtual position.
    pub fn position(&self) -> f32 {
        self.current
    }

    /// The latest raw sample.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// True once the virtual position has reached the raw sample.
    pub fn is_settled(&self) -> bool {
        self.elapsed_secs >= self.duration_secs || (self.current - self.target).abs() < f32::EPSILON
    }
}
