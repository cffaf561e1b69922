//! Reveal timelines
//!
//! A reveal animates one or more children from a hidden pose to the resting
//! pose. Unlike a fire-and-forget keyframe animation it is reversible:
//! `reverse()` from any point runs the same motion backward from the current
//! progress, which is what scroll-driven entrance/exit behavior needs.

use crate::easing::Easing;
use crate::properties::TweenProps;

/// Playback direction of a timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayDirection {
    #[default]
    Forward,
    Backward,
}

/// A reversible two-pose animation with per-child stagger.
#[derive(Clone, Debug)]
pub struct RevealTimeline {
    /// Hidden pose children start from.
    from: TweenProps,
    /// Resting pose (identity unless overridden).
    to: TweenProps,
    /// Duration of a single child's tween in milliseconds.
    duration_ms: u32,
    easing: Easing,
    /// Offset between consecutive children's start times.
    stagger_ms: u32,
    /// Number of staggered children (at least 1).
    children: usize,
    /// Master clock in [0, total_duration_ms].
    elapsed_ms: f32,
    direction: PlayDirection,
    running: bool,
}

impl RevealTimeline {
    /// Create a reveal for a single child.
    pub fn new(from: TweenProps, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to: TweenProps::rest(),
            duration_ms: duration_ms.max(1),
            easing,
            stagger_ms: 0,
            children: 1,
            elapsed_ms: 0.0,
            direction: PlayDirection::Forward,
            running: false,
        }
    }

    /// Builder: stagger `children` items by `stagger_ms` each.
    pub fn staggered(mut self, children: usize, stagger_ms: u32) -> Self {
        self.children = children.max(1);
        self.stagger_ms = stagger_ms;
        self
    }

    /// Builder: override the resting pose.
    pub fn to(mut self, to: TweenProps) -> Self {
        self.to = to;
        self
    }

    /// Total duration including the last child's stagger offset.
    pub fn total_duration_ms(&self) -> f32 {
        self.duration_ms as f32 + (self.stagger_ms as f32) * (self.children as f32 - 1.0)
    }

    /// Master progress in [0, 1].
    pub fn progress(&self) -> f32 {
        (self.elapsed_ms / self.total_duration_ms()).clamp(0.0, 1.0)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    /// True when the timeline sits at the hidden pose.
    pub fn at_start(&self) -> bool {
        self.elapsed_ms <= 0.0
    }

    /// True when every child has reached the resting pose.
    pub fn at_end(&self) -> bool {
        self.elapsed_ms >= self.total_duration_ms()
    }

    /// Run forward from the current progress.
    pub fn play(&mut self) {
        tracing::trace!(progress = self.progress(), "timeline play");
        self.direction = PlayDirection::Forward;
        self.running = !self.at_end();
    }

    /// Run backward from the current progress.
    pub fn reverse(&mut self) {
        tracing::trace!(progress = self.progress(), "timeline reverse");
        self.direction = PlayDirection::Backward;
        self.running = !self.at_start();
    }

    /// Freeze immediately, keeping the current progress.
    pub fn halt(&mut self) {
        self.running = false;
    }

    /// Advance by `dt_ms` in the current direction.
    ///
    /// Returns true while still running. The clock clamps at either bound
    /// and the timeline stops there; progress moves monotonically in the
    /// current direction between `play`/`reverse` calls.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.running {
            return false;
        }

        match self.direction {
            PlayDirection::Forward => {
                self.elapsed_ms += dt_ms;
                if self.at_end() {
                    self.elapsed_ms = self.total_duration_ms();
                    self.running = false;
                }
            }
            PlayDirection::Backward => {
                self.elapsed_ms -= dt_ms;
                if self.at_start() {
                    self.elapsed_ms = 0.0;
                    self.running = false;
                }
            }
        }

        self.running
    }

    /// Current pose of the child at `index`, honoring the stagger offset.
    ///
    /// Indices past the configured child count clamp to the last child.
    pub fn props_for(&self, index: usize) -> TweenProps {
        let index = index.min(self.children - 1);
        let start = (self.stagger_ms as f32) * index as f32;
        let local = ((self.elapsed_ms - start) / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.apply(local);
        self.from.lerp(&self.to, eased)
    }
}
