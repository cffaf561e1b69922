//! Smooth-scroll driver
//!
//! Owns the virtual scroll and the frame loop. Each frame the driver ticks
//! the interpolator exactly once, snapshots the position, and notifies every
//! observer with that same snapshot - no observer ever sees a partially
//! updated frame.

use crate::error::ScrollError;
use crate::frame_loop::FrameLoop;
use crate::virtual_scroll::{Orientation, VirtualScroll};
use kinema_animation::Easing;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Driver configuration; defaults match the page setup (1.2s exponential
/// ease, vertical, intercepting raw wheel/touch input).
#[derive(Clone, Copy, Debug)]
pub struct SmoothScrollConfig {
    /// Smoothing time constant in seconds.
    pub duration_secs: f32,
    pub easing: Easing,
    pub orientation: Orientation,
    /// Whether raw input is intercepted and eased. When false the virtual
    /// position mirrors the raw offset directly.
    pub capture_input: bool,
    pub target_fps: u32,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            duration_secs: 1.2,
            easing: Easing::ExpoOut,
            orientation: Orientation::Vertical,
            capture_input: true,
            target_fps: 120,
        }
    }
}

/// Observer of per-frame virtual scroll positions.
pub trait ScrollObserver: Send {
    fn on_frame(&mut self, position: f32, dt: Duration);
}

/// Shared observer registration handle.
pub type SharedObserver = Arc<Mutex<dyn ScrollObserver>>;

struct DriverState {
    scroll: VirtualScroll,
    observers: Vec<SharedObserver>,
}

impl DriverState {
    /// One frame: tick once, snapshot, then notify everyone with the
    /// snapshot. Observer callbacks run outside the state lock so they may
    /// feed input back into the driver.
    fn step(state: &Arc<Mutex<DriverState>>, dt: Duration) {
        let (position, observers) = {
            let mut st = state.lock().unwrap();
            let position = st.scroll.tick(dt.as_secs_f32());
            (position, st.observers.clone())
        };
        for observer in &observers {
            observer.lock().unwrap().on_frame(position, dt);
        }
    }
}

/// The smooth-scroll driver.
pub struct SmoothScroll {
    state: Arc<Mutex<DriverState>>,
    config: SmoothScrollConfig,
}

impl SmoothScroll {
    pub fn new(config: SmoothScrollConfig) -> Self {
        let scroll = VirtualScroll::new(
            config.duration_secs,
            config.easing,
            config.orientation,
            config.capture_input,
        );
        Self {
            state: Arc::new(Mutex::new(DriverState {
                scroll,
                observers: Vec::new(),
            })),
            config,
        }
    }

    pub fn config(&self) -> SmoothScrollConfig {
        self.config
    }

    /// Register an observer; it is notified every frame from the next one.
    pub fn add_observer(&self, observer: SharedObserver) {
        self.state.lock().unwrap().observers.push(observer);
    }

    /// Feed a raw scroll input sample (wheel/touch offset on the configured
    /// axis).
    pub fn set_raw_position(&self, raw: f32) {
        self.state.lock().unwrap().scroll.set_target(raw);
    }

    /// Current virtual position.
    pub fn position(&self) -> f32 {
        self.state.lock().unwrap().scroll.position()
    }

    /// True once the virtual position has caught up with the raw input.
    pub fn is_settled(&self) -> bool {
        self.state.lock().unwrap().scroll.is_settled()
    }

    /// Begin the per-frame update loop.
    ///
    /// Fails fast when frame scheduling is unavailable; in that case the
    /// page stays usable, just without smooth scrolling. The returned
    /// handle must be stopped (or dropped) on view teardown.
    pub fn start(&self) -> Result<ScrollHandle, ScrollError> {
        let state = Arc::clone(&self.state);
        let frames = FrameLoop::start(self.config.target_fps, move |dt| {
            DriverState::step(&state, dt);
        })?;
        tracing::debug!(
            fps = self.config.target_fps,
            orientation = ?self.config.orientation,
            "smooth scroll started"
        );
        Ok(ScrollHandle { frames })
    }

    /// Advance one frame manually. Headless hosts and tests drive the
    /// pipeline with this instead of `start`.
    pub fn step(&self, dt: Duration) {
        DriverState::step(&self.state, dt);
    }
}

/// Handle to a running driver loop; stopping detaches all frame delivery.
pub struct ScrollHandle {
    frames: FrameLoop,
}

impl ScrollHandle {
    /// Cancel the frame loop. Idempotent; after it returns no observer will
    /// be notified again.
    pub fn stop(&mut self) {
        self.frames.stop();
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }
}
