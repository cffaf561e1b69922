//! Frame loop
//!
//! A cancellable repeating task: a background thread invokes a callback
//! once per frame at a target rate, replacing the recursive
//! request-next-frame pattern with an explicit start/stop pair.

use crate::error::ScrollError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A running per-frame callback with guaranteed cancellation.
///
/// `stop` is idempotent and joins the thread, so once it returns no further
/// callback invocation can occur. Dropping the loop stops it.
pub struct FrameLoop {
    cancel: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl FrameLoop {
    /// Spawn the loop, invoking `on_frame(dt)` roughly every
    /// `1 / target_fps` seconds.
    ///
    /// Fails fast with [`ScrollError::FrameSchedulingUnavailable`] when the
    /// host refuses the thread; callers should degrade to a static page
    /// rather than retry.
    pub fn start(
        target_fps: u32,
        mut on_frame: impl FnMut(Duration) + Send + 'static,
    ) -> Result<Self, ScrollError> {
        let frame_budget = Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)));
        let cancel = Arc::new(AtomicBool::new(false));
        let cancelled = Arc::clone(&cancel);

        let thread = thread::Builder::new()
            .name("kinema-frames".into())
            .spawn(move || {
                tracing::debug!(?frame_budget, "frame loop started");
                let mut last = Instant::now();
                while !cancelled.load(Ordering::Acquire) {
                    let now = Instant::now();
                    on_frame(now - last);
                    last = now;

                    let spent = now.elapsed();
                    if spent < frame_budget {
                        thread::sleep(frame_budget - spent);
                    }
                }
                tracing::debug!("frame loop stopped");
            })
            .map_err(ScrollError::FrameSchedulingUnavailable)?;

        Ok(Self {
            cancel,
            thread: Some(thread),
        })
    }

    /// Cancel the loop and wait for the thread to exit. Safe to call any
    /// number of times.
    pub fn stop(&mut self) {
        self.cancel.store(true, Ordering::Release);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }

    /// True until `stop` has completed.
    pub fn is_running(&self) -> bool {
        self.thread.is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn ticks_until_stopped_then_never_again() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&count);

        let mut frames = FrameLoop::start(240, move |_dt| {
            counter.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();

        thread::sleep(Duration::from_millis(50));
        assert!(count.load(Ordering::Relaxed) > 0);

        frames.stop();
        let after_stop = count.load(Ordering::Relaxed);
        thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::Relaxed), after_stop);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut frames = FrameLoop::start(240, |_dt| {}).unwrap();
        frames.stop();
        frames.stop();
        assert!(!frames.is_running());
    }
}
