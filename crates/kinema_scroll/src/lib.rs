//! Kinema Scroll
//!
//! The smooth-scroll pipeline: raw input samples are eased into a virtual
//! scroll position on a frame loop, and a trigger registry plays or
//! reverses reveal timelines as regions cross viewport thresholds.
//!
//! # Pipeline
//!
//! ```text
//! raw input -> VirtualScroll (eased) -> observers -> TriggerRegistry
//!                    ^ ticked once per frame by FrameLoop
//! ```
//!
//! Every observer sees the same position snapshot within a frame. Stopping
//! the driver (or dropping its handle) cancels the frame loop before any
//! further tick; unregistering a binding halts its timeline immediately.

pub mod driver;
pub mod error;
pub mod frame_loop;
pub mod registry;
pub mod virtual_scroll;

pub use driver::{ScrollHandle, ScrollObserver, SharedObserver, SmoothScroll, SmoothScrollConfig};
pub use error::ScrollError;
pub use frame_loop::FrameLoop;
pub use registry::{
    BindingId, PlayState, ToggleActions, TriggerAction, TriggerBinding, TriggerEvent,
    TriggerRegistry, TriggerWindow,
};
pub use virtual_scroll::{Orientation, VirtualScroll};
