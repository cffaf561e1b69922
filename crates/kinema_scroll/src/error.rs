//! Scroll pipeline errors

/// Failures starting or driving the scroll pipeline.
///
/// Animation features fail fast and loud here; nothing in this enum should
/// take the rest of the page down. Callers that can live without smooth
/// scrolling log the error and continue with raw positions.
#[derive(Debug, thiserror::Error)]
pub enum ScrollError {
    /// The host cannot schedule frames (background thread unavailable).
    #[error("frame scheduling unavailable: {0}")]
    FrameSchedulingUnavailable(#[source] std::io::Error),
}
