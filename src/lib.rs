//! # tweenlet
//!
//! A small, callback-driven property tweening library.
//!
//! Animate one or more named numeric values from a start to an end over a
//! duration with a selectable easing curve, and get lifecycle callbacks
//! for updates, completion and interruption. A process-wide registry
//! tracks which animations are mid-flight and drives them all from one
//! shared frame loop, armed on demand and torn down as soon as the last
//! animation reaches a terminal state.

pub mod animation;
pub mod easing;
pub mod frame;
pub mod registry;
pub mod tween;

// Re-export public API
pub use animation::{Animation, AnimationOptions};
pub use easing::Easing;
pub use frame::{init_frame_scheduler, FrameCallback, FrameScheduler, IntervalFrames};
pub use registry::{active_count, cancel_all, AnimationId};
pub use tween::{Lerp, Tween, Values};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, TweenError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum TweenError {
    #[error("animated property sets differ: {0}")]
    PropertyMismatch(String),

    #[error("unknown easing curve: {0}")]
    UnknownEasing(String),
}
