//! Slide animation driver for Slidepane
//!
//! Time-based tweens over the frame clock. The driver registers one frame
//! callback per tick and re-registers until the tween completes; starting a
//! new tween cancels the in-flight one explicitly, so overlapping animations
//! can never race.

mod animator;
mod easing;

pub use animator::*;
pub use easing::*;
