//! Frame clock and runtime services for Slidepane
//!
//! Everything here is single-threaded and cooperative: the host owns a
//! [`Runtime`], pumps it once per display frame with
//! [`RuntimeHandle::drain_frame_callbacks`], and the panel's animations
//! re-register themselves tick by tick. No background threads, no locks.

mod frame_clock;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};
