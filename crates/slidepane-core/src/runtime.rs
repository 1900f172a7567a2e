//! Frame callback registry.
//!
//! Frame callbacks are one-shot: a callback registered during frame N fires
//! exactly once, at frame N+1's drain. Continuous animations re-register from
//! inside their callback.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;

pub type FrameCallbackId = u64;

struct RuntimeInner {
    next_callback_id: FrameCallbackId,
    frame_callbacks: FxHashMap<FrameCallbackId, Box<dyn FnOnce(u64)>>,
    shut_down: bool,
}

impl RuntimeInner {
    fn new() -> Self {
        Self {
            next_callback_id: 1,
            frame_callbacks: FxHashMap::default(),
            shut_down: false,
        }
    }
}

/// Owner of the frame callback registry. Hosts create one per UI loop and
/// hand out [`RuntimeHandle`]s to components that need frame ticks.
pub struct Runtime {
    inner: Rc<RefCell<RuntimeInner>>,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RuntimeInner::new())),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheap cloneable handle to the runtime. All methods must be called from the
/// UI thread that owns the [`Runtime`].
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Rc<RefCell<RuntimeInner>>,
}

impl RuntimeHandle {
    /// Registers a callback for the next frame. Returns `None` if the runtime
    /// has been shut down, in which case the callback is dropped without
    /// running.
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        let mut inner = self.inner.borrow_mut();
        if inner.shut_down {
            return None;
        }
        let id = inner.next_callback_id;
        inner.next_callback_id += 1;
        inner.frame_callbacks.insert(id, Box::new(callback));
        Some(id)
    }

    /// Cancels a pending frame callback. Cancelling an already-fired or
    /// unknown id is a no-op.
    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        self.inner.borrow_mut().frame_callbacks.remove(&id);
    }

    /// Runs every callback registered before this call, passing the frame
    /// time in nanoseconds. Callbacks registered while draining (animations
    /// scheduling their next tick) are deferred to the next drain.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let callbacks: Vec<Box<dyn FnOnce(u64)>> = {
            let mut inner = self.inner.borrow_mut();
            let ids: Vec<FrameCallbackId> = inner.frame_callbacks.keys().copied().collect();
            ids.into_iter()
                .filter_map(|id| inner.frame_callbacks.remove(&id))
                .collect()
        };
        for callback in callbacks {
            callback(frame_time_nanos);
        }
    }

    /// Returns true if any frame callback is waiting for the next drain.
    pub fn has_pending_frame_callbacks(&self) -> bool {
        !self.inner.borrow().frame_callbacks.is_empty()
    }

    /// Drops all pending callbacks and rejects future registrations.
    pub fn shut_down(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.shut_down = true;
        inner.frame_callbacks.clear();
    }

    pub fn frame_clock(&self) -> crate::FrameClock {
        crate::FrameClock::new(self.clone())
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
