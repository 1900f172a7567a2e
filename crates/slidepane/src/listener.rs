//! Slide observers.

use crate::{PanelState, SlidingPanel};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::rc::Rc;

/// Implement this to observe changes in the panel.
///
/// `on_slide` fires synchronously on every ratio change — drag tick or
/// animation tick — strictly after the sliding element's position has been
/// updated, so observers always read consistent geometry.
pub trait SlideListener {
    fn on_slide(&self, panel: &SlidingPanel, state: PanelState, current_slide: f32);
}

impl<F> SlideListener for F
where
    F: Fn(&SlidingPanel, PanelState, f32),
{
    fn on_slide(&self, panel: &SlidingPanel, state: PanelState, current_slide: f32) {
        self(panel, state, current_slide)
    }
}

/// Registry keyed by listener identity. Registering the same `Rc` twice is a
/// no-op, as is removing one that was never registered; notification order is
/// unspecified.
#[derive(Default)]
pub(crate) struct ListenerSet {
    entries: FxHashMap<usize, Rc<dyn SlideListener>>,
}

impl ListenerSet {
    fn key(listener: &Rc<dyn SlideListener>) -> usize {
        Rc::as_ptr(listener) as *const () as usize
    }

    pub fn add(&mut self, listener: Rc<dyn SlideListener>) {
        self.entries.insert(Self::key(&listener), listener);
    }

    pub fn remove(&mut self, listener: &Rc<dyn SlideListener>) {
        self.entries.remove(&Self::key(listener));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Snapshot taken before notifying, so a listener may unregister itself
    /// (or others) mid-notification without invalidating the iteration.
    pub fn snapshot(&self) -> SmallVec<[Rc<dyn SlideListener>; 4]> {
        self.entries.values().cloned().collect()
    }
}
