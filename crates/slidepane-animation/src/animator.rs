//! Frame-clock tween driver.

use crate::{AnimationSpec, Lerp};
use slidepane_core::{FrameCallbackRegistration, RuntimeHandle};
use std::cell::RefCell;
use std::rc::Rc;

/// Drives a single `f32` value toward a target over the frame clock,
/// invoking an observer callback with every new value.
///
/// Exactly one tween can be in flight. Starting a new one — or snapping, or
/// cancelling — tears the previous registration down and bumps a generation
/// counter, so a tick scheduled by a superseded tween can never mutate the
/// value afterward.
pub struct SlideAnimator {
    inner: Rc<RefCell<AnimatorInner>>,
}

struct AnimatorInner {
    runtime: RuntimeHandle,
    current: f32,
    start: f32,
    target: f32,
    spec: AnimationSpec,
    generation: u64,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_frame: Option<Rc<dyn Fn(f32)>>,
}

impl SlideAnimator {
    pub fn new(initial: f32, runtime: RuntimeHandle) -> Self {
        let inner = AnimatorInner {
            runtime,
            current: initial,
            start: initial,
            target: initial,
            spec: AnimationSpec::default(),
            generation: 0,
            start_time_nanos: None,
            registration: None,
            on_frame: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Current value, whether settled or mid-tween.
    pub fn value(&self) -> f32 {
        self.inner.borrow().current
    }

    /// The value the in-flight (or last) tween is heading to.
    pub fn target(&self) -> f32 {
        self.inner.borrow().target
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Starts a tween from the current value to `target`. `on_frame` fires
    /// on every tick, including the terminal one with exactly `target`.
    pub fn animate_to(&self, target: f32, spec: AnimationSpec, on_frame: impl Fn(f32) + 'static) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.generation += 1;
            inner.start = inner.current;
            inner.target = target;
            inner.spec = spec;
            inner.start_time_nanos = None;
            inner.on_frame = Some(Rc::new(on_frame));
        }
        Self::schedule_frame(&self.inner);
    }

    /// Jumps to `value` immediately. Any in-flight tween is cancelled and no
    /// observer callback fires; the caller is applying the value itself.
    pub fn snap_to(&self, value: f32) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.generation += 1;
        inner.current = value;
        inner.start = value;
        inner.target = value;
        inner.start_time_nanos = None;
        inner.on_frame = None;
    }

    /// Cancels the in-flight tween, leaving the value wherever the last tick
    /// put it.
    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.generation += 1;
        inner.target = inner.current;
        inner.start_time_nanos = None;
        inner.on_frame = None;
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatorInner>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatorInner>>, frame_time_nanos: u64) {
        let (callback, value, finished, generation) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            let generation = inner.generation;

            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let duration_nanos = (inner.spec.duration_millis * 1_000_000).max(1);
            let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);
            let progress = inner.spec.easing.transform(linear_progress);

            let finished = linear_progress >= 1.0;
            let value = if finished {
                inner.target
            } else {
                inner.start.lerp(&inner.target, progress)
            };
            inner.current = value;
            if finished {
                inner.start = inner.target;
                inner.start_time_nanos = None;
            }

            (inner.on_frame.clone(), value, finished, generation)
        };

        if let Some(callback) = callback {
            callback(value);
        }

        // The callback may have started a new tween; only this generation's
        // owner reschedules.
        let resume = {
            let inner = this.borrow();
            !finished && inner.generation == generation && inner.registration.is_none()
        };
        if resume {
            Self::schedule_frame(this);
        } else if finished {
            let mut inner = this.borrow_mut();
            if inner.generation == generation {
                inner.on_frame = None;
            }
        }
    }
}

impl Clone for SlideAnimator {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
