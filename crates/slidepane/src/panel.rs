//! The sliding panel.

use crate::config::PanelSpec;
use crate::draw::{shade_primitive, shadow_primitive};
use crate::listener::{ListenerSet, SlideListener};
use crate::policy::{PanelChildSlot, PanelMeasurePolicy};
use crate::state::PanelState;
use slidepane_animation::{AnimationSpec, Easing, SlideAnimator};
use slidepane_core::RuntimeHandle;
use slidepane_graphics::{DrawScope, Size};
use slidepane_input::{
    completion_target, DragGesture, DragUpdate, PointerEvent, PointerEventKind,
    DRAG_ACTIVATION_DISTANCE,
};
use slidepane_layout::{
    coordinate_for_ratio, find_element, normalize_coordinate, Axis, ChildParams, Constraints,
    Element, ElementId, ElementRef,
};
use std::cell::RefCell;
use std::rc::Rc;

/// A draggable panel hosting two children: a fixed element and a sliding
/// element that travels over it.
///
/// The panel is a cheap cloneable handle; clones share the same state. All
/// methods must be called from the UI thread that owns the runtime.
///
/// # Lifecycle
///
/// 1. `new` with a [`PanelSpec`] and a runtime handle.
/// 2. `add_child` exactly twice, then `attach` to resolve configured ids.
/// 3. Per host layout pass: `measure`, then `layout`; repeat while
///    `needs_layout` reports true (the one-shot fit-to-screen inset requests
///    a second pass).
/// 4. Dispatch pointer events to `handle_pointer_event`; a `true` return
///    means the panel owns the sequence and children must not receive it.
/// 5. Rasterize via `draw` whenever `take_redraw_request` reports true.
pub struct SlidingPanel {
    inner: Rc<RefCell<PanelInner>>,
}

struct PanelInner {
    axis: Axis,
    sliding_id: ElementId,
    non_sliding_id: ElementId,
    drag_id: Option<ElementId>,
    fit_target_id: Option<ElementId>,
    auto_fit: bool,
    shadow_length: f32,
    slide_duration_millis: u64,

    children: Vec<PanelChildSlot>,
    sliding: Option<ElementRef>,
    non_sliding: Option<ElementRef>,
    drag: Option<ElementRef>,
    fit_target: Option<ElementRef>,
    attached: bool,

    state: PanelState,
    current_slide: f32,
    max_slide: f32,

    policy: PanelMeasurePolicy,
    gesture: DragGesture,
    animator: SlideAnimator,

    fit_applied: bool,
    needs_layout: bool,
    redraw_requested: bool,
    measured_size: Size,

    listeners: ListenerSet,
}

impl PanelInner {
    fn sliding_ref(&self) -> ElementRef {
        self.sliding.clone().expect("panel is attached")
    }

    fn non_sliding_ref(&self) -> ElementRef {
        self.non_sliding.clone().expect("panel is attached")
    }
}

impl SlidingPanel {
    /// # Panics
    ///
    /// Panics if `auto_fit_sliding_content` is enabled (the default) while a
    /// `fit_target_element` is also configured; the two are mutually
    /// exclusive.
    pub fn new(spec: PanelSpec, runtime: RuntimeHandle) -> Self {
        if spec.auto_fit_sliding_content && spec.fit_target_element.is_some() {
            panic!(
                "SlidingPanel: auto_fit_sliding_content is enabled and fit_target_element is \
                 set. These two options are mutually exclusive, use only one at a time."
            );
        }

        let inner = PanelInner {
            axis: spec.orientation,
            sliding_id: spec.sliding_element,
            non_sliding_id: spec.non_sliding_element,
            drag_id: spec.drag_element,
            fit_target_id: spec.fit_target_element,
            auto_fit: spec.auto_fit_sliding_content,
            shadow_length: spec.shadow_length,
            slide_duration_millis: spec.slide_duration_millis,
            children: Vec::new(),
            sliding: None,
            non_sliding: None,
            drag: None,
            fit_target: None,
            attached: false,
            state: PanelState::Collapsed,
            current_slide: 0.0,
            max_slide: 0.0,
            policy: PanelMeasurePolicy::new(spec.orientation),
            gesture: DragGesture::new(DRAG_ACTIVATION_DISTANCE),
            animator: SlideAnimator::new(0.0, runtime),
            fit_applied: false,
            needs_layout: true,
            redraw_requested: false,
            measured_size: Size::ZERO,
            listeners: ListenerSet::default(),
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    // ------------------------------------------------------------------
    // Children & attach
    // ------------------------------------------------------------------

    pub fn add_child(&self, element: ElementRef, params: ChildParams) {
        let mut inner = self.inner.borrow_mut();
        inner.children.push(PanelChildSlot { element, params });
        inner.needs_layout = true;
    }

    /// Resolves the configured element ids against the children added so
    /// far. Must be called before the first layout pass or pointer event.
    ///
    /// # Panics
    ///
    /// Panics when the panel does not have exactly two children, or when any
    /// configured id cannot be resolved.
    pub fn attach(&self) {
        let mut inner = self.inner.borrow_mut();
        assert!(
            inner.children.len() == 2,
            "SlidingPanel must have exactly 2 children, but has {}",
            inner.children.len()
        );

        let roots: Vec<ElementRef> = inner
            .children
            .iter()
            .map(|slot| Rc::clone(&slot.element))
            .collect();
        let direct_child = |id: ElementId| -> Option<ElementRef> {
            roots.iter().find(|el| el.borrow().id() == id).cloned()
        };

        let sliding = direct_child(inner.sliding_id).unwrap_or_else(|| {
            panic!(
                "SlidingPanel: no child with id {} to use as the sliding element",
                inner.sliding_id
            )
        });
        let non_sliding = direct_child(inner.non_sliding_id).unwrap_or_else(|| {
            panic!(
                "SlidingPanel: no child with id {} to use as the non-sliding element",
                inner.non_sliding_id
            )
        });
        let drag = match inner.drag_id {
            Some(id) => find_element(&roots, id)
                .unwrap_or_else(|| panic!("SlidingPanel: can't find drag element with id {id}")),
            None => Rc::clone(&sliding),
        };
        inner.fit_target = match inner.fit_target_id {
            Some(id) => Some(
                find_element(&roots, id).unwrap_or_else(|| {
                    panic!("SlidingPanel: can't find fit target element with id {id}")
                }),
            ),
            None => None,
        };

        inner.sliding = Some(sliding);
        inner.non_sliding = Some(non_sliding);
        inner.drag = Some(drag);
        inner.attached = true;
        inner.needs_layout = true;
    }

    /// Redirects drag gestures to a different element, replacing whatever
    /// the spec configured.
    pub fn set_drag_element(&self, element: ElementRef) {
        let mut inner = self.inner.borrow_mut();
        inner.drag_id = Some(element.borrow().id());
        inner.drag = Some(element);
    }

    // ------------------------------------------------------------------
    // Measure / layout / draw
    // ------------------------------------------------------------------

    /// Measures both children and returns the panel's own size.
    ///
    /// # Panics
    ///
    /// Panics unless the panel has exactly two children.
    pub fn measure(&self, constraints: Constraints) -> Size {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        let size = inner.policy.measure(&inner.children, constraints);
        inner.measured_size = size;
        size
    }

    /// Places the children, recomputes the travel range, and pre-positions
    /// the sliding element at the current ratio. The first successful pass
    /// also applies the fit-to-screen inset and requests one more
    /// measure/layout round via [`SlidingPanel::needs_layout`].
    ///
    /// # Panics
    ///
    /// Panics if called before `attach`, or if the non-sliding element
    /// measured to a zero main-axis extent (the travel range would be
    /// undefined).
    pub fn layout(&self) {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        assert!(inner.attached, "SlidingPanel::layout called before attach");

        inner.policy.place(&inner.children, inner.measured_size);

        let sliding = inner.sliding_ref();
        let non_sliding = inner.non_sliding_ref();
        let travel = inner.axis.main_extent(non_sliding.borrow().measured_size());
        inner.max_slide = travel;

        let coordinate = coordinate_for_ratio(inner.current_slide, travel);
        {
            let mut element = sliding.borrow_mut();
            let cross = inner.axis.cross_coord(element.frame().origin());
            element.set_origin(inner.axis.point_from(coordinate, cross));
        }

        if !inner.fit_applied {
            inner
                .policy
                .apply_fit_insets(&sliding, inner.fit_target.as_ref(), inner.auto_fit, travel);
            inner.fit_applied = true;
            // The insets changed child geometry; one more pass settles it.
            inner.needs_layout = true;
        } else {
            inner.needs_layout = false;
        }
        inner.redraw_requested = true;
    }

    /// Paints the panel: non-sliding child, shade, sliding child, elevation
    /// shadow, in that order.
    pub fn draw(&self, scope: &mut dyn DrawScope) {
        let (non_sliding, sliding, shade, shadow) = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            assert!(inner.attached, "SlidingPanel::draw called before attach");

            let non_sliding = inner.non_sliding_ref();
            let sliding = inner.sliding_ref();

            // Travel range tracks the non-sliding element's live geometry.
            inner.max_slide = inner.axis.main_extent(non_sliding.borrow().measured_size());

            let shade = (inner.current_slide > 0.0)
                .then(|| shade_primitive(non_sliding.borrow().frame(), inner.current_slide));
            let shadow = (inner.shadow_length > 0.0)
                .then(|| shadow_primitive(sliding.borrow().frame(), inner.axis, inner.shadow_length));

            inner.redraw_requested = false;
            (non_sliding, sliding, shade, shadow)
        };

        non_sliding.borrow().paint(scope);
        if let Some((rect, brush)) = shade {
            scope.draw_rect_at(rect, brush);
        }
        sliding.borrow().paint(scope);
        if let Some((rect, brush)) = shadow {
            scope.draw_rect_at(rect, brush);
        }
    }

    // ------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------

    /// Feeds one pointer event through the gesture machine. Returns true
    /// when the panel consumed the event; the host must then withhold the
    /// rest of the sequence from child click handlers.
    ///
    /// # Panics
    ///
    /// Panics if a touch sequence begins while no drag element is resolved
    /// (the panel cannot decide interception without one).
    pub fn handle_pointer_event(&self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.on_pointer_down(event),
            PointerEventKind::Move => self.on_pointer_move(event),
            PointerEventKind::Up => self.on_pointer_up(event),
            PointerEventKind::Cancel => self.on_pointer_cancel(),
        }
    }

    fn on_pointer_down(&self, event: &PointerEvent) -> bool {
        let (axis, drag, sliding) = {
            let inner = self.inner.borrow();
            (inner.axis, inner.drag.clone(), inner.sliding.clone())
        };
        let drag = drag.unwrap_or_else(|| {
            panic!("SlidingPanel: touch began but no drag element is resolved; call attach first")
        });

        let inside = drag
            .borrow()
            .screen_bounds()
            .contains_point(event.global_position);

        let mut inner = self.inner.borrow_mut();
        if !inside {
            inner.gesture.reset();
            return false;
        }

        let position = {
            let sliding = sliding.expect("panel is attached");
            let frame = sliding.borrow().frame();
            axis.main_coord(frame.origin())
        };
        inner.gesture.arm(axis.main_coord(event.position), position);
        // The down itself passes through so children can still arm clicks.
        false
    }

    fn on_pointer_move(&self, event: &PointerEvent) -> bool {
        let axis = self.inner.borrow().axis;
        let coord = axis.main_coord(event.position);
        let update = self.inner.borrow_mut().gesture.update(coord);

        match update {
            DragUpdate::Ignored => false,
            DragUpdate::Activated { position } | DragUpdate::Moved { position } => {
                if matches!(update, DragUpdate::Activated { .. }) {
                    // A drag takes over from any animated slide in flight.
                    let animator = self.inner.borrow().animator.clone();
                    animator.cancel();
                }
                event.consume();
                let ratio = {
                    let inner = self.inner.borrow();
                    let clamped = position.clamp(0.0, inner.max_slide);
                    normalize_coordinate(clamped, inner.max_slide)
                };
                self.update_ratio(ratio);
                true
            }
        }
    }

    fn on_pointer_up(&self, event: &PointerEvent) -> bool {
        let axis = self.inner.borrow().axis;
        let coord = axis.main_coord(event.position);
        let (end, state, ratio) = {
            let mut inner = self.inner.borrow_mut();
            let end = inner.gesture.finish(coord);
            (end, inner.state, inner.current_slide)
        };

        if !end.was_dragging {
            return false;
        }
        event.consume();

        if state == PanelState::Sliding {
            if let Some(target) = completion_target(ratio, end.direction) {
                self.slide_to(target);
            }
        }
        true
    }

    fn on_pointer_cancel(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        let was_dragging = inner.gesture.is_dragging();
        inner.gesture.reset();
        was_dragging
    }

    // ------------------------------------------------------------------
    // Slide-state model
    // ------------------------------------------------------------------

    /// Animates the panel to `target` over the configured slide duration.
    ///
    /// # Panics
    ///
    /// Panics when `target` is NaN or outside [0, 1]; the current ratio is
    /// left untouched.
    pub fn slide_to(&self, target: f32) {
        assert!(!target.is_nan(), "bad value, can't slide to NaN");
        assert!(
            (0.0..=1.0).contains(&target),
            "bad value, can't slide to {target}, value must be between 0 and 1"
        );

        let (animator, spec, current) = {
            let inner = self.inner.borrow();
            let spec = AnimationSpec::tween(inner.slide_duration_millis, Easing::Decelerate);
            (inner.animator.clone(), spec, inner.current_slide)
        };

        // Re-requesting the settled position is a no-op: no ticks, no
        // listener notifications.
        if !animator.is_running() && current == target {
            return;
        }

        // The animator's value may be stale after gesture-driven updates.
        animator.snap_to(current);
        let weak = Rc::downgrade(&self.inner);
        animator.animate_to(target, spec, move |value| {
            if let Some(inner) = weak.upgrade() {
                let panel = SlidingPanel { inner };
                panel.update_ratio(value);
            }
        });
    }

    /// Slides to the requested discrete state. Requesting the current state
    /// (or `Sliding`, which is not a valid target) is a no-op.
    pub fn set_state(&self, state: PanelState) {
        if state == self.inner.borrow().state {
            return;
        }
        match state {
            PanelState::Expanded => self.slide_to(1.0),
            PanelState::Collapsed => self.slide_to(0.0),
            PanelState::Sliding => {}
        }
    }

    /// Collapses an expanded panel, expands anything else. Hosts typically
    /// wire bare taps on the panel to this.
    pub fn toggle(&self) {
        if self.state() == PanelState::Expanded {
            self.set_state(PanelState::Collapsed);
        } else {
            self.set_state(PanelState::Expanded);
        }
    }

    /// The single mutation path for the slide ratio: stores it, derives the
    /// discrete state, repositions the sliding element, requests a redraw,
    /// then notifies listeners.
    ///
    /// Out-of-range values are clamped here rather than rejected: fast drags
    /// legitimately overshoot for a tick before the clamp.
    fn update_ratio(&self, new_ratio: f32) {
        let (listeners, state, ratio) = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;

            let ratio = if (0.0..=1.0).contains(&new_ratio) {
                new_ratio
            } else {
                log::warn!("slide ratio {new_ratio} outside [0, 1], clamping");
                new_ratio.clamp(0.0, 1.0)
            };

            inner.current_slide = ratio;
            inner.state = PanelState::from_ratio(ratio);

            let coordinate = coordinate_for_ratio(ratio, inner.max_slide);
            {
                let sliding = inner.sliding_ref();
                let mut element = sliding.borrow_mut();
                let cross = inner.axis.cross_coord(element.frame().origin());
                element.set_origin(inner.axis.point_from(coordinate, cross));
            }
            inner.redraw_requested = true;

            (inner.listeners.snapshot(), inner.state, ratio)
        };

        // Strictly after the geometry update, outside the borrow so a
        // listener may call back into the panel.
        for listener in listeners {
            listener.on_slide(self, state, ratio);
        }
    }

    // ------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------

    /// Registers an observer. Re-registering the same handle is a no-op.
    pub fn add_slide_listener(&self, listener: Rc<dyn SlideListener>) {
        self.inner.borrow_mut().listeners.add(listener);
    }

    /// Registers a closure observer and returns the handle needed to remove
    /// it later.
    pub fn add_slide_listener_fn(
        &self,
        callback: impl Fn(&SlidingPanel, PanelState, f32) + 'static,
    ) -> Rc<dyn SlideListener> {
        let listener: Rc<dyn SlideListener> = Rc::new(callback);
        self.add_slide_listener(Rc::clone(&listener));
        listener
    }

    /// Unregisters an observer. Removing one that was never registered is a
    /// no-op.
    pub fn remove_slide_listener(&self, listener: &Rc<dyn SlideListener>) {
        self.inner.borrow_mut().listeners.remove(listener);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn state(&self) -> PanelState {
        self.inner.borrow().state
    }

    /// The continuous slide ratio: 0.0 collapsed, 1.0 expanded.
    pub fn current_slide(&self) -> f32 {
        self.inner.borrow().current_slide
    }

    /// Maximum distance the sliding element can travel; the non-sliding
    /// element's main-axis extent as of the last layout or draw pass.
    pub fn travel_range(&self) -> f32 {
        self.inner.borrow().max_slide
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().animator.is_running()
    }

    pub fn shadow_length(&self) -> f32 {
        self.inner.borrow().shadow_length
    }

    pub fn set_shadow_length(&self, length: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.shadow_length = length;
        inner.redraw_requested = true;
    }

    /// Duration of animated slides in milliseconds.
    pub fn slide_duration(&self) -> u64 {
        self.inner.borrow().slide_duration_millis
    }

    pub fn set_slide_duration(&self, millis: u64) {
        self.inner.borrow_mut().slide_duration_millis = millis;
    }

    /// True while the panel needs another measure/layout round.
    pub fn needs_layout(&self) -> bool {
        self.inner.borrow().needs_layout
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&self) -> bool {
        std::mem::take(&mut self.inner.borrow_mut().redraw_requested)
    }
}

impl Clone for SlidingPanel {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/panel_tests.rs"]
mod tests;
