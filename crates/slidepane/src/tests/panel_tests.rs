use super::*;
use crate::constants::{DEFAULT_SHADOW_LENGTH, SLIDE_DURATION_LONG, SLIDE_DURATION_SHORT};
use slidepane_core::Runtime;
use slidepane_graphics::{Point, Size};
use slidepane_input::PointerEvent;
use slidepane_layout::{BlockElement, Element};
use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};

const FRAME: u64 = 16_666_667; // ~60 FPS

fn pump(handle: &RuntimeHandle) {
    let mut time = 0u64;
    for _ in 0..240 {
        if !handle.has_pending_frame_callbacks() {
            break;
        }
        time += FRAME;
        handle.drain_frame_callbacks(time);
    }
}

fn run_layout(panel: &SlidingPanel) {
    let constraints = Constraints::loose(300.0, 600.0);
    loop {
        panel.measure(constraints);
        panel.layout();
        if !panel.needs_layout() {
            break;
        }
    }
}

/// 300x200 fixed element over a 300x400 sliding element: travel range 200.
fn build_panel() -> (
    SlidingPanel,
    RuntimeHandle,
    Rc<RefCell<BlockElement>>,
    Rc<RefCell<BlockElement>>,
) {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let non_sliding = BlockElement::shared(1, Size::new(300.0, 200.0));
    let sliding = BlockElement::shared(2, Size::new(300.0, 400.0));

    let panel = SlidingPanel::new(PanelSpec::new(2, 1), handle.clone());
    panel.add_child(non_sliding.clone(), ChildParams::default());
    panel.add_child(sliding.clone(), ChildParams::default());
    panel.attach();
    run_layout(&panel);

    (panel, handle, non_sliding, sliding)
}

#[test]
fn starts_collapsed_with_travel_range_from_fixed_child() {
    let (panel, _handle, _non_sliding, sliding) = build_panel();

    assert_eq!(panel.state(), PanelState::Collapsed);
    assert_eq!(panel.current_slide(), 0.0);
    assert_eq!(panel.travel_range(), 200.0);
    // Collapsed: the sliding element rests displaced by the whole travel.
    assert_eq!(sliding.borrow().frame().y, 200.0);
}

#[test]
fn slide_to_reaches_target_and_moves_the_element() {
    let (panel, handle, _non_sliding, sliding) = build_panel();

    panel.slide_to(1.0);
    pump(&handle);

    assert_eq!(panel.current_slide(), 1.0);
    assert_eq!(panel.state(), PanelState::Expanded);
    assert_eq!(sliding.borrow().frame().y, 0.0);
}

#[test]
fn mid_ratio_maps_to_mid_coordinate() {
    let (panel, handle, _non_sliding, sliding) = build_panel();

    panel.slide_to(0.5);
    pump(&handle);

    assert_eq!(panel.current_slide(), 0.5);
    assert_eq!(panel.state(), PanelState::Sliding);
    assert_eq!(sliding.borrow().frame().y, 100.0);
}

#[test]
fn rejected_slide_targets_leave_the_ratio_untouched() {
    let (panel, _handle, _non_sliding, _sliding) = build_panel();

    for bad in [-0.01f32, 1.01, f32::NAN] {
        let result = catch_unwind(AssertUnwindSafe(|| panel.slide_to(bad)));
        assert!(result.is_err(), "slide_to({bad}) must panic");
        assert_eq!(panel.current_slide(), 0.0);
        assert_eq!(panel.state(), PanelState::Collapsed);
    }
}

#[test]
fn set_state_to_current_state_is_a_no_op() {
    let (panel, handle, _non_sliding, _sliding) = build_panel();
    let notifications = Rc::new(RefCell::new(0u32));

    let sink = Rc::clone(&notifications);
    panel.add_slide_listener_fn(move |_, _, _| *sink.borrow_mut() += 1);

    panel.set_state(PanelState::Collapsed);
    assert!(!handle.has_pending_frame_callbacks());
    pump(&handle);

    assert_eq!(*notifications.borrow(), 0);
}

#[test]
fn repeating_a_settled_slide_target_is_a_no_op() {
    let (panel, handle, _non_sliding, _sliding) = build_panel();

    panel.slide_to(1.0);
    pump(&handle);

    let notifications = Rc::new(RefCell::new(0u32));
    let sink = Rc::clone(&notifications);
    panel.add_slide_listener_fn(move |_, _, _| *sink.borrow_mut() += 1);

    panel.slide_to(1.0);
    assert!(!handle.has_pending_frame_callbacks());
    assert_eq!(*notifications.borrow(), 0);
}

#[test]
fn set_state_expands_and_toggle_collapses() {
    let (panel, handle, _non_sliding, _sliding) = build_panel();

    panel.set_state(PanelState::Expanded);
    pump(&handle);
    assert_eq!(panel.state(), PanelState::Expanded);

    panel.toggle();
    pump(&handle);
    assert_eq!(panel.state(), PanelState::Collapsed);

    panel.toggle();
    pump(&handle);
    assert_eq!(panel.state(), PanelState::Expanded);
}

#[test]
fn listeners_observe_consistent_geometry() {
    let (panel, handle, _non_sliding, sliding) = build_panel();
    let observed = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&observed);
    let element = Rc::clone(&sliding);
    panel.add_slide_listener_fn(move |panel, _, ratio| {
        // The element has already been repositioned when observers run.
        let expected = (1.0 - ratio) * panel.travel_range();
        assert_eq!(element.borrow().frame().y, expected);
        sink.borrow_mut().push(ratio);
    });

    panel.slide_to(1.0);
    pump(&handle);

    let observed = observed.borrow();
    assert!(!observed.is_empty());
    assert!(observed.iter().all(|r| (0.0..=1.0).contains(r)));
    assert_eq!(*observed.last().unwrap(), 1.0);
}

#[test]
fn both_listeners_receive_the_terminal_notification() {
    let (panel, handle, _non_sliding, _sliding) = build_panel();
    let first = Rc::new(RefCell::new(Vec::new()));
    let second = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&first);
    panel.add_slide_listener_fn(move |_, _, ratio| sink.borrow_mut().push(ratio));
    let sink = Rc::clone(&second);
    panel.add_slide_listener_fn(move |_, _, ratio| sink.borrow_mut().push(ratio));

    panel.slide_to(1.0);
    pump(&handle);

    for observed in [first, second] {
        let observed = observed.borrow();
        assert_eq!(*observed.last().unwrap(), 1.0);
        assert!(observed.iter().all(|r| (0.0..=1.0).contains(r)));
    }
}

#[test]
fn duplicate_registration_notifies_once_and_removal_unregisters() {
    let (panel, handle, _non_sliding, _sliding) = build_panel();
    let count = Rc::new(RefCell::new(0u32));

    let sink = Rc::clone(&count);
    let listener = panel.add_slide_listener_fn(move |_, _, _| *sink.borrow_mut() += 1);
    panel.add_slide_listener(Rc::clone(&listener));
    assert_eq!(panel.inner.borrow().listeners.len(), 1);

    panel.slide_to(1.0);
    pump(&handle);
    let after_first = *count.borrow();
    assert!(after_first > 0);

    panel.remove_slide_listener(&listener);
    // Removing again is a no-op, not an error.
    panel.remove_slide_listener(&listener);

    panel.slide_to(0.0);
    pump(&handle);
    assert_eq!(*count.borrow(), after_first);
}

#[test]
fn state_is_queryable_during_notification() {
    let (panel, handle, _non_sliding, _sliding) = build_panel();

    panel.add_slide_listener_fn(|panel, state, ratio| {
        assert_eq!(panel.state(), state);
        assert_eq!(panel.current_slide(), ratio);
    });

    panel.slide_to(1.0);
    pump(&handle);
}

#[test]
#[should_panic(expected = "exactly 2 children, but has 1")]
fn attach_rejects_one_child() {
    let runtime = Runtime::new();
    let panel = SlidingPanel::new(PanelSpec::new(2, 1), runtime.handle());
    panel.add_child(
        BlockElement::shared(1, Size::new(100.0, 100.0)),
        ChildParams::default(),
    );
    panel.attach();
}

#[test]
#[should_panic(expected = "exactly 2 children, but has 3")]
fn attach_rejects_three_children() {
    let runtime = Runtime::new();
    let panel = SlidingPanel::new(PanelSpec::new(2, 1), runtime.handle());
    for id in 1..=3 {
        panel.add_child(
            BlockElement::shared(id, Size::new(100.0, 100.0)),
            ChildParams::default(),
        );
    }
    panel.attach();
}

#[test]
#[should_panic(expected = "no child with id 7 to use as the sliding element")]
fn attach_rejects_unresolved_sliding_id() {
    let runtime = Runtime::new();
    let panel = SlidingPanel::new(PanelSpec::new(7, 1), runtime.handle());
    panel.add_child(
        BlockElement::shared(1, Size::new(100.0, 100.0)),
        ChildParams::default(),
    );
    panel.add_child(
        BlockElement::shared(2, Size::new(100.0, 100.0)),
        ChildParams::default(),
    );
    panel.attach();
}

#[test]
#[should_panic(expected = "mutually exclusive")]
fn conflicting_fit_options_are_rejected_at_construction() {
    let runtime = Runtime::new();
    let spec = PanelSpec::new(2, 1).fit_target_element(9);
    let _panel = SlidingPanel::new(spec, runtime.handle());
}

#[test]
#[should_panic(expected = "no drag element is resolved")]
fn touch_before_attach_is_fatal() {
    let runtime = Runtime::new();
    let panel = SlidingPanel::new(PanelSpec::new(2, 1), runtime.handle());
    let event = PointerEvent::new(
        PointerEventKind::Down,
        Point::new(10.0, 10.0),
        Point::new(10.0, 10.0),
    );
    panel.handle_pointer_event(&event);
}

#[test]
fn set_drag_element_redirects_gesture_arming() {
    let (panel, _handle, non_sliding, sliding) = build_panel();

    // With the drag element on the fixed child, touches on the sliding
    // element no longer arm.
    panel.set_drag_element(non_sliding.clone());

    let on_sliding = PointerEvent::new(
        PointerEventKind::Down,
        Point::new(150.0, 300.0),
        Point::new(150.0, 300.0),
    );
    panel.handle_pointer_event(&on_sliding);
    let drag_move = PointerEvent::new(
        PointerEventKind::Move,
        Point::new(150.0, 250.0),
        Point::new(150.0, 250.0),
    );
    assert!(!panel.handle_pointer_event(&drag_move));
    assert_eq!(panel.current_slide(), 0.0);
    assert_eq!(sliding.borrow().frame().y, 200.0);
}

#[test]
fn shadow_and_duration_accessors_round_trip() {
    let (panel, _handle, _non_sliding, _sliding) = build_panel();

    assert_eq!(panel.shadow_length(), DEFAULT_SHADOW_LENGTH);
    panel.set_shadow_length(24.0);
    assert_eq!(panel.shadow_length(), 24.0);

    assert_eq!(panel.slide_duration(), SLIDE_DURATION_SHORT);
    panel.set_slide_duration(SLIDE_DURATION_LONG);
    assert_eq!(panel.slide_duration(), SLIDE_DURATION_LONG);
}
