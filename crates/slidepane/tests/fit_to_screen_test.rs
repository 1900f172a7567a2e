//! The one-shot fit-to-screen inset, end to end through the layout loop.

use slidepane::{
    ChildParams, Constraints, PanelSpec, Runtime, Size, SlidingPanel,
};
use slidepane_layout::{BlockElement, Element};
use std::cell::RefCell;
use std::rc::Rc;

fn run_layout(panel: &SlidingPanel, constraints: Constraints) -> u32 {
    let mut passes = 0;
    loop {
        panel.measure(constraints);
        panel.layout();
        passes += 1;
        if !panel.needs_layout() {
            return passes;
        }
        assert!(passes < 4, "layout must settle");
    }
}

fn panel_with_sliding(
    spec: PanelSpec,
    sliding: Rc<RefCell<BlockElement>>,
) -> (SlidingPanel, Runtime) {
    let runtime = Runtime::new();
    let non_sliding = BlockElement::shared(1, Size::new(300.0, 200.0));
    let panel = SlidingPanel::new(spec, runtime.handle());
    panel.add_child(non_sliding, ChildParams::default());
    panel.add_child(sliding, ChildParams::default());
    panel.attach();
    (panel, runtime)
}

#[test]
fn auto_fit_margins_every_sliding_child_once() {
    let sliding = BlockElement::shared(2, Size::new(300.0, 400.0));
    let first = BlockElement::shared(10, Size::new(300.0, 120.0));
    let second = BlockElement::shared(11, Size::new(300.0, 120.0));
    sliding.borrow_mut().add_child(first.clone());
    sliding.borrow_mut().add_child(second.clone());

    let (panel, _runtime) = panel_with_sliding(PanelSpec::new(2, 1), Rc::clone(&sliding));
    let passes = run_layout(&panel, Constraints::loose(300.0, 600.0));

    // The inset lands after the first pass and forces exactly one more.
    assert_eq!(passes, 2);
    assert_eq!(first.borrow().margins().bottom, 200.0);
    assert_eq!(second.borrow().margins().bottom, 200.0);
    assert!(sliding.borrow().padding().is_zero());

    // Further layout rounds must not stack the inset again.
    panel.measure(Constraints::loose(300.0, 600.0));
    panel.layout();
    assert_eq!(first.borrow().margins().bottom, 200.0);
}

#[test]
fn auto_fit_pads_a_childless_sliding_element() {
    let sliding = BlockElement::shared(2, Size::new(300.0, 400.0));
    let (panel, _runtime) = panel_with_sliding(PanelSpec::new(2, 1), Rc::clone(&sliding));
    run_layout(&panel, Constraints::loose(300.0, 800.0));

    assert_eq!(sliding.borrow().padding().bottom, 200.0);
    // The second pass re-measures with the padding included.
    assert_eq!(sliding.borrow().measured_size(), Size::new(300.0, 600.0));
}

#[test]
fn explicit_fit_target_is_the_sole_recipient() {
    let sliding = BlockElement::shared(2, Size::new(300.0, 400.0));
    let target = BlockElement::shared(20, Size::new(300.0, 120.0));
    let other = BlockElement::shared(21, Size::new(300.0, 120.0));
    sliding.borrow_mut().add_child(target.clone());
    sliding.borrow_mut().add_child(other.clone());

    let spec = PanelSpec::new(2, 1)
        .auto_fit_sliding_content(false)
        .fit_target_element(20);
    let (panel, _runtime) = panel_with_sliding(spec, sliding);
    run_layout(&panel, Constraints::loose(300.0, 600.0));

    assert_eq!(target.borrow().margins().bottom, 200.0);
    assert!(other.borrow().margins().is_zero());
}

#[test]
fn disabling_both_fit_modes_leaves_children_untouched() {
    let sliding = BlockElement::shared(2, Size::new(300.0, 400.0));
    let child = BlockElement::shared(10, Size::new(300.0, 120.0));
    sliding.borrow_mut().add_child(child.clone());

    let spec = PanelSpec::new(2, 1).auto_fit_sliding_content(false);
    let (panel, _runtime) = panel_with_sliding(spec, Rc::clone(&sliding));
    run_layout(&panel, Constraints::loose(300.0, 600.0));

    assert!(child.borrow().margins().is_zero());
    assert!(sliding.borrow().padding().is_zero());
}
