//! Headless bottom-sheet walkthrough: drags and animated snaps printed as
//! ratio/coordinate pairs, plus the draw primitives a backend would fill.

use slidepane::{
    ChildParams, Constraints, DrawScopeDefault, PanelSpec, PanelState, Point, PointerEvent,
    PointerEventKind, Runtime, Size, SlidingPanel,
};
use slidepane_layout::BlockElement;

fn main() {
    let runtime = Runtime::new();
    let handle = runtime.handle();

    let non_sliding = BlockElement::shared(1, Size::new(300.0, 200.0));
    let sliding = BlockElement::shared(2, Size::new(300.0, 400.0));

    let panel = SlidingPanel::new(
        PanelSpec::new(2, 1).auto_fit_sliding_content(false),
        handle.clone(),
    );
    panel.add_child(non_sliding, ChildParams::default());
    panel.add_child(sliding.clone(), ChildParams::default());
    panel.attach();

    loop {
        panel.measure(Constraints::loose(300.0, 600.0));
        panel.layout();
        if !panel.needs_layout() {
            break;
        }
    }
    println!(
        "laid out: travel range {}, state {:?}",
        panel.travel_range(),
        panel.state()
    );

    panel.add_slide_listener_fn(|panel, state, ratio| {
        println!("  onSlide ratio {ratio:.3} state {state:?} (travel {})", panel.travel_range());
    });

    // Drag the sheet up a quarter of its travel and let go.
    let down = PointerEvent::new(
        PointerEventKind::Down,
        Point::new(150.0, 300.0),
        Point::new(150.0, 300.0),
    );
    panel.handle_pointer_event(&down);
    let moved = PointerEvent::new(
        PointerEventKind::Move,
        Point::new(150.0, 250.0),
        Point::new(150.0, 250.0),
    );
    panel.handle_pointer_event(&moved);
    let up = PointerEvent::new(
        PointerEventKind::Up,
        Point::new(150.0, 250.0),
        Point::new(150.0, 250.0),
    );
    panel.handle_pointer_event(&up);

    // Pump the frame clock until the snap animation settles.
    let mut time = 0u64;
    while handle.has_pending_frame_callbacks() {
        time += 16_666_667;
        handle.drain_frame_callbacks(time);
    }
    assert_eq!(panel.state(), PanelState::Expanded);

    let mut scope = DrawScopeDefault::new(Size::new(300.0, 600.0));
    panel.draw(&mut scope);
    println!("draw primitives at rest:");
    for primitive in scope.primitives() {
        println!("  {primitive:?}");
    }
}
