//! The element seam between the panel and its host.
//!
//! The panel never owns pixels or platform views. Hosts adapt their widgets
//! to [`Element`] and the panel drives them through it: measurement,
//! placement, live bounds for hit testing, and the margin/padding mutations
//! the fit-to-screen pass needs. [`BlockElement`] is a plain rectangular
//! implementation used by software hosts and the test suite.

use crate::Constraints;
use slidepane_graphics::{DrawScope, EdgeInsets, Point, Rect, Size};
use std::cell::RefCell;
use std::rc::Rc;

/// Host-assigned identifier, analogous to a view id. Element lookups during
/// attach resolve configured ids against these.
pub type ElementId = u64;

pub type ElementRef = Rc<RefCell<dyn Element>>;

pub trait Element {
    /// The host-assigned id this element answers to.
    fn id(&self) -> ElementId;

    /// Measures against the given constraints and returns the chosen size.
    fn measure(&mut self, constraints: Constraints) -> Size;

    /// The size chosen by the last `measure` call.
    fn measured_size(&self) -> Size;

    /// Assigns the element's frame in panel coordinates.
    fn place(&mut self, frame: Rect);

    /// Current frame in panel coordinates, including any slide displacement
    /// applied through `set_origin`.
    fn frame(&self) -> Rect;

    /// Moves the element without re-laying it out. The panel uses this to
    /// displace the sliding element as the ratio changes.
    fn set_origin(&mut self, origin: Point);

    /// Live on-screen bounds. Must track `set_origin` displacement, since
    /// the drag element may itself be sliding while a gesture is armed.
    fn screen_bounds(&self) -> Rect;

    /// Hidden elements are skipped by measurement and placement but still
    /// count toward the panel's structural two-children check.
    fn is_hidden(&self) -> bool {
        false
    }

    fn margins(&self) -> EdgeInsets {
        EdgeInsets::default()
    }

    fn set_margins(&mut self, margins: EdgeInsets);

    fn padding(&self) -> EdgeInsets {
        EdgeInsets::default()
    }

    fn set_padding(&mut self, padding: EdgeInsets);

    /// Immediate children, in order. The fit-to-screen pass insets these when
    /// auto-fit is enabled; element lookup descends through them.
    fn child_elements(&self) -> Vec<ElementRef> {
        Vec::new()
    }

    /// Paints the element into the scope. Decorative-only elements may leave
    /// this as the default no-op.
    fn paint(&self, _scope: &mut dyn DrawScope) {}
}

/// Per-child layout parameters supplied when a child is added to the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChildParams {
    pub alignment: crate::CrossAxisAlignment,
}

impl ChildParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignment(mut self, alignment: crate::CrossAxisAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Searches `roots` and their subtrees for the element with `id`.
pub fn find_element(roots: &[ElementRef], id: ElementId) -> Option<ElementRef> {
    for root in roots {
        if root.borrow().id() == id {
            return Some(Rc::clone(root));
        }
        let children = root.borrow().child_elements();
        if let Some(found) = find_element(&children, id) {
            return Some(found);
        }
    }
    None
}

/// A plain rectangular element with a preferred size.
///
/// `BlockElement` keeps its frame in panel coordinates and reports screen
/// bounds as frame + window offset, which a host updates when the panel moves
/// within the window.
pub struct BlockElement {
    id: ElementId,
    preferred: Size,
    measured: Size,
    frame: Rect,
    window_offset: Point,
    margins: EdgeInsets,
    padding: EdgeInsets,
    hidden: bool,
    children: Vec<ElementRef>,
}

impl BlockElement {
    pub fn new(id: ElementId, preferred: Size) -> Self {
        Self {
            id,
            preferred,
            measured: Size::ZERO,
            frame: Rect::default(),
            window_offset: Point::ZERO,
            margins: EdgeInsets::default(),
            padding: EdgeInsets::default(),
            hidden: false,
            children: Vec::new(),
        }
    }

    /// Convenience constructor returning a shared handle.
    pub fn shared(id: ElementId, preferred: Size) -> Rc<RefCell<BlockElement>> {
        Rc::new(RefCell::new(Self::new(id, preferred)))
    }

    pub fn set_window_offset(&mut self, offset: Point) {
        self.window_offset = offset;
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn add_child(&mut self, child: ElementRef) {
        self.children.push(child);
    }
}

impl Element for BlockElement {
    fn id(&self) -> ElementId {
        self.id
    }

    fn measure(&mut self, constraints: Constraints) -> Size {
        let (width, height) = constraints.constrain(
            self.preferred.width + self.padding.horizontal_sum(),
            self.preferred.height + self.padding.vertical_sum(),
        );
        self.measured = Size::new(width, height);
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn place(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_origin(&mut self, origin: Point) {
        self.frame.x = origin.x;
        self.frame.y = origin.y;
    }

    fn screen_bounds(&self) -> Rect {
        self.frame
            .translate(self.window_offset.x, self.window_offset.y)
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn margins(&self) -> EdgeInsets {
        self.margins
    }

    fn set_margins(&mut self, margins: EdgeInsets) {
        self.margins = margins;
    }

    fn padding(&self) -> EdgeInsets {
        self.padding
    }

    fn set_padding(&mut self, padding: EdgeInsets) {
        self.padding = padding;
    }

    fn child_elements(&self) -> Vec<ElementRef> {
        self.children.clone()
    }
}

#[cfg(test)]
#[path = "tests/element_tests.rs"]
mod tests;
