//! The panel's two-child measure/placement policy.
//!
//! Children stack along the orientation axis the way a linear layout would:
//! main-axis extents accumulate, the cross axis takes the widest child. The
//! sliding element's stacked position is only its resting point — the panel
//! displaces it along the main axis as the ratio changes, without another
//! layout pass.

use slidepane_graphics::{EdgeInsets, Rect, Size};
use slidepane_layout::{Axis, ChildParams, Constraints, Element, ElementRef};

pub(crate) struct PanelChildSlot {
    pub element: ElementRef,
    pub params: ChildParams,
}

pub(crate) struct PanelMeasurePolicy {
    pub axis: Axis,
}

impl PanelMeasurePolicy {
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }

    fn main_margins(&self, margins: EdgeInsets) -> (f32, f32) {
        match self.axis {
            Axis::Vertical => (margins.top, margins.bottom),
            Axis::Horizontal => (margins.left, margins.right),
        }
    }

    fn cross_margins(&self, margins: EdgeInsets) -> (f32, f32) {
        match self.axis {
            Axis::Vertical => (margins.left, margins.right),
            Axis::Horizontal => (margins.top, margins.bottom),
        }
    }

    /// Measures both children and returns the panel's own size.
    ///
    /// # Panics
    ///
    /// Panics unless the panel has exactly two children.
    pub fn measure(&self, children: &[PanelChildSlot], constraints: Constraints) -> Size {
        assert!(
            children.len() == 2,
            "SlidingPanel must have exactly 2 children, but has {}",
            children.len()
        );

        let mut main_sum = 0.0f32;
        let mut cross_max = 0.0f32;

        for slot in children {
            let mut element = slot.element.borrow_mut();
            if element.is_hidden() {
                continue;
            }
            let margins = element.margins();
            let child_constraints = constraints
                .loosen()
                .deflate(margins.horizontal_sum(), margins.vertical_sum());
            let size = element.measure(child_constraints);

            let margin_box = Size::new(
                size.width + margins.horizontal_sum(),
                size.height + margins.vertical_sum(),
            );
            main_sum += self.axis.main_extent(margin_box);
            cross_max = cross_max.max(self.axis.cross_extent(margin_box));
        }

        let desired = self.axis.size_from(main_sum, cross_max);
        let (width, height) = constraints.constrain(desired.width, desired.height);
        Size::new(width, height)
    }

    /// Places children sequentially along the main axis using the sizes from
    /// the preceding measure pass.
    pub fn place(&self, children: &[PanelChildSlot], panel_size: Size) {
        let mut cursor = 0.0f32;

        for slot in children {
            let mut element = slot.element.borrow_mut();
            if element.is_hidden() {
                continue;
            }
            let margins = element.margins();
            let size = element.measured_size();
            let (lead_main, trail_main) = self.main_margins(margins);
            let (lead_cross, trail_cross) = self.cross_margins(margins);

            let cross_available =
                self.axis.cross_extent(panel_size) - lead_cross - trail_cross;
            let cross_pos = lead_cross
                + slot
                    .params
                    .alignment
                    .align(cross_available, self.axis.cross_extent(size));
            let main_pos = cursor + lead_main;

            element.place(Rect::from_origin_size(
                self.axis.point_from(main_pos, cross_pos),
                size,
            ));
            cursor = main_pos + self.axis.main_extent(size) + trail_main;
        }
    }

    /// Applies the one-shot trailing inset that keeps sliding content on
    /// screen while the panel is collapsed. Called once, after the first
    /// successful layout pass establishes the travel range.
    pub fn apply_fit_insets(
        &self,
        sliding: &ElementRef,
        fit_target: Option<&ElementRef>,
        auto_fit: bool,
        travel_range: f32,
    ) {
        let side = self.axis.trailing_side();

        if auto_fit {
            let children = sliding.borrow().child_elements();
            if children.is_empty() {
                let mut element = sliding.borrow_mut();
                let padding = element.padding().adding(side, travel_range);
                element.set_padding(padding);
            } else {
                for child in &children {
                    let mut element = child.borrow_mut();
                    let margins = element.margins().adding(side, travel_range);
                    element.set_margins(margins);
                }
            }
        } else if let Some(target) = fit_target {
            let mut element = target.borrow_mut();
            let margins = element.margins().adding(side, travel_range);
            element.set_margins(margins);
        }

        log::debug!("fit-to-screen inset of {travel_range} applied to {side:?} edge");
    }
}

#[cfg(test)]
#[path = "tests/policy_tests.rs"]
mod tests;
