//! Panel configuration.

use crate::constants::{DEFAULT_SHADOW_LENGTH, SLIDE_DURATION_SHORT};
use slidepane_layout::{Axis, ElementId};

/// Declarative configuration for a [`crate::SlidingPanel`].
///
/// The sliding and non-sliding element ids are required and name the panel's
/// two children; the rest defaults to the classic bottom-sheet setup.
///
/// ```
/// use slidepane::{Axis, PanelSpec};
///
/// let spec = PanelSpec::new(1, 2)
///     .orientation(Axis::Vertical)
///     .drag_element(3)
///     .shadow_length(16.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelSpec {
    /// Axis the sliding element travels along.
    pub orientation: Axis,
    /// Id of the child that moves.
    pub sliding_element: ElementId,
    /// Id of the fixed child establishing the travel range.
    pub non_sliding_element: ElementId,
    /// Id of the only region where a drag gesture may be armed. Defaults to
    /// the sliding element itself.
    pub drag_element: Option<ElementId>,
    /// Single element to receive the trailing fit-to-screen inset. Mutually
    /// exclusive with `auto_fit_sliding_content`.
    pub fit_target_element: Option<ElementId>,
    /// Apply the trailing inset to every immediate child of the sliding
    /// element instead of one designated target.
    pub auto_fit_sliding_content: bool,
    /// Depth of the elevation shadow along the sliding element's leading
    /// edge.
    pub shadow_length: f32,
    /// Duration of animated slides in milliseconds.
    pub slide_duration_millis: u64,
}

impl PanelSpec {
    pub fn new(sliding_element: ElementId, non_sliding_element: ElementId) -> Self {
        Self {
            orientation: Axis::Vertical,
            sliding_element,
            non_sliding_element,
            drag_element: None,
            fit_target_element: None,
            auto_fit_sliding_content: true,
            shadow_length: DEFAULT_SHADOW_LENGTH,
            slide_duration_millis: SLIDE_DURATION_SHORT,
        }
    }

    pub fn orientation(mut self, orientation: Axis) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn drag_element(mut self, id: ElementId) -> Self {
        self.drag_element = Some(id);
        self
    }

    pub fn fit_target_element(mut self, id: ElementId) -> Self {
        self.fit_target_element = Some(id);
        self
    }

    pub fn auto_fit_sliding_content(mut self, auto_fit: bool) -> Self {
        self.auto_fit_sliding_content = auto_fit;
        self
    }

    pub fn shadow_length(mut self, length: f32) -> Self {
        self.shadow_length = length;
        self
    }

    pub fn slide_duration(mut self, millis: u64) -> Self {
        self.slide_duration_millis = millis;
        self
    }
}
