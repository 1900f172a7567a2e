//! Discrete panel state, derived from the slide ratio.

/// The panel's discrete position. The continuous ratio is the single source
/// of truth; this enum is always derived from it and never stored on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    /// Ratio exactly 1.0: the sliding element sits at the start of its
    /// travel, fully covering the non-sliding element.
    Expanded,
    /// Ratio exactly 0.0: the sliding element is displaced by the whole
    /// travel range.
    Collapsed,
    /// Anything in between, whether from a drag or an animation in flight.
    Sliding,
}

impl PanelState {
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio == 1.0 {
            PanelState::Expanded
        } else if ratio == 0.0 {
            PanelState::Collapsed
        } else {
            PanelState::Sliding
        }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
