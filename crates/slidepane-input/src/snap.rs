//! Release completion policy.

use crate::{SlideDirection, COLLAPSE_COMMIT_THRESHOLD, EXPAND_COMMIT_THRESHOLD};

/// Decides where a partial slide should settle when the pointer is released
/// mid-travel.
///
/// The thresholds are asymmetric on purpose: a slide that has passed a small
/// commitment distance completes in its travel direction, so a twitchy
/// release does not revert a deliberate long drag.
///
/// Returns `None` when no snap should be performed (ambiguous release
/// direction).
pub fn completion_target(ratio: f32, direction: SlideDirection) -> Option<f32> {
    match direction {
        SlideDirection::Up => {
            if ratio > EXPAND_COMMIT_THRESHOLD {
                Some(1.0)
            } else {
                Some(0.0)
            }
        }
        SlideDirection::Down => {
            if ratio < COLLAPSE_COMMIT_THRESHOLD {
                Some(0.0)
            } else {
                Some(1.0)
            }
        }
        SlideDirection::None => None,
    }
}

#[cfg(test)]
#[path = "tests/snap_tests.rs"]
mod tests;
