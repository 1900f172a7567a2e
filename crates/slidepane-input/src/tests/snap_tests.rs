use super::*;

#[test]
fn upward_release_past_commit_threshold_expands() {
    assert_eq!(completion_target(0.5, SlideDirection::Up), Some(1.0));
    assert_eq!(completion_target(0.11, SlideDirection::Up), Some(1.0));
}

#[test]
fn upward_release_at_threshold_collapses() {
    // Strict `>`: exactly 0.1 does not commit.
    assert_eq!(completion_target(0.1, SlideDirection::Up), Some(0.0));
    assert_eq!(completion_target(0.100_000_1, SlideDirection::Up), Some(1.0));
}

#[test]
fn downward_release_before_commit_threshold_collapses() {
    assert_eq!(completion_target(0.5, SlideDirection::Down), Some(0.0));
    assert_eq!(completion_target(0.899_999_9, SlideDirection::Down), Some(0.0));
}

#[test]
fn downward_release_at_threshold_expands() {
    // Strict `<`: exactly 0.9 does not collapse.
    assert_eq!(completion_target(0.9, SlideDirection::Down), Some(1.0));
    assert_eq!(completion_target(0.95, SlideDirection::Down), Some(1.0));
}

#[test]
fn ambiguous_release_performs_no_snap() {
    assert_eq!(completion_target(0.5, SlideDirection::None), None);
}
