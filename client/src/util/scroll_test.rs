use super::*;

#[test]
fn nav_is_expanded_at_top_of_page() {
    assert!(!is_condensed(0.0));
}

#[test]
fn nav_is_expanded_at_the_threshold() {
    assert!(!is_condensed(NAV_SCROLL_THRESHOLD));
}

#[test]
fn nav_condenses_past_the_threshold() {
    assert!(is_condensed(NAV_SCROLL_THRESHOLD + 1.0));
    assert!(is_condensed(1200.0));
}
