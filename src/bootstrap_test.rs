use super::*;

// =============================================================
// Modal classes
// =============================================================

#[test]
fn modals_dark_under_dark_theme_only() {
    assert!(modals_want_dark_classes(Theme::Dark));
    assert!(!modals_want_dark_classes(Theme::Light));
}

#[test]
fn dark_modal_classes_are_the_two_utilities() {
    assert_eq!(DARK_MODAL_CLASSES, ["bg-dark", "text-light"]);
}

// =============================================================
// Badge allow-list
// =============================================================

#[test]
fn every_reserved_color_keeps_the_badge() {
    for reserved in RESERVED_BADGE_CLASSES {
        assert!(
            badge_keeps_colors(["badge", reserved]),
            "{reserved} should be reserved"
        );
    }
}

#[test]
fn unreserved_badge_does_not_match() {
    assert!(!badge_keeps_colors(["badge"]));
    assert!(!badge_keeps_colors(["badge", "bg-secondary"]));
    assert!(!badge_keeps_colors(["badge", "bg-dark", "text-light"]));
    assert!(!badge_keeps_colors([]));
}

#[test]
fn reserved_match_is_exact_class_names() {
    // Substring or prefixed variants must not count.
    assert!(!badge_keeps_colors(["bg-success-subtle"]));
    assert!(!badge_keeps_colors(["badge-bg-danger"]));
}
