//! Class-list decisions for Bootstrap dark-mode compatibility.
//!
//! Bootstrap widgets keep their own background/text utility classes, so a
//! theme change has to patch a fixed set of component categories by hand.
//! The decisions live here as plain constants and predicates; applying them
//! to live elements is the platform's job.
//!
//! The set is a fixed allow-list. Supporting another component category
//! means adding to this module, not configuration.

use crate::theme::Theme;

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

/// Selector for modal bodies that need explicit dark-mode utilities.
pub const MODAL_CONTENT_SELECTOR: &str = ".modal-content";

/// Selector for badges inspected for reserved semantic colors.
pub const BADGE_SELECTOR: &str = ".badge";

/// Utility classes added to every modal body while the theme is dark.
pub const DARK_MODAL_CLASSES: [&str; 2] = ["bg-dark", "text-light"];

/// Semantic badge colors that keep their meaning in both themes.
///
/// A badge carrying any of these classes is left untouched on theme change.
pub const RESERVED_BADGE_CLASSES: [&str; 5] = [
    "bg-success",
    "bg-danger",
    "bg-warning",
    "bg-info",
    "bg-primary",
];

/// Whether modal bodies should carry [`DARK_MODAL_CLASSES`] under `theme`.
#[must_use]
pub fn modals_want_dark_classes(theme: Theme) -> bool {
    theme == Theme::Dark
}

/// Whether a badge with the given class list keeps its colors on theme
/// change.
#[must_use]
pub fn badge_keeps_colors<'a, I>(classes: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    classes
        .into_iter()
        .any(|class| RESERVED_BADGE_CLASSES.contains(&class))
}
