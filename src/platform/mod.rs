//! The seam between theme logic and the browser.
//!
//! [`ThemePlatform`] is everything the controller needs from its host:
//! persistent storage, the OS color-scheme signal, the root element's theme
//! attribute, the toggle button, and the page-level broadcast. The
//! controller holds the rules; the platform holds the DOM. The split keeps
//! the controller compiling and testing natively — tests inject a recording
//! fake instead of a browser.

use crate::theme::Theme;

#[cfg(feature = "dom")]
pub mod dom;

/// Error raised by the storage side of a platform.
///
/// Storage is the only fallible surface: `localStorage` can be absent or
/// blocked (private browsing, disabled storage) and writes can throw
/// (quota, security). DOM lookups degrade to no-ops instead of erroring.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The key-value store is missing or access to it was denied.
    #[error("theme storage unavailable: {0}")]
    StorageUnavailable(String),
    /// The store exists but the write was rejected.
    #[error("failed to persist theme: {0}")]
    StorageWrite(String),
}

/// Host adapter for [`crate::controller::ThemeController`].
///
/// Implementations: [`dom::DomPlatform`] over web-sys (behind the `dom`
/// feature), and a recording fake in the controller's tests.
pub trait ThemePlatform {
    /// The persisted theme preference, if one was ever stored.
    ///
    /// Unknown stored strings count as absent, so a corrupted value falls
    /// back to the OS preference instead of leaking into the page.
    fn read_stored_theme(&self) -> Result<Option<Theme>, PlatformError>;

    /// Persist the theme preference.
    fn write_stored_theme(&self, theme: Theme) -> Result<(), PlatformError>;

    /// Whether the OS currently prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;

    /// The root element's current theme attribute, if set to a valid theme.
    fn root_theme_attr(&self) -> Option<Theme>;

    /// Mirror the theme onto the root element's attribute.
    fn set_root_theme_attr(&self, theme: Theme);

    /// Find or create the toggle button. Returns `true` if a button was
    /// newly created, `false` if one already existed.
    fn ensure_toggle_button(&self) -> bool;

    /// Swap the toggle button's icon to match the theme. No-op when the
    /// button does not exist yet.
    fn set_toggle_icon(&self, theme: Theme);

    /// Drive the short press animation on the toggle button.
    fn play_press_effect(&self);

    /// Patch Bootstrap component classes for the theme.
    fn update_bootstrap_components(&self, theme: Theme);

    /// Broadcast the new theme to other scripts on the page.
    fn dispatch_theme_change(&self, theme: Theme);
}
