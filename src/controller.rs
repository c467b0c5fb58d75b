//! Theme controller — the single source of truth for the current theme.
//!
//! All logic that doesn't depend on the browser lives here, driven through
//! the [`ThemePlatform`] seam so it can be tested without WASM. The
//! controller owns no theme state of its own: the root element's attribute
//! *is* the current theme, and storage carries it across sessions.

use crate::platform::ThemePlatform;
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Owns the theme lifecycle: initial resolution, explicit changes, the
/// toggle, and reactions to OS preference changes.
pub struct ThemeController<P: ThemePlatform> {
    platform: P,
}

impl<P: ThemePlatform> ThemeController<P> {
    #[must_use]
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    /// Access the underlying platform.
    #[must_use]
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Resolve and apply the initial theme, then make sure the toggle
    /// button exists.
    ///
    /// Resolution order: stored preference, else OS dark signal, else
    /// light. The button is created after the first [`Self::set_theme`]
    /// pass, so the icon update inside it no-ops and the freshly created
    /// button picks up the icon for the resolved theme. Idempotent — a
    /// second call finds the existing button and leaves it alone.
    pub fn initialize(&self) {
        let resolved = match self.stored_theme() {
            Some(stored) => stored,
            None if self.platform.prefers_dark() => Theme::Dark,
            None => Theme::Light,
        };
        log::debug!("theme resolved to {resolved}");
        self.set_theme(resolved);

        if self.platform.ensure_toggle_button() {
            self.platform.set_toggle_icon(self.current_theme());
        }
    }

    /// Apply `theme` everywhere it is visible.
    ///
    /// Order matches the page contract: root attribute, storage, button
    /// icon, Bootstrap component classes, then the `themechange` broadcast.
    /// Always completes — a storage failure is logged and the remaining
    /// steps still run, so the attribute, icon, and broadcast stay
    /// mutually consistent even when persistence is lost.
    pub fn set_theme(&self, theme: Theme) {
        self.platform.set_root_theme_attr(theme);
        if let Err(err) = self.platform.write_stored_theme(theme) {
            log::warn!("theme not persisted: {err}");
        }
        self.platform.set_toggle_icon(theme);
        self.platform.update_bootstrap_components(theme);
        self.platform.dispatch_theme_change(theme);
    }

    /// Flip the current theme and play the button's press animation.
    pub fn toggle_theme(&self) {
        self.set_theme(self.current_theme().flip());
        self.platform.play_press_effect();
    }

    /// The current theme as carried by the root element, defaulting to
    /// light when the attribute is absent.
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        self.platform.root_theme_attr().unwrap_or_default()
    }

    /// React to an OS color-scheme change.
    ///
    /// Only auto-switches while the user has never stored an explicit
    /// preference; once they have, the OS signal is ignored for good.
    pub fn system_preference_changed(&self, prefers_dark: bool) {
        if self.stored_theme().is_none() {
            self.set_theme(if prefers_dark { Theme::Dark } else { Theme::Light });
        }
    }

    fn stored_theme(&self) -> Option<Theme> {
        match self.platform.read_stored_theme() {
            Ok(stored) => stored,
            Err(err) => {
                log::warn!("stored theme unreadable: {err}");
                None
            }
        }
    }
}
