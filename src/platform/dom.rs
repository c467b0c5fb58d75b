//! web-sys implementation of [`ThemePlatform`].
//!
//! Owns the page contract: the `theme` key in `localStorage`, the
//! `data-theme` attribute on `<html>`, the floating `#theme-toggle` button,
//! and the `themechange` broadcast on `window`. Requires a browser
//! environment; every DOM lookup degrades to a no-op when the page isn't
//! there, and only storage access surfaces as an error.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Document, Element, HtmlElement, Window};

use crate::bootstrap;
use crate::platform::{PlatformError, ThemePlatform};
use crate::theme::{Theme, ThemeChangeDetail};

/// `localStorage` key carrying the persisted preference.
const STORAGE_KEY: &str = "theme";
/// Attribute on the root element that CSS selectors key off.
const ROOT_ATTR: &str = "data-theme";
/// Element id (and class) of the toggle button.
pub(crate) const BUTTON_ID: &str = "theme-toggle";
const BUTTON_CLASS: &str = "theme-toggle";
/// Name of the page-level broadcast event.
const EVENT_NAME: &str = "themechange";
/// How long the pressed transform stays before reverting.
const PRESS_EFFECT_MS: u32 = 300;

/// Browser-backed platform.
///
/// Holds the pending press-effect revert so a re-trigger within the 300 ms
/// window replaces (and thereby cancels) the previous one; the last revert
/// wins and the button always settles at the resting transform.
#[derive(Default)]
pub struct DomPlatform {
    press_revert: RefCell<Option<Timeout>>,
}

impl DomPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn window() -> Option<Window> {
        web_sys::window()
    }

    fn document() -> Option<Document> {
        Self::window().and_then(|w| w.document())
    }

    fn toggle_button() -> Option<Element> {
        Self::document().and_then(|d| d.get_element_by_id(BUTTON_ID))
    }

    fn storage() -> Result<web_sys::Storage, PlatformError> {
        let window =
            Self::window().ok_or_else(|| PlatformError::StorageUnavailable("no window".to_owned()))?;
        window
            .local_storage()
            .map_err(|err| PlatformError::StorageUnavailable(js_err(&err)))?
            .ok_or_else(|| PlatformError::StorageUnavailable("localStorage missing".to_owned()))
    }
}

impl ThemePlatform for DomPlatform {
    fn read_stored_theme(&self) -> Result<Option<Theme>, PlatformError> {
        let raw = Self::storage()?
            .get_item(STORAGE_KEY)
            .map_err(|err| PlatformError::StorageUnavailable(js_err(&err)))?;
        match raw {
            None => Ok(None),
            Some(value) => match value.parse() {
                Ok(theme) => Ok(Some(theme)),
                Err(err) => {
                    // Corrupted value: fall back to the OS preference.
                    log::warn!("{err}");
                    Ok(None)
                }
            },
        }
    }

    fn write_stored_theme(&self, theme: Theme) -> Result<(), PlatformError> {
        Self::storage()?
            .set_item(STORAGE_KEY, theme.as_str())
            .map_err(|err| PlatformError::StorageWrite(js_err(&err)))
    }

    fn prefers_dark(&self) -> bool {
        Self::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }

    fn root_theme_attr(&self) -> Option<Theme> {
        Self::document()
            .and_then(|d| d.document_element())
            .and_then(|el| el.get_attribute(ROOT_ATTR))
            .and_then(|value| value.parse().ok())
    }

    fn set_root_theme_attr(&self, theme: Theme) {
        if let Some(el) = Self::document().and_then(|d| d.document_element()) {
            let _ = el.set_attribute(ROOT_ATTR, theme.as_str());
        }
    }

    fn ensure_toggle_button(&self) -> bool {
        let Some(document) = Self::document() else {
            return false;
        };
        if document.get_element_by_id(BUTTON_ID).is_some() {
            return false;
        }
        let Ok(button) = document.create_element("button") else {
            return false;
        };
        button.set_id(BUTTON_ID);
        button.set_class_name(BUTTON_CLASS);
        let _ = button.set_attribute("aria-label", "Toggle theme");
        let _ = button.set_attribute("title", "Toggle dark/light theme");
        match document.body() {
            Some(body) => body.append_child(&button).is_ok(),
            None => false,
        }
    }

    fn set_toggle_icon(&self, theme: Theme) {
        if let Some(button) = Self::toggle_button() {
            button.set_inner_html(theme.icon_html());
        }
    }

    fn play_press_effect(&self) {
        let Some(button) = Self::toggle_button().and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let _ = button
            .style()
            .set_property("transform", "scale(0.9) rotate(360deg)");

        let revert = Timeout::new(PRESS_EFFECT_MS, move || {
            let _ = button
                .style()
                .set_property("transform", "scale(1) rotate(0deg)");
        });
        // Replacing the handle drops (cancels) any pending revert.
        *self.press_revert.borrow_mut() = Some(revert);
    }

    fn update_bootstrap_components(&self, theme: Theme) {
        let Some(document) = Self::document() else {
            return;
        };
        let Ok(modals) = document.query_selector_all(bootstrap::MODAL_CONTENT_SELECTOR) else {
            return;
        };
        let want_dark = bootstrap::modals_want_dark_classes(theme);
        for i in 0..modals.length() {
            let Some(modal) = modals.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let class_list = modal.class_list();
            for class in bootstrap::DARK_MODAL_CLASSES {
                if want_dark {
                    let _ = class_list.add_1(class);
                } else {
                    let _ = class_list.remove_1(class);
                }
            }
        }
        // Badges carrying a reserved semantic color (see
        // `bootstrap::RESERVED_BADGE_CLASSES`) keep their classes in both
        // themes, so there is nothing to patch for `.badge` elements.
    }

    fn dispatch_theme_change(&self, theme: Theme) {
        let Some(window) = Self::window() else {
            return;
        };
        let Ok(json) = serde_json::to_string(&ThemeChangeDetail { theme }) else {
            return;
        };
        let Ok(detail) = js_sys::JSON::parse(&json) else {
            return;
        };
        let init = CustomEventInit::new();
        init.set_detail(&detail);
        if let Ok(event) = CustomEvent::new_with_event_init_dict(EVENT_NAME, &init) {
            let _ = window.dispatch_event(&event);
        }
    }
}

fn js_err(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
