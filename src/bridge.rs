//! wasm-bindgen entry point and the JS-facing API.
//!
//! [`start`] runs when the module is instantiated. Module scripts execute
//! after the document is parsed, so the DOM is already in place and no
//! separate readiness hook is needed. It builds the controller over the
//! real [`DomPlatform`], resolves the initial theme, creates the toggle
//! button, and wires three listeners for the lifetime of the page:
//! a click on the button, the Ctrl/Cmd+Shift+D shortcut, and the OS
//! `prefers-color-scheme` change signal.
//!
//! The exported [`set_theme`], [`toggle_theme`], and [`get_current_theme`]
//! functions are the replacement for the old `window.themeToggle` object;
//! other page scripts call them directly.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{KeyboardEvent, MediaQueryListEvent};

use crate::controller::ThemeController;
use crate::platform::dom::{BUTTON_ID, DomPlatform};
use crate::theme::Theme;

thread_local! {
    // The page is single-threaded; the controller lives here from `start`
    // until the page goes away.
    static CONTROLLER: RefCell<Option<ThemeController<DomPlatform>>> =
        const { RefCell::new(None) };
}

fn with_controller(f: impl FnOnce(&ThemeController<DomPlatform>)) {
    CONTROLLER.with(|cell| {
        if let Some(controller) = cell.borrow().as_ref() {
            f(controller);
        }
    });
}

/// Module entry point: resolve the theme, create the button, wire listeners.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let controller = ThemeController::new(DomPlatform::new());
    controller.initialize();
    CONTROLLER.with(|cell| *cell.borrow_mut() = Some(controller));

    wire_toggle_click();
    wire_keyboard_shortcut();
    wire_preference_listener();
}

/// Set the theme from a JS string. Unknown values are ignored with a
/// warning rather than crossing the FFI boundary as a panic.
#[wasm_bindgen]
pub fn set_theme(theme: &str) {
    match theme.parse::<Theme>() {
        Ok(theme) => with_controller(|c| c.set_theme(theme)),
        Err(err) => log::warn!("set_theme ignored: {err}"),
    }
}

/// Flip the current theme, exactly as a button click would.
#[wasm_bindgen]
pub fn toggle_theme() {
    with_controller(ThemeController::toggle_theme);
}

/// The current theme as its wire string, defaulting to `"light"`.
#[wasm_bindgen]
#[must_use]
pub fn get_current_theme() -> String {
    let mut current = Theme::Light;
    with_controller(|c| current = c.current_theme());
    current.as_str().to_owned()
}

fn wire_toggle_click() {
    let Some(button) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(BUTTON_ID))
    else {
        return;
    };
    let on_click = Closure::<dyn FnMut()>::new(|| {
        with_controller(ThemeController::toggle_theme);
    });
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

fn wire_keyboard_shortcut() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(|event: KeyboardEvent| {
        if (event.ctrl_key() || event.meta_key()) && event.shift_key() && event.key() == "D" {
            event.prevent_default();
            with_controller(ThemeController::toggle_theme);
        }
    });
    let _ =
        document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

fn wire_preference_listener() {
    let Some(query) = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
    else {
        return;
    };
    let on_change = Closure::<dyn FnMut(MediaQueryListEvent)>::new(|event: MediaQueryListEvent| {
        with_controller(|c| c.system_preference_changed(event.matches()));
    });
    let _ = query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    on_change.forget();
}
