//! Dark/light theme toggle for the browser, compiled to WebAssembly.
//!
//! This crate owns the page's theme for its whole lifetime: it resolves the
//! initial theme from `localStorage` (falling back to the OS
//! `prefers-color-scheme` signal), mirrors it onto the `data-theme`
//! attribute of the root element, keeps the floating toggle button's icon in
//! sync, patches a fixed set of Bootstrap component classes for dark mode,
//! and broadcasts a `themechange` event other page scripts can listen for.
//! The host page only needs to load the module; everything else is wired up
//! from [`bridge::start`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The two-valued [`theme::Theme`] and its wire/icon forms |
//! | [`controller`] | Testable [`controller::ThemeController`] core logic |
//! | [`platform`] | The [`platform::ThemePlatform`] adapter seam and DOM impl |
//! | [`bootstrap`] | Class-list decisions for Bootstrap dark-mode patching |
//! | [`bridge`] | wasm-bindgen entry point and the JS-facing API |
//!
//! The controller never touches the DOM directly; it drives a
//! [`platform::ThemePlatform`] so the logic compiles and tests natively
//! without a browser. The `dom` cargo feature pulls in the web-sys
//! implementation and the wasm-bindgen bridge.

pub mod bootstrap;
pub mod controller;
pub mod platform;
pub mod theme;

#[cfg(feature = "dom")]
pub mod bridge;
