//! # theme-toggle
//!
//! Light/dark theme controller for Leptos + WASM pages.
//!
//! The controller picks a theme from `localStorage` or the system
//! color-scheme query, writes it to the `data-theme` attribute on `<html>`,
//! persists it, and relabels `.theme-icon` elements with the opposite
//! theme's icon name. Browser access is compiled only with the `hydrate`
//! feature; native builds use the in-memory hosts in `host::memory`.

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod script;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod page;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use theme::Theme;

/// WASM entry point: set up logging and apply the preferred theme.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    page::with_controller(|controller| match controller.init() {
        Ok(theme) => log::info!("theme: initialized to {theme}"),
        Err(e) => log::error!("theme: init failed: {e}"),
    });
}

/// Flip the page theme. Exported to JavaScript as `window.toggleTheme`.
///
/// A no-op outside the browser.
#[cfg_attr(feature = "hydrate", wasm_bindgen::prelude::wasm_bindgen(js_name = toggleTheme))]
pub fn toggle_theme() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = page::with_controller(ThemeController::toggle) {
            log::error!("theme: toggle failed: {e}");
        }
    }
}
