//! The per-page browser controller behind `toggleTheme`.

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::host::browser::{self, BrowserDocument, LocalStorage, MediaScheme};

pub type BrowserController = ThemeController<LocalStorage, MediaScheme, BrowserDocument>;

thread_local! {
    static CONTROLLER: BrowserController =
        ThemeController::new(load_config(), LocalStorage, MediaScheme, BrowserDocument);
}

/// Page config from the `<meta>` tag, or defaults.
fn load_config() -> ThemeConfig {
    let Some(raw) = browser::config_meta_content() else {
        return ThemeConfig::default();
    };
    ThemeConfig::from_json(&raw).unwrap_or_else(|e| {
        log::error!("theme: {e}; using defaults");
        ThemeConfig::default()
    })
}

/// Run `f` against this page's controller.
pub fn with_controller<R>(f: impl FnOnce(&BrowserController) -> R) -> R {
    CONTROLLER.with(f)
}
