//! Page capabilities the theme controller depends on.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches `web-sys` directly. Browser access lives in
//! `browser` (hydrate builds only) and `memory` provides the same surface
//! for native tests and server-side rendering.

pub mod memory;

#[cfg(feature = "hydrate")]
pub mod browser;

use crate::error::ThemeError;

/// Synchronous key-value store for the persisted preference.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means no value was stored.
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Write `value` under `key`.
    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// System color-scheme signal.
pub trait ColorSchemeSignal {
    /// Whether `query` currently matches.
    fn matches(&self, query: &str) -> Result<bool, ThemeError>;
}

/// Document root and icon placeholders.
pub trait ThemeDocument {
    /// Current value of `name` on the root element.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Set `name` on the root element.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Replace the text of every element matching `selector`, returning how
    /// many were updated.
    fn set_text_all(&self, selector: &str, text: &str) -> Result<usize, ThemeError>;
}
