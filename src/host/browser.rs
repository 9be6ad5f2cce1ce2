//! `web-sys` implementations of the host traits.
//!
//! Each call looks the window up again rather than caching handles, so a
//! controller built before the document finishes parsing still sees icons
//! added later.

use wasm_bindgen::JsValue;

use super::{ColorSchemeSignal, PreferenceStore, ThemeDocument};
use crate::config::CONFIG_META_NAME;
use crate::error::ThemeError;

fn window() -> Result<web_sys::Window, ThemeError> {
    web_sys::window().ok_or(ThemeError::NoWindow)
}

fn document() -> Result<web_sys::Document, ThemeError> {
    window()?.document().ok_or(ThemeError::NoDocument)
}

fn root() -> Result<web_sys::Element, ThemeError> {
    document()?.document_element().ok_or(ThemeError::NoDocument)
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, ThemeError> {
        window()?
            .local_storage()
            .ok()
            .flatten()
            .ok_or(ThemeError::StorageUnavailable)
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_message(&e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(js_message(&e)))
    }
}

/// `window.matchMedia`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MediaScheme;

impl ColorSchemeSignal for MediaScheme {
    fn matches(&self, query: &str) -> Result<bool, ThemeError> {
        let list = window()?
            .match_media(query)
            .map_err(|e| ThemeError::MediaQuery(js_message(&e)))?
            .ok_or_else(|| ThemeError::MediaQuery("matchMedia returned null".into()))?;
        Ok(list.matches())
    }
}

/// `document.documentElement` plus `querySelectorAll` for icons.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDocument;

impl ThemeDocument for BrowserDocument {
    fn attribute(&self, name: &str) -> Option<String> {
        root().ok()?.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        root()?
            .set_attribute(name, value)
            .map_err(|e| ThemeError::Attribute(js_message(&e)))
    }

    fn set_text_all(&self, selector: &str, text: &str) -> Result<usize, ThemeError> {
        let nodes = document()?
            .query_selector_all(selector)
            .map_err(|e| ThemeError::Icons(js_message(&e)))?;
        let mut count = 0;
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                node.set_text_content(Some(text));
                count += 1;
            }
        }
        Ok(count)
    }
}

/// Raw JSON from `<meta name="theme-toggle-config">`, if the page has one.
pub fn config_meta_content() -> Option<String> {
    let selector = format!("meta[name=\"{CONFIG_META_NAME}\"]");
    document()
        .ok()?
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}
