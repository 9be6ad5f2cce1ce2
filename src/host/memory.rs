//! In-memory hosts for tests and non-browser builds.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{ColorSchemeSignal, PreferenceStore, ThemeDocument};
use crate::error::ThemeError;

/// `localStorage` stand-in. `unavailable` makes every call fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    unavailable: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store whose every access fails, like a browser with storage disabled.
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.unavailable.set(true);
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.unavailable.get() {
            return Err(ThemeError::StorageUnavailable);
        }
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.unavailable.get() {
            return Err(ThemeError::StorageUnavailable);
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Fixed system preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticScheme {
    Light,
    Dark,
    /// `matchMedia` missing.
    Unsupported,
}

impl ColorSchemeSignal for StaticScheme {
    fn matches(&self, query: &str) -> Result<bool, ThemeError> {
        match self {
            Self::Light => Ok(query.contains("light")),
            Self::Dark => Ok(query.contains("dark")),
            Self::Unsupported => Err(ThemeError::MediaQuery("matchMedia unsupported".into())),
        }
    }
}

/// Root element attributes plus a flat list of `(class, text)` elements.
///
/// Selectors are matched only in the `.class` form.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    attributes: RefCell<HashMap<String, String>>,
    elements: RefCell<Vec<(String, String)>>,
    read_only: Cell<bool>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with `class` and initial `text`.
    #[must_use]
    pub fn with_element(self, class: &str, text: &str) -> Self {
        self.elements.borrow_mut().push((class.to_owned(), text.to_owned()));
        self
    }

    /// Make every attribute write on the root fail.
    #[must_use]
    pub fn read_only(self) -> Self {
        self.read_only.set(true);
        self
    }

    /// Texts of all elements with `class`, in insertion order.
    pub fn texts(&self, class: &str) -> Vec<String> {
        self.elements
            .borrow()
            .iter()
            .filter(|(c, _)| c == class)
            .map(|(_, t)| t.clone())
            .collect()
    }
}

impl ThemeDocument for MemoryDocument {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        if self.read_only.get() {
            return Err(ThemeError::Attribute(format!("{name} is read-only")));
        }
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_text_all(&self, selector: &str, text: &str) -> Result<usize, ThemeError> {
        let Some(class) = selector.strip_prefix('.') else {
            return Err(ThemeError::Icons(format!("unsupported selector: {selector}")));
        };
        let mut count = 0;
        for (c, t) in self.elements.borrow_mut().iter_mut() {
            if c == class {
                text.clone_into(t);
                count += 1;
            }
        }
        Ok(count)
    }
}
