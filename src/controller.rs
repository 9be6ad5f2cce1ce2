//! Theme selection, application, and toggling.
//!
//! DESIGN
//! ======
//! One controller per page context owns the config and the three hosts.
//! Every host call is result-returning; storage and media failures degrade
//! to the fallback theme and only a failed attribute write is surfaced.
//!
//! TRADE-OFFS
//! ==========
//! `toggle` reads the live document attribute rather than the persisted
//! value. If other code rewrites the attribute, the next toggle follows the
//! document and overwrites storage to match.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::host::{ColorSchemeSignal, PreferenceStore, ThemeDocument};
use crate::theme::Theme;

pub struct ThemeController<S, M, D> {
    config: ThemeConfig,
    store: S,
    scheme: M,
    document: D,
}

impl<S, M, D> ThemeController<S, M, D>
where
    S: PreferenceStore,
    M: ColorSchemeSignal,
    D: ThemeDocument,
{
    pub fn new(config: ThemeConfig, store: S, scheme: M, document: D) -> Self {
        Self { config, store, scheme, document }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Persisted theme if one is stored, else the system signal.
    pub fn preferred(&self) -> Theme {
        match self.store.load(&self.config.storage_key) {
            Ok(Some(saved)) if !saved.is_empty() => {
                let theme = Theme::decode_or(&saved, self.config.fallback);
                if theme.as_str() != saved.trim() {
                    log::warn!("theme: ignoring stored value {saved:?}, using {theme}");
                }
                return theme;
            }
            Ok(_) => {}
            Err(e) => log::warn!("theme: preference unreadable: {e}"),
        }

        match self.scheme.matches(&self.config.light_query) {
            Ok(true) => Theme::Light,
            Ok(false) => Theme::Dark,
            Err(e) => {
                log::warn!("theme: system scheme unavailable: {e}");
                self.config.fallback
            }
        }
    }

    /// Set the attribute, persist, and relabel icons.
    ///
    /// Returns the number of icons updated. Only an attribute failure is an
    /// error; storage and icon failures are logged.
    pub fn apply(&self, theme: Theme) -> Result<usize, ThemeError> {
        self.document.set_attribute(&self.config.attribute, theme.as_str())?;

        if let Err(e) = self.store.save(&self.config.storage_key, theme.as_str()) {
            log::warn!("theme: could not persist {theme}: {e}");
        }

        let label = self.config.icon_label(theme);
        let icons = self
            .document
            .set_text_all(&self.config.icon_selector, label)
            .unwrap_or_else(|e| {
                log::warn!("theme: {e}");
                0
            });

        log::debug!("theme: applied {theme} ({icons} icons)");
        Ok(icons)
    }

    /// Decode an external value strictly and apply it.
    pub fn apply_raw(&self, raw: &str) -> Result<Theme, ThemeError> {
        let theme = Theme::decode_or(raw, self.config.fallback);
        self.apply(theme)?;
        Ok(theme)
    }

    /// Apply the preferred theme. Run once when the page loads.
    pub fn init(&self) -> Result<Theme, ThemeError> {
        let theme = self.preferred();
        self.apply(theme)?;
        Ok(theme)
    }

    /// Theme currently on the document root.
    ///
    /// Missing or empty means dark. Any other value that is not `dark` reads
    /// as light, so the next toggle lands on dark.
    pub fn current(&self) -> Theme {
        let raw = self.document.attribute(&self.config.attribute).unwrap_or_default();
        if raw.is_empty() || raw == Theme::Dark.as_str() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Icon label matching the live attribute.
    pub fn icon_label(&self) -> &str {
        self.config.icon_label(self.current())
    }

    /// Switch to the inverse of the live attribute.
    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        let next = self.current().inverse();
        self.apply(next)?;
        Ok(next)
    }
}
