//! Theme controller configuration.
//!
//! Every field has a default matching the stock page markup, so pages only
//! need to supply what they change. In the browser the overrides come from
//! `<meta name="theme-toggle-config" content="{...}">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ThemeError;
use crate::theme::Theme;

pub const DEFAULT_STORAGE_KEY: &str = "gpu-insight-theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_ICON_SELECTOR: &str = ".theme-icon";
pub const DEFAULT_LIGHT_ICON: &str = "light_mode";
pub const DEFAULT_DARK_ICON: &str = "dark_mode";
pub const DEFAULT_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

/// Name of the `<meta>` tag carrying JSON overrides.
pub const CONFIG_META_NAME: &str = "theme-toggle-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Local storage key holding the persisted theme.
    pub storage_key: String,
    /// Attribute set on the document root.
    pub attribute: String,
    /// CSS selector for icon placeholders.
    pub icon_selector: String,
    /// Icon label offering a switch to light (shown while dark).
    pub light_icon: String,
    /// Icon label offering a switch to dark (shown while light).
    pub dark_icon: String,
    /// Media query that reports a system light preference.
    pub light_query: String,
    /// Theme used when nothing else decides.
    pub fallback: Theme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
            icon_selector: DEFAULT_ICON_SELECTOR.to_owned(),
            light_icon: DEFAULT_LIGHT_ICON.to_owned(),
            dark_icon: DEFAULT_DARK_ICON.to_owned(),
            light_query: DEFAULT_LIGHT_QUERY.to_owned(),
            fallback: Theme::Dark,
        }
    }
}

impl ThemeConfig {
    /// Parse a partial JSON object; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ThemeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty keys, selectors, and labels.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let fields = [
            ("storage_key", &self.storage_key),
            ("attribute", &self.attribute),
            ("icon_selector", &self.icon_selector),
            ("light_icon", &self.light_icon),
            ("dark_icon", &self.dark_icon),
            ("light_query", &self.light_query),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ThemeError::InvalidConfig(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// Icon label for `theme`: the action the toggle offers, not the state.
    pub fn icon_label(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.light_icon,
            Theme::Light => &self.dark_icon,
        }
    }
}
