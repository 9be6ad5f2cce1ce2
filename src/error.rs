//! Errors raised by host capabilities and configuration parsing.

/// Failure while talking to the page environment.
///
/// The controller treats most of these as "no signal" and degrades to the
/// fallback theme; only a failed attribute write reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("no browser window")]
    NoWindow,
    #[error("no document root element")]
    NoDocument,
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("media query error: {0}")]
    MediaQuery(String),
    #[error("could not set theme attribute: {0}")]
    Attribute(String),
    #[error("could not update theme icons: {0}")]
    Icons(String),
    #[error("invalid theme config: {0}")]
    InvalidConfig(String),
}
