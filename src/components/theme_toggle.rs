//! Button that flips between light and dark.
//!
//! The icon text is rendered once from the live page theme; the controller
//! rewrites it through the `theme-icon` class on every apply, so the span is
//! not reactive.

use leptos::prelude::*;

#[cfg(not(feature = "hydrate"))]
use crate::config::ThemeConfig;

/// Theme toggle button.
#[component]
pub fn ThemeToggle(
    /// Extra classes for the button.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let label = initial_label();
    let class = if class.is_empty() { "btn theme-toggle".to_owned() } else { format!("btn theme-toggle {class}") };

    view! {
        <button class=class title="Toggle theme" on:click=move |_| crate::toggle_theme()>
            <span class="theme-icon material-symbols-outlined">{label}</span>
        </button>
    }
}

/// Label for a button mounting now. Outside the browser there is no live
/// attribute, so the fallback theme's label is used.
fn initial_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        crate::page::with_controller(|c| c.icon_label().to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let config = ThemeConfig::default();
        config.icon_label(config.fallback).to_owned()
    }
}
