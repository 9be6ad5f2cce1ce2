//! Leptos components for wiring the theme controller into a page.

pub mod theme_script;
pub mod theme_toggle;
