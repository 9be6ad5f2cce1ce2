//! `<script>` element carrying the pre-paint snippet. Place it in `<head>`.

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::script::pre_paint_script;

#[component]
pub fn ThemeScript(#[prop(optional)] config: Option<ThemeConfig>) -> impl IntoView {
    let source = pre_paint_script(&config.unwrap_or_default());
    view! { <script inner_html=source></script> }
}
