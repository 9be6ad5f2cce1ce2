//! Inline `<head>` snippet that sets the theme attribute before first paint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle loads asynchronously, so the controller's `init` runs
//! after the page may already have painted. This snippet runs synchronously
//! in `<head>` and sets only the attribute, using the same decision rules as
//! `ThemeController::preferred`. `init` then brings storage and icons in line.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use crate::config::ThemeConfig;

/// JSON string literal safe to embed inside a `<script>` element.
fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_owned())
        .replace('<', "\\u003c")
}

/// Render the pre-paint snippet for `config`.
pub fn pre_paint_script(config: &ThemeConfig) -> String {
    let key = js_string(&config.storage_key);
    let attr = js_string(&config.attribute);
    let query = js_string(&config.light_query);
    let fallback = js_string(config.fallback.as_str());
    format!(
        "(function(){{var f={fallback},t=null;\
try{{var s=localStorage.getItem({key});\
if(s){{s=s.trim();t=(s===\"light\"||s===\"dark\")?s:f;}}}}catch(e){{}}\
if(!t){{try{{t=window.matchMedia({query}).matches?\"light\":\"dark\";}}catch(e){{t=f;}}}}\
document.documentElement.setAttribute({attr},t);}})();"
    )
}
