// SPDX-License-Identifier: PMPL-1.0-or-later

//! Theme colors as CSS custom properties.

use super::RenderContext;
use crate::types::non_empty;
use crate::view::{ids, Element, PagePatch};
use tracing::warn;

pub const PRIMARY_VAR: &str = "--color-primary";
pub const PRIMARY_SOFT_VAR: &str = "--color-primary-soft";
const ACCENT_CLASS: &str = "accent-rainbow";

pub fn render(ctx: &RenderContext, patch: &mut PagePatch) {
    let Some(theme) = &ctx.config.theme else {
        return;
    };
    for (name, value) in [
        (PRIMARY_VAR, &theme.primary),
        (PRIMARY_SOFT_VAR, &theme.primary_soft),
    ] {
        let Some(value) = non_empty(value) else {
            continue;
        };
        match css_value(value) {
            Some(value) => patch.set_css_var(name, value),
            None => warn!(property = name, value, "theme color ignored: not a single CSS value"),
        }
    }
    if theme.accent_rainbow {
        patch.ensure_child(
            ids::SITE_HEADER,
            ACCENT_CLASS,
            Element::new("div")
                .class(ACCENT_CLASS)
                .attr("aria-hidden", "true"),
        );
    }
}

/// A value that cannot end its declaration or open a block: no `;`,
/// braces or control characters.
fn css_value(raw: &str) -> Option<&str> {
    let value = raw.trim();
    let single = !value.is_empty()
        && !value
            .chars()
            .any(|c| matches!(c, ';' | '{' | '}') || c.is_control());
    single.then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixture::Fixture;
    use serde_json::json;

    #[test]
    fn colors_become_css_variables() {
        let fx = Fixture::new(
            json!({ "theme": { "primary": "#5b2a86", "primarySoft": "#efe6f7" } }),
            json!({}),
            "de",
        );
        let page = fx.page();
        assert_eq!(page.css_var(PRIMARY_VAR).as_deref(), Some("#5b2a86"));
        assert_eq!(page.css_var(PRIMARY_SOFT_VAR).as_deref(), Some("#efe6f7"));
    }

    #[test]
    fn colors_cannot_inject_declarations() {
        let fx = Fixture::new(
            json!({ "theme": { "primary": "red; display:none", "primarySoft": " #efe6f7 " } }),
            json!({}),
            "de",
        );
        let page = fx.page();
        assert_eq!(page.css_var(PRIMARY_VAR), None);
        assert_eq!(page.css_var("display"), None);
        assert_eq!(page.css_var(PRIMARY_SOFT_VAR).as_deref(), Some("#efe6f7"));
        assert_eq!(page.root().get_attr("style"), Some("--color-primary-soft: #efe6f7"));
    }

    #[test]
    fn css_value_rejects_block_syntax() {
        assert_eq!(css_value("hsl(270 50% 35%)"), Some("hsl(270 50% 35%)"));
        assert_eq!(css_value("red}body{color:red"), None);
        assert_eq!(css_value("red\n"), Some("red"));
        assert_eq!(css_value("red\nblue"), None);
        assert_eq!(css_value("   "), None);
    }

    #[test]
    fn no_theme_no_style() {
        let page = Fixture::new(json!({}), json!({}), "de").page();
        assert_eq!(page.root().get_attr("style"), None);
    }

    #[test]
    fn rainbow_bar_only_when_enabled() {
        let on = Fixture::new(json!({ "theme": { "accentRainbow": true } }), json!({}), "de").page();
        let header = on.element(ids::SITE_HEADER).expect("header");
        assert!(header.child_elements().any(|c| c.has_class(ACCENT_CLASS)));

        let off = Fixture::new(json!({ "theme": {} }), json!({}), "de").page();
        let header = off.element(ids::SITE_HEADER).expect("header");
        assert!(!header.child_elements().any(|c| c.has_class(ACCENT_CLASS)));
    }
}
