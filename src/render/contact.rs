// SPDX-License-Identifier: PMPL-1.0-or-later

//! Contact section and footer, including the imprint and privacy blocks.
//!
//! Imprint and privacy text come from the config document and the UI
//! table, both maintained by the site owner. Privacy lines are inserted as
//! markup so they can carry links; `{controller}` and `{email}` are
//! substituted from the config.

use super::RenderContext;
use crate::types::{non_empty, Imprint};
use crate::view::{ids, Element, Node, PagePatch};
use regex::{Captures, Regex};
use std::sync::OnceLock;

pub fn render(ctx: &RenderContext, patch: &mut PagePatch) {
    let ui = ctx.ui();

    patch.set_text(ids::CONTACT_TITLE, ui.get_or("titles.contact", ""));
    patch.set_text(
        ids::CONTACT_NOTE,
        ctx.content
            .contact
            .as_ref()
            .and_then(|c| c.note.clone())
            .unwrap_or_default(),
    );

    let footer = ctx.content.footer.as_ref();
    patch.set_text(
        ids::FOOTER_CREDITS,
        footer.and_then(|f| f.credits.clone()).unwrap_or_default(),
    );
    let hashtag = footer
        .and_then(|f| non_empty(&f.hashtag))
        .or_else(|| ctx.config.social.as_ref().and_then(|s| non_empty(&s.hashtag)))
        .unwrap_or("");
    patch.set_text(ids::FOOTER_HASHTAG, hashtag);

    let contact = ctx.config.contact.as_ref();
    if let Some(imprint) = contact.and_then(|c| c.imprint.as_ref()) {
        patch.replace_children(ids::IMPRINT, imprint_block(imprint));
    }
    if let Some(privacy) = contact.and_then(|c| c.privacy.as_ref()) {
        let controller = non_empty(&privacy.controller).unwrap_or("");
        let email = contact.and_then(|c| non_empty(&c.email)).unwrap_or("");
        let lines = ui.lines("privacy.lines");
        patch.replace_children(
            ids::PRIVACY,
            lines.iter().map(|line| {
                Element::new("p").child(Node::raw(substitute(line, controller, email)))
            }),
        );
    }

    patch.set_text(ids::IMPRINT_SUMMARY, ui.get_or("imprintSummary", ""));
    patch.set_text(ids::PRIVACY_SUMMARY, ui.get_or("privacySummary", ""));
}

fn imprint_block(imprint: &Imprint) -> Vec<Element> {
    let name = Element::new("p")
        .child(Element::new("strong").text(imprint.name.clone().unwrap_or_default()));

    let mut address = Element::new("p");
    for (i, line) in imprint.address.as_deref().unwrap_or("").split('\n').enumerate() {
        if i > 0 {
            address = address.child(Element::new("br"));
        }
        address = address.text(line);
    }

    let email = imprint.email.clone().unwrap_or_default();
    let mail = Element::new("p").child(
        Element::new("a")
            .attr("href", format!("mailto:{}", email))
            .text(email),
    );

    vec![name, address, mail]
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{(controller|email)\}").expect("placeholder pattern"))
}

/// Replace `{controller}` and `{email}` placeholders in a privacy line.
fn substitute(line: &str, controller: &str, email: &str) -> String {
    placeholder_pattern()
        .replace_all(line, |caps: &Captures| match &caps[1] {
            "controller" => controller.to_string(),
            _ => email.to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixture::Fixture;
    use serde_json::json;

    #[test]
    fn placeholders_are_substituted() {
        assert_eq!(
            substitute("Verantwortlich: {controller} ({email}), {other}", "Kim", "k@x.org"),
            "Verantwortlich: Kim (k@x.org), {other}"
        );
        assert_eq!(substitute("{controller} und {controller}", "A", ""), "A und A");
    }

    #[test]
    fn footer_hashtag_falls_back_to_config() {
        let fx = Fixture::new(
            json!({ "social": { "hashtag": "#FuerAlex" } }),
            json!({ "footer": { "credits": "Fotos: Familie" } }),
            "de",
        );
        let page = fx.page();
        assert_eq!(page.text(ids::FOOTER_CREDITS), "Fotos: Familie");
        assert_eq!(page.text(ids::FOOTER_HASHTAG), "#FuerAlex");

        let fx = Fixture::new(
            json!({ "social": { "hashtag": "#FuerAlex" } }),
            json!({ "footer": { "hashtag": "#ForAlex" } }),
            "en",
        );
        assert_eq!(fx.page().text(ids::FOOTER_HASHTAG), "#ForAlex");
    }

    #[test]
    fn imprint_breaks_address_lines() {
        let fx = Fixture::new(
            json!({ "contact": { "imprint": {
                "name": "Kim Beispiel",
                "address": "Hauptstr. 1\n12345 Musterstadt",
                "email": "kim@example.org"
            } } }),
            json!({ "ui": { "imprintSummary": "Impressum (Pflichtangaben)" } }),
            "de",
        );
        let page = fx.page();
        let imprint = page.element(ids::IMPRINT).expect("imprint");
        assert_eq!(
            imprint.to_html(),
            "<div id=\"imprint\"><p><strong>Kim Beispiel</strong></p><p>Hauptstr. 1<br>12345 Musterstadt</p><p><a href=\"mailto:kim@example.org\">kim@example.org</a></p></div>"
        );
        assert_eq!(page.text(ids::IMPRINT_SUMMARY), "Impressum (Pflichtangaben)");
    }

    #[test]
    fn privacy_lines_are_markup() {
        let fx = Fixture::new(
            json!({ "contact": { "email": "info@example.org", "privacy": { "controller": "Kim Beispiel" } } }),
            json!({ "ui": { "privacy": { "lines": [
                "Verantwortlich ist {controller}.",
                "Fragen an <a href=\"mailto:{email}\">{email}</a>."
            ] } } }),
            "de",
        );
        let page = fx.page();
        let privacy = page.element(ids::PRIVACY).expect("privacy");
        assert_eq!(
            privacy.to_html(),
            "<div id=\"privacy\"><p>Verantwortlich ist Kim Beispiel.</p><p>Fragen an <a href=\"mailto:info@example.org\">info@example.org</a>.</p></div>"
        );
    }

    #[test]
    fn no_contact_config_leaves_blocks_empty() {
        let page = Fixture::new(json!({}), json!({}), "de").page();
        assert_eq!(page.element(ids::IMPRINT).map(|e| e.children.len()), Some(0));
        assert_eq!(page.element(ids::PRIVACY).map(|e| e.children.len()), Some(0));
        assert_eq!(page.text(ids::PRIVACY_SUMMARY), "Datenschutz");
    }
}
