// SPDX-License-Identifier: PMPL-1.0-or-later

//! About section: biography text and quotes.

use super::RenderContext;
use crate::types::Quote;
use crate::view::{ids, Element, PagePatch};

pub fn render(ctx: &RenderContext, patch: &mut PagePatch) {
    let about = ctx.content.about.as_ref();
    let text = about
        .and_then(|a| a.text.as_deref())
        .filter(|t| !t.trim().is_empty());
    let quotes = about.map(|a| a.quotes.as_slice()).unwrap_or(&[]);

    patch.set_hidden(ids::ABOUT, text.is_none() && quotes.is_empty());
    patch.set_text(ids::ABOUT_TEXT, text.unwrap_or(""));
    patch.replace_children(ids::ABOUT_QUOTES, quotes.iter().map(quote_item));
}

// Newlines in quote text are kept as text; the stylesheet preserves them.
fn quote_item(quote: &Quote) -> Element {
    Element::new("li")
        .child(Element::new("blockquote").text(quote.text.clone().unwrap_or_default()))
        .child(
            Element::new("div")
                .class("muted")
                .text(quote.author.clone().unwrap_or_default()),
        )
}

#[cfg(test)]
mod tests {
    use crate::render::fixture::Fixture;
    use crate::view::ids;
    use serde_json::json;

    #[test]
    fn missing_about_hides_section() {
        let page = Fixture::new(json!({}), json!({ "hero": { "name": "Alex" } }), "de").page();
        assert!(page.is_hidden(ids::ABOUT));
    }

    #[test]
    fn blank_text_without_quotes_hides_section() {
        let page = Fixture::new(json!({}), json!({ "about": { "text": "   " } }), "de").page();
        assert!(page.is_hidden(ids::ABOUT));
    }

    #[test]
    fn quotes_alone_show_section() {
        let page = Fixture::new(
            json!({}),
            json!({ "about": { "quotes": [{ "text": "Zeile 1\nZeile 2", "author": "Mama" }] } }),
            "de",
        )
        .page();
        assert!(!page.is_hidden(ids::ABOUT));
        let list = page.element(ids::ABOUT_QUOTES).expect("quotes list");
        assert_eq!(
            list.to_html(),
            "<ul id=\"about-quotes\" class=\"quotes\"><li><blockquote>Zeile 1\nZeile 2</blockquote><div class=\"muted\">Mama</div></li></ul>"
        );
    }

    #[test]
    fn text_is_inserted_as_plain_text() {
        let page = Fixture::new(
            json!({}),
            json!({ "about": { "text": "<b>Alex</b> liebte das Meer" } }),
            "de",
        )
        .page();
        assert!(!page.is_hidden(ids::ABOUT));
        assert_eq!(page.text(ids::ABOUT_TEXT), "<b>Alex</b> liebte das Meer");
        assert!(page.to_html().contains("&lt;b&gt;Alex&lt;/b&gt;"));
    }
}
