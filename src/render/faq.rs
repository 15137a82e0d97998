// SPDX-License-Identifier: PMPL-1.0-or-later

//! FAQ as collapsible question/answer pairs.

use super::RenderContext;
use crate::view::{ids, Element, PagePatch};

pub fn render(ctx: &RenderContext, patch: &mut PagePatch) {
    let faq = &ctx.content.faq;
    patch.set_hidden(ids::FAQ, faq.is_empty());
    patch.set_text(ids::FAQ_TITLE, ctx.ui().get_or("titles.faq", ""));
    patch.replace_children(
        ids::FAQ_LIST,
        faq.iter().map(|item| {
            Element::new("details")
                .child(Element::new("summary").text(item.q.clone().unwrap_or_default()))
                .child(Element::new("p").text(item.a.clone().unwrap_or_default()))
        }),
    );
}

#[cfg(test)]
mod tests {
    use crate::render::fixture::Fixture;
    use crate::view::ids;
    use serde_json::json;

    #[test]
    fn faq_items_become_details() {
        let fx = Fixture::new(
            json!({}),
            json!({ "faq": [{ "q": "Blumen?", "a": "Gern, oder eine Spende." }, { "q": "Kleidung?" }] }),
            "de",
        );
        let page = fx.page();
        assert!(!page.is_hidden(ids::FAQ));
        let list = page.element(ids::FAQ_LIST).expect("faq list");
        let html: Vec<String> = list.child_elements().map(|d| d.to_html()).collect();
        assert_eq!(
            html,
            vec![
                "<details><summary>Blumen?</summary><p>Gern, oder eine Spende.</p></details>",
                "<details><summary>Kleidung?</summary><p></p></details>",
            ]
        );
    }

    #[test]
    fn empty_faq_hidden() {
        let page = Fixture::new(json!({}), json!({}), "de").page();
        assert!(page.is_hidden(ids::FAQ));
        assert_eq!(page.text(ids::FAQ_TITLE), "Häufige Fragen");
    }
}
