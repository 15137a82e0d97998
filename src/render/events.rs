// SPDX-License-Identifier: PMPL-1.0-or-later

//! Upcoming events (funeral, memorial service, ...).

use super::RenderContext;
use crate::types::{non_empty, Event};
use crate::view::{ids, Element, PagePatch};

pub fn render(ctx: &RenderContext, patch: &mut PagePatch) {
    let events = &ctx.content.events;
    let ui = ctx.ui();

    patch.set_hidden(ids::EVENTS, events.is_empty());
    patch.set_text(ids::EVENTS_TITLE, ui.get_or("titles.events", ""));
    let more = ui.get_or("eventsMore", "Mehr");
    patch.replace_children(ids::EVENTS_LIST, events.iter().map(|ev| event_item(ev, more)));
}

fn event_item(event: &Event, more_label: &str) -> Element {
    let mut item =
        Element::new("li").child(Element::new("h3").text(event.title.clone().unwrap_or_default()));
    if let Some(date) = non_empty(&event.date) {
        item = item.child(Element::new("div").child(Element::new("strong").text(date)));
    }
    if let Some(location) = non_empty(&event.location) {
        item = item.child(Element::new("div").text(location));
    }
    if let Some(details) = non_empty(&event.details) {
        item = item.child(Element::new("div").text(details));
    }
    if let Some(link) = non_empty(&event.link) {
        item = item.child(
            Element::new("div").child(
                Element::new("a")
                    .attr("href", link)
                    .attr("target", "_blank")
                    .attr("rel", "noopener")
                    .text(more_label),
            ),
        );
    }
    item
}

#[cfg(test)]
mod tests {
    use crate::render::fixture::Fixture;
    use crate::view::ids;
    use serde_json::json;

    #[test]
    fn no_events_hides_section() {
        let page = Fixture::new(json!({}), json!({ "events": [] }), "de").page();
        assert!(page.is_hidden(ids::EVENTS));
    }

    #[test]
    fn event_rows_include_present_fields_only() {
        let fx = Fixture::new(
            json!({}),
            json!({
                "events": [
                    { "title": "Trauerfeier", "date": "12.03.2025, 14 Uhr", "location": "Friedhofskapelle", "link": "https://example.org/karte" },
                    { "title": "Gedenkkonzert" }
                ],
                "ui": { "titles": { "events": "Termine & Orte" } }
            }),
            "de",
        );
        let page = fx.page();
        assert!(!page.is_hidden(ids::EVENTS));
        assert_eq!(page.text(ids::EVENTS_TITLE), "Termine & Orte");

        let list = page.element(ids::EVENTS_LIST).expect("events list");
        let rows: Vec<String> = list.child_elements().map(|li| li.to_html()).collect();
        assert_eq!(
            rows[0],
            "<li><h3>Trauerfeier</h3><div><strong>12.03.2025, 14 Uhr</strong></div><div>Friedhofskapelle</div><div><a href=\"https://example.org/karte\" target=\"_blank\" rel=\"noopener\">Mehr</a></div></li>"
        );
        assert_eq!(rows[1], "<li><h3>Gedenkkonzert</h3></li>");
    }

    #[test]
    fn more_label_is_localized() {
        let fx = Fixture::new(
            json!({}),
            json!({ "events": [{ "title": "Service", "link": "https://example.org" }] }),
            "en",
        );
        let html = fx.page().to_html();
        assert!(html.contains(">More</a>"));
    }
}
