// SPDX-License-Identifier: PMPL-1.0-or-later

//! Memories section: gallery, testimonials and the submission link.

use super::RenderContext;
use crate::i18n::UiStrings;
use crate::mailto;
use crate::types::{non_empty, GalleryItem, Testimonial};
use crate::view::{ids, Element, PagePatch};

/// Class of the per-image buttons that open the lightbox.
pub const GALLERY_BUTTON_CLASS: &str = "gallery-item-btn";

pub fn render(ctx: &RenderContext, patch: &mut PagePatch) {
    let memories = ctx.content.memories.as_ref();
    let gallery = ctx.content.gallery();
    let testimonials = memories.map(|m| m.testimonials.as_slice()).unwrap_or(&[]);
    let ui = ctx.ui();

    patch.set_hidden(ids::MEMORIES, gallery.is_empty() && testimonials.is_empty());

    patch.replace_children(
        ids::GALLERY,
        gallery
            .iter()
            .enumerate()
            .map(|(index, item)| gallery_figure(index, item, &ui)),
    );
    patch.replace_children(ids::TESTIMONIALS, testimonials.iter().map(testimonial_item));

    patch.set_attr(ids::SUBMIT_MAIL, "href", submission_mailto(ctx));
    patch.set_text(
        ids::SUBMIT_MAIL,
        memories
            .and_then(|m| m.submission_note.as_deref())
            .unwrap_or(""),
    );
}

/// The `mailto:` link for memory submissions.
pub fn submission_mailto(ctx: &RenderContext) -> String {
    let recipient = ctx
        .config
        .contact
        .as_ref()
        .and_then(|c| non_empty(&c.email))
        .unwrap_or("");
    let memories = ctx.content.memories.as_ref();
    let subject = memories.and_then(|m| m.mailto_subject.as_deref()).unwrap_or("");
    let body = memories.and_then(|m| m.mailto_body.as_deref()).unwrap_or("");
    mailto::build(recipient, subject, body)
}

/// One gallery entry: a button wrapping the image (it opens the lightbox at
/// `data-index`), plus the caption when there is one.
pub fn gallery_figure(index: usize, item: &GalleryItem, ui: &UiStrings) -> Element {
    let open_label = ui.get_or("gallery.openImage", "open image");
    let button = Element::new("button")
        .attr("type", "button")
        .class(GALLERY_BUTTON_CLASS)
        .attr("data-index", index.to_string())
        .attr("aria-label", format!("{}; {}", item.alt_text(), open_label))
        .child(
            Element::new("img")
                .attr("src", item.src.clone())
                .attr("alt", item.alt_text())
                .attr("loading", "lazy")
                .attr("decoding", "async"),
        );

    let mut figure = Element::new("figure").child(button);
    if let Some(caption) = non_empty(&item.caption) {
        figure = figure.child(Element::new("figcaption").text(caption));
    }
    figure
}

fn testimonial_item(testimonial: &Testimonial) -> Element {
    Element::new("li")
        .child(Element::new("p").text(testimonial.text.clone().unwrap_or_default()))
        .child(
            Element::new("div")
                .class("muted")
                .text(testimonial.name.clone().unwrap_or_default()),
        )
}
