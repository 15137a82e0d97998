// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page chrome: document title and meta tags, header, section titles
//! owned by no section renderer, aria labels and the language toggle.

use super::RenderContext;
use crate::view::{ids, PagePatch};

pub fn render(ctx: &RenderContext, patch: &mut PagePatch) {
    let ui = ctx.ui();

    let title = ctx.site_title().unwrap_or("");
    patch.set_document_title(title);
    patch.set_text(ids::SITE_TITLE, title);
    patch.set_meta("og:title", title);

    let description = ui.from_content("metaDescription").unwrap_or("");
    patch.set_meta("description", description);
    patch.set_meta("og:description", description);

    patch.set_text(ids::SKIP_LINK, ui.get_or("skipLink", ""));
    patch.set_attr(ids::LANG_NAV, "aria-label", ui.get_or("langNavLabel", ""));
    patch.set_text(ids::ABOUT_TITLE, ui.get_or("titles.about", ""));
    patch.set_text(ids::MEMORIES_TITLE, ui.get_or("titles.memories", ""));
    patch.set_text(ids::SHARE_BTN, ui.get_or("share", ""));

    for (key, id) in [
        ("aria.aboutQuotes", ids::ABOUT_QUOTES),
        ("aria.gallery", ids::GALLERY),
        ("aria.testimonials", ids::TESTIMONIALS),
    ] {
        patch.set_or_remove_attr(id, "aria-label", ui.get(key));
    }

    render_lang_toggle(ctx, patch);
    patch.set_root_lang(ctx.locale.code());
}

/// Label and aria-label of the language toggle for the current locale.
pub fn render_lang_toggle(ctx: &RenderContext, patch: &mut PagePatch) {
    let ui = ctx.ui();
    patch.set_text(ids::LANG_TOGGLE, ui.get_or("langToggle", ""));
    patch.set_attr(ids::LANG_TOGGLE, "aria-label", ui.get_or("langToggleAria", ""));
}
