// SPDX-License-Identifier: PMPL-1.0-or-later

//! Hero banner.

use super::RenderContext;
use crate::view::{ids, PagePatch};

pub fn render(ctx: &RenderContext, patch: &mut PagePatch) {
    let hero = ctx.content.hero.as_ref();
    for (id, value) in [
        (ids::HERO_NAME, hero.and_then(|h| h.name.as_deref())),
        (ids::HERO_LIFESPAN, hero.and_then(|h| h.lifespan.as_deref())),
        (ids::HERO_TAGLINE, hero.and_then(|h| h.tagline.as_deref())),
    ] {
        patch.set_text(id, value.unwrap_or(""));
    }

    let ui = ctx.ui();
    patch.set_text(ids::DONATE_CTA, ui.get_or("donateCta", ""));
    patch.set_attr(ids::HERO_IMAGE, "alt", ui.from_content("heroImageAlt").unwrap_or(""));
}

#[cfg(test)]
mod tests {
    use crate::render::fixture::Fixture;
    use crate::view::ids;
    use serde_json::json;

    #[test]
    fn hero_fields() {
        let fx = Fixture::new(
            json!({}),
            json!({
                "hero": { "name": "Alex Beispiel", "lifespan": "1970 – 2024", "tagline": "Unvergessen" },
                "ui": { "donateCta": "Jetzt spenden", "heroImageAlt": "Alex am Meer" }
            }),
            "de",
        );
        let page = fx.page();
        assert_eq!(page.text(ids::HERO_NAME), "Alex Beispiel");
        assert_eq!(page.text(ids::HERO_LIFESPAN), "1970 – 2024");
        assert_eq!(page.text(ids::HERO_TAGLINE), "Unvergessen");
        assert_eq!(page.text(ids::DONATE_CTA), "Jetzt spenden");
        assert_eq!(page.attr(ids::HERO_IMAGE, "alt"), Some("Alex am Meer"));
    }

    #[test]
    fn missing_hero_clears_text_and_keeps_cta() {
        let page = Fixture::new(json!({}), json!({}), "de").page();
        assert_eq!(page.text(ids::HERO_NAME), "");
        assert_eq!(page.text(ids::DONATE_CTA), "Spenden");
        assert_eq!(page.attr(ids::HERO_IMAGE, "alt"), Some(""));

        let en = Fixture::new(json!({}), json!({}), "en").page();
        assert_eq!(en.text(ids::DONATE_CTA), "Donate");
    }
}
