// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page skeleton and the element-ID contract
//!
//! The renderers address elements only through the IDs below. The skeleton
//! carries every one of them, with German placeholder labels that stay in
//! place when the UI table provides nothing better.

use super::node::Element;

pub mod ids {
    pub const SITE_HEADER: &str = "site-header";
    pub const SITE_TITLE: &str = "siteTitle";
    pub const SKIP_LINK: &str = "skip-link";
    pub const LANG_NAV: &str = "lang-nav";
    pub const LANG_TOGGLE: &str = "lang-toggle";
    pub const SHARE_BTN: &str = "share-btn";

    pub const HERO_IMAGE: &str = "hero-image";
    pub const HERO_NAME: &str = "hero-name";
    pub const HERO_LIFESPAN: &str = "hero-lifespan";
    pub const HERO_TAGLINE: &str = "hero-tagline";
    pub const DONATE_CTA: &str = "donate-cta";

    pub const ABOUT: &str = "about";
    pub const ABOUT_TITLE: &str = "about-title";
    pub const ABOUT_TEXT: &str = "about-text";
    pub const ABOUT_QUOTES: &str = "about-quotes";

    pub const MEMORIES: &str = "memories";
    pub const MEMORIES_TITLE: &str = "memories-title";
    pub const GALLERY: &str = "gallery";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const SUBMIT_MAIL: &str = "submit-mail";

    pub const DONATE: &str = "donate";
    pub const DONATE_TITLE: &str = "donate-title";
    pub const DONATE_TRANSPARENCY: &str = "donate-transparency";
    pub const DONATE_BREAKDOWN: &str = "donate-breakdown";
    pub const BANK: &str = "bank";
    pub const BANK_TITLE: &str = "bank-title";
    pub const BANK_ACCOUNT_HOLDER_LABEL: &str = "bank-accountHolderLabel";
    pub const BANK_ACCOUNT_NAME: &str = "bank-accountName";
    pub const BANK_IBAN_LABEL: &str = "bank-ibanLabel";
    pub const BANK_IBAN: &str = "bank-iban";
    pub const BANK_REFERENCE_LABEL: &str = "bank-referenceLabel";
    pub const BANK_REFERENCE: &str = "bank-reference";
    pub const PAYPAL: &str = "paypal";
    pub const PAYPAL_TITLE: &str = "paypal-title";
    pub const PAYPAL_URL: &str = "paypal-url";
    pub const PAYPAL_NOTE: &str = "paypal-note";
    pub const CASH: &str = "cashDrop";
    pub const CASH_TITLE: &str = "cash-title";
    pub const CASH_DESC: &str = "cash-desc";
    pub const CASH_ADDRESS: &str = "cash-address";

    pub const EVENTS: &str = "events";
    pub const EVENTS_TITLE: &str = "events-title";
    pub const EVENTS_LIST: &str = "events-list";

    pub const FAQ: &str = "faq";
    pub const FAQ_TITLE: &str = "faq-title";
    pub const FAQ_LIST: &str = "faq-list";

    pub const CONTACT_TITLE: &str = "contact-title";
    pub const CONTACT_NOTE: &str = "contact-note";
    pub const IMPRINT: &str = "imprint";
    pub const IMPRINT_SUMMARY: &str = "imprint-summary";
    pub const PRIVACY: &str = "privacy";
    pub const PRIVACY_SUMMARY: &str = "privacy-summary";
    pub const FOOTER_CREDITS: &str = "footer-credits";
    pub const FOOTER_HASHTAG: &str = "footer-hashtag";
}

/// Stylesheet linked from the skeleton, relative to the site root.
pub const STYLESHEET: &str = "assets/css/style.css";

fn el(tag: &str, id: &str) -> Element {
    Element::new(tag).with_id(id)
}

fn section(id: &str, title_id: &str, title: &str) -> Element {
    el("section", id)
        .attr("aria-labelledby", title_id)
        .child(el("h2", title_id).text(title))
}

fn label_row(label_id: &str, label: &str, value: Element) -> Element {
    Element::new("p")
        .child(el("span", label_id).class("label").text(label))
        .child(value)
}

/// The empty page every render pass starts from.
pub fn skeleton() -> Element {
    use ids::*;

    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title"))
        .child(
            Element::new("meta")
                .attr("name", "description")
                .attr("content", ""),
        )
        .child(
            Element::new("meta")
                .attr("property", "og:title")
                .attr("content", ""),
        )
        .child(
            Element::new("meta")
                .attr("property", "og:description")
                .attr("content", ""),
        )
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", STYLESHEET),
        );

    let header = el("header", SITE_HEADER)
        .class("site-header")
        .child(el("h1", SITE_TITLE))
        .child(
            el("nav", LANG_NAV)
                .attr("aria-label", "Sprache")
                .child(el("button", LANG_TOGGLE).attr("type", "button"))
                .child(el("button", SHARE_BTN).attr("type", "button").text("Teilen")),
        );

    let hero = Element::new("section")
        .with_id("hero")
        .class("hero")
        .child(el("img", HERO_IMAGE).attr("src", "assets/img/hero.jpg").attr("alt", ""))
        .child(el("h2", HERO_NAME))
        .child(el("p", HERO_LIFESPAN).class("lifespan"))
        .child(el("p", HERO_TAGLINE).class("tagline"))
        .child(el("a", DONATE_CTA).class("button").attr("href", "#donate").text("Spenden"));

    let about = section(ABOUT, ABOUT_TITLE, "Über")
        .child(el("p", ABOUT_TEXT).class("prose"))
        .child(el("ul", ABOUT_QUOTES).class("quotes"));

    let memories = section(MEMORIES, MEMORIES_TITLE, "Erinnerungen")
        .child(el("div", GALLERY).class("gallery"))
        .child(el("ul", TESTIMONIALS).class("testimonials"))
        .child(el("a", SUBMIT_MAIL).class("button").attr("href", "#"));

    let bank = el("div", BANK)
        .class("donate-panel")
        .child(el("h3", BANK_TITLE).text("Überweisung"))
        .child(label_row(
            BANK_ACCOUNT_HOLDER_LABEL,
            "Kontoinhaber: ",
            el("span", BANK_ACCOUNT_NAME),
        ))
        .child(label_row(BANK_IBAN_LABEL, "IBAN: ", el("code", BANK_IBAN)))
        .child(label_row(
            BANK_REFERENCE_LABEL,
            "Verwendungszweck: ",
            el("span", BANK_REFERENCE),
        ));

    let paypal = el("div", PAYPAL)
        .class("donate-panel")
        .child(el("h3", PAYPAL_TITLE).text("PayPal"))
        .child(
            el("a", PAYPAL_URL)
                .class("button")
                .attr("href", "#")
                .attr("target", "_blank")
                .attr("rel", "noopener")
                .text("Mit PayPal spenden"),
        )
        .child(el("p", PAYPAL_NOTE).class("muted"));

    let cash = el("div", CASH)
        .class("donate-panel")
        .child(el("h3", CASH_TITLE).text("Spendenbox"))
        .child(el("p", CASH_DESC))
        .child(el("p", CASH_ADDRESS).class("muted"));

    let donate = section(DONATE, DONATE_TITLE, "Spenden")
        .child(el("p", DONATE_TRANSPARENCY))
        .child(el("ul", DONATE_BREAKDOWN).class("breakdown"))
        .child(
            Element::new("div")
                .class("donate-channels")
                .child(bank)
                .child(paypal)
                .child(cash),
        );

    let events = section(EVENTS, EVENTS_TITLE, "Termine").child(el("ul", EVENTS_LIST));
    let faq = section(FAQ, FAQ_TITLE, "Häufige Fragen").child(el("div", FAQ_LIST));

    let contact = section("contact", CONTACT_TITLE, "Kontakt")
        .child(el("p", CONTACT_NOTE))
        .child(
            Element::new("details")
                .child(el("summary", IMPRINT_SUMMARY).text("Impressum"))
                .child(el("div", IMPRINT)),
        )
        .child(
            Element::new("details")
                .child(el("summary", PRIVACY_SUMMARY).text("Datenschutz"))
                .child(el("div", PRIVACY)),
        );

    let footer = Element::new("footer")
        .class("site-footer")
        .child(el("p", FOOTER_CREDITS))
        .child(el("p", FOOTER_HASHTAG).class("hashtag"));

    let body = Element::new("body")
        .child(
            el("a", SKIP_LINK)
                .class("skip-link")
                .attr("href", "#main")
                .text("Zum Inhalt springen"),
        )
        .child(header)
        .child(
            Element::new("main")
                .with_id("main")
                .child(hero)
                .child(about)
                .child(memories)
                .child(donate)
                .child(events)
                .child(faq)
                .child(contact),
        )
        .child(footer);

    Element::new("html").attr("lang", "de").child(head).child(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_carries_every_bound_id() {
        let page = skeleton();
        for id in [
            ids::SITE_TITLE,
            ids::LANG_TOGGLE,
            ids::HERO_NAME,
            ids::ABOUT,
            ids::GALLERY,
            ids::SUBMIT_MAIL,
            ids::BANK_IBAN,
            ids::PAYPAL_URL,
            ids::CASH_ADDRESS,
            ids::EVENTS_LIST,
            ids::FAQ_LIST,
            ids::IMPRINT,
            ids::PRIVACY,
            ids::FOOTER_HASHTAG,
        ] {
            assert!(page.find_by_id(id).is_some(), "skeleton lacks #{}", id);
        }
    }

    #[test]
    fn ids_are_unique() {
        let page = skeleton();
        let mut seen = std::collections::HashSet::new();
        fn walk(el: &Element, seen: &mut std::collections::HashSet<String>) {
            if let Some(id) = el.id() {
                assert!(seen.insert(id.to_string()), "duplicate id #{}", id);
            }
            for child in el.child_elements() {
                walk(child, seen);
            }
        }
        walk(&page, &mut seen);
    }
}
