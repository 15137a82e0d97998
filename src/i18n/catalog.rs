// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in UI strings.
//!
//! These are the last resort behind the content document's `ui` table: a
//! key is only looked up here when the active locale's content does not
//! provide it. German is the source language, since it is the fallback
//! locale; every key must exist in `DE`.
//!
//! ## Adding a key
//!
//! 1. Add the German entry to `DE`
//! 2. Add the English entry to `EN` (locales without a table use the
//!    default locale's table)

/// Locale of the page skeleton's placeholder labels; the catalog of last
/// resort.
pub const SOURCE_LOCALE: &str = "de";

/// Look up a built-in string for `locale`. Returns `None` for locales
/// without a catalog and for unknown keys.
pub fn builtin(locale: &str, key: &str) -> Option<&'static str> {
    catalog_for(locale)?
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

fn catalog_for(locale: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match locale {
        SOURCE_LOCALE => Some(DE),
        "en" => Some(EN),
        _ => None,
    }
}

// ─── German (source language) ───────────────────────────────────────

const DE: &[(&str, &str)] = &[
    // Language toggle: the label names the switch, in the target language
    ("langToggle", "Change the language to english"),
    ("langToggleAria", "Sprache wechseln"),
    // Share button
    ("share", "Teilen"),
    ("shareCopied", "Link kopiert"),
    ("copyUrlPrompt", "URL kopieren:"),
    // Events
    ("eventsMore", "Mehr"),
    // Gallery and lightbox
    ("gallery.openImage", "Bild öffnen"),
    ("lightbox.close", "Schließen"),
    ("lightbox.prev", "Vorheriges Bild"),
    ("lightbox.next", "Nächstes Bild"),
    // Page chrome and section titles (the skeleton carries the German ones)
    ("skipLink", "Zum Inhalt springen"),
    ("langNavLabel", "Sprache"),
    ("titles.about", "Über"),
    ("titles.memories", "Erinnerungen"),
    ("titles.donate", "Spenden"),
    ("titles.events", "Termine"),
    ("titles.faq", "Häufige Fragen"),
    ("titles.contact", "Kontakt"),
    ("imprintSummary", "Impressum"),
    ("privacySummary", "Datenschutz"),
    // Donations
    ("donateCta", "Spenden"),
    ("donate.bankTitle", "Überweisung"),
    ("donate.bankAccountHolderLabel", "Kontoinhaber:"),
    ("donate.bankIbanLabel", "IBAN:"),
    ("donate.bankReferenceLabel", "Verwendungszweck:"),
    ("donate.paypalTitle", "PayPal"),
    ("donate.paypalCta", "Mit PayPal spenden"),
    ("donate.cashTitle", "Spendenbox"),
];

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("langToggle", "Sprache auf Deutsch ändern"),
    ("langToggleAria", "Switch language"),
    ("share", "Share"),
    ("shareCopied", "Link copied"),
    ("copyUrlPrompt", "Copy URL:"),
    ("eventsMore", "More"),
    ("gallery.openImage", "open image"),
    ("lightbox.close", "Close"),
    ("lightbox.prev", "Previous image"),
    ("lightbox.next", "Next image"),
    ("skipLink", "Skip to content"),
    ("langNavLabel", "Language"),
    ("titles.about", "About"),
    ("titles.memories", "Memories"),
    ("titles.donate", "Donate"),
    ("titles.events", "Events"),
    ("titles.faq", "Frequently asked questions"),
    ("titles.contact", "Contact"),
    ("imprintSummary", "Imprint"),
    ("privacySummary", "Privacy"),
    ("donateCta", "Donate"),
    ("donate.bankTitle", "Bank transfer"),
    ("donate.bankAccountHolderLabel", "Account holder:"),
    ("donate.bankIbanLabel", "IBAN:"),
    ("donate.bankReferenceLabel", "Reference:"),
    ("donate.paypalTitle", "PayPal"),
    ("donate.paypalCta", "Donate with PayPal"),
    ("donate.cashTitle", "Cash box"),
];
