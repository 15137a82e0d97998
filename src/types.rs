// SPDX-License-Identifier: PMPL-1.0-or-later

//! Document types for memorial-site
//!
//! Two JSON documents drive the page: the locale-independent config
//! document (`data/config.json`) and one content document per locale
//! (`data/content.<locale>.json`). Every field is optional. Absent data
//! degrades to hidden or empty output at render time, so deserialization
//! never fails on a missing key. `null` counts as missing, and a channel or
//! accent flag is only on for JSON `true`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ─── Config document ────────────────────────────────────────────────

/// Site-wide settings, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub site_title: Option<String>,
    pub theme: Option<Theme>,
    pub donation: Option<Donation>,
    pub contact: Option<ContactConfig>,
    pub social: Option<Social>,
    /// Available locale codes, in toggle order.
    #[serde(deserialize_with = "null_as_default")]
    pub locales: Vec<String>,
    pub default_locale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub primary: Option<String>,
    pub primary_soft: Option<String>,
    #[serde(deserialize_with = "flag")]
    pub accent_rainbow: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Donation {
    pub bank: Option<BankChannel>,
    pub paypal: Option<PaypalChannel>,
    pub cash_drop: Option<CashChannel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankChannel {
    #[serde(deserialize_with = "flag")]
    pub enabled: bool,
    pub account_name: Option<String>,
    pub iban: Option<String>,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaypalChannel {
    #[serde(deserialize_with = "flag")]
    pub enabled: bool,
    pub url: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CashChannel {
    #[serde(deserialize_with = "flag")]
    pub enabled: bool,
    pub description: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactConfig {
    /// Recipient of the memory-submission mailto link.
    pub email: Option<String>,
    pub imprint: Option<Imprint>,
    pub privacy: Option<Privacy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Imprint {
    pub name: Option<String>,
    /// Multi-line postal address; newlines become line breaks.
    pub address: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Privacy {
    /// Substituted for `{controller}` in the privacy lines of the UI table.
    pub controller: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Social {
    pub hashtag: Option<String>,
}

// ─── Content document ───────────────────────────────────────────────

/// All user-visible text for one locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Content {
    pub hero: Option<Hero>,
    pub about: Option<About>,
    pub memories: Option<Memories>,
    pub donate: Option<Donate>,
    #[serde(deserialize_with = "null_as_default")]
    pub events: Vec<Event>,
    #[serde(deserialize_with = "null_as_default")]
    pub faq: Vec<FaqItem>,
    pub contact: Option<ContactContent>,
    pub footer: Option<Footer>,
    /// UI string table, looked up by dotted key through [`crate::i18n::UiStrings`].
    pub ui: Value,
}

impl Content {
    /// Gallery items in display order; empty when the document has none.
    pub fn gallery(&self) -> &[GalleryItem] {
        self.memories
            .as_ref()
            .map(|m| m.gallery.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    pub name: Option<String>,
    pub lifespan: Option<String>,
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct About {
    pub text: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub quotes: Vec<Quote>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    pub text: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Memories {
    #[serde(deserialize_with = "null_as_default")]
    pub gallery: Vec<GalleryItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub testimonials: Vec<Testimonial>,
    pub mailto_subject: Option<String>,
    pub mailto_body: Option<String>,
    pub submission_note: Option<String>,
}

/// One gallery image. Referenced by index for lightbox navigation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryItem {
    #[serde(deserialize_with = "null_as_default")]
    pub src: String,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

impl GalleryItem {
    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub text: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Donate {
    pub transparency: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub cost_breakdown: Vec<CostRow>,
    /// Overrides the config PayPal note for this locale.
    pub paypal_note: Option<String>,
    /// Overrides the config cash-drop description for this locale.
    pub cash_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostRow {
    #[serde(deserialize_with = "null_as_default")]
    pub item: String,
    pub amount: Amount,
}

/// A cost-breakdown amount: free text is shown verbatim, numbers are
/// formatted as whole euros for the active locale. Anything else reads as
/// empty text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Amount {
    Euros(f64),
    Text(String),
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Text(String::new())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64().map(Amount::Euros).unwrap_or_default(),
            Value::String(text) => Amount::Text(text),
            _ => Amount::default(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    pub title: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub details: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqItem {
    pub q: Option<String>,
    pub a: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactContent {
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Footer {
    pub credits: Option<String>,
    pub hashtag: Option<String>,
}

// ─── Lenient field decoding ─────────────────────────────────────────

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Only JSON `true` enables; `"true"`, `1` or `null` leave the flag off.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// Treats blank strings like absent ones, the way the page does.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
