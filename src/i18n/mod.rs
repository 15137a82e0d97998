// SPDX-License-Identifier: PMPL-1.0-or-later

//! UI strings for memorial-site.
//!
//! Every label the page shows comes from one table, keyed by dotted paths
//! such as `"titles.about"`, `"donate.bankTitle"` or `"aria.gallery"`.
//! Resolution order:
//!
//! 1. the `ui` table of the active locale's content document
//! 2. the built-in catalog for the active locale
//! 3. the built-in catalog for the default locale
//! 4. the German catalog, which matches the skeleton's placeholder labels
//!
//! Blank strings count as absent. Every label the page renders has a
//! catalog entry, so renderers always write a value and a rerender never
//! keeps the previous locale's text.

mod catalog;
mod iso639;

pub use catalog::{builtin, SOURCE_LOCALE};
pub use iso639::{is_valid_iso639_1, native_name};

use serde_json::Value;

/// Resolver over the content `ui` table with built-in fallbacks.
#[derive(Debug, Clone, Copy)]
pub struct UiStrings<'a> {
    table: &'a Value,
    locale: &'a str,
    fallback: &'a str,
}

impl<'a> UiStrings<'a> {
    pub fn new(table: &'a Value, locale: &'a str, fallback: &'a str) -> Self {
        Self {
            table,
            locale,
            fallback,
        }
    }

    /// Resolve `key`, falling back through the built-in catalogs.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.from_content(key)
            .or_else(|| builtin(self.locale, key))
            .or_else(|| builtin(self.fallback, key))
            .or_else(|| builtin(SOURCE_LOCALE, key))
            .filter(|s| !s.is_empty())
    }

    /// Resolve `key` from the content table only, ignoring built-ins.
    pub fn from_content(&self, key: &str) -> Option<&'a str> {
        lookup(self.table, key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Resolve `key`, or `default` when nothing provides it.
    pub fn get_or(&self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// String items of an array entry (e.g. `"privacy.lines"`); non-string
    /// items are skipped.
    pub fn lines(&self, key: &str) -> Vec<&'a str> {
        lookup(self.table, key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn locale(&self) -> &'a str {
        self.locale
    }
}

fn lookup<'v>(table: &'v Value, key: &str) -> Option<&'v Value> {
    key.split('.')
        .try_fold(table, |node, segment| node.as_object()?.get(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn content_table_wins() {
        let table = json!({ "share": "Weitersagen", "titles": { "about": "Über ihn" } });
        let ui = UiStrings::new(&table, "de", "de");
        assert_eq!(ui.get("share"), Some("Weitersagen"));
        assert_eq!(ui.get("titles.about"), Some("Über ihn"));
    }

    #[test]
    fn falls_back_to_builtin_for_locale() {
        let table = json!({});
        let ui = UiStrings::new(&table, "en", "de");
        assert_eq!(ui.get("share"), Some("Share"));
    }

    #[test]
    fn falls_back_to_default_locale_catalog() {
        let table = Value::Null;
        let ui = UiStrings::new(&table, "fr", "de");
        assert_eq!(ui.get("eventsMore"), Some("Mehr"));
    }

    #[test]
    fn source_catalog_is_last_resort() {
        let table = json!({});
        let ui = UiStrings::new(&table, "fr", "fr");
        assert_eq!(ui.get("titles.faq"), Some("Häufige Fragen"));
        assert_eq!(ui.get("share"), Some("Teilen"));
    }

    #[test]
    fn blank_content_value_counts_as_absent() {
        let table = json!({ "share": "" });
        let ui = UiStrings::new(&table, "en", "de");
        assert_eq!(ui.get("share"), Some("Share"));
        assert_eq!(ui.from_content("share"), None);
    }

    #[test]
    fn unknown_key_is_none() {
        let table = json!({ "titles": "not an object" });
        let ui = UiStrings::new(&table, "de", "de");
        assert_eq!(ui.get("titles.epilogue"), None);
        assert_eq!(ui.get_or("titles.epilogue", "Nachwort"), "Nachwort");
        assert_eq!(ui.get("titles.about"), Some("Über"));
    }

    #[test]
    fn lines_skip_non_strings() {
        let table = json!({ "privacy": { "lines": ["a", 3, "b"] } });
        let ui = UiStrings::new(&table, "de", "de");
        assert_eq!(ui.lines("privacy.lines"), vec!["a", "b"]);
        assert!(ui.lines("missing").is_empty());
    }
}
