// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 code checks for configured locales.
//!
//! Locale codes double as file-name fragments (`content.<code>.json`), so
//! anything that is not a lowercase two-letter ISO 639-1 code is rejected
//! before it reaches the loader.

/// Every ISO 639-1 code, sorted for binary search.
const ISO_639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
    "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv",
    "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi",
    "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja",
    "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw",
    "ky", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml",
    "mn", "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro",
    "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr",
    "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr",
    "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

/// Whether `code` is a known ISO 639-1 code. Case-sensitive: codes must be
/// lowercase.
///
/// # Examples
/// ```
/// assert!(memorial_site::i18n::is_valid_iso639_1("de"));
/// assert!(!memorial_site::i18n::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    ISO_639_1.binary_search(&code).is_ok()
}

/// Name of the language written in the language itself, for the locale
/// listing. `None` for languages without an entry.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "de" => Some("Deutsch"),
        "en" => Some("English"),
        "fr" => Some("Français"),
        "es" => Some("Español"),
        "it" => Some("Italiano"),
        "nl" => Some("Nederlands"),
        "pl" => Some("Polski"),
        "tr" => Some("Türkçe"),
        "uk" => Some("Українська"),
        "ru" => Some("Русский"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(ISO_639_1.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn known_codes_accepted() {
        assert!(is_valid_iso639_1("de"));
        assert!(is_valid_iso639_1("en"));
        assert!(is_valid_iso639_1("zu"));
    }

    #[test]
    fn unknown_or_malformed_codes_rejected() {
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1(""));
        assert!(!is_valid_iso639_1("deu"));
        assert!(!is_valid_iso639_1("DE"));
    }

    #[test]
    fn native_names() {
        assert_eq!(native_name("de"), Some("Deutsch"));
        assert_eq!(native_name("xx"), None);
    }
}
