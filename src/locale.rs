// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale selection
//!
//! The set of supported locales comes from the config document. Whatever
//! code a caller asks for, the resolved locale is always a member of that
//! set: unsupported or unset codes resolve to the default locale.

use crate::i18n::is_valid_iso639_1;
use crate::types::Config;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Locale used when the config names none.
pub const FALLBACK_LOCALE: &str = "de";

/// Locales offered when the config lists none.
const DEFAULT_LOCALES: &[&str] = &["de", "en"];

/// A two-letter ISO 639-1 language code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Parse a locale code. Trims and lower-cases; returns `None` for
    /// anything that is not an ISO 639-1 code.
    pub fn parse(code: &str) -> Option<Locale> {
        let normalized = code.trim().to_ascii_lowercase();
        is_valid_iso639_1(&normalized).then_some(Locale(normalized))
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The configured locales plus the default one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    available: Vec<Locale>,
    default: Locale,
}

impl LocaleSet {
    /// Build the set from `locales`/`defaultLocale` in the config document.
    ///
    /// Invalid codes are dropped with a warning, duplicates are ignored. A
    /// default locale outside the available set is added to the front.
    pub fn from_config(config: &Config) -> Self {
        let mut available: Vec<Locale> = Vec::new();
        for code in &config.locales {
            match Locale::parse(code) {
                Some(locale) if !available.contains(&locale) => available.push(locale),
                Some(_) => {}
                None => warn!(code = %code, "ignoring invalid locale code in config"),
            }
        }
        if available.is_empty() {
            available = DEFAULT_LOCALES
                .iter()
                .filter_map(|code| Locale::parse(code))
                .collect();
        }

        let default = config
            .default_locale
            .as_deref()
            .and_then(|code| {
                let parsed = Locale::parse(code);
                if parsed.is_none() {
                    warn!(code = %code, "ignoring invalid default locale in config");
                }
                parsed
            })
            .or_else(|| Locale::parse(FALLBACK_LOCALE).filter(|l| available.contains(l)))
            .unwrap_or_else(|| available[0].clone());

        if !available.contains(&default) {
            available.insert(0, default.clone());
        }

        Self { available, default }
    }

    pub fn available(&self) -> &[Locale] {
        &self.available
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Resolve `code` to a supported locale, or the default.
    pub fn resolve(&self, code: Option<&str>) -> Locale {
        code.and_then(|c| self.find(c))
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    /// The locale after `current` in toggle order, wrapping around. With
    /// two locales this is a plain toggle.
    pub fn next_after(&self, current: &Locale) -> Locale {
        let n = self.available.len();
        match self.available.iter().position(|l| l == current) {
            Some(i) => self.available[(i + 1) % n].clone(),
            None => self.default.clone(),
        }
    }

    /// Map a preferred-language tag to a supported locale, see [`detect`].
    pub fn detect(&self, preferred: &str) -> Locale {
        detect(preferred, &self.available, &self.default)
    }

    /// Pick the locale to start with.
    ///
    /// An explicit request wins, then a stored preference, then the
    /// detected language, then the default. Unsupported candidates are
    /// skipped.
    pub fn start_locale(
        &self,
        requested: Option<&str>,
        stored: Option<&str>,
        detected: Option<&str>,
    ) -> Locale {
        [requested, stored]
            .into_iter()
            .flatten()
            .find_map(|code| self.find(code))
            .cloned()
            .or_else(|| detected.map(|tag| self.detect(tag)))
            .unwrap_or_else(|| self.default.clone())
    }

    fn find(&self, code: &str) -> Option<&Locale> {
        let parsed = Locale::parse(code)?;
        self.available.iter().find(|l| **l == parsed)
    }
}

/// Reduce a language tag (`en-GB`, `en_US.UTF-8`, `DE`) to its two-letter
/// prefix and return it when available, `fallback` otherwise.
pub fn detect(preferred: &str, available: &[Locale], fallback: &Locale) -> Locale {
    let short: String = preferred.trim().chars().take(2).collect::<String>().to_lowercase();
    available
        .iter()
        .find(|l| l.code() == short)
        .cloned()
        .unwrap_or_else(|| fallback.clone())
}

/// Preferred language from the environment (`LC_ALL`, `LC_MESSAGES`,
/// `LANG`), the way a browser exposes `navigator.language`.
pub fn preferred_language_from_env() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}
