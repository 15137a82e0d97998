// SPDX-License-Identifier: PMPL-1.0-or-later

//! The running site: loaded documents, selected locale and lightbox
//!
//! [`Site`] is the one piece of mutable state. It is built once (config
//! fetched, start locale resolved, content fetched) and then driven by the
//! host: switching language reloads the content document only, the gallery
//! opens the lightbox, the share button goes through [`crate::share`].

use crate::lightbox::{Effect, Lightbox};
use crate::loader::{load_config, load_content_for_locale, DocumentSource, LoadedContent};
use crate::locale::{Locale, LocaleSet};
use crate::render::{self, memories, RenderContext};
use crate::share::{self, ShareData, ShareHost, ShareLabels, ShareOutcome};
use crate::storage::{PreferenceStore, LOCALE_PREFERENCE_KEY};
use crate::types::{Config, Content};
use crate::view::{Page, PagePatch};
use anyhow::{Context, Result};
use tracing::{info, warn};

/// How the start locale is chosen.
#[derive(Debug, Clone, Default)]
pub struct SiteOptions {
    /// Explicitly requested locale code; wins when supported.
    pub requested_locale: Option<String>,
    /// Preferred language tag of the visitor (`en-GB`, `de_DE.UTF-8`).
    /// Only consulted when set, i.e. when detection is enabled.
    pub preferred_language: Option<String>,
}

/// Result of a language switch.
#[derive(Debug, Clone)]
pub struct LocaleSwitch {
    pub locale: Locale,
    pub fell_back: bool,
    /// Full rerender for the new content.
    pub patch: PagePatch,
    /// Lightbox effects caused by the new gallery, if it was open.
    pub lightbox: Vec<Effect<String>>,
}

pub struct Site<S, P> {
    source: S,
    prefs: P,
    config: Config,
    locales: LocaleSet,
    locale: Locale,
    loaded: LoadedContent,
    lightbox: Lightbox<String>,
}

impl<S: DocumentSource, P: PreferenceStore> Site<S, P> {
    /// Fetch the config, pick the start locale and fetch its content.
    pub fn load(source: S, prefs: P, options: &SiteOptions) -> Result<Self> {
        let config = load_config(&source)
            .with_context(|| format!("Failed to load site configuration from {}", source.describe()))?;
        let locales = LocaleSet::from_config(&config);

        let stored = prefs.get(LOCALE_PREFERENCE_KEY);
        let locale = locales.start_locale(
            options.requested_locale.as_deref(),
            stored.as_deref(),
            options.preferred_language.as_deref(),
        );

        let loaded = load_content_for_locale(&source, &locale, locales.default_locale())
            .with_context(|| format!("Failed to load content for locale {}", locale))?;
        info!(
            locale = %locale,
            served = %loaded.served,
            source = %source.describe(),
            "site loaded"
        );

        let lightbox = Lightbox::new(loaded.content.gallery().to_vec());
        Ok(Self {
            source,
            prefs,
            config,
            locales,
            locale,
            loaded,
            lightbox,
        })
    }

    pub fn context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.config, &self.loaded.content, &self.locale, &self.locales)
    }

    pub fn render(&self) -> PagePatch {
        render::render_all(&self.context())
    }

    pub fn page(&self) -> Page {
        render::render_page(&self.context())
    }

    /// Move to the next configured locale (a toggle when there are two).
    pub fn switch_locale(&mut self) -> Result<LocaleSwitch> {
        let next = self.locales.next_after(&self.locale);
        self.set_locale(next.code())
    }

    /// Switch to `code`; unsupported codes resolve to the default locale.
    /// Reloads the content document and rerenders every section. The
    /// choice is persisted best-effort.
    pub fn set_locale(&mut self, code: &str) -> Result<LocaleSwitch> {
        let next = self.locales.resolve(Some(code));
        let loaded = load_content_for_locale(&self.source, &next, self.locales.default_locale())
            .with_context(|| format!("Failed to load content for locale {}", next))?;

        if let Err(err) = self.prefs.set(LOCALE_PREFERENCE_KEY, next.code()) {
            warn!(locale = %next, error = %err, "could not persist locale preference");
        }

        info!(from = %self.locale, to = %next, fell_back = loaded.fell_back, "locale switched");
        self.locale = next;
        self.loaded = loaded;
        let lightbox = self.lightbox.set_items(self.loaded.content.gallery().to_vec());

        Ok(LocaleSwitch {
            locale: self.locale.clone(),
            fell_back: self.loaded.fell_back,
            patch: self.render(),
            lightbox,
        })
    }

    /// Gallery button `index` was activated while `focused` had focus.
    pub fn open_image(&mut self, index: usize, focused: Option<String>) -> Vec<Effect<String>> {
        self.lightbox.open(index, focused)
    }

    pub fn lightbox(&self) -> &Lightbox<String> {
        &self.lightbox
    }

    pub fn lightbox_mut(&mut self) -> &mut Lightbox<String> {
        &mut self.lightbox
    }

    /// Run the share action for the page at `url`.
    pub fn share<H: ShareHost + ?Sized>(&self, url: &str, host: &mut H) -> ShareOutcome {
        let ctx = self.context();
        let document_title = self.page().title();
        let data = ShareData::from_context(&ctx, &document_title, url);
        share::share(&data, &ShareLabels::from_context(&ctx), host)
    }

    pub fn submission_mailto(&self) -> String {
        memories::submission_mailto(&self.context())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn content(&self) -> &Content {
        &self.loaded.content
    }

    /// Selected locale. After a fallback this is still the requested
    /// locale; [`served_locale`](Self::served_locale) names the document.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn served_locale(&self) -> &Locale {
        &self.loaded.served
    }

    pub fn fell_back(&self) -> bool {
        self.loaded.fell_back
    }

    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{MemorySource, CONFIG_PATH};
    use crate::share::HeadlessHost;
    use crate::storage::SessionStore;
    use crate::view::ids;

    fn source() -> MemorySource {
        MemorySource::new()
            .with(
                CONFIG_PATH,
                r#"{ "siteTitle": "Für Alex", "locales": ["de", "en"], "defaultLocale": "de",
                     "contact": { "email": "familie@example.org" } }"#,
            )
            .with(
                "data/content.de.json",
                r#"{ "hero": { "name": "Alex", "tagline": "Unvergessen" },
                     "memories": { "gallery": [{ "src": "a.jpg" }, { "src": "b.jpg" }],
                                   "mailtoSubject": "Erinnerung" } }"#,
            )
            .with(
                "data/content.en.json",
                r#"{ "hero": { "name": "Alex", "tagline": "Never forgotten" },
                     "memories": { "gallery": [{ "src": "a.jpg" }] } }"#,
            )
    }

    fn load(options: SiteOptions) -> Site<MemorySource, SessionStore> {
        Site::load(source(), SessionStore::new(), &options).expect("site loads")
    }

    #[test]
    fn starts_on_default_locale() {
        let site = load(SiteOptions::default());
        assert_eq!(site.locale().code(), "de");
        assert_eq!(site.page().text(ids::HERO_TAGLINE), "Unvergessen");
        assert_eq!(site.page().lang(), Some("de"));
    }

    #[test]
    fn switching_refetches_content_only() {
        let mut site = load(SiteOptions::default());
        let switch = site.switch_locale().expect("switch");
        assert_eq!(switch.locale.code(), "en");
        assert!(!switch.fell_back);

        let mut page = site.page();
        page.apply(&switch.patch);
        assert_eq!(page.text(ids::HERO_TAGLINE), "Never forgotten");

        site.switch_locale().expect("switch back");
        assert_eq!(site.locale().code(), "de");
        assert_eq!(site.source().fetch_count(CONFIG_PATH), 1);
        assert_eq!(site.source().fetch_count("data/content.de.json"), 2);
        assert_eq!(site.source().fetch_count("data/content.en.json"), 1);
    }

    #[test]
    fn switch_persists_choice() {
        let mut site = load(SiteOptions::default());
        site.switch_locale().expect("switch");
        assert_eq!(
            site.prefs().get(LOCALE_PREFERENCE_KEY).as_deref(),
            Some("en")
        );
    }

    #[test]
    fn stored_preference_is_honored() {
        let mut prefs = SessionStore::new();
        prefs.set(LOCALE_PREFERENCE_KEY, "en").unwrap();
        let site = Site::load(source(), prefs, &SiteOptions::default()).unwrap();
        assert_eq!(site.locale().code(), "en");
    }

    #[test]
    fn detection_used_when_enabled() {
        let site = load(SiteOptions {
            preferred_language: Some("en-GB".into()),
            ..SiteOptions::default()
        });
        assert_eq!(site.locale().code(), "en");
    }

    #[test]
    fn unsupported_request_uses_default() {
        let site = load(SiteOptions {
            requested_locale: Some("xx".into()),
            ..SiteOptions::default()
        });
        assert_eq!(site.locale().code(), "de");
        assert!(!site.fell_back());
    }

    #[test]
    fn missing_locale_content_falls_back_to_default() {
        let source = source().with(
            CONFIG_PATH,
            r#"{ "locales": ["de", "en", "fr"], "defaultLocale": "de" }"#,
        );
        let site = Site::load(
            source,
            SessionStore::new(),
            &SiteOptions {
                requested_locale: Some("fr".into()),
                ..SiteOptions::default()
            },
        )
        .unwrap();
        assert_eq!(site.locale().code(), "fr");
        assert_eq!(site.served_locale().code(), "de");
        assert!(site.fell_back());
        assert_eq!(site.page().text(ids::HERO_TAGLINE), "Unvergessen");
    }

    #[test]
    fn missing_default_content_is_fatal() {
        let source = MemorySource::new().with(CONFIG_PATH, "{}");
        let err = Site::load(source, SessionStore::new(), &SiteOptions::default())
            .err()
            .expect("load must fail");
        assert!(format!("{:#}", err).contains("default locale de"));
    }

    #[test]
    fn null_lists_in_default_content_load() {
        let source = MemorySource::new()
            .with(CONFIG_PATH, r#"{ "locales": null }"#)
            .with(
                "data/content.de.json",
                r#"{ "hero": { "name": "Alex" }, "faq": null, "events": null }"#,
            );
        let site = Site::load(source, SessionStore::new(), &SiteOptions::default())
            .expect("null lists are not fatal");
        let page = site.page();
        assert_eq!(page.text(ids::HERO_NAME), "Alex");
        assert!(page.is_hidden(ids::FAQ));
        assert!(page.is_hidden(ids::EVENTS));
    }

    #[test]
    fn switch_clears_fields_the_new_content_lacks() {
        let source = source()
            .with(
                "data/content.de.json",
                r#"{ "about": { "text": "Deutscher Lebenslauf" } }"#,
            )
            .with(
                "data/content.en.json",
                r#"{ "about": { "quotes": [{ "text": "Always kind", "author": "Kim" }] } }"#,
            );
        let mut site = Site::load(source, SessionStore::new(), &SiteOptions::default()).unwrap();
        let mut page = site.page();
        assert_eq!(page.text(ids::ABOUT_TEXT), "Deutscher Lebenslauf");

        let switch = site.switch_locale().unwrap();
        page.apply(&switch.patch);
        assert!(!page.is_hidden(ids::ABOUT));
        assert_eq!(page.text(ids::ABOUT_TEXT), "");
        assert_eq!(page, site.page());
    }

    #[test]
    fn switch_keeps_lightbox_in_bounds() {
        let mut site = load(SiteOptions::default());
        site.open_image(1, Some("gallery-btn-1".into()));
        assert_eq!(site.lightbox().index(), 1);

        let switch = site.switch_locale().unwrap();
        assert!(site.lightbox().is_open());
        assert_eq!(site.lightbox().index(), 0);
        assert_eq!(switch.lightbox.len(), 1);
    }

    #[test]
    fn share_without_capabilities_prompts() {
        let site = load(SiteOptions::default());
        let mut host = HeadlessHost::default();
        let outcome = site.share("https://example.org/alex/", &mut host);
        assert_eq!(
            outcome,
            ShareOutcome::Prompted {
                message: "URL kopieren:".into(),
                url: "https://example.org/alex/".into(),
            }
        );
    }

    #[test]
    fn mailto_uses_contact_email() {
        let site = load(SiteOptions::default());
        assert_eq!(
            site.submission_mailto(),
            "mailto:familie%40example.org?subject=Erinnerung&body="
        );
    }
}
