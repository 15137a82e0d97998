// SPDX-License-Identifier: PMPL-1.0-or-later

//! Section renderers
//!
//! Each renderer reads one part of the config/content documents and pushes
//! updates onto a [`PagePatch`]. Renderers are pure and idempotent: lists
//! are rebuilt with `ReplaceChildren`, sections without data are hidden
//! rather than left as empty scaffolding.

pub mod about;
pub mod chrome;
pub mod contact;
pub mod donate;
pub mod events;
pub mod faq;
pub mod hero;
pub mod memories;
pub mod theme;

use crate::i18n::UiStrings;
use crate::locale::{Locale, LocaleSet};
use crate::types::{Config, Content};
use crate::view::{Page, PagePatch};

/// Everything a render pass reads. Built by the caller and passed down
/// explicitly; renderers hold no state of their own.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub content: &'a Content,
    pub locale: &'a Locale,
    pub locales: &'a LocaleSet,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        config: &'a Config,
        content: &'a Content,
        locale: &'a Locale,
        locales: &'a LocaleSet,
    ) -> Self {
        Self {
            config,
            content,
            locale,
            locales,
        }
    }

    /// UI strings for the active locale.
    pub fn ui(&self) -> UiStrings<'a> {
        UiStrings::new(
            &self.content.ui,
            self.locale.code(),
            self.locales.default_locale().code(),
        )
    }

    /// Site title: content `ui.siteTitle`, then config `siteTitle`.
    pub fn site_title(&self) -> Option<&'a str> {
        self.ui()
            .from_content("siteTitle")
            .or_else(|| self.config.site_title.as_deref().filter(|s| !s.is_empty()))
    }
}

/// Render every section, in page order.
pub fn render_all(ctx: &RenderContext) -> PagePatch {
    let mut patch = PagePatch::new();
    chrome::render(ctx, &mut patch);
    theme::render(ctx, &mut patch);
    hero::render(ctx, &mut patch);
    about::render(ctx, &mut patch);
    memories::render(ctx, &mut patch);
    donate::render(ctx, &mut patch);
    events::render(ctx, &mut patch);
    faq::render(ctx, &mut patch);
    contact::render(ctx, &mut patch);
    patch
}

/// Render onto a fresh skeleton page.
pub fn render_page(ctx: &RenderContext) -> Page {
    let mut page = Page::new();
    page.apply(&render_all(ctx));
    page
}
