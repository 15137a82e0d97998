// SPDX-License-Identifier: PMPL-1.0-or-later

//! memorial-site: a localized single-page memorial site.
//!
//! The site is driven by two JSON documents: a config document (title,
//! theme, donation channels, contact data, locales) and one content
//! document per locale. Rendering is a pure mapping from those documents
//! to a [`view::PagePatch`], a list of updates keyed by element ID, which
//! is applied to the page skeleton and serialized to HTML.
//!
//! PIECES:
//! 1. **Loader**: fetches the documents from disk or over HTTP, falling
//!    back to the default locale's content once.
//! 2. **Render**: one renderer per page section, all reading an explicit
//!    [`render::RenderContext`].
//! 3. **Interaction**: language switch ([`site::Site`]), image lightbox
//!    and share action as host-independent state machines.
//! 4. **Build**: writes one static page per locale plus a manifest.

pub mod build;
pub mod i18n;
pub mod lightbox;
pub mod loader;
pub mod locale;
pub mod mailto;
pub mod render;
pub mod share;
pub mod site;
pub mod storage;
pub mod types;
pub mod view;
