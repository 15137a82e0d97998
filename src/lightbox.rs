// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lightbox: full-size image overlay with keyboard navigation
//!
//! The lightbox is a two-state machine (closed, open) over the gallery.
//! It performs no I/O itself: every transition returns the [`Effect`]s the
//! host has to carry out (show an image, move focus, lock page scrolling,
//! listen for keys). `F` is whatever the host uses to name a focusable
//! element; the lightbox only stores and hands it back.
//!
//! Navigation wraps around: `next` from the last image shows the first,
//! `prev` from the first shows the last.

use crate::i18n::UiStrings;
use crate::types::GalleryItem;
use crate::view::Element;
use tracing::debug;

pub const OVERLAY_CLASS: &str = "lightbox";
pub const DIALOG_CLASS: &str = "lightbox__dialog";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open { index: usize },
}

/// Keys the lightbox reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Where a click on the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the dialog.
    Backdrop,
    /// The dialog or anything inside it.
    Dialog,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect<F> {
    /// Build the overlay markup ([`Lightbox::view`]); only on first open.
    CreateOverlay,
    /// Display gallery item `index`.
    Show {
        index: usize,
        src: String,
        alt: String,
        caption: String,
    },
    SetAriaHidden(bool),
    FocusDialog,
    /// Give focus back to the element focused before opening.
    RestoreFocus(F),
    LockScroll,
    UnlockScroll,
    ListenKeys,
    UnlistenKeys,
}

#[derive(Debug, Clone)]
pub struct Lightbox<F> {
    items: Vec<GalleryItem>,
    state: LightboxState,
    /// Index shown last; kept while closed so the overlay can be reopened.
    index: usize,
    last_focus: Option<F>,
    scroll_locked: bool,
    created: bool,
}

impl<F: Clone> Lightbox<F> {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items,
            state: LightboxState::Closed,
            index: 0,
            last_focus: None,
            scroll_locked: false,
            created: false,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn last_focus(&self) -> Option<&F> {
        self.last_focus.as_ref()
    }

    pub fn current(&self) -> Option<&GalleryItem> {
        self.is_open().then(|| self.items.get(self.index)).flatten()
    }

    /// Swap in the gallery of a freshly rendered content document. An open
    /// lightbox stays open, clamped to the new gallery, or closes when the
    /// new gallery is empty.
    pub fn set_items(&mut self, items: Vec<GalleryItem>) -> Vec<Effect<F>> {
        self.items = items;
        if !self.is_open() {
            self.index = 0;
            return Vec::new();
        }
        if self.items.is_empty() {
            return self.close();
        }
        self.index = self.index.min(self.items.len() - 1);
        self.state = LightboxState::Open { index: self.index };
        vec![self.show_effect()]
    }

    /// Open at `index` (wrapped into range), remembering `focused` for
    /// [`close`](Self::close). No-op on an empty gallery. Opening while
    /// already open just moves to `index` and keeps the original focus.
    pub fn open(&mut self, index: usize, focused: Option<F>) -> Vec<Effect<F>> {
        let n = self.items.len();
        if n == 0 {
            return Vec::new();
        }
        self.index = index % n;
        debug!(index = self.index, src = %self.items[self.index].src, "lightbox open");

        if self.is_open() {
            self.state = LightboxState::Open { index: self.index };
            return vec![self.show_effect()];
        }

        let mut effects = Vec::new();
        if !self.created {
            self.created = true;
            effects.push(Effect::CreateOverlay);
        }
        self.last_focus = focused;
        self.state = LightboxState::Open { index: self.index };
        self.scroll_locked = true;
        effects.extend([
            self.show_effect(),
            Effect::SetAriaHidden(false),
            Effect::ListenKeys,
            Effect::LockScroll,
            Effect::FocusDialog,
        ]);
        effects
    }

    /// Close, restoring focus and page scrolling. No-op when closed.
    pub fn close(&mut self) -> Vec<Effect<F>> {
        if !self.is_open() {
            return Vec::new();
        }
        debug!(index = self.index, "lightbox close");
        self.state = LightboxState::Closed;
        self.scroll_locked = false;

        let mut effects = vec![Effect::SetAriaHidden(true), Effect::UnlistenKeys];
        if let Some(focus) = self.last_focus.take() {
            effects.push(Effect::RestoreFocus(focus));
        }
        effects.push(Effect::UnlockScroll);
        effects
    }

    /// Show the next image, wrapping to the first. Only while open.
    pub fn next(&mut self) -> Vec<Effect<F>> {
        self.step(1)
    }

    /// Show the previous image, wrapping to the last. Only while open.
    pub fn prev(&mut self) -> Vec<Effect<F>> {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> Vec<Effect<F>> {
        let n = self.items.len();
        if !self.is_open() || n == 0 {
            return Vec::new();
        }
        self.index = (self.index as isize + delta).rem_euclid(n as isize) as usize;
        self.state = LightboxState::Open { index: self.index };
        vec![self.show_effect()]
    }

    /// Keyboard handling. Returns `None` when the key is not handled (the
    /// lightbox is closed, or the key means nothing to it), in which case
    /// the host must not suppress the key's default action.
    pub fn handle_key(&mut self, key: Key) -> Option<Vec<Effect<F>>> {
        if !self.is_open() {
            return None;
        }
        match key {
            Key::Escape => Some(self.close()),
            Key::ArrowLeft => Some(self.prev()),
            Key::ArrowRight => Some(self.next()),
            Key::Other => None,
        }
    }

    /// Clicks on the backdrop close the lightbox; clicks inside the dialog
    /// do nothing.
    pub fn click(&mut self, target: ClickTarget) -> Vec<Effect<F>> {
        match target {
            ClickTarget::Backdrop => self.close(),
            ClickTarget::Dialog => Vec::new(),
        }
    }

    fn show_effect(&self) -> Effect<F> {
        let item = &self.items[self.index];
        Effect::Show {
            index: self.index,
            src: item.src.clone(),
            alt: item.alt_text().to_string(),
            caption: item.caption.clone().unwrap_or_default(),
        }
    }

    /// Overlay markup reflecting the current state.
    pub fn view(&self, ui: &UiStrings) -> Element {
        let shown = self.items.get(self.index);
        let button = |class: &str, label_key: &str, fallback: &str, glyph: &str| {
            Element::new("button")
                .attr("type", "button")
                .class(class)
                .attr("aria-label", ui.get(label_key).unwrap_or(fallback).to_string())
                .text(glyph)
        };

        let mut img = Element::new("img").class("lightbox__img").attr("alt", "");
        let mut caption = Element::new("div").class("lightbox__caption");
        if let Some(item) = shown {
            img.set_attr("src", item.src.clone());
            img.set_attr("alt", item.alt_text());
            caption = caption.text(item.caption.clone().unwrap_or_default());
        }

        Element::new("div")
            .class(OVERLAY_CLASS)
            .attr("role", "dialog")
            .attr("aria-modal", "true")
            .attr("aria-hidden", if self.is_open() { "false" } else { "true" })
            .child(
                Element::new("div")
                    .class(DIALOG_CLASS)
                    .attr("tabindex", "-1")
                    .child(button("lightbox__close", "lightbox.close", "Close", "✕"))
                    .child(button(
                        "lightbox__nav lightbox__nav--prev",
                        "lightbox.prev",
                        "Previous image",
                        "‹",
                    ))
                    .child(button(
                        "lightbox__nav lightbox__nav--next",
                        "lightbox.next",
                        "Next image",
                        "›",
                    ))
                    .child(img)
                    .child(caption),
            )
    }
}
