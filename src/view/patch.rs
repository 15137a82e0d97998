// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page updates produced by the section renderers
//!
//! A [`PagePatch`] is the whole output of a render pass: an ordered list of
//! updates addressed by element ID. Applying the same patch twice leaves
//! the page as after the first application.

use super::node::{Element, Node};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Update {
    /// Replace the element's children with a single text node.
    SetText { id: String, text: String },
    SetAttr {
        id: String,
        name: String,
        value: String,
    },
    RemoveAttr { id: String, name: String },
    SetHidden { id: String, hidden: bool },
    /// Clear the element and rebuild its children.
    ReplaceChildren { id: String, children: Vec<Node> },
    /// Append `child` to the element unless a child with `class` exists.
    EnsureChild {
        id: String,
        class: String,
        child: Element,
    },
    SetDocumentTitle { title: String },
    /// `content` of the `<meta>` whose `name` or `property` is `key`.
    SetMeta { key: String, content: String },
    /// CSS custom property on the root element.
    SetCssVar { name: String, value: String },
    SetRootLang { lang: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagePatch {
    pub updates: Vec<Update>,
}

impl PagePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn push(&mut self, update: Update) {
        self.updates.push(update);
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) {
        self.push(Update::SetText {
            id: id.to_string(),
            text: text.into(),
        });
    }

    pub fn set_attr(&mut self, id: &str, name: &str, value: impl Into<String>) {
        self.push(Update::SetAttr {
            id: id.to_string(),
            name: name.to_string(),
            value: value.into(),
        });
    }

    /// `set_attr` for `Some`, removal for `None`.
    pub fn set_or_remove_attr(&mut self, id: &str, name: &str, value: Option<&str>) {
        match value {
            Some(value) => self.set_attr(id, name, value),
            None => self.push(Update::RemoveAttr {
                id: id.to_string(),
                name: name.to_string(),
            }),
        }
    }

    pub fn set_hidden(&mut self, id: &str, hidden: bool) {
        self.push(Update::SetHidden {
            id: id.to_string(),
            hidden,
        });
    }

    pub fn replace_children<I>(&mut self, id: &str, children: I)
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.push(Update::ReplaceChildren {
            id: id.to_string(),
            children: children.into_iter().map(Into::into).collect(),
        });
    }

    pub fn ensure_child(&mut self, id: &str, class: &str, child: Element) {
        self.push(Update::EnsureChild {
            id: id.to_string(),
            class: class.to_string(),
            child,
        });
    }

    pub fn set_document_title(&mut self, title: impl Into<String>) {
        self.push(Update::SetDocumentTitle {
            title: title.into(),
        });
    }

    pub fn set_meta(&mut self, key: &str, content: impl Into<String>) {
        self.push(Update::SetMeta {
            key: key.to_string(),
            content: content.into(),
        });
    }

    pub fn set_css_var(&mut self, name: &str, value: impl Into<String>) {
        self.push(Update::SetCssVar {
            name: name.to_string(),
            value: value.into(),
        });
    }

    pub fn set_root_lang(&mut self, lang: impl Into<String>) {
        self.push(Update::SetRootLang { lang: lang.into() });
    }
}
