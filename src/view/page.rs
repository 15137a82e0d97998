// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory page: applies [`PagePatch`]es to the skeleton and serializes
//! the result.

use super::layout::skeleton;
use super::node::{Element, Node};
use super::patch::{PagePatch, Update};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    root: Element,
}

impl Page {
    /// A fresh skeleton page.
    pub fn new() -> Self {
        Self { root: skeleton() }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn apply(&mut self, patch: &PagePatch) {
        for update in &patch.updates {
            self.apply_update(update);
        }
    }

    /// Apply one update. Updates for elements the page does not have are
    /// ignored.
    pub fn apply_update(&mut self, update: &Update) {
        match update {
            Update::SetText { id, text } => {
                if let Some(el) = self.target(id) {
                    el.children = vec![Node::text(text.clone())];
                }
            }
            Update::SetAttr { id, name, value } => {
                if let Some(el) = self.target(id) {
                    el.set_attr(name, value.clone());
                }
            }
            Update::RemoveAttr { id, name } => {
                if let Some(el) = self.target(id) {
                    el.remove_attr(name);
                }
            }
            Update::SetHidden { id, hidden } => {
                if let Some(el) = self.target(id) {
                    if *hidden {
                        el.set_attr("hidden", "");
                    } else {
                        el.remove_attr("hidden");
                    }
                }
            }
            Update::ReplaceChildren { id, children } => {
                if let Some(el) = self.target(id) {
                    el.children = children.clone();
                }
            }
            Update::EnsureChild { id, class, child } => {
                if let Some(el) = self.target(id) {
                    if !el.child_elements().any(|c| c.has_class(class)) {
                        el.children.push(Node::Element(child.clone()));
                    }
                }
            }
            Update::SetDocumentTitle { title } => {
                if let Some(el) = self.root.find_mut(&|el| el.tag == "title") {
                    el.children = vec![Node::text(title.clone())];
                }
            }
            Update::SetMeta { key, content } => {
                let matches_key = |el: &Element| {
                    el.tag == "meta"
                        && (el.get_attr("name") == Some(key.as_str())
                            || el.get_attr("property") == Some(key.as_str()))
                };
                if let Some(el) = self.root.find_mut(&matches_key) {
                    el.set_attr("content", content.clone());
                }
            }
            Update::SetCssVar { name, value } => {
                let style = set_style_property(self.root.get_attr("style").unwrap_or(""), name, value);
                self.root.set_attr("style", style);
            }
            Update::SetRootLang { lang } => {
                self.root.set_attr("lang", lang.clone());
            }
        }
    }

    fn target(&mut self, id: &str) -> Option<&mut Element> {
        let found = self.root.find_by_id_mut(id);
        if found.is_none() {
            trace!(id, "update for absent element ignored");
        }
        found
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    /// Text content of element `id`; empty for absent elements.
    pub fn text(&self, id: &str) -> String {
        self.element(id).map(Element::text_content).unwrap_or_default()
    }

    pub fn attr(&self, id: &str, name: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.get_attr(name))
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.element(id).map(Element::is_hidden).unwrap_or(false)
    }

    pub fn title(&self) -> String {
        self.root
            .find(&|el| el.tag == "title")
            .map(Element::text_content)
            .unwrap_or_default()
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.root
            .find(&|el| {
                el.tag == "meta"
                    && (el.get_attr("name") == Some(key) || el.get_attr("property") == Some(key))
            })
            .and_then(|el| el.get_attr("content"))
    }

    pub fn lang(&self) -> Option<&str> {
        self.root.get_attr("lang")
    }

    /// Value of CSS custom property `name` on the root element.
    pub fn css_var(&self, name: &str) -> Option<String> {
        parse_style(self.root.get_attr("style")?)
            .into_iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Complete HTML document.
    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}\n", self.root.to_html())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim();
            (!name.is_empty()).then(|| (name.to_string(), value.trim().to_string()))
        })
        .collect()
}

fn set_style_property(style: &str, name: &str, value: &str) -> String {
    let mut decls = parse_style(style);
    match decls.iter_mut().find(|(k, _)| k == name) {
        Some(slot) => slot.1 = value.to_string(),
        None => decls.push((name.to_string(), value.to_string())),
    }
    decls
        .iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join("; ")
}
