// SPDX-License-Identifier: PMPL-1.0-or-later

//! Declarative element tree

use serde::{Deserialize, Serialize};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "img", "link", "meta", "input", "hr"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    /// Plain text, escaped on output.
    Text { text: String },
    /// Trusted markup, emitted verbatim.
    Raw { html: String },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn raw(html: impl Into<String>) -> Self {
        Node::Raw { html: html.into() }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Text { text } => out.push_str(&escape_text(text)),
            Node::Raw { html } => out.push_str(html),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    // Builder helpers

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    // Accessors

    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(k, _)| k != name);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn is_hidden(&self) -> bool {
        self.get_attr("hidden").is_some()
    }

    /// Concatenated text of all descendants. `Raw` markup is included as-is.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(el) => el.collect_text(out),
                Node::Text { text } => out.push_str(text),
                Node::Raw { html } => out.push_str(html),
            }
        }
    }

    /// Child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    // Tree search (depth-first, document order)

    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.child_elements().find_map(|el| el.find(pred))
    }

    pub fn find_mut(&mut self, pred: &dyn Fn(&Element) -> bool) -> Option<&mut Element> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(el) => el.find_mut(pred),
            _ => None,
        })
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|el| el.id() == Some(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.find_mut(&|el| el.id() == Some(id))
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if !(name == "hidden" && value.is_empty()) {
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_nested_markup() {
        let el = Element::new("li")
            .child(Element::new("blockquote").text("a < b"))
            .child(Element::new("div").class("muted").text("Anna"));
        assert_eq!(
            el.to_html(),
            r#"<li><blockquote>a &lt; b</blockquote><div class="muted">Anna</div></li>"#
        );
    }

    #[test]
    fn void_elements_and_attribute_escaping() {
        let img = Element::new("img")
            .attr("src", "a.jpg")
            .attr("alt", "\"Sommer\" & Meer");
        assert_eq!(
            img.to_html(),
            r#"<img src="a.jpg" alt="&quot;Sommer&quot; &amp; Meer">"#
        );
    }

    #[test]
    fn hidden_is_a_bare_attribute() {
        let el = Element::new("section").with_id("about").attr("hidden", "");
        assert_eq!(el.to_html(), r#"<section id="about" hidden></section>"#);
        assert!(el.is_hidden());
    }

    #[test]
    fn raw_nodes_are_verbatim() {
        let el = Element::new("p").child(Node::raw("a<br>b"));
        assert_eq!(el.to_html(), "<p>a<br>b</p>");
    }

    #[test]
    fn set_attr_replaces_in_place() {
        let mut el = Element::new("a").attr("href", "#").attr("class", "x");
        el.set_attr("href", "mailto:x");
        assert_eq!(el.attrs[0], ("href".to_string(), "mailto:x".to_string()));
        el.remove_attr("class");
        assert_eq!(el.attrs.len(), 1);
    }

    #[test]
    fn finds_by_id_depth_first() {
        let mut root = Element::new("body").child(
            Element::new("main").child(Element::new("p").with_id("target").text("x")),
        );
        assert!(root.find_by_id("target").is_some());
        root.find_by_id_mut("target")
            .expect("target exists")
            .set_attr("hidden", "");
        assert!(root.find_by_id("target").map(Element::is_hidden).unwrap_or(false));
        assert!(root.find_by_id("missing").is_none());
    }
}
