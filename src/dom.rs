//! Arena-backed element tree standing in for the host page.
//!
//! Components never own elements. They hold [`NodeId`]s handed out by the
//! [`Document`] and mutate classes and attributes through it.

use std::collections::BTreeMap;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    focused: Option<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
            focused: None,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// `None` for a handle this document never handed out.
    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    // Nodes are never removed, so every id minted here indexes.
    fn el(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0]
    }

    /// Creates a detached element. It joins the tree on [`Document::append_child`].
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old_parent) = self.el(child).parent {
            self.element_mut(old_parent).children.retain(|c| *c != child);
        }
        self.element_mut(child).parent = Some(parent);
        self.element_mut(parent).children.push(child);
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        self.element_mut(node).id = Some(id.to_string());
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.element_mut(node).text = Some(text.to_string());
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.el(node).classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.element_mut(node).classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.element_mut(node).classes.retain(|c| c != class);
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.el(node).attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.element_mut(node)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// All elements below `scope` in document (pre-)order, `scope` excluded.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.el(scope).children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.el(node).children.iter().rev().copied());
        }
        out
    }

    /// First attached element carrying `id`, in document order.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|node| self.el(*node).id() == Some(id))
    }

    pub fn elements_by_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|node| self.has_class(*node, class))
            .collect()
    }

    /// `node` followed by its parent chain up to the root.
    pub fn ancestors_inclusive(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(node), |n| self.el(*n).parent)
    }

    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors_inclusive(node).any(|n| n == ancestor)
    }

    pub fn is_focusable(&self, node: NodeId) -> bool {
        matches!(self.el(node).tag(), "a" | "button")
            || self.attribute(node, "tabindex").is_some()
    }

    /// Moves focus to `node` if it can hold focus. Returns whether focus moved.
    pub fn focus(&mut self, node: NodeId) -> bool {
        if self.is_focusable(node) {
            self.focused = Some(node);
            true
        } else {
            false
        }
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(self.root(), 0, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, depth: usize, out: &mut String) {
        let el = self.el(node);
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", el.tag);
        if let Some(id) = &el.id {
            let _ = write!(out, " id=\"{id}\"");
        }
        if !el.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", el.classes.join(" "));
        }
        for (name, value) in &el.attributes {
            let _ = write!(out, " {name}=\"{value}\"");
        }
        out.push('>');

        if el.children.is_empty() {
            if let Some(text) = &el.text {
                out.push_str(text);
            }
            let _ = writeln!(out, "</{}>", el.tag);
            return;
        }

        out.push('\n');
        if let Some(text) = &el.text {
            let _ = writeln!(out, "{indent}  {text}");
        }
        for child in &el.children {
            self.write_html(*child, depth + 1, out);
        }
        let _ = writeln!(out, "{indent}</{}>", el.tag);
    }
}
