// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Render tree
//!
//! A [`RenderTree`] is an immutable snapshot of every visible node for one
//! counter value. Elements are addressed by [`NodeId`], their position in a
//! pre-order walk, so ids stay valid across re-renders.

use std::collections::BTreeMap;
use std::fmt;

/// Attribute name → value
pub type Attributes = BTreeMap<String, String>;

/// Semantic role of an element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Layout-only container
    Group,
    Link,
    Image,
    /// Heading of the given level (1–6)
    ///
    /// Construct with [`Role::heading`]; an out-of-range level is written as
    /// `h6` by [`Role::tag`].
    Heading(u8),
    Button,
    Paragraph,
    /// Inline code span
    Code,
}

impl Role {
    /// A heading role with `level` clamped to 1–6
    pub fn heading(level: u8) -> Self {
        Role::Heading(level.max(1).min(6))
    }

    /// HTML tag name
    pub fn tag(self) -> &'static str {
        match self {
            Role::Group => "div",
            Role::Link => "a",
            Role::Image => "img",
            Role::Heading(1) => "h1",
            Role::Heading(2) => "h2",
            Role::Heading(3) => "h3",
            Role::Heading(4) => "h4",
            Role::Heading(5) => "h5",
            Role::Heading(_) => "h6",
            Role::Button => "button",
            Role::Paragraph => "p",
            Role::Code => "code",
        }
    }
}

/// State transition requested by activating an element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Increment,
}

/// Pre-order index of an element within a [`RenderTree`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn from_index(index: usize) -> Self {
        NodeId(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node: either an element or a run of text
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with role, attributes and children
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub role: Role,
    pub attributes: Attributes,
    pub children: Vec<Node>,
    pub action: Option<Action>,
}

impl Element {
    /// Get an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Text of direct text children only
    pub fn own_text(&self) -> String {
        let mut s = String::new();
        for child in &self.children {
            if let Node::Text(text) = child {
                s.push_str(text);
            }
        }
        s
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut s = String::new();
        self.push_text(&mut s, false);
        s
    }

    /// Accessible name
    ///
    /// Images are named by their `alt` text; other elements by their text
    /// content, with descendant images contributing their `alt`.
    pub fn accessible_name(&self) -> String {
        let mut s = String::new();
        self.push_text(&mut s, true);
        s.trim().to_string()
    }

    fn push_text(&self, s: &mut String, alt: bool) {
        if alt && self.role == Role::Image {
            if let Some(text) = self.attr("alt") {
                s.push_str(text);
            }
            return;
        }
        for child in &self.children {
            match child {
                Node::Text(text) => s.push_str(text),
                Node::Element(el) => el.push_text(s, alt),
            }
        }
    }

    /// Whether this element can take keyboard focus
    pub fn is_focusable(&self) -> bool {
        match self.role {
            Role::Link => self.attributes.contains_key("href"),
            Role::Button => self.is_enabled(),
            _ => false,
        }
    }

    /// False if the element carries a `disabled` attribute
    pub fn is_enabled(&self) -> bool {
        !self.attributes.contains_key("disabled")
    }
}

/// Immutable snapshot of the screen for one counter value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderTree {
    roots: Vec<Node>,
    count: u64,
}

impl RenderTree {
    pub(crate) fn new(roots: Vec<Node>, count: u64) -> Self {
        RenderTree { roots, count }
    }

    /// Top-level nodes in document order
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// The counter value this tree was rendered from
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Iterate over all elements in document (pre-) order
    pub fn elements(&self) -> Elements<'_> {
        Elements {
            stack: self.roots.iter().rev().collect(),
            next: 0,
        }
    }

    /// Get an element by id
    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.elements().nth(id.0).map(|(_, el)| el)
    }

    /// Ids of `id` and all its ancestors, innermost first
    ///
    /// Returns `None` if `id` does not exist.
    pub fn ancestry(&self, id: NodeId) -> Option<Vec<NodeId>> {
        fn walk(nodes: &[Node], target: usize, next: &mut usize, path: &mut Vec<NodeId>) -> bool {
            for node in nodes {
                if let Node::Element(el) = node {
                    let index = *next;
                    *next += 1;
                    path.push(NodeId(index));
                    if index == target || walk(&el.children, target, next, path) {
                        return true;
                    }
                    path.pop();
                }
            }
            false
        }

        let mut path = Vec::new();
        let mut next = 0;
        if walk(&self.roots, id.0, &mut next, &mut path) {
            path.reverse();
            Some(path)
        } else {
            None
        }
    }
}

/// Pre-order element iterator, see [`RenderTree::elements`]
pub struct Elements<'a> {
    stack: Vec<&'a Node>,
    next: usize,
}

impl<'a> Iterator for Elements<'a> {
    type Item = (NodeId, &'a Element);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if let Node::Element(el) = node {
                self.stack.extend(el.children.iter().rev());
                let id = NodeId(self.next);
                self.next += 1;
                return Some((id, el));
            }
        }
        None
    }
}
