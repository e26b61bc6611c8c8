// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! HTML output

use crate::tree::{Element, Node, RenderTree, Role};
use std::fmt;

struct Escaped<'a>(&'a str);

impl<'a> fmt::Display for Escaped<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut rest = self.0;
        while let Some(i) = rest.find(|c: char| matches!(c, '&' | '<' | '>' | '"')) {
            f.write_str(&rest[..i])?;
            f.write_str(match rest.as_bytes()[i] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                _ => "&quot;",
            })?;
            rest = &rest[i + 1..];
        }
        f.write_str(rest)
    }
}

fn write_node(f: &mut fmt::Formatter, node: &Node) -> fmt::Result {
    match node {
        Node::Text(text) => write!(f, "{}", Escaped(text)),
        Node::Element(el) => write_element(f, el),
    }
}

fn write_element(f: &mut fmt::Formatter, el: &Element) -> fmt::Result {
    let tag = el.role.tag();
    write!(f, "<{}", tag)?;
    for (name, value) in &el.attributes {
        write!(f, " {}=\"{}\"", name, Escaped(value))?;
    }
    f.write_str(">")?;
    if el.role == Role::Image {
        return Ok(());
    }
    for child in &el.children {
        write_node(f, child)?;
    }
    write!(f, "</{}>", tag)
}

/// Formats as HTML markup
impl fmt::Display for RenderTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for node in self.roots() {
            write_node(f, node)?;
        }
        Ok(())
    }
}
