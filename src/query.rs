// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Queries over a render tree
//!
//! Lookups by role, text and image alt text, in the manner a user (or an
//! assistive technology) would find elements. `all_by_*` methods return every
//! match in document order; `by_*` methods require exactly one match.

use crate::error::QueryError;
use crate::tree::{Element, NodeId, RenderTree, Role};
use std::fmt;

/// How to compare text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextMatch<'a> {
    /// Whole string, after trimming, case-sensitive
    Exact(&'a str),
    /// Case-insensitive substring
    Contains(&'a str),
}

impl<'a> TextMatch<'a> {
    pub fn matches(self, text: &str) -> bool {
        match self {
            TextMatch::Exact(s) => text.trim() == s,
            TextMatch::Contains(s) => text.to_lowercase().contains(&s.to_lowercase()),
        }
    }
}

impl<'a> fmt::Display for TextMatch<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TextMatch::Exact(s) => write!(f, "{:?}", s),
            TextMatch::Contains(s) => write!(f, "/{}/i", s),
        }
    }
}

fn single<'t>(
    mut found: Vec<(NodeId, &'t Element)>,
    query: impl FnOnce() -> String,
) -> Result<(NodeId, &'t Element), QueryError> {
    match found.len() {
        0 => Err(QueryError::NotFound { query: query() }),
        1 => Ok(found.remove(0)),
        count => Err(QueryError::Multiple {
            query: query(),
            count,
        }),
    }
}

impl RenderTree {
    /// Elements of `role`, optionally filtered by accessible name
    pub fn all_by_role(&self, role: Role, name: Option<TextMatch>) -> Vec<(NodeId, &Element)> {
        self.elements()
            .filter(|(_, el)| el.role == role)
            .filter(|(_, el)| name.map_or(true, |m| m.matches(&el.accessible_name())))
            .collect()
    }

    /// The single element of `role` with matching accessible name
    pub fn by_role(
        &self,
        role: Role,
        name: Option<TextMatch>,
    ) -> Result<(NodeId, &Element), QueryError> {
        single(self.all_by_role(role, name), || match name {
            Some(m) => format!("with role {:?} and name {}", role, m),
            None => format!("with role {:?}", role),
        })
    }

    /// Elements whose own text matches
    pub fn all_by_text(&self, text: TextMatch) -> Vec<(NodeId, &Element)> {
        self.elements()
            .filter(|(_, el)| {
                let own = el.own_text();
                !own.is_empty() && text.matches(&own)
            })
            .collect()
    }

    /// The single element whose own text matches
    pub fn by_text(&self, text: TextMatch) -> Result<(NodeId, &Element), QueryError> {
        single(self.all_by_text(text), || format!("with text {}", text))
    }

    /// Images whose `alt` matches
    pub fn all_by_alt_text(&self, alt: TextMatch) -> Vec<(NodeId, &Element)> {
        self.elements()
            .filter(|(_, el)| el.attr("alt").map_or(false, |a| alt.matches(a)))
            .collect()
    }

    /// The single image whose `alt` matches
    pub fn by_alt_text(&self, alt: TextMatch) -> Result<(NodeId, &Element), QueryError> {
        single(self.all_by_alt_text(alt), || format!("with alt text {}", alt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page;
    use crate::render::render;

    #[test]
    fn text_match() {
        assert!(TextMatch::Contains("vite logo").matches("Vite logo"));
        assert!(!TextMatch::Exact("vite logo").matches("Vite logo"));
        assert!(TextMatch::Exact("Vite logo").matches(" Vite logo "));
    }

    #[test]
    fn link_named_by_image() {
        let tree = render(&page::app(), 0);
        let (_, link) = tree
            .by_role(Role::Link, Some(TextMatch::Contains("react logo")))
            .unwrap();
        assert_eq!(link.attr("href"), Some(page::REACT_HREF));
    }

    #[test]
    fn by_text_uses_own_text() {
        let tree = render(&page::app(), 0);
        let (_, p) = tree.by_text(TextMatch::Contains("changed from local")).unwrap();
        assert_eq!(p.role, Role::Paragraph);
        // nested code text is not part of the paragraph's own text
        let (_, code) = tree.by_text(TextMatch::Contains("processing through")).unwrap();
        assert_eq!(code.role, Role::Code);
    }

    #[test]
    fn errors() {
        let tree = render(&page::app(), 0);
        assert_eq!(
            tree.by_text(TextMatch::Exact("This text should not exist")),
            Err(QueryError::NotFound {
                query: "with text \"This text should not exist\"".to_string()
            })
        );
        match tree.by_role(Role::Heading(1), None) {
            Err(QueryError::Multiple { count, .. }) => assert_eq!(count, 2),
            r => panic!("unexpected: {:?}", r),
        }
    }
}
