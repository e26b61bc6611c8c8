// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Static content descriptors
//!
//! Descriptors are built once when a screen is defined and never mutated.
//! [`Content::Count`] marks where the counter value is interpolated.

use crate::tree::{Action, Attributes, Role};
use std::borrow::Cow;

/// One piece of screen content
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Element(Descriptor),
    Text(Cow<'static, str>),
    /// Decimal rendering of the current counter value
    Count,
}

impl From<Descriptor> for Content {
    fn from(d: Descriptor) -> Self {
        Content::Element(d)
    }
}

/// Immutable description of an element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub role: Role,
    pub attributes: Attributes,
    pub children: Vec<Content>,
    pub action: Option<Action>,
}

impl Descriptor {
    /// Construct with no attributes or children
    pub fn new(role: Role) -> Self {
        Descriptor {
            role,
            attributes: Attributes::new(),
            children: vec![],
            action: None,
        }
    }

    /// Set an attribute
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Append a child element
    pub fn with_child(mut self, child: Descriptor) -> Self {
        self.children.push(Content::Element(child));
        self
    }

    /// Append a text run
    pub fn with_text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.children.push(Content::Text(text.into()));
        self
    }

    /// Append the counter value
    pub fn with_count(mut self) -> Self {
        self.children.push(Content::Count);
        self
    }

    /// Attach an activation action
    pub fn on_activate(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}
