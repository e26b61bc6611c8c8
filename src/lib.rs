// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Counter screen
//!
//! A single page holding two logo links, a heading, a counter button, static
//! text and a document link. The counter is the only state: a
//! [`CounterState`] observed by a [`RenderBinding`], which recomputes the
//! [`RenderTree`] on every transition.
//!
//! ```
//! use counter_screen::{Role, Screen};
//!
//! let screen = Screen::create();
//! let (button, _) = screen.tree().by_role(Role::Button, None).unwrap();
//! screen.click(button).unwrap();
//! let tree = screen.tree();
//! let (_, el) = tree.by_role(Role::Button, None).unwrap();
//! assert_eq!(el.accessible_name(), "count is 1");
//! screen.dispose();
//! ```

mod content;
mod error;
mod event;
mod html;
pub mod page;
mod query;
mod render;
mod screen;
mod state;
mod tree;

pub use content::{Content, Descriptor};
pub use error::{ContractViolation, QueryError};
pub use event::{Event, Key, Response};
pub use query::TextMatch;
pub use render::{render, RenderBinding};
pub use screen::{Handle, Screen};
pub use state::{CounterState, ObserverId};
pub use tree::{Action, Attributes, Element, Elements, Node, NodeId, RenderTree, Role};
