// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Input events

/// A keyboard key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Space,
    Tab,
    Escape,
    Character(char),
}

/// An event directed at one element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Pointer click (an activation)
    Click,
    Focus,
    Blur,
    KeyDown(Key),
}

/// Result of dispatching an [`Event`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    /// The event was consumed
    Used,
    /// Nothing handled the event
    Unused,
}

impl From<bool> for Response {
    fn from(used: bool) -> Self {
        if used {
            Response::Used
        } else {
            Response::Unused
        }
    }
}
