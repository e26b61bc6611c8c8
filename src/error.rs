// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Error types

use crate::tree::NodeId;
use thiserror::Error;

/// A call made outside its documented preconditions
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// The screen behind a [`Handle`](crate::Handle) has been torn down
    #[error("screen has been disposed")]
    Disposed,
    /// No element with this id exists in the current tree
    #[error("no element {0} in the render tree")]
    UnknownNode(NodeId),
    /// An event was dispatched while another was still being processed
    #[error("event dispatched while another event is in progress")]
    Reentrant,
}

/// Failure of a single-result tree query
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unable to find an element {query}")]
    NotFound { query: String },
    #[error("found {count} elements {query}, expected one")]
    Multiple { query: String, count: usize },
}
