//! Client side of tasklist.
//!
//! [`TodoController`] drives the list/add/toggle/delete flow against the REST
//! API. Pagination state lives in an explicit [`ClientState`] owned by the
//! caller, and all output goes through a [`View`], so the same controller
//! backs the terminal front end and the tests.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod api;
mod controller;
mod error;
mod state;
mod view;

pub use api::ApiClient;
pub use controller::{DELETE_CONFIRMATION, TodoController};
pub use error::ClientError;
pub use state::{ClientState, PaginationControls};
pub use view::View;
