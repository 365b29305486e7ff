//! Service layer for tasklist
//!
//! Sits between the HTTP handlers and the item store and owns the
//! pagination and CRUD consistency rules.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod todo_service;

pub use error::ServiceError;
pub use todo_service::TodoService;
