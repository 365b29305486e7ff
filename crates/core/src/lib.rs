//! Core types and traits for tasklist
//!
//! This crate contains domain types shared across all other crates.

mod constants;
mod env_config;
mod page;
mod todo;

pub use constants::*;
pub use env_config::{env_non_empty, env_parse_with_default};
pub use page::*;
pub use todo::*;
