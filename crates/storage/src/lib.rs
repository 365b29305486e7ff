//! Storage layer for tasklist
//!
//! PostgreSQL-backed todo table (sqlx) with an in-memory fallback, both
//! behind the `TodoStore` trait.

mod backend;
pub mod error;
mod memory;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
#[cfg(feature = "postgres")]
pub use pg_storage::{PgPoolConfig, PgStorage};
pub use traits::TodoStore;
