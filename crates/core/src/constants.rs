//! Shared constants for tasklist.
//!
//! Centralizes magic numbers used by the server, the storage layer and the client.

/// Page number used when the caller does not specify one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Collection path of the REST API.
pub const TODOS_API_PATH: &str = "/api/todos";

/// Default address the client talks to and the server listens on.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
