//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Connection pool injected through state - no process-wide handle
//! - List operations aggregate enrollments with a JOIN - no N+1 queries
//! - Validate a whole enrollment set before writing any of it
//! - Transactions for multi-step operations

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{connect, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
