//! roster-server: HTTP API over people, courses, and enrollments
//!
//! - `models` validates user input into domain types
//! - `db` persists courses, people, and their enrollments in PostgreSQL
//! - `http` exposes both over a JSON API

pub mod db;
pub mod http;
pub mod models;

pub use db::{connect, DbError};
pub use http::{build_router, run_server, ServerConfig};
