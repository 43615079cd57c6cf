//! Command implementations for the roster CLI

pub mod serve;

pub use serve::run_serve;
