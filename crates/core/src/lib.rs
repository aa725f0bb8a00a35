//! Shared domain types and errors for the eventos backend.

pub mod error;
pub mod types;
