//! Shared domain types for the entity service.

pub mod error;
pub mod types;
