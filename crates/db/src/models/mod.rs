//! Row models.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row.

pub mod entity;
