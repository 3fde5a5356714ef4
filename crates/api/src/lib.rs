//! Entity service HTTP library.
//!
//! Exposes the building blocks (config, state, error handling, mapper,
//! service, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod mapper;
pub mod router;
pub mod routes;
pub mod service;
pub mod state;
pub mod view;
