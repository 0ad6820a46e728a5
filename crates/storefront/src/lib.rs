//! Lama Shop storefront library.
//!
//! Server-rendered product listing backed by the Wix Stores catalog.
//! Exposed as a library so the router can be driven from integration tests
//! with an in-memory catalog.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod listing;
pub mod middleware;
pub mod routes;
pub mod state;
