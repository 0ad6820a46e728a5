//! Lama Core - catalog listing types and query building.
//!
//! This crate provides the types shared by the storefront:
//! - catalog entities as read from the hosted commerce platform
//! - the validated listing request built from URL parameters
//! - the product query handed to the catalog
//! - the derived pagination state
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Everything here can be unit tested without a network.
//!
//! # Modules
//!
//! - [`types`] - Products, categories, listing requests, query specs, pagination

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
