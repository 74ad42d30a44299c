//! Domain types and rules for the passport registry.
//!
//! This crate performs no I/O. The database, storage and HTTP crates all
//! depend on it for shared types, errors and validation.

pub mod error;
pub mod passport;
pub mod photo;
pub mod types;
