//! Core domain model for libris.
//!
//! This crate defines the catalog model (Author, Book, Library, Librarian),
//! the SQLite schema, the sample-data loader and the relationship queries
//! run against it.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod query;
pub mod schema;
pub mod seed;

pub use error::{Error, Result};
pub use query::{Lookup, Missing};
pub use schema::Database;
