//! Storage backend implementations.
//!
//! Concrete implementations of the `FormRepository` trait defined in
//! `formdesk_core::storage`.

pub mod sqlite;

pub use sqlite::SqliteRepository;
