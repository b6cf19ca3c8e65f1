//! Functional core for the formdesk intake service.
//!
//! Pure data types and functions shared by the server: the three form
//! entities, submission validation, response payloads and the storage
//! contract. Nothing in this crate performs I/O.

pub mod forms;
pub mod storage;
