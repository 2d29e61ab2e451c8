//! Domain model for restaurant entries.
//!
//! # Responsibility
//! - Define the record shape shared by assembly, validation and persistence.
//!
//! # Invariants
//! - Every committed record is identified by a slug unique within its store.

pub mod restaurant;
