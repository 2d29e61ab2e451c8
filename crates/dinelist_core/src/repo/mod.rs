//! Persistence for the restaurant store.
//!
//! # Responsibility
//! - Own reading and rewriting of the backing JSON file.
//! - Keep file-format details away from collection and assembly.
//!
//! # Invariants
//! - Writes must call `Restaurant::validate()` before touching the file.
//! - The store is the only component that persists records.

pub mod store;
