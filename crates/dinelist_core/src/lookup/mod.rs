//! Read-only reference tables used for operator suggestions.
//!
//! # Responsibility
//! - Turn area and cuisine tables into flat suggestion lists.
//!
//! # Invariants
//! - Lookups are advisory; nothing here rejects operator input.

pub mod reference;
