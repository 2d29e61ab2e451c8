//! Operator interaction for new restaurant entries.
//!
//! # Responsibility
//! - Collect a `RestaurantDraft` through ordered line prompts.
//! - Keep terminal handling behind generic reader/writer parameters.

pub mod collector;
pub mod input;
