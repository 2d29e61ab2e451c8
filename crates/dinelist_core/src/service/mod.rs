//! Core use-case services.
//!
//! # Responsibility
//! - Promote collected drafts into validated records.
//! - Orchestrate lookup, collection, persistence and media provisioning.

pub mod assemble;
pub mod entry_service;
