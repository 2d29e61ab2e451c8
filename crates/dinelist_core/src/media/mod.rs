//! Media files that accompany restaurant entries.

pub mod placeholder;
