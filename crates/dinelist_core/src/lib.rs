//! Core pipeline for adding restaurant entries to a static site's JSON store.
//! This crate owns every record invariant; the binary only wires I/O.

pub mod collect;
pub mod config;
pub mod logging;
pub mod lookup;
pub mod media;
pub mod model;
pub mod repo;
pub mod service;
pub mod slug;

pub use collect::collector::{
    collect_draft, CollectError, LinePrompter, RestaurantDraft, Suggestions,
};
pub use config::{ConfigError, ConfigOverrides, EntryConfig};
pub use logging::{default_log_dir, default_log_level, init_logging, logging_status};
pub use lookup::reference::{load_area_keys, load_cuisine_names};
pub use media::placeholder::{provision_placeholder, AssetError, ProvisionOutcome};
pub use model::restaurant::{PriceTier, RecordValidationError, Restaurant};
pub use repo::store::{RestaurantStore, StoreError, StoreResult};
pub use service::assemble::{assemble, AssembleError, AssembledRecord};
pub use service::entry_service::{EntryError, EntryOutcome, EntryService, ErrorCategory};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
