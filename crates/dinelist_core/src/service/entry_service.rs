//! New-entry use-case service.
//!
//! # Responsibility
//! - Run the load -> prompt -> assemble -> commit -> provision pipeline.
//! - Map component failures onto one error type for the binary.
//!
//! # Invariants
//! - The store file is written at most once, and only after every prompt,
//!   validation and uniqueness check has passed.
//! - A missing placeholder never fails the run.

use crate::collect::collector::{collect_draft, CollectError, LinePrompter, Suggestions};
use crate::config::EntryConfig;
use crate::lookup::reference::{load_area_keys, load_cuisine_names};
use crate::media::placeholder::{provision_placeholder, AssetError, ProvisionOutcome};
use crate::model::restaurant::Restaurant;
use crate::repo::store::{RestaurantStore, StoreError};
use crate::service::assemble::{assemble, unix_time_suffix, AssembleError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Top-level failure of one entry run.
#[derive(Debug)]
pub enum EntryError {
    Collect(CollectError),
    Assemble(AssembleError),
    Store(StoreError),
    Asset(AssetError),
}

/// Failure classes used for diagnostics and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    RequiredInputMissing,
    InvalidInput,
    MalformedStore,
    SlugGenerationFailure,
    Io,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RequiredInputMissing => "required_input_missing",
            Self::InvalidInput => "invalid_input",
            Self::MalformedStore => "malformed_store",
            Self::SlugGenerationFailure => "slug_generation_failure",
            Self::Io => "io",
        }
    }

    /// Whether the failure is caused by operator input rather than the
    /// environment.
    pub fn is_input_error(self) -> bool {
        matches!(
            self,
            Self::RequiredInputMissing | Self::InvalidInput | Self::SlugGenerationFailure
        )
    }
}

impl EntryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Collect(CollectError::RequiredInputMissing(_)) => {
                ErrorCategory::RequiredInputMissing
            }
            Self::Collect(CollectError::Io(_)) => ErrorCategory::Io,
            Self::Assemble(AssembleError::SlugGeneration { .. }) => {
                ErrorCategory::SlugGenerationFailure
            }
            Self::Assemble(AssembleError::Validation(_)) => ErrorCategory::InvalidInput,
            Self::Store(StoreError::Malformed { .. }) => ErrorCategory::MalformedStore,
            Self::Store(StoreError::Validation(_) | StoreError::DuplicateSlug(_)) => {
                ErrorCategory::InvalidInput
            }
            Self::Store(StoreError::Io { .. } | StoreError::Serialize(_)) => ErrorCategory::Io,
            Self::Asset(_) => ErrorCategory::Io,
        }
    }
}

impl Display for EntryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collect(err) => write!(f, "{err}"),
            Self::Assemble(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Asset(err) => write!(f, "record saved, but {err}"),
        }
    }
}

impl Error for EntryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Collect(err) => Some(err),
            Self::Assemble(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Asset(err) => Some(err),
        }
    }
}

impl From<CollectError> for EntryError {
    fn from(value: CollectError) -> Self {
        Self::Collect(value)
    }
}

impl From<AssembleError> for EntryError {
    fn from(value: AssembleError) -> Self {
        Self::Assemble(value)
    }
}

impl From<StoreError> for EntryError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<AssetError> for EntryError {
    fn from(value: AssetError) -> Self {
        Self::Asset(value)
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub record: Restaurant,
    /// Slug the operator asked for when a suffix had to be added.
    pub collided_slug: Option<String>,
    pub store_path: PathBuf,
    pub photo_path: PathBuf,
    /// `None` for dry runs.
    pub photo: Option<ProvisionOutcome>,
}

impl EntryOutcome {
    pub fn committed(&self) -> bool {
        self.photo.is_some()
    }
}

/// Pipeline driver bound to one resolved configuration.
pub struct EntryService {
    config: EntryConfig,
    suffix_source: fn() -> u64,
}

impl EntryService {
    pub fn new(config: EntryConfig) -> Self {
        Self {
            config,
            suffix_source: unix_time_suffix,
        }
    }

    /// Replaces the slug collision suffix source (time-based by default).
    pub fn with_suffix_source(mut self, suffix_source: fn() -> u64) -> Self {
        self.suffix_source = suffix_source;
        self
    }

    pub fn config(&self) -> &EntryConfig {
        &self.config
    }

    /// Loads area and cuisine suggestions; never fails.
    pub fn load_suggestions(&self) -> Suggestions {
        Suggestions {
            area_keys: load_area_keys(&self.config.areas_path),
            cuisines: load_cuisine_names(&self.config.cuisines_path),
        }
    }

    /// Runs one interactive entry.
    ///
    /// With `dry_run`, stops after assembly and leaves store and media alone.
    ///
    /// # Errors
    /// - Any collection, assembly or store failure aborts before the store is
    ///   written.
    /// - `EntryError::Asset` is only returned after a successful commit.
    pub fn run<R: BufRead, W: Write>(
        &self,
        prompter: &mut LinePrompter<R, W>,
        dry_run: bool,
    ) -> Result<EntryOutcome, EntryError> {
        let result = self.run_inner(prompter, dry_run);
        if let Err(err) = &result {
            error!(
                "event=entry_run module=service status=error category={} error={}",
                err.category().as_str(),
                err
            );
        }
        result
    }

    fn run_inner<R: BufRead, W: Write>(
        &self,
        prompter: &mut LinePrompter<R, W>,
        dry_run: bool,
    ) -> Result<EntryOutcome, EntryError> {
        let mut store = RestaurantStore::load(&self.config.store_path)?;
        let suggestions = self.load_suggestions();
        if suggestions.area_keys.is_empty() {
            prompter.say("note: area suggestions unavailable")?;
        }
        if suggestions.cuisines.is_empty() {
            prompter.say("note: cuisine suggestions unavailable")?;
        }

        let draft = collect_draft(prompter, &suggestions)?;
        let assembled = assemble(draft, &store.slugs(), &self.config, (self.suffix_source)())?;
        let record = assembled.record;
        if let Some(collided) = &assembled.collided_slug {
            prompter.say(&format!(
                "notice: slug `{collided}` already exists; using `{}`",
                record.slug
            ))?;
        }

        let photo_path = self.config.photo_destination(&record.slug);
        if dry_run {
            info!(
                "event=entry_run module=service status=ok mode=dry_run slug={}",
                record.slug
            );
            return Ok(EntryOutcome {
                record,
                collided_slug: assembled.collided_slug,
                store_path: store.path().to_path_buf(),
                photo_path,
                photo: None,
            });
        }

        store.commit(&record)?;
        let photo = provision_placeholder(&self.config.placeholder_path, &photo_path)?;
        if photo == ProvisionOutcome::PlaceholderMissing {
            prompter.say(&format!(
                "warning: placeholder `{}` not found; no photo was created",
                self.config.placeholder_path.display()
            ))?;
        }

        info!(
            "event=entry_run module=service status=ok mode=commit slug={} photo_created={}",
            record.slug,
            photo.created()
        );
        Ok(EntryOutcome {
            record,
            collided_slug: assembled.collided_slug,
            store_path: store.path().to_path_buf(),
            photo_path,
            photo: Some(photo),
        })
    }
}
