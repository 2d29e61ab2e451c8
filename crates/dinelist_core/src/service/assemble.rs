//! Draft-to-record promotion.
//!
//! # Responsibility
//! - Derive the final slug from the draft and make it unique.
//! - Attach the conventional cover photo path.
//!
//! # Invariants
//! - The returned slug is never empty and never in `existing_slugs`.
//! - Assembly never touches the store; committing is a separate step.

use crate::collect::collector::RestaurantDraft;
use crate::config::EntryConfig;
use crate::model::restaurant::{RecordValidationError, Restaurant};
use crate::slug::normalize;
use log::{info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Assembly result plus the collision notice, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledRecord {
    pub record: Restaurant,
    /// Slug that collided with an existing entry, when a suffix was added.
    pub collided_slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    /// Neither the slug seed nor the name produced a usable slug.
    SlugGeneration { name: String, seed: String },
    Validation(RecordValidationError),
}

impl Display for AssembleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SlugGeneration { name, seed } => write!(
                f,
                "could not generate a slug from slug input `{seed}` or name `{name}`"
            ),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AssembleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SlugGeneration { .. } => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<RecordValidationError> for AssembleError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Current Unix time in seconds, used as the collision suffix seed.
pub fn unix_time_suffix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// Picks the slug candidate: normalized seed, else normalized name.
pub fn candidate_slug(draft: &RestaurantDraft) -> Result<String, AssembleError> {
    let from_seed = normalize(&draft.slug_seed);
    if !from_seed.is_empty() {
        return Ok(from_seed);
    }
    let from_name = normalize(&draft.name);
    if from_name.is_empty() {
        return Err(AssembleError::SlugGeneration {
            name: draft.name.clone(),
            seed: draft.slug_seed.clone(),
        });
    }
    Ok(from_name)
}

/// Returns `candidate` if free, else `candidate-<n>` for the first free
/// `n >= suffix_seed`.
pub fn unique_slug(candidate: &str, existing_slugs: &HashSet<String>, suffix_seed: u64) -> String {
    if !existing_slugs.contains(candidate) {
        return candidate.to_string();
    }
    let mut suffix = suffix_seed;
    loop {
        let attempt = format!("{candidate}-{suffix}");
        if !existing_slugs.contains(&attempt) {
            return attempt;
        }
        suffix = suffix.wrapping_add(1);
    }
}

/// Promotes `draft` into a validated record.
///
/// # Errors
/// - `SlugGeneration` when no slug can be derived.
/// - `Validation` when the assembled record breaks an invariant.
pub fn assemble(
    draft: RestaurantDraft,
    existing_slugs: &HashSet<String>,
    config: &EntryConfig,
    suffix_seed: u64,
) -> Result<AssembledRecord, AssembleError> {
    let candidate = candidate_slug(&draft)?;
    let slug = unique_slug(&candidate, existing_slugs, suffix_seed);
    let collided_slug = (slug != candidate).then_some(candidate);
    if let Some(collided) = &collided_slug {
        warn!(
            "event=assemble_slug module=service status=warn reason=slug_collision requested={} assigned={}",
            collided, slug
        );
    }

    let photos = vec![config.photo_relative_path(&slug)];
    let record = Restaurant {
        name: draft.name.trim().to_string(),
        slug,
        area_key: draft.area_key,
        address: draft.address,
        price: draft.price,
        cuisines: draft.cuisines,
        vibes: draft.vibes,
        good_for: draft.good_for,
        short_blurb: draft.short_blurb,
        long_blurb: draft.long_blurb,
        must_try: draft.must_try,
        website: draft.website,
        menu_url: draft.menu_url,
        photos,
        featured: draft.featured,
    };
    record.validate()?;

    info!(
        "event=assemble_record module=service status=ok slug={}",
        record.slug
    );
    Ok(AssembledRecord {
        record,
        collided_slug,
    })
}
