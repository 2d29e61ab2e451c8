//! Restaurant record model.
//!
//! # Responsibility
//! - Define the committed record shape written to the restaurant store.
//! - Validate record-level invariants before persistence.
//!
//! # Invariants
//! - `name`, `slug`, `cuisines` and `photos` are never empty on a valid record.
//! - Serialized field names are camelCase and follow the declaration order.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Price tier symbol shown on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Budget,
    #[default]
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceTier {
    /// All tiers in ascending order.
    pub const ALL: [PriceTier; 4] = [
        PriceTier::Budget,
        PriceTier::Moderate,
        PriceTier::Upscale,
        PriceTier::Luxury,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Upscale => "$$$",
            Self::Luxury => "$$$$",
        }
    }

    /// Tier whose symbol matches `value` after trimming.
    pub fn from_symbol(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL.into_iter().find(|tier| tier.symbol() == trimmed)
    }
}

impl Display for PriceTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One committed restaurant entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    /// Unique across the store at commit time.
    pub slug: String,
    /// Free-text area reference; advisory only.
    pub area_key: String,
    pub address: String,
    pub price: PriceTier,
    pub cuisines: Vec<String>,
    pub vibes: Vec<String>,
    pub good_for: Vec<String>,
    pub short_blurb: String,
    pub long_blurb: String,
    pub must_try: Vec<String>,
    pub website: Option<String>,
    pub menu_url: Option<String>,
    /// Relative photo paths; the first entry is the conventional cover photo.
    pub photos: Vec<String>,
    pub featured: bool,
}

impl Restaurant {
    /// Validates record-level invariants.
    ///
    /// # Errors
    /// - Returns the first violated invariant in field order.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecordValidationError::EmptyName);
        }
        if self.slug.is_empty() {
            return Err(RecordValidationError::EmptySlug);
        }
        if self.cuisines.is_empty() {
            return Err(RecordValidationError::MissingCuisines);
        }
        if self.photos.is_empty() {
            return Err(RecordValidationError::MissingPhotos);
        }
        Ok(())
    }

    /// First photo path, if any.
    pub fn cover_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }
}

/// Returns whether `value` looks like an absolute http(s) URL.
pub fn is_http_url(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    ["http://", "https://"]
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len())
}

/// Record invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptyName,
    EmptySlug,
    MissingCuisines,
    MissingPhotos,
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "restaurant name must not be empty"),
            Self::EmptySlug => write!(f, "restaurant slug must not be empty"),
            Self::MissingCuisines => write!(f, "at least one cuisine is required"),
            Self::MissingPhotos => write!(f, "at least one photo path is required"),
        }
    }
}

impl Error for RecordValidationError {}

#[cfg(test)]
mod tests {
    use super::{is_http_url, PriceTier, RecordValidationError, Restaurant};

    fn sample() -> Restaurant {
        Restaurant {
            name: "Crabby Bill's".to_string(),
            slug: "crabby-bills".to_string(),
            area_key: "fenwick-island".to_string(),
            address: "1 Coastal Hwy".to_string(),
            price: PriceTier::Moderate,
            cuisines: vec!["Seafood".to_string()],
            vibes: vec![],
            good_for: vec![],
            short_blurb: String::new(),
            long_blurb: String::new(),
            must_try: vec![],
            website: None,
            menu_url: None,
            photos: vec!["images/restaurants/crabby-bills/1.jpg".to_string()],
            featured: false,
        }
    }

    #[test]
    fn price_tier_matches_known_symbols_only() {
        assert_eq!(PriceTier::from_symbol(" $$$ "), Some(PriceTier::Upscale));
        assert_eq!(PriceTier::from_symbol("$"), Some(PriceTier::Budget));
        assert_eq!(PriceTier::from_symbol("cheap"), None);
        assert_eq!(PriceTier::from_symbol("$$$$$"), None);
        assert_eq!(PriceTier::default().symbol(), "$$");
    }

    #[test]
    fn serializes_camel_case_fields_in_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let keys = [
            "\"name\"",
            "\"slug\"",
            "\"areaKey\"",
            "\"address\"",
            "\"price\":\"$$\"",
            "\"cuisines\"",
            "\"vibes\"",
            "\"goodFor\"",
            "\"shortBlurb\"",
            "\"longBlurb\"",
            "\"mustTry\"",
            "\"website\":null",
            "\"menuUrl\":null",
            "\"photos\"",
            "\"featured\":false",
        ];
        let mut cursor = 0;
        for key in keys {
            let found = json[cursor..]
                .find(key)
                .unwrap_or_else(|| panic!("missing or out of order: {key} in {json}"));
            cursor += found + key.len();
        }
    }

    #[test]
    fn validate_accepts_sample_and_rejects_broken_invariants() {
        let record = sample();
        assert!(record.validate().is_ok());
        assert_eq!(
            record.cover_photo(),
            Some("images/restaurants/crabby-bills/1.jpg")
        );

        let mut no_cuisines = sample();
        no_cuisines.cuisines.clear();
        assert_eq!(
            no_cuisines.validate().unwrap_err(),
            RecordValidationError::MissingCuisines
        );

        let mut blank_name = sample();
        blank_name.name = "  ".to_string();
        assert_eq!(
            blank_name.validate().unwrap_err(),
            RecordValidationError::EmptyName
        );

        let mut odd_url = sample();
        odd_url.menu_url = Some("menu.pdf".to_string());
        assert!(odd_url.validate().is_ok());
    }

    #[test]
    fn http_url_check_requires_scheme_and_host() {
        assert!(is_http_url("https://crabbybills.com"));
        assert!(is_http_url("HTTP://example.org/menu"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("www.example.com"));
    }
}
