//! Resolved path configuration for one entry run.
//!
//! # Responsibility
//! - Hold every file location the pipeline touches as an absolute path.
//! - Derive conventional site locations from a single site root.
//!
//! # Invariants
//! - Components never consult the working directory; they read paths from
//!   `EntryConfig` only.
//! - All paths are absolute once `EntryConfig::for_site_root` returns.
//! - The media root lies inside the site root, so every photo path has a
//!   public prefix.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_STORE_PATH: &str = "data/restaurants.json";
pub const DEFAULT_AREAS_PATH: &str = "data/areas.json";
pub const DEFAULT_CUISINES_PATH: &str = "data/cuisines.json";
pub const DEFAULT_MEDIA_ROOT: &str = "images";
pub const DEFAULT_PLACEHOLDER_PATH: &str = "images/placeholder.jpg";
pub const DEFAULT_PHOTO_EXTENSION: &str = "jpg";
/// Directory under the media root that holds one folder per restaurant.
pub const RESTAURANT_MEDIA_DIR: &str = "restaurants";

/// Absolute locations and naming conventions for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryConfig {
    pub site_root: PathBuf,
    pub store_path: PathBuf,
    pub areas_path: PathBuf,
    pub cuisines_path: PathBuf,
    /// Filesystem directory that maps to the public media prefix.
    pub media_root: PathBuf,
    pub placeholder_path: PathBuf,
    /// Extension of the provisioned cover photo, without the leading dot.
    pub photo_extension: String,
}

/// Optional overrides layered on top of site-root defaults.
///
/// Relative paths are resolved against the site root.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub store_path: Option<PathBuf>,
    pub areas_path: Option<PathBuf>,
    pub cuisines_path: Option<PathBuf>,
    pub media_root: Option<PathBuf>,
    pub placeholder_path: Option<PathBuf>,
    pub photo_extension: Option<String>,
}

impl EntryConfig {
    /// Builds a configuration rooted at `site_root` using default locations.
    ///
    /// # Errors
    /// - Returns `ConfigError::RelativeSiteRoot` when `site_root` is relative.
    pub fn for_site_root(site_root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::with_overrides(site_root, ConfigOverrides::default())
    }

    /// Builds a configuration rooted at `site_root`, applying `overrides`.
    pub fn with_overrides(
        site_root: impl Into<PathBuf>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let site_root = site_root.into();
        if !site_root.is_absolute() {
            return Err(ConfigError::RelativeSiteRoot(site_root));
        }

        let resolve = |value: Option<PathBuf>, default: &str| -> PathBuf {
            let path = value.unwrap_or_else(|| PathBuf::from(default));
            if path.is_absolute() {
                path
            } else {
                site_root.join(path)
            }
        };

        let config = Self {
            store_path: resolve(overrides.store_path, DEFAULT_STORE_PATH),
            areas_path: resolve(overrides.areas_path, DEFAULT_AREAS_PATH),
            cuisines_path: resolve(overrides.cuisines_path, DEFAULT_CUISINES_PATH),
            media_root: resolve(overrides.media_root, DEFAULT_MEDIA_ROOT),
            placeholder_path: resolve(overrides.placeholder_path, DEFAULT_PLACEHOLDER_PATH),
            photo_extension: overrides
                .photo_extension
                .map(|ext| ext.trim().trim_start_matches('.').to_string())
                .unwrap_or_else(|| DEFAULT_PHOTO_EXTENSION.to_string()),
            site_root,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks naming and location invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.photo_extension.is_empty()
            || !self
                .photo_extension
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ConfigError::InvalidPhotoExtension(
                self.photo_extension.clone(),
            ));
        }
        if self.store_path.is_dir() {
            return Err(ConfigError::StoreIsDirectory(self.store_path.clone()));
        }
        let inside_site = self
            .media_root
            .strip_prefix(&self.site_root)
            .map(|relative| {
                relative
                    .components()
                    .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
            })
            .unwrap_or(false);
        if !inside_site {
            return Err(ConfigError::MediaRootOutsideSite(self.media_root.clone()));
        }
        Ok(())
    }

    /// Public relative path of the cover photo for `slug`.
    ///
    /// Shape: `<media-prefix>/restaurants/<slug>/1.<ext>`, where the media
    /// prefix is the media root expressed relative to the site root.
    pub fn photo_relative_path(&self, slug: &str) -> String {
        let mut segments: Vec<String> = match self.media_root.strip_prefix(&self.site_root) {
            Ok(relative) => relative
                .components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        };
        segments.push(RESTAURANT_MEDIA_DIR.to_string());
        segments.push(slug.to_string());
        segments.push(format!("1.{}", self.photo_extension));
        segments.join("/")
    }

    /// Filesystem destination of the cover photo for `slug`.
    pub fn photo_destination(&self, slug: &str) -> PathBuf {
        self.media_root
            .join(RESTAURANT_MEDIA_DIR)
            .join(slug)
            .join(format!("1.{}", self.photo_extension))
    }

    /// Store path relative to the site root when possible, for display.
    pub fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.site_root).unwrap_or(path)
    }
}

/// Configuration construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    RelativeSiteRoot(PathBuf),
    InvalidPhotoExtension(String),
    StoreIsDirectory(PathBuf),
    MediaRootOutsideSite(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RelativeSiteRoot(path) => {
                write!(f, "site root must be absolute, got `{}`", path.display())
            }
            Self::InvalidPhotoExtension(ext) => {
                write!(f, "photo extension `{ext}` is invalid (expected e.g. `jpg`)")
            }
            Self::StoreIsDirectory(path) => {
                write!(f, "store path `{}` is a directory", path.display())
            }
            Self::MediaRootOutsideSite(path) => write!(
                f,
                "media root `{}` must be inside the site root",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ConfigOverrides, EntryConfig};
    use std::path::PathBuf;

    #[test]
    fn defaults_resolve_under_site_root() {
        let root = std::env::temp_dir().join("dinelist-config-defaults");
        let config = EntryConfig::for_site_root(&root).unwrap();
        assert_eq!(config.store_path, root.join("data/restaurants.json"));
        assert_eq!(config.areas_path, root.join("data/areas.json"));
        assert_eq!(config.cuisines_path, root.join("data/cuisines.json"));
        assert_eq!(config.placeholder_path, root.join("images/placeholder.jpg"));
        assert_eq!(config.photo_extension, "jpg");
        assert_eq!(
            config.photo_relative_path("crabby-bills"),
            "images/restaurants/crabby-bills/1.jpg"
        );
        assert_eq!(
            config.photo_destination("crabby-bills"),
            root.join("images/restaurants/crabby-bills/1.jpg")
        );
    }

    #[test]
    fn overrides_accept_relative_and_absolute_paths() {
        let root = std::env::temp_dir().join("dinelist-config-overrides");
        let absolute_store = std::env::temp_dir().join("elsewhere/store.json");
        let config = EntryConfig::with_overrides(
            &root,
            ConfigOverrides {
                store_path: Some(absolute_store.clone()),
                media_root: Some(PathBuf::from("static/media")),
                photo_extension: Some(".webp".to_string()),
                ..ConfigOverrides::default()
            },
        )
        .unwrap();
        assert_eq!(config.store_path, absolute_store);
        assert_eq!(config.media_root, root.join("static/media"));
        assert_eq!(
            config.photo_relative_path("the-shack"),
            "static/media/restaurants/the-shack/1.webp"
        );
    }

    #[test]
    fn rejects_relative_root_and_bad_extension() {
        assert_eq!(
            EntryConfig::for_site_root("site").unwrap_err(),
            ConfigError::RelativeSiteRoot(PathBuf::from("site"))
        );

        let root = std::env::temp_dir().join("dinelist-config-ext");
        let err = EntryConfig::with_overrides(
            &root,
            ConfigOverrides {
                photo_extension: Some("j/pg".to_string()),
                ..ConfigOverrides::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPhotoExtension(_)));
    }

    #[test]
    fn rejects_media_root_outside_site_root() {
        let root = std::env::temp_dir().join("dinelist-config-media");
        let outside = std::env::temp_dir().join("dinelist-shared-media");
        for media_root in [outside.clone(), PathBuf::from("../shared-media")] {
            let err = EntryConfig::with_overrides(
                &root,
                ConfigOverrides {
                    media_root: Some(media_root),
                    ..ConfigOverrides::default()
                },
            )
            .unwrap_err();
            assert!(matches!(err, ConfigError::MediaRootOutsideSite(_)));
        }

        let config = EntryConfig::with_overrides(
            &root,
            ConfigOverrides {
                media_root: Some(root.join("./assets")),
                ..ConfigOverrides::default()
            },
        )
        .unwrap();
        assert_eq!(
            config.photo_relative_path("the-shack"),
            "assets/restaurants/the-shack/1.jpg"
        );
    }
}
