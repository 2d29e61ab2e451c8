//! JSON-file restaurant store.
//!
//! # Responsibility
//! - Load the whole store into memory and expose existing slugs.
//! - Append one validated record and rewrite the whole file.
//!
//! # Invariants
//! - Existing entries are kept as raw JSON values, so unknown fields and key
//!   order survive a rewrite untouched.
//! - The file is only written by `commit`, after validation and the slug
//!   uniqueness check succeed.
//! - Output is pretty-printed with two-space indentation and ends with `\n`.
//! - Writes go to a sibling temp file that is renamed over the store.
//! - Single writer only; concurrent runs are last-writer-wins.

use crate::model::restaurant::{RecordValidationError, Restaurant};
use log::{error, info};
use serde_json::Value;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store load/commit errors.
#[derive(Debug)]
pub enum StoreError {
    /// The store file exists but is not a JSON array.
    Malformed { path: PathBuf, reason: String },
    /// The record violates an invariant.
    Validation(RecordValidationError),
    /// The record's slug is already taken.
    DuplicateSlug(String),
    Io { path: PathBuf, source: std::io::Error },
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed { path, reason } => write!(
                f,
                "restaurant store `{}` is malformed: {reason}",
                path.display()
            ),
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateSlug(slug) => write!(f, "slug `{slug}` already exists in the store"),
            Self::Io { path, source } => write!(f, "i/o error on `{}`: {source}", path.display()),
            Self::Serialize(err) => write!(f, "failed to serialize restaurant store: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed { .. } => None,
            Self::Validation(err) => Some(err),
            Self::DuplicateSlug(_) => None,
            Self::Io { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<RecordValidationError> for StoreError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// In-memory copy of the restaurant store bound to its backing file.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantStore {
    path: PathBuf,
    entries: Vec<Value>,
}

impl RestaurantStore {
    /// Reads the store at `path`.
    ///
    /// A missing file is an empty store; it is created on first commit.
    ///
    /// # Errors
    /// - `Malformed` when the content is not valid JSON or not an array.
    /// - `Io` for any other read failure.
    pub fn load(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=store_load module=store status=ok entries=0 reason=missing_file path={}",
                    path.display()
                );
                return Ok(Self {
                    path,
                    entries: Vec::new(),
                });
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let entries = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => entries,
            Ok(other) => {
                error!(
                    "event=store_load module=store status=error error_code=store_not_array path={}",
                    path.display()
                );
                return Err(StoreError::Malformed {
                    path,
                    reason: format!("expected a JSON array, found {}", json_kind(&other)),
                });
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error error_code=store_invalid_json path={}",
                    path.display()
                );
                return Err(StoreError::Malformed {
                    path,
                    reason: err.to_string(),
                });
            }
        };

        info!(
            "event=store_load module=store status=ok entries={} path={}",
            entries.len(),
            path.display()
        );
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slugs of existing entries; entries without a string `slug` are skipped.
    pub fn slugs(&self) -> HashSet<String> {
        self.entries
            .iter()
            .filter_map(|entry| entry.get("slug").and_then(Value::as_str))
            .map(str::to_string)
            .collect()
    }

    /// Appends `record` and rewrites the backing file.
    ///
    /// # Errors
    /// - `Validation` / `DuplicateSlug` before anything is written.
    /// - `Io` / `Serialize` when the rewrite fails; the in-memory entry list
    ///   is rolled back so it keeps matching the file.
    pub fn commit(&mut self, record: &Restaurant) -> StoreResult<()> {
        record.validate()?;
        if self.slugs().contains(&record.slug) {
            return Err(StoreError::DuplicateSlug(record.slug.clone()));
        }

        let started_at = Instant::now();
        self.entries.push(serde_json::to_value(record)?);
        if let Err(err) = self.write_all() {
            self.entries.pop();
            error!(
                "event=store_commit module=store status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err);
        }

        info!(
            "event=store_commit module=store status=ok slug={} entries={} duration_ms={}",
            record.slug,
            self.entries.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    fn write_all(&self) -> StoreResult<()> {
        let mut body = serde_json::to_string_pretty(&self.entries)?;
        body.push('\n');

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let temp_path = temp_sibling(&self.path);
        std::fs::write(&temp_path, body).map_err(|source| StoreError::Io {
            path: temp_path.clone(),
            source,
        })?;
        std::fs::rename(&temp_path, &self.path).map_err(|source| {
            let _ = std::fs::remove_file(&temp_path);
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "store.json".to_string());
    path.with_file_name(format!(".{file_name}.{}.tmp", std::process::id()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::{json_kind, temp_sibling};
    use serde_json::json;
    use std::path::Path;

    #[test]
    fn temp_sibling_stays_in_store_directory() {
        let temp = temp_sibling(Path::new("/site/data/restaurants.json"));
        assert_eq!(temp.parent(), Some(Path::new("/site/data")));
        let name = temp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".restaurants.json."));
        assert!(name.ends_with(".tmp"));
    }

    #[test]
    fn json_kind_names_shapes() {
        assert_eq!(json_kind(&json!({"a": 1})), "an object");
        assert_eq!(json_kind(&json!(null)), "null");
    }
}
