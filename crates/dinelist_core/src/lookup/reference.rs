//! Area and cuisine reference table decoding.
//!
//! # Responsibility
//! - Read the read-only reference tables and flatten them into suggestion
//!   lists.
//! - Accept either plain string entries or object entries per table kind.
//!
//! # Invariants
//! - Loading never fails: missing, unreadable or malformed tables yield an
//!   empty list, and entries that cannot be resolved are dropped.
//! - Returned lists keep file order and contain no duplicates.
//! - An empty list means "suggestions unavailable", not "nothing is valid".

use log::{debug, warn};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::Path;

/// Which reference table an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Areas,
    Cuisines,
}

impl TableKind {
    fn label(self) -> &'static str {
        match self {
            Self::Areas => "areas",
            Self::Cuisines => "cuisines",
        }
    }
}

/// One area table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaEntry {
    /// Bare area key, e.g. `"fenwick-island"`.
    Key(String),
    Record(AreaRecord),
}

/// Object form of an area entry. The key is read from `key`, then `id`,
/// then `slug`; fields holding anything but a string count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaRecord {
    pub key: Option<String>,
    pub id: Option<String>,
    pub slug: Option<String>,
}

impl AreaEntry {
    /// Decodes a string or object entry; every other JSON shape is rejected.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(key) => Some(Self::Key(key.clone())),
            Value::Object(fields) => Some(Self::Record(AreaRecord {
                key: string_field(fields, "key"),
                id: string_field(fields, "id"),
                slug: string_field(fields, "slug"),
            })),
            _ => None,
        }
    }

    /// Resolved area key, if this entry carries a usable one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => non_blank(key),
            Self::Record(record) => first_non_blank(&[&record.key, &record.id, &record.slug]),
        }
    }
}

/// One cuisine table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CuisineEntry {
    /// Bare cuisine name, e.g. `"Seafood"`.
    Name(String),
    Record(CuisineRecord),
}

/// Object form of a cuisine entry. The name is read from `name`, then `key`,
/// then `id`; fields holding anything but a string count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuisineRecord {
    pub name: Option<String>,
    pub key: Option<String>,
    pub id: Option<String>,
}

impl CuisineEntry {
    /// Decodes a string or object entry; every other JSON shape is rejected.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(Self::Name(name.clone())),
            Value::Object(fields) => Some(Self::Record(CuisineRecord {
                name: string_field(fields, "name"),
                key: string_field(fields, "key"),
                id: string_field(fields, "id"),
            })),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => non_blank(name),
            Self::Record(record) => first_non_blank(&[&record.name, &record.key, &record.id]),
        }
    }
}

/// Loads area keys from the area table at `path`.
pub fn load_area_keys(path: &Path) -> Vec<String> {
    let entries = read_table(path, TableKind::Areas);
    area_keys_from_values(&entries)
}

/// Loads cuisine names from the cuisine table at `path`.
pub fn load_cuisine_names(path: &Path) -> Vec<String> {
    let entries = read_table(path, TableKind::Cuisines);
    cuisine_names_from_values(&entries)
}

/// Flattens already-parsed area table entries into keys.
pub fn area_keys_from_values(entries: &[Value]) -> Vec<String> {
    dedup_keep_order(
        entries
            .iter()
            .filter_map(AreaEntry::from_value)
            .filter_map(|entry| entry.key().map(str::to_string)),
    )
}

/// Flattens already-parsed cuisine table entries into names.
pub fn cuisine_names_from_values(entries: &[Value]) -> Vec<String> {
    dedup_keep_order(
        entries
            .iter()
            .filter_map(CuisineEntry::from_value)
            .filter_map(|entry| entry.name().map(str::to_string)),
    )
}

fn read_table(path: &Path, kind: TableKind) -> Vec<Value> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(
                "event=lookup_load module=lookup status=warn table={} path={} error_code=table_unreadable error={}",
                kind.label(),
                path.display(),
                err
            );
            return Vec::new();
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(entries)) => {
            debug!(
                "event=lookup_load module=lookup status=ok table={} entries={}",
                kind.label(),
                entries.len()
            );
            entries
        }
        Ok(_) => {
            warn!(
                "event=lookup_load module=lookup status=warn table={} path={} error_code=table_not_array",
                kind.label(),
                path.display()
            );
            Vec::new()
        }
        Err(err) => {
            warn!(
                "event=lookup_load module=lookup status=warn table={} path={} error_code=table_malformed error={}",
                kind.label(),
                path.display(),
                err
            );
            Vec::new()
        }
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    fields.get(name).and_then(Value::as_str).map(str::to_string)
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn first_non_blank<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find_map(|candidate| candidate.as_deref().and_then(non_blank))
}

fn dedup_keep_order(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(value.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::{area_keys_from_values, cuisine_names_from_values, AreaEntry, CuisineEntry};
    use serde_json::json;

    #[test]
    fn area_entry_prefers_key_then_id_then_slug() {
        let entry = AreaEntry::from_value(&json!({"id": "b", "slug": "c", "key": "a"})).unwrap();
        assert_eq!(entry.key(), Some("a"));

        let entry = AreaEntry::from_value(&json!({"slug": "c", "id": " "})).unwrap();
        assert_eq!(entry.key(), Some("c"));

        let entry = AreaEntry::from_value(&json!({"name": "Nowhere"})).unwrap();
        assert_eq!(entry.key(), None);

        let entry = AreaEntry::from_value(&json!({"key": 3, "id": 7, "slug": "c"})).unwrap();
        assert_eq!(entry.key(), Some("c"));
    }

    #[test]
    fn cuisine_entry_prefers_name_then_key_then_id() {
        let entry = CuisineEntry::from_value(&json!({"id": "thai", "name": "Thai"})).unwrap();
        assert_eq!(entry.name(), Some("Thai"));

        let entry = CuisineEntry::from_value(&json!({"id": "bbq"})).unwrap();
        assert_eq!(entry.name(), Some("bbq"));
    }

    #[test]
    fn mixed_tables_drop_unresolvable_and_duplicate_entries() {
        let areas = vec![
            json!("fenwick-island"),
            json!({"key": "ocean-city", "name": "Ocean City"}),
            json!(42),
            json!({"name": "No Key"}),
            json!(["nested"]),
            json!("fenwick-island"),
        ];
        assert_eq!(
            area_keys_from_values(&areas),
            vec!["fenwick-island".to_string(), "ocean-city".to_string()]
        );

        let cuisines = vec![json!("Seafood"), json!({"key": "pizza"}), json!(null)];
        assert_eq!(
            cuisine_names_from_values(&cuisines),
            vec!["Seafood".to_string(), "pizza".to_string()]
        );
    }
}
