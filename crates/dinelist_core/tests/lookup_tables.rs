use dinelist_core::{load_area_keys, load_cuisine_names};
use std::path::Path;

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn area_table_of_objects_yields_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "areas.json",
        r#"[{"key":"fenwick-island","name":"Fenwick Island"}]"#,
    );
    assert_eq!(load_area_keys(&path), vec!["fenwick-island".to_string()]);
}

#[test]
fn area_table_of_strings_yields_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "areas.json", r#"["fenwick-island"]"#);
    assert_eq!(load_area_keys(&path), vec!["fenwick-island".to_string()]);
}

#[test]
fn area_table_falls_back_through_id_and_slug() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "areas.json",
        r#"[{"id":"ocean-city","name":"Ocean City"},{"slug":"bethany-beach"},{"name":"Keyless"}]"#,
    );
    assert_eq!(
        load_area_keys(&path),
        vec!["ocean-city".to_string(), "bethany-beach".to_string()]
    );
}

#[test]
fn empty_missing_and_malformed_tables_yield_empty_lists() {
    let dir = tempfile::tempdir().unwrap();
    let empty = write(dir.path(), "empty.json", "[]");
    let malformed = write(dir.path(), "bad.json", "{not json");
    let not_array = write(dir.path(), "object.json", r#"{"areas":["x"]}"#);
    let missing = dir.path().join("missing.json");

    for path in [&empty, &malformed, &not_array, &missing] {
        assert!(load_area_keys(path).is_empty(), "{}", path.display());
        assert!(load_cuisine_names(path).is_empty(), "{}", path.display());
    }
}

#[test]
fn cuisine_table_accepts_strings_and_objects() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "cuisines.json",
        r#"["Seafood",{"name":"Italian","id":"italian"},{"key":"bbq"},{"id":"thai"},{"label":"dropped"},7]"#,
    );
    assert_eq!(
        load_cuisine_names(&path),
        vec![
            "Seafood".to_string(),
            "Italian".to_string(),
            "bbq".to_string(),
            "thai".to_string()
        ]
    );
}

#[test]
fn numeric_ids_do_not_hide_string_fields() {
    let dir = tempfile::tempdir().unwrap();
    let cuisines = write(
        dir.path(),
        "cuisines.json",
        r#"[{"id":1,"name":"Thai"},{"id":2,"name":"Seafood"},{"id":3}]"#,
    );
    assert_eq!(
        load_cuisine_names(&cuisines),
        vec!["Thai".to_string(), "Seafood".to_string()]
    );

    let areas = write(
        dir.path(),
        "areas.json",
        r#"[{"id":7,"key":"fenwick-island","name":"Fenwick Island"},{"id":8,"slug":"ocean-city"}]"#,
    );
    assert_eq!(
        load_area_keys(&areas),
        vec!["fenwick-island".to_string(), "ocean-city".to_string()]
    );
}
