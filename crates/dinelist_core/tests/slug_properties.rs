use dinelist_core::service::assemble::unique_slug;
use dinelist_core::slug::normalize;
use std::collections::HashSet;

#[test]
fn documented_example_normalizes() {
    assert_eq!(normalize("O'Brien's & Sons"), "obriens-and-sons");
}

#[test]
fn normalize_is_idempotent_across_varied_inputs() {
    let inputs = [
        "Crabby Bill's",
        "  Café  Olé!! ",
        "Mom & Pop's — Diner",
        "A&W",
        "---",
        "Ñandú 42",
        "ALL CAPS PLACE",
        "tab\tseparated\nlines",
        "Ǆemal's",
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "input {input:?}");
    }
}

#[test]
fn collision_suffix_is_numeric_and_unique() {
    let existing: HashSet<String> = ["crabby-bills".to_string()].into_iter().collect();
    let candidate = normalize("Crabby Bill's");

    let slug = unique_slug(&candidate, &existing, 1_700_000_123);
    assert!(!existing.contains(&slug));
    let suffix = slug
        .strip_prefix("crabby-bills-")
        .expect("suffix should follow the normalized name");
    assert!(!suffix.is_empty());
    assert!(suffix.chars().all(|c| c.is_ascii_digit()));

    let free = unique_slug("the-shack", &existing, 1);
    assert_eq!(free, "the-shack");
}
