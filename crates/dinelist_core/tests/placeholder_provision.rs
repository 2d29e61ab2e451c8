use dinelist_core::{provision_placeholder, ProvisionOutcome};

#[test]
fn copies_placeholder_into_new_directory() {
    let dir = tempfile::tempdir().unwrap();
    let placeholder = dir.path().join("placeholder.jpg");
    std::fs::write(&placeholder, b"placeholder").unwrap();
    let dest = dir.path().join("restaurants/the-shack/1.jpg");

    let outcome = provision_placeholder(&placeholder, &dest).unwrap();
    assert_eq!(outcome, ProvisionOutcome::Copied);
    assert!(outcome.created());
    assert_eq!(std::fs::read(&dest).unwrap(), b"placeholder");
    assert_eq!(std::fs::read(&placeholder).unwrap(), b"placeholder");
}

#[test]
fn never_overwrites_existing_photo() {
    let dir = tempfile::tempdir().unwrap();
    let placeholder = dir.path().join("placeholder.jpg");
    std::fs::write(&placeholder, b"placeholder").unwrap();
    let dest = dir.path().join("restaurants/the-shack/1.jpg");
    std::fs::create_dir_all(dest.parent().unwrap()).unwrap();
    std::fs::write(&dest, b"real photo").unwrap();

    let outcome = provision_placeholder(&placeholder, &dest).unwrap();
    assert_eq!(outcome, ProvisionOutcome::AlreadyPresent);
    assert!(!outcome.created());
    assert_eq!(std::fs::read(&dest).unwrap(), b"real photo");
}

#[test]
fn missing_placeholder_still_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("restaurants/the-shack/1.jpg");

    let outcome = provision_placeholder(&dir.path().join("nope.jpg"), &dest).unwrap();
    assert_eq!(outcome, ProvisionOutcome::PlaceholderMissing);
    assert!(dest.parent().unwrap().is_dir());
    assert!(!dest.exists());
}

#[test]
fn blocked_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("restaurants");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let err = provision_placeholder(
        &dir.path().join("placeholder.jpg"),
        &blocker.join("the-shack/1.jpg"),
    )
    .unwrap_err();
    assert!(err.to_string().contains("failed to provision photo"));
}
