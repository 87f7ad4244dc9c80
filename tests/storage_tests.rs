//! Tests for JSON catalog persistence
//!
//! These tests verify:
//! - Save/load round-trip fidelity, field for field and in order
//! - Best-effort loading of missing and malformed files
//! - Whole-file overwrite on save
//! - The on-disk shape (pretty-printed array with stable keys)

use shelfkeeper::domain::Book;
use shelfkeeper::storage::{JsonStorage, LoadOutcome};
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_catalog() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("library.json");
    (temp_dir, catalog_path)
}

fn sample_books() -> Vec<Book> {
    vec![
        Book::new("Dune", "Frank Herbert", 1965, "SciFi", true),
        Book::new("The Hobbit", "J.R.R. Tolkien", 1937, "Fantasy", false),
        Book::new("Hyperion", "Dan Simmons", 1989, "SciFi", true),
    ]
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn round_trip_preserves_order_and_fields() {
    let (_temp, catalog_path) = setup_temp_catalog();
    let storage = JsonStorage::new(catalog_path);
    let books = sample_books();

    storage.save(&books).unwrap();

    match storage.load() {
        LoadOutcome::Loaded(loaded) => assert_eq!(loaded, books),
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[test]
fn round_trip_of_empty_collection() {
    let (_temp, catalog_path) = setup_temp_catalog();
    let storage = JsonStorage::new(catalog_path);

    storage.save(&[]).unwrap();

    match storage.load() {
        LoadOutcome::Loaded(loaded) => assert!(loaded.is_empty()),
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[test]
fn round_trip_keeps_duplicate_titles() {
    let (_temp, catalog_path) = setup_temp_catalog();
    let storage = JsonStorage::new(catalog_path);
    let books = vec![
        Book::new("Dune", "Frank Herbert", 1965, "SciFi", true),
        Book::new("Dune", "Brian Herbert", 2003, "SciFi", false),
    ];

    storage.save(&books).unwrap();

    match storage.load() {
        LoadOutcome::Loaded(loaded) => assert_eq!(loaded, books),
        other => panic!("expected Loaded, got {other:?}"),
    }
}

// =============================================================================
// Best-Effort Loading Tests
// =============================================================================

#[test]
fn loading_missing_path_reports_missing() {
    let (_temp, catalog_path) = setup_temp_catalog();
    let storage = JsonStorage::new(catalog_path);

    assert_eq!(storage.load(), LoadOutcome::Missing);
}

#[test]
fn loading_corrupt_file_reports_malformed() {
    let (_temp, catalog_path) = setup_temp_catalog();
    std::fs::write(&catalog_path, "this is not json {{{").unwrap();

    let storage = JsonStorage::new(catalog_path);
    assert!(matches!(storage.load(), LoadOutcome::Malformed(_)));
}

#[test]
fn loading_wrong_document_shape_reports_malformed() {
    let (_temp, catalog_path) = setup_temp_catalog();
    // Valid JSON, but an object instead of the expected array.
    std::fs::write(&catalog_path, r#"{"books": []}"#).unwrap();

    let storage = JsonStorage::new(catalog_path);
    assert!(matches!(storage.load(), LoadOutcome::Malformed(_)));
}

#[test]
fn loading_record_with_missing_field_reports_malformed() {
    let (_temp, catalog_path) = setup_temp_catalog();
    std::fs::write(&catalog_path, r#"[{"title": "Dune"}]"#).unwrap();

    let storage = JsonStorage::new(catalog_path);
    assert!(matches!(storage.load(), LoadOutcome::Malformed(_)));
}

// =============================================================================
// Save Behavior Tests
// =============================================================================

#[test]
fn save_overwrites_previous_content() {
    let (_temp, catalog_path) = setup_temp_catalog();
    let storage = JsonStorage::new(catalog_path);

    storage.save(&sample_books()).unwrap();
    let remaining = vec![Book::new("Dune", "Frank Herbert", 1965, "SciFi", true)];
    storage.save(&remaining).unwrap();

    match storage.load() {
        LoadOutcome::Loaded(loaded) => assert_eq!(loaded, remaining),
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[test]
fn save_writes_pretty_printed_array_with_stable_keys() {
    let (_temp, catalog_path) = setup_temp_catalog();
    let storage = JsonStorage::new(catalog_path.clone());

    storage
        .save(&[Book::new("Dune", "Frank Herbert", 1965, "SciFi", true)])
        .unwrap();

    let contents = std::fs::read_to_string(&catalog_path).unwrap();
    assert!(contents.trim_start().starts_with('['));
    for key in ["title", "author", "publication_year", "genre", "read"] {
        assert!(contents.contains(&format!("\"{key}\"")), "missing key {key}");
    }
    // Pretty printing: multi-line with indentation.
    assert!(contents.lines().count() > 1);
}

#[test]
fn save_leaves_no_temporary_file_behind() {
    let (_temp, catalog_path) = setup_temp_catalog();
    let storage = JsonStorage::new(catalog_path.clone());

    storage.save(&sample_books()).unwrap();

    assert!(catalog_path.exists());
    assert!(!catalog_path.with_extension("tmp").exists());
}
