//! Conformance tests that run YAML fixtures against the inertia renderer
//!
//! Run with: cargo test -p inertia-test --test conformance --features inertia-test/fixtures
//!
//! Note: This test file requires the `fixtures` feature to be enabled.

#![cfg(feature = "fixtures")]

use inertia_test::fixture::Fixture;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the spec/tests directory relative to the workspace root
fn fixtures_dir() -> PathBuf {
    // The manifest dir is ext/test; the workspace root is two levels up
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let root = Path::new(manifest_dir)
        .parent() // ext
        .and_then(Path::parent) // workspace root
        .expect("Could not find workspace root");

    root.join("spec").join("tests")
}

/// Load and run all fixtures in a directory
fn run_fixtures_in_dir(dir: &Path) {
    assert!(
        dir.exists(),
        "Fixtures directory does not exist: {}",
        dir.display()
    );

    let mut ran = 0;
    for entry in fs::read_dir(dir).expect("read dir") {
        let path = entry.expect("dir entry").path();

        if path
            .extension()
            .is_some_and(|e| e == "yaml" || e == "yml")
        {
            println!("Running fixture: {}", path.display());

            let yaml = fs::read_to_string(&path).expect("read yaml");

            // Parse potentially multiple fixtures (separated by ---)
            let fixtures = Fixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
                panic!("Failed to parse {}: {}", path.display(), e);
            });

            for fixture in fixtures {
                println!("  Running: {}", fixture.name);
                fixture.run_and_assert();
                ran += 1;
            }
        }
    }
    assert!(ran > 0, "No fixtures found in {}", dir.display());
}

#[test]
fn test_version() {
    run_fixtures_in_dir(&fixtures_dir().join("01_version"));
}

#[test]
fn test_partial_reloads() {
    run_fixtures_in_dir(&fixtures_dir().join("02_partial"));
}

#[test]
fn test_responses() {
    run_fixtures_in_dir(&fixtures_dir().join("03_response"));
}

#[test]
fn test_redirects() {
    run_fixtures_in_dir(&fixtures_dir().join("04_redirect"));
}
