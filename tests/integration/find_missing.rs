//! Find-missing mode

use md5tree::engine::Mode;
use md5tree::manifest::MANIFEST_FILE_NAME;
use std::fs;
use tempfile::TempDir;

use crate::integration::{run_mode, write_files};

#[test]
fn test_find_missing_empty_tree_reports_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("nested").join("deeper")).unwrap();

    let run = run_mode(root, Mode::FindMissing);
    assert!(run.out.is_empty());
    assert!(run.err.is_empty());
    assert_eq!(run.accounting.exit_code(), 0);
}

#[test]
fn test_find_missing_single_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_files(root, &[("a.txt", "hi")]);

    let run = run_mode(root, Mode::FindMissing);
    assert_eq!(run.lines_starting_with("Missing manifest: "), 1);
    assert!(run
        .err
        .contains(&format!("Missing manifest: {}", root.display())));
    assert_eq!(run.accounting.exit_code(), 1);
    assert!(!root.join(MANIFEST_FILE_NAME).exists());
}

#[test]
fn test_find_missing_after_generate_is_clean() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_files(root, &[("a.txt", "hi")]);
    write_files(&root.join("sub"), &[("b.txt", "bye")]);

    let before = run_mode(root, Mode::FindMissing);
    assert_eq!(before.lines_starting_with("Missing manifest: "), 2);

    run_mode(root, Mode::Generate);
    let after = run_mode(root, Mode::FindMissing);
    assert_eq!(after.lines_starting_with("Missing manifest: "), 0);
    assert_eq!(after.accounting.exit_code(), 0);
}

#[test]
fn test_find_missing_reports_in_traversal_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_files(&root.join("beta"), &[("f", "1")]);
    write_files(&root.join("Alpha"), &[("f", "2")]);

    let run = run_mode(root, Mode::FindMissing);
    let alpha = run.err.find(&root.join("Alpha").display().to_string()).unwrap();
    let beta = run.err.find(&root.join("beta").display().to_string()).unwrap();
    assert!(alpha < beta);
}
