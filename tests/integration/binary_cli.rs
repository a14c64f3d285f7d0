//! End-to-end runs of the md5tree binary: exit codes and stream routing

use md5tree::manifest::MANIFEST_FILE_NAME;
use std::fs;
use tempfile::TempDir;

use crate::integration::{run_binary, write_files};

#[test]
fn test_binary_generate_then_verify_then_corrupt() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    let tree = temp_dir.path().join("tree");
    write_files(&tree, &[("a.txt", "hi"), ("b.txt", "bye")]);
    let tree_arg = tree.to_str().unwrap();

    let generate = run_binary(&home, &["--generate", tree_arg]);
    assert_eq!(generate.status.code(), Some(0));
    assert!(tree.join(MANIFEST_FILE_NAME).is_file());

    let verify = run_binary(&home, &[tree_arg]);
    assert_eq!(verify.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&verify.stdout);
    assert!(stdout.contains("All 2 files OK."));

    fs::write(tree.join("a.txt"), "corrupted").unwrap();
    let verify = run_binary(&home, &[tree_arg]);
    assert_eq!(verify.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&verify.stderr);
    assert!(stderr.contains(&format!("FAILED: {}", tree.join("a.txt").display())));
}

#[test]
fn test_binary_empty_tree() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    let tree = temp_dir.path().join("tree");
    fs::create_dir_all(tree.join("sub")).unwrap();
    let tree_arg = tree.to_str().unwrap();

    let verify = run_binary(&home, &[tree_arg]);
    assert_eq!(verify.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&verify.stdout).contains("No files checked."));

    let find = run_binary(&home, &["--find-missing", tree_arg]);
    assert_eq!(find.status.code(), Some(0));
    assert!(find.stdout.is_empty());
    assert!(find.stderr.is_empty());
}

#[test]
fn test_binary_find_missing_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    let tree = temp_dir.path().join("tree");
    write_files(&tree, &[("a.txt", "hi")]);

    let find = run_binary(&home, &["-m", tree.to_str().unwrap()]);
    assert_eq!(find.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&find.stderr);
    assert_eq!(
        stderr
            .lines()
            .filter(|line| line.starts_with("Missing manifest: "))
            .count(),
        1
    );
}

#[test]
fn test_binary_rejects_bad_directory_arguments() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    let file = temp_dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();

    let missing = run_binary(&home, &[temp_dir.path().join("nope").to_str().unwrap()]);
    assert_eq!(missing.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&missing.stderr).contains("No such directory"));

    let not_dir = run_binary(&home, &[file.to_str().unwrap()]);
    assert_eq!(not_dir.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&not_dir.stderr).contains("Not a directory"));
}

#[test]
fn test_binary_conflicting_flags_exit_one() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    let output = run_binary(
        &home,
        &["--generate", "--find-missing", temp_dir.path().to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join(MANIFEST_FILE_NAME).exists());
}

#[test]
fn test_binary_version_flag() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_binary(temp_dir.path(), &["--version"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_binary_uses_explicit_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    let tree = temp_dir.path().join("tree");
    write_files(&tree, &[("a.txt", "hi")]);
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[scan]\nchunk_size = 0\n").unwrap();

    let output = run_binary(
        &home,
        &["--config", config.to_str().unwrap(), tree.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid configuration"));
}
