//! Integration tests for the foldercat binary


use std::fs;

use harness::{TestTree, catalog_body, run_foldercat};

#[test]
fn test_basic_catalog_output() {
    let tree = TestTree::named("Projects");
    tree.add_file("readme.txt", "hi");
    tree.add_file("docs/guide.pdf", "");

    let (stdout, _stderr, success) = run_foldercat(tree.path(), &["--no-save"]);
    assert!(success, "foldercat should succeed");
    assert!(stdout.starts_with("Catalog for: Projects\n"));
    assert_eq!(
        catalog_body(&stdout),
        "  readme.txt\n\ndocs/\n  guide.pdf\n\n"
    );
}

#[test]
fn test_catalog_saved_into_root() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "");

    let (stdout, stderr, success) = run_foldercat(tree.path(), &[]);
    assert!(success);
    let saved = fs::read_to_string(tree.path().join("folder_catalog.txt"))
        .expect("catalog file should be written");
    assert_eq!(saved, stdout, "saved file should match printed catalog");
    assert!(stderr.contains("saved to"), "should report save: {}", stderr);
}

#[test]
fn test_no_save_leaves_folder_untouched() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "");

    let (_stdout, _stderr, success) = run_foldercat(tree.path(), &["--no-save"]);
    assert!(success);
    assert!(!tree.path().join("folder_catalog.txt").exists());
}

#[test]
fn test_path_argument() {
    let tree = TestTree::new();
    tree.add_file("inner/deep/file.doc", "");

    let parent = tree.path().parent().unwrap();
    let (stdout, _stderr, success) = run_foldercat(parent, &["root/inner", "--no-save"]);
    assert!(success);
    assert!(stdout.starts_with("Catalog for: inner\n"));
    assert_eq!(catalog_body(&stdout), "deep/\n  file.doc\n\n");
}

#[test]
fn test_hidden_entries_excluded_by_default() {
    let tree = TestTree::new();
    tree.add_files(&[".secret", "visible.txt", ".config/settings.txt"]);

    let (stdout, _stderr, success) = run_foldercat(tree.path(), &["--no-save"]);
    assert!(success);
    assert!(stdout.contains("visible.txt"));
    assert!(!stdout.contains(".secret"), "hidden file listed: {}", stdout);
    assert!(!stdout.contains(".config"), "hidden dir listed: {}", stdout);
}

#[test]
fn test_all_flag_includes_hidden() {
    let tree = TestTree::new();
    tree.add_files(&[".secret", "visible.txt", ".config/settings.txt"]);

    let (stdout, _stderr, success) = run_foldercat(tree.path(), &["-a", "--no-save"]);
    assert!(success);
    assert!(stdout.contains("  .secret\n"));
    assert!(stdout.contains(".config/\n  settings.txt\n"));
}

#[test]
fn test_type_filter() {
    let tree = TestTree::new();
    tree.add_files(&["a.txt", "b.pdf", "C.TXT"]);

    let (stdout, _stderr, success) = run_foldercat(tree.path(), &["-t", ".txt", "--no-save"]);
    assert!(success);
    assert_eq!(catalog_body(&stdout), "  C.TXT\n  a.txt\n\n");

    let (stdout, _stderr, success) = run_foldercat(tree.path(), &["--type", "All", "--no-save"]);
    assert!(success);
    assert!(stdout.contains("a.txt"));
    assert!(stdout.contains("b.pdf"));
}

#[test]
fn test_invalid_type_is_rejected() {
    let tree = TestTree::new();
    let (_stdout, stderr, success) = run_foldercat(tree.path(), &["-t", "a/b"]);
    assert!(!success);
    assert!(stderr.contains("invalid file type selector"), "{}", stderr);
}

#[test]
fn test_empty_folder_reports_no_files() {
    let tree = TestTree::new();

    let (stdout, stderr, success) = run_foldercat(tree.path(), &[]);
    assert!(success);
    assert!(stdout.is_empty(), "nothing should be printed: {}", stdout);
    assert!(stderr.contains("No files found"), "{}", stderr);
    assert!(!tree.path().join("folder_catalog.txt").exists());
}

#[test]
fn test_filtered_to_nothing_reports_no_files() {
    let tree = TestTree::new();
    tree.add_file("a.pdf", "");

    let (_stdout, stderr, success) = run_foldercat(tree.path(), &["-t", "docx"]);
    assert!(success);
    assert!(stderr.contains("No files found"), "{}", stderr);
}

#[test]
fn test_missing_path_fails() {
    let tree = TestTree::new();
    let (_stdout, stderr, success) = run_foldercat(tree.path(), &["does-not-exist"]);
    assert!(!success);
    assert!(stderr.contains("cannot access 'does-not-exist'"), "{}", stderr);
}

#[test]
fn test_json_report() {
    let tree = TestTree::new();
    tree.add_files(&["a.txt", ".hidden", "sub/b.txt"]);

    let (stdout, _stderr, success) = run_foldercat(tree.path(), &["--json", "--no-save"]);
    assert!(success);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(report["root_name"], "root");
    assert_eq!(report["listed_files"], 2);
    assert_eq!(report["directories"], 1);
    assert_eq!(report["total_items"], 3);
    assert_eq!(report["processed_items"], 3);
    assert!(report["text"].as_str().unwrap().contains("sub/\n  b.txt\n"));
}

#[test]
fn test_output_is_stable_across_runs() {
    let tree = TestTree::new();
    tree.add_files(&["z.txt", "a/b/c.txt", "a/a.txt", "m.doc"]);

    let (first, _, _) = run_foldercat(tree.path(), &["--no-save"]);
    let (second, _, _) = run_foldercat(tree.path(), &["--no-save"]);
    assert_eq!(first, second);
}

#[test]
fn test_config_file_defaults() {
    let tree = TestTree::new();
    tree.add_files(&["a.txt", "b.pdf", ".hidden.pdf"]);
    let config = tree.path().parent().unwrap().join("foldercat.toml");
    fs::write(&config, "file_type = \".pdf\"\ninclude_hidden = true\nsave = false\n").unwrap();

    let config_arg = config.to_string_lossy().to_string();
    let (stdout, _stderr, success) = run_foldercat(tree.path(), &["--config", &config_arg]);
    assert!(success);
    assert_eq!(catalog_body(&stdout), "  .hidden.pdf\n  b.pdf\n\n");
    assert!(!tree.path().join("folder_catalog.txt").exists());

    // CLI flags win over the file
    let (stdout, _stderr, success) =
        run_foldercat(tree.path(), &["--config", &config_arg, "-t", "All"]);
    assert!(success);
    assert!(stdout.contains("a.txt"));
}

#[test]
fn test_bad_config_file_fails() {
    let tree = TestTree::new();
    let config = tree.path().parent().unwrap().join("broken.toml");
    fs::write(&config, "include_hidden = \"maybe\"\n").unwrap();

    let config_arg = config.to_string_lossy().to_string();
    let (_stdout, stderr, success) = run_foldercat(tree.path(), &["--config", &config_arg]);
    assert!(!success);
    assert!(stderr.contains("Failed to parse"), "{}", stderr);
}
