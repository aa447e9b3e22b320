//! Integration tests for the `tk` CLI.
//!
//! Each test points `tk` at a temp data directory via `-C` and verifies
//! stdout, exit status, and/or the files the store writes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the built `tk` binary.
fn tk_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tk");
    path
}

/// Run `tk -C <dir>` with the given args, returning (stdout, stderr, success).
fn run_tk(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(tk_bin())
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .expect("failed to run tk");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `tk` expecting success, return stdout.
fn run_tk_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_tk(dir, args);
    if !success {
        panic!(
            "tk {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

/// Add a task and return the id echoed back by the CLI.
fn add_task(dir: &Path, args: &[&str]) -> i64 {
    let mut full = vec!["add"];
    full.extend_from_slice(args);
    let stdout = run_tk_ok(dir, &full);
    stdout
        .trim()
        .strip_prefix("added ")
        .expect("add output")
        .parse()
        .expect("added id")
}

/// Clear the seeded sample tasks so a test starts from an empty list.
fn clear_seeds(dir: &Path) {
    let stdout = run_tk_ok(dir, &["--json", "list"]);
    let list: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    for task in list["tasks"].as_array().unwrap() {
        let id = task["id"].as_i64().unwrap().to_string();
        run_tk_ok(dir, &["rm", &id]);
    }
}

/// Write a handcrafted snapshot, as a prior run of the app would have.
fn write_snapshot(dir: &Path, json: &str) {
    fs::write(dir.join("tasks.json"), json).unwrap();
}

// ---------------------------------------------------------------------------
// First-run seeding
// ---------------------------------------------------------------------------

#[test]
fn test_first_run_seeds_two_tasks() {
    let dir = TempDir::new().unwrap();
    let stdout = run_tk_ok(dir.path(), &["--json", "list"]);
    let list: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(list["tasks"].as_array().unwrap().len(), 2);
    assert!(stdout.contains("Welcome to tick"));
}

#[test]
fn test_seeding_never_overwrites_an_existing_snapshot() {
    let dir = TempDir::new().unwrap();
    clear_seeds(dir.path());

    // The snapshot now exists (empty); the seeds must not come back
    let stdout = run_tk_ok(dir.path(), &["list"]);
    assert!(stdout.contains("no tasks"));
}

// ---------------------------------------------------------------------------
// Add / toggle / remove
// ---------------------------------------------------------------------------

#[test]
fn test_add_and_list() {
    let dir = TempDir::new().unwrap();
    clear_seeds(dir.path());

    let id = add_task(
        dir.path(),
        &["Buy milk", "--due", "2025-06-01", "--priority", "high"],
    );
    assert!(id > 0);

    let stdout = run_tk_ok(dir.path(), &["list"]);
    assert!(stdout.contains("[ ]"));
    assert!(stdout.contains("Buy milk"));
    assert!(stdout.contains("high"));
    assert!(stdout.contains("@2025-06-01"));
}

#[test]
fn test_add_rejects_blank_title() {
    let dir = TempDir::new().unwrap();
    clear_seeds(dir.path());

    let (_, stderr, success) = run_tk(dir.path(), &["add", "   "]);
    assert!(!success);
    assert!(stderr.contains("task title cannot be empty"));

    let stdout = run_tk_ok(dir.path(), &["list"]);
    assert!(stdout.contains("no tasks"));
}

#[test]
fn test_add_rejects_unknown_priority() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, success) = run_tk(dir.path(), &["add", "x", "--priority", "urgent"]);
    assert!(!success);
    assert!(stderr.contains("unknown priority"));
}

#[test]
fn test_toggle_flips_and_flips_back() {
    let dir = TempDir::new().unwrap();
    clear_seeds(dir.path());
    let id = add_task(dir.path(), &["flip me"]);
    let id = id.to_string();

    let stdout = run_tk_ok(dir.path(), &["toggle", &id]);
    assert!(stdout.contains("[x]"));

    let stdout = run_tk_ok(dir.path(), &["toggle", &id]);
    assert!(stdout.contains("[ ]"));
}

#[test]
fn test_toggle_unknown_id_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let stdout = run_tk_ok(dir.path(), &["toggle", "424242"]);
    assert!(stdout.contains("no task with id 424242"));
}

#[test]
fn test_rm_removes_and_unknown_id_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    clear_seeds(dir.path());
    let id = add_task(dir.path(), &["short lived"]);

    let stdout = run_tk_ok(dir.path(), &["rm", &id.to_string()]);
    assert!(stdout.contains("removed"));

    let stdout = run_tk_ok(dir.path(), &["rm", "424242"]);
    assert!(stdout.contains("no task with id 424242"));

    let stdout = run_tk_ok(dir.path(), &["list"]);
    assert!(stdout.contains("no tasks"));
}

// ---------------------------------------------------------------------------
// Filters, sort, search
// ---------------------------------------------------------------------------

#[test]
fn test_status_filter_narrows_the_listing() {
    let dir = TempDir::new().unwrap();
    clear_seeds(dir.path());
    let a = add_task(dir.path(), &["open task"]);
    let b = add_task(dir.path(), &["done task"]);
    let _ = a;
    run_tk_ok(dir.path(), &["toggle", &b.to_string()]);

    run_tk_ok(dir.path(), &["filter", "status", "completed"]);
    let stdout = run_tk_ok(dir.path(), &["list"]);
    assert!(stdout.contains("done task"));
    assert!(!stdout.contains("open task"));

    run_tk_ok(dir.path(), &["filter", "status", "active"]);
    let stdout = run_tk_ok(dir.path(), &["list"]);
    assert!(stdout.contains("open task"));
    assert!(!stdout.contains("done task"));
}

#[test]
fn test_priority_filter_toggles_off_on_reselect() {
    let dir = TempDir::new().unwrap();

    let stdout = run_tk_ok(dir.path(), &["filter", "priority", "high"]);
    assert!(stdout.contains("priority: high"));

    let stdout = run_tk_ok(dir.path(), &["filter", "priority", "high"]);
    assert!(stdout.contains("priority: none"));
}

#[test]
fn test_filters_compose_with_and_semantics() {
    let dir = TempDir::new().unwrap();
    clear_seeds(dir.path());
    let milk = add_task(dir.path(), &["Buy milk", "--priority", "high"]);
    let _ = milk;
    let frother = add_task(dir.path(), &["Buy milk frother", "--priority", "high"]);
    add_task(dir.path(), &["Buy bread", "--priority", "high"]);
    add_task(dir.path(), &["Spill milk", "--priority", "low"]);
    run_tk_ok(dir.path(), &["toggle", &frother.to_string()]);

    run_tk_ok(dir.path(), &["filter", "status", "active"]);
    run_tk_ok(dir.path(), &["filter", "priority", "high"]);

    let stdout = run_tk_ok(dir.path(), &["--json", "search", "milk"]);
    let list: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let titles: Vec<&str> = list["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Buy milk"]);
}

#[test]
fn test_sort_modes_order_the_listing() {
    let dir = TempDir::new().unwrap();
    write_snapshot(
        dir.path(),
        r#"{
  "tasks": [
    {"id": 1000, "title": "early-high", "completed": false, "priority": "high", "dateCreated": 1000},
    {"id": 2000, "title": "late-low", "completed": false, "priority": "low", "dateCreated": 2000}
  ],
  "filters": {"status": "all", "priority": null},
  "sortBy": "custom"
}"#,
    );

    run_tk_ok(dir.path(), &["sort", "created"]);
    let stdout = run_tk_ok(dir.path(), &["list"]);
    assert!(stdout.find("late-low").unwrap() < stdout.find("early-high").unwrap());

    run_tk_ok(dir.path(), &["sort", "priority"]);
    let stdout = run_tk_ok(dir.path(), &["list"]);
    assert!(stdout.find("early-high").unwrap() < stdout.find("late-low").unwrap());

    run_tk_ok(dir.path(), &["sort", "custom"]);
    let stdout = run_tk_ok(dir.path(), &["list"]);
    assert!(stdout.find("early-high").unwrap() < stdout.find("late-low").unwrap());
}

#[test]
fn test_sort_mode_persists_across_invocations() {
    let dir = TempDir::new().unwrap();
    run_tk_ok(dir.path(), &["sort", "priority"]);

    let stdout = run_tk_ok(dir.path(), &["--json", "list"]);
    let list: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(list["sortBy"], "priority");
}

#[test]
fn test_unknown_sort_mode_fails() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, success) = run_tk(dir.path(), &["sort", "newest"]);
    assert!(!success);
    assert!(stderr.contains("unknown sort mode"));
}

#[test]
fn test_search_is_case_insensitive_and_transient() {
    let dir = TempDir::new().unwrap();
    clear_seeds(dir.path());
    add_task(dir.path(), &["Buy MILK"]);
    add_task(dir.path(), &["water plants"]);

    let stdout = run_tk_ok(dir.path(), &["search", "milk"]);
    assert!(stdout.contains("Buy MILK"));
    assert!(!stdout.contains("water plants"));

    // The query is never persisted: a plain list shows everything again
    let stdout = run_tk_ok(dir.path(), &["list"]);
    assert!(stdout.contains("Buy MILK"));
    assert!(stdout.contains("water plants"));
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[test]
fn test_theme_defaults_to_light_and_persists() {
    let dir = TempDir::new().unwrap();

    let stdout = run_tk_ok(dir.path(), &["theme"]);
    assert_eq!(stdout.trim(), "theme: light");

    run_tk_ok(dir.path(), &["theme", "dark"]);
    // Stored as a raw string under its own key, separate from the snapshot
    let raw = fs::read_to_string(dir.path().join("theme")).unwrap();
    assert_eq!(raw, "dark");

    let stdout = run_tk_ok(dir.path(), &["theme", "toggle"]);
    assert_eq!(stdout.trim(), "theme: light");

    let stdout = run_tk_ok(dir.path(), &["--json", "theme"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["theme"], "light");
}

#[test]
fn test_unknown_theme_fails() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, success) = run_tk(dir.path(), &["theme", "solarized"]);
    assert!(!success);
    assert!(stderr.contains("unknown theme"));
}

// ---------------------------------------------------------------------------
// JSON output and data directory resolution
// ---------------------------------------------------------------------------

#[test]
fn test_json_list_shape_matches_the_wire_format() {
    let dir = TempDir::new().unwrap();
    clear_seeds(dir.path());
    add_task(
        dir.path(),
        &["Buy milk", "--due", "friday", "--priority", "medium"],
    );

    let stdout = run_tk_ok(dir.path(), &["--json", "list"]);
    let list: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let task = &list["tasks"][0];
    assert!(task["id"].is_i64());
    assert_eq!(task["title"], "Buy milk");
    assert_eq!(task["completed"], false);
    assert_eq!(task["priority"], "medium");
    assert_eq!(task["dueDate"], "friday");
    assert!(task["dateCreated"].is_i64());
    assert_eq!(list["filters"]["status"], "all");
    assert_eq!(list["filters"]["priority"], serde_json::Value::Null);
    assert_eq!(list["sortBy"], "custom");
}

#[test]
fn test_data_dirs_are_isolated() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    clear_seeds(dir_a.path());
    clear_seeds(dir_b.path());

    add_task(dir_a.path(), &["only in a"]);

    let stdout = run_tk_ok(dir_b.path(), &["list"]);
    assert!(!stdout.contains("only in a"));
}

#[test]
fn test_tick_home_env_selects_the_data_dir() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(tk_bin())
        .env("TICK_HOME", dir.path())
        .args(["--json", "list"])
        .output()
        .expect("failed to run tk");
    assert!(output.status.success());

    // The seeds landed in TICK_HOME
    assert!(dir.path().join("tasks.json").exists());
}
