//! Smoke tests for command wiring and end-to-end client flows

use std::net::SocketAddr;
use std::path::Path;
use std::sync::{mpsc, Arc};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use notectl_core::MemoryStore;
use notectl_server::{build_router, AppState, ServerConfig};

/// Start a server on an ephemeral port in a background thread
fn spawn_server() -> String {
    let (tx, rx) = mpsc::channel::<SocketAddr>();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();

            let app = build_router(
                AppState::new(Arc::new(MemoryStore::new())),
                &ServerConfig::default(),
            );
            axum::serve(listener, app).await.unwrap();
        });
    });

    format!("http://{}", rx.recv().unwrap())
}

fn notectl(temp: &TempDir, endpoint: &str) -> Command {
    let mut cmd = Command::cargo_bin("notectl").unwrap();
    cmd.env("NOTECTL_CONFIG", temp.path().join("missing-config.toml"))
        .env("NOTECTL_DRAFT", temp.path().join("draft.json"))
        .env("NOTECTL_SERVER", endpoint)
        .env_remove("RUST_LOG");
    cmd
}

// === Help Tests ===

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("notectl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

#[test]
fn test_import_help() {
    let mut cmd = Command::cargo_bin("notectl").unwrap();
    cmd.arg("import").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("becomes the title"));
}

#[test]
fn test_draft_help() {
    let mut cmd = Command::cargo_bin("notectl").unwrap();
    cmd.arg("draft").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Create a note from the draft"));
}

#[test]
fn test_show_rejects_non_numeric_id() {
    let mut cmd = Command::cargo_bin("notectl").unwrap();
    cmd.arg("show").arg("abc");

    cmd.assert().failure();
}

// === Draft Tests (no server needed) ===

#[test]
fn test_draft_set_show_clear() {
    let temp = TempDir::new().unwrap();

    notectl(&temp, "http://127.0.0.1:9")
        .args(["draft", "set", "--title", "Ideas", "-m", "ship it"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft updated: Ideas"));

    notectl(&temp, "http://127.0.0.1:9")
        .args(["draft", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"content\": \"ship it\""));

    notectl(&temp, "http://127.0.0.1:9")
        .args(["draft", "clear"])
        .assert()
        .success();

    notectl(&temp, "http://127.0.0.1:9")
        .args(["draft", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Untitled Note"));
}

#[test]
fn test_draft_save_without_draft_fails() {
    let temp = TempDir::new().unwrap();

    notectl(&temp, "http://127.0.0.1:9")
        .args(["draft", "save"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No draft to save"));
}

// === End-to-end against a live server ===

#[test]
fn test_create_list_update_delete() {
    let endpoint = spawn_server();
    let temp = TempDir::new().unwrap();

    notectl(&temp, &endpoint)
        .args(["create", "--title", "A", "-m", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created note 1: A"));

    notectl(&temp, &endpoint)
        .args(["update", "1", "--title", "A2", "-m", "z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated note 1: A2"));

    notectl(&temp, &endpoint)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A2").and(predicate::str::contains("ago")));

    notectl(&temp, &endpoint)
        .args(["delete", "1"])
        .assert()
        .success();

    notectl(&temp, &endpoint)
        .args(["show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found"));

    // Deleting again is not an error
    notectl(&temp, &endpoint)
        .args(["delete", "1"])
        .assert()
        .success();
}

#[test]
fn test_update_missing_note_fails() {
    let endpoint = spawn_server();
    let temp = TempDir::new().unwrap();

    notectl(&temp, &endpoint)
        .args(["update", "999", "--title", "t", "-m", "c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("404"));
}

#[test]
fn test_import_then_export() {
    let endpoint = spawn_server();
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("plan.txt");
    std::fs::write(&source, "step one\nstep two\n").unwrap();

    notectl(&temp, &endpoint)
        .arg("import")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported note 1: plan"));

    let out_dir = temp.path().join("out");
    std::fs::create_dir(&out_dir).unwrap();

    notectl(&temp, &endpoint)
        .args(["export", "1", "--dir"])
        .arg(&out_dir)
        .assert()
        .success();

    let exported = out_dir.join("plan.txt");
    assert!(Path::new(&exported).exists());
    assert_eq!(std::fs::read_to_string(exported).unwrap(), "step one\nstep two\n");
}

#[test]
fn test_draft_save_creates_note_and_clears() {
    let endpoint = spawn_server();
    let temp = TempDir::new().unwrap();

    notectl(&temp, &endpoint)
        .args(["draft", "set", "-m", "rough idea"])
        .assert()
        .success();

    notectl(&temp, &endpoint)
        .args(["draft", "save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved draft as note 1: Untitled Note"));

    assert!(!temp.path().join("draft.json").exists());

    notectl(&temp, &endpoint)
        .args(["show", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rough idea"));
}

#[test]
fn test_draft_save_with_id_updates_existing_note() {
    let endpoint = spawn_server();
    let temp = TempDir::new().unwrap();

    notectl(&temp, &endpoint)
        .args(["create", "--title", "Plan", "-m", "v1"])
        .assert()
        .success();

    notectl(&temp, &endpoint)
        .args(["draft", "set", "--title", "Plan", "-m", "v2"])
        .assert()
        .success();

    notectl(&temp, &endpoint)
        .args(["draft", "save", "--id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated note 1: Plan"));

    assert!(!temp.path().join("draft.json").exists());

    notectl(&temp, &endpoint)
        .args(["show", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v2"));

    // Still a single note: the save went to the existing id
    notectl(&temp, &endpoint)
        .args(["show", "2"])
        .assert()
        .failure();
}

#[test]
fn test_draft_save_with_missing_id_keeps_draft() {
    let endpoint = spawn_server();
    let temp = TempDir::new().unwrap();

    notectl(&temp, &endpoint)
        .args(["draft", "set", "-m", "orphan"])
        .assert()
        .success();

    notectl(&temp, &endpoint)
        .args(["draft", "save", "--id", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("404"));

    assert!(temp.path().join("draft.json").exists());
}
