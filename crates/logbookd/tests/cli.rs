//! Integration tests for the logbook CLI commands.
//!
//! Every test points `--config` into its own temporary directory so the
//! user's configuration is never read.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const FORM: &str = r#"
researcher_name = "A. Lee"
project_name = "P1"
join_date = "2024-01-01"
fill_date = "2024-06-01"

[[publications]]
author_names = "Lee, A."
title = "On Logbooks"
open_access_links = ["http://a", "http://b"]
"#;

// Helper function to create a clean command instance
fn logbook(dir: &Path) -> Command {
  let mut cmd = Command::cargo_bin("logbook").unwrap();
  cmd.arg("--config").arg(dir.join("config.toml")).arg("--accept-defaults");
  cmd
}

// Helper to write a form file into a fresh directory
fn form_dir(form: &str) -> (TempDir, PathBuf) {
  let dir = tempdir().unwrap();
  let form_path = dir.path().join("form.toml");
  std::fs::write(&form_path, form).unwrap();
  (dir, form_path)
}

#[test]
fn test_render_writes_both_files() {
  let (dir, form_path) = form_dir(FORM);
  let out = dir.path().join("out");

  logbook(dir.path())
    .arg("render")
    .arg(&form_path)
    .arg("--output")
    .arg(&out)
    .assert()
    .success()
    .stdout(predicate::str::contains("Loaded 1 publication(s) for A. Lee (P1)"))
    .stdout(predicate::str::contains("research_logbook.pdf (legacy layout)"));

  let document = std::fs::read(out.join("research_logbook.pdf")).unwrap();
  assert!(document.starts_with(b"%PDF-1.5"));
  let table = std::fs::read_to_string(out.join("research_logbook.csv")).unwrap();
  assert_eq!(table.lines().count(), 2);
  assert!(table.contains("http://a|http://b"));
}

#[test]
fn test_render_twice_overwrites() {
  let (dir, form_path) = form_dir(FORM);
  let out = dir.path().join("out");

  for _ in 0..2 {
    logbook(dir.path())
      .args(["render", "--layout", "flowing", "-o"])
      .arg(&out)
      .arg(&form_path)
      .assert()
      .success()
      .stdout(predicate::str::contains("flowing layout"));
  }
}

#[test]
fn test_render_rejects_unknown_layout() {
  let (dir, form_path) = form_dir(FORM);

  logbook(dir.path())
    .arg("render")
    .arg(&form_path)
    .args(["--layout", "grid"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Unknown layout style"));
}

#[test]
fn test_render_uses_config_output_dir() {
  let (dir, form_path) = form_dir(FORM);
  let out = dir.path().join("from-config");
  std::fs::write(
    dir.path().join("config.toml"),
    format!("output_dir = {:?}\ntable_name = \"lee.csv\"\n", out.display().to_string()),
  )
  .unwrap();

  logbook(dir.path()).arg("render").arg(&form_path).assert().success();

  assert!(out.join("research_logbook.pdf").exists());
  assert!(out.join("lee.csv").exists());
}

#[test]
fn test_check_reports_missing_field() {
  let (dir, form_path) = form_dir(&FORM.replace("researcher_name = \"A. Lee\"\n", ""));

  logbook(dir.path())
    .arg("check")
    .arg(&form_path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Researcher's Name is missing"));
}

#[test]
fn test_check_accepts_complete_form() {
  let (dir, form_path) = form_dir(FORM);

  logbook(dir.path())
    .arg("check")
    .arg(&form_path)
    .assert()
    .success()
    .stdout(predicate::str::contains("All required fields are filled in (1 publication(s))"));

  assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_inspect_prints_document_text() {
  let (dir, form_path) = form_dir(FORM);
  let out = dir.path().join("out");
  logbook(dir.path()).arg("render").arg(&form_path).arg("-o").arg(&out).assert().success();

  logbook(dir.path())
    .arg("inspect")
    .arg(out.join("research_logbook.pdf"))
    .assert()
    .success()
    .stdout(predicate::str::contains("Research Dissemination Metadata"))
    .stdout(predicate::str::contains("(100, 750) Research Logbook"))
    .stdout(predicate::str::contains("Publication 1"))
    .stdout(predicate::str::contains("http://b"));
}

#[test]
fn test_inspect_missing_file_fails() {
  let dir = tempdir().unwrap();

  logbook(dir.path())
    .arg("inspect")
    .arg(dir.path().join("nothing.pdf"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("✗"));
}

#[test]
fn test_init_writes_config() {
  let dir = tempdir().unwrap();

  logbook(dir.path())
    .arg("init")
    .assert()
    .success()
    .stdout(predicate::str::contains("Created logbook configuration"));

  let config = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
  assert!(config.contains("document_name = \"research_logbook.pdf\""));
  assert!(config.contains("layout = \"legacy\""));
}
