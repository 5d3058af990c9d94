//! Command-line binary tests
//!
//! Runs the built `universal-release` executable over the fixture ontologies
//! and checks what it leaves on stdout and on disk.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use universal_release::ReleaseConfig;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_universal-release"))
        .args(args)
        .env_remove("UNIVERSAL_RELEASE_CONFIG")
        .output()
        .unwrap()
}

fn build_args(out: &Path) -> Vec<String> {
    vec![
        "build".to_string(),
        "--legacy".to_string(),
        fixture("gaming_ontology_v1.ttl").display().to_string(),
        "--human-behavior".to_string(),
        fixture("human_behavior_foundation.ttl").display().to_string(),
        "--gaming".to_string(),
        fixture("gaming_foundation_v1.ttl").display().to_string(),
        "--out".to_string(),
        out.display().to_string(),
    ]
}

#[test]
fn test_stats_json_is_the_only_stdout() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("release.ttl");
    let mut args = build_args(&out);
    args.push("--stats-json".to_string());

    let output = run(&args.iter().map(String::as_str).collect::<Vec<_>>());
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["legacy_terms_total"], 10);
    assert_eq!(stats["legacy_terms_absorbed"], 8);
    assert_eq!(stats["legacy_terms_skipped_testish"], 2);
    assert!(stats["triples_out"].as_u64().unwrap() > 0);

    // Progress logging goes to stderr
    assert!(String::from_utf8_lossy(&output.stderr).contains("Release assembled"));
    assert!(out.exists());
}

#[test]
fn test_verbose_logging_stays_off_stdout() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("release.nt");
    let mut args = build_args(&out);
    args.push("-v".to_string());

    let output = run(&args.iter().map(String::as_str).collect::<Vec<_>>());
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Wrote:\n"));
    assert!(stdout.contains(&out.display().to_string()));
    assert!(!stdout.contains("DEBUG"));
}

#[test]
fn test_failed_build_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("release.ttl");
    let mut args = build_args(&out);
    args[2] = dir.path().join("missing.ttl").display().to_string();

    let output = run(&args.iter().map(String::as_str).collect::<Vec<_>>());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: release build failed"));
    assert!(!out.exists());
}

#[test]
fn test_config_prints_yaml() {
    let output = run(&["config"]);
    assert!(output.status.success());

    let config: ReleaseConfig = serde_yaml::from_slice(&output.stdout).unwrap();
    assert_eq!(config, ReleaseConfig::default());
}
