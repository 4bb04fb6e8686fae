//! End-to-end tests for the hydrate binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn hydrate() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("hydrate").unwrap();
    cmd.env_remove("HYDRATE_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_types_lists_sample_catalog() {
    hydrate()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("DefaultOnlyConstructorClass"))
        .stdout(predicate::str::contains("ParamOnlyConstructorClass"))
        .stdout(predicate::str::contains("DefaultAndParamConstructorClass"));
}

#[test]
fn test_types_json() {
    let output = hydrate().args(["types", "-o", "json"]).output().unwrap();
    assert!(output.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listing.as_array().unwrap().len(), 3);
}

#[test]
fn test_run_with_table_file() {
    let dir = TempDir::new().unwrap();
    let table = dir.path().join("record.txt");
    fs::write(
        &table,
        "| Field | Value |\n| PrivateSetProp | asd |\n| InitProp | zxc |\n| FullProp | vbn |\n",
    )
    .unwrap();

    hydrate()
        .args(["run", "--type", "DefaultOnlyConstructorClass"])
        .args(["--policy", "default-then-accessible-setters"])
        .arg("--table")
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::contains("PrivateSetProp: asd"))
        .stdout(predicate::str::contains("InitProp setter calls: 1"))
        .stdout(predicate::str::contains("GetOnlyProp setter calls: 0"));
}

#[test]
fn test_run_with_json_record() {
    let dir = TempDir::new().unwrap();
    let record = dir.path().join("record.json");
    fs::write(
        &record,
        r#"{"GetOnlyProp": "asd", "PrivateSetProp": "qwe", "InitProp": "zxc", "FullProp": "vbn"}"#,
    )
    .unwrap();

    let output = hydrate()
        .args(["run", "--type", "DefaultAndParamConstructorClass", "-o", "json"])
        .args(["--policy", "prefer-parameterized-if-complete"])
        .arg("--record")
        .arg(&record)
        .output()
        .unwrap();
    assert!(output.status.success());

    let outcomes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let counters = &outcomes[0]["instance"]["counters"];
    assert_eq!(counters["param_ctor_calls"], 1);
    assert_eq!(counters["default_ctor_calls"], 0);
    assert_eq!(outcomes[0]["instance"]["values"]["GetOnlyProp"], "asd");
}

#[test]
fn test_matrix_json_has_one_failed_cell() {
    let output = hydrate().args(["matrix", "-o", "json"]).output().unwrap();
    assert!(output.status.success());

    let outcomes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let outcomes = outcomes.as_array().unwrap();
    assert_eq!(outcomes.len(), 12);

    let failed: Vec<_> = outcomes.iter().filter(|o| o.get("error").is_some()).collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0]["backend"], "document");
    assert_eq!(failed[0]["type_name"], "DefaultOnlyConstructorClass");
}

#[test]
fn test_unknown_type_fails() {
    hydrate()
        .args(["run", "--type", "Widget", "--policy", "synthetic-fill-all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Widget"));
}

#[test]
fn test_missing_policy_fails() {
    hydrate()
        .args(["run", "--type", "ParamOnlyConstructorClass"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No construction policy given"));
}

#[test]
fn test_config_supplies_policy_and_seed() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("hydrate.toml");
    fs::write(
        &config,
        "[defaults]\npolicy = \"synthetic-fill-all\"\nseed = 11\n",
    )
    .unwrap();

    let run = || {
        hydrate()
            .args(["run", "--type", "ParamOnlyConstructorClass"])
            .env("HYDRATE_CONFIG", &config)
            .output()
            .unwrap()
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8_lossy(&first.stdout).contains("param constructor calls: 1"));
}

#[test]
fn test_invalid_config_reports_path() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("hydrate.toml");
    fs::write(&config, "[defaults]\npolicy = \"reflection\"\n").unwrap();

    hydrate()
        .arg("types")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("hydrate.toml"));
}
