use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/files")
}

fn rebalance(output_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("coe5-rebalance").unwrap();
    cmd.arg("--data-dir").arg(data_dir()).arg("--output-dir").arg(output_dir).arg("--no-color");
    cmd
}

#[test]
fn flat_default_output_name() {
    let dir = tempfile::tempdir().unwrap();
    rebalance(dir.path())
        .args(["flat", "62.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 6 rituals with costs"))
        .stdout(predicate::str::contains(
            "Successfully generated mod with 6 ritual cost modifications at 62.5% of original",
        ))
        .stdout(predicate::str::contains("1. Copy 'ritual_costs_62pct.c5m' to your CoE5 mods folder"));

    let text = read_to_string(dir.path().join("ritual_costs_62pct.c5m")).unwrap();
    assert!(text.contains("selectritual \"Test Ritual\"\ncost 0 63  # 63 Gold (was 100)\n"));
}

#[test]
fn flat_custom_output_name() {
    let dir = tempfile::tempdir().unwrap();
    rebalance(dir.path()).args(["flat", "150", "expensive.c5m"]).assert().success();
    let text = read_to_string(dir.path().join("expensive.c5m")).unwrap();
    assert!(text.contains("cost 0 150  # 150 Gold (was 100)\n"));
}

#[test]
fn flat_rejects_bad_percentages() {
    let dir = tempfile::tempdir().unwrap();
    rebalance(dir.path())
        .args(["flat", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'lots' is not a valid percentage"));
    rebalance(dir.path())
        .args(["flat", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Percentage must be greater than 0"));
    rebalance(dir.path())
        .args(["flat", "-20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Percentage must be greater than 0"));
}

#[test]
fn tiered_run() {
    let dir = tempfile::tempdir().unwrap();
    rebalance(dir.path())
        .arg("tiered")
        .arg(data_dir().join("tiered.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 ritual power types"))
        .stdout(predicate::str::contains("Found 3 monsters with spawn traits"))
        .stdout(predicate::str::contains("Using base mod: base_mod.c5m"))
        .stdout(predicate::str::contains("  Modified: 4 rituals\n  Skipped (100%): 2 rituals"))
        .stdout(predicate::str::contains("  Modified: 3 monsters\n  Spawn modifier: 50%"))
        .stderr(predicate::str::contains("undefined tier `B`"));

    let text = read_to_string(dir.path().join("tiered_ritual_costs.c5m")).unwrap();
    assert!(text.contains("# SPAWN RATE MODIFICATIONS"));
}

#[test]
fn tiered_missing_base_mod() {
    let dir = tempfile::tempdir().unwrap();
    rebalance(dir.path())
        .arg("tiered")
        .arg(data_dir().join("missing_base.json"))
        .arg("doubled.c5m")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Base mod 'no_such_mod.c5m' not found at"))
        .stdout(predicate::str::contains("Found 3 monsters").not())
        .stderr(predicate::str::contains("missing-base-mod"));
    assert!(dir.path().join("doubled.c5m").is_file());
}

#[test]
fn tiered_json_reports() {
    let dir = tempfile::tempdir().unwrap();
    rebalance(dir.path())
        .arg("--json")
        .arg("tiered")
        .arg(data_dir().join("missing_base.json"))
        .assert()
        .success()
        .stderr(predicate::str::starts_with("["))
        .stderr(predicate::str::contains("\"key\": \"missing-base-mod\""));
}

#[test]
fn tiered_bad_config() {
    let dir = tempfile::tempdir().unwrap();
    rebalance(dir.path())
        .arg("tiered")
        .arg(data_dir().join("invalid.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in config file"));
    rebalance(dir.path())
        .arg("tiered")
        .arg(data_dir().join("zero.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be greater than 0"));
    rebalance(dir.path())
        .args(["tiered", "nowhere.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file 'nowhere.json' not found"));
}

#[test]
fn missing_ritual_data() {
    let dir = tempfile::tempdir().unwrap();
    rebalance(dir.path())
        .args(["--ritual-data", "Ritual Data v9.99.c5m", "list-ritpows"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find"))
        .stderr(predicate::str::contains("Ritual Data v9.99.c5m"));
}

#[test]
fn list_ritpows() {
    let dir = tempfile::tempdir().unwrap();
    rebalance(dir.path())
        .arg("list-ritpows")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Ritual Power Types:\n==================================================\n  \
             3: Lore of the Dead\n  7: Druid\n  12: Demonology\n",
        ));
}

#[test]
fn generate_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("balance.json");
    rebalance(dir.path())
        .arg("generate-config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated config template:"))
        .stdout(predicate::str::contains("balance_reference.txt"));

    let reference = read_to_string(dir.path().join("balance_reference.txt")).unwrap();
    assert!(reference.ends_with("3: Lore of the Dead\n7: Druid\n12: Demonology\n"));

    // The template changes nothing.
    rebalance(dir.path())
        .arg("tiered")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("  Modified: 0 rituals\n  Skipped (100%): 6 rituals"));
}
