//! Tests for error handling, exit codes, and suggestions.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn garden_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("garden").unwrap();
    cmd.env_remove("GARDEN_DIR")
        .env_remove("RUST_LOG")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

#[test]
fn test_missing_garden_exits_not_found_with_suggestions() {
    let temp = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    garden_cmd(home.path())
        .current_dir(temp.path())
        .arg("grow")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no garden directory found"))
        .stderr(predicate::str::contains("Suggestions"))
        .stderr(predicate::str::contains("--garden-dir"));
}

#[test]
fn test_unmatched_plant_selection_exits_not_found() {
    let temp = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    write(
        &temp.path().join(".garden/map.yml"),
        "plants:\n  api:\n    path: plot/api\n    seed: s\n",
    );

    garden_cmd(home.path())
        .current_dir(temp.path())
        .args(["grow", "--plant", "nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--plant 'nope'"))
        .stderr(predicate::str::contains("garden view"));
}

#[test]
fn test_broken_map_exits_configuration_error() {
    let temp = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    write(
        &temp.path().join(".garden/map.yml"),
        "plants:\n  - this\n  - is\n  - a sequence\n",
    );

    garden_cmd(home.path())
        .current_dir(temp.path())
        .arg("view")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("failed to parse garden map"))
        .stderr(predicate::str::contains("map.yml"));
}

#[test]
fn test_missing_seed_exits_not_found() {
    let temp = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    write(
        &temp.path().join(".garden/map.yml"),
        "plants:\n  api:\n    path: plot/api\n    seed: ghost\n",
    );

    garden_cmd(home.path())
        .current_dir(temp.path())
        .arg("grow")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no seed directory found"))
        .stderr(predicate::str::contains("ghost"));
}

#[test]
fn test_template_fault_exits_user_error_and_names_the_variable() {
    let temp = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    let garden = temp.path().join(".garden");
    write(
        &garden.join("map.yml"),
        "plants:\n  api:\n    path: plot/api\n    seed: service\n",
    );
    write(
        &garden.join("seeds/service/app.conf.template"),
        "value = {{ var(name=\"GONE\") }}\n",
    );

    garden_cmd(home.path())
        .current_dir(temp.path())
        .arg("grow")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to evaluate template file"))
        .stderr(predicate::str::contains("GONE"));

    // The failed plant never reached its destination.
    assert!(!temp.path().join("plot/api").exists());
}

#[test]
fn test_verbose_error_report_shows_the_cause_chain() {
    let temp = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    let garden = temp.path().join(".garden");
    write(
        &garden.join("map.yml"),
        "plants:\n  api:\n    path: plot/api\n    seed: service\n",
    );
    write(
        &garden.join("seeds/service/app.conf.template"),
        "value = {{ var(name=\"GONE\") }}\n",
    );

    garden_cmd(home.path())
        .current_dir(temp.path())
        .args(["-v", "grow"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "no value found for variable 'GONE'",
        ));
}

#[cfg(unix)]
#[test]
fn test_failing_reap_command_aborts_the_run() {
    let temp = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    let garden = temp.path().join(".garden");
    write(
        &garden.join("map.yml"),
        "plants:\n  api:\n    path: plot/api\n  web:\n    path: plot/web\n",
    );

    garden_cmd(home.path())
        .current_dir(temp.path())
        .args(["reap", "--", "sh", "-c", "printf 'x' >> reaped.txt; exit 7"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("plant 'api' failed"))
        .stderr(predicate::str::contains("exited with status 7"));

    // Only `api` ran; the failure stopped the run before `web`.
    let log = fs::read_to_string(temp.path().join("reaped.txt")).unwrap();
    assert_eq!(log, "x");
}

#[test]
fn test_reap_without_a_command_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    write(
        &temp.path().join(".garden/map.yml"),
        "plants:\n  api:\n    path: plot/api\n",
    );

    garden_cmd(home.path())
        .current_dir(temp.path())
        .arg("reap")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("COMMAND"));
}

#[test]
fn test_unknown_subcommand_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    garden_cmd(home.path())
        .arg("prune")
        .assert()
        .code(2);
}

#[test]
fn test_missing_explicit_config_file_exits_configuration_error() {
    let temp = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    garden_cmd(home.path())
        .current_dir(temp.path())
        .args(["--config", "absent.toml", "view"])
        .assert()
        .code(4);
}
