use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cutgen() -> Command {
    Command::cargo_bin("diamond-cutgen").unwrap()
}

#[test]
fn writes_script_and_reports_path() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("Up.s.sol");

    cutgen()
        .arg("tests/upgrade_cut.json")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully wrote script to"))
        .stdout(predicate::str::contains("Up.s.sol"));

    let script = std::fs::read_to_string(&output).unwrap();
    assert!(script.contains(r#"string memory path = "tests/upgrade_cut.json";"#));
}

#[test]
fn default_output_is_relative_to_working_dir() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cut.json");
    std::fs::write(&input, r#"{"returns":{"cut":{"value":"[]"}}}"#).unwrap();

    cutgen().current_dir(dir.path()).arg(&input).assert().success();

    assert!(
        dir.path()
            .join("script/deployment/S03UpgradeDiamond.s.sol")
            .exists()
    );
}

#[test]
fn parse_failure_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cut.json");
    let output = dir.path().join("Up.s.sol");
    std::fs::write(&input, r#"{"returns":{"cut":{"value":"[(0xABC, 3, [])]"}}}"#).unwrap();

    cutgen()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown action ordinal `3`"));

    assert!(!output.exists());
}

#[test]
fn missing_input_exits_non_zero() {
    cutgen()
        .arg("tests/no_such_file.json")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: Loading tests/no_such_file.json"));
}
