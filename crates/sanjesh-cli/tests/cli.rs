use assert_cmd::Command;
use serde_json::Value;

fn sanjesh(config_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sanjesh").unwrap();
    // Point at a config file that exists so the user's own config is never read.
    let config = config_dir.path().join("config.json");
    std::fs::write(&config, r#"{"config_version": 1, "log_level": "off"}"#).unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

fn write_answers(dir: &tempfile::TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("answers.json");
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn scores_an_answer_file() {
    let dir = tempfile::tempdir().unwrap();
    let answers = write_answers(
        &dir,
        r#"{"1": 3, "2": 1, "3": 3, "4": 1, "5": 1, "6": 3,
            "7": 1, "8": 3, "9": 3, "10": 1, "11": 3, "12": 1}"#,
    );

    let output = sanjesh(&dir)
        .args(["score", "adaptability", "--answers"])
        .arg(&answers)
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["totalScore"], 4.0);
    assert_eq!(result["cutoff"]["label"], "خوب");
    assert!(result.get("recommendedTests").is_none());
}

#[test]
fn labels_are_accepted_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let output = sanjesh(&dir)
        .args(["score", "curiosity"])
        .write_stdin(r#"{"1": "agree", "2": "strongly_agree", "3": 0}"#)
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    // Item 3 is reverse-keyed: option 0 → 1 → 5. (4 + 5 + 5) / 3.
    assert_eq!(result["subscales"]["joyous_exploration"], 4.67);
    assert_eq!(result["completeness"], 0.25);
}

#[test]
fn strict_flag_rejects_partial_answers() {
    let dir = tempfile::tempdir().unwrap();
    let answers = write_answers(&dir, r#"{"1": 3}"#);

    let output = sanjesh(&dir)
        .args(["score", "innovation", "--strict", "--answers"])
        .arg(&answers)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("insufficient data"));
}

#[test]
fn unknown_instrument_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = sanjesh(&dir)
        .args(["show", "astrology"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn list_and_validate_cover_all_instruments() {
    let dir = tempfile::tempdir().unwrap();
    let output = sanjesh(&dir).arg("list").output().unwrap();
    assert!(output.status.success());
    let list: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(list.as_array().map(Vec::len), Some(9));

    let output = sanjesh(&dir).arg("validate").output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "9 instruments OK");
}

#[test]
fn init_config_writes_a_loadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh").join("config.json");

    Command::cargo_bin("sanjesh")
        .unwrap()
        .arg("--config")
        .arg(&path)
        .arg("init-config")
        .assert()
        .success();

    let written = sanjesh_cli::config::load_config(Some(&path)).unwrap();
    assert_eq!(written.config_version, 1);
}

#[test]
fn negative_keys_and_options_are_skipped() {
    let instrument = sanjesh_instruments::get_instrument("adaptability").unwrap();
    let answers =
        sanjesh_cli::commands::parse_answers(instrument, r#"{"-1": 2, "1": 3, "2": -1}"#).unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers.get(1), Some(3));
}

#[test]
fn fractional_option_index_is_rejected() {
    let instrument = sanjesh_instruments::get_instrument("adaptability").unwrap();
    let err = sanjesh_cli::commands::parse_answers(instrument, r#"{"1": 2.5}"#).unwrap_err();
    let core = err
        .downcast_ref::<sanjesh_core::error::CoreError>()
        .expect("core error");
    assert!(matches!(
        core,
        sanjesh_core::error::CoreError::InvalidAnswer { ordinal: 1, .. }
    ));
}
