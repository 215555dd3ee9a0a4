//! Runs the `hacheck` binary against package directories on disk.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const GOOD: &str = r#"
automation:
  - id: hall_motion
    alias: Hall motion light
    trigger:
      - platform: state
        entity_id: binary_sensor.hall_motion
    action:
      - action: light.turn_on
        target:
          entity_id: light.hall
"#;

const DUPLICATE: &str = r#"
automation:
  - id: hall_motion
    alias: Copy of hall motion
    triggers: []
    actions: []
"#;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, contents).expect("write");
}

fn hacheck(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hacheck"))
        .current_dir(cwd)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run hacheck")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn default_packages_dir_passes() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "packages/hall.yaml", GOOD);

    let output = hacheck(dir.path(), &[]);
    let text = stdout(&output);
    assert_eq!(output.status.code(), Some(0), "{text}");
    assert!(text.contains("checked 1 file(s)"));
    assert!(text.ends_with("RESULT: PASSED\n"));
}

#[test]
fn duplicate_ids_fail_the_run() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "packages/hall.yaml", GOOD);
    write(dir.path(), "packages/rooms/copy.yaml", DUPLICATE);

    let output = hacheck(dir.path(), &[]);
    let text = stdout(&output);
    assert_eq!(output.status.code(), Some(1), "{text}");
    assert!(text.contains("duplicate automation id 'hall_motion' in: hall.yaml, rooms/copy.yaml"));
    assert!(text.ends_with("RESULT: FAILED\n"));
}

#[test]
fn no_files_is_not_a_failure() {
    let dir = TempDir::new().expect("tempdir");
    let output = hacheck(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "no files found\n");
}

#[test]
fn json_output_and_entity_listing() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "conf/hall.yaml", GOOD);

    let output = hacheck(dir.path(), &["-d", "conf", "--format", "json"]);
    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(report["files_checked"], 1);
    assert_eq!(
        report["entities_by_file"]["hall.yaml"],
        serde_json::json!(["binary_sensor.hall_motion", "light.hall"])
    );

    let listed = stdout(&hacheck(dir.path(), &["-d", "conf", "--list-entities"]));
    assert!(listed.contains("    light.hall  [hall.yaml]\n"));
}

#[test]
fn missing_explicit_file_is_an_error_issue() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "hall.yaml", GOOD);

    let output = hacheck(dir.path(), &["hall.yaml", "gone.yaml"]);
    let text = stdout(&output);
    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("ERROR   gone.yaml: file not found"));
}

#[test]
fn config_file_and_flags() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "packages/odd.yaml", "my_integration: {}\nautomaton: []\n");
    write(dir.path(), "hacheck.toml", "extra_package_domains = [\"my_integration\"]\n");

    let text = stdout(&hacheck(dir.path(), &[]));
    assert!(text.contains("WARNINGS (1)"));
    assert!(!text.contains("'my_integration'"));

    let quiet = stdout(&hacheck(dir.path(), &["--no-domain-warnings"]));
    assert!(!quiet.contains("WARNINGS"));
}

#[test]
fn broken_config_is_a_usage_error() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "bad.toml", "no_such_option = 1\n");

    let output = hacheck(dir.path(), &["--config", "bad.toml"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid config"));
}
