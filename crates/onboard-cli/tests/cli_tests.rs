use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const VALID_RECORD: &str = r##"{
    "fullName": "Jane Doe",
    "businessName": "Doe Bakes",
    "email": "jane@x.com",
    "phone": "555-0100",
    "location": "NY",
    "businessType": "Restaurant",
    "websiteStyle": "Modern",
    "layoutPreference": "Single Page",
    "features": ["Home Page"],
    "hasWebsite": "No",
    "budget": "Under $1,000",
    "timeline": "Flexible",
    "description": "A simple site"
}"##;

const SESSION_SCRIPT: &str = "\
set fullName Jane Doe
set businessName Doe Bakes
set email jane@x.com
set phone 555-0100
set location NY
set businessType Other
set otherBusinessType Bakery
next
set websiteStyle modern
set layoutPreference multi-page
toggle Contact Form
next
set hasWebsite yes
set currentUrl https://doe.example
set budget $3,000 - $5,000
set timeline 1-3 months
set description Online ordering
next
show
next
quit
";

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn onboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("onboard").expect("Failed to find onboard binary");
    cmd.arg("--no-color");
    cmd
}

fn write_record(dir: &Path, content: &str) -> String {
    let path = dir.join("record.json");
    fs::write(&path, content).expect("Failed to write record");
    path.to_str().unwrap().to_string()
}

fn outbox_files(dir: &Path) -> Vec<std::path::PathBuf> {
    match fs::read_dir(dir) {
        Ok(entries) => entries.map(|entry| entry.unwrap().path()).collect(),
        Err(_) => Vec::new(),
    }
}

#[test]
fn test_cli_session_submits_to_outbox() {
    let temp_dir = create_cli_test_environment();
    let outbox = temp_dir.path().join("outbox");

    onboard_cmd()
        .args(["--outbox-dir", outbox.to_str().unwrap(), "start"])
        .write_stdin(SESSION_SCRIPT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 of 4: Basic Info"))
        .stdout(predicate::str::contains("Step 4 of 4: Review"))
        .stdout(predicate::str::contains("- **Industry**: Bakery"))
        .stdout(predicate::str::contains("- **Features Needed**: Contact Form"))
        .stdout(predicate::str::contains("Submission Successful!"))
        .stdout(predicate::str::contains("Thank you, Jane."));

    let files = outbox_files(&outbox);
    assert_eq!(files.len(), 1);
    let content = fs::read_to_string(&files[0]).unwrap();
    assert!(content.contains("\"businessName\": \"Doe Bakes\""));
    assert!(content.contains("\"layoutPreference\": \"Multi-Page\""));
    assert!(content.contains("Type: Other (Bakery)"));
}

#[test]
fn test_cli_session_is_default_command() {
    let temp_dir = create_cli_test_environment();
    let outbox = temp_dir.path().join("outbox");

    onboard_cmd()
        .args(["--outbox-dir", outbox.to_str().unwrap()])
        .write_stdin("next\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Project Onboarding"))
        .stdout(predicate::str::contains("Error: Please fix the highlighted fields"))
        .stdout(predicate::str::contains("Full name is required"))
        .stdout(predicate::str::contains("Valid email is required"));

    assert!(outbox_files(&outbox).is_empty());
}

#[test]
fn test_cli_session_reports_bad_commands() {
    let temp_dir = create_cli_test_environment();
    let outbox = temp_dir.path().join("outbox");

    onboard_cmd()
        .args(["--outbox-dir", outbox.to_str().unwrap(), "start"])
        .write_stdin("dance\nset nickname Jay\nset budget a lot\nsubmit\nhelp\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: dance"))
        .stdout(predicate::str::contains("Unknown field 'nickname'"))
        .stdout(predicate::str::contains("Invalid value for field 'budget'"))
        .stdout(predicate::str::contains("Complete the remaining steps"))
        .stdout(predicate::str::contains("## Commands"));
}

#[test]
fn test_cli_session_failed_delivery() {
    let temp_dir = create_cli_test_environment();
    let blocked = temp_dir.path().join("blocked");
    fs::write(&blocked, "not a directory").unwrap();

    let script = SESSION_SCRIPT.replace("show\nnext\nquit\n", "submit\nback\ncancel\nquit\n");
    onboard_cmd()
        .args(["--outbox-dir", blocked.to_str().unwrap(), "start"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Submission Failed"))
        .stdout(predicate::str::contains("Use `retry` or `cancel` first"))
        .stdout(predicate::str::contains("Returned to the form"));
}

#[test]
fn test_cli_validate_valid_record() {
    let temp_dir = create_cli_test_environment();
    let file = write_record(temp_dir.path(), VALID_RECORD);

    onboard_cmd()
        .args(["validate", "--file", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record is valid"));
}

#[test]
fn test_cli_validate_invalid_record() {
    let temp_dir = create_cli_test_environment();
    let file = write_record(
        temp_dir.path(),
        r#"{"fullName": "Jane", "email": "not-an-email", "hasWebsite": "Yes"}"#,
    );

    onboard_cmd()
        .args(["validate", "--file", &file])
        .assert()
        .failure()
        .stdout(predicate::str::contains("## Validation Errors"))
        .stdout(predicate::str::contains("Valid email is required"))
        .stdout(predicate::str::contains("Please provide your current URL"))
        .stdout(predicate::str::contains("Full name is required").not())
        .stderr(predicate::str::contains("invalid field(s)"));
}

#[test]
fn test_cli_validate_missing_file() {
    let temp_dir = create_cli_test_environment();
    let missing = temp_dir.path().join("missing.json");

    onboard_cmd()
        .args(["validate", "--file", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read record file"));
}

#[test]
fn test_cli_submit_file_to_outbox() {
    let temp_dir = create_cli_test_environment();
    let outbox = temp_dir.path().join("outbox");
    let file = write_record(temp_dir.path(), VALID_RECORD);

    onboard_cmd()
        .args(["--outbox-dir", outbox.to_str().unwrap(), "submit", "--file", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Submission Successful!"));

    assert_eq!(outbox_files(&outbox).len(), 1);
}

#[test]
fn test_cli_submit_invalid_file_is_refused() {
    let temp_dir = create_cli_test_environment();
    let outbox = temp_dir.path().join("outbox");
    let file = write_record(temp_dir.path(), r#"{"fullName": "Jane"}"#);

    onboard_cmd()
        .args(["--outbox-dir", outbox.to_str().unwrap(), "submit", "--file", &file])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Please select a budget range"));

    assert!(outbox_files(&outbox).is_empty());
}

#[test]
fn test_cli_submit_failure_exits_non_zero() {
    let temp_dir = create_cli_test_environment();
    let blocked = temp_dir.path().join("blocked");
    fs::write(&blocked, "not a directory").unwrap();
    let file = write_record(temp_dir.path(), VALID_RECORD);

    onboard_cmd()
        .args(["--outbox-dir", blocked.to_str().unwrap(), "submit", "--file", &file])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Submission Failed"))
        .stderr(predicate::str::contains("Submission failed"));
}

#[test]
fn test_cli_options_all() {
    onboard_cmd()
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("### businessType"))
        .stdout(predicate::str::contains("- Roofing"))
        .stdout(predicate::str::contains("### timeline"))
        .stdout(predicate::str::contains("- As soon as possible"));
}

#[test]
fn test_cli_options_single_list() {
    onboard_cmd()
        .args(["options", "website_style"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### websiteStyle"))
        .stdout(predicate::str::contains("- Elegant"))
        .stdout(predicate::str::contains("### budget").not());
}

#[test]
fn test_cli_options_free_text_field() {
    onboard_cmd()
        .args(["options", "email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no fixed choices"));
}

#[test]
fn test_cli_outbox_conflicts_with_simulate() {
    onboard_cmd()
        .args(["--simulate", "--outbox-dir", "/tmp/outbox", "options"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_cli_help_output() {
    onboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project onboarding wizard"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("--outbox-dir"));
}

#[test]
fn test_cli_version_output() {
    onboard_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("onboard"));
}
