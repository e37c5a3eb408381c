use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn slip(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("slip").unwrap();
    cmd.env("SLIP_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("SLIP_LOG")
        .env_remove("EDITOR")
        .env_remove("VISUAL");
    cmd
}

#[test]
fn first_run_seeds_welcome_slip() {
    let temp_dir = tempfile::tempdir().unwrap();

    slip(temp_dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Slip"));

    assert!(temp_dir.path().join("notes.json").exists());
}

#[test]
fn seeding_can_be_turned_off() {
    let temp_dir = tempfile::tempdir().unwrap();

    slip(temp_dir.path())
        .args(["config", "seed-welcome", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed-welcome set to false"));

    slip(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No slips found."));
}

#[test]
fn create_list_and_view() {
    let temp_dir = tempfile::tempdir().unwrap();

    slip(temp_dir.path())
        .args(["create", "Groceries", "- eggs\n- milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slip created: Groceries"));

    slip(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Groceries eggs milk"))
        .stdout(predicate::str::contains("2. Welcome to Slip"));

    slip(temp_dir.path())
        .args(["view", "1", "--markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("- eggs\n\n- milk"));

    slip(temp_dir.path())
        .args(["view", "groceries", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Groceries</h1>"))
        .stdout(predicate::str::contains("<ul>"))
        .stdout(predicate::str::contains("eggs"));
}

#[test]
fn default_view_comes_from_config() {
    let temp_dir = tempfile::tempdir().unwrap();

    slip(temp_dir.path())
        .args(["config", "default-view", "rich"])
        .assert()
        .success();

    slip(temp_dir.path())
        .args(["v", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"doc\""))
        .stdout(predicate::str::contains("\"bulletList\""));
}

#[test]
fn rename_pin_and_delete() {
    let temp_dir = tempfile::tempdir().unwrap();

    slip(temp_dir.path())
        .args(["n", "Draft"])
        .assert()
        .success();

    slip(temp_dir.path())
        .args(["rename", "1", "Final"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slip renamed (1): Draft -> Final"));

    slip(temp_dir.path())
        .args(["pin", "1"])
        .assert()
        .success();

    slip(temp_dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("p1. Final"));

    slip(temp_dir.path())
        .args(["rm", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slip deleted (p1): Final"));

    slip(temp_dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Final").not());
}

#[test]
fn export_markdown_and_tree() {
    let temp_dir = tempfile::tempdir().unwrap();

    slip(temp_dir.path())
        .args(["create", "Trip", "## Packing\n- passport"])
        .assert()
        .success();

    slip(temp_dir.path())
        .args(["export", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "# Trip\n\n## Packing\n\n- passport",
        ));

    let out = temp_dir.path().join("trip.json");
    slip(temp_dir.path())
        .args(["export", "1", "--format", "tree", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 slip to"));

    let json = std::fs::read_to_string(&out).unwrap();
    assert!(json.contains("\"heading\""));
    assert!(json.contains("\"passport\""));
}

#[test]
fn import_markdown_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("reading.md");
    std::fs::write(&file, "# Reading list\n\n1. Dune\n2. Solaris\n").unwrap();

    slip(temp_dir.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Slip imported: Reading list"));

    slip(temp_dir.path())
        .args(["stats", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading list: 4 words"));
}

#[test]
fn home_headline_counts_slips() {
    let temp_dir = tempfile::tempdir().unwrap();

    slip(temp_dir.path())
        .args(["create", "One"])
        .assert()
        .success();
    slip(temp_dir.path())
        .args(["pin", "1"])
        .assert()
        .success();

    slip(temp_dir.path())
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("You have 2 Slips • 1 pinned"))
        .stdout(predicate::str::contains("Today: 2 slips updated"));
}

#[test]
fn config_get_and_reject_unknown_key() {
    let temp_dir = tempfile::tempdir().unwrap();

    slip(temp_dir.path())
        .args(["config", "debounce-ms", "120"])
        .assert()
        .success();

    slip(temp_dir.path())
        .args(["config", "debounce-ms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("120"));

    slip(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("editor-ext = .md"));

    slip(temp_dir.path())
        .args(["config", "colour", "blue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("colour"));
}

#[test]
fn unknown_index_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    slip(temp_dir.path())
        .args(["view", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn edit_without_changes_is_a_no_op() {
    let temp_dir = tempfile::tempdir().unwrap();

    slip(temp_dir.path())
        .args(["create", "Groceries", "eggs"])
        .assert()
        .success();

    slip(temp_dir.path())
        .env("EDITOR", "true")
        .args(["edit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes to Groceries"));
}

#[cfg(unix)]
#[test]
fn edit_applies_editor_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = temp_dir.path().join("fake-editor.sh");
    std::fs::write(
        &script,
        "#!/bin/sh\nprintf '# Shopping\\n\\n- eggs\\n- bread\\n' > \"$1\"\n",
    )
    .unwrap();

    slip(temp_dir.path())
        .args(["create", "Groceries", "eggs"])
        .assert()
        .success();

    slip(temp_dir.path())
        .env("EDITOR", format!("sh {}", script.display()))
        .args(["edit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slip updated (1): Shopping"));

    slip(temp_dir.path())
        .args(["view", "1", "--markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- eggs\n\n- bread"));
}
