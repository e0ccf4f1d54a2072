use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn comptab_cmd() -> Command {
    Command::cargo_bin("comptab").unwrap()
}

fn git(root: &Path, args: &[&str]) -> bool {
    std::process::Command::new("git")
        .env_remove("GIT_DIR")
        .env_remove("GIT_WORK_TREE")
        .arg("-C")
        .arg(root)
        .args(args)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Lay out the standard fixture: a `src` root with one module directory.
/// Returns the path of the scan root.
fn scenario_tree(base: &Path) -> std::path::PathBuf {
    let root = base.join("src");
    fs::create_dir_all(root.join("moduleA")).unwrap();
    fs::write(root.join("moduleA/Foo.cls"), "line\n".repeat(10)).unwrap();
    fs::write(root.join("moduleA/Foo.cls-meta.xml"), "line\n".repeat(5)).unwrap();
    fs::write(root.join("moduleA/bar.txt"), "line\n".repeat(3)).unwrap();
    root
}

#[test]
fn scenario_detailed_table_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let root = scenario_tree(dir.path());

    comptab_cmd()
        .arg("--no-git")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "| State | Module | Type | Name | Line Count | Path |",
        ))
        .stdout(predicate::str::contains(
            "|  | moduleA | ApexClass | Foo | 10 | moduleA/Foo.cls |",
        ))
        .stdout(predicate::str::contains(
            "|  | moduleA | ApexClass | Foo | 5 | moduleA/Foo.cls-meta.xml |",
        ))
        .stdout(predicate::str::contains(
            "|  | moduleA | txt | bar.txt | 3 | moduleA/bar.txt |",
        ))
        .stdout(predicate::str::contains("Summary table written to "));
}

#[test]
fn scenario_summary_report_written_to_sibling_docs() {
    let dir = tempfile::tempdir().unwrap();
    let root = scenario_tree(dir.path());

    comptab_cmd().arg("--no-git").arg(&root).assert().success();

    let report = dir.path().join("docs/component-table-summary.md");
    let content = fs::read_to_string(&report).unwrap();
    assert!(content.starts_with("# Component Table Summary\n"));
    assert!(content.contains("Each cell shows: LINE COUNT / FILE COUNT"));
    assert!(content.contains("| ApexClass | 15 / 2 | **15 / 2** |"));
    assert!(content.contains("| txt | 3 / 1 | **3 / 1** |"));
    assert!(content.contains("| **TOTAL** | **18 / 3** | **18 / 3** |"));
}

#[test]
fn extensionless_file_in_detailed_but_not_summary() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("src");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("README"), "hello\nworld\n").unwrap();

    comptab_cmd()
        .arg("--no-git")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("|  | - |  | README | 2 | README |"));

    let content = fs::read_to_string(dir.path().join("docs/component-table-summary.md")).unwrap();
    assert!(!content.contains("README"));
    assert!(content.contains("| **TOTAL** | **0 / 0** |"));
}

#[test]
fn empty_directory_yields_header_only_tables() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("src");
    fs::create_dir_all(&root).unwrap();

    comptab_cmd()
        .arg("--no-git")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "| State | Module | Type | Name | Line Count | Path |",
        ));

    let content = fs::read_to_string(dir.path().join("docs/component-table-summary.md")).unwrap();
    assert!(content.contains("| Component Type | Summary |"));
    assert!(content.contains("| **TOTAL** | **0 / 0** |"));
}

#[test]
fn scan_is_idempotent_without_git() {
    let dir = tempfile::tempdir().unwrap();
    let root = scenario_tree(dir.path());

    let first = comptab_cmd()
        .arg("--no-git")
        .arg(&root)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report = dir.path().join("docs/component-table-summary.md");
    let first_report = fs::read_to_string(&report).unwrap();

    let second = comptab_cmd()
        .arg("--no-git")
        .arg(&root)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second_report = fs::read_to_string(&report).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_report, second_report);
}

#[test]
fn staged_files_annotate_as_created_and_no_git_suppresses() {
    if !git_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let root = scenario_tree(dir.path());
    assert!(git(&root, &["init", "-q"]));
    assert!(git(&root, &["add", "."]));

    comptab_cmd()
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "| Created | moduleA | ApexClass | Foo | 10 | moduleA/Foo.cls |",
        ))
        .stdout(predicate::str::contains(
            "| Created | moduleA | txt | bar.txt | 3 | moduleA/bar.txt |",
        ));

    comptab_cmd()
        .arg("--no-git")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").not())
        .stdout(predicate::str::contains(
            "|  | moduleA | ApexClass | Foo | 10 | moduleA/Foo.cls |",
        ));
}

#[test]
fn missing_directory_is_a_usage_error() {
    comptab_cmd()
        .arg("--no-git")
        .arg("/nonexistent/comptab-integration")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn missing_argument_prints_usage() {
    comptab_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn verbose_diagnostics_go_to_stderr_only() {
    let dir = tempfile::tempdir().unwrap();
    let root = scenario_tree(dir.path());

    comptab_cmd()
        .arg("--no-git")
        .arg("--verbose")
        .arg(&root)
        .assert()
        .success()
        .stderr(predicate::str::contains("[DEBUG"))
        .stderr(predicate::str::contains("Found 3 files"))
        .stdout(predicate::str::contains("[DEBUG").not());
}
