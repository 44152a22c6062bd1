use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn bolsillo_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bolsillo"))
}

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) {
    std::fs::write(dir.path().join(name), contents).expect("write budget file");
}

#[test]
fn missing_ledger_file_prints_an_error_and_exits_nonzero() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut cmd = bolsillo_cmd();
    cmd.arg("-d").arg(dir.path());
    cmd.args(["-m", "202105"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No budget file"));
}

#[test]
fn month_and_range_flags_conflict() {
    let mut cmd = bolsillo_cmd();
    cmd.args(["-m", "202105", "-r", "202105-202107"]);
    cmd.assert().failure();
}

#[test]
fn malformed_month_selector_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut cmd = bolsillo_cmd();
    cmd.arg("-d").arg(dir.path());
    cmd.args(["-m", "2021"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
fn descending_range_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut cmd = bolsillo_cmd();
    cmd.arg("-d").arg(dir.path());
    cmd.args(["-r", "202107-202105"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month range"));
}

#[test]
fn unparsable_total_line_is_reported_with_the_file_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(&dir, "202105.txt", "not-a-number\n5 sushi\n");

    let mut cmd = bolsillo_cmd();
    cmd.arg("-d").arg(dir.path());
    cmd.args(["-m", "202105"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid total line"))
        .stderr(predicate::str::contains("202105.txt"));
}

#[test]
fn bad_tag_line_in_the_tag_file_aborts_the_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(&dir, "202105.txt", "100\n5 sushi\n");
    write_file(&dir, "tags.txt", "food sushi\n");

    let mut cmd = bolsillo_cmd();
    cmd.arg("-d").arg(dir.path());
    cmd.args(["-m", "202105"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tag line"));
}

#[test]
fn bad_transaction_line_aborts_the_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(&dir, "202105.txt", "100\nfive sushi\n");

    let mut cmd = bolsillo_cmd();
    cmd.arg("-d").arg(dir.path());
    cmd.args(["-m", "202105"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transaction line"));
}

#[test]
fn data_directory_can_come_from_the_environment() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(&dir, "202105.txt", "100\n5 sushi\n");

    let mut cmd = bolsillo_cmd();
    cmd.env("BOLSILLO_DIR", dir.path());
    cmd.args(["-m", "202105"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("95.00"));
}
