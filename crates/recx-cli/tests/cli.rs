//! Command-level tests for the recx binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn write_receipt_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn extract_prints_json_records() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_receipt_file(
        &dir,
        "receipt.txt",
        "STARBUCKS\nDate: 01/02/2024\nTotal: ₹450.00\n",
    );

    Command::cargo_bin("recx")
        .unwrap()
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"vendor\": \"STARBUCKS\""))
        .stdout(predicate::str::contains("\"transaction_date\": \"2024-02-01\""))
        .stdout(predicate::str::contains("\"currency\": \"INR\""));
}

#[test]
fn extract_reads_stdin() {
    Command::cargo_bin("recx")
        .unwrap()
        .args(["extract", "-", "--format", "text"])
        .write_stdin("ZOMATO\nDate: 20/07/2025\nTotal: ₹99.00\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vendor:   ZOMATO"))
        .stdout(predicate::str::contains("Category: Food"));
}

#[test]
fn extract_fails_when_nothing_is_found() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_receipt_file(&dir, "noise.txt", "just some unstructured noise\n");

    Command::cargo_bin("recx")
        .unwrap()
        .arg("extract")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no structured receipt data found"));
}

#[test]
fn extract_rejects_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_receipt_file(&dir, "empty.txt", "   \n");

    Command::cargo_bin("recx")
        .unwrap()
        .arg("extract")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no usable text"));
}

#[test]
fn batch_processes_multiple_files() {
    let dir = tempfile::tempdir().unwrap();
    write_receipt_file(&dir, "a.txt", "CAFE ONE\nDate: 10/06/2025\nTotal: ₹120.00\n");
    write_receipt_file(&dir, "b.txt", "CAFE TWO\nDate: 11/06/2025\nTotal: ₹240.00\n");

    let out_dir = dir.path().join("out");
    let pattern = dir.path().join("*.txt");

    Command::cargo_bin("recx")
        .unwrap()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 receipt(s) extracted"));

    assert!(out_dir.join("a.json").exists());
    assert!(out_dir.join("b.json").exists());
}
