#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default shared password (the compiled-in fallback used when no config
/// file exists, which is the case in the test environment).
pub const PASSWORD: &str = "csc2026";

pub fn cha() -> Command {
    cargo_bin_cmd!("chamados")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_chamados.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB schema for a test database.
pub fn init_db(db_path: &str) {
    cha()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Register one ticket through the CLI.
pub fn add_ticket(db_path: &str, id: &str, date: &str, arrival: &str, done: &str) {
    cha()
        .args([
            "--db", db_path, "--password", PASSWORD, "add", id, "--date", date, "--arrival",
            arrival, "--done", done,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests:
/// - CH-1001: 3 hours, within SLA
/// - CH-1002: 5 hours, breached, no complementary ticket (ALERT)
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_ticket(db_path, "CH-1001", "01/09/2025", "09:00", "12:00");
    add_ticket(db_path, "CH-1002", "02/09/2025", "08:00", "13:00");
}
