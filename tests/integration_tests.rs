use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{PASSWORD, add_ticket, cha, init_db, init_db_with_data, setup_test_db};

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("add_and_list");
    init_db_with_data(&db_path);

    cha()
        .args(["--db", &db_path, "--password", PASSWORD, "list"])
        .assert()
        .success()
        .stdout(contains("CH-1001"))
        .stdout(contains("CH-1002"))
        .stdout(contains("3:00:00"))
        .stdout(contains("5:00:00"))
        .stdout(contains("2 tickets (1 ALERT, 0 RESOLVED)"));
}

#[test]
fn test_wrong_password_is_rejected() {
    let db_path = setup_test_db("wrong_password");
    init_db(&db_path);

    cha()
        .args(["--db", &db_path, "--password", "nope", "list"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));
}

#[test]
fn test_duplicate_id_is_rejected_and_table_unchanged() {
    let db_path = setup_test_db("duplicate_id");
    init_db(&db_path);
    add_ticket(&db_path, "CH-2001", "01/09/2025", "09:00", "12:00");

    cha()
        .args([
            "--db",
            &db_path,
            "--password",
            PASSWORD,
            "add",
            "CH-2001",
            "--date",
            "02/09/2025",
            "--arrival",
            "10:00",
            "--done",
            "11:00",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    cha()
        .args(["--db", &db_path, "--password", PASSWORD, "list"])
        .assert()
        .success()
        .stdout(contains("1 tickets (0 ALERT, 0 RESOLVED)"));
}

#[test]
fn test_compl_yes_requires_compl_id() {
    let db_path = setup_test_db("compl_rule");
    init_db(&db_path);

    cha()
        .args([
            "--db",
            &db_path,
            "--password",
            PASSWORD,
            "add",
            "CH-2002",
            "--date",
            "01/09/2025",
            "--arrival",
            "09:00",
            "--done",
            "14:00",
            "--compl",
            "YES",
        ])
        .assert()
        .failure()
        .stderr(contains("complementary ticket ID is required"));
}

#[test]
fn test_missing_arrival_is_rejected() {
    let db_path = setup_test_db("missing_arrival");
    init_db(&db_path);

    cha()
        .args([
            "--db",
            &db_path,
            "--password",
            PASSWORD,
            "add",
            "CH-2003",
            "--date",
            "01/09/2025",
            "--done",
            "14:00",
        ])
        .assert()
        .failure()
        .stderr(contains("arrival time is required"));
}

#[test]
fn test_invalid_date_format_is_rejected() {
    let db_path = setup_test_db("invalid_date");
    init_db(&db_path);

    cha()
        .args([
            "--db",
            &db_path,
            "--password",
            PASSWORD,
            "add",
            "CH-2004",
            "--date",
            "2025-09-01",
            "--arrival",
            "09:00",
            "--done",
            "12:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_unknown_project_is_rejected() {
    let db_path = setup_test_db("unknown_project");
    init_db(&db_path);

    cha()
        .args([
            "--db",
            &db_path,
            "--password",
            PASSWORD,
            "add",
            "CH-2005",
            "--date",
            "01/09/2025",
            "--arrival",
            "09:00",
            "--done",
            "12:00",
            "--project",
            "Acme",
        ])
        .assert()
        .failure()
        .stderr(contains("Unknown project"));
}

#[test]
fn test_edit_completion_time_flips_status_to_alert() {
    let db_path = setup_test_db("edit_completion");
    init_db(&db_path);
    add_ticket(&db_path, "CH-3001", "01/09/2025", "09:00", "12:00");

    cha()
        .args([
            "--db", &db_path, "--password", PASSWORD, "edit", "CH-3001", "--done", "14:00",
        ])
        .assert()
        .success()
        .stdout(contains("5:00:00"))
        .stdout(contains("ALERT"));
}

#[test]
fn test_edit_opening_complementary_resolves_the_breach() {
    let db_path = setup_test_db("edit_compl");
    init_db(&db_path);
    add_ticket(&db_path, "CH-3002", "01/09/2025", "08:00", "13:00");

    cha()
        .args([
            "--db",
            &db_path,
            "--password",
            PASSWORD,
            "edit",
            "CH-3002",
            "--compl",
            "YES",
            "--compl-id",
            "CH-3002-C",
        ])
        .assert()
        .success()
        .stdout(contains("RESOLVED"));
}

#[test]
fn test_edit_unknown_ticket_fails() {
    let db_path = setup_test_db("edit_unknown");
    init_db(&db_path);

    cha()
        .args([
            "--db", &db_path, "--password", PASSWORD, "edit", "CH-9999", "--done", "15:00",
        ])
        .assert()
        .failure()
        .stderr(contains("No ticket found"));
}

#[test]
fn test_list_alerts_only() {
    let db_path = setup_test_db("list_alerts");
    init_db_with_data(&db_path);

    cha()
        .args(["--db", &db_path, "--password", PASSWORD, "list", "--alerts"])
        .assert()
        .success()
        .stdout(contains("CH-1002"))
        .stdout(predicates::str::is_match("CH-1001").expect("Invalid regex").not());
}

#[test]
fn test_list_single_id_match_prints_card() {
    let db_path = setup_test_db("list_card");
    init_db_with_data(&db_path);

    cha()
        .args([
            "--db", &db_path, "--password", PASSWORD, "list", "--id", "1002",
        ])
        .assert()
        .success()
        .stdout(contains("Ticket"))
        .stdout(contains("Duration:"))
        .stdout(contains("5:00:00"));
}

#[test]
fn test_dashboard_summary() {
    let db_path = setup_test_db("dashboard");
    init_db_with_data(&db_path);

    cha()
        .args(["--db", &db_path, "--password", PASSWORD, "dashboard"])
        .assert()
        .success()
        .stdout(contains("SLA performance"))
        .stdout(contains("Total tickets:"))
        .stdout(contains("Open alerts by analyst"))
        .stdout(contains("Not informed"));
}

#[test]
fn test_audit_log_records_operations() {
    let db_path = setup_test_db("audit_log");
    init_db(&db_path);
    add_ticket(&db_path, "CH-4001", "01/09/2025", "09:00", "12:00");

    cha()
        .args(["--db", &db_path, "--password", PASSWORD, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("[add]"))
        .stdout(contains("Ticket registered"));
}

#[test]
fn test_db_info() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    cha()
        .args(["--db", &db_path, "--password", PASSWORD, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total tickets:"))
        .stdout(contains("01/09/2025"));
}
