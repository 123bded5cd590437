use predicates::str::contains;
use std::fs;

mod common;
use common::{PASSWORD, add_ticket, cha, init_db, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_all", "csv");

    cha()
        .args([
            "--db", &db_path, "--password", PASSWORD, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("ticket_id,date,"));
    assert!(content.contains("CH-1001"));
    assert!(content.contains("CH-1002"));
    // derived columns included in the export contract
    assert!(content.contains("total_hours"));
    assert!(content.contains("5:00:00"));
    // visual status is display-only and never exported
    assert!(!content.contains("ALERT"));
}

#[test]
fn test_export_json_all() {
    let db_path = setup_test_db("export_json_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_all", "json");

    cha()
        .args([
            "--db", &db_path, "--password", PASSWORD, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"ticket_id\": \"CH-1001\""));
    assert!(content.contains("\"sla_breach\": \"YES\""));
}

#[test]
fn test_export_xlsx_writes_a_workbook() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_data(&db_path);

    let out = temp_out("export_xlsx", "xlsx");

    cha()
        .args([
            "--db", &db_path, "--password", PASSWORD, "export", "--format", "xlsx", "--file", &out,
        ])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_alerts_only() {
    let db_path = setup_test_db("export_alerts_only");
    init_db_with_data(&db_path);

    let out = temp_out("export_alerts_only", "csv");

    cha()
        .args([
            "--db",
            &db_path,
            "--password",
            PASSWORD,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--alerts",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("CH-1002"));
    assert!(!content.contains("CH-1001"));
}

#[test]
fn test_export_refuses_relative_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    cha()
        .args([
            "--db",
            &db_path,
            "--password",
            PASSWORD,
            "export",
            "--format",
            "csv",
            "--file",
            "out.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_import_round_trip_preserves_raw_fields() {
    let db_path = setup_test_db("round_trip");
    init_db(&db_path);
    add_ticket(&db_path, "CH-5001", "01/09/2025", "09:00", "12:00");

    // a richer record: breached, complementary opened, notes and analyst
    cha()
        .args([
            "--db",
            &db_path,
            "--password",
            PASSWORD,
            "add",
            "CH-5002",
            "--date",
            "02/09/2025",
            "--sched",
            "07:30",
            "--arrival",
            "08:00",
            "--done",
            "13:30",
            "--compl",
            "YES",
            "--compl-id",
            "CH-5002-C",
            "--analyst",
            "Marcos",
            "--notes",
            "replaced the card reader, long queue on site",
            "--project",
            "Ambev",
        ])
        .assert()
        .success();

    let first = temp_out("round_trip_first", "csv");
    cha()
        .args([
            "--db", &db_path, "--password", PASSWORD, "export", "--format", "csv", "--file",
            &first,
        ])
        .assert()
        .success();

    cha()
        .args([
            "--db", &db_path, "--password", PASSWORD, "import", "--file", &first, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Imported 2 tickets"));

    let second = temp_out("round_trip_second", "csv");
    cha()
        .args([
            "--db", &db_path, "--password", PASSWORD, "export", "--format", "csv", "--file",
            &second,
        ])
        .assert()
        .success();

    let a = fs::read_to_string(&first).expect("read first export");
    let b = fs::read_to_string(&second).expect("read second export");
    assert_eq!(a, b);
}

#[test]
fn test_import_rejects_duplicate_ids_in_file() {
    let db_path = setup_test_db("import_dup");
    init_db(&db_path);

    let input = temp_out("import_dup", "csv");
    fs::write(
        &input,
        "ticket_id,date,scheduled,arrival,completion,compl_opened,compl_id,analyst,notes,project\n\
         CH-1,01/09/2025,,09:00,12:00,NO,,,,Outros\n\
         CH-1,02/09/2025,,09:00,12:00,NO,,,,Outros\n",
    )
    .expect("write import file");

    cha()
        .args([
            "--db", &db_path, "--password", PASSWORD, "import", "--file", &input, "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("duplicate ticket ID"));
}

#[test]
fn test_import_accepts_files_without_derived_columns() {
    let db_path = setup_test_db("import_raw_only");
    init_db(&db_path);

    let input = temp_out("import_raw_only", "csv");
    fs::write(
        &input,
        "ticket_id,date,scheduled,arrival,completion,compl_opened,compl_id,analyst,notes,project\n\
         CH-7001,01/09/2025,,09:00,14:30,NO,,Ana,,Rumo\n",
    )
    .expect("write import file");

    cha()
        .args([
            "--db", &db_path, "--password", PASSWORD, "import", "--file", &input, "--force",
        ])
        .assert()
        .success();

    cha()
        .args(["--db", &db_path, "--password", PASSWORD, "list"])
        .assert()
        .success()
        .stdout(contains("CH-7001"))
        .stdout(contains("5:30:00"))
        .stdout(contains("ALERT"));
}

#[test]
fn test_export_empty_view_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);

    let out = temp_out("export_empty", "csv");

    cha()
        .args([
            "--db", &db_path, "--password", PASSWORD, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("No tickets to export"));

    assert!(!std::path::Path::new(&out).exists());
}
