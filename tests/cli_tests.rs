use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_user, pc, setup_test_db, temp_bulk_file};

#[test]
fn punch_full_day_flow() {
    let db_path = setup_test_db("punch_full_day");
    init_db_with_user(&db_path, "alice");

    for kind in ["in", "lunch-out", "lunch-in", "out"] {
        pc()
            .args(["--db", &db_path, "--test", "--user", "alice", "punch", kind])
            .assert()
            .success()
            .stdout(contains("Punched"));
    }

    // the day is closed now
    pc()
        .args(["--db", &db_path, "--test", "--user", "alice", "punch", "in"])
        .assert()
        .failure()
        .stderr(contains("already finished"));
}

#[test]
fn first_punch_must_be_in() {
    let db_path = setup_test_db("punch_first_in");
    init_db_with_user(&db_path, "alice");

    pc()
        .args([
            "--db", &db_path, "--test", "--user", "alice", "punch", "lunch-out",
        ])
        .assert()
        .failure()
        .stderr(contains("first punch of the day must be IN"));
}

#[test]
fn illegal_transition_is_reported_with_both_types() {
    let db_path = setup_test_db("punch_bad_transition");
    init_db_with_user(&db_path, "alice");

    pc()
        .args(["--db", &db_path, "--test", "--user", "alice", "punch", "in"])
        .assert()
        .success();

    pc()
        .args([
            "--db", &db_path, "--test", "--user", "alice", "punch", "lunch-in",
        ])
        .assert()
        .failure()
        .stderr(contains("IN -> LUNCH_IN"));
}

#[test]
fn punch_rejects_unknown_kind_and_unknown_user() {
    let db_path = setup_test_db("punch_unknowns");
    init_db_with_user(&db_path, "alice");

    pc()
        .args(["--db", &db_path, "--test", "--user", "alice", "punch", "coffee"])
        .assert()
        .failure()
        .stderr(contains("Invalid punch type"));

    pc()
        .args(["--db", &db_path, "--test", "--user", "nobody", "punch", "in"])
        .assert()
        .failure()
        .stderr(contains("Unknown user"));
}

#[test]
fn dashboard_json_reflects_the_day() {
    let db_path = setup_test_db("dashboard_json");
    init_db_with_user(&db_path, "alice");

    pc()
        .args(["--db", &db_path, "--test", "--user", "alice", "dashboard", "--json"])
        .assert()
        .success()
        .stdout(contains("\"not_started\""));

    pc()
        .args(["--db", &db_path, "--test", "--user", "alice", "punch", "in"])
        .assert()
        .success();

    pc()
        .args(["--db", &db_path, "--test", "--user", "alice", "dashboard", "--json"])
        .assert()
        .success()
        .stdout(contains("\"working\""))
        .stdout(contains("\"expected_total\": 480"));
}

#[test]
fn history_lists_todays_punches() {
    let db_path = setup_test_db("history_today");
    init_db_with_user(&db_path, "alice");

    pc()
        .args(["--db", &db_path, "--test", "--user", "alice", "punch", "in"])
        .assert()
        .success();

    pc()
        .args(["--db", &db_path, "--test", "--user", "alice", "history"])
        .assert()
        .success()
        .stdout(contains("IN"))
        .stdout(contains("Page 1/1 (1 punches)"));
}

#[test]
fn schedule_add_defaults_and_duplicate() {
    let db_path = setup_test_db("schedule_add_dup");
    init_db_with_user(&db_path, "alice");

    pc()
        .args([
            "--db", &db_path, "--test", "--user", "alice", "schedule", "add", "2025-06-02",
        ])
        .assert()
        .success()
        .stdout(contains("08:00-17:00"))
        .stdout(contains("lunch 12:00-13:00"));

    pc()
        .args([
            "--db", &db_path, "--test", "--user", "alice", "schedule", "add", "2025-06-02",
            "--start", "09:00", "--end", "18:00",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn schedule_add_rejects_bad_windows() {
    let db_path = setup_test_db("schedule_bad_window");
    init_db_with_user(&db_path, "alice");

    pc()
        .args([
            "--db", &db_path, "--test", "--user", "alice", "schedule", "add", "2025-06-02",
            "--start", "22:00", "--end", "06:00",
        ])
        .assert()
        .failure()
        .stderr(contains("start time must be earlier than end time"));

    pc()
        .args([
            "--db", &db_path, "--test", "--user", "alice", "schedule", "add", "2025-06-03",
            "--start", "08:00", "--end", "17:00", "--lunch-start", "07:00", "--lunch-end", "13:00",
        ])
        .assert()
        .failure()
        .stderr(contains("lunch window"));
}

#[test]
fn schedule_list_and_delete() {
    let db_path = setup_test_db("schedule_list_del");
    init_db_with_user(&db_path, "alice");

    pc()
        .args([
            "--db", &db_path, "--test", "--user", "alice", "schedule", "add", "2025-06-02",
        ])
        .assert()
        .success();

    // pick the id straight from the table, as the CLI prints it colored
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let id: String = conn
        .query_row("SELECT id FROM schedules LIMIT 1", [], |row| row.get(0))
        .expect("schedule id");

    pc()
        .args(["--db", &db_path, "--test", "--user", "alice", "schedule", "list"])
        .assert()
        .success()
        .stdout(contains("2025-06-02"))
        .stdout(contains(id.clone()));

    pc()
        .args(["--db", &db_path, "--test", "schedule", "del", &id])
        .assert()
        .success()
        .stdout(contains("deleted"));

    pc()
        .args(["--db", &db_path, "--test", "--user", "alice", "schedule", "list"])
        .assert()
        .success()
        .stdout(contains("2025-06-02").not());
}

#[test]
fn schedule_bulk_from_json_file() {
    let db_path = setup_test_db("schedule_bulk");
    init_db_with_user(&db_path, "alice");

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let alice_id: String = conn
        .query_row("SELECT id FROM users WHERE name = 'alice'", [], |row| {
            row.get(0)
        })
        .expect("user id");

    let bulk = format!(
        r#"[
  {{"user_id": "{id}", "date": "2025-06-02", "start_time": "08:00", "end_time": "17:00",
    "lunch_start": "12:00", "lunch_end": "13:00"}},
  {{"user_id": "{id}", "date": "2025-06-03", "start_time": "08:00", "end_time": "17:00"}}
]"#,
        id = alice_id
    );
    let file = temp_bulk_file("schedule_bulk", &bulk);

    pc()
        .args(["--db", &db_path, "--test", "schedule", "bulk", &file])
        .assert()
        .success()
        .stdout(contains("Created 2 schedule(s), skipped 0 existing."));

    // re-running the same file only skips
    pc()
        .args(["--db", &db_path, "--test", "schedule", "bulk", &file])
        .assert()
        .success()
        .stdout(contains("Created 0 schedule(s), skipped 2 existing."));
}

#[test]
fn schedule_bulk_fails_on_unknown_user() {
    let db_path = setup_test_db("schedule_bulk_unknown");
    init_db_with_user(&db_path, "alice");

    let bulk = r#"[
  {"user_id": "00000000-0000-0000-0000-000000000000", "date": "2025-06-02",
   "start_time": "08:00", "end_time": "17:00"}
]"#;
    let file = temp_bulk_file("schedule_bulk_unknown", bulk);

    pc()
        .args(["--db", &db_path, "--test", "schedule", "bulk", &file])
        .assert()
        .failure()
        .stderr(contains("Unknown user"));
}

#[test]
fn user_add_and_list() {
    let db_path = setup_test_db("user_add_list");

    pc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pc()
        .args(["--db", &db_path, "--test", "user", "add", "alice"])
        .assert()
        .success()
        .stdout(contains("Added user 'alice'"));

    pc()
        .args(["--db", &db_path, "--test", "user", "add", "alice"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    pc()
        .args(["--db", &db_path, "--test", "user", "list"])
        .assert()
        .success()
        .stdout(contains("alice"));
}

#[test]
fn punch_requires_a_user() {
    let db_path = setup_test_db("punch_no_user");

    pc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pc()
        .args(["--db", &db_path, "--test", "punch", "in"])
        .assert()
        .failure()
        .stderr(contains("no user specified"));
}
