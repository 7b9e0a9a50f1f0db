#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use punchclock::db::initialize::init_db;
use punchclock::db::queries::insert_user;
use punchclock::models::user::User;
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

pub fn pc() -> Command {
    cargo_bin_cmd!("punchclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize schema and register one user via the CLI
pub fn init_db_with_user(db_path: &str, user: &str) {
    pc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    pc()
        .args(["--db", db_path, "--test", "user", "add", user])
        .assert()
        .success();
}

/// Write a bulk-schedule JSON file into the temp dir and return its path
pub fn temp_bulk_file(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bulk.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write bulk file");
    p
}

/// In-memory database with the schema applied, for library-level tests
pub fn mem_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init schema");
    conn
}

/// Register a user directly through the library and return its id
pub fn add_user(conn: &Connection, name: &str) -> Uuid {
    let user = User::new(name);
    insert_user(conn, &user).expect("insert user");
    user.id
}

/// Local instant on a given day, second precision
pub fn at(date: NaiveDate, h: u32, m: u32, s: u32) -> DateTime<Local> {
    Local
        .from_local_datetime(&date.and_hms_opt(h, m, s).expect("valid time"))
        .unwrap()
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
