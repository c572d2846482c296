#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, isolated from the user's real configuration file.
pub fn fp() -> Command {
    let mut cmd = cargo_bin_cmd!("footprint");
    let home = env::temp_dir().join("footprint_test_home");
    fs::create_dir_all(&home).ok();
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_footprint.sqlite", name));
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

/// One stored row of the `records` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: i64,
    pub name: String,
    pub education: String,
    pub city: String,
    pub transport: f64,
    pub diet: f64,
    pub device: f64,
    pub ai: f64,
    pub total: f64,
}

pub fn read_records(db_path: &str) -> Vec<Row> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let mut stmt = conn
        .prepare(
            "SELECT id, name, education, city, transport, diet, device, ai, total
             FROM records ORDER BY id",
        )
        .expect("prepare");
    stmt.query_map([], |r| {
        Ok(Row {
            id: r.get(0)?,
            name: r.get(1)?,
            education: r.get(2)?,
            city: r.get(3)?,
            transport: r.get(4)?,
            diet: r.get(5)?,
            device: r.get(6)?,
            ai: r.get(7)?,
            total: r.get(8)?,
        })
    })
    .expect("query")
    .map(|r| r.expect("row"))
    .collect()
}

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
