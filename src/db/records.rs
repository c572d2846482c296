//! Append-only record store.
//!
//! The calculator only ever writes to `records`; rows are never updated,
//! deleted, or read back by the submission flow.

use crate::errors::AppResult;
use crate::models::breakdown::EmissionBreakdown;
use crate::models::submission::Submission;
use rusqlite::{Connection, params};

/// A row of the `records` table, before insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord<'a> {
    pub name: &'a str,
    pub education: &'a str,
    pub city: &'a str,
    pub breakdown: EmissionBreakdown,
}

impl<'a> NewRecord<'a> {
    pub fn from_submission(submission: &'a Submission, breakdown: EmissionBreakdown) -> Self {
        Self {
            name: &submission.name,
            education: submission.education.to_db_str(),
            city: &submission.city,
            breakdown,
        }
    }
}

pub fn ensure_records_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            name      TEXT,
            education TEXT,
            city      TEXT,
            transport REAL,
            diet      REAL,
            device    REAL,
            ai        REAL,
            total     REAL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure the table exists, insert one row and return its id.
pub fn insert_record(conn: &Connection, record: &NewRecord) -> AppResult<i64> {
    ensure_records_table(conn)?;

    let b = &record.breakdown;
    conn.execute(
        "INSERT INTO records (name, education, city, transport, diet, device, ai, total)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            record.name,
            record.education,
            record.city,
            b.transport,
            b.diet,
            b.device,
            b.ai,
            b.total
        ],
    )?;

    Ok(conn.last_insert_rowid())
}
