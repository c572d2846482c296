use crate::db::initialize::ensure_log_table;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;
use std::path::Path;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    ensure_log_table(conn)?;

    // Local timestamp, ISO 8601
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Same as `ttlog`, but a failure only produces a warning.
/// Audit logging must never abort the operation being logged.
pub fn ttlog_or_warn(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, operation, target, message) {
        crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
    }
}

/// Audit a command that does not otherwise touch the record store.
///
/// Nothing is written when the database file does not exist yet, so the
/// command never creates one as a side effect. Open failures only warn.
pub fn ttlog_to_path_or_warn(db_path: &Path, operation: &str, target: &str, message: &str) {
    if !db_path.is_file() {
        return;
    }

    match Connection::open(db_path) {
        Ok(conn) => ttlog_or_warn(&conn, operation, target, message),
        Err(e) => crate::ui::messages::warning(format!(
            "Failed to open {} for the internal log: {}",
            db_path.display(),
            e
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn appends_rows_in_order() {
        let conn = Connection::open_in_memory().unwrap();
        ttlog(&conn, "init", "db", "first").unwrap();
        ttlog(&conn, "calc", "#1", "second").unwrap();

        let ops: Vec<(String, String)> = conn
            .prepare("SELECT operation, message FROM log ORDER BY id")
            .unwrap()
            .query_map([], |r| Ok((r.get(0)?, r.get(1)?)))
            .unwrap()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(
            ops,
            vec![
                ("init".to_string(), "first".to_string()),
                ("calc".to_string(), "second".to_string())
            ]
        );
    }

    #[test]
    fn path_audit_skips_missing_database() {
        let db_path = env::temp_dir().join("footprint_log_missing_unit.sqlite");
        fs::remove_file(&db_path).ok();

        ttlog_to_path_or_warn(&db_path, "dataset", "students.csv", "written");

        assert!(!db_path.exists());
    }

    #[test]
    fn path_audit_appends_to_existing_database() {
        let db_path = env::temp_dir().join("footprint_log_existing_unit.sqlite");
        fs::remove_file(&db_path).ok();
        Connection::open(&db_path).unwrap();

        ttlog_to_path_or_warn(&db_path, "train", "model.json", "saved");

        let conn = Connection::open(&db_path).unwrap();
        let op: String = conn
            .query_row("SELECT operation FROM log", [], |r| r.get(0))
            .unwrap();
        assert_eq!(op, "train");

        drop(conn);
        fs::remove_file(&db_path).ok();
    }
}
