use crate::db::records::ensure_records_table;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Ensure that the internal `log` table exists.
pub fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Initialize the database.
/// Tables are created lazily and idempotently; there is no schema versioning.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    ensure_records_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
