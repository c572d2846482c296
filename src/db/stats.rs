use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::bytes2readable;
use rusqlite::OptionalExtension;
use std::fs;
use std::path::Path;

/// Row counts of the tables known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DbCounts {
    pub records: i64,
    pub log: i64,
}

fn table_exists(pool: &DbPool, table: &str) -> rusqlite::Result<bool> {
    let found: Option<String> = pool
        .conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
            [table],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

fn count_rows(pool: &DbPool, table: &str) -> rusqlite::Result<i64> {
    if !table_exists(pool, table)? {
        return Ok(0);
    }
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
}

/// Count rows without creating missing tables.
pub fn counts(pool: &DbPool) -> AppResult<DbCounts> {
    Ok(DbCounts {
        records: count_rows(pool, "records")?,
        log: count_rows(pool, "log")?,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &Path) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path.display(), RESET);
    println!("{}• Size:{} {}", CYAN, RESET, bytes2readable(file_size));

    //
    // 2) ROW COUNTS
    //
    let c = counts(pool)?;
    println!(
        "{}• Stored records:{} {}{}{}",
        CYAN, RESET, GREEN, c.records, RESET
    );
    println!("{}• Log entries:{} {}{}{}", CYAN, RESET, GREY, c.log, RESET);

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    #[test]
    fn missing_tables_count_as_zero() {
        let pool = DbPool::in_memory().unwrap();
        assert_eq!(counts(&pool).unwrap(), DbCounts::default());
        assert!(!table_exists(&pool, "records").unwrap());
    }

    #[test]
    fn counts_existing_rows() {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        pool.conn
            .execute("INSERT INTO records (name, total) VALUES ('x', 1.0)", [])
            .unwrap();

        assert_eq!(counts(&pool).unwrap(), DbCounts { records: 1, log: 0 });
    }
}
