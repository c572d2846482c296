use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database file
///  - the `records` and `log` tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing footprint…");

    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", db_path.display());

    // Internal log (non blocking)
    log::ttlog_or_warn(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path.display()),
    );

    println!("🎉 footprint initialization completed!");
    Ok(())
}
