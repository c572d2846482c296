use crate::db::initialize::ensure_log_table;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 40;

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}

/// ANSI color by operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "calc" => Colour::Green,
        "dataset" => Colour::Blue,
        "train" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &mut DbPool) -> AppResult<Vec<LogEntry>> {
        ensure_log_table(&pool.conn)?;

        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    /// One printable line: colored operation, optional target, message.
    pub fn format_entry(e: &LogEntry, id_w: usize, date_w: usize, op_w: usize) -> String {
        let color = color_for_operation(&e.operation);

        let mut op_target = color.paint(e.operation.as_str()).to_string();
        if !e.target.is_empty() {
            op_target.push_str(&format!(" ({})", e.target));
        }

        // Truncate on the visible text only
        let visible = strip_ansi(&op_target);
        let visible_len = visible.chars().count();
        let shown = if visible_len > op_w {
            let mut s: String = visible.chars().take(op_w.saturating_sub(3)).collect();
            s.push_str("...");
            match s.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(s.as_str()).to_string(),
            }
        } else {
            op_target
        };

        let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&shown).chars().count()));

        format!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            e.id,
            e.date,
            shown,
            padding,
            e.message,
            id_w = id_w,
            date_w = date_w
        )
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = Self::load(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| {
                let len = e.operation.chars().count();
                if e.target.is_empty() {
                    len
                } else {
                    len + e.target.chars().count() + 3
                }
            })
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        println!("📜 Internal log:\n");
        for e in &entries {
            println!("{}", Self::format_entry(e, id_w, date_w, op_w));
        }

        Ok(())
    }
}
