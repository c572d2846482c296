//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Emissions are always shown with two decimals.
pub fn kg2readable(kg: f64) -> String {
    format!("{:.2}", kg)
}

/// File sizes as shown by `db --info`.
pub fn bytes2readable(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < KB * KB {
        format!("{:.2} KB", b / KB)
    } else {
        format!("{:.2} MB", b / (KB * KB))
    }
}
