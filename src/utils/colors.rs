/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Footprint color against the recommended level:
/// above → red
/// otherwise → green
pub fn color_for_total(total: f64, recommended: f64) -> &'static str {
    if total > recommended { RED } else { GREEN }
}

/// Zero components are dimmed so the relevant ones stand out.
pub fn colorize_component(value: &str, amount: f64) -> String {
    if amount == 0.0 {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
