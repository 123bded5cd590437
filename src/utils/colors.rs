/// ANSI color helper constants for terminal output.
use crate::models::SlaStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Row paint for the control table: ALERT rows red, RESOLVED rows green,
/// OK rows unpainted.
pub fn color_for_status(status: SlaStatus) -> Option<&'static str> {
    match status {
        SlaStatus::Alert => Some(RED),
        SlaStatus::Resolved => Some(GREEN),
        SlaStatus::Ok => None,
    }
}

/// GREY for blank cells so empty optional fields read as "not filled".
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
