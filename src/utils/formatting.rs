//! Formatting utilities used for CLI and export outputs.

/// Render a duration in seconds as `H:MM:SS`.
///
/// Zero (which is also what invalid rows degrade to) renders as
/// `0:00:00`; hours carry no leading zero, matching the sheet display.
pub fn format_hms(secs: i64) -> String {
    let s = secs.max(0);
    format!("{}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// Wrap free-text notes for the ticket card view.
pub fn wrap_notes(notes: &str, width: usize) -> Vec<String> {
    textwrap::wrap(notes, width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}
