//! Track duration text parsing
//!
//! Track durations are entered as "mm:ss" text in the create-release wizard
//! and stored as integer seconds. Malformed input fails closed to 0 seconds
//! rather than erroring; a bad duration should never block a submission.

/// Parse "mm:ss" duration text into whole seconds.
///
/// Split on ':'; first part is minutes, second is seconds. Anything that
/// does not parse as a non-negative integer yields 0.
///
/// # Examples
///
/// ```
/// use drec_common::duration::parse_duration_text;
///
/// assert_eq!(parse_duration_text("03:20"), 200);
/// assert_eq!(parse_duration_text("0:45"), 45);
/// assert_eq!(parse_duration_text("foo"), 0);
/// ```
pub fn parse_duration_text(text: &str) -> i64 {
    let mut parts = text.trim().splitn(2, ':');
    let minutes = parts.next().and_then(|p| p.trim().parse::<i64>().ok());
    let seconds = parts.next().and_then(|p| p.trim().parse::<i64>().ok());

    match (minutes, seconds) {
        (Some(m), Some(s)) if m >= 0 && s >= 0 => m * 60 + s,
        _ => 0,
    }
}

/// Format whole seconds as "mm:ss" display text.
pub fn format_duration_text(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
