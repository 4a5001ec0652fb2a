//! Duration literals such as `0h50m`, `3h00m` or `1h30m`.
//!
//! A literal is one or more `<digits><unit>` pairs where the unit is `h` or `m`.
//! Pairs are summed, so `1h1h` is two hours. Signs, fractions, whitespace and
//! other units are rejected.

use std::time::Duration;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// Reasons a duration literal fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,
    /// A unit or other character appeared where digits were expected.
    #[error("expected digits at offset {offset}, found {found:?}")]
    ExpectedNumber { offset: usize, found: char },
    /// Digits ran to the end of the input without a unit.
    #[error("missing unit after {0:?}")]
    MissingUnit(String),
    #[error("unknown unit {0:?}, expected 'h' or 'm'")]
    UnknownUnit(char),
    #[error("duration overflows")]
    Overflow,
}

/// Parses a duration literal into a [`Duration`].
///
/// The result may be zero (`0h0m`); positivity is checked by the record parser.
pub fn parse_duration(literal: &str) -> Result<Duration, DurationError> {
    if literal.is_empty() {
        return Err(DurationError::Empty);
    }

    let mut total_secs: u64 = 0;
    let mut chars = literal.char_indices().peekable();

    while let Some(&(offset, first)) = chars.peek() {
        if !first.is_ascii_digit() {
            return Err(DurationError::ExpectedNumber { offset, found: first });
        }

        let mut value: u64 = 0;
        while let Some(&(_, c)) = chars.peek() {
            let Some(digit) = c.to_digit(10) else { break };
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(digit)))
                .ok_or(DurationError::Overflow)?;
            chars.next();
        }

        let unit_secs = match chars.next() {
            Some((_, 'h')) => SECONDS_PER_HOUR,
            Some((_, 'm')) => SECONDS_PER_MINUTE,
            Some((_, other)) => return Err(DurationError::UnknownUnit(other)),
            None => return Err(DurationError::MissingUnit(literal[offset..].to_string())),
        };

        total_secs = value
            .checked_mul(unit_secs)
            .and_then(|secs| total_secs.checked_add(secs))
            .ok_or(DurationError::Overflow)?;
    }

    Ok(Duration::from_secs(total_secs))
}

/// Renders a duration as `<hours>h<minutes>m` with two-digit minutes, e.g. `3h00m`.
///
/// Sub-minute remainders are dropped.
pub fn format_duration(duration: Duration) -> String {
    let minutes = duration.as_secs() / SECONDS_PER_MINUTE;
    format!("{}h{:02}m", minutes / 60, minutes % 60)
}
