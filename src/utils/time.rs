//! Wire dates are ISO-8601 strings; storage keeps epoch milliseconds.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::types::error::AppError;

/// `2025-03-04T19:30:00.000Z`, the same shape a browser's `toISOString()` emits.
pub fn to_iso(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn timestamp_to_iso(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Accepts RFC 3339, or a zone-less `YYYY-MM-DDTHH:MM[:SS]` (what a
/// `datetime-local` input posts) read as UTC.
pub fn parse_iso(raw: &str) -> Result<i64, AppError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(naive.and_utc().timestamp_millis());
        }
    }
    Err(AppError::Validation(format!("Invalid date: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_javascript() {
        assert_eq!(to_iso(0), "1970-01-01T00:00:00.000Z");
        assert_eq!(to_iso(1_741_116_600_123), "2025-03-04T19:30:00.123Z");
    }

    #[test]
    fn parses_offsets_into_utc_millis() {
        assert_eq!(parse_iso("2025-03-04T19:30:00.123Z").unwrap(), 1_741_116_600_123);
        assert_eq!(parse_iso("2025-03-04T20:30:00+01:00").unwrap(), 1_741_116_600_000);
    }

    #[test]
    fn parses_local_input_as_utc() {
        assert_eq!(parse_iso("2025-03-04T19:30").unwrap(), 1_741_116_600_000);
        assert_eq!(parse_iso("2025-03-04T19:30:00").unwrap(), 1_741_116_600_000);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse_iso("next tuesday"), Err(AppError::Validation(_))));
        assert!(parse_iso("").is_err());
    }
}
