use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

// Above this a bare number is read as milliseconds (year ~5138 in seconds).
const MILLIS_THRESHOLD: u64 = 100_000_000_000;

/// Timestamp as browsers tend to send it: unix seconds/millis, RFC 3339,
/// or the `datetime-local` form without an offset (read as UTC).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TimeInput {
    Unix(i64),
    /// `Date.now() / 1000` style; the fraction is truncated.
    Fractional(f64),
    Text(String),
    /// Any other JSON value; never a valid time.
    Other(Value),
}

impl TimeInput {
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            TimeInput::Unix(n) => from_unix(*n),
            TimeInput::Fractional(f) if f.is_finite() => from_unix(f.trunc() as i64),
            TimeInput::Fractional(_) | TimeInput::Other(_) => None,
            TimeInput::Text(s) => parse_time_text(s.trim()),
        }
    }
}

fn from_unix(n: i64) -> Option<DateTime<Utc>> {
    if n.unsigned_abs() >= MILLIS_THRESHOLD {
        Utc.timestamp_millis_opt(n).single()
    } else {
        Utc.timestamp_opt(n, 0).single()
    }
}

fn parse_time_text(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|d| d.and_utc());
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse().ok().and_then(from_unix);
    }
    None
}

/// Wei amount sent either as a JSON number or a digit string.
///
/// Front ends compute `price * 1e18` in floating point, so large integral
/// floats are accepted and rounded to the nearest integer.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Int(u64),
    Float(f64),
    Text(String),
    /// Any other JSON value; rendered as-is so price parsing rejects it.
    Other(Value),
}

impl AmountInput {
    pub fn to_wei_string(&self) -> String {
        match self {
            AmountInput::Int(n) => n.to_string(),
            AmountInput::Float(f) if f.is_finite() && *f >= 0.0 && f.fract() == 0.0 => {
                format!("{f:.0}")
            }
            AmountInput::Float(f) => f.to_string(),
            AmountInput::Text(s) => s.clone(),
            AmountInput::Other(v) => v.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn time(json: &str) -> Option<DateTime<Utc>> {
        serde_json::from_str::<TimeInput>(json).unwrap().to_datetime()
    }

    #[test]
    fn parses_common_timestamp_shapes() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(time("\"2025-03-01T09:30:00Z\""), Some(expected));
        assert_eq!(time("\"2025-03-01T10:30:00+01:00\""), Some(expected));
        assert_eq!(time("\"2025-03-01T09:30\""), Some(expected));
        assert_eq!(time(&expected.timestamp().to_string()), Some(expected));
        assert_eq!(time(&expected.timestamp_millis().to_string()), Some(expected));
        assert_eq!(time("\"2025-03-01\"").unwrap().hour(), 0);
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert_eq!(time("\"next tuesday\""), None);
        assert_eq!(time("\"\""), None);
        assert_eq!(time("true"), None);
        assert_eq!(time("{\"at\": 1}"), None);
        assert_eq!(time("[1900000000]"), None);
    }

    #[test]
    fn fractional_seconds_are_truncated() {
        let expected = Utc.timestamp_opt(1_900_000_000, 0).unwrap();
        assert_eq!(time("1900000000.5"), Some(expected));
        assert_eq!(time("1900000000000.0"), Some(expected));
    }

    #[test]
    fn extreme_unix_values_do_not_panic() {
        assert_eq!(time(&i64::MIN.to_string()), None);
        assert_eq!(time(&i64::MAX.to_string()), None);
        assert_eq!(time("-1e300"), None);
    }

    #[test]
    fn amounts_normalize_to_integer_strings() {
        let parse = |json: &str| serde_json::from_str::<AmountInput>(json).unwrap().to_wei_string();
        assert_eq!(parse("50000000000000000"), "50000000000000000");
        assert_eq!(parse("2e19"), "20000000000000000000");
        assert_eq!(parse("\"123\""), "123");
        assert_eq!(parse("1.5"), "1.5");
        assert_eq!(parse("true"), "true");
        assert_eq!(parse("null"), "null");
    }
}
