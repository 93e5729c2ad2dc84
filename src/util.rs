//! Small shared helpers: the time-window calculator and JSON field access.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

/// What: Return the calendar date `n` days before `now` as `YYYY-MM-DD`.
///
/// Inputs:
/// - `n`: Window size in days (N >= 0)
/// - `now`: Reference instant; callers capture it once per run
///
/// Output:
/// - Date-only string, no time-of-day component.
pub fn n_days_ago(n: u32, now: DateTime<Utc>) -> String {
    (now - Duration::days(i64::from(n)))
        .format("%Y-%m-%d")
        .to_string()
}

/// String field of a JSON object, empty when missing or null.
pub fn s(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Optional string field of a JSON object; `None` when missing or null.
pub fn opt_s(v: &Value, key: &str) -> Option<String> {
    v.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Unsigned integer field of a JSON object, accepting numeric or string
/// encodings.
pub fn u64_of(v: &Value, key: &str) -> Option<u64> {
    let n = v.get(key)?;
    if let Some(u) = n.as_u64() {
        return Some(u);
    }
    if let Some(i) = n.as_i64()
        && let Ok(u) = u64::try_from(i)
    {
        return Some(u);
    }
    if let Some(s) = n.as_str()
        && let Ok(p) = s.parse::<u64>()
    {
        return Some(p);
    }
    None
}
