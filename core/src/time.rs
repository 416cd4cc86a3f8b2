//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into whole unix seconds: "1700000000"
pub fn format_unix_timestamp(t: DateTime) -> String {
    t.timestamp().to_string()
}
