/// Row ids are SQLite `INTEGER PRIMARY KEY` values.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Current time truncated to whole milliseconds.
pub fn now_millis() -> Timestamp {
    use chrono::SubsecRound;
    chrono::Utc::now().trunc_subsecs(3)
}

/// Fixed-width ISO-8601 rendering (`2025-01-31T09:15:02.120Z`).
///
/// Stored timestamps use this format so text ordering matches time ordering.
pub fn iso_millis(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
