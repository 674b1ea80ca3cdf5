use chrono::{Local, SecondsFormat, Utc};

/// ISO-8601 instant with milliseconds, the format the sheet already holds
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Store-local calendar day, `YYYY-MM-DD`
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
