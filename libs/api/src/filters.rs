use chrono::{DateTime, Utc};

/// Display format for show start times, e.g. "Mon 07, 01, 2024 8:00PM".
const START_TIME_FORMAT: &str = "%a %m, %d, %Y %-I:%M%p";

pub fn format_start_time(start_time: &DateTime<Utc>) -> String {
    start_time.format(START_TIME_FORMAT).to_string()
}
