use chrono::{NaiveDate, TimeDelta};

/// Format used by the reporting API for dates, both in parameters and on the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// This is the standard way of converting a date to a request parameter.
pub fn date_to_param(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats a duration as `1h2m3s`, `4m5s` or `6s`. Negative durations get a leading `-`.
pub fn format_duration(duration: TimeDelta) -> String {
    if duration < TimeDelta::zero() {
        return format!("-{}", format_duration(-duration));
    }

    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;
    let seconds = duration.num_seconds() % 60;
    match (hours, minutes) {
        (0, 0) => format!("{seconds}s"),
        (0, _) => format!("{minutes}m{seconds}s"),
        _ => format!("{hours}h{minutes}m{seconds}s"),
    }
}
