use chrono::{DateTime, Local};

pub fn local_date_yyyy_mm_dd() -> String {
    let now: DateTime<Local> = Local::now();
    now.format("%Y-%m-%d").to_string()
}

/// Wall-clock time as shown in the "Last updated" line, e.g. `3:04:05 PM`.
pub fn local_time_of_day(dt: DateTime<Local>) -> String {
    dt.format("%-I:%M:%S %p").to_string()
}
