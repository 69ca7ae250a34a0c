use chrono::NaiveDate;

/// TMDB `YYYY-MM-DD` date; blank or malformed input counts as absent.
pub(crate) fn parse_day(date: Option<&str>) -> Option<NaiveDate> {
    let date = date?.trim();
    if date.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Seconds since the epoch at midnight UTC of `day`.
pub(crate) fn timestamp(day: NaiveDate) -> Option<i64> {
    day.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp())
}
