use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

use crate::{ClientError, ClientResult};

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Short `Oct 15` style label used for period ranges.
pub fn format_short_date(date: &NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

pub fn format_month_label(year: i32, month: u32) -> String {
    format!("{} {year}", month_name(month))
}

/// Local timestamp layouts accepted after an ISO date; RFC 3339 is checked
/// separately.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Lenient due-date parsing for obligation rows.
///
/// Accepts `YYYY-MM-DD` and full ISO timestamps (`2026-10-15T00:00:00Z`,
/// `2026-10-15 08:30`). The calendar date is taken as written, without
/// converting offsets. Anything else is `None`.
pub fn parse_due_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed.get(..10)?;
    if !looks_like_iso_date(date_part) {
        return None;
    }
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    if trimmed.len() == 10 || DateTime::parse_from_rfc3339(trimmed).is_ok() {
        return Some(date);
    }

    TIMESTAMP_FORMATS
        .iter()
        .any(|format| NaiveDateTime::parse_from_str(trimmed, format).is_ok())
        .then_some(date)
}

/// Strict parsing for reference dates supplied on the command line.
pub fn parse_reference_date(value: &str, command: &str) -> ClientResult<NaiveDate> {
    if !looks_like_iso_date(value) {
        return Err(ClientError::invalid_reference_date("today", command));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ClientError::invalid_reference_date("today", command))
}

pub fn parse_weekday(value: &str) -> Option<Weekday> {
    match value.trim().to_ascii_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tues" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thur" | "thurs" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// First date on or after `date` that falls on `weekday`.
pub fn next_weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let current = i64::from(date.weekday().num_days_from_monday());
    let target = i64::from(weekday.num_days_from_monday());
    let offset = (target - current).rem_euclid(7);
    date + Duration::days(offset)
}

pub fn weekday_dates_in_month(year: i32, month: u32, weekday: Weekday) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let mut dates = Vec::new();
    let mut cursor = next_weekday_on_or_after(first, weekday);
    while cursor.month() == month {
        dates.push(cursor);
        cursor += Duration::days(7);
    }
    dates
}

/// Year and month `offset` calendar months after the month containing `date`.
pub fn month_after(date: NaiveDate, offset: u32) -> (i32, u32) {
    let zero_based = date.month0() + offset;
    let years = i32::try_from(zero_based / 12).unwrap_or(0);
    (date.year() + years, zero_based % 12 + 1)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday};

    use super::{
        days_in_month, format_iso_date, format_short_date, month_after,
        next_weekday_on_or_after, parse_due_date, parse_reference_date, parse_weekday,
        weekday_dates_in_month,
    };

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }

    #[test]
    fn next_weekday_counts_the_same_day() {
        // 2026-10-15 is a Thursday.
        let thursday = date(2026, 10, 15);
        assert_eq!(next_weekday_on_or_after(thursday, Weekday::Thu), thursday);
        assert_eq!(
            next_weekday_on_or_after(thursday, Weekday::Wed),
            date(2026, 10, 21)
        );
        assert_eq!(
            next_weekday_on_or_after(date(2026, 10, 19), Weekday::Thu),
            date(2026, 10, 22)
        );
    }

    #[test]
    fn due_dates_accept_plain_dates_and_timestamps() {
        assert_eq!(parse_due_date("2026-10-15"), Some(date(2026, 10, 15)));
        assert_eq!(
            parse_due_date(" 2026-10-15T08:30:00.000Z "),
            Some(date(2026, 10, 15))
        );
        assert_eq!(parse_due_date("2026-02-30"), None);
        assert_eq!(parse_due_date("10/15/2026"), None);
        assert_eq!(parse_due_date("2026-10-15garbage"), None);
        assert_eq!(parse_due_date(""), None);
    }

    #[test]
    fn due_dates_reject_junk_after_the_date() {
        assert_eq!(parse_due_date("2026-10-15 garbage"), None);
        assert_eq!(parse_due_date("2026-10-15Tjunk"), None);
        assert_eq!(parse_due_date("2026-10-15T25:00:00"), None);
        assert_eq!(parse_due_date("2026-10-15 "), Some(date(2026, 10, 15)));
        assert_eq!(
            parse_due_date("2026-10-15T23:30:00-05:00"),
            Some(date(2026, 10, 15))
        );
        assert_eq!(parse_due_date("2026-10-15 08:30"), Some(date(2026, 10, 15)));
        assert_eq!(
            parse_due_date("2026-10-15T08:30:00"),
            Some(date(2026, 10, 15))
        );
    }

    #[test]
    fn reference_dates_are_strict() {
        assert!(parse_reference_date("2026-10-19", "periods").is_ok());
        let invalid = parse_reference_date("2026-13-01", "periods");
        assert!(invalid.is_err());
        if let Err(error) = invalid {
            assert_eq!(error.code, "invalid_argument");
            assert!(error.message.contains("calendar"));
        }
        assert!(parse_reference_date("2026-10-19T00:00:00", "periods").is_err());
    }

    #[test]
    fn weekday_names_parse_case_insensitively() {
        assert_eq!(parse_weekday("Thursday"), Some(Weekday::Thu));
        assert_eq!(parse_weekday(" FRI "), Some(Weekday::Fri));
        assert_eq!(parse_weekday("someday"), None);
    }

    #[test]
    fn month_of_31_days_starting_thursday_has_five_thursdays() {
        // October 2026 starts on a Thursday.
        let thursdays = weekday_dates_in_month(2026, 10, Weekday::Thu);
        assert_eq!(thursdays.len(), 5);
        assert_eq!(thursdays[0], date(2026, 10, 1));
        assert_eq!(thursdays[4], date(2026, 10, 29));

        let fridays = weekday_dates_in_month(2026, 11, Weekday::Fri);
        assert_eq!(fridays.len(), 4);
    }

    #[test]
    fn month_after_rolls_over_years() {
        assert_eq!(month_after(date(2026, 11, 30), 0), (2026, 11));
        assert_eq!(month_after(date(2026, 11, 30), 2), (2027, 1));
        assert_eq!(month_after(date(2026, 1, 1), 23), (2027, 12));
    }

    #[test]
    fn leap_february_has_29_days() {
        assert_eq!(days_in_month(2028, 2), 29);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2100, 2), 28);
    }

    #[test]
    fn formats_short_and_iso_dates() {
        let value = date(2026, 10, 5);
        assert_eq!(format_iso_date(&value), "2026-10-05");
        assert_eq!(format_short_date(&value), "Oct 5");
    }
}
