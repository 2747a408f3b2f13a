use admindash::utils::datetime::{
    format_datetime, format_human_date_from, format_relative_time, format_ymd, parse_date, parse_datetime,
    weekday_name,
};
use chrono::{Duration, NaiveDate, TimeZone, Utc, Weekday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_parse_and_format_dates() {
    assert_eq!(parse_date(" 2024-06-03 ").unwrap(), date(2024, 6, 3));
    assert!(parse_date("03/06/2024").is_err());
    assert_eq!(format_ymd(date(2024, 1, 5)), "2024-01-05");
}

#[test]
fn test_parse_datetime_accepts_both_separators() {
    let expected = date(2024, 6, 3).and_hms_opt(14, 30, 0).unwrap();
    assert_eq!(parse_datetime("2024-06-03 14:30").unwrap(), expected);
    assert_eq!(parse_datetime("2024-06-03T14:30").unwrap(), expected);
    assert_eq!(parse_datetime("2024-06-03T14:30:00").unwrap(), expected);
    assert!(parse_datetime("2024-06-03").is_err());
    assert_eq!(format_datetime(expected), "2024-06-03 14:30");
}

#[test]
fn test_human_dates() {
    // A Monday
    let today = date(2024, 6, 3);
    assert_eq!(format_human_date_from(today, today), "today");
    assert_eq!(format_human_date_from(date(2024, 6, 4), today), "tomorrow");
    assert_eq!(format_human_date_from(date(2024, 6, 2), today), "yesterday");
    assert_eq!(format_human_date_from(date(2024, 6, 7), today), "next Friday");
    assert_eq!(format_human_date_from(date(2024, 5, 29), today), "last Wednesday");
    assert_eq!(format_human_date_from(date(2024, 6, 20), today), "in 17 days");
    assert_eq!(format_human_date_from(date(2024, 5, 20), today), "14 days ago");
    assert_eq!(format_human_date_from(date(2024, 12, 25), today), "Dec 25");
    assert_eq!(format_human_date_from(date(2023, 12, 25), today), "Dec 25, 2023");
}

#[test]
fn test_relative_times() {
    let now = Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap();
    assert_eq!(format_relative_time(now - Duration::seconds(20), now), "just now");
    assert_eq!(format_relative_time(now - Duration::minutes(1), now), "1 minute ago");
    assert_eq!(format_relative_time(now - Duration::minutes(45), now), "45 minutes ago");
    assert_eq!(format_relative_time(now - Duration::hours(3), now), "3 hours ago");
    assert_eq!(format_relative_time(now - Duration::days(2), now), "2 days ago");
    assert_eq!(format_relative_time(now - Duration::days(10), now), "May 24");
}

#[test]
fn test_weekday_names() {
    assert_eq!(weekday_name(Weekday::Mon), "Monday");
    assert_eq!(weekday_name(Weekday::Sun), "Sunday");
}
