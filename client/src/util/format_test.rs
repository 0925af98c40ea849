use time::{Date, Month};
use time::macros::date;

use super::*;

#[test]
fn formats_post_dates_long_form() {
    assert_eq!(format_post_date(date!(2025-03-14)), "March 14, 2025");
    assert_eq!(format_post_date(date!(2024-11-02)), "November 2, 2024");
    assert_eq!(format_post_date(date!(2024-02-29)), "February 29, 2024");
}

#[test]
fn impossible_calendar_dates_cannot_be_built() {
    assert!(Date::from_calendar_date(2025, Month::February, 31).is_err());
    assert!(Date::from_calendar_date(2025, Month::February, 29).is_err());
    assert!(Date::from_calendar_date(2024, Month::February, 29).is_ok());
}

#[test]
fn aspect_ratio_from_units() {
    assert_eq!(aspect_ratio_css(16, 9), "16 / 9");
    assert_eq!(aspect_ratio_css(0, 9), "1 / 1");
}
