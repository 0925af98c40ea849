//! Display formatting for dates and aspect ratios.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const POST_DATE: &[BorrowedFormatItem<'static>] = format_description!("[month repr:long] [day padding:none], [year]");

/// `2025-03-14` → `March 14, 2025`.
#[must_use]
pub fn format_post_date(date: Date) -> String {
    date.format(POST_DATE).unwrap_or_else(|err| {
        log::warn!("post date {date} failed to format: {err}");
        date.to_string()
    })
}

/// CSS `aspect-ratio` value for `width:height` units, defaulting to square.
#[must_use]
pub fn aspect_ratio_css(width: u32, height: u32) -> String {
    if width == 0 || height == 0 {
        return "1 / 1".to_owned();
    }
    format!("{width} / {height}")
}
