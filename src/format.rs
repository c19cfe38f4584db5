//! Card Formatting Helpers

use chrono::NaiveDate;

/// Deterministic placeholder image for an item id
pub fn image_url(base: &str, id: i64) -> String {
    format!("{}?random={}", base, id)
}

pub fn image_alt(id: i64) -> String {
    format!("Image for User ID: {}", id)
}

/// Same shape as JS `Date.prototype.toDateString`, e.g. "Fri Oct 16 2026"
pub fn date_string(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Today's date in the browser's local time zone
pub fn today_string() -> String {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .map(date_string)
        .unwrap_or_default()
}
