//! Helpers shared across views: date formatting and the dismissible
//! error alert.

use dioxus::prelude::*;
use std::time::{SystemTime, UNIX_EPOCH};
use time::{
    Date, Duration, OffsetDateTime, UtcOffset, format_description::FormatItem,
    macros::format_description,
};

/// Error banner for failed lookups and generations. Renders nothing while
/// the message is empty; the close control clears it without retrying.
#[component]
pub fn DismissibleAlert(error: Signal<String>) -> Element {
    let mut error = error;
    if error().is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "alert", role: "alert",
            span { "{error()}" }
            button {
                class: "btn-ghost alert-dismiss",
                aria_label: "Dismiss",
                onclick: move |_| error.set(String::new()),
                "\u{2715}"
            }
        }
    }
}

/// Storage key format for plan dates (YYYY-MM-DD).
pub const ISO_DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

const DAY_NAME_FORMAT: &[FormatItem<'static>] = format_description!("[weekday repr:short]");

const LONG_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[weekday], [month repr:short] [day]");

const RANGE_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day]");

/// Today's date in the local offset, falling back to UTC when the platform
/// cannot report an offset.
pub fn today() -> Date {
    let mut now = OffsetDateTime::now_utc();
    if let Ok(offset) = UtcOffset::current_local_offset() {
        now = now.to_offset(offset);
    }
    now.date()
}

/// The Sunday on or before `date` (weeks run Sunday through Saturday).
pub fn week_start(date: Date) -> Date {
    date - Duration::days(i64::from(date.weekday().number_days_from_sunday()))
}

pub fn week_days(start: Date) -> Vec<Date> {
    (0..7).map(|i| start + Duration::days(i)).collect()
}

pub fn iso_date(date: Date) -> String {
    date.format(ISO_DATE_FORMAT).unwrap_or_default()
}

/// Short weekday label ("Mon").
pub fn day_name(date: Date) -> String {
    date.format(DAY_NAME_FORMAT).unwrap_or_default()
}

/// Header label ("Monday, Jan 1").
pub fn long_date(date: Date) -> String {
    date.format(LONG_DATE_FORMAT).unwrap_or_default()
}

/// Week-range label piece ("Jan 1").
pub fn range_date(date: Date) -> String {
    date.format(RANGE_DATE_FORMAT).unwrap_or_default()
}

pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn iso_date_is_zero_padded() {
        let date = Date::from_calendar_date(2024, Month::January, 5).unwrap();
        assert_eq!(iso_date(date), "2024-01-05");
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2024-01-03 is a Wednesday.
        let date = Date::from_calendar_date(2024, Month::January, 3).unwrap();
        let start = week_start(date);
        assert_eq!(iso_date(start), "2023-12-31");
        assert_eq!(start.weekday(), time::Weekday::Sunday);

        // A Sunday is its own week start.
        assert_eq!(week_start(start), start);
    }

    #[test]
    fn week_days_are_consecutive() {
        let date = Date::from_calendar_date(2024, Month::June, 9).unwrap();
        let days = week_days(date);
        assert_eq!(days.len(), 7);
        assert_eq!(iso_date(days[0]), "2024-06-09");
        assert_eq!(iso_date(days[6]), "2024-06-15");
    }
}
