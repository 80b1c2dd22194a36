//! Upcoming-holiday aggregation over monthly calendar entries

use crate::api::types::CalendarEntry;
use chrono::NaiveDate;
use log::warn;

/// At most this many upcoming holidays are shown
pub const MAX_UPCOMING: usize = 4;

/// Gregorian date format used by the API
const DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayItem {
    pub name: String,
    /// DD-MM-YYYY, as reported by the API
    pub gregorian: String,
    /// "{day} {monthName} {year} AH"
    pub hijri_label: String,
    pub date: NaiveDate,
}

/// Flatten every (day, holiday-name) pair, keep dates on or after `today`
/// (inclusive), sort ascending and truncate.
pub fn upcoming_holidays(entries: &[CalendarEntry], today: NaiveDate) -> Vec<HolidayItem> {
    let mut items: Vec<HolidayItem> = Vec::new();

    for entry in entries {
        let hijri = &entry.date.hijri;
        for name in &hijri.holidays {
            let gregorian = entry.date.gregorian.date.clone();
            let date = match NaiveDate::parse_from_str(&gregorian, DATE_FORMAT) {
                Ok(date) => date,
                Err(e) => {
                    warn!(
                        "Skipping holiday '{}' with unparseable date '{}': {}",
                        name, gregorian, e
                    );
                    continue;
                }
            };
            items.push(HolidayItem {
                name: name.clone(),
                gregorian,
                hijri_label: hijri.label(),
                date,
            });
        }
    }

    items.retain(|item| item.date >= today);
    items.sort_by_key(|item| item.date);
    items.truncate(MAX_UPCOMING);
    items
}
