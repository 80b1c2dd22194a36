//! Tests for upcoming-holiday aggregation

use adhan_times::api::types::{CalendarEntry, DateInfo, GregorianDate, HijriDate, HijriMonth};
use adhan_times::holidays::{upcoming_holidays, MAX_UPCOMING};
use chrono::NaiveDate;

fn entry(gregorian: &str, hijri_day: &str, holidays: &[&str]) -> CalendarEntry {
    CalendarEntry {
        date: DateInfo {
            hijri: HijriDate {
                day: hijri_day.to_string(),
                month: HijriMonth {
                    number: 12,
                    en: "Dhu al-Hijjah".to_string(),
                },
                year: "1445".to_string(),
                holidays: holidays.iter().map(|s| s.to_string()).collect(),
            },
            gregorian: GregorianDate {
                date: gregorian.to_string(),
            },
        },
    }
}

#[test]
fn test_past_entries_dropped_future_sorted_and_capped() {
    // Deliberately unsorted input; 15-06 is "today"
    let entries = vec![
        entry("01-06-2024", "24", &["Past day"]),
        entry("30-06-2024", "23", &["Sixth"]),
        entry("16-06-2024", "09", &["Second"]),
        entry("25-06-2024", "18", &["Fifth"]),
        entry("15-06-2024", "08", &["Today"]),
        entry("20-06-2024", "13", &["Fourth"]),
    ];
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    let items = upcoming_holidays(&entries, today);

    assert_eq!(items.len(), MAX_UPCOMING);
    let dates: Vec<&str> = items.iter().map(|i| i.gregorian.as_str()).collect();
    assert_eq!(
        dates,
        vec!["15-06-2024", "16-06-2024", "20-06-2024", "25-06-2024"]
    );
    assert_eq!(items[0].name, "Today");
}

#[test]
fn test_hijri_label_format() {
    let entries = vec![entry("16-06-2024", "10", &["Eid al-Adha"])];
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    let items = upcoming_holidays(&entries, today);
    assert_eq!(items[0].hijri_label, "10 Dhu al-Hijjah 1445 AH");
    assert_eq!(items[0].date, NaiveDate::from_ymd_opt(2024, 6, 16).unwrap());
}

#[test]
fn test_month_without_holidays_is_empty() {
    let entries = vec![entry("16-06-2024", "09", &[]), entry("17-06-2024", "10", &[])];
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    assert!(upcoming_holidays(&entries, today).is_empty());
}

#[test]
fn test_year_boundary_dates_compare_correctly() {
    // A DD-MM-YYYY string sort would put 05-01-2025 before 28-12-2024
    let entries = vec![
        entry("05-01-2025", "05", &["Later"]),
        entry("28-12-2024", "26", &["Sooner"]),
    ];
    let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();

    let items = upcoming_holidays(&entries, today);
    assert_eq!(items[0].name, "Sooner");
    assert_eq!(items[1].name, "Later");
}
