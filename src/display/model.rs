//! Display model assembled from API data

use crate::api::types::TimingsData;
use crate::holidays::HolidayItem;
use std::collections::HashMap;

/// Fixed card order; the API may return timing keys in arbitrary order
pub const PRAYER_ORDER: [&str; 6] = ["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"];

/// Hijri month number of Ramadan
const RAMADAN_MONTH: u32 = 9;

/// Placeholder for a timing the API did not return
const MISSING_TIME: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerCard {
    pub name: &'static str,
    pub time: String,
}

/// Suhoor/iftar times plus whether the Ramadan visual mode is on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastingWindow {
    pub suhoor: String,
    pub iftar: String,
    pub ramadan_mode: bool,
}

impl FastingWindow {
    /// Total selector: during Ramadan suhoor prefers Imsak over Fajr,
    /// otherwise it is Fajr; iftar is always Maghrib.
    pub fn select(hijri_month: u32, timings: &HashMap<String, String>) -> Self {
        let ramadan_mode = hijri_month == RAMADAN_MONTH;
        let fajr = timing(timings, "Fajr");
        let suhoor = if ramadan_mode {
            timings.get("Imsak").cloned().unwrap_or(fajr)
        } else {
            fajr
        };

        Self {
            suhoor,
            iftar: timing(timings, "Maghrib"),
            ramadan_mode,
        }
    }
}

fn timing(timings: &HashMap<String, String>, name: &str) -> String {
    timings
        .get(name)
        .cloned()
        .unwrap_or_else(|| MISSING_TIME.to_string())
}

/// Everything the rendering surface needs for one popup view
#[derive(Debug, Clone)]
pub struct DisplayModel {
    pub hijri_header: String,
    pub gregorian_header: String,
    pub cards: Vec<PrayerCard>,
    pub fasting: FastingWindow,
    pub holidays: Vec<HolidayItem>,
}

impl DisplayModel {
    pub fn build(
        timings: &TimingsData,
        location_label: &str,
        holidays: Vec<HolidayItem>,
    ) -> Self {
        let hijri = &timings.date.hijri;
        let cards = PRAYER_ORDER
            .iter()
            .map(|&name| PrayerCard {
                name,
                time: timing(&timings.timings, name),
            })
            .collect();

        Self {
            hijri_header: hijri.label(),
            gregorian_header: format!("{} ({})", timings.date.gregorian.date, location_label),
            cards,
            fasting: FastingWindow::select(hijri.month.number, &timings.timings),
            holidays,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{DateInfo, GregorianDate, HijriDate, HijriMonth};

    fn sample_timings() -> HashMap<String, String> {
        let mut timings = HashMap::new();
        timings.insert("Imsak".to_string(), "04:10".to_string());
        timings.insert("Fajr".to_string(), "04:20".to_string());
        timings.insert("Maghrib".to_string(), "19:05".to_string());
        timings
    }

    #[test]
    fn test_ramadan_without_imsak_uses_fajr() {
        let mut timings = sample_timings();
        timings.remove("Imsak");
        let window = FastingWindow::select(9, &timings);
        assert_eq!(window.suhoor, "04:20");
        assert!(window.ramadan_mode);
    }

    #[test]
    fn test_cards_follow_fixed_order() {
        let data = TimingsData {
            timings: sample_timings(),
            date: DateInfo {
                hijri: HijriDate {
                    day: "15".to_string(),
                    month: HijriMonth {
                        number: 9,
                        en: "Ramadan".to_string(),
                    },
                    year: "1445".to_string(),
                    holidays: Vec::new(),
                },
                gregorian: GregorianDate {
                    date: "15-06-2024".to_string(),
                },
            },
        };

        let model = DisplayModel::build(&data, "Cairo, Egypt", Vec::new());
        let names: Vec<&str> = model.cards.iter().map(|c| c.name).collect();
        assert_eq!(names, PRAYER_ORDER.to_vec());
        // Missing timings render as a placeholder, never reorder the cards
        assert_eq!(model.cards[1].time, "--");
        assert_eq!(model.hijri_header, "15 Ramadan 1445 AH");
        assert_eq!(model.gregorian_header, "15-06-2024 (Cairo, Egypt)");
    }
}
