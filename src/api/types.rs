//! AlAdhan payload types
//!
//! Every response wraps its payload as `{code, data}`; `code` is the API's
//! own status and is checked by the client before `data` is deserialized.

use serde::Deserialize;
use std::collections::HashMap;

/// Timings payload: prayer-name to time-of-day plus the date record
#[derive(Debug, Clone, Deserialize)]
pub struct TimingsData {
    pub timings: HashMap<String, String>,
    pub date: DateInfo,
}

/// Parallel Hijri and Gregorian representations of one day
#[derive(Debug, Clone, Deserialize)]
pub struct DateInfo {
    pub hijri: HijriDate,
    pub gregorian: GregorianDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HijriDate {
    pub day: String,
    pub month: HijriMonth,
    pub year: String,
    #[serde(default)]
    pub holidays: Vec<String>,
}

impl HijriDate {
    /// "{day} {monthName} {year} AH"
    pub fn label(&self) -> String {
        format!("{} {} {} AH", self.day, self.month.en, self.year)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HijriMonth {
    pub number: u32,
    pub en: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GregorianDate {
    /// DD-MM-YYYY
    pub date: String,
}

/// One per-day entry of a monthly calendar response
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarEntry {
    pub date: DateInfo,
}

/// Raw `/methods` record; some catalog entries carry no usable id or name
#[derive(Debug, Clone, Deserialize)]
pub struct MethodRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
}
