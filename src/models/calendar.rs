//! Month calendar and hour window models.
//!
//! Defines the frame a timetable is laid out in: which month, which
//! hour slots are displayed, and which days the studio is closed.
//!
//! # Time Model
//! Days are 1-based day-of-month numbers. Hours are wall-clock hours
//! (0..=23). The displayed hour list is ordered but need not be contiguous.
//!
//! # Precedence
//! Holidays override everything. A closed day is never handed to the
//! rule engine; the grid builder collapses it into a single cell.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::validation::{validate_calendar, ValidationResult};

/// Localized single-character weekday labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// An inclusive hour interval [first, last].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourWindow {
    /// First hour (inclusive).
    pub first: u32,
    /// Last hour (inclusive).
    pub last: u32,
}

impl HourWindow {
    /// Creates a new hour window.
    pub fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    /// Number of hours covered by this window.
    #[inline]
    pub fn len(&self) -> u32 {
        if self.last < self.first {
            0
        } else {
            self.last - self.first + 1
        }
    }

    /// Whether the window covers no hours.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether an hour falls within this window.
    #[inline]
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.first && hour <= self.last
    }

    /// Whether two windows share at least one hour.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.first <= other.last && other.first <= self.last
    }
}

/// A single month of the studio calendar.
///
/// `month` is 0-indexed (0 = January). `days_in_month` is derived from
/// the year and month at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCalendar {
    /// Calendar year.
    pub year: i32,
    /// Month, 0-indexed.
    pub month: u32,
    /// Number of days in the month.
    pub days_in_month: u32,
    /// Displayed hour slots, ascending.
    pub hours: Vec<u32>,
    /// Days the studio is fully closed.
    pub holidays: BTreeSet<u32>,
}

impl MonthCalendar {
    /// Creates a calendar for the given year and 0-indexed month
    /// with no hours and no holidays.
    ///
    /// # Panics
    /// Panics if `month > 11`.
    pub fn new(year: i32, month: u32) -> Self {
        let days_in_month = days_in_month(year, month)
            .unwrap_or_else(|| panic!("invalid calendar month {year}-{month} (0-indexed)"));
        Self {
            year,
            month,
            days_in_month,
            hours: Vec::new(),
            holidays: BTreeSet::new(),
        }
    }

    /// Sets the displayed hour slots.
    pub fn with_hours(mut self, hours: impl IntoIterator<Item = u32>) -> Self {
        self.hours = hours.into_iter().collect();
        self
    }

    /// Marks a day as a holiday.
    pub fn with_holiday(mut self, day: u32) -> Self {
        self.holidays.insert(day);
        self
    }

    /// Marks several days as holidays.
    pub fn with_holidays(mut self, days: impl IntoIterator<Item = u32>) -> Self {
        self.holidays.extend(days);
        self
    }

    /// Number of displayed hour slots.
    #[inline]
    pub fn hour_count(&self) -> usize {
        self.hours.len()
    }

    /// Iterates every day of the month (1-based).
    pub fn days(&self) -> impl Iterator<Item = u32> {
        1..=self.days_in_month
    }

    /// Whether the studio is closed on `day`.
    #[inline]
    pub fn is_holiday(&self, day: u32) -> bool {
        self.holidays.contains(&day)
    }

    /// Number of days the studio is open.
    pub fn open_days(&self) -> u32 {
        self.days().filter(|&d| !self.is_holiday(d)).count() as u32
    }

    /// Date of a day in this month, or `None` if out of range.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day)
    }

    /// Localized weekday label for `day` (日 for Sunday .. 土 for Saturday).
    ///
    /// # Panics
    /// Panics if `day` is not a day of this month.
    pub fn weekday_label(&self, day: u32) -> &'static str {
        let date = self
            .date(day)
            .unwrap_or_else(|| panic!("day {day} outside {}-{:02}", self.year, self.month + 1));
        WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize]
    }

    /// Checks the configuration invariants of this calendar.
    pub fn validate(&self) -> ValidationResult {
        validate_calendar(self)
    }
}

/// Length of a 0-indexed month, or `None` if the month is invalid.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if month > 11 {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
    let next = if month == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 2, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_window() {
        let w = HourWindow::new(10, 16);
        assert_eq!(w.len(), 7);
        assert!(w.contains(10));
        assert!(w.contains(16)); // inclusive end
        assert!(!w.contains(17));
        assert!(!w.contains(9));
    }

    #[test]
    fn test_hour_window_overlap() {
        let a = HourWindow::new(10, 16);
        let b = HourWindow::new(16, 20);
        assert!(a.overlaps(&b)); // share hour 16

        let c = HourWindow::new(17, 20);
        assert!(!a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn test_empty_window() {
        let w = HourWindow::new(12, 11);
        assert!(w.is_empty());
        assert!(!w.contains(12));
        assert!(!w.overlaps(&HourWindow::new(0, 23)));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 0), Some(31));
        assert_eq!(days_in_month(2025, 1), Some(28));
        assert_eq!(days_in_month(2024, 1), Some(29)); // leap year
        assert_eq!(days_in_month(2025, 10), Some(30));
        assert_eq!(days_in_month(2025, 11), Some(31));
        assert_eq!(days_in_month(2025, 12), None);
    }

    #[test]
    fn test_calendar_builder() {
        let cal = MonthCalendar::new(2025, 10)
            .with_hours(8..=20)
            .with_holiday(5)
            .with_holidays([12, 19]);

        assert_eq!(cal.days_in_month, 30);
        assert_eq!(cal.hour_count(), 13);
        assert!(cal.is_holiday(5));
        assert!(cal.is_holiday(19));
        assert!(!cal.is_holiday(6));
        assert_eq!(cal.open_days(), 27);
        assert_eq!(cal.days().count(), 30);
    }

    #[test]
    fn test_weekday_label() {
        // 2025-11-01 is a Saturday
        let cal = MonthCalendar::new(2025, 10);
        assert_eq!(cal.weekday_label(1), "土");
        assert_eq!(cal.weekday_label(2), "日");
        assert_eq!(cal.weekday_label(5), "水");
    }

    #[test]
    #[should_panic(expected = "invalid calendar month")]
    fn test_invalid_month_panics() {
        let _ = MonthCalendar::new(2025, 12);
    }

    #[test]
    #[should_panic]
    fn test_weekday_label_out_of_range() {
        let cal = MonthCalendar::new(2025, 10);
        let _ = cal.weekday_label(31);
    }
}
