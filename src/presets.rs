//! Studio configuration for the published month.
//!
//! The month frame and the rule list are constants. Rule order is
//! precedence order: early-morning sessions first, then the two
//! exclusive days, then per-day exceptions, then the daily defaults.

use crate::models::{HourWindow, Instructor, MonthCalendar};
use crate::rules::{DailyWindow, DayWindow, ExclusiveDay, RuleEngine};

/// Calendar year.
pub const YEAR: i32 = 2025;
/// Month, 0-indexed (November).
pub const MONTH: u32 = 10;
/// Displayed hour slots.
pub const HOURS: [u32; 13] = [8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20];
/// Closed days (Wednesdays).
pub const HOLIDAYS: [u32; 4] = [5, 12, 19, 26];

/// Days with early-morning sessions.
pub const SOSA_DAYS: [u32; 2] = [9, 23];
/// Day taught entirely by Gota.
pub const GOTA_FULL_DAY: u32 = 13;
/// Day with only the midday Emi session.
pub const EMI_ONLY_DAY: u32 = 20;
/// Days Gota covers the daytime block.
pub const GOTA_DAYTIME_DAYS: [u32; 2] = [17, 24];
/// Days Emi takes the midday block.
pub const EMI_MIDDAY_DAYS: [u32; 2] = [3, 10];

const MORNING: HourWindow = HourWindow { first: 8, last: 9 };
const DAYTIME: HourWindow = HourWindow { first: 10, last: 16 };
const MIDDAY: HourWindow = HourWindow { first: 11, last: 13 };
const EVENING: HourWindow = HourWindow { first: 17, last: 20 };
const OPEN: HourWindow = HourWindow { first: 10, last: 20 };

/// The studio calendar for the published month.
pub fn studio_calendar() -> MonthCalendar {
    MonthCalendar::new(YEAR, MONTH)
        .with_hours(HOURS)
        .with_holidays(HOLIDAYS)
}

/// The studio rule list, highest precedence first, bound to the days
/// and hour slots of [`studio_calendar`].
pub fn studio_rules() -> RuleEngine {
    RuleEngine::new()
        .with_rule(DayWindow::new(SOSA_DAYS, MORNING, Instructor::Sosa).with_name("sosa-mornings"))
        .with_rule(ExclusiveDay::new(GOTA_FULL_DAY, OPEN, Instructor::Gota).with_name("gota-full-day"))
        .with_rule(ExclusiveDay::new(EMI_ONLY_DAY, MIDDAY, Instructor::Emi).with_name("emi-only-day"))
        .with_rule(
            DayWindow::new(GOTA_DAYTIME_DAYS, DAYTIME, Instructor::Gota).with_name("gota-daytime"),
        )
        .with_rule(DayWindow::new(EMI_MIDDAY_DAYS, MIDDAY, Instructor::Emi).with_name("emi-midday"))
        .with_rule(DailyWindow::new(EVENING, Instructor::Gota).with_name("gota-evenings"))
        .with_rule(DailyWindow::new(DAYTIME, Instructor::Kayo).with_name("kayo-daytime"))
        .with_calendar(&studio_calendar())
}
