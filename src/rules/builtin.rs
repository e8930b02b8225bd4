//! Built-in assignment rules.
//!
//! # Categories
//!
//! - **Day-scoped**: `DayWindow` (selected days, one hour window),
//!   `ExclusiveDay` (one day, everything outside the window stays empty)
//! - **Daily**: `DailyWindow` (every day, one hour window)
//!
//! Each rule carries a name so the precedence list can be inspected and
//! a decision traced back to the rule that made it.

use std::collections::BTreeSet;

use super::{AssignmentRule, RuleVerdict};
use crate::models::{HourWindow, Instructor};

fn format_days(days: &BTreeSet<u32>) -> String {
    let list: Vec<String> = days.iter().map(u32::to_string).collect();
    format!("{{{}}}", list.join(","))
}

/// Assigns an instructor on selected days within an hour window.
///
/// Passes on any other day or hour, so later rules still apply.
#[derive(Debug, Clone)]
pub struct DayWindow {
    name: String,
    days: BTreeSet<u32>,
    hours: HourWindow,
    instructor: Instructor,
}

impl DayWindow {
    /// Creates a day window rule.
    pub fn new(days: impl IntoIterator<Item = u32>, hours: HourWindow, instructor: Instructor) -> Self {
        let days: BTreeSet<u32> = days.into_iter().collect();
        let name = format!(
            "{}@{}[{}-{}]",
            instructor,
            format_days(&days),
            hours.first,
            hours.last
        );
        Self {
            name,
            days,
            hours,
            instructor,
        }
    }

    /// Overrides the generated rule name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Days this rule applies to.
    pub fn days(&self) -> &BTreeSet<u32> {
        &self.days
    }
}

impl AssignmentRule for DayWindow {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, day: u32, hour: u32) -> RuleVerdict {
        if self.days.contains(&day) && self.hours.contains(hour) {
            RuleVerdict::Assign(self.instructor.clone())
        } else {
            RuleVerdict::Pass
        }
    }

    fn description(&self) -> String {
        format!(
            "{} on days {} from {}:00 to {}:00",
            self.instructor,
            format_days(&self.days),
            self.hours.first,
            self.hours.last
        )
    }
}

/// Claims an entire day for one instructor and window.
///
/// On the matching day the rule always decides: inside the window the
/// instructor is assigned, outside it the slot stays empty. Later rules
/// never see that day.
#[derive(Debug, Clone)]
pub struct ExclusiveDay {
    name: String,
    day: u32,
    hours: HourWindow,
    instructor: Instructor,
}

impl ExclusiveDay {
    /// Creates an exclusive day rule.
    pub fn new(day: u32, hours: HourWindow, instructor: Instructor) -> Self {
        let name = format!("{}@{}!", instructor, day);
        Self {
            name,
            day,
            hours,
            instructor,
        }
    }

    /// Overrides the generated rule name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The day this rule claims.
    pub fn day(&self) -> u32 {
        self.day
    }
}

impl AssignmentRule for ExclusiveDay {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, day: u32, hour: u32) -> RuleVerdict {
        if day != self.day {
            RuleVerdict::Pass
        } else if self.hours.contains(hour) {
            RuleVerdict::Assign(self.instructor.clone())
        } else {
            RuleVerdict::Vacant
        }
    }

    fn description(&self) -> String {
        format!(
            "only {} on day {} from {}:00 to {}:00",
            self.instructor, self.day, self.hours.first, self.hours.last
        )
    }
}

/// Assigns an instructor every day within an hour window.
#[derive(Debug, Clone)]
pub struct DailyWindow {
    name: String,
    hours: HourWindow,
    instructor: Instructor,
}

impl DailyWindow {
    /// Creates a daily window rule.
    pub fn new(hours: HourWindow, instructor: Instructor) -> Self {
        let name = format!("{}[{}-{}]", instructor, hours.first, hours.last);
        Self {
            name,
            hours,
            instructor,
        }
    }

    /// Overrides the generated rule name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl AssignmentRule for DailyWindow {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, _day: u32, hour: u32) -> RuleVerdict {
        if self.hours.contains(hour) {
            RuleVerdict::Assign(self.instructor.clone())
        } else {
            RuleVerdict::Pass
        }
    }

    fn description(&self) -> String {
        format!(
            "{} daily from {}:00 to {}:00",
            self.instructor, self.hours.first, self.hours.last
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_window() {
        let rule = DayWindow::new([9, 23], HourWindow::new(8, 9), Instructor::Sosa);
        assert_eq!(rule.evaluate(9, 8), RuleVerdict::Assign(Instructor::Sosa));
        assert_eq!(rule.evaluate(23, 9), RuleVerdict::Assign(Instructor::Sosa));
        assert_eq!(rule.evaluate(9, 10), RuleVerdict::Pass);
        assert_eq!(rule.evaluate(10, 8), RuleVerdict::Pass);
        assert_eq!(rule.name(), "Sosa@{9,23}[8-9]");
    }

    #[test]
    fn test_exclusive_day() {
        let rule = ExclusiveDay::new(20, HourWindow::new(11, 13), Instructor::Emi);
        assert_eq!(rule.evaluate(20, 12), RuleVerdict::Assign(Instructor::Emi));
        assert_eq!(rule.evaluate(20, 9), RuleVerdict::Vacant);
        assert_eq!(rule.evaluate(20, 18), RuleVerdict::Vacant);
        assert_eq!(rule.evaluate(21, 12), RuleVerdict::Pass);
    }

    #[test]
    fn test_daily_window() {
        let rule = DailyWindow::new(HourWindow::new(17, 20), Instructor::Gota);
        assert_eq!(rule.evaluate(1, 17), RuleVerdict::Assign(Instructor::Gota));
        assert_eq!(rule.evaluate(30, 20), RuleVerdict::Assign(Instructor::Gota));
        assert_eq!(rule.evaluate(1, 16), RuleVerdict::Pass);
    }

    #[test]
    fn test_custom_name() {
        let rule = DailyWindow::new(HourWindow::new(10, 16), Instructor::Kayo)
            .with_name("kayo-daytime");
        assert_eq!(rule.name(), "kayo-daytime");
        assert_eq!(rule.description(), "Kayo daily from 10:00 to 16:00");
    }

    #[test]
    fn test_verdict_helpers() {
        assert!(!RuleVerdict::Pass.is_decisive());
        assert!(RuleVerdict::Vacant.is_decisive());
        assert_eq!(RuleVerdict::Vacant.into_instructor(), None);
        assert_eq!(
            RuleVerdict::Assign(Instructor::Emi).into_instructor(),
            Some(Instructor::Emi)
        );
    }
}
