//! Ordered rule engine for slot assignment.
//!
//! Rules are evaluated in insertion order; the first rule whose verdict
//! is not `Pass` decides the slot. Rule order is load-bearing because
//! rules overlap (an exclusive day shadows every daily default).

use std::sync::Arc;

use tracing::trace;

use super::{AssignmentRule, RuleVerdict};
use crate::models::{Instructor, MonthCalendar};

/// Largest valid day-of-month.
const MAX_DAY: u32 = 31;
/// Largest valid wall-clock hour.
const MAX_HOUR: u32 = 23;

/// A first-match rule engine for (day, hour) slots.
///
/// # Example
/// ```
/// use u_timetable::models::{HourWindow, Instructor};
/// use u_timetable::rules::{DailyWindow, ExclusiveDay, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(ExclusiveDay::new(13, HourWindow::new(10, 20), Instructor::Gota))
///     .with_rule(DailyWindow::new(HourWindow::new(10, 16), Instructor::Kayo));
///
/// assert_eq!(engine.assign(13, 12), Some(Instructor::Gota));
/// assert_eq!(engine.assign(14, 12), Some(Instructor::Kayo));
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn AssignmentRule>>,
    domain: Option<SlotDomain>,
}

/// The slots an engine is allowed to answer for.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SlotDomain {
    days_in_month: u32,
    hours: Vec<u32>,
}

impl RuleEngine {
    /// Creates an empty rule engine (every slot vacant).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            domain: None,
        }
    }

    /// Restricts the engine to days 1..=`days_in_month` and the listed
    /// hour slots. Queries outside the domain panic.
    pub fn with_domain(mut self, days_in_month: u32, hours: impl IntoIterator<Item = u32>) -> Self {
        self.domain = Some(SlotDomain {
            days_in_month,
            hours: hours.into_iter().collect(),
        });
        self
    }

    /// Restricts the engine to the days and hour slots of a calendar.
    pub fn with_calendar(self, calendar: &MonthCalendar) -> Self {
        let hours = calendar.hours.clone();
        self.with_domain(calendar.days_in_month, hours)
    }

    /// Appends a rule with the lowest precedence so far.
    pub fn with_rule<R: AssignmentRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the engine has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in precedence order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the instructor assigned to a slot, or `None` if vacant.
    ///
    /// # Panics
    /// Panics if `day` is not in 1..=31 or `hour` is not in 0..=23, and,
    /// when a domain is set, if `day` is past the end of the month or
    /// `hour` is not one of its slots.
    pub fn assign(&self, day: u32, hour: u32) -> Option<Instructor> {
        self.decide(day, hour)
            .and_then(|(_, verdict)| verdict.into_instructor())
    }

    /// Returns the name of the rule that decides a slot, or `None` if
    /// no rule applies.
    ///
    /// # Panics
    /// Panics under the same conditions as [`RuleEngine::assign`].
    pub fn explain(&self, day: u32, hour: u32) -> Option<&str> {
        self.decide(day, hour).map(|(rule, _)| rule.name())
    }

    fn decide(&self, day: u32, hour: u32) -> Option<(&dyn AssignmentRule, RuleVerdict)> {
        assert!(
            (1..=MAX_DAY).contains(&day),
            "day {day} outside 1..={MAX_DAY}"
        );
        assert!(hour <= MAX_HOUR, "hour {hour} outside 0..={MAX_HOUR}");
        if let Some(domain) = &self.domain {
            assert!(
                day <= domain.days_in_month,
                "day {day} outside 1..={}",
                domain.days_in_month
            );
            assert!(
                domain.hours.contains(&hour),
                "hour {hour} is not a configured slot {:?}",
                domain.hours
            );
        }

        for rule in &self.rules {
            let verdict = rule.evaluate(day, hour);
            if verdict.is_decisive() {
                trace!(day, hour, rule = rule.name(), ?verdict, "slot decided");
                return Some((&**rule, verdict));
            }
        }
        None
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("domain", &self.domain)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HourWindow;
    use crate::rules::{DailyWindow, DayWindow, ExclusiveDay};

    fn overlapping_engine() -> RuleEngine {
        RuleEngine::new()
            .with_rule(ExclusiveDay::new(13, HourWindow::new(10, 20), Instructor::Gota))
            .with_rule(DayWindow::new([3], HourWindow::new(11, 13), Instructor::Emi))
            .with_rule(DailyWindow::new(HourWindow::new(10, 16), Instructor::Kayo))
    }

    #[test]
    fn test_first_match_wins() {
        let engine = overlapping_engine();
        assert_eq!(engine.assign(3, 12), Some(Instructor::Emi));
        assert_eq!(engine.assign(3, 14), Some(Instructor::Kayo));
        assert_eq!(engine.assign(4, 12), Some(Instructor::Kayo));
    }

    #[test]
    fn test_vacant_verdict_stops_evaluation() {
        let engine = overlapping_engine();
        // Day 13 is exclusive: hour 9 stays empty even though nothing else
        // would assign it, and the daily default never sees day 13.
        assert_eq!(engine.assign(13, 9), None);
        assert_eq!(engine.assign(13, 15), Some(Instructor::Gota));
        assert_eq!(engine.explain(13, 9), Some("Gota@13!"));
    }

    #[test]
    fn test_order_matters() {
        let reversed = RuleEngine::new()
            .with_rule(DailyWindow::new(HourWindow::new(10, 16), Instructor::Kayo))
            .with_rule(DayWindow::new([3], HourWindow::new(11, 13), Instructor::Emi));
        assert_eq!(reversed.assign(3, 12), Some(Instructor::Kayo));
    }

    #[test]
    fn test_no_rule_applies() {
        let engine = overlapping_engine();
        assert_eq!(engine.assign(1, 8), None);
        assert_eq!(engine.explain(1, 8), None);
    }

    #[test]
    fn test_empty_engine() {
        let engine = RuleEngine::new();
        assert!(engine.is_empty());
        assert_eq!(engine.assign(1, 12), None);
    }

    #[test]
    fn test_rule_names() {
        let engine = overlapping_engine();
        assert_eq!(engine.len(), 3);
        assert_eq!(
            engine.rule_names(),
            vec!["Gota@13!", "Emi@{3}[11-13]", "Kayo[10-16]"]
        );
        assert!(format!("{engine:?}").contains("Kayo[10-16]"));
    }

    #[test]
    fn test_unbounded_engine_accepts_any_month_day() {
        assert_eq!(overlapping_engine().assign(31, 12), Some(Instructor::Kayo));
    }

    #[test]
    fn test_domain_accepts_configured_slots() {
        let engine = overlapping_engine().with_domain(30, [10, 12, 14]);
        assert_eq!(engine.assign(30, 12), Some(Instructor::Kayo));
        assert_eq!(engine.explain(13, 10), Some("Gota@13!"));
    }

    #[test]
    #[should_panic(expected = "day 31 outside 1..=30")]
    fn test_domain_rejects_day_past_month_end() {
        overlapping_engine().with_domain(30, 8..=20).assign(31, 12);
    }

    #[test]
    #[should_panic(expected = "hour 11 is not a configured slot")]
    fn test_domain_rejects_unlisted_hour() {
        overlapping_engine().with_domain(30, [10, 12, 14]).explain(1, 11);
    }

    #[test]
    fn test_with_calendar_domain() {
        let cal = MonthCalendar::new(2025, 1).with_hours([10, 11]);
        let engine = overlapping_engine().with_calendar(&cal);
        assert!(format!("{engine:?}").contains("days_in_month: 28"));
        assert_eq!(engine.assign(28, 11), Some(Instructor::Kayo));
    }

    #[test]
    #[should_panic(expected = "day 0")]
    fn test_day_zero_panics() {
        overlapping_engine().assign(0, 12);
    }

    #[test]
    #[should_panic(expected = "hour 24")]
    fn test_hour_out_of_range_panics() {
        overlapping_engine().assign(1, 24);
    }
}
