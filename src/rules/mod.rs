//! Assignment rules and rule engine for hour slots.
//!
//! Provides slot assignment rules (day windows, exclusive days, daily
//! defaults) and an ordered rule engine where the first applicable rule
//! decides the slot.
//!
//! # Usage
//!
//! ```
//! use u_timetable::models::{HourWindow, Instructor};
//! use u_timetable::rules::{DailyWindow, DayWindow, RuleEngine};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(DayWindow::new([9], HourWindow::new(8, 9), Instructor::Sosa))
//!     .with_rule(DailyWindow::new(HourWindow::new(10, 16), Instructor::Kayo));
//!
//! assert_eq!(engine.assign(9, 8), Some(Instructor::Sosa));
//! assert_eq!(engine.assign(1, 11), Some(Instructor::Kayo));
//! assert_eq!(engine.assign(1, 18), None);
//! ```

mod builtin;
mod engine;

pub use builtin::{DailyWindow, DayWindow, ExclusiveDay};
pub use engine::RuleEngine;

use std::fmt::Debug;

use crate::models::Instructor;

/// Outcome of evaluating one rule against a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleVerdict {
    /// The rule does not apply; evaluation continues with the next rule.
    Pass,
    /// The rule applies and assigns the slot.
    Assign(Instructor),
    /// The rule applies and leaves the slot empty; evaluation stops.
    Vacant,
}

impl RuleVerdict {
    /// Whether this verdict ends evaluation.
    #[inline]
    pub fn is_decisive(&self) -> bool {
        !matches!(self, RuleVerdict::Pass)
    }

    /// The assigned instructor, if any.
    pub fn into_instructor(self) -> Option<Instructor> {
        match self {
            RuleVerdict::Assign(instructor) => Some(instructor),
            RuleVerdict::Pass | RuleVerdict::Vacant => None,
        }
    }
}

/// A rule that decides who teaches a (day, hour) slot.
///
/// Rules are pure: the same slot always yields the same verdict. They
/// know nothing about holidays; closed days are handled by the grid
/// builder before any rule is consulted.
pub trait AssignmentRule: Send + Sync + Debug {
    /// Rule name (e.g., "sosa-mornings").
    fn name(&self) -> &str;

    /// Evaluates the rule for a slot.
    fn evaluate(&self, day: u32, hour: u32) -> RuleVerdict;

    /// Rule description.
    fn description(&self) -> String {
        self.name().to_string()
    }
}
