//! Timetable summary metrics.
//!
//! Computes staffing indicators from a built grid.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Hours by instructor | Sum of rowspans of that instructor's cells |
//! | Taught slots | Sum over all instructors |
//! | Vacant slots | Open-day slots with no instructor |
//! | Holidays | Days collapsed into a holiday cell |
//! | Coverage rate | Taught slots / open-day slots |

use std::collections::BTreeMap;

use super::{CellContent, Grid};
use crate::models::Instructor;

/// Staffing indicators for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSummary {
    /// Slots taught per instructor.
    pub hours_by_instructor: BTreeMap<Instructor, u32>,
    /// Total slots with an instructor.
    pub taught_slots: u32,
    /// Open-day slots with no instructor.
    pub vacant_slots: u32,
    /// Number of holidays.
    pub holidays: u32,
    /// Fraction of open-day slots with an instructor (0.0..1.0).
    pub coverage_rate: f64,
}

impl GridSummary {
    /// Computes the summary from a built grid.
    pub fn calculate(grid: &Grid) -> Self {
        let mut hours_by_instructor: BTreeMap<Instructor, u32> = BTreeMap::new();
        let mut vacant_slots: u32 = 0;
        let mut holidays: u32 = 0;

        for day in 1..=grid.days_in_month() {
            for (_, cell) in grid.visible_cells(day) {
                match &cell.content {
                    CellContent::Assigned(instructor) => {
                        *hours_by_instructor.entry(instructor.clone()).or_insert(0) += cell.rowspan;
                    }
                    CellContent::Vacant => vacant_slots += cell.rowspan,
                    CellContent::Holiday => holidays += 1,
                }
            }
        }

        let taught_slots: u32 = hours_by_instructor.values().sum();
        let open_slots = taught_slots + vacant_slots;
        let coverage_rate = if open_slots > 0 {
            taught_slots as f64 / open_slots as f64
        } else {
            0.0
        };

        Self {
            hours_by_instructor,
            taught_slots,
            vacant_slots,
            holidays,
            coverage_rate,
        }
    }

    /// Slots taught by one instructor.
    pub fn hours_for(&self, instructor: &Instructor) -> u32 {
        self.hours_by_instructor.get(instructor).copied().unwrap_or(0)
    }
}
