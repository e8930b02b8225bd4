//! Timetable grid and rowspan merging.
//!
//! # Algorithm
//!
//! 1. Start with every cell vacant, visible, rowspan 1.
//! 2. For each day of the month:
//!    - Holiday: row 0 becomes a single holiday cell spanning every hour
//!      slot; all other rows are hidden. No rule is consulted.
//!    - Otherwise walk the hour slots top to bottom. Each visible slot
//!      asks the rule engine for its instructor. An assigned slot scans
//!      forward while the engine returns the same instructor, hiding each
//!      covered slot and growing its rowspan.
//!
//! Merging is forward-only and greedy. Vacant slots are never merged, so
//! a run never crosses a gap even if the instructors on both sides match.
//!
//! # Complexity
//! O(h * d) rule evaluations where h=hour slots, d=days in month.

mod summary;

pub use summary::GridSummary;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, TimetableError};
use crate::models::{Instructor, MonthCalendar};
use crate::rules::RuleEngine;

/// Label shown in a holiday cell.
pub const HOLIDAY_LABEL: &str = "休み";

/// What a grid cell shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellContent {
    /// No instructor.
    #[default]
    Vacant,
    /// An instructor teaches this slot.
    Assigned(Instructor),
    /// The studio is closed all day.
    Holiday,
}

impl CellContent {
    /// Display label: instructor name, holiday label, or `None` if vacant.
    pub fn label(&self) -> Option<&str> {
        match self {
            CellContent::Vacant => None,
            CellContent::Assigned(instructor) => Some(instructor.name()),
            CellContent::Holiday => Some(HOLIDAY_LABEL),
        }
    }
}

/// One (hour, day) cell of the timetable.
///
/// A hidden cell is covered by a visible cell above it; it always has
/// rowspan 1 and its content is unused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Cell content.
    pub content: CellContent,
    /// Number of hour slots this cell occupies (>= 1).
    pub rowspan: u32,
    /// Whether an earlier cell's rowspan covers this one.
    pub hidden: bool,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            content: CellContent::Vacant,
            rowspan: 1,
            hidden: false,
        }
    }
}

impl GridCell {
    /// The assigned instructor, if any.
    pub fn instructor(&self) -> Option<&Instructor> {
        match &self.content {
            CellContent::Assigned(instructor) => Some(instructor),
            _ => None,
        }
    }

    /// Display label of the cell.
    pub fn label(&self) -> Option<&str> {
        self.content.label()
    }

    /// Whether the cell is rendered.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

/// A month timetable laid out as `[hour_index][day]`.
///
/// Days are 1-based in every accessor. A grid is read-only once built:
///
/// ```compile_fail
/// use u_timetable::grid::build_grid;
/// use u_timetable::presets::{studio_calendar, studio_rules};
///
/// let mut grid = build_grid(&studio_calendar(), &studio_rules());
/// grid.cell_mut(0, 1).rowspan = 3;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    hours: Vec<u32>,
    days_in_month: u32,
    rows: Vec<Vec<GridCell>>,
}

impl Grid {
    /// Creates a grid of vacant, visible, single-slot cells.
    fn blank(hours: &[u32], days_in_month: u32) -> Self {
        Self {
            hours: hours.to_vec(),
            days_in_month,
            rows: vec![vec![GridCell::default(); days_in_month as usize]; hours.len()],
        }
    }

    /// Builds the grid, returning an error if the calendar is invalid.
    pub fn try_build(calendar: &MonthCalendar, engine: &RuleEngine) -> Result<Self> {
        calendar
            .validate()
            .map_err(TimetableError::InvalidCalendar)?;
        Ok(fill(calendar, engine))
    }

    /// Hour slots, one per row.
    pub fn hours(&self) -> &[u32] {
        &self.hours
    }

    /// Number of hour slots.
    #[inline]
    pub fn hour_count(&self) -> usize {
        self.hours.len()
    }

    /// Number of day columns.
    #[inline]
    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// All rows, indexed `[hour_index][day - 1]`.
    pub fn rows(&self) -> &[Vec<GridCell>] {
        &self.rows
    }

    /// The cell for an hour index and a 1-based day.
    ///
    /// # Panics
    /// Panics if either coordinate is outside the grid.
    pub fn cell(&self, hour_index: usize, day: u32) -> &GridCell {
        &self.rows[hour_index][self.column_index(day)]
    }

    /// Mutable access to a cell, for the builder and in-crate checks.
    ///
    /// # Panics
    /// Panics if either coordinate is outside the grid.
    pub(crate) fn cell_mut(&mut self, hour_index: usize, day: u32) -> &mut GridCell {
        let col = self.column_index(day);
        &mut self.rows[hour_index][col]
    }

    /// Cells of one day, top to bottom.
    pub fn column(&self, day: u32) -> impl Iterator<Item = &GridCell> + '_ {
        let col = self.column_index(day);
        self.rows.iter().map(move |row| &row[col])
    }

    /// Visible cells of one day with their hour index.
    pub fn visible_cells(&self, day: u32) -> impl Iterator<Item = (usize, &GridCell)> + '_ {
        self.column(day)
            .enumerate()
            .filter(|(_, cell)| cell.is_visible())
    }

    fn column_index(&self, day: u32) -> usize {
        assert!(
            day >= 1 && day <= self.days_in_month,
            "day {day} outside 1..={}",
            self.days_in_month
        );
        (day - 1) as usize
    }
}

/// Builds the timetable grid for a month.
///
/// # Panics
/// Panics if the calendar fails validation; calendars are static
/// configuration, so an invalid one is a coding error.
pub fn build_grid(calendar: &MonthCalendar, engine: &RuleEngine) -> Grid {
    if let Err(errors) = calendar.validate() {
        panic!("{}", TimetableError::InvalidCalendar(errors));
    }
    fill(calendar, engine)
}

fn fill(calendar: &MonthCalendar, engine: &RuleEngine) -> Grid {
    let hours = &calendar.hours;
    let mut grid = Grid::blank(hours, calendar.days_in_month);

    for day in calendar.days() {
        if calendar.is_holiday(day) {
            debug!(day, "holiday");
            *grid.cell_mut(0, day) = GridCell {
                content: CellContent::Holiday,
                rowspan: hours.len() as u32,
                hidden: false,
            };
            for h in 1..hours.len() {
                grid.cell_mut(h, day).hidden = true;
            }
            continue;
        }

        for h in 0..hours.len() {
            if grid.cell(h, day).hidden {
                continue;
            }

            let Some(instructor) = engine.assign(day, hours[h]) else {
                continue;
            };

            let mut span = 1u32;
            let mut next = h + 1;
            while next < hours.len()
                && engine.assign(day, hours[next]).as_ref() == Some(&instructor)
            {
                grid.cell_mut(next, day).hidden = true;
                span += 1;
                next += 1;
            }

            if span > 1 {
                trace!(day, hour = hours[h], span, %instructor, "merged run");
            }
            let owner = grid.cell_mut(h, day);
            owner.content = CellContent::Assigned(instructor);
            owner.rowspan = span;
        }
    }

    debug!(
        year = calendar.year,
        month = calendar.month,
        days = calendar.days_in_month,
        hours = hours.len(),
        "grid built"
    );
    grid
}
