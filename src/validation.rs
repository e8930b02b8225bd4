//! Configuration and structure validation.
//!
//! Calendars are trusted static configuration, so a failed check here
//! means a coding mistake, not bad user input. Detects:
//! - Month index outside 0..=11
//! - Empty, duplicate, unsorted or out-of-range hour slots
//! - Holidays outside the month
//! - A day count that disagrees with the real month length
//!
//! Built grids are checked for the column partition invariant: in every
//! day column, visible rowspans add up to the number of hour slots and
//! every hidden cell is covered by exactly one visible cell above it.

use std::collections::HashSet;

use thiserror::Error;

use crate::grid::Grid;
use crate::models::{days_in_month, MonthCalendar};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Month index is not in 0..=11.
    InvalidMonth,
    /// No hour slots are configured.
    EmptyHours,
    /// An hour slot is not in 0..=23.
    HourOutOfRange,
    /// The same hour appears twice.
    DuplicateHour,
    /// Hour slots are not in ascending order.
    UnsortedHours,
    /// A holiday is not a day of the month.
    HolidayOutOfRange,
    /// `days_in_month` differs from the actual month length.
    DayCountMismatch,
    /// Grid dimensions disagree with the calendar.
    ShapeMismatch,
    /// Visible rowspans in a column do not partition the hour slots.
    RowspanMismatch,
    /// A hidden cell carries a rowspan other than 1.
    HiddenWithSpan,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a month calendar.
///
/// Checks:
/// 1. Month index is 0..=11
/// 2. `days_in_month` matches the real month length
/// 3. At least one hour slot
/// 4. Every hour slot is 0..=23
/// 5. No duplicate hour slots
/// 6. Hour slots ascend
/// 7. Every holiday is a day of the month
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_calendar(calendar: &MonthCalendar) -> ValidationResult {
    let mut errors = Vec::new();

    match days_in_month(calendar.year, calendar.month) {
        None => errors.push(ValidationError::new(
            ValidationErrorKind::InvalidMonth,
            format!("Month index {} is not in 0..=11", calendar.month),
        )),
        Some(actual) if actual != calendar.days_in_month => errors.push(ValidationError::new(
            ValidationErrorKind::DayCountMismatch,
            format!(
                "{}-{:02} has {} days, calendar says {}",
                calendar.year,
                calendar.month + 1,
                actual,
                calendar.days_in_month
            ),
        )),
        Some(_) => {}
    }

    if calendar.hours.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyHours,
            "Calendar has no hour slots",
        ));
    }

    let mut seen = HashSet::new();
    for &hour in &calendar.hours {
        if hour > 23 {
            errors.push(ValidationError::new(
                ValidationErrorKind::HourOutOfRange,
                format!("Hour {hour} is not in 0..=23"),
            ));
        }
        if !seen.insert(hour) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateHour,
                format!("Duplicate hour slot: {hour}"),
            ));
        }
    }

    if calendar.hours.windows(2).any(|w| w[0] > w[1]) {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnsortedHours,
            format!("Hour slots are not ascending: {:?}", calendar.hours),
        ));
    }

    for &day in &calendar.holidays {
        if day == 0 || day > calendar.days_in_month {
            errors.push(ValidationError::new(
                ValidationErrorKind::HolidayOutOfRange,
                format!(
                    "Holiday {day} is not in 1..={}",
                    calendar.days_in_month
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the structure of a built grid.
///
/// Walks each day column top to bottom: a visible cell opens a span of
/// `rowspan` rows, and every following row inside the span must be
/// hidden. A column is valid when its spans exactly tile the hour slots.
pub fn validate_grid(grid: &Grid) -> ValidationResult {
    let mut errors = Vec::new();
    let hour_count = grid.hour_count();

    let width = grid.days_in_month() as usize;
    if grid.rows().len() != hour_count || grid.rows().iter().any(|r| r.len() != width) {
        errors.push(ValidationError::new(
            ValidationErrorKind::ShapeMismatch,
            format!(
                "Grid is not {} x {}",
                hour_count,
                grid.days_in_month()
            ),
        ));
        return Err(errors);
    }

    for day in 1..=grid.days_in_month() {
        let mut covered_until = 0usize;
        let mut span_total = 0usize;

        for (h, cell) in grid.column(day).enumerate() {
            if cell.hidden {
                if cell.rowspan != 1 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::HiddenWithSpan,
                        format!("Hidden cell at day {day}, row {h} has rowspan {}", cell.rowspan),
                    ));
                }
                if h >= covered_until {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::RowspanMismatch,
                        format!("Hidden cell at day {day}, row {h} is not covered by any span"),
                    ));
                }
                continue;
            }

            if h < covered_until {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RowspanMismatch,
                    format!("Visible cell at day {day}, row {h} overlaps the span above it"),
                ));
            }
            span_total += cell.rowspan as usize;
            covered_until = h + cell.rowspan as usize;
        }

        if span_total != hour_count || covered_until != hour_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::RowspanMismatch,
                format!(
                    "Day {day} spans {span_total} rows, expected {hour_count}"
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{build_grid, CellContent, GridCell};
    use crate::rules::RuleEngine;

    fn sample_calendar() -> MonthCalendar {
        MonthCalendar::new(2025, 10)
            .with_hours(8..=20)
            .with_holiday(5)
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_calendar() {
        assert!(validate_calendar(&sample_calendar()).is_ok());
    }

    #[test]
    fn test_invalid_month() {
        let mut cal = sample_calendar();
        cal.month = 12;

        let errors = validate_calendar(&cal).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvalidMonth));
    }

    #[test]
    fn test_day_count_mismatch() {
        let mut cal = sample_calendar();
        cal.days_in_month = 31; // November has 30

        let errors = validate_calendar(&cal).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DayCountMismatch));
    }

    #[test]
    fn test_empty_hours() {
        let cal = MonthCalendar::new(2025, 10);
        let errors = validate_calendar(&cal).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::EmptyHours));
    }

    #[test]
    fn test_duplicate_hour() {
        let cal = sample_calendar().with_hours([8, 9, 9, 10]);
        let errors = validate_calendar(&cal).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DuplicateHour));
    }

    #[test]
    fn test_unsorted_hours() {
        let cal = sample_calendar().with_hours([10, 8, 9]);
        let errors = validate_calendar(&cal).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::UnsortedHours));
        assert!(!has_kind(&errors, ValidationErrorKind::DuplicateHour));
    }

    #[test]
    fn test_hour_out_of_range() {
        let cal = sample_calendar().with_hours([20, 24]);
        let errors = validate_calendar(&cal).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::HourOutOfRange));
    }

    #[test]
    fn test_non_contiguous_hours_are_fine() {
        let cal = sample_calendar().with_hours([8, 10, 12, 18]);
        assert!(validate_calendar(&cal).is_ok());
    }

    #[test]
    fn test_holiday_out_of_range() {
        let cal = sample_calendar().with_holidays([0, 31]);
        let errors = validate_calendar(&cal).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::HolidayOutOfRange)
                .count(),
            2
        );
    }

    #[test]
    fn test_multiple_errors() {
        let mut cal = MonthCalendar::new(2025, 10).with_holiday(40);
        cal.days_in_month = 29;

        let errors = validate_calendar(&cal).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_error_display() {
        let cal = sample_calendar().with_hours([8, 8]);
        let errors = validate_calendar(&cal).unwrap_err();
        assert_eq!(errors[0].to_string(), "DuplicateHour: Duplicate hour slot: 8");
    }

    #[test]
    fn test_valid_grid() {
        let grid = build_grid(&sample_calendar(), &crate::presets::studio_rules());
        assert!(validate_grid(&grid).is_ok());
    }

    #[test]
    fn test_grid_rowspan_mismatch() {
        let cal = sample_calendar();
        let mut grid = build_grid(&cal, &RuleEngine::new());
        // Stretch the first cell of day 1 without hiding what it covers.
        grid.cell_mut(0, 1).rowspan = 3;

        let errors = validate_grid(&grid).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::RowspanMismatch));
    }

    #[test]
    fn test_grid_uncovered_hidden_cell() {
        let cal = sample_calendar();
        let mut grid = build_grid(&cal, &RuleEngine::new());
        *grid.cell_mut(4, 2) = GridCell {
            content: CellContent::Vacant,
            rowspan: 1,
            hidden: true,
        };

        let errors = validate_grid(&grid).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::RowspanMismatch));
    }

    #[test]
    fn test_grid_hidden_with_span() {
        let cal = sample_calendar();
        let mut grid = build_grid(&cal, &RuleEngine::new());
        // Day 5 is a holiday: row 0 owns the column, row 1 is hidden.
        grid.cell_mut(1, 5).rowspan = 2;

        let errors = validate_grid(&grid).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::HiddenWithSpan));
    }
}
