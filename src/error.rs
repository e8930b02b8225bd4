//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias for fallible timetable operations.
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Errors surfaced when a timetable is built through a fallible path.
#[derive(Error, Debug)]
pub enum TimetableError {
    /// The calendar failed configuration checks.
    #[error("Invalid calendar: {}", join(.0))]
    InvalidCalendar(Vec<ValidationError>),

    /// A built grid broke the column partition invariant.
    #[error("Invalid grid: {}", join(.0))]
    InvalidGrid(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthCalendar;

    #[test]
    fn test_invalid_calendar_message() {
        let cal = MonthCalendar::new(2025, 10).with_hours([9, 8]);
        let errors = cal.validate().unwrap_err();
        let err = TimetableError::InvalidCalendar(errors);
        assert_eq!(
            err.to_string(),
            "Invalid calendar: UnsortedHours: Hour slots are not ascending: [9, 8]"
        );
    }
}
