//! Timetable domain models.
//!
//! Provides the data types a monthly timetable is built from: the month
//! frame (days, displayed hours, holidays) and the people who fill it.
//!
//! # Domain Mappings
//!
//! | u-timetable | Studio | Clinic | School |
//! |-------------|--------|--------|--------|
//! | MonthCalendar | Studio month | Clinic roster month | Term month |
//! | Instructor | Teacher | Doctor | Lecturer |
//! | HourWindow | Class hours | Consultation hours | Periods |

mod calendar;
mod instructor;

pub use calendar::{days_in_month, HourWindow, MonthCalendar, WEEKDAY_LABELS};
pub use instructor::Instructor;
