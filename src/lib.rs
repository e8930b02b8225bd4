//! Rule-based monthly timetable for the U-Engine ecosystem.
//!
//! Assigns instructors to (day, hour) slots with an ordered list of
//! rules, lays the result out as a month grid with merged (rowspan)
//! cells, and renders it as an HTML table.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `MonthCalendar`, `HourWindow`, `Instructor`
//! - **`rules`**: `AssignmentRule` trait, built-in rules, first-match `RuleEngine`
//! - **`grid`**: `build_grid` with rowspan merging, `Grid`, `GridCell`, `GridSummary`
//! - **`validation`**: Calendar configuration checks and grid invariant checks
//! - **`render`**: HTML table output and the instructor color palette
//! - **`presets`**: The studio's published month and rule list
//!
//! # Example
//!
//! ```
//! use u_timetable::grid::build_grid;
//! use u_timetable::presets::{studio_calendar, studio_rules};
//!
//! let grid = build_grid(&studio_calendar(), &studio_rules());
//! assert_eq!(grid.cell(0, 5).label(), Some("休み"));
//! assert_eq!(grid.cell(0, 5).rowspan, 13);
//! ```
//!
//! # Architecture
//!
//! Data flows one way: calendar constants → rule engine → grid builder →
//! renderer. Everything is pure; rebuilding the grid always yields the
//! same result for the same calendar and rules.

pub mod error;
pub mod grid;
pub mod models;
pub mod presets;
pub mod render;
pub mod rules;
pub mod validation;

pub use error::{Result, TimetableError};
