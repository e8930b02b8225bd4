//! Prints the studio timetable for the published month as an HTML page.

use std::io::{self, Write};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use u_timetable::grid::{Grid, GridSummary};
use u_timetable::presets::{studio_calendar, studio_rules};
use u_timetable::render::{render_page, Palette};
use u_timetable::validation::validate_grid;
use u_timetable::TimetableError;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let calendar = studio_calendar();
    let rules = studio_rules();
    info!(
        year = calendar.year,
        month = calendar.month + 1,
        rules = rules.len(),
        "building timetable"
    );

    let grid = Grid::try_build(&calendar, &rules)?;
    validate_grid(&grid).map_err(TimetableError::InvalidGrid)?;

    let summary = GridSummary::calculate(&grid);
    for (instructor, hours) in &summary.hours_by_instructor {
        info!(%instructor, hours, "assigned");
    }
    info!(
        vacant = summary.vacant_slots,
        holidays = summary.holidays,
        coverage = %format!("{:.1}%", summary.coverage_rate * 100.0),
        "timetable built"
    );

    let page = render_page(&grid, &calendar, &Palette::studio());
    io::stdout().lock().write_all(page.as_bytes())?;
    Ok(())
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
