//! HTML table output.
//!
//! One header row of day numbers with weekday labels, one row per hour
//! slot. Hidden cells are never emitted.

use std::fmt::Write;

use super::Palette;
use crate::grid::{Grid, GridCell};
use crate::models::MonthCalendar;

/// Escapes text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Page title, e.g. `2025年11月 スケジュール`.
pub fn title(calendar: &MonthCalendar) -> String {
    format!("{}年{}月 スケジュール", calendar.year, calendar.month + 1)
}

/// Renders the grid as an HTML `<table>`.
///
/// One header row of day numbers with weekday labels, then one row per
/// hour slot. Hidden cells produce no `<td>`; the covering cell carries
/// the `rowspan`.
pub fn render_table(grid: &Grid, calendar: &MonthCalendar, palette: &Palette) -> String {
    let mut out = String::new();
    out.push_str("<table class=\"timetable\">\n<thead>\n<tr><th></th>");
    for day in 1..=grid.days_in_month() {
        let _ = write!(
            out,
            "<th>{}<br>{}</th>",
            day,
            escape(calendar.weekday_label(day))
        );
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for (h, hour) in grid.hours().iter().enumerate() {
        let _ = write!(out, "<tr><th>{hour}:00</th>");
        for day in 1..=grid.days_in_month() {
            let cell = grid.cell(h, day);
            if cell.is_visible() {
                write_cell(&mut out, cell, palette);
            }
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n");
    out
}

fn write_cell(out: &mut String, cell: &GridCell, palette: &Palette) {
    out.push_str("<td");
    if cell.rowspan > 1 {
        let _ = write!(out, " rowspan=\"{}\"", cell.rowspan);
    }
    let color = palette.color_for(&cell.content);
    let _ = write!(
        out,
        " style=\"background-color:{}\">{}</td>",
        color.hex(),
        escape(cell.label().unwrap_or(""))
    );
}

/// Renders a complete HTML document around the table.
pub fn render_page(grid: &Grid, calendar: &MonthCalendar, palette: &Palette) -> String {
    let title = escape(&title(calendar));
    format!(
        "<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n\
         table.timetable {{ border-collapse: collapse; font-size: 12px; }}\n\
         table.timetable th, table.timetable td {{ border: 1px solid #d1d5db; padding: 2px 4px; text-align: center; }}\n\
         </style>\n</head>\n<body>\n<h1>{title}</h1>\n{}</body>\n</html>\n",
        render_table(grid, calendar, palette)
    )
}
