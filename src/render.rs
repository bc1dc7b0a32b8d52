//! Grid renderer: turns built month layouts into printable text.
//!
//! Two modes are supported. Stacked prints one month block after another.
//! Interlaced prints months side by side, aligning them by week index and
//! padding months that run out of rows with blank fields, so every line
//! of a band has the same width.

use crate::layout::{MonthLayout, WeekRow};
use crate::types::{DAYS_PER_WEEK, MAX_WEEKS_PER_MONTH, WeekdayOrdering};

/// Spaces between two interlaced month columns.
pub const MARGIN_WIDTH: usize = 2;

const EMPTY_CELL: &str = "   ";
const WEEK_NUMBER_HEADER: &str = "Wk ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Prefix each row with its ISO week number.
    pub week_numbers: bool,
}

/// Pads `s` with spaces to exactly `width`, the extra space going right
/// when the shortfall is odd. Strings already at least `width` wide are
/// returned unchanged.
pub fn center_string(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }

    let total_padding = width - len;
    let left_padding = total_padding / 2;
    let right_padding = total_padding - left_padding;
    format!("{}{}{}", " ".repeat(left_padding), s, " ".repeat(right_padding))
}

pub fn header_line(ordering: WeekdayOrdering, options: RenderOptions) -> String {
    if options.week_numbers {
        format!("{}{}", WEEK_NUMBER_HEADER, ordering.header())
    } else {
        ordering.header().to_string()
    }
}

/// One week-row: `{:2} ` per day, three spaces per empty cell.
pub fn render_row(row: &WeekRow, options: RenderOptions) -> String {
    let mut line = String::with_capacity(row_width(options));
    if options.week_numbers {
        line.push_str(&format!("{:2} ", row.iso_week()));
    }
    for day in row.days() {
        match day {
            Some(day) => line.push_str(&format!("{:2} ", day)),
            None => line.push_str(EMPTY_CELL),
        }
    }
    line
}

fn row_width(options: RenderOptions) -> usize {
    let prefix = if options.week_numbers { WEEK_NUMBER_HEADER.len() } else { 0 };
    prefix + EMPTY_CELL.len() * DAYS_PER_WEEK
}

/// Width of one interlaced month column, margin included.
pub fn column_width(ordering: WeekdayOrdering, options: RenderOptions) -> usize {
    header_line(ordering, options).len() + MARGIN_WIDTH
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

fn ordering_of(months: &[&MonthLayout]) -> WeekdayOrdering {
    let ordering = months.first().map(|m| m.ordering()).unwrap_or_default();
    debug_assert!(months.iter().all(|m| m.ordering() == ordering));
    ordering
}

/// Weekday header followed by the month's rows, without a title.
pub fn render_grid(month: &MonthLayout, options: RenderOptions) -> String {
    let mut out = header_line(month.ordering(), options);
    out.push('\n');
    for row in month.rows() {
        out.push_str(&render_row(row, options));
        out.push('\n');
    }
    out
}

/// Each month as its own block: centered title, weekday header, rows.
/// Blocks are separated by one blank line.
pub fn render_stacked(months: &[&MonthLayout], options: RenderOptions) -> String {
    let width = row_width(options);
    months
        .iter()
        .map(|month| {
            let mut block = center_string(&month.label(), width);
            block.push('\n');
            block.push_str(&render_grid(month, options));
            block
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Months side by side in request order, aligned by week index.
pub fn render_interlaced(months: &[&MonthLayout], options: RenderOptions) -> String {
    if months.is_empty() {
        return String::new();
    }

    let ordering = ordering_of(months);
    let width = column_width(ordering, options);
    let header = header_line(ordering, options);
    let mut out = String::new();

    // Month + year labels
    for month in months {
        out.push_str(&center_string(&month.label(), width));
    }
    out.push('\n');

    // Weekday headers
    for _ in months {
        out.push_str(&pad_right(&header, width));
    }
    out.push('\n');

    // Weeks, blank-padded where a month has fewer rows
    for week_index in 0..MAX_WEEKS_PER_MONTH {
        for month in months {
            match month.row(week_index) {
                Some(row) => out.push_str(&pad_right(&render_row(row, options), width)),
                None => out.push_str(&" ".repeat(width)),
            }
        }
        out.push('\n');
    }
    out
}

/// Interlaced bands of at most `columns` months, separated by a blank line.
pub fn render_columns(months: &[&MonthLayout], columns: usize, options: RenderOptions) -> String {
    months
        .chunks(columns.max(1))
        .map(|band| render_interlaced(band, options))
        .collect::<Vec<_>>()
        .join("\n")
}
