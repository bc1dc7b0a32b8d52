//! Layout builder: places each day of a month into a (week-row, column) cell.

use chrono::{Datelike, Weekday};
use tracing::debug;

use crate::error::CalendarError;
use crate::types::{DAYS_PER_WEEK, MAX_WEEKS_PER_MONTH, MONTHS_PER_YEAR, WeekdayOrdering, YearMonth};

/// One printed line of a month: seven cells in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow {
    days: [Option<u32>; DAYS_PER_WEEK],
    iso_week: u32,
}

impl WeekRow {
    fn new(iso_week: u32) -> Self {
        Self {
            days: [None; DAYS_PER_WEEK],
            iso_week,
        }
    }

    pub fn day(&self, column: usize) -> Option<u32> {
        self.days.get(column).copied().flatten()
    }

    pub fn days(&self) -> &[Option<u32>; DAYS_PER_WEEK] {
        &self.days
    }

    /// ISO week number of the first day occupying this row.
    pub fn iso_week(&self) -> u32 {
        self.iso_week
    }

    /// Day numbers present in this row, left to right.
    pub fn occupied(&self) -> impl Iterator<Item = u32> + '_ {
        self.days.iter().filter_map(|day| *day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLayout {
    month: YearMonth,
    ordering: WeekdayOrdering,
    rows: Vec<WeekRow>,
}

impl MonthLayout {
    pub fn year_month(&self) -> YearMonth {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.month.year()
    }

    pub fn month(&self) -> u32 {
        self.month.month()
    }

    pub fn ordering(&self) -> WeekdayOrdering {
        self.ordering
    }

    pub fn rows(&self) -> &[WeekRow] {
        &self.rows
    }

    pub fn row(&self, week_index: usize) -> Option<&WeekRow> {
        self.rows.get(week_index)
    }

    /// Day printed under `weekday` in the given week-row, if any.
    pub fn day_at(&self, week_index: usize, weekday: Weekday) -> Option<u32> {
        self.row(week_index)?.day(self.ordering.column(weekday))
    }

    /// Title line for this month, e.g. "January 2024".
    pub fn label(&self) -> String {
        self.month.to_string()
    }
}

/// Lays out one month under the given weekday ordering.
///
/// Day `d` lands in row `(d - 1 + offset) / 7` and column
/// `(d - 1 + offset) % 7`, where `offset` is the column of the month's
/// first weekday. Rows are allocated the first time a day lands in them.
pub fn build_month(month: YearMonth, ordering: WeekdayOrdering) -> MonthLayout {
    let offset = ordering.column(month.first_weekday());
    let mut rows: Vec<WeekRow> = Vec::with_capacity(MAX_WEEKS_PER_MONTH);

    let mut date = month.first_day();
    for day in 1..=month.days_in_month() {
        let cell = (day as usize - 1) + offset;
        let week_index = cell / DAYS_PER_WEEK;
        let column = cell % DAYS_PER_WEEK;

        if week_index == rows.len() {
            rows.push(WeekRow::new(date.iso_week().week()));
        }
        debug_assert_eq!(ordering.column(date.weekday()), column);
        rows[week_index].days[column] = Some(day);

        if let Some(next) = date.succ_opt() {
            date = next;
        }
    }

    debug_assert!(rows.len() <= MAX_WEEKS_PER_MONTH);
    debug_assert_eq!(
        rows.iter().map(|row| row.occupied().count()).sum::<usize>(),
        month.days_in_month() as usize
    );
    debug!(
        "Built {}: first weekday {}, {} days, {} rows",
        month,
        month.first_weekday(),
        month.days_in_month(),
        rows.len()
    );

    MonthLayout {
        month,
        ordering,
        rows,
    }
}

/// Up to twelve month layouts of one year, indexed by month number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearLayout {
    year: i32,
    months: [Option<MonthLayout>; MONTHS_PER_YEAR as usize],
}

impl YearLayout {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            months: std::array::from_fn(|_| None),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Stores `layout` in its month slot. The layout must belong to this year.
    pub fn insert(&mut self, layout: MonthLayout) {
        debug_assert_eq!(layout.year(), self.year);
        let slot = layout.month() as usize - 1;
        self.months[slot] = Some(layout);
    }

    pub fn get(&self, month: u32) -> Option<&MonthLayout> {
        let slot = (month as usize).checked_sub(1)?;
        self.months.get(slot)?.as_ref()
    }

    /// Populated months in calendar order.
    pub fn months(&self) -> impl Iterator<Item = &MonthLayout> {
        self.months.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.months().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lays out all twelve months of `year`.
pub fn build_year(year: i32, ordering: WeekdayOrdering) -> Result<YearLayout, CalendarError> {
    let mut layout = YearLayout::new(year);
    for month in 1..=MONTHS_PER_YEAR {
        layout.insert(build_month(YearMonth::new(year, month)?, ordering));
    }
    Ok(layout)
}
