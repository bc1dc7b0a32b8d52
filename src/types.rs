use std::fmt;

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::error::CalendarError;

pub const DAYS_PER_WEEK: usize = 7;
pub const MONTHS_PER_YEAR: u32 = 12;
pub const MAX_WEEKS_PER_MONTH: usize = 6;
/// Largest month count a single request may ask for.
pub const MAX_REQUESTED_MONTHS: i64 = 24;

const MONDAY_FIRST: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const SUNDAY_FIRST: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Left-to-right column order of the weekdays for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeekdayOrdering {
    #[default]
    MondayFirst,
    SundayFirst,
}

impl WeekdayOrdering {
    /// The weekday header line, one two-letter abbreviation per column.
    pub const fn header(self) -> &'static str {
        match self {
            Self::MondayFirst => "Mo Tu We Th Fr Sa Su",
            Self::SundayFirst => "Su Mo Tu We Th Fr Sa",
        }
    }

    pub const fn weekdays(self) -> [Weekday; DAYS_PER_WEEK] {
        match self {
            Self::MondayFirst => MONDAY_FIRST,
            Self::SundayFirst => SUNDAY_FIRST,
        }
    }

    /// Column (0-based) in which `weekday` is printed.
    pub fn column(self, weekday: Weekday) -> usize {
        let offset = match self {
            Self::MondayFirst => weekday.num_days_from_monday(),
            Self::SundayFirst => weekday.num_days_from_sunday(),
        };
        offset as usize
    }

    /// Weekday printed in `column`. Columns wrap modulo 7.
    pub fn weekday_at(self, column: usize) -> Weekday {
        self.weekdays()[column % DAYS_PER_WEEK]
    }
}

/// A validated calendar month.
///
/// Construction rejects months outside 1..12 and years chrono cannot
/// represent, so everything downstream can treat the month as well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
    days: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidYear(year))?;

        // First day of next month minus one day; the last month chrono can
        // represent has no next month and ends on NaiveDate::MAX
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .or_else(|| {
                (year == NaiveDate::MAX.year() && month == NaiveDate::MAX.month())
                    .then_some(NaiveDate::MAX)
            })
            .ok_or(CalendarError::InvalidYear(year))?;

        Ok(Self {
            first,
            days: last.day(),
        })
    }

    pub fn from_date(date: NaiveDate) -> Result<Self, CalendarError> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first.weekday()
    }

    pub fn days_in_month(&self) -> u32 {
        self.days
    }

    pub fn name(&self) -> &'static str {
        month_name(self.month())
    }

    /// The month `months` away from this one, crossing year boundaries.
    pub fn offset(&self, months: i64) -> Result<Self, CalendarError> {
        let total_months_from_epoch = self.year() as i64 * 12 + (self.month() as i64 - 1) + months;
        let year = total_months_from_epoch.div_euclid(12);
        let month = (total_months_from_epoch.rem_euclid(12) + 1) as u32;
        let year = i32::try_from(year).map_err(|_| CalendarError::InvalidYear(self.year()))?;
        Self::new(year, month)
    }

    /// `count` consecutive months starting with this one, oldest first.
    /// A count of zero or less yields an empty window.
    pub fn window(&self, count: i64) -> Result<Vec<Self>, CalendarError> {
        (0..count.max(0)).map(|i| self.offset(i)).collect()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year())
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
