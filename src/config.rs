//! Resolved view request: which months to show and how to lay them out.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::CalendarError;
use crate::render::{RenderOptions, render_columns, render_grid, render_stacked};
use crate::store::CalendarStore;
use crate::types::{MAX_REQUESTED_MONTHS, MONTHS_PER_YEAR, WeekdayOrdering, YearMonth};

/// Months per band when a full year is shown interlaced.
pub const DEFAULT_YEAR_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRequest {
    /// N consecutive months from the start month. Zero or less shows nothing.
    Months(i64),
    /// All twelve months of the start year.
    Year,
    /// Weekday header and the start month's grid, no title.
    WeekNumbering,
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self::Months(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Interlaced,
    Stacked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub start: YearMonth,
    pub request: ViewRequest,
    pub ordering: WeekdayOrdering,
    pub layout: Layout,
    /// Months per interlaced band; `None` picks a default for the request.
    pub columns: Option<usize>,
    pub week_numbers: bool,
}

impl Config {
    /// Defaults anchored at `today`: one month, Monday first, interlaced.
    pub fn new(today: NaiveDate) -> Result<Self, CalendarError> {
        Ok(Self {
            start: YearMonth::from_date(today)?,
            request: ViewRequest::default(),
            ordering: WeekdayOrdering::default(),
            layout: Layout::default(),
            columns: None,
            week_numbers: false,
        })
    }

    /// The months to render, in display order.
    pub fn months(&self) -> Result<Vec<YearMonth>, CalendarError> {
        match self.request {
            ViewRequest::Months(count) => {
                if count <= 0 {
                    warn!("Requested {} months, nothing to show", count);
                }
                if count > MAX_REQUESTED_MONTHS {
                    return Err(CalendarError::InvalidRequestedSpan {
                        requested: count,
                        max: MAX_REQUESTED_MONTHS,
                    });
                }
                self.start.window(count)
            }
            ViewRequest::Year => YearMonth::new(self.start.year(), 1)?.window(MONTHS_PER_YEAR as i64),
            ViewRequest::WeekNumbering => Ok(vec![self.start]),
        }
    }

    /// Months per interlaced band for a page of `count` months.
    pub fn columns_for(&self, count: usize) -> usize {
        self.columns.unwrap_or(match self.request {
            ViewRequest::Year => DEFAULT_YEAR_COLUMNS,
            _ => count,
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            week_numbers: self.week_numbers,
        }
    }

    /// Renders `months`, borrowed from `store`, as one page of text.
    pub fn render(&self, store: &CalendarStore, months: &[YearMonth]) -> Result<String, CalendarError> {
        let view = store.select(months)?;
        let options = self.render_options();
        debug!("Rendering {} months as {:?}", view.len(), self.layout);

        let page = match (self.request, self.layout) {
            (ViewRequest::WeekNumbering, _) => view
                .first()
                .map(|month| render_grid(month, options))
                .unwrap_or_default(),
            (_, Layout::Stacked) => render_stacked(&view, options),
            (_, Layout::Interlaced) => render_columns(&view, self.columns_for(view.len()), options),
        };
        Ok(page)
    }
}
