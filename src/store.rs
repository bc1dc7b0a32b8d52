use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

use crate::error::CalendarError;
use crate::layout::{MonthLayout, YearLayout, build_year};
use crate::types::{WeekdayOrdering, YearMonth};

/// Precomputed layouts for a contiguous span of years.
///
/// Built once by the entry point and handed to the renderer by reference.
/// Nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct CalendarStore {
    ordering: WeekdayOrdering,
    years: BTreeMap<i32, YearLayout>,
}

impl CalendarStore {
    /// Builds every month of every year from `first_year` to `last_year`
    /// inclusive. An inverted range builds just `first_year`.
    pub fn build(
        first_year: i32,
        last_year: i32,
        ordering: WeekdayOrdering,
    ) -> Result<Self, CalendarError> {
        let last_year = last_year.max(first_year);
        let mut years = BTreeMap::new();
        for year in first_year..=last_year {
            years.insert(year, build_year(year, ordering)?);
        }
        info!("Calendar store built for {}..={} ({:?})", first_year, last_year, ordering);
        Ok(Self { ordering, years })
    }

    /// Store for `year` and the year after it.
    pub fn for_year_and_next(year: i32, ordering: WeekdayOrdering) -> Result<Self, CalendarError> {
        let next = year.checked_add(1).ok_or(CalendarError::InvalidYear(year))?;
        Self::build(year, next, ordering)
    }

    /// Store large enough for `window`, never smaller than the first
    /// month's year plus the next one.
    pub fn covering(
        start: YearMonth,
        window: &[YearMonth],
        ordering: WeekdayOrdering,
    ) -> Result<Self, CalendarError> {
        let first = window.iter().map(YearMonth::year).min().unwrap_or(start.year()).min(start.year());
        let last = window.iter().map(YearMonth::year).max().unwrap_or(start.year());
        let next = if start.year() < NaiveDate::MAX.year() {
            start.year() + 1
        } else {
            start.year()
        };
        Self::build(first, last.max(next), ordering)
    }

    pub fn ordering(&self) -> WeekdayOrdering {
        self.ordering
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    pub fn year(&self, year: i32) -> Option<&YearLayout> {
        self.years.get(&year)
    }

    pub fn month(&self, year: i32, month: u32) -> Option<&MonthLayout> {
        self.years.get(&year)?.get(month)
    }

    /// Borrows the requested months in request order.
    pub fn select(&self, months: &[YearMonth]) -> Result<Vec<&MonthLayout>, CalendarError> {
        debug!("Selecting {} months from store", months.len());
        months
            .iter()
            .map(|ym| {
                self.month(ym.year(), ym.month()).ok_or(CalendarError::NotCovered {
                    year: ym.year(),
                    month: ym.month(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_and_next() {
        let store = CalendarStore::for_year_and_next(2026, WeekdayOrdering::MondayFirst).unwrap();
        assert_eq!(store.years().collect::<Vec<_>>(), vec![2026, 2027]);
        assert!(store.month(2026, 1).is_some());
        assert!(store.month(2027, 12).is_some());
        assert!(store.month(2028, 1).is_none());
    }

    #[test]
    fn test_select_keeps_request_order() {
        let store = CalendarStore::for_year_and_next(2024, WeekdayOrdering::MondayFirst).unwrap();
        let months = [
            YearMonth::new(2025, 1).unwrap(),
            YearMonth::new(2024, 12).unwrap(),
        ];
        let view = store.select(&months).unwrap();
        let order: Vec<(i32, u32)> = view.iter().map(|m| (m.year(), m.month())).collect();
        assert_eq!(order, vec![(2025, 1), (2024, 12)]);
    }

    #[test]
    fn test_select_across_year_boundary() {
        let store = CalendarStore::for_year_and_next(2024, WeekdayOrdering::MondayFirst).unwrap();
        let window = YearMonth::new(2024, 11).unwrap().window(4).unwrap();
        let view = store.select(&window).unwrap();
        // Jan 1 2025 is a Wednesday
        assert_eq!(view[2].day_at(0, chrono::Weekday::Wed), Some(1));
        assert_eq!(view[3].month(), 2);
    }

    #[test]
    fn test_select_outside_store() {
        let store = CalendarStore::for_year_and_next(2024, WeekdayOrdering::MondayFirst).unwrap();
        let err = store.select(&[YearMonth::new(2026, 3).unwrap()]).unwrap_err();
        assert!(matches!(err, CalendarError::NotCovered { year: 2026, month: 3 }));
    }

    #[test]
    fn test_covering_extends_past_next_year() {
        let start = YearMonth::new(2024, 6).unwrap();
        let window = start.window(30).unwrap();
        let store = CalendarStore::covering(start, &window, WeekdayOrdering::SundayFirst).unwrap();
        assert_eq!(store.years().collect::<Vec<_>>(), vec![2024, 2025, 2026]);
        assert_eq!(store.ordering(), WeekdayOrdering::SundayFirst);
        assert!(store.select(&window).is_ok());
    }

    #[test]
    fn test_covering_near_end_of_range() {
        let max_year = NaiveDate::MAX.year();
        let start = YearMonth::new(max_year - 1, 12).unwrap();
        let window = start.window(1).unwrap();
        let store = CalendarStore::covering(start, &window, WeekdayOrdering::MondayFirst).unwrap();
        assert_eq!(store.years().collect::<Vec<_>>(), vec![max_year - 1, max_year]);

        let start = YearMonth::new(max_year, 12).unwrap();
        let store = CalendarStore::covering(start, &[start], WeekdayOrdering::MondayFirst).unwrap();
        assert_eq!(store.years().collect::<Vec<_>>(), vec![max_year]);
        assert!(store.select(&[start]).is_ok());
    }

    #[test]
    fn test_covering_empty_window() {
        let start = YearMonth::new(2024, 6).unwrap();
        let store = CalendarStore::covering(start, &[], WeekdayOrdering::MondayFirst).unwrap();
        assert_eq!(store.years().collect::<Vec<_>>(), vec![2024, 2025]);
    }
}
