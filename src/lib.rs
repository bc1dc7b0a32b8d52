//! # calgrid
//!
//! Renders a span of months as a plain-text calendar grid.
//!
//! The work is split in two stages:
//!
//! - [`layout`] places every day of a month into a week-row and weekday
//!   column under a chosen [`WeekdayOrdering`].
//! - [`render`] turns built layouts into text, either stacked one month
//!   per block or interlaced side by side with rows aligned by week index.
//!
//! A [`CalendarStore`] holds the built layouts for a span of years. It is
//! constructed once by the caller and passed by reference to rendering;
//! there is no global calendar state.
//!
//! ```
//! use calgrid::{CalendarStore, RenderOptions, WeekdayOrdering, YearMonth, render_interlaced};
//!
//! let store = CalendarStore::for_year_and_next(2024, WeekdayOrdering::MondayFirst)?;
//! let window = YearMonth::new(2024, 11)?.window(3)?;
//! let months = store.select(&window)?;
//! let page = render_interlaced(&months, RenderOptions::default());
//! assert!(page.starts_with("    November 2024"));
//! # Ok::<(), calgrid::CalendarError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod store;
pub mod types;

pub use config::{Config, Layout, ViewRequest};
pub use error::CalendarError;
pub use layout::{MonthLayout, WeekRow, YearLayout, build_month, build_year};
pub use render::{
    RenderOptions, center_string, render_columns, render_grid, render_interlaced, render_stacked,
};
pub use store::CalendarStore;
pub use types::{WeekdayOrdering, YearMonth};
