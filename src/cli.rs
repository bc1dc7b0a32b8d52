//! Command-line surface: argument parsing, logging setup, and the run loop.
//!
//! Everything here is boundary work. The flags resolve into a [`Config`],
//! the entry point builds a [`CalendarStore`] sized for the requested
//! window, and the rendered page goes to stdout. Logs go to stderr.

use std::io::{self, Write};

use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, Layout, ViewRequest};
use crate::error::CalendarError;
use crate::store::CalendarStore;
use crate::types::{WeekdayOrdering, YearMonth};

#[derive(Parser, Debug)]
#[command(name = "calgrid", version)]
#[command(about = "Print a span of months as an aligned text calendar", long_about = None)]
pub struct Cli {
    /// Show only the start month
    #[arg(short = '1', long)]
    pub single: bool,

    /// Show three months from the start month
    #[arg(short = '3', long)]
    pub triple: bool,

    /// Show N consecutive months from the start month (at most 24; zero or less shows nothing)
    #[arg(short = 'n', long, value_name = "N", allow_negative_numbers = true)]
    pub months: Option<i64>,

    /// Show all twelve months of the start year
    #[arg(long)]
    pub year: bool,

    /// Show the weekday header and the start month's grid only
    #[arg(long)]
    pub week_numbering: bool,

    /// Start month (1-12), defaults to the current month
    #[arg(short = 'm', long, value_name = "MONTH")]
    pub month: Option<u32>,

    /// Start year, defaults to the current year
    #[arg(short = 'y', long, value_name = "YEAR", allow_negative_numbers = true)]
    pub start_year: Option<i32>,

    /// Weeks start on Sunday
    #[arg(short = 's', long, conflicts_with = "monday_first")]
    pub sunday_first: bool,

    /// Weeks start on Monday (default)
    #[arg(long)]
    pub monday_first: bool,

    /// Print months one below the other instead of side by side
    #[arg(long)]
    pub stacked: bool,

    /// Months per row when printing side by side
    #[arg(short = 'c', long, value_name = "N")]
    pub columns: Option<usize>,

    /// Prefix each week with its ISO week number
    #[arg(short = 'w', long)]
    pub week_numbers: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The view flags collapsed into one request.
    /// An explicit count wins over `-3`, `-3` over `-1`, any count over
    /// `--year`, and `--year` over `--week-numbering`.
    pub fn request(&self) -> ViewRequest {
        if let Some(count) = self.months {
            ViewRequest::Months(count)
        } else if self.triple {
            ViewRequest::Months(3)
        } else if self.single {
            ViewRequest::Months(1)
        } else if self.year {
            ViewRequest::Year
        } else if self.week_numbering {
            ViewRequest::WeekNumbering
        } else {
            ViewRequest::default()
        }
    }

    /// Resolves the flags against `today` into a validated [`Config`].
    pub fn resolve(&self, today: NaiveDate) -> Result<Config, CalendarError> {
        let mut config = Config::new(today)?;

        if self.month.is_some() || self.start_year.is_some() {
            config.start = YearMonth::new(
                self.start_year.unwrap_or(today.year()),
                self.month.unwrap_or(today.month()),
            )?;
        }
        config.request = self.request();
        config.ordering = if self.sunday_first {
            WeekdayOrdering::SundayFirst
        } else {
            WeekdayOrdering::MondayFirst
        };
        config.layout = if self.stacked {
            Layout::Stacked
        } else {
            Layout::Interlaced
        };
        config.columns = self.columns;
        config.week_numbers = self.week_numbers;

        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(format!("{}=debug", env!("CARGO_PKG_NAME")))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{}=warn", env!("CARGO_PKG_NAME"))))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

pub fn run() -> Result<(), CalendarError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let today = Local::now().date_naive();
    let config = cli.resolve(today)?;
    info!(
        "Calendar starting at {} with {:?} ({:?}, {:?})",
        config.start, config.request, config.ordering, config.layout
    );

    let months = config.months()?;
    let store = CalendarStore::covering(config.start, &months, config.ordering)?;
    let page = config.render(&store, &months)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(page.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
