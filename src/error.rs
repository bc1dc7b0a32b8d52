use thiserror::Error;

/// Errors surfaced at the calendar's boundary.
///
/// Layout and rendering never fail on well-formed input; everything here
/// comes from a bad request or from writing the finished page.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u32),

    #[error("Requested {requested} months, at most {max} can be shown")]
    InvalidRequestedSpan { requested: i64, max: i64 },

    #[error("Year {0} is outside the supported calendar range")]
    InvalidYear(i32),

    #[error("{year}-{month:02} is not covered by the calendar store")]
    NotCovered { year: i32, month: u32 },

    #[error("Failed to write calendar: {0}")]
    Io(#[from] std::io::Error),
}
