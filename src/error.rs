use crate::consts::MAX_MONTH;
use crate::prelude::*;

/// Reasons a piece of text could not be read as a date or year.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: i32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Error type for every public calendar operation.
///
/// Validation always runs before any dates are computed, so an error never
/// comes with a partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A year or date argument could not be understood.
    #[error(transparent)]
    InvalidInput(#[from] ParseError),

    /// A referenced year lies outside the supported window.
    #[error("Holiday data is only available between 2000 and 2050")]
    YearOutOfRange { year: i32 },

    /// The start year is after the end year.
    #[error("Start year must be less than or equal to end year")]
    InvertedRange { start: i32, end: i32 },
}
