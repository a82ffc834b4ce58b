//! Standard monthly option expirations.
//!
//! Monthly contracts expire on the third Friday of the month. When that Friday
//! is a market holiday, expiration moves to the Thursday before it. The
//! Thursday is never checked again.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::consts::EXPIRATION_FRIDAY_ORDINAL;
use crate::date::MarketDate;
use crate::error::{CalendarError, ParseError};
use crate::holidays::is_market_holiday;
use crate::range::validate;
use crate::rules::nth_weekday_of_month;
use crate::types::{Month, Year};

/// The resolved expiration for one contract month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expiration {
    /// The day contracts for this month expire
    pub date:         MarketDate,
    /// The month's third Friday, whether or not it was used
    pub third_friday: MarketDate,
}

impl Expiration {
    /// True when the third Friday was a holiday and expiration moved to Thursday
    pub fn is_shifted(&self) -> bool {
        self.date != self.third_friday
    }
}

/// The third Friday of the month.
///
/// # Errors
/// Only fails if the month has no third Friday, which cannot happen.
pub fn third_friday(year: Year, month: Month) -> Result<MarketDate, CalendarError> {
    nth_weekday_of_month(year, month, Weekday::Fri, EXPIRATION_FRIDAY_ORDINAL).ok_or_else(|| {
        ParseError::InvalidFormat(format!("no third Friday in {year}-{:02}", month.get())).into()
    })
}

/// One expiration per month from January of `start` through December of `end`,
/// in chronological order.
///
/// # Errors
/// Fails before computing anything if the range is unsupported or inverted.
pub fn monthly_expirations(start: i32, end: i32) -> Result<Vec<Expiration>, CalendarError> {
    let range = validate(start, end)?;

    let mut expirations = Vec::with_capacity(range.year_count() * 12);
    for (year, month) in range.months() {
        let friday = third_friday(year, month)?;
        let date = if is_market_holiday(&friday)? {
            let thursday = friday.pred()?;
            tracing::trace!(%friday, %thursday, "third Friday is a holiday, expiring Thursday");
            thursday
        } else {
            friday
        };
        expirations.push(Expiration {
            date,
            third_friday: friday,
        });
    }

    tracing::debug!(
        start = %range.start(),
        end = %range.end(),
        count = expirations.len(),
        shifted = expirations.iter().filter(|e| e.is_shifted()).count(),
        "resolved monthly option expirations"
    );
    Ok(expirations)
}

/// Expiration dates only, one per month, ascending.
///
/// # Errors
/// See [`monthly_expirations`].
pub fn monthly_option_expiration_dates(
    start: i32,
    end: i32,
) -> Result<Vec<MarketDate>, CalendarError> {
    Ok(monthly_expirations(start, end)?
        .into_iter()
        .map(|expiration| expiration.date)
        .collect())
}
