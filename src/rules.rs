//! Pure date rules used to place holidays and expirations.
//!
//! Nothing here knows about the exchange calendar; each function maps a
//! year/month (and a weekday or ordinal) to a single date.

use chrono::Weekday;

use crate::consts::GOOD_FRIDAY_OFFSET_DAYS;
use crate::date::MarketDate;
use crate::error::{CalendarError, ParseError};
use crate::types::{Month, Year};

/// The `n`th occurrence (1-based) of `weekday` in the month, scanning forward
/// from the 1st. Returns `None` when the month has fewer than `n` of them.
pub fn nth_weekday_of_month(
    year: Year,
    month: Month,
    weekday: Weekday,
    n: u8,
) -> Option<MarketDate> {
    let index = usize::from(n.checked_sub(1)?);
    MarketDate::days_of_month(year, month)
        .filter(|date| date.weekday() == weekday)
        .nth(index)
}

/// The final occurrence of `weekday` in the month, scanning backward from the
/// last calendar day.
pub fn last_weekday_of_month(year: Year, month: Month, weekday: Weekday) -> Option<MarketDate> {
    MarketDate::days_of_month(year, month)
        .rev()
        .find(|date| date.weekday() == weekday)
}

/// Western (Gregorian) Easter Sunday, by the anonymous Gregorian algorithm
/// (Meeus/Jones/Butcher).
///
/// # Errors
/// Only fails if the computed day cannot be represented, which does not
/// happen for supported years.
pub fn easter_sunday(year: Year) -> Result<MarketDate, CalendarError> {
    let y = year.get();
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    let month = u8::try_from(month)
        .map_err(|_| ParseError::InvalidFormat(format!("Easter month {month} in {year}")))?;
    let day = u8::try_from(day)
        .map_err(|_| ParseError::InvalidFormat(format!("Easter day {day} in {year}")))?;
    MarketDate::new(y, month, day)
}

/// Good Friday, two days before Easter Sunday.
///
/// # Errors
/// See [`easter_sunday`].
pub fn good_friday(year: Year) -> Result<MarketDate, CalendarError> {
    easter_sunday(year)?.sub_days(GOOD_FRIDAY_OFFSET_DAYS)
}

/// Moves a fixed-date holiday off the weekend: Saturday is observed on the
/// Friday before, Sunday on the Monday after.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` if the shift leaves the supported window.
pub fn observed_nearest_weekday(date: MarketDate) -> Result<MarketDate, CalendarError> {
    match date.weekday() {
        Weekday::Sat => date.pred(),
        Weekday::Sun => date.succ(),
        _ => Ok(date),
    }
}
