//! Full-day US equity market closures.
//!
//! Each supported year gets ten rule-based holidays (fixed dates shifted off
//! weekends, nth/last weekday rules, and Good Friday) plus any one-off
//! closures listed in [`SPECIAL_CLOSURES`]. Early closes are not modelled.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::consts::{DECEMBER, JANUARY, JUNETEENTH_FIRST_YEAR, MIN_DAY};
use crate::date::MarketDate;
use crate::error::{CalendarError, ParseError};
use crate::prelude::*;
use crate::range::{YearRange, validate};
use crate::rules::{
    good_friday, last_weekday_of_month, nth_weekday_of_month, observed_nearest_weekday,
};
use crate::types::{Month, Year};

/// The rule that closed the market on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Holiday {
    #[display(fmt = "New Year's Day")]
    NewYearsDay,
    #[display(fmt = "Martin Luther King Jr. Day")]
    MartinLutherKingJrDay,
    #[display(fmt = "Presidents Day")]
    PresidentsDay,
    #[display(fmt = "Good Friday")]
    GoodFriday,
    #[display(fmt = "Memorial Day")]
    MemorialDay,
    #[display(fmt = "Juneteenth")]
    Juneteenth,
    #[display(fmt = "Independence Day")]
    IndependenceDay,
    #[display(fmt = "Labor Day")]
    LaborDay,
    #[display(fmt = "Thanksgiving Day")]
    Thanksgiving,
    #[display(fmt = "Christmas Day")]
    Christmas,
    /// A one-off closure from [`SPECIAL_CLOSURES`]
    #[display(fmt = "Special closure")]
    SpecialClosure,
}

/// A market closure date together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolidayEntry {
    pub date:    MarketDate,
    pub holiday: Holiday,
}

/// Unscheduled full-day closures for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialClosure {
    pub year:   i32,
    /// (month, day) pairs
    pub dates:  &'static [(u8, u8)],
    pub reason: &'static str,
}

/// Historical one-off closures, by year.
pub static SPECIAL_CLOSURES: &[SpecialClosure] = &[
    SpecialClosure {
        year:   2001,
        dates:  &[(9, 11), (9, 12), (9, 13), (9, 14)],
        reason: "September 11 attacks",
    },
    SpecialClosure {
        year:   2012,
        dates:  &[(10, 29), (10, 30)],
        reason: "Hurricane Sandy",
    },
    SpecialClosure {
        year:   2018,
        dates:  &[(12, 5)],
        reason: "National Day of Mourning for President George H. W. Bush",
    },
    SpecialClosure {
        year:   2020,
        dates:  &[(3, 23)],
        reason: "COVID-19 trading floor closure",
    },
];

/// Sorted market holidays for every year of `start..=end`.
///
/// The result is not deduplicated.
///
/// # Errors
/// Fails before computing anything if the range is unsupported or inverted.
pub fn generate_holidays(start: i32, end: i32) -> Result<Vec<MarketDate>, CalendarError> {
    let range = validate(start, end)?;
    let dates = holiday_calendar(&range)?
        .into_iter()
        .map(|entry| entry.date)
        .collect();
    Ok(dates)
}

/// Market holidays for the range, each labelled with the rule behind it,
/// sorted by date.
///
/// # Errors
/// Only fails if a rule cannot place its date, which does not happen for
/// supported years.
pub fn holiday_calendar(range: &YearRange) -> Result<Vec<HolidayEntry>, CalendarError> {
    let mut entries = Vec::new();
    for year in range.years() {
        entries.extend(annual_holidays(year)?);
    }

    for closure in SPECIAL_CLOSURES
        .iter()
        .filter(|closure| range.contains(closure.year))
    {
        for &(month, day) in closure.dates {
            entries.push(HolidayEntry {
                date:    MarketDate::new(closure.year, month, day)?,
                holiday: Holiday::SpecialClosure,
            });
        }
    }

    entries.sort_by_key(|entry| entry.date);

    tracing::debug!(
        start = %range.start(),
        end = %range.end(),
        count = entries.len(),
        "generated market holidays"
    );
    Ok(entries)
}

/// Whether the market is closed all day on `date`.
///
/// Regenerates the holiday set for the date's year on every call.
///
/// # Errors
/// See [`generate_holidays`].
pub fn is_market_holiday(date: &MarketDate) -> Result<bool, CalendarError> {
    let year = date.year().get();
    Ok(generate_holidays(year, year)?.contains(date))
}

/// [`is_market_holiday`] for an ISO `YYYY-MM-DD` string.
///
/// # Errors
/// Returns `CalendarError::InvalidInput` if the text is not a calendar date and
/// `CalendarError::YearOutOfRange` if its year has no holiday data.
pub fn is_market_holiday_iso(date: &str) -> Result<bool, CalendarError> {
    is_market_holiday(&date.parse()?)
}

/// Whether the market is open on `date`: a weekday that is not a holiday.
///
/// # Errors
/// See [`is_market_holiday`].
pub fn is_trading_day(date: &MarketDate) -> Result<bool, CalendarError> {
    if date.is_weekend() {
        return Ok(false);
    }
    Ok(!is_market_holiday(date)?)
}

/// The ten recurring holidays of one year, in calendar-rule order.
fn annual_holidays(year: Year) -> Result<Vec<HolidayEntry>, CalendarError> {
    let entry = |holiday, date| HolidayEntry { date, holiday };
    let january = Month::new(1)?;
    let february = Month::new(2)?;
    let may = Month::new(5)?;
    let september = Month::new(9)?;
    let november = Month::new(11)?;

    let mut entries = vec![
        entry(Holiday::NewYearsDay, new_years_day(year)?),
        entry(
            Holiday::MartinLutherKingJrDay,
            required(
                nth_weekday_of_month(year, january, Weekday::Mon, 3),
                Holiday::MartinLutherKingJrDay,
                year,
            )?,
        ),
        entry(
            Holiday::PresidentsDay,
            required(
                nth_weekday_of_month(year, february, Weekday::Mon, 3),
                Holiday::PresidentsDay,
                year,
            )?,
        ),
        entry(Holiday::GoodFriday, good_friday(year)?),
        entry(
            Holiday::MemorialDay,
            required(
                last_weekday_of_month(year, may, Weekday::Mon),
                Holiday::MemorialDay,
                year,
            )?,
        ),
    ];

    if year.get() >= JUNETEENTH_FIRST_YEAR {
        let nominal = MarketDate::new(year.get(), 6, 19)?;
        entries.push(entry(Holiday::Juneteenth, observed_nearest_weekday(nominal)?));
    }

    let independence = MarketDate::new(year.get(), 7, 4)?;
    entries.push(entry(
        Holiday::IndependenceDay,
        observed_nearest_weekday(independence)?,
    ));
    entries.push(entry(
        Holiday::LaborDay,
        required(
            nth_weekday_of_month(year, september, Weekday::Mon, 1),
            Holiday::LaborDay,
            year,
        )?,
    ));
    entries.push(entry(
        Holiday::Thanksgiving,
        required(
            nth_weekday_of_month(year, november, Weekday::Thu, 4),
            Holiday::Thanksgiving,
            year,
        )?,
    ));
    let christmas = MarketDate::new(year.get(), DECEMBER, 25)?;
    entries.push(entry(Holiday::Christmas, observed_nearest_weekday(christmas)?));

    Ok(entries)
}

/// January 1st, moved to Monday the 2nd when it is a Sunday. When it is a
/// Saturday the observed date is December 31st of the *same* year, not of the
/// year before.
fn new_years_day(year: Year) -> Result<MarketDate, CalendarError> {
    let nominal = MarketDate::new(year.get(), JANUARY, MIN_DAY)?;
    match nominal.weekday() {
        Weekday::Sun => nominal.succ(),
        Weekday::Sat => MarketDate::new(year.get(), DECEMBER, 31),
        _ => Ok(nominal),
    }
}

fn required(
    date: Option<MarketDate>,
    holiday: Holiday,
    year: Year,
) -> Result<MarketDate, CalendarError> {
    date.ok_or_else(|| ParseError::InvalidFormat(format!("no date for {holiday} in {year}")).into())
}
