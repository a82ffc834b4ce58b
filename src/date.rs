use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::consts::{DATE_SEPARATOR, MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::error::{CalendarError, ParseError};
use crate::prelude::*;
use crate::types::{Day, Month, Year, days_in_month};

/// A calendar day with no time-of-day or timezone, inside the supported
/// holiday window.
///
/// Displays and serializes as ISO 8601 `YYYY-MM-DD`. Ordering is
/// chronological, which matches lexicographic order of the ISO text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct MarketDate {
    year:  Year,
    month: Month,
    day:   Day,
    naive: NaiveDate,
}

impl MarketDate {
    /// Creates a date from its numeric components.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` for a year without holiday data
    /// and `CalendarError::InvalidInput` for an impossible month or day.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year.get(), month.get())?;
        let naive =
            NaiveDate::from_ymd_opt(year.get(), u32::from(month.get()), u32::from(day.get()))
                .ok_or(ParseError::InvalidDay {
                    month: month.get(),
                    day:   day.get(),
                    year:  year.get(),
                })?;
        Ok(Self {
            year,
            month,
            day,
            naive,
        })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// The same day as a `chrono` date
    pub const fn naive_date(&self) -> NaiveDate {
        self.naive
    }

    pub fn weekday(&self) -> Weekday {
        self.naive.weekday()
    }

    /// Whether the date falls on Saturday or Sunday
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Every day of the given month, in order.
    pub fn days_of_month(year: Year, month: Month) -> impl DoubleEndedIterator<Item = Self> {
        (MIN_DAY..=days_in_month(year.get(), month.get()))
            .filter_map(move |day| Self::new(year.get(), month.get(), day).ok())
    }

    /// The following calendar day.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` when stepping past the last supported day.
    pub fn succ(&self) -> Result<Self, CalendarError> {
        let next = self
            .naive
            .succ_opt()
            .ok_or(CalendarError::YearOutOfRange { year: MAX_YEAR + 1 })?;
        Self::try_from(next)
    }

    /// The preceding calendar day.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` when stepping before the first supported day.
    pub fn pred(&self) -> Result<Self, CalendarError> {
        let previous = self
            .naive
            .pred_opt()
            .ok_or(CalendarError::YearOutOfRange { year: MIN_YEAR - 1 })?;
        Self::try_from(previous)
    }

    /// Steps back `days` calendar days.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` when stepping before the first supported day.
    pub fn sub_days(&self, days: u64) -> Result<Self, CalendarError> {
        let earlier = self
            .naive
            .checked_sub_days(Days::new(days))
            .ok_or(CalendarError::YearOutOfRange { year: MIN_YEAR - 1 })?;
        Self::try_from(earlier)
    }
}

impl FromStr for MarketDate {
    type Err = CalendarError;

    /// Parses strict ISO 8601 `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY-MM-DD, found {trimmed}"
            ))
            .into());
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY-MM-DD, found {trimmed}"
            ))
            .into());
        }

        let year = parse_component::<i32>(year)?;
        let month = parse_component::<u8>(month)?;
        let day = parse_component::<u8>(day)?;
        Self::new(year, month, day)
    }
}

/// Parses one numeric date component, rejecting signs and other non-digits.
fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl TryFrom<&str> for MarketDate {
    type Error = CalendarError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<NaiveDate> for MarketDate {
    type Error = CalendarError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        let month = u8::try_from(value.month())
            .map_err(|_| ParseError::InvalidFormat(value.to_string()))?;
        let day = u8::try_from(value.day())
            .map_err(|_| ParseError::InvalidFormat(value.to_string()))?;
        Self::new(value.year(), month, day)
    }
}

impl From<MarketDate> for NaiveDate {
    fn from(date: MarketDate) -> Self {
        date.naive
    }
}

impl serde::Serialize for MarketDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for MarketDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
