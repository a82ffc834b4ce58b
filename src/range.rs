use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    CalendarError, ParseError, RANGE_SEPARATOR,
    prelude::*,
    types::{Month, Year},
};

/// An inclusive span of supported years.
/// The start year must be less than or equal to the end year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct YearRange {
    start: Year,
    end:   Year,
}

/// Checks a pair of years before any dates are computed.
///
/// Both years are checked against the supported window first, then their
/// order, so `(1999, 1998)` reports the unsupported year.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` if either year is outside
/// 2000..=2050, or `CalendarError::InvertedRange` if start > end.
pub fn validate(start: i32, end: i32) -> Result<YearRange, CalendarError> {
    let start = Year::new(start)?;
    let end = Year::new(end)?;
    YearRange::new(start, end)
}

impl YearRange {
    /// Creates a new year range with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvertedRange` if start > end.
    pub fn new(start: Year, end: Year) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvertedRange {
                start: start.get(),
                end:   end.get(),
            });
        }
        Ok(Self { start, end })
    }

    /// A range covering a single year
    pub const fn single(year: Year) -> Self {
        Self {
            start: year,
            end:   year,
        }
    }

    /// Returns the first year of the range
    pub const fn start(&self) -> Year {
        self.start
    }

    /// Returns the last year of the range
    pub const fn end(&self) -> Year {
        self.end
    }

    /// Checks if the range contains a given year
    pub fn contains(&self, year: i32) -> bool {
        (self.start.get()..=self.end.get()).contains(&year)
    }

    /// Number of years spanned, counting both ends
    pub fn year_count(&self) -> usize {
        self.years().count()
    }

    /// Every year of the range in ascending order
    pub fn years(&self) -> impl Iterator<Item = Year> + use<> {
        (self.start.get()..=self.end.get()).filter_map(|y| Year::new(y).ok())
    }

    /// Every (year, month) from January of the start year through December of
    /// the end year, in chronological order
    pub fn months(&self) -> impl Iterator<Item = (Year, Month)> + use<> {
        self.years()
            .flat_map(|year| Month::all().map(move |month| (year, month)))
    }
}

impl FromStr for YearRange {
    type Err = CalendarError;

    /// Parses `YYYY/YYYY`, or a bare `YYYY` for a single year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
        match separator_count {
            0 => {
                let year = parse_year(trimmed)?;
                validate(year, year)
            },
            1 => {
                let (start, end) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                validate(parse_year(start)?, parse_year(end)?)
            },
            _ => Err(ParseError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))
            .into()),
        }
    }
}

fn parse_year(s: &str) -> Result<i32, ParseError> {
    let s = s.trim();
    s.parse::<i32>()
        .map_err(|_| ParseError::InvalidFormat(format!("year is not an integer: {s}")))
}

impl Serialize for YearRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_supported_ranges() {
        assert!(validate(2000, 2000).is_ok());
        assert!(validate(2050, 2050).is_ok());
        assert!(validate(2000, 2050).is_ok());
        assert!(validate(2024, 2025).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(matches!(
            validate(1999, 2000),
            Err(CalendarError::YearOutOfRange { year: 1999 })
        ));
        assert!(matches!(
            validate(2000, 2051),
            Err(CalendarError::YearOutOfRange { year: 2051 })
        ));
        let err = validate(1999, 2000).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Holiday data is only available between 2000 and 2050"
        );
    }

    #[test]
    fn test_validate_checks_bounds_before_order() {
        assert!(matches!(
            validate(1999, 1998),
            Err(CalendarError::YearOutOfRange { .. })
        ));
        assert!(matches!(
            validate(2060, 2024),
            Err(CalendarError::YearOutOfRange { year: 2060 })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let result = validate(2025, 2024);
        assert!(matches!(
            result,
            Err(CalendarError::InvertedRange {
                start: 2025,
                end: 2024
            })
        ));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Start year must be less than or equal to end year"
        );
    }

    #[test]
    fn test_years_and_months() {
        let range = validate(2023, 2024).unwrap();
        assert_eq!(range.year_count(), 2);
        let years: Vec<i32> = range.years().map(Year::get).collect();
        assert_eq!(years, vec![2023, 2024]);

        let months: Vec<(i32, u8)> = range.months().map(|(y, m)| (y.get(), m.get())).collect();
        assert_eq!(months.len(), 24);
        assert_eq!(months[0], (2023, 1));
        assert_eq!(months[11], (2023, 12));
        assert_eq!(months[12], (2024, 1));
        assert_eq!(months[23], (2024, 12));
    }

    #[test]
    fn test_contains() {
        let range = validate(2020, 2022).unwrap();
        assert!(range.contains(2020));
        assert!(range.contains(2022));
        assert!(!range.contains(2019));
        assert!(!range.contains(2023));
    }

    #[test]
    fn test_single() {
        let range = YearRange::single(Year::new(2012).unwrap());
        assert_eq!(range.start(), range.end());
        assert_eq!(range.year_count(), 1);
    }

    #[test]
    fn test_parse() {
        let range: YearRange = "2020/2024".parse().unwrap();
        assert_eq!(range.start().get(), 2020);
        assert_eq!(range.end().get(), 2024);

        let range: YearRange = " 2021 / 2021 ".parse().unwrap();
        assert_eq!(range.year_count(), 1);

        let range: YearRange = "2030".parse().unwrap();
        assert_eq!(range.to_string(), "2030/2030");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "2020.5/2024".parse::<YearRange>(),
            Err(CalendarError::InvalidInput(ParseError::InvalidFormat(_)))
        ));
        assert!(matches!(
            "abc".parse::<YearRange>(),
            Err(CalendarError::InvalidInput(_))
        ));
        assert!(matches!(
            "".parse::<YearRange>(),
            Err(CalendarError::InvalidInput(ParseError::EmptyInput))
        ));
        assert!(matches!(
            "2020/2021/2022".parse::<YearRange>(),
            Err(CalendarError::InvalidInput(ParseError::InvalidFormat(_)))
        ));
        assert!(matches!(
            "2025/2024".parse::<YearRange>(),
            Err(CalendarError::InvertedRange { .. })
        ));
        assert!(matches!(
            "1990/2024".parse::<YearRange>(),
            Err(CalendarError::YearOutOfRange { year: 1990 })
        ));
    }

    #[test]
    fn test_serde() {
        let range = validate(2001, 2012).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#""2001/2012""#);
        let parsed: YearRange = serde_json::from_str(&json).unwrap();
        assert_eq!(range, parsed);

        let result: Result<YearRange, _> = serde_json::from_str(r#""2012/2001""#);
        assert!(result.is_err());
    }
}
