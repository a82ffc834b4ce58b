//! US equity market holidays and monthly option expiration dates.
//!
//! Everything is computed on demand from fixed rules for the years
//! 2000 through 2050: there is no I/O, no caching and no shared mutable
//! state, so every function may be called from any thread.
//!
//! ```
//! use expiry_calendar::{generate_holidays, is_market_holiday_iso, monthly_option_expiration_dates};
//!
//! let expirations = monthly_option_expiration_dates(2021, 2021)?;
//! // Juneteenth was observed on the third Friday, so June expired on Thursday
//! assert_eq!(expirations[5].to_string(), "2021-06-17");
//!
//! let holidays = generate_holidays(2024, 2024)?;
//! assert_eq!(holidays[3].to_string(), "2024-03-29");
//!
//! assert!(is_market_holiday_iso("2012-10-29")?);
//! # Ok::<(), expiry_calendar::CalendarError>(())
//! ```

mod consts;
mod date;
mod error;
mod expiration;
mod holidays;
mod prelude;
mod range;
mod rules;
mod types;

pub use consts::*;
pub use date::MarketDate;
pub use error::{CalendarError, ParseError};
pub use expiration::{Expiration, monthly_expirations, monthly_option_expiration_dates, third_friday};
pub use holidays::{
    Holiday, HolidayEntry, SPECIAL_CLOSURES, SpecialClosure, generate_holidays, holiday_calendar,
    is_market_holiday, is_market_holiday_iso, is_trading_day,
};
pub use range::{YearRange, validate};
pub use rules::{
    easter_sunday, good_friday, last_weekday_of_month, nth_weekday_of_month,
    observed_nearest_weekday,
};
pub use types::{Day, Month, Year};
