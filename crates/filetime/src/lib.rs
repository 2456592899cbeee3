//! # zurvan-filetime
//!
//! FILETIME-style tick clock: signed 64-bit counts of 100 ns intervals
//! since 1601-01-01T00:00:00Z, converted to and from Julian Day Numbers,
//! plus tick-of-day decomposition into hour/minute/second.
//!
//! ## Quick Start
//!
//! ```ignore
//! use zurvan_julian::Date;
//! use zurvan_filetime::{filetime_to_jd, gregorian_to_filetime, time_of_day};
//!
//! let ft = gregorian_to_filetime(Date::new(2024, 3, 20));
//! assert_eq!(ft.get(), 133_553_664_000_000_000);
//! assert_eq!(filetime_to_jd(ft, 0).get(), 2460389.5);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `ticks` | `FileTime` newtype and tick-unit constants |
//! | `convert` | Tick ⇄ JDN, calendar date → tick, Unix-epoch helpers |
//! | `clock` | Tick-of-day remainders and `TimeOfDay` |

mod clock;
mod convert;
mod ticks;

pub use clock::{DayRemainders, TimeOfDay, mod_day, time_of_day};
pub use convert::{
    filetime_to_jd, filetime_to_unix_millis, gregorian_to_filetime, jd_to_filetime,
    persian_to_filetime, unix_millis_to_filetime,
};
pub use ticks::{
    FileTime, SECONDS_PER_DAY, TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MINUTE, TICKS_PER_SECOND,
    UNIX_EPOCH_JD, UNIX_EPOCH_SECONDS,
};
