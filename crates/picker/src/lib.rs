//! # zurvan-picker
//!
//! The orchestration layer of the workspace: dispatches a Julian Day
//! Number into one of the three calendars, evaluates the daylight-saving
//! window policy, and picks the six formatted date/time fields for a raw
//! tick timestamp.
//!
//! ## Quick Start
//!
//! ```ignore
//! use zurvan_filetime::FileTime;
//! use zurvan_picker::{CalendarKind, pick};
//!
//! let picked = pick(
//!     FileTime::new(133_554_231_300_000_000),
//!     0,
//!     None,
//!     CalendarKind::Persian.selector(),
//! )?;
//! assert_eq!(picked.fields(), ["1403", "01", "01", "15", "45", "30"]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `kind` | `CalendarKind` and JDN → date dispatch |
//! | `daylight` | Daylight window parsing and the in-window test |
//! | `picker` | Six-field date/time picking |
//! | `error` | Error types |

mod daylight;
mod error;
mod kind;
mod picker;

pub use daylight::{DaylightWindow, check_daylight};
pub use error::DaylightError;
pub use kind::{CalendarKind, date_to_jd, jd_to_date, jd_to_date_for_selector};
pub use picker::{PickedDateTime, pick};
