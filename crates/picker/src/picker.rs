//! Six-field date/time picking.

use zurvan_filetime::{FileTime, TICKS_PER_HOUR, TimeOfDay, filetime_to_jd, time_of_day};
use zurvan_julian::Date;

use crate::daylight::check_daylight;
use crate::error::DaylightError;
use crate::kind::jd_to_date_for_selector;

/// The picked calendar date and wall-clock time for a tick timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedDateTime {
    date: Date,
    time: TimeOfDay,
}

impl PickedDateTime {
    /// Returns the calendar date fields.
    pub fn date(self) -> Date {
        self.date
    }

    /// Returns the time-of-day fields.
    pub fn time(self) -> TimeOfDay {
        self.time
    }

    /// Returns `[year, month, day, hour, minute, second]` as decimal
    /// strings: year unpadded, the rest zero-padded to two digits.
    pub fn fields(&self) -> [String; 6] {
        [
            self.date.year().to_string(),
            format!("{:02}", self.date.month()),
            format!("{:02}", self.date.day()),
            format!("{:02}", self.time.hour()),
            format!("{:02}", self.time.minute()),
            format!("{:02}", self.time.second()),
        ]
    }
}

/// Picks the six date/time fields for a tick timestamp.
///
/// The timezone offset applies to both the day derivation and the
/// time-of-day decomposition. When a daylight window is configured and
/// the derived day falls inside it, one hour of ticks is added to the
/// timestamp used for the time of day — but the calendar date keeps the
/// pre-adjustment day count. A daylight adjustment that crosses midnight
/// therefore reports hour 00 against the previous civil date; this
/// asymmetry is compatibility behavior, kept deliberately.
///
/// # Errors
///
/// Returns [`DaylightError`] when a present daylight spec is malformed.
pub fn pick(
    filetime: FileTime,
    timezone: i64,
    daylight: Option<&str>,
    selector: i32,
) -> Result<PickedDateTime, DaylightError> {
    let jd = filetime_to_jd(filetime, timezone);

    let mut working = filetime;
    if daylight.is_some() && check_daylight(daylight, jd, selector)? {
        working = working.offset(TICKS_PER_HOUR);
    }

    let date = jd_to_date_for_selector(jd, selector);
    let time = time_of_day(working.offset(timezone));
    Ok(PickedDateTime { date, time })
}
