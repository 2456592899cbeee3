//! Pure conversion functions: CLI/config strings -> crate API types.

use anyhow::{Result, bail};

use zurvan_picker::CalendarKind;

/// Parses a calendar name string into the corresponding kind.
pub fn parse_calendar(s: &str) -> Result<CalendarKind> {
    match s.to_lowercase().as_str() {
        "gregorian" | "miladi" => Ok(CalendarKind::Gregorian),
        "persian" | "jalali" | "shamsi" => Ok(CalendarKind::Persian),
        "islamic" | "hijri" | "qamari" => Ok(CalendarKind::Islamic),
        other => bail!("unknown calendar: {other:?}"),
    }
}
