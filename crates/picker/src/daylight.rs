//! Daylight window parsing and the in-window test.

use zurvan_julian::{Date, JulianDay};

use crate::error::DaylightError;
use crate::kind::jd_to_date_for_selector;

/// An inclusive month/day range within a single year during which the
/// daylight-saving hour applies.
///
/// The range does not wrap across a year boundary: a window with
/// `from_month > to_month` matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaylightWindow {
    from_month: i32,
    from_day: i32,
    to_month: i32,
    to_day: i32,
}

impl DaylightWindow {
    /// Builds a window from its four bounds.
    pub fn new(from_month: i32, from_day: i32, to_month: i32, to_day: i32) -> Self {
        Self {
            from_month,
            from_day,
            to_month,
            to_day,
        }
    }

    /// Parses a `"fromMonth,fromDay,toMonth,toDay"` spec.
    ///
    /// The literal `"null"` means "no window" and parses to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`DaylightError::FieldCount`] when the spec does not have
    /// exactly four comma-separated fields, and
    /// [`DaylightError::BadField`] when a field is not a decimal integer.
    pub fn parse(spec: &str) -> Result<Option<Self>, DaylightError> {
        if spec == "null" {
            return Ok(None);
        }
        let tokens: Vec<&str> = spec.split(',').collect();
        if tokens.len() != 4 {
            return Err(DaylightError::FieldCount { got: tokens.len() });
        }
        let mut fields = [0i32; 4];
        for (index, token) in tokens.iter().enumerate() {
            fields[index] = token.parse().map_err(|_| DaylightError::BadField {
                index,
                token: (*token).to_string(),
            })?;
        }
        Ok(Some(Self::new(fields[0], fields[1], fields[2], fields[3])))
    }

    /// Tests whether a date falls inside the window, inclusive at both
    /// boundary days.
    pub fn contains(self, date: Date) -> bool {
        let month = i32::from(date.month());
        let day = i32::from(date.day());
        month >= self.from_month
            && month <= self.to_month
            && (month != self.from_month || day >= self.from_day)
            && (month != self.to_month || day <= self.to_day)
    }
}

/// Evaluates the daylight policy for a day count.
///
/// Decomposes `jd` in the calendar named by `selector` and tests it
/// against the parsed window. An absent spec or the literal `"null"` is
/// the "no rule" sentinel and yields `Ok(false)`.
///
/// # Errors
///
/// Returns [`DaylightError`] when a present spec is malformed.
pub fn check_daylight(
    spec: Option<&str>,
    jd: JulianDay,
    selector: i32,
) -> Result<bool, DaylightError> {
    let Some(spec) = spec else {
        return Ok(false);
    };
    match DaylightWindow::parse(spec)? {
        Some(window) => Ok(window.contains(jd_to_date_for_selector(jd, selector))),
        None => Ok(false),
    }
}
