//! `CalendarKind` and JDN → date dispatch.

use zurvan_islamic::{islamic_to_jd, jd_to_islamic};
use zurvan_julian::{Date, JulianDay, gregorian_to_jd, jd_to_gregorian};
use zurvan_persian::{jd_to_persian, persian_to_jd};

/// The calendar a day count decomposes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarKind {
    /// Proleptic Gregorian.
    Gregorian,
    /// Persian (Jalali), 2820-year grand cycle.
    Persian,
    /// Tabular Islamic (Hijri).
    Islamic,
}

impl CalendarKind {
    /// Maps the wire selector (0, 1, 2) to a kind. Any other value is
    /// unrecognized and handled by the caller's Gregorian fallback.
    pub fn from_selector(selector: i32) -> Option<Self> {
        match selector {
            0 => Some(Self::Gregorian),
            1 => Some(Self::Persian),
            2 => Some(Self::Islamic),
            _ => None,
        }
    }

    /// Returns the wire selector for this kind.
    pub fn selector(self) -> i32 {
        match self {
            Self::Gregorian => 0,
            Self::Persian => 1,
            Self::Islamic => 2,
        }
    }
}

/// Converts a date in the given calendar to its midnight JDN.
pub fn date_to_jd(date: Date, kind: CalendarKind) -> JulianDay {
    match kind {
        CalendarKind::Gregorian => gregorian_to_jd(date),
        CalendarKind::Persian => persian_to_jd(date),
        CalendarKind::Islamic => islamic_to_jd(date),
    }
}

/// Decomposes a JDN into a date in the given calendar.
///
/// The day count is always run through a Gregorian decompose/rebuild
/// round trip first, pinning it to the canonical midnight value, before
/// the target calendar decomposes it.
pub fn jd_to_date(jd: JulianDay, kind: CalendarKind) -> Date {
    let gregorian = jd_to_gregorian(jd);
    let normalized = gregorian_to_jd(gregorian);
    match kind {
        CalendarKind::Gregorian => jd_to_gregorian(normalized),
        CalendarKind::Persian => jd_to_persian(normalized),
        CalendarKind::Islamic => jd_to_islamic(normalized),
    }
}

/// Like [`jd_to_date`], keyed by the wire selector.
///
/// An unrecognized selector is not an error: the already-computed
/// Gregorian triple is the defined fallback.
pub fn jd_to_date_for_selector(jd: JulianDay, selector: i32) -> Date {
    match CalendarKind::from_selector(selector) {
        Some(kind) => jd_to_date(jd, kind),
        None => jd_to_gregorian(jd),
    }
}
