//! The two Persian leap predicates and month lengths.

use zurvan_julian::{Date, leap_gregorian};

use crate::convert::persian_to_jd;

/// Days in each Persian month for a common year (index 0 unused).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Cycle-based Persian leap-year predicate.
///
/// A year is leap when it spans 366 days under the 2820-year grand-cycle
/// day count. This is the predicate the conversions themselves embody and
/// the one that decides whether month 12 has 29 or 30 days.
pub fn leap_persian(year: i32) -> bool {
    let this_year = persian_to_jd(Date::new(year, 1, 1)).get();
    let next_year = persian_to_jd(Date::new(year + 1, 1, 1)).get();
    next_year - this_year == 366.0
}

/// Simplified civil Persian leap-year predicate.
///
/// Applies the Gregorian leap rule to `year + 621`. Kept as a separate
/// standalone predicate because it disagrees with [`leap_persian`] for
/// some years (1403 is leap here but not under the cycle rule, 1404 the
/// other way around); callers that relied on the old behavior keep it.
pub fn leap_persian_civil(year: i32) -> bool {
    leap_gregorian(year + 621)
}

/// Number of days in a Persian month, honoring [`leap_persian`] for
/// month 12. Returns 0 for months outside 1..=12.
pub fn month_length(year: i32, month: u8) -> u8 {
    if month == 12 && leap_persian(year) {
        return 30;
    }
    DAYS_PER_MONTH.get(month as usize).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_leap_reference_years() {
        assert!(leap_persian(1399));
        assert!(!leap_persian(1400));
        assert!(!leap_persian(1403));
        assert!(leap_persian(1404));
    }

    #[test]
    fn civil_leap_reference_years() {
        // year + 621: 1399 -> 2020 (leap), 1403 -> 2024 (leap).
        assert!(leap_persian_civil(1399));
        assert!(!leap_persian_civil(1400));
        assert!(leap_persian_civil(1403));
        assert!(!leap_persian_civil(1404));
    }

    #[test]
    fn predicates_disagree() {
        // The ambiguity is intentional and must not be unified away.
        assert_ne!(leap_persian(1403), leap_persian_civil(1403));
        assert_ne!(leap_persian(1404), leap_persian_civil(1404));
    }

    #[test]
    fn predicates_agree_on_common_years() {
        assert_eq!(leap_persian(1399), leap_persian_civil(1399));
        assert_eq!(leap_persian(1400), leap_persian_civil(1400));
    }

    #[test]
    fn month_lengths_common_year() {
        for month in 1..=6u8 {
            assert_eq!(month_length(1400, month), 31);
        }
        for month in 7..=11u8 {
            assert_eq!(month_length(1400, month), 30);
        }
        assert_eq!(month_length(1400, 12), 29);
    }

    #[test]
    fn month_12_in_leap_year() {
        assert_eq!(month_length(1399, 12), 30);
        assert_eq!(month_length(1404, 12), 30);
        // Last year of the grand cycle starting at 475.
        assert_eq!(month_length(3294, 12), 30);
    }

    #[test]
    fn month_out_of_range() {
        assert_eq!(month_length(1400, 0), 0);
        assert_eq!(month_length(1400, 13), 0);
    }
}
