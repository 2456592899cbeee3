//! Proleptic Gregorian ⇄ JDN conversions and the leap predicate.
//!
//! All arithmetic runs in `f64` with truncating `%` so that results are
//! bit-identical across platforms at the reference values.

use crate::date::Date;
use crate::day::JulianDay;

/// JDN of the day before 0001-01-01 Gregorian, midnight-offset.
pub const GREGORIAN_EPOCH: f64 = 1_721_425.5;

/// Gregorian leap-year predicate: divisible by 4 and not
/// (divisible by 100 without being divisible by 400).
pub fn leap_gregorian(year: i32) -> bool {
    let y = f64::from(year);
    y % 4.0 == 0.0 && !(y % 100.0 == 0.0 && y % 400.0 != 0.0)
}

/// Converts a proleptic Gregorian date to its midnight JDN.
///
/// Total over all inputs: out-of-range month or day values produce
/// mathematically consistent but possibly meaningless day counts.
pub fn gregorian_to_jd(date: Date) -> JulianDay {
    let year = f64::from(date.year());
    let month = f64::from(date.month());
    let day = f64::from(date.day());
    let leap_term = if month <= 2.0 {
        0.0
    } else if leap_gregorian(date.year()) {
        -1.0
    } else {
        -2.0
    };
    let jd = (GREGORIAN_EPOCH - 1.0)
        + 365.0 * (year - 1.0)
        + ((year - 1.0) / 4.0).floor()
        - ((year - 1.0) / 100.0).floor()
        + ((year - 1.0) / 400.0).floor()
        + ((367.0 * month - 362.0) / 12.0 + leap_term + day).floor();
    JulianDay::new(jd)
}

/// Decomposes a JDN into a proleptic Gregorian date.
///
/// Inverts [`gregorian_to_jd`] through a 400-year / 100-year / 4-year /
/// 1-year cascade of floor-divisions and remainders on the normalized day
/// count. Meaningful for days at or after [`GREGORIAN_EPOCH`]; earlier
/// day counts decompose to meaningless triples.
pub fn jd_to_gregorian(jd: JulianDay) -> Date {
    let wjd = jd.normalized().get();
    let depoch = wjd - GREGORIAN_EPOCH;
    let quadricent = (depoch / 146_097.0).floor();
    let dqc = depoch % 146_097.0;
    let cent = (dqc / 36_524.0).floor();
    let dcent = dqc % 36_524.0;
    let quad = (dcent / 1_461.0).floor();
    let dquad = dcent % 1_461.0;
    let yindex = (dquad / 365.0).floor();
    let mut year = quadricent * 400.0 + cent * 100.0 + quad * 4.0 + yindex;
    // The cascade undercounts by one except on the last day of a century
    // or quadrennium.
    if !(cent == 4.0 || yindex == 4.0) {
        year += 1.0;
    }
    let year = year as i32;

    let yearday = wjd - gregorian_to_jd(Date::new(year, 1, 1)).get();
    let leap_adj = if wjd < gregorian_to_jd(Date::new(year, 3, 1)).get() {
        0.0
    } else if leap_gregorian(year) {
        1.0
    } else {
        2.0
    };
    let month = (((yearday + leap_adj) * 12.0 + 373.0) / 367.0).floor();
    let day = wjd - gregorian_to_jd(Date::new(year, month as u8, 1)).get() + 1.0;
    Date::new(year, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_reference_years() {
        assert!(leap_gregorian(2000));
        assert!(!leap_gregorian(1900));
        assert!(leap_gregorian(2024));
        assert!(!leap_gregorian(2023));
    }

    #[test]
    fn leap_negative_years() {
        assert!(leap_gregorian(-4));
        assert!(!leap_gregorian(-100));
        assert!(leap_gregorian(-400));
    }

    #[test]
    fn epoch_reference_point() {
        assert_eq!(gregorian_to_jd(Date::new(2000, 1, 1)).get(), 2451544.5);
    }

    #[test]
    fn first_day_of_calendar() {
        assert_eq!(gregorian_to_jd(Date::new(1, 1, 1)).get(), GREGORIAN_EPOCH);
    }

    #[test]
    fn to_jd_known_dates() {
        assert_eq!(gregorian_to_jd(Date::new(2024, 3, 20)).get(), 2460389.5);
        assert_eq!(gregorian_to_jd(Date::new(1970, 1, 1)).get(), 2440587.5);
    }

    #[test]
    fn from_jd_known_dates() {
        assert_eq!(jd_to_gregorian(JulianDay::new(2460389.5)), Date::new(2024, 3, 20));
        assert_eq!(jd_to_gregorian(JulianDay::new(2440587.5)), Date::new(1970, 1, 1));
    }

    #[test]
    fn leap_day_roundtrip() {
        let date = Date::new(2024, 2, 29);
        assert_eq!(jd_to_gregorian(gregorian_to_jd(date)), date);
    }

    #[test]
    fn century_non_leap_boundary() {
        // 1900-02-28 is followed by 1900-03-01.
        let feb28 = gregorian_to_jd(Date::new(1900, 2, 28));
        assert_eq!(jd_to_gregorian(feb28 + 1.0), Date::new(1900, 3, 1));
    }

    #[test]
    fn quadricentennial_leap_boundary() {
        // 2000-02-28 is followed by 2000-02-29.
        let feb28 = gregorian_to_jd(Date::new(2000, 2, 28));
        assert_eq!(jd_to_gregorian(feb28 + 1.0), Date::new(2000, 2, 29));
    }

    #[test]
    fn fractional_jd_decomposes_to_same_day() {
        let midnight = gregorian_to_jd(Date::new(2024, 3, 20));
        assert_eq!(jd_to_gregorian(midnight + 0.4), Date::new(2024, 3, 20));
        assert_eq!(jd_to_gregorian(midnight + 0.9), Date::new(2024, 3, 20));
    }
}
