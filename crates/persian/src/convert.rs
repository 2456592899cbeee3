//! Persian ⇄ JDN conversions over the 2820-year grand cycle.
//!
//! All arithmetic runs in `f64` with truncating `%`, matching the
//! Gregorian core, so results are bit-identical across platforms.

use zurvan_julian::{Date, JulianDay};

/// JDN of the day before 0001-01-01 Persian, midnight-offset.
pub const PERSIAN_EPOCH: f64 = 1_948_320.5;

/// Days in one 2820-year grand cycle.
const GRAND_CYCLE_DAYS: f64 = 1_029_983.0;

/// Year offset into the grand cycle. Year 474 starts a cycle; strictly
/// negative years shift by one because the count skips year zero.
fn epoch_base(year: f64) -> f64 {
    year - if year >= 0.0 { 474.0 } else { 473.0 }
}

/// Converts a Persian date to its midnight JDN.
///
/// The first six months have 31 days, so a month up to 7 starts at
/// `(month-1)*31` days into the year; later months start at
/// `(month-1)*30 + 6`. The intercalation term
/// `floor((epyear*682 - 110)/2816)` places the leap days within the
/// cycle. Total over all inputs; no field validation.
pub fn persian_to_jd(date: Date) -> JulianDay {
    let year = f64::from(date.year());
    let month = f64::from(date.month());
    let day = f64::from(date.day());
    let epbase = epoch_base(year);
    let epyear = 474.0 + epbase % 2820.0;
    let month_days = if month <= 7.0 {
        (month - 1.0) * 31.0
    } else {
        (month - 1.0) * 30.0 + 6.0
    };
    let jd = day
        + month_days
        + ((epyear * 682.0 - 110.0) / 2816.0).floor()
        + (epyear - 1.0) * 365.0
        + (epbase / 2820.0).floor() * GRAND_CYCLE_DAYS
        + (PERSIAN_EPOCH - 1.0);
    JulianDay::new(jd)
}

/// Decomposes a JDN into a Persian date.
///
/// Inverts [`persian_to_jd`] through the grand cycle. The last day of a
/// cycle (`cyear == 1029982`) is special-cased to year 2820 of the cycle;
/// the general formula would mis-divide there. Meaningful for days at or
/// after the JDN of Persian 475-01-01; earlier day counts decompose to
/// meaningless triples.
pub fn jd_to_persian(jd: JulianDay) -> Date {
    let jd = jd.midnight_of_day().get();
    let depoch = jd - persian_to_jd(Date::new(475, 1, 1)).get();
    let cycle = (depoch / GRAND_CYCLE_DAYS).floor();
    let cyear = depoch % GRAND_CYCLE_DAYS;
    let ycycle = if cyear == 1_029_982.0 {
        2820.0
    } else {
        let aux1 = (cyear / 366.0).floor();
        let aux2 = cyear % 366.0;
        ((2134.0 * aux1 + 2816.0 * aux2 + 2815.0) / 1_028_522.0).floor() + aux1 + 1.0
    };
    let mut year = ycycle + 2820.0 * cycle + 474.0;
    // No year zero.
    if year <= 0.0 {
        year -= 1.0;
    }
    let year = year as i32;

    let yday = jd - persian_to_jd(Date::new(year, 1, 1)).get() + 1.0;
    let month = if yday <= 186.0 {
        (yday / 31.0).ceil()
    } else {
        ((yday - 6.0) / 30.0).ceil()
    };
    let day = jd - persian_to_jd(Date::new(year, month as u8, 1)).get() + 1.0;
    Date::new(year, month as u8, day as u8)
}
