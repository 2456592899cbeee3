//! Tabular Hijri ⇄ JDN conversions.

use zurvan_julian::{Date, JulianDay};

/// JDN of the day before 0001-01-01 Hijri, midnight-offset.
pub const ISLAMIC_EPOCH: f64 = 1_948_439.5;

/// Converts a tabular Islamic date to its midnight JDN.
///
/// `ceil(29.5*(month-1))` alternates 30- and 29-day months;
/// `floor((3 + 11*year)/30)` distributes the 11 leap days of each
/// 30-year cycle. Total over all inputs; no field validation.
pub fn islamic_to_jd(date: Date) -> JulianDay {
    let year = f64::from(date.year());
    let month = f64::from(date.month());
    let day = f64::from(date.day());
    let jd = day
        + (29.5 * (month - 1.0)).ceil()
        + (year - 1.0) * 354.0
        + ((3.0 + 11.0 * year) / 30.0).floor()
        + ISLAMIC_EPOCH
        - 1.0;
    JulianDay::new(jd)
}

/// Decomposes a JDN into a tabular Islamic date.
///
/// The month formula can overshoot in the final days of a long year, so
/// it is capped at 12.
pub fn jd_to_islamic(jd: JulianDay) -> Date {
    let jd = jd.midnight_of_day().get();
    let year = ((30.0 * (jd - ISLAMIC_EPOCH) + 10_646.0) / 10_631.0).floor();
    let year = year as i32;
    let month = (((jd - (29.0 + islamic_to_jd(Date::new(year, 1, 1)).get())) / 29.5).ceil() + 1.0)
        .min(12.0);
    let day = jd - islamic_to_jd(Date::new(year, month as u8, 1)).get() + 1.0;
    Date::new(year, month as u8, day as u8)
}
