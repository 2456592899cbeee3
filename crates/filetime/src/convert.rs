//! Tick ⇄ JDN conversions and Unix-epoch helpers.

use zurvan_julian::{Date, JulianDay, gregorian_to_jd};
use zurvan_persian::persian_to_jd;

use crate::ticks::{
    FileTime, SECONDS_PER_DAY, TICKS_PER_SECOND, UNIX_EPOCH_JD, UNIX_EPOCH_SECONDS,
};

/// Converts a tick timestamp to the midnight JDN of its civil day.
///
/// The timezone offset (in ticks) is applied before day derivation.
/// The divisions truncate in integer space, so the result always carries
/// the `.5` midnight offset; the time of day is recovered separately via
/// [`crate::time_of_day`].
pub fn filetime_to_jd(filetime: FileTime, timezone: i64) -> JulianDay {
    let shifted = filetime.get() + timezone;
    let days = (shifted / TICKS_PER_SECOND - UNIX_EPOCH_SECONDS) / SECONDS_PER_DAY;
    JulianDay::new(days as f64 + UNIX_EPOCH_JD)
}

/// Converts a JDN to a tick timestamp, truncating sub-tick fractions
/// toward zero.
pub fn jd_to_filetime(jd: JulianDay) -> FileTime {
    let ticks = ((jd.get() - UNIX_EPOCH_JD) * SECONDS_PER_DAY as f64
        + UNIX_EPOCH_SECONDS as f64)
        * TICKS_PER_SECOND as f64;
    FileTime::new(ticks as i64)
}

/// Converts a proleptic Gregorian date to the tick timestamp of its
/// midnight.
pub fn gregorian_to_filetime(date: Date) -> FileTime {
    jd_to_filetime(gregorian_to_jd(date))
}

/// Converts a Persian date to the tick timestamp of its midnight.
pub fn persian_to_filetime(date: Date) -> FileTime {
    jd_to_filetime(persian_to_jd(date))
}

/// Converts Unix-epoch milliseconds to a tick timestamp.
///
/// Negative inputs clamp to tick zero, mirroring the platform converters
/// this clock interoperates with.
pub fn unix_millis_to_filetime(millis: i64) -> FileTime {
    if millis < 0 {
        return FileTime::new(0);
    }
    FileTime::new((millis / 1000 + UNIX_EPOCH_SECONDS) * TICKS_PER_SECOND)
}

/// Converts a tick timestamp to Unix-epoch milliseconds.
///
/// Negative tick counts (before 1601) clamp to zero.
pub fn filetime_to_unix_millis(filetime: FileTime) -> i64 {
    if filetime.get() < 0 {
        return 0;
    }
    (filetime.get() / TICKS_PER_SECOND - UNIX_EPOCH_SECONDS) * 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-03-20T00:00:00Z.
    const NOWRUZ_1403: i64 = 133_553_664_000_000_000;

    #[test]
    fn filetime_to_jd_reference_point() {
        assert_eq!(filetime_to_jd(FileTime::new(NOWRUZ_1403), 0).get(), 2460389.5);
    }

    #[test]
    fn mid_day_ticks_map_to_same_jd() {
        // 15:45:30 into the same day.
        let ft = FileTime::new(133_554_231_300_000_000);
        assert_eq!(filetime_to_jd(ft, 0).get(), 2460389.5);
    }

    #[test]
    fn timezone_shift_can_move_the_day() {
        // 23:30 UTC plus a +1 h offset lands on the next civil day.
        let ft = FileTime::new(
            NOWRUZ_1403 + 23 * crate::TICKS_PER_HOUR + 30 * crate::TICKS_PER_MINUTE,
        );
        assert_eq!(filetime_to_jd(ft, 0).get(), 2460389.5);
        assert_eq!(filetime_to_jd(ft, crate::TICKS_PER_HOUR).get(), 2460390.5);
    }

    #[test]
    fn gregorian_to_filetime_reference_point() {
        assert_eq!(
            gregorian_to_filetime(Date::new(2024, 3, 20)).get(),
            NOWRUZ_1403
        );
    }

    #[test]
    fn persian_to_filetime_matches_gregorian_equivalent() {
        // 1403-01-01 Persian and 2024-03-20 Gregorian are the same day.
        assert_eq!(
            persian_to_filetime(Date::new(1403, 1, 1)).get(),
            NOWRUZ_1403
        );
    }

    #[test]
    fn jd_to_filetime_and_back() {
        let jd = JulianDay::new(2460389.5);
        let ft = jd_to_filetime(jd);
        assert_eq!(filetime_to_jd(ft, 0).get(), jd.get());
    }

    #[test]
    fn unix_millis_reference_point() {
        // 2024-04-01T00:00:00Z = 1711929600 Unix seconds.
        assert_eq!(
            unix_millis_to_filetime(1_711_929_600_000).get(),
            133_564_032_000_000_000
        );
        assert_eq!(
            filetime_to_unix_millis(FileTime::new(133_564_032_000_000_000)),
            1_711_929_600_000
        );
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        assert_eq!(unix_millis_to_filetime(-1).get(), 0);
        assert_eq!(filetime_to_unix_millis(FileTime::new(-1)), 0);
    }
}
