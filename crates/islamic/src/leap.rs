//! 30-year-cycle leap predicate.

/// Tabular Islamic leap-year predicate.
///
/// Closed form of the 355-day years the day-count formula produces:
/// years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29 of each 30-year
/// cycle are leap.
pub fn leap_islamic(year: i32) -> bool {
    (11 * i64::from(year) + 14).rem_euclid(30) < 11
}
