use zurvan_julian::Date;
use zurvan_persian::{jd_to_persian, leap_persian, month_length, persian_to_jd};

#[test]
fn roundtrip_one_year_per_century() {
    // One probe per century from well inside the first representable
    // cycle across two grand-cycle boundaries (3294/3295 and 6114/6115).
    for year in (500..=6100).step_by(100) {
        for (month, day) in [(1u8, 1u8), (6, 31), (12, 29)] {
            let date = Date::new(year, month, day);
            let back = jd_to_persian(persian_to_jd(date));
            assert_eq!(back, date, "roundtrip failed for {year}-{month}-{day}");
        }
    }
}

#[test]
fn roundtrip_across_cycle_boundaries() {
    for year in [3294, 3295, 6114, 6115] {
        for month in 1..=12u8 {
            let date = Date::new(year, month, 1);
            let back = jd_to_persian(persian_to_jd(date));
            assert_eq!(back, date, "roundtrip failed for {year}-{month}-01");
        }
    }
}

#[test]
fn roundtrip_leap_day() {
    // Esfand 30th exists only in leap years.
    for year in [1399, 1404, 3294] {
        assert!(leap_persian(year), "expected {year} to be leap");
        let date = Date::new(year, 12, 30);
        assert_eq!(jd_to_persian(persian_to_jd(date)), date);
    }
}

#[test]
fn jd_roundtrip_within_tolerance() {
    for year in [475, 1000, 1403, 2820, 3295, 5640] {
        let jd = persian_to_jd(Date::new(year, 1, 1));
        let back = persian_to_jd(jd_to_persian(jd));
        assert!(
            (back - jd).abs() < 1e-9,
            "jd {} came back as {} for year {year}",
            jd.get(),
            back.get()
        );
    }
}

#[test]
fn year_lengths_sum_to_month_lengths() {
    for year in [1399, 1400, 1403, 1404] {
        let total: f64 = (1..=12u8).map(|m| f64::from(month_length(year, m))).sum();
        let span = persian_to_jd(Date::new(year + 1, 1, 1)) - persian_to_jd(Date::new(year, 1, 1));
        assert_eq!(total, span, "month lengths disagree with year span for {year}");
    }
}
