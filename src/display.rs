//! Display-side digit transliteration and Persian name tables.
//!
//! Applies only to formatted output; the conversion engine itself never
//! sees Persian-Arabic digits.

/// ASCII digit / Persian-Arabic digit pairs.
const DIGIT_PAIRS: [(char, char); 10] = [
    ('0', '۰'),
    ('1', '۱'),
    ('2', '۲'),
    ('3', '۳'),
    ('4', '۴'),
    ('5', '۵'),
    ('6', '۶'),
    ('7', '۷'),
    ('8', '۸'),
    ('9', '۹'),
];

/// Replaces each ASCII digit with its Persian-Arabic counterpart.
/// All other characters pass through unchanged.
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            DIGIT_PAIRS
                .iter()
                .find(|(ascii, _)| *ascii == c)
                .map_or(c, |&(_, fa)| fa)
        })
        .collect()
}

/// Replaces each Persian-Arabic digit with its ASCII counterpart.
/// All other characters pass through unchanged.
pub fn to_ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            DIGIT_PAIRS
                .iter()
                .find(|(_, fa)| *fa == c)
                .map_or(c, |&(ascii, _)| ascii)
        })
        .collect()
}

/// Persian month names, Farvardin through Esfand.
pub const PERSIAN_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Persian weekday names, Shanbeh through Jomeh.
pub const PERSIAN_WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یک\u{200c}شنبه",
    "دوشنبه",
    "سه\u{200c}شنبه",
    "چهارشنبه",
    "پنج\u{200c}شنبه",
    "جمعه",
];

/// Returns the name of a Persian month (1..=12).
pub fn persian_month_name(month: u8) -> Option<&'static str> {
    PERSIAN_MONTH_NAMES
        .get(usize::from(month).checked_sub(1)?)
        .copied()
}
