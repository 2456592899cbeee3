use serde::Deserialize;

/// Top-level Zurvan configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZurvanConfig {
    /// Timezone offset in ticks, added before day derivation.
    #[serde(default)]
    pub timezone_ticks: i64,

    /// Daylight window spec `"fromMonth,fromDay,toMonth,toDay"`, or absent
    /// for no daylight rule.
    #[serde(default)]
    pub daylight: Option<String>,

    /// Calendar used for date decomposition.
    #[serde(default = "default_calendar")]
    pub calendar: String,

    /// Display-language tag used to resolve digit rendering.
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for ZurvanConfig {
    fn default() -> Self {
        Self {
            timezone_ticks: 0,
            daylight: None,
            calendar: default_calendar(),
            language: default_language(),
        }
    }
}

fn default_calendar() -> String {
    "gregorian".to_string()
}
fn default_language() -> String {
    "english".to_string()
}
