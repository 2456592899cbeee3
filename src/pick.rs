//! Pick command: tick timestamp -> formatted date/time fields.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use zurvan_filetime::FileTime;
use zurvan_picker::pick;

use crate::cli::PickArgs;
use crate::config::ZurvanConfig;
use crate::convert;
use crate::display;
use crate::locale::{self, FileProvider, TextProvider};

/// Run the pick pipeline: load config, pick the six fields, render.
pub fn run(args: PickArgs) -> Result<()> {
    let config = match args.config {
        Some(ref path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            toml::from_str(&toml_str).context("failed to parse TOML config")?
        }
        None => ZurvanConfig::default(),
    };

    let timezone = args.timezone.unwrap_or(config.timezone_ticks);
    let daylight = args.daylight.or(config.daylight);
    let calendar = convert::parse_calendar(args.calendar.as_deref().unwrap_or(&config.calendar))?;

    info!(
        filetime = args.filetime,
        timezone,
        calendar = ?calendar,
        "picking date/time fields"
    );

    let picked = pick(
        FileTime::new(args.filetime),
        timezone,
        daylight.as_deref(),
        calendar.selector(),
    )?;
    let [year, month, day, hour, minute, second] = picked.fields();
    let mut line = format!("{year}-{month}-{day} {hour}:{minute}:{second}");

    if args.localized {
        let list = load_language_list(args.config.as_deref());
        if locale::resolve_language(&list, &config.language).as_deref() == Some("fa") {
            line = display::to_persian_digits(&line);
        }
    }

    println!("{line}");
    Ok(())
}

/// Loads the language-list resource from a `languages` file next to the
/// config, falling back to the built-in list.
fn load_language_list(config_path: Option<&Path>) -> String {
    let Some(dir) = config_path.and_then(Path::parent) else {
        return locale::DEFAULT_LANGUAGE_LIST.to_string();
    };
    match FileProvider::new(dir).get_text("languages") {
        Ok(list) => list,
        Err(e) => {
            debug!("no languages resource, using built-in list: {e:#}");
            locale::DEFAULT_LANGUAGE_LIST.to_string()
        }
    }
}
