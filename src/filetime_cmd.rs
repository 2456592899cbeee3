//! To-filetime command: calendar date -> tick timestamp.

use anyhow::Result;
use tracing::debug;

use zurvan_filetime::jd_to_filetime;
use zurvan_julian::Date;
use zurvan_picker::date_to_jd;

use crate::cli::ToFiletimeArgs;
use crate::convert;

/// Run a single calendar-date-to-tick conversion.
pub fn run(args: ToFiletimeArgs) -> Result<()> {
    let calendar = convert::parse_calendar(&args.calendar)?;

    let date = Date::new(args.year, args.month, args.day);
    let jd = date_to_jd(date, calendar);
    debug!(jd = jd.get(), "intermediate day count");

    let filetime = jd_to_filetime(jd);
    println!("{}", filetime.get());
    Ok(())
}
