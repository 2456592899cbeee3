//! Convert command: a date from one calendar to another via JDN.

use anyhow::Result;
use tracing::debug;

use zurvan_julian::Date;
use zurvan_picker::{date_to_jd, jd_to_date};

use crate::cli::ConvertArgs;
use crate::convert;

/// Run a single date conversion between two calendars.
pub fn run(args: ConvertArgs) -> Result<()> {
    let from = convert::parse_calendar(&args.from)?;
    let to = convert::parse_calendar(&args.to)?;

    let date = Date::new(args.year, args.month, args.day);
    let jd = date_to_jd(date, from);
    debug!(jd = jd.get(), "intermediate day count");

    let converted = jd_to_date(jd, to);
    println!("{converted}");
    Ok(())
}
