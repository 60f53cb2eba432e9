//! `nbpack version` command

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};

use crate::cli::VersionArgs;
use nbpack::cluster::{adapt_version, VersionKind};

pub fn execute(args: VersionArgs) -> Result<()> {
    let kind = if args.implementation {
        VersionKind::Implementation
    } else {
        VersionKind::Specification
    };
    let date = match &args.date {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("bad date `{date}`, expected YYYY-MM-DD"))?,
        None => Utc::now().date_naive(),
    };
    println!("{}", adapt_version(&args.version, kind, date));
    Ok(())
}
