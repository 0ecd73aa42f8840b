//! Time related utils.
//!
//! SigV4 works on UTC timestamps only, so everything here is pinned to [`Utc`].

use crate::{Error, Result};
use chrono::{NaiveDateTime, Utc};

/// DateTime is the alias for chrono's UTC datetime.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime that represents now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO8601: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Parse an ISO8601 basic timestamp like `20220313T072004Z`.
pub fn parse_iso8601(s: &str) -> Result<DateTime> {
    let t = NaiveDateTime::parse_from_str(s, "%Y%m%dT%H%M%SZ").map_err(|e| {
        Error::request_invalid(format!("invalid iso8601 timestamp: {s}")).with_source(e)
    })?;
    Ok(t.and_utc())
}

/// Take the `YYYYMMDD` date part out of an ISO8601 basic timestamp.
///
/// The date is cut from the formatted string instead of being formatted again, so the
/// credential scope always agrees with the `x-amz-date` header byte for byte.
pub fn date_of_iso8601(s: &str) -> &str {
    s.get(..8).unwrap_or(s)
}
