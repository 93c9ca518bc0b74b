//! Time zone projection of option wall-clock times
//!
//! Stored time slots carry no offset: they are wall-clock times in the zone
//! the poll was authored in. Showing them to a viewer elsewhere takes two
//! steps. First the wall-clock time is read in the source zone, which gives an
//! absolute instant. Then that instant is written out in the target zone.

use crate::error::{PollViewError, Result};
use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;
use serde::Serialize;

/// Formats accepted for the two halves of a time slot
const LOCAL_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Calendar display fields of a day: `1`, `Fri`, `Mar`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DateProps {
    /// Day of month without zero padding
    pub day: String,
    /// Three-letter weekday
    pub dow: String,
    /// Three-letter month
    pub month: String,
}

/// Display fields of a calendar date
pub fn date_props(date: NaiveDate) -> DateProps {
    DateProps {
        day: date.format("%-d").to_string(),
        dow: date.format("%a").to_string(),
        month: date.format("%b").to_string(),
    }
}

/// 12-hour clock time with leading zero: `08:00 AM`
pub fn clock_time(datetime: NaiveDateTime) -> String {
    datetime.format("%I:%M %p").to_string()
}

/// Parse an IANA time zone name
pub fn parse_time_zone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| PollViewError::InvalidTimeZone(name.to_string()))
}

/// Parse a naive local datetime such as `2024-03-01T08:00:00`
pub fn parse_local_datetime(value: &str) -> Result<NaiveDateTime> {
    LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| PollViewError::InvalidOptionValue(value.to_string()))
}

/// Read a wall-clock time in `zone` and return the instant it denotes
///
/// Wall-clock times repeated by a DST fall-back resolve to the earlier
/// instant. Times skipped by a spring-forward gap are read with the offset in
/// force before the gap, so they land after it.
pub fn resolve_in_zone(local: NaiveDateTime, zone: &Tz) -> DateTime<Utc> {
    match zone.from_local_datetime(&local) {
        LocalResult::Single(datetime) => datetime.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            let before_gap = zone
                .offset_from_utc_datetime(&(local - Duration::hours(12)))
                .fix();
            let utc = local - Duration::seconds(i64::from(before_gap.local_minus_utc()));
            Utc.from_utc_datetime(&utc)
        }
    }
}

/// Wall-clock time in `target` for a wall-clock time authored in `source`
///
/// Without a source zone the time is floating: it is shown as written, in
/// whatever zone the viewer is in.
pub fn project(local: NaiveDateTime, source: Option<&Tz>, target: &Tz) -> NaiveDateTime {
    match source {
        Some(source) => resolve_in_zone(local, source)
            .with_timezone(target)
            .naive_local(),
        None => local,
    }
}
