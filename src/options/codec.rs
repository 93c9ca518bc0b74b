//! Decoding of stored option values into display fields

use super::projector::{
    DateProps, clock_time, date_props, parse_local_datetime, parse_time_zone, project,
};
use crate::error::{PollViewError, Result};
use crate::poll::PollOption;
use chrono::NaiveDate;
use chrono_tz::Tz;
use log::debug;
use serde::Serialize;
use std::fmt;

/// Time of day appended to bare dates before parsing
const MIDNIGHT: &str = "T00:00:00";

/// Poll-wide option encoding
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PollType {
    /// Whole days (`2024-03-01`)
    date,
    /// Start/end pairs (`2024-03-01T08:00:00/2024-03-01T09:00:00`)
    #[serde(rename = "timeSlot")]
    time_slot,
}

impl fmt::Display for PollType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollType::date => write!(f, "date"),
            PollType::time_slot => write!(f, "timeSlot"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDateOption {
    pub option_id: String,
    pub day: String,
    pub dow: String,
    pub month: String,
}

/// A time slot as seen from the target time zone
///
/// Calendar fields describe the start of the slot only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTimeSlotOption {
    pub option_id: String,
    pub day: String,
    pub dow: String,
    pub month: String,
    pub start_time: String,
    pub end_time: String,
}

impl ParsedTimeSlotOption {
    /// Heading the slot is grouped under: `Fri 1 Mar`
    pub fn day_heading(&self) -> String {
        format!("{} {} {}", self.dow, self.day, self.month)
    }
}

/// A single decoded option of either encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ParsedOption {
    #[serde(rename = "date")]
    Date(ParsedDateOption),
    #[serde(rename = "timeSlot")]
    TimeSlot(ParsedTimeSlotOption),
}

impl ParsedOption {
    pub fn option_id(&self) -> &str {
        match self {
            ParsedOption::Date(option) => &option.option_id,
            ParsedOption::TimeSlot(option) => &option.option_id,
        }
    }
}

/// All options of a poll, decoded with the poll's encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "pollType", content = "options")]
pub enum DecodedOptions {
    #[serde(rename = "date")]
    Date(Vec<ParsedDateOption>),
    #[serde(rename = "timeSlot")]
    TimeSlot(Vec<ParsedTimeSlotOption>),
}

impl DecodedOptions {
    pub fn poll_type(&self) -> PollType {
        match self {
            DecodedOptions::Date(_) => PollType::date,
            DecodedOptions::TimeSlot(_) => PollType::time_slot,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DecodedOptions::Date(options) => options.len(),
            DecodedOptions::TimeSlot(options) => options.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Option ids in poll order
    pub fn option_ids(&self) -> Vec<&str> {
        match self {
            DecodedOptions::Date(options) => {
                options.iter().map(|o| o.option_id.as_str()).collect()
            }
            DecodedOptions::TimeSlot(options) => {
                options.iter().map(|o| o.option_id.as_str()).collect()
            }
        }
    }
}

/// Whether a raw option value encodes a time slot
pub fn is_time_slot(value: &str) -> bool {
    value.contains('/')
}

/// Source zone of a poll; a missing or blank name means floating local time
fn source_zone(source_time_zone: Option<&str>) -> Result<Option<Tz>> {
    match source_time_zone.map(str::trim) {
        Some(name) if !name.is_empty() => parse_time_zone(name).map(Some),
        _ => Ok(None),
    }
}

/// Decode every option of a poll for display in `target_time_zone`
///
/// The encoding of the first option decides the poll type; every other option
/// must use the same encoding. Output order follows input order.
pub fn decode_options(
    options: &[PollOption],
    source_time_zone: Option<&str>,
    target_time_zone: &str,
) -> Result<DecodedOptions> {
    let source = source_zone(source_time_zone)?;
    let target = parse_time_zone(target_time_zone)?;
    decode_options_in(options, source.as_ref(), &target)
}

/// Same as [`decode_options`] with already resolved zones
pub fn decode_options_in(
    options: &[PollOption],
    source: Option<&Tz>,
    target: &Tz,
) -> Result<DecodedOptions> {
    let first = options.first().ok_or(PollViewError::EmptyOptionSet)?;
    let poll_type = if is_time_slot(&first.value) {
        PollType::time_slot
    } else {
        PollType::date
    };

    debug!(
        "Decoding {} option(s) as {} (source: {}, target: {})",
        options.len(),
        poll_type,
        source.map(|tz| tz.name()).unwrap_or("floating"),
        target.name()
    );

    match poll_type {
        PollType::date => options
            .iter()
            .map(|option| {
                ensure_encoding(option, PollType::date)?;
                parse_date_option(option)
            })
            .collect::<Result<Vec<_>>>()
            .map(DecodedOptions::Date),
        PollType::time_slot => options
            .iter()
            .map(|option| {
                ensure_encoding(option, PollType::time_slot)?;
                parse_time_slot_option(option, source, target)
            })
            .collect::<Result<Vec<_>>>()
            .map(DecodedOptions::TimeSlot),
    }
}

/// Decode one option on its own, detecting its encoding from its value
pub fn decode_option(
    option: &PollOption,
    source_time_zone: Option<&str>,
    target_time_zone: &str,
) -> Result<ParsedOption> {
    let source = source_zone(source_time_zone)?;
    let target = parse_time_zone(target_time_zone)?;
    if is_time_slot(&option.value) {
        parse_time_slot_option(option, source.as_ref(), &target).map(ParsedOption::TimeSlot)
    } else {
        parse_date_option(option).map(ParsedOption::Date)
    }
}

fn ensure_encoding(option: &PollOption, poll_type: PollType) -> Result<()> {
    let matches = match poll_type {
        PollType::date => !is_time_slot(&option.value),
        PollType::time_slot => is_time_slot(&option.value),
    };
    if matches {
        Ok(())
    } else {
        Err(PollViewError::MixedEncoding {
            option_id: option.id.clone(),
        })
    }
}

/// Calendar date of a date option value
///
/// Bare dates are read at local midnight so the day never drifts with the
/// viewer's offset.
pub fn parse_option_date(value: &str) -> Result<NaiveDate> {
    let datetime = if value.contains('T') {
        parse_local_datetime(value)
    } else {
        parse_local_datetime(&format!("{}{}", value, MIDNIGHT))
    };
    datetime
        .map(|dt| dt.date())
        .map_err(|_| PollViewError::InvalidOptionValue(value.to_string()))
}

fn parse_date_option(option: &PollOption) -> Result<ParsedDateOption> {
    let DateProps { day, dow, month } = date_props(parse_option_date(&option.value)?);
    Ok(ParsedDateOption {
        option_id: option.id.clone(),
        day,
        dow,
        month,
    })
}

fn parse_time_slot_option(
    option: &PollOption,
    source: Option<&Tz>,
    target: &Tz,
) -> Result<ParsedTimeSlotOption> {
    let (start, end) = option
        .value
        .split_once('/')
        .ok_or_else(|| PollViewError::InvalidOptionValue(option.value.clone()))?;
    let start = project(parse_local_datetime(start)?, source, target);
    let end = project(parse_local_datetime(end)?, source, target);
    let DateProps { day, dow, month } = date_props(start.date());

    Ok(ParsedTimeSlotOption {
        option_id: option.id.clone(),
        day,
        dow,
        month,
        start_time: clock_time(start),
        end_time: clock_time(end),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<PollOption> {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| PollOption::new(format!("opt-{}", i + 1), *value))
            .collect()
    }

    #[test]
    fn test_date_poll_detected() {
        let decoded = decode_options(&options(&["2024-03-01", "2024-03-02"]), None, "UTC").unwrap();
        assert_eq!(decoded.poll_type(), PollType::date);
        assert_eq!(decoded.len(), 2);
    }

    #[test]
    fn test_time_slot_poll_detected() {
        let decoded = decode_options(
            &options(&["2024-03-01T08:00:00/2024-03-01T09:00:00"]),
            None,
            "UTC",
        )
        .unwrap();
        assert_eq!(decoded.poll_type(), PollType::time_slot);
    }

    #[test]
    fn test_empty_option_set() {
        assert_eq!(
            decode_options(&[], None, "UTC").unwrap_err(),
            PollViewError::EmptyOptionSet
        );
    }

    #[test]
    fn test_date_option_fields() {
        let decoded = decode_options(&options(&["2024-03-01"]), None, "UTC").unwrap();
        let DecodedOptions::Date(parsed) = decoded else {
            panic!("expected date options");
        };
        assert_eq!(
            parsed[0],
            ParsedDateOption {
                option_id: "opt-1".to_string(),
                day: "1".to_string(),
                dow: "Fri".to_string(),
                month: "Mar".to_string(),
            }
        );
    }

    #[test]
    fn test_date_option_with_time_component() {
        assert_eq!(
            parse_option_date("2024-03-01T23:30:00").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_mixed_encoding_fails_fast() {
        let err = decode_options(
            &options(&["2024-03-01", "2024-03-02T08:00:00/2024-03-02T09:00:00"]),
            None,
            "UTC",
        )
        .unwrap_err();
        assert_eq!(
            err,
            PollViewError::MixedEncoding {
                option_id: "opt-2".to_string()
            }
        );

        let err = decode_options(
            &options(&["2024-03-02T08:00:00/2024-03-02T09:00:00", "2024-03-01"]),
            None,
            "UTC",
        )
        .unwrap_err();
        assert!(matches!(err, PollViewError::MixedEncoding { .. }));
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        assert!(matches!(
            decode_options(&options(&["next tuesday"]), None, "UTC"),
            Err(PollViewError::InvalidOptionValue(_))
        ));
        assert!(matches!(
            decode_options(&options(&["2024-03-01T08:00:00/soon"]), None, "UTC"),
            Err(PollViewError::InvalidOptionValue(_))
        ));
    }

    #[test]
    fn test_blank_source_zone_is_floating() {
        let decoded = decode_options(
            &options(&["2024-06-01T08:00:00/2024-06-01T09:00:00"]),
            Some(""),
            "Asia/Tokyo",
        )
        .unwrap();
        let DecodedOptions::TimeSlot(parsed) = decoded else {
            panic!("expected time slot options");
        };
        assert_eq!(parsed[0].start_time, "08:00 AM");
    }

    #[test]
    fn test_invalid_zone_names() {
        assert!(matches!(
            decode_options(&options(&["2024-03-01"]), None, "Nowhere/Special"),
            Err(PollViewError::InvalidTimeZone(_))
        ));
        assert!(matches!(
            decode_options(&options(&["2024-03-01"]), Some("Nowhere/Special"), "UTC"),
            Err(PollViewError::InvalidTimeZone(_))
        ));
    }

    #[test]
    fn test_decode_single_option_sniffs_its_own_encoding() {
        let date = decode_option(&PollOption::new("a", "2024-03-01"), None, "UTC").unwrap();
        assert!(matches!(date, ParsedOption::Date(_)));
        let slot = decode_option(
            &PollOption::new("b", "2024-03-01T08:00:00/2024-03-01T09:00:00"),
            Some("Europe/London"),
            "Europe/Paris",
        )
        .unwrap();
        let ParsedOption::TimeSlot(slot) = slot else {
            panic!("expected time slot");
        };
        assert_eq!(slot.option_id, "b");
        assert_eq!(slot.start_time, "09:00 AM");
        assert_eq!(slot.end_time, "10:00 AM");
    }

    #[test]
    fn test_poll_type_display() {
        assert_eq!(PollType::date.to_string(), "date");
        assert_eq!(PollType::time_slot.to_string(), "timeSlot");
    }
}
