//! Option drafts as entered while creating a poll, and their stored encoding

use crate::error::{PollViewError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A draft time slot with naive local start and end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A poll option before it is encoded for storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DateTimeOption {
    Date { date: NaiveDate },
    TimeSlot(TimeSlot),
}

impl DateTimeOption {
    /// The calendar day the option starts on
    pub fn start_date(&self) -> NaiveDate {
        match self {
            DateTimeOption::Date { date } => *date,
            DateTimeOption::TimeSlot(slot) => slot.start.date(),
        }
    }
}

/// Encode a draft into the stored option value
pub fn encode_date_option(option: &DateTimeOption) -> String {
    match option {
        DateTimeOption::Date { date } => date.format(DATE_FORMAT).to_string(),
        DateTimeOption::TimeSlot(slot) => format!(
            "{}/{}",
            slot.start.format(DATETIME_FORMAT),
            slot.end.format(DATETIME_FORMAT)
        ),
    }
}

/// Drop every draft that falls on `day`
pub fn remove_all_options_for_day(options: &[DateTimeOption], day: NaiveDate) -> Vec<DateTimeOption> {
    options
        .iter()
        .filter(|option| option.start_date() != day)
        .cloned()
        .collect()
}

/// Unwrap a time slot draft, failing on a date draft
pub fn expect_time_option(option: &DateTimeOption) -> Result<&TimeSlot> {
    match option {
        DateTimeOption::TimeSlot(slot) => Ok(slot),
        DateTimeOption::Date { .. } => Err(PollViewError::InvalidOptionValue(format!(
            "Expected timeSlot but got date {}",
            encode_date_option(option)
        ))),
    }
}
