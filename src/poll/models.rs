use serde::{Deserialize, Serialize};

/// A snapshot of one scheduling poll as delivered by the poll data layer
///
/// Options keep the order in which they were authored. Participants and votes
/// are flat lists; `PollIndex` builds the lookups over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    /// Unique identifier of the poll
    pub id: String,
    /// Title shown to participants
    #[serde(default)]
    pub title: String,
    /// IANA time zone the options were authored in (None = floating local time)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Selectable options, in authored order
    #[serde(default)]
    pub options: Vec<PollOption>,
    /// People who have responded
    #[serde(default)]
    pub participants: Vec<Participant>,
    /// One record per (participant, option) "yes"
    #[serde(default)]
    pub votes: Vec<Vote>,
}

/// One selectable slot of a poll
///
/// `value` is either an ISO date (`2024-03-01`) or a time slot made of two
/// local datetimes joined by `/` (`2024-03-01T08:00:00/2024-03-01T09:00:00`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: String,
    pub value: String,
}

impl PollOption {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
}

/// A participant's "yes" on an option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub id: String,
    pub participant_id: String,
    pub option_id: String,
}
