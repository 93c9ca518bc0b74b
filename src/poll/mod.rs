//! Poll snapshot records and vote lookups
//!
//! This module contains the records supplied by the poll data layer and the
//! index built over them:
//! - `models`: Poll, option, participant and vote records
//! - `index`: Per-snapshot id maps answering vote and participant lookups

mod index;
mod models;

pub use index::{ParticipantVotes, PollIndex, VoteType};
pub use models::{Participant, Poll, PollOption, Vote};
