use super::models::{Participant, Poll, Vote};
use crate::error::{PollViewError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A participant's answer for one option
///
/// Only two answers exist: a vote record means "yes", its absence means "no".
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteType {
    yes,
    no,
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteType::yes => write!(f, "yes"),
            VoteType::no => write!(f, "no"),
        }
    }
}

/// A participant together with every vote they cast in the poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantVotes {
    pub participant: Participant,
    pub votes: Vec<Vote>,
}

impl ParticipantVotes {
    /// Whether this participant voted for the given option
    pub fn voted_for(&self, option_id: &str) -> bool {
        self.votes.iter().any(|vote| vote.option_id == option_id)
    }
}

/// Id maps over one poll snapshot
///
/// Built once per snapshot so lookups do not scan the participant and vote
/// lists. Rebuild it whenever a new snapshot arrives.
#[derive(Debug, Clone, Default)]
pub struct PollIndex {
    /// Option ID → votes for that option, in vote list order
    votes_by_option: HashMap<String, Vec<Vote>>,
    /// Participant ID → participant and their votes
    participants: HashMap<String, ParticipantVotes>,
}

impl PollIndex {
    /// Build the index for a poll snapshot
    pub fn new(poll: &Poll) -> Self {
        let mut votes_by_option: HashMap<String, Vec<Vote>> = poll
            .options
            .iter()
            .map(|option| (option.id.clone(), Vec::new()))
            .collect();

        let mut participants: HashMap<String, ParticipantVotes> = poll
            .participants
            .iter()
            .map(|participant| {
                (
                    participant.id.clone(),
                    ParticipantVotes {
                        participant: participant.clone(),
                        votes: Vec::new(),
                    },
                )
            })
            .collect();

        for vote in &poll.votes {
            votes_by_option
                .entry(vote.option_id.clone())
                .or_default()
                .push(vote.clone());
            if let Some(entry) = participants.get_mut(&vote.participant_id) {
                entry.votes.push(vote.clone());
            }
        }

        Self {
            votes_by_option,
            participants,
        }
    }

    /// Votes cast for an option; unknown options have no votes
    pub fn votes_for_option(&self, option_id: &str) -> &[Vote] {
        self.votes_by_option
            .get(option_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look up a participant and their votes
    ///
    /// Ids passed here come from the poll's own vote and participant lists,
    /// so a miss means the caller holds a stale id.
    pub fn participant_by_id(&self, participant_id: &str) -> Result<&ParticipantVotes> {
        self.participants
            .get(participant_id)
            .ok_or_else(|| PollViewError::ParticipantNotFound(participant_id.to_string()))
    }

    /// A participant's answer for an option
    pub fn vote(&self, participant_id: &str, option_id: &str) -> Result<VoteType> {
        let participant = self.participant_by_id(participant_id)?;
        Ok(if participant.voted_for(option_id) {
            VoteType::yes
        } else {
            VoteType::no
        })
    }

    /// Number of participants in the snapshot
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::PollOption;

    fn sample_poll() -> Poll {
        Poll {
            id: "poll-1".to_string(),
            title: "Team lunch".to_string(),
            time_zone: None,
            options: vec![
                PollOption::new("A", "2024-03-01"),
                PollOption::new("B", "2024-03-02"),
                PollOption::new("C", "2024-03-03"),
            ],
            participants: vec![
                Participant {
                    id: "p1".to_string(),
                    name: "Alice".to_string(),
                },
                Participant {
                    id: "p2".to_string(),
                    name: "Bob".to_string(),
                },
            ],
            votes: vec![
                Vote {
                    id: "v1".to_string(),
                    participant_id: "p1".to_string(),
                    option_id: "A".to_string(),
                },
                Vote {
                    id: "v2".to_string(),
                    participant_id: "p1".to_string(),
                    option_id: "C".to_string(),
                },
                Vote {
                    id: "v3".to_string(),
                    participant_id: "p2".to_string(),
                    option_id: "A".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_vote_yes_and_no() {
        let index = PollIndex::new(&sample_poll());
        assert_eq!(index.vote("p1", "A").unwrap(), VoteType::yes);
        assert_eq!(index.vote("p1", "B").unwrap(), VoteType::no);
        assert_eq!(index.vote("p1", "C").unwrap(), VoteType::yes);
    }

    #[test]
    fn test_votes_for_option_contains_all_voters() {
        let index = PollIndex::new(&sample_poll());
        let votes = index.votes_for_option("A");
        let ids: Vec<&str> = votes.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v3"]);
        assert!(index.votes_for_option("B").is_empty());
    }

    #[test]
    fn test_votes_for_unknown_option_is_empty() {
        let index = PollIndex::new(&sample_poll());
        assert!(index.votes_for_option("nonexistent").is_empty());
    }

    #[test]
    fn test_unknown_participant_is_an_error() {
        let index = PollIndex::new(&sample_poll());
        assert_eq!(
            index.participant_by_id("ghost").unwrap_err(),
            PollViewError::ParticipantNotFound("ghost".to_string())
        );
        assert!(index.vote("ghost", "A").is_err());
    }

    #[test]
    fn test_participant_carries_own_votes() {
        let index = PollIndex::new(&sample_poll());
        let alice = index.participant_by_id("p1").unwrap();
        assert_eq!(alice.participant.name, "Alice");
        assert_eq!(alice.votes.len(), 2);
        assert_eq!(index.participant_count(), 2);
    }

    #[test]
    fn test_vote_type_display() {
        assert_eq!(VoteType::yes.to_string(), "yes");
        assert_eq!(VoteType::no.to_string(), "no");
    }
}
