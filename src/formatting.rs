//! Text rendering of decoded poll options
//!
//! This module turns decoded options and the vote index into the text the MCP
//! tools return.

use crate::error::Result;
use crate::options::{DecodedOptions, ParsedTimeSlotOption};
use crate::poll::{ParticipantVotes, PollIndex, Vote};

/// Voter names listed before the rest are summarised as `+N`
const MAX_VOTERS_SHOWN: usize = 6;

/// Group time slots under their day heading (`Sat 1 Jun`)
///
/// Headings appear in the order their first slot appears; slots keep their
/// order within a heading.
pub fn group_by_day(options: &[ParsedTimeSlotOption]) -> Vec<(String, Vec<&ParsedTimeSlotOption>)> {
    let mut groups: Vec<(String, Vec<&ParsedTimeSlotOption>)> = Vec::new();
    for option in options {
        let heading = option.day_heading();
        match groups.iter_mut().find(|(h, _)| *h == heading) {
            Some((_, slots)) => slots.push(option),
            None => groups.push((heading, vec![option])),
        }
    }
    groups
}

/// Highest number of votes received by any option
pub fn high_score(decoded: &DecodedOptions, index: &PollIndex) -> usize {
    decoded
        .option_ids()
        .into_iter()
        .map(|id| index.votes_for_option(id).len())
        .max()
        .unwrap_or(0)
}

/// Voter names for a list of votes, with overflow folded into `+N`
pub fn format_voters(votes: &[Vote], index: &PollIndex) -> Result<String> {
    let shown = if votes.len() <= MAX_VOTERS_SHOWN {
        votes.len()
    } else {
        MAX_VOTERS_SHOWN - 1
    };

    let mut names = Vec::with_capacity(shown + 1);
    for vote in &votes[..shown] {
        names.push(index.participant_by_id(&vote.participant_id)?.participant.name.clone());
    }
    if votes.len() > shown {
        names.push(format!("+{}", votes.len() - shown));
    }
    Ok(names.join(", "))
}

fn format_vote_line(label: &str, option_id: &str, index: &PollIndex, best: usize) -> Result<String> {
    let votes = index.votes_for_option(option_id);
    let mut line = format!("- [{}] {}: {} vote(s)", option_id, label, votes.len());
    if !votes.is_empty() {
        line.push_str(&format!(" ({})", format_voters(votes, index)?));
    }
    if best > 0 && votes.len() == best {
        line.push_str(" *");
    }
    line.push('\n');
    Ok(line)
}

/// Render decoded options with their vote counts
///
/// Options with the highest vote count are marked with `*`.
pub fn format_options(decoded: &DecodedOptions, index: &PollIndex) -> Result<String> {
    let best = high_score(decoded, index);
    let mut result = format!(
        "Poll type: {} ({} option(s))\n",
        decoded.poll_type(),
        decoded.len()
    );

    match decoded {
        DecodedOptions::Date(options) => {
            result.push('\n');
            for option in options {
                let label = format!("{} {} {}", option.dow, option.day, option.month);
                result.push_str(&format_vote_line(&label, &option.option_id, index, best)?);
            }
        }
        DecodedOptions::TimeSlot(options) => {
            for (heading, slots) in group_by_day(options) {
                result.push_str(&format!("\n{}\n", heading));
                for slot in slots {
                    let label = format!("{} - {}", slot.start_time, slot.end_time);
                    result.push_str(&format_vote_line(&label, &slot.option_id, index, best)?);
                }
            }
        }
    }

    Ok(result)
}

/// Render the votes cast for one option
pub fn format_votes(option_id: &str, votes: &[Vote], index: &PollIndex) -> Result<String> {
    if votes.is_empty() {
        return Ok(format!("No votes for option {}", option_id));
    }

    let mut result = format!("Found {} vote(s) for option {}:\n", votes.len(), option_id);
    for vote in votes {
        let participant = index.participant_by_id(&vote.participant_id)?;
        result.push_str(&format!(
            "- [{}] {} ({})\n",
            vote.id, participant.participant.name, participant.participant.id
        ));
    }
    Ok(result)
}

/// Render a participant and the options they voted for
pub fn format_participant(participant: &ParticipantVotes) -> String {
    let mut result = format!(
        "{} (id: {})\n",
        participant.participant.name, participant.participant.id
    );
    if participant.votes.is_empty() {
        result.push_str("  No votes\n");
    } else {
        let options: Vec<&str> = participant
            .votes
            .iter()
            .map(|vote| vote.option_id.as_str())
            .collect();
        result.push_str(&format!("  Voted for: {}\n", options.join(", ")));
    }
    result
}
