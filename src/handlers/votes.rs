//! Vote and participant lookup handlers for the poll view server

use crate::PollViewHandler;
use crate::formatting;
use crate::validation;
use log::warn;
use mcp_attr::Result as McpResult;

impl PollViewHandler {
    /// Lists the votes for an option. Unknown options simply have no votes.
    pub async fn handle_votes_for_option(&self, option_id: String) -> McpResult<String> {
        let option_id = validation::normalize_id("Option", &option_id)?;
        let votes = self.index.votes_for_option(&option_id);
        formatting::format_votes(&option_id, votes, &self.index).map_err(validation::invalid_params)
    }

    /// Answers "yes" or "no" for a participant and option.
    pub async fn handle_vote(&self, participant_id: String, option_id: String) -> McpResult<String> {
        let participant_id = validation::normalize_id("Participant", &participant_id)?;
        let option_id = validation::normalize_id("Option", &option_id)?;
        match self.index.vote(&participant_id, &option_id) {
            Ok(vote) => Ok(vote.to_string()),
            Err(e) => {
                warn!("Vote lookup failed: {}", e);
                Err(validation::invalid_params(e))
            }
        }
    }

    /// Shows a participant and the options they voted for.
    pub async fn handle_participant(&self, participant_id: String) -> McpResult<String> {
        let participant_id = validation::normalize_id("Participant", &participant_id)?;
        match self.index.participant_by_id(&participant_id) {
            Ok(participant) => Ok(formatting::format_participant(participant)),
            Err(e) => {
                warn!("Participant lookup failed: {}", e);
                Err(validation::invalid_params(e))
            }
        }
    }
}
