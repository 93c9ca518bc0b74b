//! Options handler for the poll view server

use crate::PollViewHandler;
use crate::formatting;
use crate::options::decode_options_in;
use crate::validation;
use log::warn;
use mcp_attr::Result as McpResult;

impl PollViewHandler {
    /// Decodes the poll's options in the current target zone and renders them with vote counts.
    pub async fn handle_options(&self) -> McpResult<String> {
        let target = self.target_time_zone();
        let decoded = decode_options_in(&self.poll.options, self.source_time_zone.as_ref(), &target)
            .map_err(|e| {
                warn!("Failed to decode options of poll '{}': {}", self.poll.id, e);
                validation::invalid_params(e)
            })?;

        let body = formatting::format_options(&decoded, &self.index).map_err(|e| {
            warn!("Failed to render options of poll '{}': {}", self.poll.id, e);
            validation::invalid_params(e)
        })?;

        Ok(format!(
            "{}\nShown in time zone: {}\n{}",
            self.poll.title,
            target.name(),
            body
        ))
    }
}
