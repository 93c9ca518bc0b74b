//! Time zone handlers for the poll view server

use crate::PollViewHandler;
use crate::validation;
use log::info;
use mcp_attr::Result as McpResult;

impl PollViewHandler {
    /// Reports the viewer's target zone and the zone the poll was authored in.
    pub async fn handle_time_zone(&self) -> McpResult<String> {
        let target = self.target_time_zone();
        let source = match self.source_time_zone {
            Some(tz) => tz.name().to_string(),
            None => "none (times are shown as written)".to_string(),
        };
        Ok(format!(
            "Target time zone: {}\nPoll time zone: {}",
            target.name(),
            source
        ))
    }

    /// Replaces the viewer's target zone; later option listings use the new zone.
    pub async fn handle_set_time_zone(&self, time_zone: String) -> McpResult<String> {
        let zone = validation::parse_time_zone_param(&time_zone)?;
        let mut target = self.lock_target();
        let previous = *target;
        *target = zone;
        drop(target);

        info!("Target time zone changed from {} to {}", previous.name(), zone.name());
        Ok(format!("Target time zone set to {}", zone.name()))
    }
}
