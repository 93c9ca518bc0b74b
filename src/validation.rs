//! Validation helper functions for poll view tools
//!
//! This module turns raw tool parameters into domain values and maps domain
//! errors onto MCP errors.

use crate::error::PollViewError;
use crate::options::parse_time_zone;
use chrono_tz::Tz;
use mcp_attr::Result as McpResult;

/// Parse and validate a time zone parameter
///
/// # Arguments
/// * `time_zone` - IANA time zone name
///
/// # Returns
/// Result containing the parsed zone or an INVALID_PARAMS error
pub fn parse_time_zone_param(time_zone: &str) -> McpResult<Tz> {
    parse_time_zone(time_zone).map_err(invalid_params)
}

/// Trim an id parameter and reject empty ids
pub fn normalize_id(kind: &str, id: &str) -> McpResult<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS)
            .with_message(format!("{} id must not be empty", kind), true));
    }
    Ok(id.to_string())
}

/// Map a domain error onto an INVALID_PARAMS MCP error with a public message
pub fn invalid_params(error: PollViewError) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(error.to_string(), true)
}
