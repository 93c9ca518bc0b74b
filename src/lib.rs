//! Poll View MCP Server Library
//!
//! This library renders the options of a scheduling poll for one viewer. Poll
//! options are stored either as plain dates or as time slots written in the
//! organizer's time zone; the library decodes them into display fields in the
//! viewer's own time zone and answers vote lookups over the poll snapshot.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `PollViewHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `options` and `poll` modules - Option decoding, time zone
//!   projection and vote lookups
//! - **Input Layer**: `storage` module - Reads poll snapshots from TOML files
//!
//! # Example
//!
//! ```no_run
//! use poll_view::PollViewHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = PollViewHandler::new("poll.toml", "Asia/Tokyo")?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod formatting;
mod handlers;
pub mod options;
pub mod poll;
mod storage;
pub mod validation;

use anyhow::Result;
use chrono_tz::Tz;
use log::info;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Mutex, MutexGuard};

// Re-export commonly used types
pub use error::PollViewError;
pub use options::{DecodedOptions, ParsedDateOption, ParsedTimeSlotOption, PollType, decode_options};
pub use poll::{Participant, Poll, PollIndex, PollOption, Vote, VoteType};
pub use storage::Storage;

/// MCP Server handler for viewing a scheduling poll
///
/// Holds one poll snapshot, the vote index built from it, and the viewer's
/// target time zone. The snapshot is read-only; only the target zone changes.
pub struct PollViewHandler {
    pub(crate) poll: Poll,
    pub(crate) index: PollIndex,
    pub(crate) source_time_zone: Option<Tz>,
    pub(crate) target_time_zone: Mutex<Tz>,
}

impl PollViewHandler {
    /// Create a new handler from a poll snapshot file
    ///
    /// # Arguments
    /// * `storage_path` - Path to the poll snapshot (TOML format)
    /// * `target_time_zone` - IANA name of the viewer's time zone
    ///
    /// # Returns
    /// Result containing the handler or an error
    pub fn new(storage_path: &str, target_time_zone: &str) -> Result<Self> {
        let poll = Storage::new(storage_path).load()?;
        let target = options::parse_time_zone(target_time_zone)?;
        Self::from_poll(poll, target)
    }

    /// Create a handler for an already loaded poll snapshot
    ///
    /// Fails when the poll names a time zone that does not exist.
    pub fn from_poll(poll: Poll, target_time_zone: Tz) -> Result<Self> {
        let source_time_zone = match poll.time_zone.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Some(options::parse_time_zone(name)?),
            _ => None,
        };
        let index = PollIndex::new(&poll);
        info!(
            "Serving poll '{}' in {} (authored in {})",
            poll.id,
            target_time_zone.name(),
            source_time_zone.map(|tz| tz.name()).unwrap_or("floating time")
        );

        Ok(Self {
            poll,
            index,
            source_time_zone,
            target_time_zone: Mutex::new(target_time_zone),
        })
    }

    /// The poll snapshot being served
    pub fn poll(&self) -> &Poll {
        &self.poll
    }

    /// The viewer's current target time zone
    pub fn target_time_zone(&self) -> Tz {
        *self.lock_target()
    }

    /// Lock the target zone; a poisoned lock still holds a valid `Tz`
    pub(crate) fn lock_target(&self) -> MutexGuard<'_, Tz> {
        self.target_time_zone
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Scheduling poll viewer.
///
/// A poll offers either whole days or time slots to vote on. Time slots are written in the
/// organizer's time zone and are shown here in the viewer's target time zone.
///
/// Key concepts:
/// - **option**: one selectable date or time slot, identified by its option ID
/// - **participant**: someone who answered the poll, identified by participant ID
/// - **vote**: a participant's "yes" on an option; no vote means "no"
/// - **target time zone**: IANA zone options are displayed in (e.g., "Asia/Tokyo")
#[mcp_server]
impl McpServer for PollViewHandler {
    /// **Options**: List the poll's options in the target time zone, grouped by day, with vote counts.
    /// Options with the most votes are marked with `*`.
    #[tool]
    async fn options(&self) -> McpResult<String> {
        self.handle_options().await
    }

    /// **Time zone**: Show the current target time zone and the zone the poll was authored in.
    #[tool]
    async fn time_zone(&self) -> McpResult<String> {
        self.handle_time_zone().await
    }

    /// **Set time zone**: Change the target time zone used to display options.
    #[tool]
    async fn set_time_zone(
        &self,
        /// IANA time zone name (e.g., "Europe/London", "America/New_York")
        time_zone: String,
    ) -> McpResult<String> {
        self.handle_set_time_zone(time_zone).await
    }

    /// **Votes for option**: List who voted for an option. Unknown options have no votes.
    #[tool]
    async fn votes_for_option(
        &self,
        /// Option ID
        option_id: String,
    ) -> McpResult<String> {
        self.handle_votes_for_option(option_id).await
    }

    /// **Vote**: Answer "yes" or "no" for a participant and option.
    #[tool]
    async fn vote(
        &self,
        /// Participant ID
        participant_id: String,
        /// Option ID
        option_id: String,
    ) -> McpResult<String> {
        self.handle_vote(participant_id, option_id).await
    }

    /// **Participant**: Show a participant and the options they voted for.
    #[tool]
    async fn participant(
        &self,
        /// Participant ID
        participant_id: String,
    ) -> McpResult<String> {
        self.handle_participant(participant_id).await
    }
}
