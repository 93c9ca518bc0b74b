//! Error types for poll option decoding and vote lookups

use thiserror::Error;

/// Errors raised by the option codec, the time zone projector and the vote index
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollViewError {
    /// A poll was decoded without any options
    #[error("Poll has no options to decode")]
    EmptyOptionSet,

    /// A participant id was not found in the poll snapshot
    #[error("Could not find participant with id: {0}")]
    ParticipantNotFound(String),

    /// A time zone name is not a known IANA identifier
    #[error("Invalid time zone '{0}'. Use an IANA name (e.g., 'Europe/London')")]
    InvalidTimeZone(String),

    /// An option value is neither an ISO date nor a start/end datetime pair
    #[error("Invalid option value '{0}'")]
    InvalidOptionValue(String),

    /// An option does not use the same encoding as the first option of its poll
    #[error("Option '{option_id}' does not match the encoding of the first option")]
    MixedEncoding { option_id: String },
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, PollViewError>;
