//! Poll option decoding and time zone projection
//!
//! - `codec`: Detects the poll type and decodes stored option values
//! - `projector`: Moves wall-clock times from the poll's zone to the viewer's
//! - `draft`: Options as entered while creating a poll, and their encoding

mod codec;
mod draft;
mod projector;

pub use codec::{
    DecodedOptions, ParsedDateOption, ParsedOption, ParsedTimeSlotOption, PollType,
    decode_option, decode_options, decode_options_in, is_time_slot, parse_option_date,
};
pub use draft::{
    DateTimeOption, TimeSlot, encode_date_option, expect_time_option, remove_all_options_for_day,
};
pub use projector::{
    DateProps, clock_time, date_props, parse_local_datetime, parse_time_zone, project,
    resolve_in_zone,
};
