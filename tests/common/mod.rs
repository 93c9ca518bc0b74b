//! Common test utilities for integration tests

#![allow(dead_code)]

use poll_view::{Participant, Poll, PollOption, Vote};
use std::io::Write;
use tempfile::NamedTempFile;

/// Create a poll with the given option values and no participants
pub fn create_test_poll(time_zone: Option<&str>, values: &[&str]) -> Poll {
    Poll {
        id: "test-poll".to_string(),
        title: "Test poll".to_string(),
        time_zone: time_zone.map(str::to_string),
        options: values
            .iter()
            .enumerate()
            .map(|(i, value)| PollOption::new(format!("opt-{}", i + 1), *value))
            .collect(),
        participants: Vec::new(),
        votes: Vec::new(),
    }
}

pub fn participant(id: &str, name: &str) -> Participant {
    Participant {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn vote(id: &str, participant_id: &str, option_id: &str) -> Vote {
    Vote {
        id: id.to_string(),
        participant_id: participant_id.to_string(),
        option_id: option_id.to_string(),
    }
}

/// Write a poll snapshot to a temporary TOML file
pub fn write_snapshot(poll: &Poll) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    let content = toml::to_string_pretty(poll).unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file
}
