//! MCP tool handlers for the poll view server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod options;
pub mod time_zone;
pub mod votes;
