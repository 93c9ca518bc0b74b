//! Poll View MCP Server - Main Entry Point
//!
//! This is the main entry point for the poll view server application.
//! The actual implementation is in the `poll_view` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use poll_view::PollViewHandler;

/// Poll View MCP Server - scheduling poll options in your own time zone via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the poll snapshot file (TOML)
    file: String,

    /// Time zone to display options in (IANA name)
    #[arg(long, env = "POLL_VIEW_TIME_ZONE", default_value = "UTC")]
    time_zone: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    // Logs go to stderr; stdout carries the MCP stream
    env_logger::init();

    let args = Args::parse();
    let handler = PollViewHandler::new(&args.file, &args.time_zone)?;
    serve_stdio(handler).await?;
    Ok(())
}
