//! CLI module for the account service
//!
//! A single `serve` subcommand runs the HTTP server; it is also the
//! default when no subcommand is given.

pub mod serve;

use clap::{Parser, Subcommand};

/// User account service - registration, login and profile lookup
#[derive(Parser)]
#[command(name = "account-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
