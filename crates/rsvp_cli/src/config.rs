//! Command-line and environment configuration.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

const DEFAULT_DB_FILE_NAME: &str = "rsvp.sqlite3";

#[derive(Debug, Parser)]
#[command(name = "rsvp", version, about = "Create events, invite users and track attendance")]
pub struct Cli {
    /// SQLite database file.
    #[arg(long, env = "RSVP_DB_PATH", default_value = DEFAULT_DB_FILE_NAME)]
    pub db: PathBuf,

    /// Log level: trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, env = "RSVP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "RSVP_LOG_DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints core linkage info.
    Ping,
    /// Creates a user.
    AddUser { name: String },
    /// Creates an event owned by an existing user.
    AddEvent {
        #[arg(long)]
        owner: Uuid,
        #[arg(long, default_value = "")]
        description: String,
        /// Calendar date as YYYY-MM-DD.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Invites a user to an event.
    Invite {
        #[arg(long)]
        inviter: Uuid,
        #[arg(long)]
        invitee: Uuid,
        #[arg(long)]
        event: Uuid,
    },
    /// Marks a user as attending an event.
    Attend {
        #[arg(long)]
        user: Uuid,
        #[arg(long)]
        event: Uuid,
    },
    /// Shows a user's events and attended-event partitions.
    ShowUser { id: Uuid },
    /// Shows an event with its invitees and attendees.
    ShowEvent { id: Uuid },
}

impl Cli {
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(rsvp_core::default_log_level())
    }
}
