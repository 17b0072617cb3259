//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod cases;
pub mod context;
pub mod dashboard;
pub mod forms;
pub mod login;
pub mod logout;
pub mod notifications;
pub mod status;

pub use args::OutputFormat;
pub use context::CommandContext;

/// c2c - terminal client for the Care2Connect foster-care case system
#[derive(Parser, Debug)]
#[command(name = "c2c")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "C2C_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "C2C_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override session file location
    #[arg(long, global = true, env = "C2C_SESSION", hide_env = true)]
    pub session: Option<String>,

    /// Backend base URL
    #[arg(long, global = true, env = "C2C_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "C2C_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        /// Username (prompted when omitted)
        username: Option<String>,

        /// Read the password from stdin instead of prompting
        #[arg(long)]
        password_stdin: bool,
    },

    /// Clear the stored session
    Logout,

    /// Show session and configuration status
    Status,

    /// Open the role dashboard
    Dashboard {
        /// Print the dashboard once instead of running interactively
        #[arg(long)]
        once: bool,
    },

    /// List assigned cases
    Cases {
        /// Filter by child name (substring match, case-insensitive)
        #[arg(long, short = 'f')]
        filter: Option<String>,
    },

    /// Show upcoming and overdue health appointments
    Notifications,

    /// Display version information
    Version,
}
