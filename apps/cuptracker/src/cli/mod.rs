//! # cuptracker CLI Module
//!
//! ## Available Commands
//!
//! - `me` - Show login state (default)
//! - `logout` - End the session
//! - `users` - List verified users
//! - `terms status` / `terms accept` - Terms-of-service flow
//! - `progress` - Tournament progress of teams, live from the backend
//! - `resolve` - Same as `progress`, from a local JSON file
//! - `normalize` - Canonical stage for free-form labels
//! - `stages` - Canonical stage order

mod commands;

use crate::error::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// cuptracker - World Cup prediction game companion
///
/// Shows login state, verified participants, terms of service and team
/// progress from the prediction-game backend.
#[derive(Parser, Debug)]
#[command(name = "cuptracker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML config file (default: ./cuptracker.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides config and CUPTRACKER_URL
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Output in JSON format (for programmatic access)
    #[arg(long = "json", global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show who is logged in
    Me,

    /// End the current session
    Logout,

    /// List verified users
    Users,

    /// Terms-of-service status and acceptance
    Terms {
        #[command(subcommand)]
        action: TermsAction,
    },

    /// Show tournament progress, live from the backend
    Progress {
        /// Teams to show (default: every team, in backend order)
        teams: Vec<String>,
    },

    /// Show tournament progress from a local team-stages JSON file
    Resolve {
        /// Path to a JSON object mapping team names to stage labels
        #[arg(short, long)]
        file: PathBuf,

        /// Teams to show (default: every team in the file)
        teams: Vec<String>,
    },

    /// Normalize free-form stage labels
    Normalize {
        /// Labels such as "QF" or "Semi Final"
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// List canonical stages and their progress values
    Stages,
}

/// Terms-of-service actions.
#[derive(Subcommand, Debug)]
pub enum TermsAction {
    /// Show whether the terms were accepted
    Status,
    /// Accept the terms
    Accept,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "cuptracker=debug"
    } else {
        "cuptracker=info"
    }
}

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), AppError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Normalize { labels }) => cmd_normalize(&labels, json_mode),
        Some(Commands::Stages) => cmd_stages(json_mode),
        Some(Commands::Resolve { file, teams }) => cmd_resolve(&file, &teams, json_mode),
        command => {
            let client = connect(cli.config.as_deref(), cli.url)?;
            match command {
                Some(Commands::Logout) => cmd_logout(&client, json_mode).await,
                Some(Commands::Users) => cmd_users(&client, json_mode).await,
                Some(Commands::Terms { action }) => cmd_terms(&client, action, json_mode).await,
                Some(Commands::Progress { teams }) => {
                    cmd_progress(&client, &teams, json_mode).await
                }
                // No subcommand - show login state by default
                _ => cmd_me(&client, json_mode).await,
            }
        }
    }
}
