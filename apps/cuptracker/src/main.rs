//! # cuptracker - World Cup prediction game companion
//!
//! ## Usage
//!
//! ```bash
//! # Login state and terms
//! cuptracker me
//! cuptracker terms accept
//!
//! # Verified participants
//! cuptracker users
//!
//! # Team progress, live or from a saved feed
//! cuptracker progress "USA" "Cote d'Ivoire"
//! cuptracker resolve -f stages.json
//!
//! # Stage vocabulary
//! cuptracker normalize QF "Semi Final"
//! ```

use clap::Parser;
use cuptracker::{cli, render};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Initialize tracing. CUPTRACKER_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr; stdout carries rendered output.
    let log_format = std::env::var("CUPTRACKER_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli::default_log_filter(cli.verbose).into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        eprintln!("{}", render::render_fallback(&e));
        std::process::exit(1);
    }
}

/// Print the cuptracker banner.
fn print_banner() {
    println!("cuptracker v{} - World Cup prediction game\n", env!("CARGO_PKG_VERSION"));
}
