//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::TermsAction;
use crate::client::BackendClient;
use crate::config::Config;
use crate::error::AppError;
use crate::render;
use cuptracker_core::{
    Stage, StageMap, TeamProgress, normalize_stage, stage_progress, team_progress,
};
use std::path::Path;

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum size of a local team-stages file (10 MB).
const MAX_FEED_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), AppError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| AppError::Io(format!("Cannot read '{}': {}", path.display(), e)))?;

    if !metadata.is_file() {
        return Err(AppError::Io(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }
    if metadata.len() > max_size {
        return Err(AppError::Io(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Load a team-stages mapping from a JSON file.
pub fn load_stage_file(path: &Path) -> Result<StageMap, AppError> {
    validate_file_size(path, MAX_FEED_FILE_SIZE)?;
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| AppError::Parse(format!("'{}': {}", path.display(), e)))
}

// =============================================================================
// CONNECTION
// =============================================================================

/// Resolve configuration and build the backend client.
pub fn connect(
    config_path: Option<&Path>,
    url: Option<String>,
) -> Result<BackendClient, AppError> {
    let config = Config::load_with_url(config_path, |key| std::env::var(key).ok(), url)?;
    tracing::info!(
        backend = %config.base_url,
        authenticated = config.token.is_some(),
        "using backend"
    );
    BackendClient::new(&config)
}

fn print_json(value: &impl serde::Serialize) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| AppError::Parse(e.to_string()))?;
    println!("{text}");
    Ok(())
}

// =============================================================================
// SESSION COMMANDS
// =============================================================================

/// Show login state.
pub async fn cmd_me(client: &BackendClient, json_mode: bool) -> Result<(), AppError> {
    let user = client.me().await?;
    if json_mode {
        print_json(&user)?;
    } else {
        println!("{}", render::render_user(&user));
    }
    Ok(())
}

/// End the session.
pub async fn cmd_logout(client: &BackendClient, json_mode: bool) -> Result<(), AppError> {
    client.logout().await?;
    tracing::info!(backend = client.base_url(), "logged out");
    if json_mode {
        print_json(&serde_json::json!({ "logged_out": true }))?;
    } else {
        println!("Logged out.");
    }
    Ok(())
}

// =============================================================================
// USERS COMMAND
// =============================================================================

/// List verified users.
pub async fn cmd_users(client: &BackendClient, json_mode: bool) -> Result<(), AppError> {
    let users = client.verified_users().await?;
    if json_mode {
        print_json(&users)?;
    } else {
        print!("{}", render::render_users(&users));
    }
    Ok(())
}

// =============================================================================
// TERMS COMMAND
// =============================================================================

/// Show or accept the terms of service.
pub async fn cmd_terms(
    client: &BackendClient,
    action: TermsAction,
    json_mode: bool,
) -> Result<(), AppError> {
    let terms = match action {
        TermsAction::Status => client.terms_status().await?,
        TermsAction::Accept => {
            let terms = client.accept_terms().await?;
            tracing::info!(accepted = terms.accepted, "terms acceptance submitted");
            terms
        }
    };

    if json_mode {
        print_json(&terms)?;
    } else {
        println!("{}", render::render_terms(&terms));
    }
    Ok(())
}

// =============================================================================
// PROGRESS COMMANDS
// =============================================================================

/// Resolve `teams` against `stages`; every team in map order when empty.
pub fn collect_progress(stages: &StageMap, teams: &[String]) -> Vec<TeamProgress> {
    if teams.is_empty() {
        stages.teams().map(|team| team_progress(stages, team)).collect()
    } else {
        teams.iter().map(|team| team_progress(stages, team)).collect()
    }
}

fn show_progress(rows: &[TeamProgress], json_mode: bool) -> Result<(), AppError> {
    let unknown = rows.iter().filter(|row| !row.is_known()).count();
    if unknown > 0 {
        tracing::debug!(unknown, "teams without a known stage");
    }

    if json_mode {
        print_json(&rows)?;
    } else {
        print!("{}", render::render_progress(rows));
    }
    Ok(())
}

/// Show team progress from the live stage feed.
pub async fn cmd_progress(
    client: &BackendClient,
    teams: &[String],
    json_mode: bool,
) -> Result<(), AppError> {
    let stages = client.team_stages().await?;
    show_progress(&collect_progress(&stages, teams), json_mode)
}

/// Show team progress from a local file.
pub fn cmd_resolve(file: &Path, teams: &[String], json_mode: bool) -> Result<(), AppError> {
    let stages = load_stage_file(file)?;
    show_progress(&collect_progress(&stages, teams), json_mode)
}

// =============================================================================
// STAGE VOCABULARY COMMANDS
// =============================================================================

/// Normalize labels and show their progress.
pub fn cmd_normalize(labels: &[String], json_mode: bool) -> Result<(), AppError> {
    let rows: Vec<(String, String, Option<u8>)> = labels
        .iter()
        .map(|label| {
            let normalized = normalize_stage(label.as_str());
            let progress = stage_progress(&normalized);
            (label.clone(), normalized, progress)
        })
        .collect();

    if json_mode {
        let output: Vec<_> = rows
            .iter()
            .map(|(label, stage, progress)| {
                serde_json::json!({
                    "label": label,
                    "stage": stage,
                    "canonical": progress.is_some(),
                    "progress": progress,
                })
            })
            .collect();
        print_json(&output)?;
    } else {
        print!("{}", render::render_labels(&rows));
    }
    Ok(())
}

/// List canonical stages.
pub fn cmd_stages(json_mode: bool) -> Result<(), AppError> {
    if json_mode {
        let output: Vec<_> = Stage::ALL
            .iter()
            .map(|stage| {
                serde_json::json!({
                    "stage": stage,
                    "progress": stage.progress(),
                    "side_branch": stage.is_side_branch(),
                })
            })
            .collect();
        print_json(&output)?;
    } else {
        print!("{}", render::render_stage_order());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn print_json_reports_serialization_errors() {
        // JSON object keys must be strings.
        let value: BTreeMap<(u8, u8), u8> = [((1, 2), 3)].into_iter().collect();
        assert!(matches!(print_json(&value), Err(AppError::Parse(_))));
    }

    #[test]
    fn print_json_ok() {
        assert!(print_json(&serde_json::json!({ "ok": true })).is_ok());
    }
}
