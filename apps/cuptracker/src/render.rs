//! # Text Rendering
//!
//! Turns backend records and resolver output into terminal text. Every
//! function returns a `String`; printing is left to the commands.

use crate::error::AppError;
use crate::types::{TermsStatus, UserInfo, VerifiedUser};
use cuptracker_core::{Stage, TeamProgress};

/// Shown wherever a value is unknown.
pub const PLACEHOLDER: &str = "—";

/// Width of the progress bar, in cells.
pub const BAR_WIDTH: usize = 20;

// =============================================================================
// PROGRESS
// =============================================================================

/// Render a percentage as a fixed-width bar, e.g. `[#####---------------]`.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = usize::from(percent.min(100));
    let filled = percent.saturating_mul(width) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    )
}

/// Render one line per team: name, stage, bar, percentage.
pub fn render_progress(rows: &[TeamProgress]) -> String {
    if rows.is_empty() {
        return "No stage data available yet.".to_string();
    }

    let team_width = column_width("Team", rows.iter().map(|r| r.team.as_str()));
    let stage_width = column_width(
        "Stage",
        rows.iter()
            .map(|r| r.stage.as_deref().unwrap_or(PLACEHOLDER)),
    );

    let mut out = format!("{:<team_width$}  {:<stage_width$}  Progress\n", "Team", "Stage");
    for row in rows {
        let stage = row.stage.as_deref().unwrap_or(PLACEHOLDER);
        let progress = match row.progress {
            Some(p) => format!("{} {:>3}%", progress_bar(p, BAR_WIDTH), p),
            None => PLACEHOLDER.to_string(),
        };
        out.push_str(&format!(
            "{:<team_width$}  {:<stage_width$}  {}\n",
            row.team, stage, progress
        ));
    }
    out
}

/// Render the canonical stage order with progress values.
pub fn render_stage_order() -> String {
    let width = column_width("Stage", Stage::ALL.iter().map(|s| s.name()));
    let mut out = format!("{:<width$}  Progress\n", "Stage");
    for stage in Stage::ALL {
        let note = if stage.is_side_branch() {
            "  (side branch)"
        } else {
            ""
        };
        out.push_str(&format!(
            "{:<width$}  {:>3}%{}\n",
            stage.name(),
            stage.progress(),
            note
        ));
    }
    out
}

/// Render `label → canonical stage (progress)` lines.
pub fn render_labels(rows: &[(String, String, Option<u8>)]) -> String {
    let mut out = String::new();
    for (label, normalized, progress) in rows {
        let shown = if normalized.is_empty() {
            PLACEHOLDER
        } else {
            normalized.as_str()
        };
        match progress {
            Some(p) => out.push_str(&format!("{label:?} → {shown} ({p}%)\n")),
            None => out.push_str(&format!("{label:?} → {shown} (not a canonical stage)\n")),
        }
    }
    out
}

// =============================================================================
// USERS
// =============================================================================

/// Render the login state.
pub fn render_user(user: &UserInfo) -> String {
    if !user.logged_in {
        return "Not logged in.".to_string();
    }
    let name = user.username.as_deref().unwrap_or(PLACEHOLDER);
    match &user.user_id {
        Some(id) => format!("Logged in as {name} (id {id})"),
        None => format!("Logged in as {name}"),
    }
}

/// Render the verified-users table.
pub fn render_users(users: &[VerifiedUser]) -> String {
    if users.is_empty() {
        return "No verified users yet.".to_string();
    }

    let ids: Vec<String> = users.iter().map(|u| u.id.to_string()).collect();
    let name_width = column_width("Name", users.iter().map(|u| u.display_name.as_str()));
    let id_width = column_width("ID", ids.iter().map(String::as_str));
    let discord_width = column_width(
        "Discord",
        users
            .iter()
            .map(|u| u.discord_username.as_deref().unwrap_or(PLACEHOLDER)),
    );

    let mut out = format!(
        "{:<name_width$}  {:<id_width$}  {:<discord_width$}  IP\n",
        "Name", "ID", "Discord"
    );
    for (user, id) in users.iter().zip(&ids) {
        out.push_str(&format!(
            "{:<name_width$}  {:<id_width$}  {:<discord_width$}  {}\n",
            user.display_name,
            id,
            user.discord_username.as_deref().unwrap_or(PLACEHOLDER),
            user.ip.as_deref().unwrap_or(PLACEHOLDER),
        ));
    }
    out.push_str(&format!("\n{} verified user(s)\n", users.len()));
    out
}

// =============================================================================
// TERMS
// =============================================================================

/// Render the terms-of-service state.
pub fn render_terms(terms: &TermsStatus) -> String {
    if !terms.accepted {
        return "Terms of service not accepted. Run `cuptracker terms accept` to accept them."
            .to_string();
    }
    let mut out = "Terms of service accepted".to_string();
    if let Some(version) = &terms.version {
        out.push_str(&format!(" (version {version})"));
    }
    if let Some(at) = &terms.accepted_at {
        out.push_str(&format!(" on {at}"));
    }
    out.push('.');
    out
}

// =============================================================================
// ERRORS
// =============================================================================

/// Render the user-facing replacement for data that failed to load.
pub fn render_fallback(error: &AppError) -> String {
    format!("{} ({})", error.fallback_message(), error)
}

/// Widest cell of a column, header included, in characters.
fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|c| c.chars().count())
        .fold(header.chars().count(), usize::max)
}
