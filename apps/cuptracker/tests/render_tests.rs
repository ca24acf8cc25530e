//! Unit tests for text rendering and offline commands.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use cuptracker::AppError;
use cuptracker::cli::{collect_progress, load_stage_file};
use cuptracker::render::{
    PLACEHOLDER, render_fallback, render_labels, render_progress, render_stage_order,
    render_terms, render_user, render_users,
};
use cuptracker::types::{TermsStatus, UserId, UserInfo, VerifiedUser};
use cuptracker_core::StageMap;
use std::io::Write;

// =============================================================================
// PROGRESS RENDERING
// =============================================================================

#[test]
fn test_progress_known_and_unknown_teams() {
    let stages: StageMap = [("Korea Republic", "SF"), ("Brazil", "Round of 8")]
        .into_iter()
        .collect();
    let rows = collect_progress(
        &stages,
        &["South Korea".to_string(), "Brazil".to_string(), "Wales".to_string()],
    );

    let text = render_progress(&rows);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Team"));
    assert!(lines[1].contains("Semi-finals"));
    assert!(lines[1].ends_with(" 70%"));
    // Unrecognized label is shown as-is, without a bar
    assert!(lines[2].contains("Round of 8"));
    assert!(lines[2].ends_with(PLACEHOLDER));
    // Unknown team renders placeholders, not an error
    assert!(lines[3].starts_with("Wales"));
    assert_eq!(lines[3].matches(PLACEHOLDER).count(), 2);
}

#[test]
fn test_progress_defaults_to_every_team_in_order() {
    let stages: StageMap = [("Spain", "Final"), ("Portugal", "QF")]
        .into_iter()
        .collect();

    let rows = collect_progress(&stages, &[]);

    let teams: Vec<_> = rows.iter().map(|r| r.team.as_str()).collect();
    assert_eq!(teams, vec!["Spain", "Portugal"]);
    assert_eq!(rows[1].progress, Some(55));
}

#[test]
fn test_progress_empty() {
    assert_eq!(render_progress(&[]), "No stage data available yet.");
}

#[test]
fn test_stage_order_lists_all_stages() {
    let text = render_stage_order();
    assert_eq!(text.lines().count(), 10);
    assert!(text.contains("Third Place Play-off"));
    assert!(text.contains("(side branch)"));
    assert!(text.lines().last().unwrap().contains("100%"));
}

#[test]
fn test_labels() {
    let rows = vec![
        ("QF".to_string(), "Quarter-finals".to_string(), Some(55)),
        ("Round of 8".to_string(), "Round of 8".to_string(), None),
        ("  ".to_string(), String::new(), None),
    ];
    let text = render_labels(&rows);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "\"QF\" → Quarter-finals (55%)");
    assert!(lines[1].ends_with("(not a canonical stage)"));
    assert!(lines[2].contains(PLACEHOLDER));
}

// =============================================================================
// USER & TERMS RENDERING
// =============================================================================

#[test]
fn test_user_states() {
    assert_eq!(render_user(&UserInfo::default()), "Not logged in.");

    let user = UserInfo {
        logged_in: true,
        username: Some("ana".to_string()),
        user_id: Some(UserId::Number(42)),
        avatar_url: None,
    };
    assert_eq!(render_user(&user), "Logged in as ana (id 42)");
}

#[test]
fn test_users_table_alignment() {
    let users = vec![
        VerifiedUser {
            display_name: "Zoë".to_string(),
            id: UserId::Number(1),
            discord_username: Some("zoe".to_string()),
            ip: Some("192.168.0.10".to_string()),
        },
        VerifiedUser {
            display_name: "Maximilian".to_string(),
            id: UserId::Text("220000000000000001".to_string()),
            discord_username: None,
            ip: None,
        },
    ];

    let text = render_users(&users);
    let lines: Vec<&str> = text.lines().collect();

    // Columns line up: "ID" starts at the same char offset in every row.
    let id_col = lines[0].chars().position(|c| c == 'I').unwrap();
    assert_eq!(lines[1].chars().nth(id_col), Some('1'));
    assert_eq!(lines[2].chars().nth(id_col), Some('2'));
    assert!(lines[2].contains(PLACEHOLDER));
    assert!(text.ends_with("2 verified user(s)\n"));
}

#[test]
fn test_users_empty() {
    assert_eq!(render_users(&[]), "No verified users yet.");
}

#[test]
fn test_terms() {
    assert!(render_terms(&TermsStatus::default()).contains("not accepted"));

    let accepted = TermsStatus {
        accepted: true,
        version: Some("2026-05".to_string()),
        accepted_at: None,
    };
    assert_eq!(
        render_terms(&accepted),
        "Terms of service accepted (version 2026-05)."
    );
}

#[test]
fn test_fallback_message() {
    let text = render_fallback(&AppError::Unauthorized);
    assert!(text.starts_with("You are not logged in."));
}

// =============================================================================
// LOCAL STAGE FILES
// =============================================================================

#[test]
fn test_load_stage_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"Mexico": "Group", "Canada": "Out"}}"#).unwrap();

    let stages = load_stage_file(file.path()).unwrap();

    let rows = collect_progress(&stages, &[]);
    assert_eq!(rows[0].stage.as_deref(), Some("Group Stage"));
    assert_eq!(rows[1].progress, Some(0));
}

#[test]
fn test_load_stage_file_rejects_bad_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let err = load_stage_file(file.path()).unwrap_err();
    assert!(matches!(err, AppError::Parse(_)));
}

#[test]
fn test_load_stage_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_stage_file(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}
