//! # Backend Records
//!
//! JSON shapes returned by the prediction-game backend.

use serde::{Deserialize, Serialize};

// =============================================================================
// LOGIN STATE
// =============================================================================

/// `GET /api/me` - who the session token belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Discord ids arrive as numbers from some endpoints and strings from others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

// =============================================================================
// VERIFIED USERS
// =============================================================================

/// One row of `GET /api/verified-users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedUser {
    #[serde(alias = "name")]
    pub display_name: String,
    pub id: UserId,
    #[serde(default, alias = "discord")]
    pub discord_username: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
}

// =============================================================================
// TERMS OF SERVICE
// =============================================================================

/// `GET /api/terms/status` and `POST /api/terms/accept`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsStatus {
    #[serde(default)]
    pub accepted: bool,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub accepted_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_accepts_number_and_string() {
        let rows: Vec<VerifiedUser> = serde_json::from_str(
            r#"[
                {"display_name": "Ana", "id": 101, "discord_username": "ana#1", "ip": "10.0.0.1"},
                {"name": "Ben", "id": "220000000000000001", "discord": "ben"}
            ]"#,
        )
        .expect("parse");

        assert_eq!(rows[0].id, UserId::Number(101));
        assert_eq!(rows[1].id.to_string(), "220000000000000001");
        assert_eq!(rows[1].display_name, "Ben");
        assert_eq!(rows[1].discord_username.as_deref(), Some("ben"));
        assert_eq!(rows[1].ip, None);
    }

    #[test]
    fn logged_out_user() {
        let user: UserInfo = serde_json::from_str(r#"{"logged_in": false}"#).expect("parse");
        assert_eq!(user, UserInfo::default());
    }
}
