//! # Team Aliases
//!
//! Maps spellings people actually type to the team key used by the stage
//! feed. A target is expected, but never assumed, to appear in the feed.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Common team-name variants and the feed key each one stands for.
pub static TEAM_ALIASES: &[(&str, &str)] = &[
    ("USA", "United States"),
    ("US", "United States"),
    ("United States of America", "United States"),
    ("England FA", "England"),
    ("Holland", "Netherlands"),
    ("The Netherlands", "Netherlands"),
    ("Cote d'Ivoire", "Ivory Coast"),
    ("Côte d'Ivoire", "Ivory Coast"),
    ("Côte d\u{2019}Ivoire", "Ivory Coast"),
    ("South Korea", "Korea Republic"),
    ("Korea", "Korea Republic"),
    ("Republic of Korea", "Korea Republic"),
    ("North Korea", "Korea DPR"),
    ("Iran", "IR Iran"),
    ("Czech Republic", "Czechia"),
    ("Türkiye", "Turkey"),
    ("Turkiye", "Turkey"),
    ("Cape Verde", "Cabo Verde"),
    ("DR Congo", "Congo DR"),
    ("DRC", "Congo DR"),
    ("Bosnia", "Bosnia and Herzegovina"),
    ("Bosnia & Herzegovina", "Bosnia and Herzegovina"),
    ("UAE", "United Arab Emirates"),
    ("KSA", "Saudi Arabia"),
    ("Saudi", "Saudi Arabia"),
    ("Curacao", "Curaçao"),
    ("NZ", "New Zealand"),
    ("Aotearoa", "New Zealand"),
    ("Republic of Ireland", "Ireland"),
    ("Eire", "Ireland"),
];

static TEAM_ALIAS_INDEX: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| TEAM_ALIASES.iter().copied().collect());

/// Look up the feed key for a team-name variant (exact, case-sensitive).
#[must_use]
pub fn team_alias(name: &str) -> Option<&'static str> {
    TEAM_ALIAS_INDEX.get(name).copied()
}
