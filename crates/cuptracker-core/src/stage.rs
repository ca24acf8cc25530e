//! # Tournament Stages
//!
//! Canonical stage vocabulary, display progress, and the stage alias table.
//!
//! ## Stage Order
//!
//! | Stage | Progress |
//! |-------|----------|
//! | Eliminated | 0 |
//! | Group Stage | 10 |
//! | Round of 32 | 25 |
//! | Round of 16 | 40 |
//! | Quarter-finals | 55 |
//! | Semi-finals | 70 |
//! | Third Place Play-off | 75 |
//! | Final | 90 |
//! | Winner | 100 |
//!
//! The Third Place Play-off is a side branch reached from the Semi-finals.
//! It sits between Semi-finals and Final for display only; a team in the
//! play-off never advances to the Final.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

// =============================================================================
// STAGE ENUM
// =============================================================================

/// A canonical tournament stage.
///
/// `Ord` follows tournament progression: later variants compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "Eliminated")]
    Eliminated,
    #[serde(rename = "Group Stage")]
    GroupStage,
    #[serde(rename = "Round of 32")]
    RoundOf32,
    #[serde(rename = "Round of 16")]
    RoundOf16,
    #[serde(rename = "Quarter-finals")]
    QuarterFinals,
    #[serde(rename = "Semi-finals")]
    SemiFinals,
    #[serde(rename = "Third Place Play-off")]
    ThirdPlacePlayOff,
    #[serde(rename = "Final")]
    Final,
    #[serde(rename = "Winner")]
    Winner,
}

impl Stage {
    /// Every stage, in canonical order.
    pub const ALL: [Stage; 9] = [
        Stage::Eliminated,
        Stage::GroupStage,
        Stage::RoundOf32,
        Stage::RoundOf16,
        Stage::QuarterFinals,
        Stage::SemiFinals,
        Stage::ThirdPlacePlayOff,
        Stage::Final,
        Stage::Winner,
    ];

    /// Get the canonical stage name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Stage::Eliminated => "Eliminated",
            Stage::GroupStage => "Group Stage",
            Stage::RoundOf32 => "Round of 32",
            Stage::RoundOf16 => "Round of 16",
            Stage::QuarterFinals => "Quarter-finals",
            Stage::SemiFinals => "Semi-finals",
            Stage::ThirdPlacePlayOff => "Third Place Play-off",
            Stage::Final => "Final",
            Stage::Winner => "Winner",
        }
    }

    /// Get the display progress for this stage, in percent.
    #[must_use]
    pub const fn progress(self) -> u8 {
        match self {
            Stage::Eliminated => 0,
            Stage::GroupStage => 10,
            Stage::RoundOf32 => 25,
            Stage::RoundOf16 => 40,
            Stage::QuarterFinals => 55,
            Stage::SemiFinals => 70,
            Stage::ThirdPlacePlayOff => 75,
            Stage::Final => 90,
            Stage::Winner => 100,
        }
    }

    /// Get the stage a team advancing from this one reaches, if any.
    ///
    /// Semi-finals advance to the Final; the play-off is not on that path.
    #[must_use]
    pub const fn next(self) -> Option<Stage> {
        match self {
            Stage::Eliminated => None,
            Stage::GroupStage => Some(Stage::RoundOf32),
            Stage::RoundOf32 => Some(Stage::RoundOf16),
            Stage::RoundOf16 => Some(Stage::QuarterFinals),
            Stage::QuarterFinals => Some(Stage::SemiFinals),
            Stage::SemiFinals => Some(Stage::Final),
            Stage::ThirdPlacePlayOff => None,
            Stage::Final => Some(Stage::Winner),
            Stage::Winner => None,
        }
    }

    /// Get the stage this one is reached from, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Stage> {
        match self {
            Stage::Eliminated | Stage::GroupStage => None,
            Stage::RoundOf32 => Some(Stage::GroupStage),
            Stage::RoundOf16 => Some(Stage::RoundOf32),
            Stage::QuarterFinals => Some(Stage::RoundOf16),
            Stage::SemiFinals => Some(Stage::QuarterFinals),
            Stage::ThirdPlacePlayOff | Stage::Final => Some(Stage::SemiFinals),
            Stage::Winner => Some(Stage::Final),
        }
    }

    /// Check if no further match is played from this stage.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Stage::Eliminated | Stage::ThirdPlacePlayOff | Stage::Winner
        )
    }

    /// Check if this stage is off the main bracket path.
    #[must_use]
    pub const fn is_side_branch(self) -> bool {
        matches!(self, Stage::ThirdPlacePlayOff)
    }

    /// Parse a free-form label: alias lookup first, then the canonical name.
    #[must_use]
    pub fn parse_label(label: &str) -> Option<Stage> {
        label.parse().ok()
    }

    fn from_canonical(name: &str) -> Option<Stage> {
        Stage::ALL.into_iter().find(|stage| stage.name() == name)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = StageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_stage(s);
        if normalized.is_empty() {
            return Err(StageError::Empty);
        }
        Stage::from_canonical(&normalized).ok_or(StageError::Unknown(normalized))
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors from strict stage parsing.
///
/// Only [`Stage::from_str`] produces these. Resolution and normalization
/// report absence through `Option` or an empty string instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    /// The label was empty after trimming.
    #[error("empty stage label")]
    Empty,

    /// The label is neither an alias nor a canonical stage.
    #[error("unknown stage: {0:?}")]
    Unknown(String),
}

// =============================================================================
// STAGE ALIAS TABLE
// =============================================================================

/// Spelling variants accepted for each canonical stage.
///
/// Keys are matched case-sensitively after trimming. The short vocabulary
/// ("Quarter Final", "Semi Final") is folded in here.
pub static STAGE_ALIASES: &[(&str, Stage)] = &[
    ("Out", Stage::Eliminated),
    ("Knocked Out", Stage::Eliminated),
    ("Knocked out", Stage::Eliminated),
    ("Group", Stage::GroupStage),
    ("Groups", Stage::GroupStage),
    ("Group stage", Stage::GroupStage),
    ("Group Phase", Stage::GroupStage),
    ("GS", Stage::GroupStage),
    ("R32", Stage::RoundOf32),
    ("Last 32", Stage::RoundOf32),
    ("Round Of 32", Stage::RoundOf32),
    ("R16", Stage::RoundOf16),
    ("Last 16", Stage::RoundOf16),
    ("Round Of 16", Stage::RoundOf16),
    ("Round of Sixteen", Stage::RoundOf16),
    ("QF", Stage::QuarterFinals),
    ("Quarter Final", Stage::QuarterFinals),
    ("Quarter Finals", Stage::QuarterFinals),
    ("Quarter-final", Stage::QuarterFinals),
    ("Quarter-Finals", Stage::QuarterFinals),
    ("Quarterfinal", Stage::QuarterFinals),
    ("Quarterfinals", Stage::QuarterFinals),
    ("SF", Stage::SemiFinals),
    ("Semi Final", Stage::SemiFinals),
    ("Semi Finals", Stage::SemiFinals),
    ("Semi-final", Stage::SemiFinals),
    ("Semi-Finals", Stage::SemiFinals),
    ("Semifinal", Stage::SemiFinals),
    ("Semifinals", Stage::SemiFinals),
    ("Third Place Playoff", Stage::ThirdPlacePlayOff),
    ("Third Place", Stage::ThirdPlacePlayOff),
    ("Third place play-off", Stage::ThirdPlacePlayOff),
    ("3rd Place", Stage::ThirdPlacePlayOff),
    ("3rd Place Play-off", Stage::ThirdPlacePlayOff),
    ("Play-off for third place", Stage::ThirdPlacePlayOff),
    ("Finals", Stage::Final),
    ("The Final", Stage::Final),
    ("Champion", Stage::Winner),
    ("Champions", Stage::Winner),
    ("Winners", Stage::Winner),
];

static STAGE_ALIAS_INDEX: LazyLock<BTreeMap<&'static str, Stage>> =
    LazyLock::new(|| STAGE_ALIASES.iter().copied().collect());

/// Look up a label in the stage alias table (exact, case-sensitive).
#[must_use]
pub fn stage_alias(label: &str) -> Option<Stage> {
    STAGE_ALIAS_INDEX.get(label).copied()
}

// =============================================================================
// NORMALIZATION
// =============================================================================

/// Normalize a free-form stage label.
///
/// Trims surrounding whitespace (a byte-order mark counts as whitespace),
/// then maps a known alias to its canonical
/// name. Anything else comes back trimmed but otherwise unchanged, so the
/// result is not guaranteed to be canonical. Absent input yields `""`.
#[must_use]
pub fn normalize_stage<'a>(label: impl Into<Option<&'a str>>) -> String {
    let trimmed = label
        .into()
        .unwrap_or_default()
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    match stage_alias(trimmed) {
        Some(stage) => stage.name().to_string(),
        None => trimmed.to_string(),
    }
}

/// Get the progress value for a canonical stage name.
///
/// Returns `None` for strings outside the canonical vocabulary; aliases are
/// not expanded here, run [`normalize_stage`] first.
#[must_use]
pub fn stage_progress(stage: &str) -> Option<u8> {
    Stage::from_canonical(stage).map(Stage::progress)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_ordering() {
        for pair in Stage::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn progress_is_monotonic() {
        for pair in Stage::ALL.windows(2) {
            assert!(pair[0].progress() <= pair[1].progress());
        }
        assert_eq!(Stage::Eliminated.progress(), 0);
        assert_eq!(Stage::Winner.progress(), 100);
    }

    #[test]
    fn normalize_alias() {
        assert_eq!(normalize_stage("QF"), "Quarter-finals");
        assert_eq!(normalize_stage("  Semi Final \n"), "Semi-finals");
        assert_eq!(normalize_stage("Third Place Playoff"), "Third Place Play-off");
    }

    #[test]
    fn normalize_strips_byte_order_mark() {
        assert_eq!(normalize_stage("\u{feff}QF"), "Quarter-finals");
        assert_eq!(normalize_stage("\u{feff} Round of 8 \u{feff}"), "Round of 8");
    }

    #[test]
    fn normalize_passthrough() {
        assert_eq!(normalize_stage("Unknown Stage"), "Unknown Stage");
        assert_eq!(normalize_stage("  Final  "), "Final");
        assert_eq!(normalize_stage(None), "");
        assert_eq!(normalize_stage("   "), "");
    }

    #[test]
    fn alias_lookup_is_case_sensitive() {
        assert_eq!(stage_alias("QF"), Some(Stage::QuarterFinals));
        assert_eq!(stage_alias("qf"), None);
        assert_eq!(normalize_stage("qf"), "qf");
    }

    #[test]
    fn every_alias_is_distinct() {
        assert_eq!(STAGE_ALIAS_INDEX.len(), STAGE_ALIASES.len());
    }

    #[test]
    fn canonical_names_normalize_to_themselves() {
        for stage in Stage::ALL {
            assert_eq!(normalize_stage(stage.name()), stage.name());
            assert_eq!(stage_alias(stage.name()), None);
        }
    }

    #[test]
    fn progress_by_name() {
        assert_eq!(stage_progress("Round of 16"), Some(40));
        assert_eq!(stage_progress("R16"), None);
        assert_eq!(stage_progress(""), None);
    }

    #[test]
    fn parse_strict() {
        assert_eq!("Final".parse::<Stage>(), Ok(Stage::Final));
        assert_eq!(" SF ".parse::<Stage>(), Ok(Stage::SemiFinals));
        assert_eq!("".parse::<Stage>(), Err(StageError::Empty));
        assert_eq!(
            "Round of 8".parse::<Stage>(),
            Err(StageError::Unknown("Round of 8".to_string()))
        );
        assert_eq!(Stage::parse_label("Champion"), Some(Stage::Winner));
    }

    #[test]
    fn every_stage_parses_from_its_name() {
        for stage in Stage::ALL {
            assert_eq!(stage.name().parse::<Stage>(), Ok(stage));
        }
    }

    #[test]
    fn serde_uses_canonical_names() {
        for stage in Stage::ALL {
            let json = serde_json::to_string(&stage).expect("serialize");
            assert_eq!(json, format!("\"{}\"", stage.name()));
            let back: Stage = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, stage);
        }
    }

    #[test]
    fn bracket_links() {
        assert_eq!(Stage::SemiFinals.next(), Some(Stage::Final));
        assert_eq!(Stage::ThirdPlacePlayOff.next(), None);
        assert_eq!(Stage::ThirdPlacePlayOff.previous(), Some(Stage::SemiFinals));
        assert_eq!(Stage::Winner.previous(), Some(Stage::Final));
        assert!(Stage::ThirdPlacePlayOff.is_side_branch());
        assert!(Stage::ThirdPlacePlayOff.is_terminal());
        assert!(!Stage::Final.is_terminal());
    }

    #[test]
    fn stage_display() {
        assert_eq!(format!("{}", Stage::RoundOf32), "Round of 32");
        assert_eq!(Stage::QuarterFinals.to_string(), "Quarter-finals");
    }
}
