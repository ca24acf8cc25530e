//! # Stage Resolution
//!
//! Finds a team's raw stage label in a [`StageMap`] whose keys may not use
//! the same spelling as the caller.
//!
//! ## Resolution Order
//!
//! First match wins:
//! 1. Exact key
//! 2. Team alias target, if that target is a key
//! 3. First key (in map order) whose [`canon`] form equals the name's
//!
//! Nothing here fails. An unknown team is `None`.

use crate::canon::canon;
use crate::stage::{Stage, normalize_stage, stage_progress};
use crate::stage_map::StageMap;
use crate::teams::team_alias;
use serde::{Deserialize, Serialize};

// =============================================================================
// RESOLVER
// =============================================================================

/// Resolve the raw stage label for `name`.
///
/// Returns `None` when either input is absent or empty, or when no step of
/// the resolution order matches.
#[must_use]
pub fn resolve_stage_for<'m, 'n>(
    stages: impl Into<Option<&'m StageMap>>,
    name: impl Into<Option<&'n str>>,
) -> Option<&'m str> {
    let stages = stages.into().filter(|map| !map.is_empty())?;
    let name = name.into().filter(|name| !name.is_empty())?;

    if let Some(label) = stages.get(name) {
        return Some(label);
    }

    if let Some(label) = team_alias(name).and_then(|target| stages.get(target)) {
        return Some(label);
    }

    let wanted = canon(name);
    stages
        .iter()
        .find(|(team, _)| canon(*team) == wanted)
        .map(|(_, label)| label)
}

// =============================================================================
// TEAM PROGRESS
// =============================================================================

/// Everything the display needs to know about one team.
///
/// Each field past `team` is `None` when it cannot be determined; a team the
/// feed does not know renders as a placeholder, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamProgress {
    /// The name as the caller asked for it.
    pub team: String,
    /// The label exactly as found in the feed.
    pub raw_label: Option<String>,
    /// The normalized label (canonical when the label was recognized).
    pub stage: Option<String>,
    /// Display progress, present only for canonical stages.
    pub progress: Option<u8>,
}

impl TeamProgress {
    /// Check if a stage was found for the team.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.stage.is_some()
    }

    /// Get the canonical stage, if the normalized label is one.
    #[must_use]
    pub fn canonical_stage(&self) -> Option<Stage> {
        self.stage.as_deref().and_then(Stage::parse_label)
    }
}

/// Resolve, normalize and score a team in one step.
#[must_use]
pub fn team_progress(stages: &StageMap, name: &str) -> TeamProgress {
    let raw_label = resolve_stage_for(stages, name);
    let stage = raw_label
        .map(normalize_stage)
        .filter(|stage| !stage.is_empty());
    let progress = stage.as_deref().and_then(stage_progress);

    TeamProgress {
        team: name.to_string(),
        raw_label: raw_label.map(str::to_string),
        stage,
        progress,
    }
}

// =============================================================================
// TESTS
// =============================================================================
