//! # cuptracker-core
//!
//! Stage resolution for the World Cup prediction game - THE LOGIC.
//!
//! The stage feed reports, per team, a free-form label such as `"QF"` or
//! `"Semi Final"`, keyed by team names that rarely agree with what users
//! type. This crate turns those into canonical [`Stage`]s and a display
//! progress value.
//!
//! ## Operations
//!
//! - [`normalize_stage`] - trim and expand stage aliases
//! - [`canon`] - accent/case/punctuation-insensitive matching form
//! - [`resolve_stage_for`] - exact → alias → fuzzy team lookup
//! - [`team_progress`] - all of the above, packaged for display
//!
//! ## Architectural Constraints
//!
//! - Has NO async, NO network dependencies (pure Rust)
//! - All tables are immutable statics
//! - Absence is reported through `Option`, never through errors

// =============================================================================
// MODULES
// =============================================================================

pub mod canon;
pub mod resolver;
pub mod stage;
pub mod stage_map;
pub mod teams;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use canon::canon;
pub use resolver::{TeamProgress, resolve_stage_for, team_progress};
pub use stage::{
    STAGE_ALIASES, Stage, StageError, normalize_stage, stage_alias, stage_progress,
};
pub use stage_map::StageMap;
pub use teams::{TEAM_ALIASES, team_alias};
