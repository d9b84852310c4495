//! Theme-gated weighted scoring for judged entries.
//!
//! A judged [`Score`] has four dimensions, each 0–10 by convention (the
//! bound is a domain convention of the judging call, not validated here).
//! [`calculate_weighted_score`] collapses them to a single rank value, with
//! two gates keyed on thematic relevance:
//!
//! - `theme < 2` disqualifies the entry outright (no numeric score),
//! - `theme < 4` caps the weighted result at 5.0.
//!
//! Both thresholds are strict less-than. `theme == 2.0` is NOT disqualified
//! but IS capped; `theme == 4.0` is neither.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entries below this thematic relevance are disqualified.
pub const THEME_DISQUALIFY_THRESHOLD: f64 = 2.0;
/// Entries below this thematic relevance are capped at [`THEME_GATE_MAX_SCORE`].
pub const THEME_GATE_THRESHOLD: f64 = 4.0;
/// The cap applied to theme-gated entries.
pub const THEME_GATE_MAX_SCORE: f64 = 5.0;

/// Dimension weights. Must sum to exactly 1.0.
pub const THEME_WEIGHT: f64 = 0.5;
pub const AESTHETIC_WEIGHT: f64 = 0.2;
pub const HUMOR_WEIGHT: f64 = 0.15;
pub const WITTINESS_WEIGHT: f64 = 0.15;

/// A four-dimension judged score, as produced by the external judging call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub theme: f64,
    pub aesthetic: f64,
    pub humor: f64,
    pub wittiness: f64,
}

/// The result of ranking one score: a weighted value or an explicit
/// disqualification marker, never a silent zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RankOutcome {
    Ranked(f64),
    Disqualified,
}

impl RankOutcome {
    pub fn value(&self) -> Option<f64> {
        match self {
            RankOutcome::Ranked(v) => Some(*v),
            RankOutcome::Disqualified => None,
        }
    }

    pub fn is_disqualified(&self) -> bool {
        matches!(self, RankOutcome::Disqualified)
    }
}

impl fmt::Display for RankOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankOutcome::Ranked(v) => write!(f, "{}", v),
            RankOutcome::Disqualified => write!(f, "disqualified"),
        }
    }
}

/// Maps a judged score to a single rank value, applying the disqualification
/// and theme-cap gates. Total and side-effect-free; inputs outside the
/// conventional 0–10 range are computed as-is.
pub fn calculate_weighted_score(score: &Score) -> RankOutcome {
    if score.theme < THEME_DISQUALIFY_THRESHOLD {
        return RankOutcome::Disqualified;
    }

    let weighted = score.theme * THEME_WEIGHT
        + score.aesthetic * AESTHETIC_WEIGHT
        + score.humor * HUMOR_WEIGHT
        + score.wittiness * WITTINESS_WEIGHT;

    if score.theme < THEME_GATE_THRESHOLD {
        RankOutcome::Ranked(weighted.min(THEME_GATE_MAX_SCORE))
    } else {
        RankOutcome::Ranked(weighted)
    }
}
