//! Drift distance check.
//!
//! The current carries the diver a number of miles. Beyond ten miles the
//! island is out of sight and the story ends at sea.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Possible drift distances in miles.
pub const DRIFT_MILES: RangeInclusive<u32> = 2..=15;

/// Drifts strictly farther than this are lost at sea.
pub const LOST_AT_SEA_MILES: u32 = 10;

/// Where the current leaves the diver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriftBranch {
    /// The island is still visible.
    IslandVisible,
    /// Too far out to make it back.
    LostAtSea,
}

/// Decide the branch for a drift distance.
pub fn drift_branch(distance: u32) -> DriftBranch {
    if distance > LOST_AT_SEA_MILES {
        DriftBranch::LostAtSea
    } else {
        DriftBranch::IslandVisible
    }
}

/// Draw a drift distance.
pub fn roll_drift<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(DRIFT_MILES)
}
