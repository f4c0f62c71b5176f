//! Depth and danger check for open-water dives.
//!
//! A dive draws a depth in feet. Past 50 feet a coin flip decides whether a
//! large shark charges. Danger is never certain, even at full depth.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Possible dive depths in feet.
pub const DEPTH_FEET: RangeInclusive<u32> = 10..=80;

/// Dives strictly deeper than this can turn dangerous.
pub const DANGER_DEPTH: u32 = 50;

/// Which way a dive goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiveBranch {
    /// The dive proceeds to an encounter.
    Normal,
    /// A shark charges.
    Danger,
}

/// Values drawn for a single dive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiveCheck {
    /// Depth reached, in feet.
    pub depth: u32,
    /// The coin flip consulted past the danger depth.
    pub coin: bool,
    /// Resulting branch.
    pub branch: DiveBranch,
}

/// Decide the branch for a depth and coin flip.
pub fn dive_branch(depth: u32, coin: bool) -> DiveBranch {
    if depth > DANGER_DEPTH && coin {
        DiveBranch::Danger
    } else {
        DiveBranch::Normal
    }
}

/// Draw a dive depth.
pub fn roll_depth<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(DEPTH_FEET)
}

/// Draw depth and coin, then decide the branch.
pub fn check_dive<R: Rng + ?Sized>(rng: &mut R) -> DiveCheck {
    let depth = roll_depth(rng);
    let coin = rng.random_bool(0.5);
    DiveCheck {
        depth,
        coin,
        branch: dive_branch(depth, coin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn deep_dives_with_coin_always_danger() {
        let mut rng = StdRng::seed_from_u64(42);
        let danger = (0..1000)
            .map(|_| rng.random_range(DANGER_DEPTH + 1..=*DEPTH_FEET.end()))
            .filter(|depth| dive_branch(*depth, true) == DiveBranch::Danger)
            .count();
        assert_eq!(danger, 1000);
    }

    #[test]
    fn shallow_dives_never_danger() {
        let mut rng = StdRng::seed_from_u64(42);
        let danger = (0..1000)
            .map(|_| {
                let depth = rng.random_range(*DEPTH_FEET.start()..=DANGER_DEPTH);
                dive_branch(depth, rng.random_bool(0.5))
            })
            .filter(|b| *b == DiveBranch::Danger)
            .count();
        assert_eq!(danger, 0);
    }

    #[test]
    fn deep_dive_without_coin_is_normal() {
        assert_eq!(dive_branch(80, false), DiveBranch::Normal);
        assert_eq!(dive_branch(51, true), DiveBranch::Danger);
        assert_eq!(dive_branch(50, true), DiveBranch::Normal);
    }

    #[test]
    fn checks_stay_in_range_and_agree() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut saw_danger = false;
        let mut saw_deep_normal = false;
        for _ in 0..2000 {
            let check = check_dive(&mut rng);
            assert!(DEPTH_FEET.contains(&check.depth));
            assert_eq!(check.branch, dive_branch(check.depth, check.coin));
            saw_danger |= check.branch == DiveBranch::Danger;
            saw_deep_normal |= check.depth > DANGER_DEPTH && check.branch == DiveBranch::Normal;
        }
        assert!(saw_danger);
        assert!(saw_deep_normal, "deep dives should sometimes be safe");
    }

    proptest! {
        #[test]
        fn danger_needs_depth_and_coin(depth in 0u32..200, coin in any::<bool>()) {
            let expected = depth > DANGER_DEPTH && coin;
            prop_assert_eq!(dive_branch(depth, coin) == DiveBranch::Danger, expected);
        }
    }
}
