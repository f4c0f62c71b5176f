//! Randomized branch policies.
//!
//! Each policy draws fresh values from the caller's random source and maps
//! them to the next scene. The draw functions are generic over [`rand::Rng`]
//! so tests can pass a seeded generator, and the branch decisions are pure
//! functions of the drawn values.

pub mod dive;
pub mod drift;
pub mod tables;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::scene::SceneId;
use crate::template::Bindings;

pub use dive::{DiveBranch, DiveCheck, check_dive, dive_branch, roll_depth};
pub use drift::{DriftBranch, drift_branch, roll_drift};
pub use tables::{
    Encounter, ReefEvent, Shark, sample_encounter, sample_reef_event, sample_shark,
};

/// A randomized transition rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchPolicy {
    /// Depth and danger check, then a sampled encounter.
    Dive,
    /// Sampled shark species.
    Shark,
    /// Sampled reef event.
    ReefEvent,
    /// Drift distance against the lost-at-sea threshold.
    Drift,
}

/// The outcome of one firing of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// Scene to enter next.
    pub next: SceneId,
    /// Values drawn on the way, handed to the next scene's template.
    pub bindings: Bindings,
}

impl Draw {
    /// A draw that carries no values.
    pub fn to(next: SceneId) -> Self {
        Self {
            next,
            bindings: Bindings::default(),
        }
    }
}

/// Dive scene shown for each encounter.
pub fn dive_scene(encounter: Encounter) -> SceneId {
    match encounter {
        Encounter::Tuna => SceneId::DiveTuna,
        Encounter::MantaRay => SceneId::DiveManta,
        Encounter::SunkenShip => SceneId::DiveWreck,
        Encounter::OpenBlue => SceneId::DiveOpenBlue,
    }
}

/// Scene a dive leads to once its branch and encounter are known.
pub fn dive_target(branch: DiveBranch, encounter: Encounter) -> SceneId {
    match branch {
        DiveBranch::Danger => SceneId::SharkCharge,
        DiveBranch::Normal => dive_scene(encounter),
    }
}

impl BranchPolicy {
    /// Every scene this policy can lead to.
    pub fn targets(self) -> &'static [SceneId] {
        match self {
            Self::Dive => &[
                SceneId::SharkCharge,
                SceneId::DiveTuna,
                SceneId::DiveManta,
                SceneId::DiveWreck,
                SceneId::DiveOpenBlue,
            ],
            Self::Shark => &[SceneId::SharkCircling],
            Self::ReefEvent => &[SceneId::ReefEvent],
            Self::Drift => &[SceneId::DriftLost, SceneId::DriftIsland],
        }
    }

    /// Fire the policy.
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Draw {
        let draw = match self {
            Self::Dive => {
                let check = check_dive(rng);
                let bindings = Bindings {
                    depth: Some(check.depth),
                    ..Bindings::default()
                };
                let encounter = sample_encounter(rng);
                Draw {
                    next: dive_target(check.branch, encounter),
                    bindings,
                }
            }
            Self::Shark => Draw {
                next: SceneId::SharkCircling,
                bindings: Bindings {
                    shark: Some(sample_shark(rng)),
                    ..Bindings::default()
                },
            },
            Self::ReefEvent => Draw {
                next: SceneId::ReefEvent,
                bindings: Bindings {
                    event: Some(sample_reef_event(rng)),
                    ..Bindings::default()
                },
            },
            Self::Drift => {
                let distance = roll_drift(rng);
                let next = match drift_branch(distance) {
                    DriftBranch::LostAtSea => SceneId::DriftLost,
                    DriftBranch::IslandVisible => SceneId::DriftIsland,
                };
                Draw {
                    next,
                    bindings: Bindings {
                        distance: Some(distance),
                        ..Bindings::default()
                    },
                }
            }
        };
        log::trace!("{self:?} drew {:?} -> {}", draw.bindings, draw.next);
        draw
    }
}

impl std::fmt::Display for BranchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dive => write!(f, "dive check"),
            Self::Shark => write!(f, "shark species"),
            Self::ReefEvent => write!(f, "reef event"),
            Self::Drift => write!(f, "drift distance"),
        }
    }
}
