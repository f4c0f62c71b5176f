//! Scenes, choices, and transitions.
//!
//! A scene is a plain record: text, a mood hint for the presentation layer,
//! and an ordered list of choices. Each choice carries a [`Transition`],
//! either a fixed scene or a randomized [`BranchPolicy`].

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::BranchPolicy;
use crate::error::StoryError;

macro_rules! scene_ids {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Identifier of a scene in the story.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum SceneId {
            $(
                #[doc = concat!("The `", $name, "` scene.")]
                $variant,
            )+
        }

        impl SceneId {
            /// Every scene id, in declaration order.
            pub const ALL: &'static [SceneId] = &[$(SceneId::$variant),+];

            /// The snake_case name of this scene.
            pub fn name(self) -> &'static str {
                match self {
                    $(SceneId::$variant => $name,)+
                }
            }
        }
    };
}

scene_ids! {
    Title => "title",
    Intro => "intro",
    Restart => "restart",
    DiveTuna => "dive_tuna",
    DiveManta => "dive_manta",
    DiveWreck => "dive_wreck",
    DiveOpenBlue => "dive_open_blue",
    SharkCharge => "shark_charge",
    TunaCatch => "tuna_catch",
    MantaSighting => "manta_sighting",
    WreckEel => "wreck_eel",
    EmptyBlue => "empty_blue",
    MantaCave => "manta_cave",
    Reef => "reef",
    OctopusEscape => "octopus_escape",
    TurtleLavaTube => "turtle_lava_tube",
    ReefEvent => "reef_event",
    ReefObservation => "reef_observation",
    CoveDiscovery => "cove_discovery",
    NearBoat => "near_boat",
    ReefTossed => "reef_tossed",
    SharkCircling => "shark_circling",
    SharkFight => "shark_fight",
    DriftLost => "drift_lost",
    DriftIsland => "drift_island",
    IgnoredByBoat => "ignored_by_boat",
    LandRescue => "land_rescue",
    Surfaced => "surfaced",
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneId {
    type Err = StoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SceneId::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StoryError::UnknownScene(wanted.to_string()))
    }
}

/// Presentation hint for how a scene should feel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Nothing is wrong.
    #[default]
    Calm,
    /// Something is wrong.
    Tense,
    /// Something is very wrong, right now.
    Alarm,
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calm => write!(f, "calm"),
            Self::Tense => write!(f, "tense"),
            Self::Alarm => write!(f, "alarm"),
        }
    }
}

/// A template placeholder and how to fill it when nothing was carried in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// `{depth}` in feet.
    Depth(RangeInclusive<u32>),
    /// `{distance}` in miles.
    Distance(RangeInclusive<u32>),
    /// `{shark}` species.
    Shark,
    /// `{event}` on the reef.
    ReefEvent,
}

impl Slot {
    /// Placeholder name used in scene text.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Depth(_) => "depth",
            Self::Distance(_) => "distance",
            Self::Shark => "shark",
            Self::ReefEvent => "event",
        }
    }

    /// Whether a fresh value cannot be drawn because the range is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Depth(range) | Self::Distance(range) => range.is_empty(),
            Self::Shark | Self::ReefEvent => false,
        }
    }
}

/// Where a choice leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Always the same scene.
    Goto(SceneId),
    /// Decided by a random draw.
    Branch(BranchPolicy),
}

impl Transition {
    /// Every scene this transition can produce.
    pub fn targets(&self) -> Vec<SceneId> {
        match self {
            Self::Goto(id) => vec![*id],
            Self::Branch(policy) => policy.targets().to_vec(),
        }
    }
}

/// A labeled option at a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Text shown to the player.
    pub label: String,
    /// What happens when it is picked.
    pub transition: Transition,
}

impl Choice {
    /// A choice that always leads to `target`.
    pub fn goto(label: impl Into<String>, target: SceneId) -> Self {
        Self {
            label: label.into(),
            transition: Transition::Goto(target),
        }
    }

    /// A choice decided by `policy`.
    pub fn branch(label: impl Into<String>, policy: BranchPolicy) -> Self {
        Self {
            label: label.into(),
            transition: Transition::Branch(policy),
        }
    }
}

/// A narrative state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// Unique identifier.
    pub id: SceneId,
    /// Optional heading shown above the text.
    pub heading: Option<String>,
    /// Narrative text; may contain `{slot}` placeholders.
    pub text: String,
    /// Presentation hint.
    pub mood: Mood,
    /// Whether this scene ends an adventure.
    pub ending: bool,
    /// Placeholders the text may use.
    pub slots: Vec<Slot>,
    /// Available choices, in display order.
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Create a calm, non-ending scene with no choices.
    pub fn new(id: SceneId, text: impl Into<String>) -> Self {
        Self {
            id,
            heading: None,
            text: text.into(),
            mood: Mood::Calm,
            ending: false,
            slots: Vec::new(),
            choices: Vec::new(),
        }
    }

    /// Set the heading.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Set the mood.
    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    /// Declare a template slot.
    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Mark as an ending whose only choice leads to `restart`.
    pub fn ending(mut self, restart: SceneId) -> Self {
        self.ending = true;
        self.choices = vec![Choice::goto("Accept your fate", restart)];
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_id_names_roundtrip() {
        for id in SceneId::ALL {
            assert_eq!(id.name().parse::<SceneId>().unwrap(), *id);
        }
    }

    #[test]
    fn scene_id_parse_is_case_insensitive() {
        assert_eq!(" Shark_Circling ".parse::<SceneId>().unwrap(), SceneId::SharkCircling);
    }

    #[test]
    fn unknown_scene_id() {
        let err = "kelp_forest".parse::<SceneId>().unwrap_err();
        assert_eq!(err, StoryError::UnknownScene("kelp_forest".to_string()));
    }

    #[test]
    fn scene_id_serde_matches_name() {
        for id in SceneId::ALL {
            let json = serde_json::to_string(id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.name()));
        }
    }

    #[test]
    fn scene_builder() {
        let scene = Scene::new(SceneId::SharkCircling, "A {shark} circles nearby.")
            .with_mood(Mood::Tense)
            .with_slot(Slot::Shark)
            .with_choice(Choice::goto("Fight the shark", SceneId::SharkFight))
            .with_choice(Choice::branch("Swim away", BranchPolicy::Drift));

        assert_eq!(scene.mood, Mood::Tense);
        assert!(!scene.ending);
        assert_eq!(scene.choices.len(), 2);
        assert_eq!(scene.slots[0].key(), "shark");
    }

    #[test]
    fn ending_replaces_choices() {
        let scene = Scene::new(SceneId::Surfaced, "You surface.")
            .with_choice(Choice::goto("Stay", SceneId::Reef))
            .ending(SceneId::Restart);
        assert!(scene.ending);
        assert_eq!(scene.choices, vec![Choice::goto("Accept your fate", SceneId::Restart)]);
    }

    #[test]
    fn reversed_range_slot_is_empty() {
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = Slot::Distance(12..=3);
        assert!(reversed.is_empty());
        assert!(!Slot::Depth(10..=10).is_empty());
        assert!(!Slot::Shark.is_empty());
    }

    #[test]
    fn transition_targets() {
        assert_eq!(Transition::Goto(SceneId::Reef).targets(), vec![SceneId::Reef]);
        let drift = Transition::Branch(BranchPolicy::Drift).targets();
        assert!(drift.contains(&SceneId::DriftLost));
        assert!(drift.contains(&SceneId::DriftIsland));
    }
}
