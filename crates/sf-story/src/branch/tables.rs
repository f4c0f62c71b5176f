//! Fixed sampling tables.
//!
//! Each table is sampled uniformly. The sampled value picks both the text the
//! player reads and, for dive encounters, the scene that follows.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Shark species that can circle the diver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shark {
    /// Tiger shark.
    Tiger,
    /// Oceanic whitetip.
    OceanicWhitetip,
    /// Great white.
    GreatWhite,
}

/// Every shark species, in table order.
pub const SHARKS: &[Shark] = &[Shark::Tiger, Shark::OceanicWhitetip, Shark::GreatWhite];

impl Shark {
    /// Name as it appears in narration.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tiger => "tiger shark",
            Self::OceanicWhitetip => "oceanic whitetip",
            Self::GreatWhite => "great white",
        }
    }
}

impl std::fmt::Display for Shark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What the diver finds in open water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encounter {
    /// A school of tuna.
    Tuna,
    /// A giant manta ray.
    MantaRay,
    /// A sunken ship.
    SunkenShip,
    /// Nothing at all.
    OpenBlue,
}

/// Every dive encounter, in table order.
pub const ENCOUNTERS: &[Encounter] = &[
    Encounter::Tuna,
    Encounter::MantaRay,
    Encounter::SunkenShip,
    Encounter::OpenBlue,
];

impl Encounter {
    /// Name as it appears in the encounter table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tuna => "school of tuna",
            Self::MantaRay => "giant manta ray",
            Self::SunkenShip => "sunken ship",
            Self::OpenBlue => "open blue",
        }
    }
}

impl std::fmt::Display for Encounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Something that happens while exploring the reef.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReefEvent {
    /// A friendly dolphin swims by.
    FriendlyDolphin,
    /// A stingray appears nearby.
    Stingray,
    /// A shiny pearl lies in the sand.
    PearlInSand,
}

/// Every reef event, in table order.
pub const REEF_EVENTS: &[ReefEvent] = &[
    ReefEvent::FriendlyDolphin,
    ReefEvent::Stingray,
    ReefEvent::PearlInSand,
];

impl ReefEvent {
    /// Name as it appears in the event table.
    pub fn label(self) -> &'static str {
        match self {
            Self::FriendlyDolphin => "friendly dolphin",
            Self::Stingray => "stingray",
            Self::PearlInSand => "pearl in sand",
        }
    }

    /// Clause used when narrating the event.
    pub fn description(self) -> &'static str {
        match self {
            Self::FriendlyDolphin => "a friendly dolphin swims by",
            Self::Stingray => "a stingray appears nearby",
            Self::PearlInSand => "you spot a shiny pearl in the sand",
        }
    }
}

impl std::fmt::Display for ReefEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, table: &[T]) -> T {
    table[rng.random_range(0..table.len())]
}

/// Pick a random shark species.
pub fn sample_shark<R: Rng + ?Sized>(rng: &mut R) -> Shark {
    pick(rng, SHARKS)
}

/// Pick a random dive encounter.
pub fn sample_encounter<R: Rng + ?Sized>(rng: &mut R) -> Encounter {
    pick(rng, ENCOUNTERS)
}

/// Pick a random reef event.
pub fn sample_reef_event<R: Rng + ?Sized>(rng: &mut R) -> ReefEvent {
    pick(rng, REEF_EVENTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    const DRAWS: usize = 10_000;

    #[test]
    fn sharks_cover_table() {
        let mut rng = StdRng::seed_from_u64(0);
        let seen: HashSet<Shark> = (0..DRAWS).map(|_| sample_shark(&mut rng)).collect();
        assert_eq!(seen.len(), SHARKS.len(), "missing sharks: {seen:?}");
        assert!(seen.iter().all(|s| SHARKS.contains(s)));
    }

    #[test]
    fn encounters_cover_table() {
        let mut rng = StdRng::seed_from_u64(1);
        let seen: HashSet<Encounter> = (0..DRAWS).map(|_| sample_encounter(&mut rng)).collect();
        assert_eq!(seen.len(), ENCOUNTERS.len(), "missing encounters: {seen:?}");
    }

    #[test]
    fn reef_events_cover_table() {
        let mut rng = StdRng::seed_from_u64(2);
        let seen: HashSet<ReefEvent> = (0..DRAWS).map(|_| sample_reef_event(&mut rng)).collect();
        assert_eq!(seen.len(), REEF_EVENTS.len(), "missing events: {seen:?}");
    }

    #[test]
    fn labels_match_tables() {
        let sharks: Vec<_> = SHARKS.iter().map(|s| s.label()).collect();
        assert_eq!(sharks, ["tiger shark", "oceanic whitetip", "great white"]);

        let encounters: Vec<_> = ENCOUNTERS.iter().map(|e| e.label()).collect();
        assert_eq!(
            encounters,
            ["school of tuna", "giant manta ray", "sunken ship", "open blue"]
        );

        let events: Vec<_> = REEF_EVENTS.iter().map(|e| e.label()).collect();
        assert_eq!(events, ["friendly dolphin", "stingray", "pearl in sand"]);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Shark::GreatWhite.to_string(), "great white");
        assert_eq!(Encounter::OpenBlue.to_string(), "open blue");
        assert_eq!(ReefEvent::Stingray.to_string(), "stingray");
    }

    #[test]
    fn shark_serde_roundtrip() {
        let json = serde_json::to_string(&Shark::OceanicWhitetip).unwrap();
        assert_eq!(json, "\"oceanic_whitetip\"");
        let back: Shark = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Shark::OceanicWhitetip);
    }
}
