//! The Spearfishing Adventure story.
//!
//! Off the coast of Hawaii with a speargun: dive into open water, explore the
//! reef, or stay near the boat. Every path ends in one of nine endings, each
//! followed by the restart prompt.

use crate::branch::BranchPolicy;
use crate::branch::dive::DEPTH_FEET;
use crate::branch::drift::{DRIFT_MILES, LOST_AT_SEA_MILES};
use crate::graph::SceneGraph;
use crate::scene::{Choice, Mood, Scene, SceneId, Slot};

/// Title shown on the first screen.
pub const TITLE: &str = "Spearfishing Adventure";

/// Build the full story graph.
pub fn spearfishing() -> SceneGraph {
    let island_miles = *DRIFT_MILES.start()..=LOST_AT_SEA_MILES;
    let lost_miles = LOST_AT_SEA_MILES + 1..=*DRIFT_MILES.end();

    SceneGraph::new()
        // Framing
        .with_scene(
            Scene::new(
                SceneId::Title,
                "Explore the ocean, encounter reefs and sharks, and make your choices wisely!",
            )
            .with_heading(TITLE)
            .with_choice(Choice::goto("Start Adventure", SceneId::Intro)),
        )
        .with_scene(
            Scene::new(
                SceneId::Intro,
                "You step off your boat into the Hawaiian waters, spear in hand. \
                 The sun warms your back as fins cut through crystal-clear waves. \
                 A vibrant coral reef appears below, shadows flit in the open water beyond.",
            )
            .with_choice(Choice::branch("Dive into open water", BranchPolicy::Dive))
            .with_choice(Choice::goto("Explore the reef", SceneId::Reef))
            .with_choice(Choice::goto("Stay near the boat", SceneId::NearBoat)),
        )
        .with_scene(
            Scene::new(SceneId::Restart, "Do you want to dive again?")
                .with_choice(Choice::goto("Yes", SceneId::Intro))
                .with_choice(Choice::goto("No", SceneId::Title)),
        )
        // Open water
        .with_scene(dive(SceneId::DiveTuna, "a school of tuna", SceneId::TunaCatch))
        .with_scene(dive(SceneId::DiveManta, "a giant manta ray", SceneId::MantaSighting))
        .with_scene(dive(SceneId::DiveWreck, "a sunken ship", SceneId::WreckEel))
        .with_scene(dive(SceneId::DiveOpenBlue, "nothing but open blue", SceneId::EmptyBlue))
        .with_scene(
            Scene::new(SceneId::SharkCharge, "A large shark charges toward you!")
                .with_mood(Mood::Alarm)
                .with_choice(Choice::branch("Panic and swim away", BranchPolicy::Shark))
                .with_choice(Choice::branch("Slowly and calmly ascend", BranchPolicy::Drift)),
        )
        .with_scene(
            Scene::new(
                SceneId::TunaCatch,
                "You catch a massive tuna. Everyone will be jealous of this catch!",
            )
            .with_choice(Choice::goto("Leave the school of tuna", SceneId::Surfaced))
            .with_choice(Choice::branch("Follow the school of tuna", BranchPolicy::Dive)),
        )
        .with_scene(
            Scene::new(SceneId::MantaSighting, "A giant manta ray swims beneath you.")
                .with_choice(Choice::goto("Follow it", SceneId::MantaCave))
                .with_choice(Choice::goto("Let it go", SceneId::Reef)),
        )
        .with_scene(
            Scene::new(
                SceneId::WreckEel,
                "You dive down towards the old ship. Its wooden hull is home to a large moray eel!",
            )
            .with_choice(Choice::goto("Shoot the eel", SceneId::Surfaced))
            .with_choice(Choice::branch("Swim back up to surface", BranchPolicy::Drift)),
        )
        .with_scene(
            Scene::new(SceneId::EmptyBlue, "The water is empty and vast.")
                .with_choice(Choice::goto("Return to reef", SceneId::Reef))
                .with_choice(Choice::branch("Dive further into the blue", BranchPolicy::Dive)),
        )
        .with_scene(
            Scene::new(
                SceneId::MantaCave,
                "Following the manta ray, you discover a hidden underwater cave filled with lobsters. \
                 You fill your bag with as many lobsters as you can carry! \
                 You safely surface and return home with a cooler filled! Nice!",
            )
            .ending(SceneId::Restart),
        )
        // Reef
        .with_scene(
            Scene::new(
                SceneId::Reef,
                "Swimming over the reef, you spot: turtle, octopus, and lots of colorful reef fish.",
            )
            .with_choice(Choice::goto("Chase the octopus", SceneId::OctopusEscape))
            .with_choice(Choice::goto("Follow the turtle", SceneId::TurtleLavaTube))
            .with_choice(Choice::goto(
                "Observe the rest of the animals quietly",
                SceneId::ReefObservation,
            )),
        )
        .with_scene(
            Scene::new(
                SceneId::OctopusEscape,
                "The octopus squirts ink and escapes. You continue exploring.",
            )
            .with_choice(Choice::branch("Keep exploring", BranchPolicy::ReefEvent)),
        )
        .with_scene(
            Scene::new(
                SceneId::TurtleLavaTube,
                "The turtle leads you to a hidden lava tube filled with sea urchins.",
            )
            .with_choice(Choice::goto("Enter the lava tube", SceneId::CoveDiscovery)),
        )
        .with_scene(
            Scene::new(SceneId::ReefEvent, "While exploring, {event}.")
                .with_slot(Slot::ReefEvent)
                .with_choice(Choice::goto("Poke it with your spear", SceneId::Restart))
                .with_choice(Choice::goto("Observe it carefully", SceneId::Reef)),
        )
        .with_scene(
            Scene::new(
                SceneId::ReefObservation,
                "You float quietly above the reef, enjoying its beauty and the calm waters. \
                 No good eating fish today!",
            )
            .ending(SceneId::Restart),
        )
        .with_scene(
            Scene::new(
                SceneId::CoveDiscovery,
                "You enter the hidden cove and find colorful fish, vibrant coral, and small treasures. \
                 After exploring safely, you return to your boat feeling accomplished and relaxed.",
            )
            .ending(SceneId::Restart),
        )
        // Near the boat
        .with_scene(
            Scene::new(
                SceneId::NearBoat,
                "You stay near the boat, but the current begins to pull you away.",
            )
            .with_choice(Choice::branch("Let the current take you", BranchPolicy::Drift))
            .with_choice(Choice::goto("Try to fight the current", SceneId::ReefTossed)),
        )
        .with_scene(
            Scene::new(
                SceneId::ReefTossed,
                "A sudden wave throws you onto the coral reef, scraping your arms and legs. \
                 You manage to crawl up onto the rocky shore. \
                 You are embarrassed as the tourists on the shore start to point and laugh. \
                 You decide it's best to return home. Empty handed...",
            )
            .ending(SceneId::Restart),
        )
        // Sharks
        .with_scene(
            Scene::new(SceneId::SharkCircling, "A {shark} circles nearby. What do you do?")
                .with_mood(Mood::Tense)
                .with_slot(Slot::Shark)
                .with_choice(Choice::goto("Fight the shark", SceneId::SharkFight))
                .with_choice(Choice::branch("Swim away", BranchPolicy::Drift)),
        )
        .with_scene(
            Scene::new(
                SceneId::SharkFight,
                "You attempt to fight the shark with your spear. \
                 You've seen enough Instagram videos to know sharks are like puppy dogs... \
                 Unfortunately you relied too much on social media, and the shark devours you. \
                 Piece by piece. You did not survive...",
            )
            .ending(SceneId::Restart),
        )
        // Drifting
        .with_scene(
            Scene::new(
                SceneId::DriftLost,
                "The current drags you {distance} miles out. \
                 Night falls and the ocean feels endless. \
                 Eventually, you are eaten by oceanic sharks. You did not survive...",
            )
            .with_mood(Mood::Tense)
            .with_slot(Slot::Distance(lost_miles))
            .ending(SceneId::Restart),
        )
        .with_scene(
            Scene::new(
                SceneId::DriftIsland,
                "The current carries you {distance} miles, but the island is still visible.",
            )
            .with_mood(Mood::Tense)
            .with_slot(Slot::Distance(island_miles))
            .with_choice(Choice::goto("Swim to land", SceneId::LandRescue))
            .with_choice(Choice::goto("Wait for rescue", SceneId::IgnoredByBoat)),
        )
        .with_scene(
            Scene::new(
                SceneId::IgnoredByBoat,
                "A passing boat ignores you despite your best efforts of trying to get its attention. \
                 You then realize you will not be making it home tonight, or ever for that matter. \
                 You did not survive...",
            )
            .with_mood(Mood::Tense)
            .ending(SceneId::Restart),
        )
        .with_scene(
            Scene::new(
                SceneId::LandRescue,
                "You swim to the shore, exhausted but safe. \
                 You rest and reflect on your adventure, learning the ocean's power and beauty. \
                 Adventure concludes safely, but empty handed...",
            )
            .ending(SceneId::Restart),
        )
        .with_scene(
            Scene::new(
                SceneId::Surfaced,
                "You surface safely, carrying memories of your dive and the creatures you encountered. \
                 You didn't shoot any fish this time, but you learned valuable skills. \
                 Adventure ends for today.",
            )
            .ending(SceneId::Restart),
        )
}

fn dive(id: SceneId, sighting: &str, investigate: SceneId) -> Scene {
    Scene::new(id, format!("You dive to {{depth}} feet. You see {sighting}."))
        .with_slot(Slot::Depth(DEPTH_FEET))
        .with_choice(Choice::goto("Investigate it", investigate))
        .with_choice(Choice::goto("Return to reef", SceneId::Reef))
        .with_choice(Choice::goto("Surface safely", SceneId::Surfaced))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Transition;

    #[test]
    fn story_is_structurally_sound() {
        let graph = spearfishing();
        let issues = graph.validate(SceneId::Title);
        assert!(issues.is_empty(), "issues: {issues:?}");
    }

    #[test]
    fn every_scene_id_is_authored() {
        let graph = spearfishing();
        for id in SceneId::ALL {
            assert!(graph.contains(*id), "missing {id}");
        }
        assert_eq!(graph.len(), SceneId::ALL.len());
    }

    #[test]
    fn closure_from_start() {
        let graph = spearfishing();
        for id in graph.reachable_from(SceneId::Title) {
            let scene = graph.get(id).unwrap();
            assert!(!scene.choices.is_empty(), "{id} has no choices");
            for choice in &scene.choices {
                for target in choice.transition.targets() {
                    assert!(graph.contains(target), "{id} -> {target}");
                }
            }
        }
    }

    #[test]
    fn endings_lead_only_to_restart() {
        let graph = spearfishing();
        let endings: Vec<_> = graph.endings().collect();
        assert_eq!(endings.len(), 9);
        for scene in endings {
            assert_eq!(scene.choices.len(), 1);
            assert_eq!(
                scene.choices[0].transition,
                Transition::Goto(SceneId::Restart)
            );
        }
    }

    #[test]
    fn restart_offers_intro_or_title() {
        let graph = spearfishing();
        let restart = graph.get(SceneId::Restart).unwrap();
        let targets: Vec<_> = restart.choices.iter().map(|c| c.transition).collect();
        assert_eq!(
            targets,
            vec![
                Transition::Goto(SceneId::Intro),
                Transition::Goto(SceneId::Title)
            ]
        );
    }

    #[test]
    fn title_heading() {
        let graph = spearfishing();
        let title = graph.get(SceneId::Title).unwrap();
        insta::assert_snapshot!(title.heading.as_deref().unwrap(), @"Spearfishing Adventure");
    }

    #[test]
    fn stranded_endings_stay_tense() {
        let graph = spearfishing();
        for id in [SceneId::DriftLost, SceneId::IgnoredByBoat] {
            assert_eq!(graph.get(id).unwrap().mood, Mood::Tense, "{id}");
        }
        assert_eq!(graph.get(SceneId::LandRescue).unwrap().mood, Mood::Calm);
    }

    #[test]
    fn prose_keeps_its_wording() {
        let graph = spearfishing();
        let text = |id| graph.get(id).unwrap().text.clone();
        insta::assert_snapshot!(
            text(SceneId::MantaCave),
            @"Following the manta ray, you discover a hidden underwater cave filled with lobsters. You fill your bag with as many lobsters as you can carry! You safely surface and return home with a cooler filled! Nice!"
        );
        assert!(text(SceneId::SharkFight).contains("enough Instagram videos"));
        assert!(text(SceneId::IgnoredByBoat).contains("best efforts of trying to get"));
    }

    #[test]
    fn drift_slots_match_branch() {
        let graph = spearfishing();
        assert_eq!(
            graph.get(SceneId::DriftLost).unwrap().slots,
            vec![Slot::Distance(11..=15)]
        );
        assert_eq!(
            graph.get(SceneId::DriftIsland).unwrap().slots,
            vec![Slot::Distance(2..=10)]
        );
    }
}
