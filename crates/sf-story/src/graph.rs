//! The scene graph and its structural checks.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::error::{StoryError, StoryResult};
use crate::scene::{Scene, SceneId, Transition};
use crate::template::placeholders;

/// A structural problem found by [`SceneGraph::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphIssue {
    /// A choice can lead to a scene that is not in the graph.
    DanglingTarget {
        /// Scene owning the choice.
        scene: SceneId,
        /// Index of the choice.
        choice: usize,
        /// Missing target.
        target: SceneId,
    },
    /// A scene offers nothing to pick.
    NoChoices(SceneId),
    /// An ending does not offer exactly one choice leading to restart.
    EndingWithoutRestart(SceneId),
    /// Scene text uses a placeholder the scene does not declare.
    UndeclaredPlaceholder {
        /// Scene owning the text.
        scene: SceneId,
        /// Placeholder name.
        key: String,
    },
    /// A declared slot has an empty range to draw from.
    EmptySlotRange {
        /// Scene declaring the slot.
        scene: SceneId,
        /// Placeholder name.
        key: String,
    },
    /// The scene cannot be reached from the start.
    Unreachable(SceneId),
    /// The start scene is not in the graph.
    MissingStart(SceneId),
}

impl std::fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingTarget {
                scene,
                choice,
                target,
            } => write!(f, "{scene}: choice {} leads to missing scene {target}", choice + 1),
            Self::NoChoices(scene) => write!(f, "{scene}: no choices"),
            Self::EndingWithoutRestart(scene) => {
                write!(f, "{scene}: ending must offer a single restart choice")
            }
            Self::UndeclaredPlaceholder { scene, key } => {
                write!(f, "{scene}: placeholder {{{key}}} has no slot")
            }
            Self::EmptySlotRange { scene, key } => {
                write!(f, "{scene}: slot {{{key}}} has an empty range")
            }
            Self::Unreachable(scene) => write!(f, "{scene}: unreachable from start"),
            Self::MissingStart(scene) => write!(f, "start scene {scene} is not defined"),
        }
    }
}

/// An immutable set of scenes keyed by id.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    scenes: BTreeMap<SceneId, Scene>,
}

impl SceneGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scene, replacing any scene with the same id.
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.insert(scene);
        self
    }

    /// Add a scene, returning the one it replaced.
    pub fn insert(&mut self, scene: Scene) -> Option<Scene> {
        self.scenes.insert(scene.id, scene)
    }

    /// Look up a scene.
    pub fn get(&self, id: SceneId) -> StoryResult<&Scene> {
        self.scenes
            .get(&id)
            .ok_or_else(|| StoryError::UnknownScene(id.to_string()))
    }

    /// Look up a scene by name.
    pub fn find(&self, name: &str) -> StoryResult<&Scene> {
        self.get(name.parse()?)
    }

    /// Whether the graph defines `id`.
    pub fn contains(&self, id: SceneId) -> bool {
        self.scenes.contains_key(&id)
    }

    /// All scenes, ordered by id.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.values()
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the graph has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// All ending scenes.
    pub fn endings(&self) -> impl Iterator<Item = &Scene> {
        self.scenes().filter(|s| s.ending)
    }

    /// Scenes reachable from `start`, following every possible transition.
    pub fn reachable_from(&self, start: SceneId) -> BTreeSet<SceneId> {
        let mut seen = BTreeSet::new();
        if !self.contains(start) {
            return seen;
        }
        let mut queue = VecDeque::from([start]);
        seen.insert(start);
        while let Some(id) = queue.pop_front() {
            let Some(scene) = self.scenes.get(&id) else {
                continue;
            };
            for choice in &scene.choices {
                for target in choice.transition.targets() {
                    if self.contains(target) && seen.insert(target) {
                        queue.push_back(target);
                    }
                }
            }
        }
        seen
    }

    /// Check the graph for structural problems.
    pub fn validate(&self, start: SceneId) -> Vec<GraphIssue> {
        let mut issues = Vec::new();
        if !self.contains(start) {
            issues.push(GraphIssue::MissingStart(start));
        }

        for scene in self.scenes() {
            if scene.choices.is_empty() {
                issues.push(GraphIssue::NoChoices(scene.id));
            }

            if scene.ending {
                let restarts = matches!(
                    scene.choices.as_slice(),
                    [only] if only.transition == Transition::Goto(SceneId::Restart)
                );
                if !restarts {
                    issues.push(GraphIssue::EndingWithoutRestart(scene.id));
                }
            }

            for (index, choice) in scene.choices.iter().enumerate() {
                for target in choice.transition.targets() {
                    if !self.contains(target) {
                        issues.push(GraphIssue::DanglingTarget {
                            scene: scene.id,
                            choice: index,
                            target,
                        });
                    }
                }
            }

            for slot in scene.slots.iter().filter(|slot| slot.is_empty()) {
                issues.push(GraphIssue::EmptySlotRange {
                    scene: scene.id,
                    key: slot.key().to_string(),
                });
            }

            let texts = scene.heading.iter().chain(std::iter::once(&scene.text));
            for text in texts {
                for key in placeholders(text) {
                    if !scene.slots.iter().any(|slot| slot.key() == key) {
                        issues.push(GraphIssue::UndeclaredPlaceholder {
                            scene: scene.id,
                            key: key.to_string(),
                        });
                    }
                }
            }
        }

        if self.contains(start) {
            let reachable = self.reachable_from(start);
            issues.extend(
                self.scenes
                    .keys()
                    .filter(|id| !reachable.contains(id))
                    .map(|id| GraphIssue::Unreachable(*id)),
            );
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::BranchPolicy;
    use crate::scene::{Choice, Slot};

    fn small_graph() -> SceneGraph {
        SceneGraph::new()
            .with_scene(
                Scene::new(SceneId::Title, "Welcome")
                    .with_choice(Choice::goto("Start", SceneId::Intro)),
            )
            .with_scene(
                Scene::new(SceneId::Intro, "Pick")
                    .with_choice(Choice::goto("Surface", SceneId::Surfaced)),
            )
            .with_scene(Scene::new(SceneId::Surfaced, "Done").ending(SceneId::Restart))
            .with_scene(
                Scene::new(SceneId::Restart, "Again?")
                    .with_choice(Choice::goto("Yes", SceneId::Intro))
                    .with_choice(Choice::goto("No", SceneId::Title)),
            )
    }

    #[test]
    fn small_graph_is_valid() {
        assert!(small_graph().validate(SceneId::Title).is_empty());
    }

    #[test]
    fn get_unknown_scene() {
        let err = small_graph().get(SceneId::Reef).unwrap_err();
        assert_eq!(err, StoryError::UnknownScene("reef".to_string()));
    }

    #[test]
    fn find_by_name() {
        let graph = small_graph();
        assert_eq!(graph.find("intro").unwrap().id, SceneId::Intro);
        assert!(matches!(
            graph.find("atlantis"),
            Err(StoryError::UnknownScene(_))
        ));
    }

    #[test]
    fn reachable_follows_all_transitions() {
        let reachable = small_graph().reachable_from(SceneId::Title);
        assert_eq!(reachable.len(), 4);
    }

    #[test]
    fn reports_dangling_branch_targets() {
        let graph = small_graph().with_scene(
            Scene::new(SceneId::Intro, "Pick")
                .with_choice(Choice::branch("Drift", BranchPolicy::Drift)),
        );
        let issues = graph.validate(SceneId::Title);
        assert!(issues.contains(&GraphIssue::DanglingTarget {
            scene: SceneId::Intro,
            choice: 0,
            target: SceneId::DriftLost,
        }));
        assert!(issues.contains(&GraphIssue::Unreachable(SceneId::Surfaced)));
    }

    #[test]
    fn reports_bad_endings_and_empty_scenes() {
        let mut bad_ending = Scene::new(SceneId::Surfaced, "Done");
        bad_ending.ending = true;
        bad_ending.choices = vec![Choice::goto("Back", SceneId::Title)];
        let graph = small_graph()
            .with_scene(bad_ending)
            .with_scene(Scene::new(SceneId::Reef, "Nothing to do"));

        let issues = graph.validate(SceneId::Title);
        assert!(issues.contains(&GraphIssue::EndingWithoutRestart(SceneId::Surfaced)));
        assert!(issues.contains(&GraphIssue::NoChoices(SceneId::Reef)));
    }

    #[test]
    fn reports_undeclared_placeholders() {
        let graph = small_graph().with_scene(
            Scene::new(SceneId::Intro, "You dive to {depth} feet near a {shark}")
                .with_slot(Slot::Depth(10..=80))
                .with_choice(Choice::goto("Surface", SceneId::Surfaced)),
        );
        let issues = graph.validate(SceneId::Title);
        assert_eq!(
            issues,
            vec![GraphIssue::UndeclaredPlaceholder {
                scene: SceneId::Intro,
                key: "shark".to_string(),
            }]
        );
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn reports_empty_slot_ranges() {
        let graph = small_graph().with_scene(
            Scene::new(SceneId::Surfaced, "Drifted {distance} miles")
                .with_slot(Slot::Distance(12..=3))
                .ending(SceneId::Restart),
        );
        let issues = graph.validate(SceneId::Title);
        assert_eq!(
            issues,
            vec![GraphIssue::EmptySlotRange {
                scene: SceneId::Surfaced,
                key: "distance".to_string(),
            }]
        );
        assert_eq!(issues[0].to_string(), "surfaced: slot {distance} has an empty range");
    }

    #[test]
    fn missing_start() {
        let issues = small_graph().validate(SceneId::Reef);
        assert_eq!(issues, vec![GraphIssue::MissingStart(SceneId::Reef)]);
    }

    #[test]
    fn issue_display() {
        let issue = GraphIssue::UndeclaredPlaceholder {
            scene: SceneId::Reef,
            key: "depth".to_string(),
        };
        assert_eq!(issue.to_string(), "reef: placeholder {depth} has no slot");
    }
}
