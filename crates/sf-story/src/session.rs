//! Game session: the single "current scene" slot and its random source.
//!
//! A presentation layer drives a session in two steps per turn. It calls
//! [`GameSession::resolve_choice`] with a handle from the current view, then
//! [`GameSession::enter_scene`] with the returned id. Values drawn while
//! resolving (a dive depth, a shark species) are carried into the scene
//! entered next so its text agrees with the branch that was taken.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::StdRng;

use crate::branch::Draw;
use crate::config::StoryConfig;
use crate::error::{StoryError, StoryResult};
use crate::graph::SceneGraph;
use crate::scene::{Mood, SceneId, Transition};
use crate::story::spearfishing;
use crate::template::{Bindings, render};

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// Opaque reference to a choice in a rendered scene.
///
/// Only the session that rendered the scene accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChoiceHandle {
    session: u64,
    scene: SceneId,
    index: usize,
}

impl ChoiceHandle {
    /// Scene the choice belongs to.
    pub fn scene(&self) -> SceneId {
        self.scene
    }

    /// Position of the choice in the scene's menu.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// A choice as presented to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    /// Text to show.
    pub label: String,
    /// Handle to pass back to [`GameSession::resolve_choice`].
    pub handle: ChoiceHandle,
}

/// A scene as presented to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneView {
    /// Scene identifier.
    pub id: SceneId,
    /// Optional heading.
    pub heading: Option<String>,
    /// Narrative text with template values filled in.
    pub text: String,
    /// Presentation hint.
    pub mood: Mood,
    /// Whether this scene ends an adventure.
    pub ending: bool,
    /// Choices in display order.
    pub choices: Vec<ChoiceView>,
}

/// A single playthrough over a shared scene graph.
pub struct GameSession {
    id: u64,
    graph: Arc<SceneGraph>,
    start: SceneId,
    current: Option<SceneId>,
    pending: Option<Draw>,
    rng: StdRng,
}

impl GameSession {
    /// Create a session over `graph`. No scene is entered yet.
    pub fn new(graph: Arc<SceneGraph>, config: StoryConfig) -> Self {
        Self {
            id: NEXT_SESSION.fetch_add(1, Ordering::Relaxed),
            rng: config.rng(),
            graph,
            start: config.start,
            current: None,
            pending: None,
        }
    }

    /// Create a session over the Spearfishing Adventure story.
    pub fn spearfishing(config: StoryConfig) -> Self {
        Self::new(Arc::new(spearfishing()), config)
    }

    /// The graph this session runs on.
    pub fn graph(&self) -> &Arc<SceneGraph> {
        &self.graph
    }

    /// The scene last entered, if any.
    pub fn current(&self) -> Option<SceneId> {
        self.current
    }

    /// Enter the configured start scene.
    pub fn start(&mut self) -> StoryResult<SceneView> {
        self.enter_scene(self.start)
    }

    /// Forget any pending draw and enter the start scene again.
    pub fn reset(&mut self) -> StoryResult<SceneView> {
        self.pending = None;
        self.current = None;
        self.start()
    }

    /// Enter a scene and render it.
    ///
    /// Template values come from the draw that resolved to this scene, if
    /// there is one; the rest are drawn fresh.
    pub fn enter_scene(&mut self, id: SceneId) -> StoryResult<SceneView> {
        let scene = self.graph.get(id)?;

        let mut bindings = match self.pending.take() {
            Some(draw) if draw.next == id => draw.bindings,
            _ => Bindings::default(),
        };
        for slot in &scene.slots {
            if slot.is_empty() {
                return Err(StoryError::invalid(
                    id,
                    format!("slot {{{}}} has an empty range", slot.key()),
                ));
            }
            bindings.fill(slot, &mut self.rng);
        }

        let view = SceneView {
            id,
            heading: scene.heading.as_ref().map(|h| render(h, &bindings)),
            text: render(&scene.text, &bindings),
            mood: scene.mood,
            ending: scene.ending,
            choices: scene
                .choices
                .iter()
                .enumerate()
                .map(|(index, choice)| ChoiceView {
                    label: choice.label.clone(),
                    handle: ChoiceHandle {
                        session: self.id,
                        scene: id,
                        index,
                    },
                })
                .collect(),
        };

        log::debug!("entered {id} ({} choices)", view.choices.len());
        self.current = Some(id);
        Ok(view)
    }

    /// Work out which scene a choice leads to.
    ///
    /// Randomized choices draw fresh values on every call. The current scene
    /// does not change until the returned id is entered.
    pub fn resolve_choice(&mut self, handle: ChoiceHandle) -> StoryResult<SceneId> {
        let current = self
            .current
            .ok_or_else(|| StoryError::invalid(handle.scene, "no scene has been entered"))?;
        if handle.session != self.id {
            return Err(StoryError::invalid(
                current,
                "choice was issued by another session",
            ));
        }
        if handle.scene != current {
            return Err(StoryError::invalid(
                current,
                format!("choice belongs to {}", handle.scene),
            ));
        }

        let scene = self.graph.get(current)?;
        let choice = scene.choices.get(handle.index).ok_or_else(|| {
            StoryError::invalid(
                current,
                format!(
                    "choice {} out of range ({} available)",
                    handle.index,
                    scene.choices.len()
                ),
            )
        })?;

        let draw = match choice.transition {
            Transition::Goto(next) => Draw::to(next),
            Transition::Branch(policy) => policy.resolve(&mut self.rng),
        };
        if !self.graph.contains(draw.next) {
            return Err(StoryError::invalid(
                current,
                format!("{} is not in the graph", draw.next),
            ));
        }

        log::debug!("{current} [{}] -> {}", choice.label, draw.next);
        let next = draw.next;
        self.pending = Some(draw);
        Ok(next)
    }

    /// Resolve the choice at `index` of the current scene and enter the result.
    pub fn choose(&mut self, index: usize) -> StoryResult<SceneView> {
        let current = self
            .current
            .ok_or_else(|| StoryError::invalid(self.start, "no scene has been entered"))?;
        let next = self.resolve_choice(ChoiceHandle {
            session: self.id,
            scene: current,
            index,
        })?;
        self.enter_scene(next)
    }
}
