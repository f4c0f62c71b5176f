//! Scene graph engine for Spearfishing Adventure.
//!
//! Holds the story as a data-driven graph of scenes and choices, resolves
//! choices into next scenes (some through random draws), and tracks the
//! current scene of each game session. Rendering is left to the caller.

pub mod branch;
pub mod config;
pub mod error;
pub mod graph;
pub mod scene;
pub mod session;
pub mod story;
pub mod template;

pub use branch::{BranchPolicy, Draw};
pub use config::StoryConfig;
pub use error::{StoryError, StoryResult};
pub use graph::{GraphIssue, SceneGraph};
pub use scene::{Choice, Mood, Scene, SceneId, Slot, Transition};
pub use session::{ChoiceHandle, ChoiceView, GameSession, SceneView};
pub use story::spearfishing;
