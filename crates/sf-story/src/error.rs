//! Error types for the scene graph engine.

use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while driving a story session.
///
/// Both variants are integration mistakes by the caller or the story data.
/// The engine performs no I/O, so nothing here is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoryError {
    /// The requested scene is not defined in the graph.
    #[error("unknown scene: {0}")]
    UnknownScene(String),

    /// A choice could not be turned into a valid transition.
    #[error("invalid transition from {scene}: {reason}")]
    InvalidTransition {
        /// Scene the transition was attempted from.
        scene: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl StoryError {
    pub(crate) fn invalid(scene: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        Self::InvalidTransition {
            scene: scene.to_string(),
            reason: reason.into(),
        }
    }
}
