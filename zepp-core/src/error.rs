//! Error types for builder operations.

use thiserror::Error;

use crate::{WidgetId, WidgetKind};

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Errors that can occur while editing or importing a widget model.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Widget not found in scene.
    #[error("Widget not found: {0}")]
    WidgetNotFound(WidgetId),

    /// Two widgets in one scene share an id.
    #[error("Duplicate widget id: {0}")]
    DuplicateId(WidgetId),

    /// Layout document does not match the generator schema.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Manifest or scene serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A widget variant that has no emission rule for the target runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No emission rule for {kind} widget {id}")]
pub struct UnsupportedWidget {
    /// Widget that was skipped.
    pub id: WidgetId,
    /// Its variant.
    pub kind: WidgetKind,
}
