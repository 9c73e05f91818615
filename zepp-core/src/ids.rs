//! Widget identifiers and the sources that mint them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a widget.
///
/// Opaque to the generator: ids are only compared, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    /// Wrap an existing identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A source of fresh widget identifiers.
///
/// Passed into every model mutation that creates widgets, so the model
/// never reaches for a clock or a global generator on its own.
pub trait IdSource {
    /// Produce an identifier that this source has never returned before.
    fn next_id(&mut self) -> WidgetId;
}

/// Random v4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> WidgetId {
        WidgetId(Uuid::new_v4().to_string())
    }
}

/// Deterministic counter identifiers: `w-1`, `w-2`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Create a counter starting at `w-1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter whose first id is `w-{start}`.
    #[must_use]
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: start.saturating_sub(1),
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> WidgetId {
        self.next += 1;
        WidgetId(format!("w-{}", self.next))
    }
}
