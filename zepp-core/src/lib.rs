//! # Zepp Builder Core
//!
//! Widget model and source generation for Zepp OS watch apps.
//!
//! A [`Scene`] is an ordered list of [`Widget`]s placed on a 480x480 round
//! canvas. Generation projects a scene into two artifacts for the watch
//! runtime, plus a static README:
//!
//! ```text
//!                  ┌──────────────────┐
//!   Scene ───────► │  SceneFeatures   │  (task list? voice button?)
//!     │            └────────┬─────────┘
//!     │                     │
//!     ▼                     ▼
//! ┌──────────────┐   ┌──────────────┐
//! │ script       │   │ manifest     │
//! │  emit/encode │   │  permissions │
//! └──────┬───────┘   └──────┬───────┘
//!        ▼                  ▼
//!  page/index.js         app.json
//! ```
//!
//! Generation is pure: it never mutates the scene, performs no I/O, and
//! produces byte-identical output for identical input.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod emit;
pub mod encode;
pub mod error;
pub mod features;
pub mod ids;
pub mod layout;
pub mod manifest;
pub mod project;
pub mod scene;
pub mod script;
pub mod widget;

pub use error::{BuilderError, BuilderResult, UnsupportedWidget};
pub use features::{Permission, SceneFeatures};
pub use ids::{IdSource, SequentialIds, UuidIds, WidgetId};
pub use layout::import_layout;
pub use manifest::{AppId, Manifest, ManifestConfig};
pub use project::ProjectFiles;
pub use scene::Scene;
pub use script::GeneratedScript;
pub use widget::{
    PropsPatch, Widget, WidgetKind, WidgetProps, CANVAS_CENTER, CANVAS_SIZE,
    DEFAULT_TASKS_ENDPOINT,
};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
