//! Widgets - the placed elements of a watch layout.

use serde::{Deserialize, Serialize};

use crate::encode;
use crate::{IdSource, WidgetId};

/// Width and height of the round watch canvas, in device pixels.
pub const CANVAS_SIZE: f64 = 480.0;

/// Center coordinate of the canvas on both axes.
pub const CANVAS_CENTER: f64 = CANVAS_SIZE / 2.0;

/// Default endpoint for task lists.
pub const DEFAULT_TASKS_ENDPOINT: &str = "https://api.todoist.com/rest/v2/tasks";

/// The widget variants the builder knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WidgetKind {
    /// Centered text label.
    Text,
    /// Pressable button with a label.
    Button,
    /// Image placeholder. No emission rule exists for it.
    Img,
    /// Filled circle.
    Circle,
    /// Filled rectangle, optionally rounded.
    Rect,
    /// Scrollable task list backed by a remote endpoint.
    TodoList,
    /// Round microphone button that starts voice input.
    VoiceButton,
}

impl WidgetKind {
    /// All variants, in declaration order.
    pub const ALL: [WidgetKind; 7] = [
        WidgetKind::Text,
        WidgetKind::Button,
        WidgetKind::Img,
        WidgetKind::Circle,
        WidgetKind::Rect,
        WidgetKind::TodoList,
        WidgetKind::VoiceButton,
    ];

    /// The upper-case tag used in layout documents.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetKind::Text => "TEXT",
            WidgetKind::Button => "BUTTON",
            WidgetKind::Img => "IMG",
            WidgetKind::Circle => "CIRCLE",
            WidgetKind::Rect => "RECT",
            WidgetKind::TodoList => "TODO_LIST",
            WidgetKind::VoiceButton => "VOICE_BUTTON",
        }
    }
}

impl std::fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style and geometry of a widget.
///
/// Geometry is always present. Every other field is optional and is left
/// out entirely when it does not apply; emitters fill in per-kind defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetProps {
    /// X position (pixels from left).
    pub x: f64,
    /// Y position (pixels from top).
    pub y: f64,
    /// Width in pixels.
    pub w: f64,
    /// Height in pixels.
    pub h: f64,
    /// Fill or text color as `#RRGGBB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Label text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Label font size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_size: Option<f64>,
    /// Button color at rest, as `#RRGGBB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_color: Option<String>,
    /// Button color while pressed, as `#RRGGBB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub press_color: Option<String>,
    /// Corner radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Task source for `TODO_LIST`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
}

impl WidgetProps {
    /// Props with only geometry set.
    #[must_use]
    pub fn at(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            w,
            h,
            ..Self::default()
        }
    }

    /// The endpoint a task list reads from.
    #[must_use]
    pub fn tasks_endpoint(&self) -> &str {
        encode::text_or(self.api_endpoint.as_deref(), DEFAULT_TASKS_ENDPOINT)
    }

    /// The props a freshly placed widget of `kind` starts with.
    #[must_use]
    pub fn defaults_for(kind: WidgetKind) -> Self {
        let mut props = Self {
            color: Some("#ffffff".to_string()),
            text_size: Some(36.0),
            ..Self::at(CANVAS_CENTER - 50.0, CANVAS_CENTER - 25.0, 100.0, 50.0)
        };
        if matches!(kind, WidgetKind::Text | WidgetKind::Button) {
            props.text = Some("Label".to_string());
        }

        match kind {
            WidgetKind::Circle => {
                props.w = 60.0;
                props.h = 60.0;
                props.color = Some("#3e8bf3".to_string());
            }
            WidgetKind::Button => {
                props.normal_color = Some("#3e8bf3".to_string());
                props.press_color = Some("#2563eb".to_string());
                props.radius = Some(12.0);
            }
            WidgetKind::Rect => {
                props.color = Some("#3e8bf3".to_string());
                props.radius = Some(8.0);
                props.w = 80.0;
                props.h = 80.0;
            }
            WidgetKind::VoiceButton => {
                props.w = 64.0;
                props.h = 64.0;
                props.normal_color = Some("#ef4444".to_string());
                props.x = CANVAS_CENTER - 32.0;
                props.y = 350.0;
            }
            WidgetKind::TodoList => {
                props.w = 300.0;
                props.h = 200.0;
                props.x = 90.0;
                props.y = 140.0;
                props.api_endpoint = Some(DEFAULT_TASKS_ENDPOINT.to_string());
            }
            WidgetKind::Text | WidgetKind::Img => {}
        }
        props
    }

    /// Overwrite every field that `patch` sets.
    pub fn apply(&mut self, patch: PropsPatch) {
        let PropsPatch {
            x,
            y,
            w,
            h,
            color,
            text,
            text_size,
            normal_color,
            press_color,
            radius,
            api_endpoint,
        } = patch;

        if let Some(x) = x {
            self.x = x;
        }
        if let Some(y) = y {
            self.y = y;
        }
        if let Some(w) = w {
            self.w = w;
        }
        if let Some(h) = h {
            self.h = h;
        }
        if color.is_some() {
            self.color = color;
        }
        if text.is_some() {
            self.text = text;
        }
        if text_size.is_some() {
            self.text_size = text_size;
        }
        if normal_color.is_some() {
            self.normal_color = normal_color;
        }
        if press_color.is_some() {
            self.press_color = press_color;
        }
        if radius.is_some() {
            self.radius = radius;
        }
        if api_endpoint.is_some() {
            self.api_endpoint = api_endpoint;
        }
    }
}

/// A partial update to [`WidgetProps`]. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropsPatch {
    /// New X position.
    pub x: Option<f64>,
    /// New Y position.
    pub y: Option<f64>,
    /// New width.
    pub w: Option<f64>,
    /// New height.
    pub h: Option<f64>,
    /// New fill or text color.
    pub color: Option<String>,
    /// New label text.
    pub text: Option<String>,
    /// New font size.
    pub text_size: Option<f64>,
    /// New resting button color.
    pub normal_color: Option<String>,
    /// New pressed button color.
    pub press_color: Option<String>,
    /// New corner radius.
    pub radius: Option<f64>,
    /// New task endpoint.
    pub api_endpoint: Option<String>,
}

/// A widget placed on the watch canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Unique identifier.
    pub id: WidgetId,
    /// Widget variant.
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    /// Display label, used for identification only.
    pub name: String,
    /// Style and geometry.
    pub props: WidgetProps,
}

impl Widget {
    /// Create a widget from its parts.
    #[must_use]
    pub fn new(id: WidgetId, kind: WidgetKind, name: impl Into<String>, props: WidgetProps) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            props,
        }
    }

    /// Create a widget of `kind` with a fresh id and the default props for
    /// its kind.
    #[must_use]
    pub fn placed<I: IdSource + ?Sized>(kind: WidgetKind, ids: &mut I) -> Self {
        Self::new(
            ids.next_id(),
            kind,
            format!("New {kind}"),
            WidgetProps::defaults_for(kind),
        )
    }
}
