//! Scene-wide feature detection.
//!
//! Both assemblers gate their optional output on which widget kinds are
//! present. The scan happens once per generation pass and both the
//! manifest's permissions and the script's helper methods read from it.

use crate::{Widget, WidgetKind};

/// A runtime capability the app must declare in `app.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Network access, needed to fetch tasks.
    Internet,
    /// Microphone access, needed for voice input.
    AudioRecord,
}

impl Permission {
    /// The permission string as written in the manifest.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::Internet => "internet",
            Permission::AudioRecord => "audio_record",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a widget sequence requires from the generated app.
///
/// Only [`SceneFeatures::scan`] builds one, so the features always match
/// the widgets they were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneFeatures<'a> {
    tasks_endpoint: Option<&'a str>,
    voice_input: bool,
}

impl<'a> SceneFeatures<'a> {
    /// Scan a widget sequence.
    ///
    /// When several task lists are present the first one wins.
    #[must_use]
    pub fn scan(widgets: &'a [Widget]) -> Self {
        let tasks_endpoint = widgets
            .iter()
            .find(|w| w.kind == WidgetKind::TodoList)
            .map(|w| w.props.tasks_endpoint());
        let voice_input = widgets.iter().any(|w| w.kind == WidgetKind::VoiceButton);
        Self {
            tasks_endpoint,
            voice_input,
        }
    }

    /// Endpoint of the first `TODO_LIST` in sequence order, if any.
    #[must_use]
    pub fn tasks_endpoint(&self) -> Option<&'a str> {
        self.tasks_endpoint
    }

    /// Whether any `VOICE_BUTTON` is present.
    #[must_use]
    pub fn voice_input(&self) -> bool {
        self.voice_input
    }

    /// Whether the task fetch helper is needed.
    #[must_use]
    pub fn fetches_tasks(&self) -> bool {
        self.tasks_endpoint.is_some()
    }

    /// Permissions implied by the detected features, without duplicates.
    #[must_use]
    pub fn permissions(&self) -> Vec<Permission> {
        let mut permissions = Vec::new();
        if self.fetches_tasks() {
            permissions.push(Permission::Internet);
        }
        if self.voice_input {
            permissions.push(Permission::AudioRecord);
        }
        permissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{WidgetId, WidgetProps};

    fn widget(kind: WidgetKind, endpoint: Option<&str>) -> Widget {
        let props = WidgetProps {
            api_endpoint: endpoint.map(str::to_string),
            ..WidgetProps::at(0.0, 0.0, 10.0, 10.0)
        };
        Widget::new(WidgetId::new(kind.as_str()), kind, "w", props)
    }

    #[test]
    fn test_empty_scene_needs_nothing() {
        let features = SceneFeatures::scan(&[]);
        assert!(!features.fetches_tasks());
        assert!(!features.voice_input());
        assert!(features.permissions().is_empty());
    }

    #[test]
    fn test_first_task_list_wins() {
        let widgets = vec![
            widget(WidgetKind::Text, None),
            widget(WidgetKind::TodoList, Some("https://a.test")),
            widget(WidgetKind::TodoList, Some("https://b.test")),
        ];
        let features = SceneFeatures::scan(&widgets);
        assert_eq!(features.tasks_endpoint(), Some("https://a.test"));
        assert_eq!(features.permissions(), vec![Permission::Internet]);
    }

    #[test]
    fn test_task_list_without_endpoint_uses_default() {
        let widgets = vec![widget(WidgetKind::TodoList, None)];
        let features = SceneFeatures::scan(&widgets);
        assert_eq!(features.tasks_endpoint(), Some(crate::DEFAULT_TASKS_ENDPOINT));
        assert!(!features.voice_input());
    }

    #[test]
    fn test_both_permissions_without_duplicates() {
        let widgets = vec![
            widget(WidgetKind::VoiceButton, None),
            widget(WidgetKind::TodoList, None),
            widget(WidgetKind::VoiceButton, None),
            widget(WidgetKind::TodoList, None),
        ];
        assert_eq!(
            SceneFeatures::scan(&widgets).permissions(),
            vec![Permission::Internet, Permission::AudioRecord]
        );
    }

    #[test]
    fn test_other_kinds_contribute_nothing() {
        let widgets: Vec<_> = [
            WidgetKind::Text,
            WidgetKind::Button,
            WidgetKind::Img,
            WidgetKind::Circle,
            WidgetKind::Rect,
        ]
        .into_iter()
        .map(|k| widget(k, None))
        .collect();
        assert!(SceneFeatures::scan(&widgets).permissions().is_empty());
    }
}
