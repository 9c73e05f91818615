//! `page/index.js` assembly.
//!
//! The page is a single `Page({ ... })` declaration. `build()` holds the
//! emitted widget calls in sequence order; helper methods follow
//! `onDestroy()` and are included only when a widget needs them.

use crate::emit::emit;
use crate::encode;
use crate::features::SceneFeatures;
use crate::{UnsupportedWidget, Widget, CANVAS_SIZE};

/// File path of the page script inside a project.
pub const PAGE_SCRIPT_PATH: &str = "page/index.js";

/// Placeholder the user replaces with their task service token.
pub const API_TOKEN_PLACEHOLDER: &str = "YOUR_TODOIST_API_TOKEN";

/// A generated page script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript {
    /// The script text.
    pub source: String,
    /// Widgets left out because they have no emission rule.
    pub skipped: Vec<UnsupportedWidget>,
}

/// Assemble the page script for a widget sequence.
#[must_use]
pub fn assemble(widgets: &[Widget]) -> GeneratedScript {
    assemble_with(widgets, &SceneFeatures::scan(widgets))
}

/// Assemble the page script using the feature set scanned from `widgets`.
#[must_use]
pub(crate) fn assemble_with(widgets: &[Widget], features: &SceneFeatures<'_>) -> GeneratedScript {
    let mut statements = Vec::with_capacity(widgets.len() + 1);
    let mut skipped = Vec::new();

    for widget in widgets {
        match emit(widget) {
            Ok(code) => statements.push(code),
            Err(unsupported) => {
                tracing::warn!("Skipping widget: {unsupported}");
                skipped.push(unsupported);
            }
        }
    }
    if features.fetches_tasks() {
        statements.push("    this.fetchTasks();".to_string());
    }

    let mut source = header();
    source.push_str("Page({\n  state: {\n    tasks: []\n  },\n\n");

    if statements.is_empty() {
        source.push_str("  build() {\n  },\n");
    } else {
        source.push_str(&format!(
            "  build() {{\n{}\n  }},\n",
            statements.join("\n\n")
        ));
    }
    source.push_str("\n  onDestroy() {\n    // Cleanup\n  },\n");

    if let Some(endpoint) = features.tasks_endpoint() {
        source.push_str(&fetch_helper(endpoint));
    }
    if features.voice_input() {
        source.push_str(VOICE_HELPER);
    }
    source.push_str("});\n");

    tracing::debug!(
        widgets = widgets.len(),
        skipped = skipped.len(),
        bytes = source.len(),
        "Assembled page script"
    );

    GeneratedScript { source, skipped }
}

fn header() -> String {
    let size = encode::number(CANVAS_SIZE);
    format!(
        "/*\n * Generated by ZeppBuilder AI\n * Target Device: Amazfit Balance ({size}x{size})\n * File: {PAGE_SCRIPT_PATH}\n */\n\n"
    )
}

fn fetch_helper(endpoint: &str) -> String {
    format!(
        r#"
  // Fetch tasks (requires the 'internet' permission in app.json)
  fetchTasks() {{
    const url = {url};
    const token = "{API_TOKEN_PLACEHOLDER}";

    fetch({{
      url: url,
      method: 'GET',
      headers: {{
        'Authorization': 'Bearer ' + token
      }}
    }}).then((response) => {{
      // Map response.body into this.state.tasks, then rebuild the list.
    }}).catch((e) => console.log('Fetch error', e));
  }},
"#,
        url = encode::js_string(endpoint)
    )
}

const VOICE_HELPER: &str = r#"
  // Voice input handler (requires the 'audio_record' permission in app.json)
  startVoiceInput() {
    console.log("Starting voice input...");
    hmUI.showToast({ text: "Listening..." });
  },
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{WidgetId, WidgetKind, WidgetProps};

    fn widget(id: &str, kind: WidgetKind) -> Widget {
        Widget::new(
            WidgetId::new(id),
            kind,
            id,
            WidgetProps::at(10.0, 20.0, 60.0, 60.0),
        )
    }

    #[test]
    fn test_empty_scene_script() {
        let script = assemble(&[]);
        assert!(script.skipped.is_empty());
        assert_eq!(
            script.source,
            "/*\n * Generated by ZeppBuilder AI\n * Target Device: Amazfit Balance (480x480)\n * File: page/index.js\n */\n\n\
             Page({\n  state: {\n    tasks: []\n  },\n\n  build() {\n  },\n\n  onDestroy() {\n    // Cleanup\n  },\n});\n"
        );
    }

    #[test]
    fn test_widgets_emitted_in_sequence_order() {
        let widgets = vec![
            widget("a", WidgetKind::Rect),
            widget("b", WidgetKind::Circle),
            widget("c", WidgetKind::Text),
        ];
        let source = assemble(&widgets).source;

        let rect = source.find("hmUI.widget.FILL_RECT").expect("rect");
        let circle = source.find("hmUI.widget.CIRCLE").expect("circle");
        let text = source.find("hmUI.widget.TEXT").expect("text");
        assert!(rect < circle && circle < text);
        assert!(!source.contains("fetchTasks"));
        assert!(!source.contains("startVoiceInput"));
    }

    #[test]
    fn test_fetch_helper_uses_first_endpoint() {
        let mut first = widget("a", WidgetKind::TodoList);
        first.props.api_endpoint = Some("https://example.test/tasks".to_string());
        let mut second = widget("b", WidgetKind::TodoList);
        second.props.api_endpoint = Some("https://other.test/tasks".to_string());

        let source = assemble(&[first, second]).source;
        assert!(source.contains("const url = \"https://example.test/tasks\";"));
        assert!(!source.contains("const url = \"https://other.test/tasks\";"));
        assert_eq!(source.matches("this.fetchTasks();").count(), 1);
        assert_eq!(source.matches("  fetchTasks() {").count(), 1);
    }

    #[test]
    fn test_fetch_call_closes_build() {
        let source = assemble(&[widget("a", WidgetKind::TodoList)]).source;
        assert!(source.contains("    });\n\n    this.fetchTasks();\n  },\n"));
    }

    #[test]
    fn test_voice_helper_included_once() {
        let widgets = vec![
            widget("a", WidgetKind::VoiceButton),
            widget("b", WidgetKind::VoiceButton),
        ];
        let source = assemble(&widgets).source;
        assert_eq!(source.matches("  startVoiceInput() {").count(), 1);
        assert!(source.contains("hmUI.showToast({ text: \"Listening...\" });"));
        assert!(!source.contains("fetchTasks"));
        assert!(source.ends_with("  },\n});\n"));
    }

    #[test]
    fn test_unsupported_widgets_are_reported_not_emitted() {
        let widgets = vec![widget("img", WidgetKind::Img), widget("t", WidgetKind::Text)];
        let script = assemble(&widgets);
        assert_eq!(script.skipped.len(), 1);
        assert_eq!(script.skipped[0].id.as_str(), "img");
        assert_eq!(script.source.matches("hmUI.createWidget").count(), 1);
    }
}
