//! Generation Integration Tests
//!
//! Exercises the full scene-to-project flow:
//! - Determinism of both artifacts
//! - Permission inference as widgets are added
//! - Geometry and default substitution in the page script
//! - Re-import of an equivalent layout

use proptest::prelude::*;
use zepp_core::{
    AppId, IdSource, ManifestConfig, ProjectFiles, Scene, SequentialIds, UuidIds, Widget, WidgetId,
    WidgetKind, WidgetProps,
};

/// Generate with a fixed app id so manifests compare byte for byte.
fn generate(scene: &Scene) -> ProjectFiles {
    ProjectFiles::generate(scene, &ManifestConfig::default(), AppId::new(1_234_567))
        .expect("generation succeeds")
}

fn permissions(scene: &Scene) -> Vec<String> {
    let manifest: serde_json::Value =
        serde_json::from_str(&generate(scene).manifest).expect("manifest is JSON");
    manifest["permissions"]
        .as_array()
        .expect("permissions array")
        .iter()
        .map(|p| p.as_str().expect("string").to_string())
        .collect()
}

fn widget(kind: WidgetKind, props: WidgetProps) -> Widget {
    Widget::new(WidgetId::new(kind.as_str()), kind, "Fixed", props)
}

// ============================================================================
// Emptiness and determinism
// ============================================================================

#[test]
fn test_empty_scene_produces_valid_artifacts() {
    let project = generate(&Scene::new());

    assert!(project.page_script.contains("  build() {\n  },\n"));
    assert!(project.page_script.contains("  onDestroy() {"));
    assert!(!project.page_script.contains("hmUI.createWidget"));
    assert!(!project.page_script.contains("fetchTasks"));
    assert!(!project.page_script.contains("startVoiceInput"));

    let manifest: serde_json::Value =
        serde_json::from_str(&project.manifest).expect("manifest is JSON");
    assert_eq!(manifest["permissions"], serde_json::json!([]));
}

#[test]
fn test_repeated_generation_is_identical() {
    let mut ids = SequentialIds::new();
    let mut scene = Scene::initial(&mut ids);
    for kind in WidgetKind::ALL {
        scene.add(kind, &mut ids).expect("add");
    }

    let first = generate(&scene);
    let second = generate(&scene);
    assert_eq!(first, second);
    assert_eq!(first.skipped.len(), 1);
}

// ============================================================================
// Permission inference
// ============================================================================

#[test]
fn test_permissions_grow_with_widget_kinds() {
    let mut ids = UuidIds;
    let mut scene = Scene::new();
    scene.add(WidgetKind::Text, &mut ids).expect("add");
    scene.add(WidgetKind::Circle, &mut ids).expect("add");
    assert!(permissions(&scene).is_empty());

    let mut with_list = scene.clone();
    with_list.add(WidgetKind::TodoList, &mut ids).expect("add");
    assert_eq!(permissions(&with_list), vec!["internet"]);

    let mut with_voice = scene.clone();
    with_voice.add(WidgetKind::VoiceButton, &mut ids).expect("add");
    assert_eq!(permissions(&with_voice), vec!["audio_record"]);

    with_list.add(WidgetKind::VoiceButton, &mut ids).expect("add");
    with_list.add(WidgetKind::TodoList, &mut ids).expect("add");
    with_list.add(WidgetKind::VoiceButton, &mut ids).expect("add");
    assert_eq!(permissions(&with_list), vec!["internet", "audio_record"]);
}

#[test]
fn test_removing_last_task_list_drops_internet() {
    let mut ids = SequentialIds::new();
    let mut scene = Scene::new();
    let list = scene.add(WidgetKind::TodoList, &mut ids).expect("add");
    assert_eq!(permissions(&scene), vec!["internet"]);

    scene.remove(&list).expect("remove");
    assert!(permissions(&scene).is_empty());
    assert!(!generate(&scene).page_script.contains("fetchTasks"));
}

// ============================================================================
// Emission rules through the assembled script
// ============================================================================

#[test]
fn test_circle_geometry_in_script() {
    let scene = Scene::with_widgets(vec![widget(
        WidgetKind::Circle,
        WidgetProps::at(100.0, 100.0, 60.0, 60.0),
    )])
    .expect("scene");
    let script = generate(&scene).page_script;

    assert!(script.contains("center_x: 130,"));
    assert!(script.contains("center_y: 130,"));
    assert!(script.contains("radius: 30,"));
}

#[test]
fn test_defaults_in_script() {
    let scene = Scene::with_widgets(vec![
        widget(WidgetKind::Text, WidgetProps::at(0.0, 0.0, 100.0, 40.0)),
        widget(WidgetKind::Button, WidgetProps::at(0.0, 50.0, 100.0, 40.0)),
    ])
    .expect("scene");
    let script = generate(&scene).page_script;

    assert!(script.contains("color: 0xffffff,"));
    assert!(script.contains("text_size: 36,"));
    assert!(script.contains("radius: 12,"));
}

#[test]
fn test_endpoint_propagation() {
    let props = WidgetProps {
        api_endpoint: Some("https://example.test/tasks".to_string()),
        ..WidgetProps::at(90.0, 140.0, 300.0, 200.0)
    };
    let scene = Scene::with_widgets(vec![widget(WidgetKind::TodoList, props)]).expect("scene");
    let project = generate(&scene);

    assert!(project
        .page_script
        .contains("const url = \"https://example.test/tasks\";"));
    assert!(project.page_script.contains("    this.fetchTasks();\n"));
    assert!(project.manifest.contains("\"internet\""));
}

// ============================================================================
// Round-trip stability
// ============================================================================

const LAYOUT: &str = r##"[
    { "type": "TEXT", "name": "Clock", "props": { "x": 140, "y": 50, "w": 200, "h": 80, "text": "10:09", "text_size": 72 } },
    { "type": "TODO_LIST", "name": "Tasks", "props": { "x": 90, "y": 140, "w": 300, "h": 200 } },
    { "type": "VOICE_BUTTON", "name": "Mic", "props": { "x": 208, "y": 350, "w": 64, "h": 64, "normal_color": "#22c55e" } }
]"##;

#[test]
fn test_reimport_produces_identical_script() {
    let mut first = Scene::new();
    first.import_layout(LAYOUT, &mut UuidIds).expect("import");
    let mut second = Scene::new();
    second.import_layout(LAYOUT, &mut UuidIds).expect("import");

    assert_ne!(first.widgets()[0].id, second.widgets()[0].id);

    let a = ProjectFiles::generate(&first, &ManifestConfig::default(), AppId::random())
        .expect("generate");
    let b = ProjectFiles::generate(&second, &ManifestConfig::default(), AppId::random())
        .expect("generate");
    assert_eq!(a.page_script, b.page_script);
    assert_eq!(a.readme, b.readme);

    let mut ma: serde_json::Value = serde_json::from_str(&a.manifest).expect("json");
    let mut mb: serde_json::Value = serde_json::from_str(&b.manifest).expect("json");
    ma["config"]["appId"] = serde_json::Value::Null;
    mb["config"]["appId"] = serde_json::Value::Null;
    assert_eq!(ma, mb);
}

// ============================================================================
// Properties
// ============================================================================

fn arb_kind() -> impl Strategy<Value = WidgetKind> {
    prop::sample::select(WidgetKind::ALL.to_vec())
}

fn arb_widget() -> impl Strategy<Value = (WidgetKind, f64, f64, f64, f64)> {
    (
        arb_kind(),
        -50.0f64..500.0,
        -50.0f64..500.0,
        1.0f64..300.0,
        1.0f64..300.0,
    )
}

fn scene_from(specs: &[(WidgetKind, f64, f64, f64, f64)]) -> Scene {
    let mut ids = SequentialIds::new();
    let widgets = specs
        .iter()
        .map(|&(kind, x, y, w, h)| {
            Widget::new(ids.next_id(), kind, kind.as_str(), WidgetProps::at(x, y, w, h))
        })
        .collect();
    Scene::with_widgets(widgets).expect("sequential ids are unique")
}

proptest! {
    #[test]
    fn prop_generation_is_deterministic(
        specs in prop::collection::vec(arb_widget(), 0..12)
    ) {
        let scene = scene_from(&specs);
        prop_assert_eq!(generate(&scene), generate(&scene));
    }

    #[test]
    fn prop_permissions_match_widget_kinds(
        specs in prop::collection::vec(arb_widget(), 0..12)
    ) {
        let scene = scene_from(&specs);
        let has_list = specs.iter().any(|s| s.0 == WidgetKind::TodoList);
        let has_voice = specs.iter().any(|s| s.0 == WidgetKind::VoiceButton);

        let mut expected = Vec::new();
        if has_list {
            expected.push("internet".to_string());
        }
        if has_voice {
            expected.push("audio_record".to_string());
        }
        prop_assert_eq!(permissions(&scene), expected);

        let script = generate(&scene).page_script;
        prop_assert_eq!(script.contains("  fetchTasks() {"), has_list);
        prop_assert_eq!(script.contains("  startVoiceInput() {"), has_voice);
    }

    #[test]
    fn prop_one_call_per_supported_widget(
        specs in prop::collection::vec(arb_widget(), 0..12)
    ) {
        let scene = scene_from(&specs);
        let project = generate(&scene);
        let images = specs.iter().filter(|s| s.0 == WidgetKind::Img).count();

        prop_assert_eq!(project.skipped.len(), images);
        prop_assert_eq!(
            project.page_script.matches("hmUI.createWidget(").count(),
            specs.len() - images
        );
    }
}
