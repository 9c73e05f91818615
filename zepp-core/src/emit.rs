//! Per-type emitters.
//!
//! Each emitter turns one widget into a `hmUI.createWidget(...)` call for
//! the page's `build()` method. Emitters are pure and never validate their
//! input; geometry is trusted to be present.
//!
//! | Widget         | Native widget  | Defaults                                        |
//! |----------------|----------------|-------------------------------------------------|
//! | `TEXT`         | `TEXT`         | size 36, color `0xffffff`                       |
//! | `BUTTON`       | `BUTTON`       | size 30, `0x262626`/`0x1a1a1a`, radius 12       |
//! | `CIRCLE`       | `CIRCLE`       | color `0xff0000`                                |
//! | `RECT`         | `FILL_RECT`    | color `0xff0000`, radius 0                      |
//! | `VOICE_BUTTON` | `BUTTON`       | `0xef4444`, pressed `0x991b1b`, radius `w / 2`  |
//! | `TODO_LIST`    | `SCROLL_LIST`  | endpoint [`crate::DEFAULT_TASKS_ENDPOINT`]      |
//! | `IMG`          | -              | unsupported                                     |

use crate::encode;
use crate::{UnsupportedWidget, Widget, WidgetKind, WidgetProps};

/// Indentation of statements inside `build()`.
const STMT_INDENT: &str = "    ";

/// Indentation of properties inside a `createWidget` options object.
const PROP_INDENT: &str = "      ";

/// Emit the construction code for one widget.
///
/// # Errors
///
/// Returns [`UnsupportedWidget`] for variants with no emission rule
/// (currently only `IMG`).
pub fn emit(widget: &Widget) -> Result<String, UnsupportedWidget> {
    let p = &widget.props;
    let code = match widget.kind {
        WidgetKind::Text => text(p),
        WidgetKind::Button => button(&widget.name, p),
        WidgetKind::Circle => circle(p),
        WidgetKind::Rect => rect(p),
        WidgetKind::VoiceButton => voice_button(p),
        WidgetKind::TodoList => todo_list(p),
        WidgetKind::Img => {
            return Err(UnsupportedWidget {
                id: widget.id.clone(),
                kind: widget.kind,
            })
        }
    };
    Ok(code)
}

/// Render `hmUI.createWidget(hmUI.widget.<native>, { ... });`.
fn create_widget(native: &str, props: &[(&str, String)]) -> String {
    let body = props
        .iter()
        .map(|(key, value)| format!("{PROP_INDENT}{key}: {value}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{STMT_INDENT}hmUI.createWidget(hmUI.widget.{native}, {{\n{body}\n{STMT_INDENT}}});")
}

/// An arrow function whose body is the given statements.
fn handler(params: &str, statements: &[String]) -> String {
    let body: String = statements
        .iter()
        .map(|s| format!("{PROP_INDENT}  {s}\n"))
        .collect();
    format!("({params}) => {{\n{body}{PROP_INDENT}}}")
}

fn geometry(p: &WidgetProps) -> Vec<(&'static str, String)> {
    vec![
        ("x", encode::number(p.x)),
        ("y", encode::number(p.y)),
        ("w", encode::number(p.w)),
        ("h", encode::number(p.h)),
    ]
}

fn label(p: &WidgetProps) -> String {
    encode::js_string(p.text.as_deref().unwrap_or_default())
}

fn text(p: &WidgetProps) -> String {
    let mut props = geometry(p);
    props.extend([
        ("text", label(p)),
        ("text_size", encode::number(encode::number_or(p.text_size, 36.0))),
        ("color", encode::color_or(p.color.as_deref(), "0xffffff")),
        ("align_h", "hmUI.align.CENTER_H".to_string()),
        ("align_v", "hmUI.align.CENTER_V".to_string()),
    ]);
    create_widget("TEXT", &props)
}

fn button(name: &str, p: &WidgetProps) -> String {
    let log = format!(
        "console.log({});",
        encode::js_string(&format!("Button {name} clicked"))
    );
    let mut props = geometry(p);
    props.extend([
        ("text", label(p)),
        ("text_size", encode::number(encode::number_or(p.text_size, 30.0))),
        (
            "normal_color",
            encode::color_or(p.normal_color.as_deref(), "0x262626"),
        ),
        (
            "press_color",
            encode::color_or(p.press_color.as_deref(), "0x1a1a1a"),
        ),
        ("radius", encode::number(encode::number_or(p.radius, 12.0))),
        ("click_func", handler("", &[log])),
    ]);
    create_widget("BUTTON", &props)
}

fn circle(p: &WidgetProps) -> String {
    let (center_x, center_y, radius) = encode::circle_geometry(p);
    create_widget(
        "CIRCLE",
        &[
            ("center_x", encode::number(center_x)),
            ("center_y", encode::number(center_y)),
            ("radius", encode::number(radius)),
            ("color", encode::color_or(p.color.as_deref(), "0xff0000")),
        ],
    )
}

fn rect(p: &WidgetProps) -> String {
    let mut props = geometry(p);
    props.extend([
        ("color", encode::color_or(p.color.as_deref(), "0xff0000")),
        ("radius", encode::number(encode::number_or(p.radius, 0.0))),
    ]);
    create_widget("FILL_RECT", &props)
}

fn voice_button(p: &WidgetProps) -> String {
    let mut props = geometry(p);
    props.extend([
        ("text", encode::js_string("MIC")),
        ("text_size", "24".to_string()),
        (
            "normal_color",
            encode::color_or(p.normal_color.as_deref(), "0xef4444"),
        ),
        ("press_color", "0x991b1b".to_string()),
        ("radius", encode::number(p.w / 2.0)),
        (
            "click_func",
            handler("", &["this.startVoiceInput();".to_string()]),
        ),
    ]);
    create_widget("BUTTON", &props)
}

fn todo_list(p: &WidgetProps) -> String {
    // One static row template; rows are bound to `this.state.tasks`.
    let item_config = [
        "[",
        "        {",
        "          type_id: 1,",
        "          item_bg_color: 0x333333,",
        "          item_bg_radius: 10,",
        "          text_view: [{ x: 50, y: 0, w: 200, h: 50, key: 'name', color: 0xffffff, text_size: 24 }],",
        "          text_view_count: 1,",
        "          image_view: [{ x: 10, y: 10, w: 30, h: 30, key: 'icon' }],",
        "          image_view_count: 1",
        "        }",
        "      ]",
    ]
    .join("\n");

    let mut props = geometry(p);
    props.extend([
        ("item_space", "10".to_string()),
        ("item_config", item_config),
        ("item_config_count", "1".to_string()),
        (
            "data_array",
            "this.state.tasks.length ? this.state.tasks : [{ name: 'Connect to API', icon: '' }]"
                .to_string(),
        ),
        (
            "data_count",
            "this.state.tasks.length || 1".to_string(),
        ),
        (
            "item_click_func",
            handler(
                "list, index",
                &["console.log(\"Task clicked\", index);".to_string()],
            ),
        ),
    ]);

    format!(
        "{STMT_INDENT}/*\n{STMT_INDENT} * TODO LIST WIDGET\n{STMT_INDENT} * API: {}\n{STMT_INDENT} */\n{}",
        encode::comment_text(p.tasks_endpoint()),
        create_widget("SCROLL_LIST", &props)
    )
}
