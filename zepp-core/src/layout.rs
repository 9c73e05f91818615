//! Import of generated layouts.
//!
//! The layout generator returns a JSON array of widgets without ids:
//!
//! ```json
//! [
//!   { "type": "TEXT", "name": "Clock", "props": { "x": 140, "y": 50, "w": 200, "h": 80, "text": "10:09" } },
//!   { "type": "VOICE_BUTTON", "props": { "x": 208, "y": 350, "w": 64, "h": 64 } }
//! ]
//! ```
//!
//! Every item gets a fresh id on import. Items are held to the same schema
//! as user-authored widgets; `IMG` is not part of the generator's vocabulary
//! and is rejected.

use serde::Deserialize;

use crate::{BuilderError, BuilderResult, IdSource, Widget, WidgetKind, WidgetProps};

/// One widget as produced by the layout generator.
#[derive(Debug, Clone, Deserialize)]
struct LayoutItem {
    #[serde(rename = "type")]
    kind: WidgetKind,
    #[serde(default)]
    name: Option<String>,
    props: WidgetProps,
}

/// Parse a generated layout into widgets with fresh ids.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidLayout`] if the document is not an array
/// of layout items, if any item lacks `x`, `y`, `w` or `h`, or if any item
/// uses a type the generator may not produce.
pub fn import_layout<I: IdSource + ?Sized>(json: &str, ids: &mut I) -> BuilderResult<Vec<Widget>> {
    let items: Vec<LayoutItem> =
        serde_json::from_str(json).map_err(|e| BuilderError::InvalidLayout(e.to_string()))?;

    if let Some((index, item)) = items
        .iter()
        .enumerate()
        .find(|(_, item)| item.kind == WidgetKind::Img)
    {
        return Err(BuilderError::InvalidLayout(format!(
            "item {index}: {} widgets cannot be generated",
            item.kind
        )));
    }

    let widgets: Vec<Widget> = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let name = item
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| format!("Widget {index}"));
            Widget::new(ids.next_id(), item.kind, name, item.props)
        })
        .collect();

    tracing::debug!("Imported {} widgets from layout", widgets.len());
    Ok(widgets)
}
