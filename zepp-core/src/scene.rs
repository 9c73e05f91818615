//! The widget model: an ordered sequence of widgets.

use std::collections::HashSet;

use crate::layout::import_layout;
use crate::{
    BuilderError, BuilderResult, IdSource, PropsPatch, Widget, WidgetId, WidgetKind, WidgetProps,
};

/// A scene containing all widgets of one app layout.
///
/// Sequence order is paint order: later widgets draw above earlier ones.
/// Ids are unique within a scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    widgets: Vec<Widget>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene from an existing widget sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if two widgets share an id.
    pub fn with_widgets(widgets: Vec<Widget>) -> BuilderResult<Self> {
        check_unique(&widgets)?;
        Ok(Self { widgets })
    }

    /// The editor's starting scene: a single clock label.
    #[must_use]
    pub fn initial<I: IdSource + ?Sized>(ids: &mut I) -> Self {
        let props = WidgetProps {
            text: Some("10:09".to_string()),
            text_size: Some(72.0),
            color: Some("#ffffff".to_string()),
            ..WidgetProps::at(140.0, 50.0, 200.0, 80.0)
        };
        Self {
            widgets: vec![Widget::new(ids.next_id(), WidgetKind::Text, "Time", props)],
        }
    }

    /// Append a widget of `kind` with its default props.
    ///
    /// Ids already in the scene are skipped; a source that never repeats
    /// itself yields a free id within `len() + 1` draws.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::DuplicateId`] if `ids` keeps producing ids
    /// that are already taken.
    pub fn add<I: IdSource + ?Sized>(
        &mut self,
        kind: WidgetKind,
        ids: &mut I,
    ) -> BuilderResult<WidgetId> {
        let mut widget = Widget::placed(kind, ids);
        let mut draws = 1;
        while self.get(&widget.id).is_some() {
            if draws > self.widgets.len() {
                return Err(BuilderError::DuplicateId(widget.id));
            }
            tracing::debug!("Id {} already taken, drawing another", widget.id);
            widget.id = ids.next_id();
            draws += 1;
        }
        let id = widget.id.clone();
        tracing::debug!("Added {kind} widget {id}");
        self.widgets.push(widget);
        Ok(id)
    }

    /// Merge `patch` into a widget's props.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is not found.
    pub fn update(&mut self, id: &WidgetId, patch: PropsPatch) -> BuilderResult<()> {
        let widget = self
            .widgets
            .iter_mut()
            .find(|w| w.id == *id)
            .ok_or_else(|| BuilderError::WidgetNotFound(id.clone()))?;
        widget.props.apply(patch);
        tracing::debug!("Updated widget {id}");
        Ok(())
    }

    /// Remove a widget from the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is not found.
    pub fn remove(&mut self, id: &WidgetId) -> BuilderResult<Widget> {
        let index = self
            .widgets
            .iter()
            .position(|w| w.id == *id)
            .ok_or_else(|| BuilderError::WidgetNotFound(id.clone()))?;
        tracing::debug!("Removed widget {id}");
        Ok(self.widgets.remove(index))
    }

    /// Discard every widget and install `widgets` in their place.
    ///
    /// # Errors
    ///
    /// Returns an error if two of `widgets` share an id; the scene is
    /// unchanged.
    pub fn replace_with(&mut self, widgets: Vec<Widget>) -> BuilderResult<()> {
        check_unique(&widgets)?;
        tracing::debug!(
            "Replacing {} widgets with {}",
            self.widgets.len(),
            widgets.len()
        );
        self.widgets = widgets;
        Ok(())
    }

    /// Replace the scene with a generated layout.
    ///
    /// An empty layout leaves the scene as it was. Returns the number of
    /// imported widgets.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is invalid or its widgets were given
    /// clashing ids; the scene is unchanged.
    pub fn import_layout<I: IdSource + ?Sized>(
        &mut self,
        json: &str,
        ids: &mut I,
    ) -> BuilderResult<usize> {
        let widgets = import_layout(json, ids)?;
        let count = widgets.len();
        if count > 0 {
            self.replace_with(widgets)?;
        }
        Ok(count)
    }

    /// Get a widget by ID.
    #[must_use]
    pub fn get(&self, id: &WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == *id)
    }

    /// All widgets in sequence order.
    #[must_use]
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Get the number of widgets in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Check if the scene is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

fn check_unique(widgets: &[Widget]) -> BuilderResult<()> {
    let mut seen = HashSet::with_capacity(widgets.len());
    for widget in widgets {
        if !seen.insert(&widget.id) {
            return Err(BuilderError::DuplicateId(widget.id.clone()));
        }
    }
    Ok(())
}
