//! Project assembly: every generated file of a Zepp OS app.

use crate::features::SceneFeatures;
use crate::manifest::{AppId, Manifest, ManifestConfig};
use crate::script::{assemble_with, GeneratedScript, PAGE_SCRIPT_PATH};
use crate::{BuilderResult, Scene, UnsupportedWidget};

/// File path of the manifest inside a project.
pub const MANIFEST_PATH: &str = "app.json";

/// File path of the setup instructions inside a project.
pub const README_PATH: &str = "README.md";

/// Setup instructions shipped with every project.
pub const README: &str = r#"# Zepp OS AI App

Generated by ZeppBuilder AI.

## Project Structure

- `app.json`: Application configuration and permissions.
- `page/index.js`: Main application logic and UI layout.

## Setup Instructions

1. **Install Zepp OS CLI**: Ensure you have the Zeus CLI installed.
2. **Create Project**: Run `zeus create your-project-name` and select the "Empty" template.
3. **Copy Files**:
   - Replace the generated `app.json` with the one in this project.
   - Replace `page/index.js` with the file in the `page/` folder of this project.
4. **Permissions**:
   - If using Todoist, add your API token in `page/index.js`.
   - Voice features may require additional companion app setup depending on the implementation strategy.

## Build & Run

Run `zeus dev` to start the simulator.
"#;

/// The generated text artifacts of one scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFiles {
    /// Contents of `page/index.js`.
    pub page_script: String,
    /// Contents of `app.json`.
    pub manifest: String,
    /// Contents of `README.md`.
    pub readme: String,
    /// Widgets left out of the page script.
    pub skipped: Vec<UnsupportedWidget>,
}

impl ProjectFiles {
    /// Generate every project file for `scene`.
    ///
    /// Generation never mutates the scene; the same scene, config and app
    /// id always produce byte-identical files.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be serialized.
    pub fn generate(scene: &Scene, config: &ManifestConfig, app_id: AppId) -> BuilderResult<Self> {
        let widgets = scene.widgets();
        let features = SceneFeatures::scan(widgets);

        let GeneratedScript { source, skipped } = assemble_with(widgets, &features);
        let manifest = Manifest::from_features(&features, config, app_id).to_json()?;

        tracing::debug!(
            %app_id,
            widgets = widgets.len(),
            permissions = ?features.permissions(),
            "Generated project files"
        );

        Ok(Self {
            page_script: source,
            manifest,
            readme: README.to_string(),
            skipped,
        })
    }

    /// Every file as `(relative path, contents)`.
    #[must_use]
    pub fn files(&self) -> [(&'static str, &str); 3] {
        [
            (PAGE_SCRIPT_PATH, self.page_script.as_str()),
            (MANIFEST_PATH, self.manifest.as_str()),
            (README_PATH, self.readme.as_str()),
        ]
    }
}
