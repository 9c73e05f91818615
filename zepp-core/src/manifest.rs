//! `app.json` assembly.
//!
//! The manifest has a fixed shape: app identity, the permissions inferred
//! from the widget set, and a single page module plus app entry script.

use serde::Serialize;
use uuid::Uuid;

use crate::features::{Permission, SceneFeatures};
use crate::{BuilderResult, Widget};

/// Path of the generated page module, without extension.
pub const PAGE_MODULE: &str = "page/index";

/// Lower bound (inclusive) of randomly drawn app ids.
const APP_ID_MIN: u32 = 1_000_000;

/// Width of the random app id range.
const APP_ID_SPAN: u32 = 1_000_000;

/// Numeric application id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AppId(u32);

impl AppId {
    /// Use a specific app id.
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Draw an id from `[1_000_000, 2_000_000)`.
    #[must_use]
    pub fn random() -> Self {
        let bits = Uuid::new_v4().as_u128();
        // Reduced modulo a u32 span, so the narrowing cannot truncate.
        let offset = u32::try_from(bits % u128::from(APP_ID_SPAN)).unwrap_or_default();
        Self(APP_ID_MIN + offset)
    }

    /// The raw id.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static identity fields written into the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestConfig {
    /// Display name of the app.
    pub app_name: String,
    /// Monotonic version code.
    pub version_code: u32,
    /// Human-readable version.
    pub version_name: String,
    /// Icon asset path.
    pub icon: String,
    /// Vendor string.
    pub vendor: String,
    /// App description.
    pub description: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            app_name: "My AI App".to_string(),
            version_code: 1,
            version_name: "1.0.0".to_string(),
            icon: "icon.png".to_string(),
            vendor: "ZeppBuilder".to_string(),
            description: "Generated by ZeppBuilder AI".to_string(),
        }
    }
}

/// The `app.json` document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    /// App identity.
    pub config: AppConfig,
    /// Declared runtime permissions.
    pub permissions: Vec<Permission>,
    /// Module wiring per target.
    pub targets: Targets,
}

/// The `config` section of the manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Numeric app id.
    pub app_id: AppId,
    /// Display name.
    pub app_name: String,
    /// Version code and name.
    pub version: Version,
    /// Icon asset path.
    pub icon: String,
    /// Vendor string.
    pub vendor: String,
    /// App description.
    pub description: String,
}

/// App version.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Version {
    /// Monotonic version code.
    pub code: u32,
    /// Human-readable version.
    pub name: String,
}

/// The `targets` section. Only the `all` target is generated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Targets {
    /// Configuration shared by every device.
    pub all: Target,
}

/// One target's module declarations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Target {
    /// Page and app modules.
    pub module: Modules,
}

/// Page and app module declarations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Modules {
    /// Page modules.
    pub page: PageModule,
    /// App entry script.
    pub app: AppModule,
}

/// Page module list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageModule {
    /// Page paths without extension.
    pub pages: Vec<String>,
}

/// App entry script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppModule {
    /// Entry script name without extension.
    pub js: String,
}

impl Manifest {
    /// Build the manifest for a widget sequence.
    #[must_use]
    pub fn build(widgets: &[Widget], config: &ManifestConfig, app_id: AppId) -> Self {
        Self::from_features(&SceneFeatures::scan(widgets), config, app_id)
    }

    /// Build the manifest from the feature set scanned from a scene.
    #[must_use]
    pub(crate) fn from_features(
        features: &SceneFeatures<'_>,
        config: &ManifestConfig,
        app_id: AppId,
    ) -> Self {
        Self {
            config: AppConfig {
                app_id,
                app_name: config.app_name.clone(),
                version: Version {
                    code: config.version_code,
                    name: config.version_name.clone(),
                },
                icon: config.icon.clone(),
                vendor: config.vendor.clone(),
                description: config.description.clone(),
            },
            permissions: features.permissions(),
            targets: Targets {
                all: Target {
                    module: Modules {
                        page: PageModule {
                            pages: vec![PAGE_MODULE.to_string()],
                        },
                        app: AppModule {
                            js: "app".to_string(),
                        },
                    },
                },
            },
        }
    }

    /// Render as pretty-printed JSON with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> BuilderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
