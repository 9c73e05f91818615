//! # Zepp Builder CLI
//!
//! Command-line host for the Zepp Builder generator.
//!
//! ## Usage
//!
//! ```bash
//! # Write page/index.js, app.json and README.md under ./my-app
//! zepp-builder --input layout.json generate --out my-app
//!
//! # Print a single artifact
//! zepp-builder --input layout.json print manifest
//!
//! # Show the permissions a layout needs
//! zepp-builder --input layout.json permissions
//! ```
//!
//! Without `--input` the editor's starting scene (a single clock label) is
//! used.
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `BuilderConfig` - Input path, app identity and app id
//! - `run` - Loads the scene, generates, and writes or prints artifacts

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use zepp_core::{AppId, ManifestConfig, ProjectFiles, Scene, SceneFeatures, UuidIds};

/// Default output directory for `generate`.
pub const DEFAULT_OUT_DIR: &str = "zepp-project";

/// Command-line arguments for zepp-builder.
#[derive(Debug, Clone, Parser)]
#[command(name = "zepp-builder")]
#[command(about = "Generate Zepp OS page scripts and app manifests from widget layouts")]
#[command(version)]
pub struct CliArgs {
    /// Widget layout JSON: an array of `{ type, name, props }` objects
    #[arg(long, short, env = "ZEPP_INPUT", global = true)]
    pub input: Option<PathBuf>,

    /// Fixed app id for app.json (random when omitted)
    #[arg(long, env = "ZEPP_APP_ID", global = true)]
    pub app_id: Option<u32>,

    /// App name for app.json
    #[arg(long, env = "ZEPP_APP_NAME", global = true)]
    pub app_name: Option<String>,

    /// What to do with the generated project
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write every project file under an output directory
    Generate {
        /// Output directory
        #[arg(long, short, env = "ZEPP_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
        out: PathBuf,
    },
    /// Print one artifact to stdout
    Print {
        /// Artifact to print
        #[arg(value_enum)]
        artifact: Artifact,
    },
    /// Print the permissions the layout requires, one per line
    Permissions,
}

/// A single generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Artifact {
    /// `page/index.js`
    Script,
    /// `app.json`
    Manifest,
    /// `README.md`
    Readme,
}

/// Generator configuration.
#[derive(Debug, Clone, Default)]
pub struct BuilderConfig {
    /// Layout file to import. `None` uses the editor's starting scene.
    pub input: Option<PathBuf>,
    /// App identity written to the manifest.
    pub manifest: ManifestConfig,
    /// Fixed app id. `None` draws a random one per run.
    pub app_id: Option<AppId>,
}

impl From<&CliArgs> for BuilderConfig {
    fn from(args: &CliArgs) -> Self {
        let mut manifest = ManifestConfig::default();
        if let Some(name) = &args.app_name {
            manifest.app_name.clone_from(name);
        }
        Self {
            input: args.input.clone(),
            manifest,
            app_id: args.app_id.map(AppId::new),
        }
    }
}

/// Load the scene named by `config`.
///
/// # Errors
///
/// Returns an error if the layout file cannot be read or is not a valid
/// layout.
pub fn load_scene(config: &BuilderConfig) -> anyhow::Result<Scene> {
    let mut ids = UuidIds;
    let Some(path) = &config.input else {
        tracing::debug!("No input layout, using starting scene");
        return Ok(Scene::initial(&mut ids));
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout {}", path.display()))?;
    let mut scene = Scene::new();
    let count = scene
        .import_layout(&json, &mut ids)
        .with_context(|| format!("Failed to import layout {}", path.display()))?;
    tracing::info!("Loaded {} widgets from {}", count, path.display());
    Ok(scene)
}

/// Generate every project file for `scene`.
///
/// # Errors
///
/// Returns an error if the manifest cannot be serialized.
pub fn generate(scene: &Scene, config: &BuilderConfig) -> anyhow::Result<ProjectFiles> {
    let app_id = config.app_id.unwrap_or_else(AppId::random);
    Ok(ProjectFiles::generate(scene, &config.manifest, app_id)?)
}

/// Write `project` under `out_dir`, creating directories as needed.
///
/// Returns the written paths.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be written.
pub fn write_project(project: &ProjectFiles, out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (relative, contents) in project.files() {
        let path = out_dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Run one CLI invocation, printing to `out`.
///
/// # Errors
///
/// Returns an error if loading, generation, or output fails.
pub fn run(args: &CliArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let config = BuilderConfig::from(args);
    let scene = load_scene(&config)?;

    match &args.command {
        Command::Generate { out: out_dir } => {
            let project = generate(&scene, &config)?;
            let written = write_project(&project, out_dir)?;
            for path in written {
                writeln!(out, "{}", path.display())?;
            }
            tracing::info!("Project written to {}", out_dir.display());
        }
        Command::Print { artifact } => {
            let project = generate(&scene, &config)?;
            let text = match artifact {
                Artifact::Script => &project.page_script,
                Artifact::Manifest => &project.manifest,
                Artifact::Readme => &project.readme,
            };
            write!(out, "{text}")?;
            if !text.ends_with('\n') {
                writeln!(out)?;
            }
        }
        Command::Permissions => {
            for permission in SceneFeatures::scan(scene.widgets()).permissions() {
                writeln!(out, "{permission}")?;
            }
        }
    }
    Ok(())
}
