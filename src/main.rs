//! `asset-patterns` prints the normalized `assets` list of a project as JSON.
//!
//! Usage:
//!   asset-patterns [--workspace <dir>] [--config <file>] [ASSETS...]
//!
//! Without `--config`, `assets.config.json` is looked up in the workspace directory.

use std::path::PathBuf;

use anyhow::Context;
use asset_patterns::{AssetNormalizer, AssetPattern, ContainmentCheck, FsProbe, ProjectConfig};
use clap::Parser;
use tracing::info;

/// Normalize project asset declarations into explicit copy rules.
#[derive(Parser, Debug)]
#[command(name = "asset-patterns", version, about)]
struct Cli {
    /// Workspace root every asset path is resolved against.
    #[arg(short = 'w', long = "workspace", default_value = ".")]
    workspace: PathBuf,

    /// Project config file (defaults to `<workspace>/assets.config.json`).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Project root relative to the workspace, overriding the config.
    #[arg(long = "project-root")]
    project_root: Option<String>,

    /// Source root relative to the workspace, overriding the config.
    #[arg(long = "source-root")]
    source_root: Option<String>,

    /// Require asset paths to sit below the source root on a segment boundary.
    #[arg(long = "segment-containment")]
    segment_containment: bool,

    /// Extra shorthand asset paths appended to the configured list.
    assets: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let workspace = std::path::absolute(&cli.workspace)
        .with_context(|| format!("failed to resolve workspace {}", cli.workspace.display()))?;

    let mut config = match &cli.config {
        Some(path) => {
            ProjectConfig::load(path).with_context(|| "failed to load project config")?
        }
        None => ProjectConfig::discover(&workspace),
    };
    if let Some(project_root) = cli.project_root {
        config.root = project_root;
    }
    if let Some(source_root) = cli.source_root {
        config.source_root = Some(source_root);
    }
    if cli.segment_containment {
        config.containment = ContainmentCheck::PathSegments;
    }
    config
        .assets
        .extend(cli.assets.into_iter().map(AssetPattern::from));

    let workspace_root = workspace.to_string_lossy().replace('\\', "/");
    let layout = config.layout(workspace_root);
    info!(
        workspace_root = %layout.workspace_root,
        source_root = %layout.resolved_source_root(),
        "normalizing {} asset pattern(s)",
        config.assets.len()
    );

    let normalized = AssetNormalizer::new(&layout, &FsProbe)
        .with_containment(config.containment)
        .normalize(&config.assets)?;

    println!("{}", serde_json::to_string_pretty(&normalized)?);
    Ok(())
}
