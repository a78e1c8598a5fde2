//! swiftserve-scaffold CLI entrypoint
//! Parses command-line arguments and dispatches to the scaffolding core.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::{Path, PathBuf};
use swiftserve_scaffold::{
    core::Config,
    generation::{generate_service_name, sanitizers::sanitize_app_name, service_metadata},
    infrastructure::{
        ProcessCommandExecutor,
        openapi::{extract_models, load_async},
    },
    preconditions::{Precondition, ProjectGate},
};

// External imports (alphabetized)
use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swiftserve-scaffold")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration overriding marker, descriptor and toolchain settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Check project preconditions for a target directory
    Check {
        /// Target project directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Preconditions to check, in order
        #[arg(long = "require", value_enum, required = true)]
        require: Vec<Gate>,
    },
    /// Load a Swagger/OpenAPI document and print the Swift shape of its models
    Inspect {
        /// Path or URL to the document (YAML or JSON)
        #[arg(long)]
        spec_path: String,
        /// Require this directory to be an initialized project first
        #[arg(long)]
        project_dir: Option<PathBuf>,
    },
    /// Generate a display name and catalog entry for a provisioned service
    ServiceName {
        /// Application name
        #[arg(long)]
        app: String,
        /// Canonical service kind, e.g. cloudant or redis
        #[arg(long)]
        service: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Gate {
    InProject,
    NotInProject,
    EmptyDirectory,
    Crud,
    Toolchain,
}

impl From<Gate> for Precondition {
    fn from(gate: Gate) -> Self {
        match gate {
            Gate::InProject => Precondition::InProject,
            Gate::NotInProject => Precondition::NotInProject,
            Gate::EmptyDirectory => Precondition::EmptyDirectory,
            Gate::Crud => Precondition::ProjectIsCrud,
            Gate::Toolchain => Precondition::RequiredToolInstalled,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).await?;

    match &cli.command {
        Commands::Check { dir, require } => run_check(dir, require, config).await?,
        Commands::Inspect {
            spec_path,
            project_dir,
        } => run_inspect(spec_path, project_dir.as_deref(), config).await?,
        Commands::ServiceName { app, service } => run_service_name(app, service),
    }
    Ok(())
}

async fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            Config::from_file(path)
                .await
                .context("Failed to load configuration")
        }
        None => Ok(Config::default()),
    }
}

/// Runtime handler for the check command
async fn run_check(dir: &Path, require: &[Gate], config: Config) -> anyhow::Result<()> {
    let preconditions: Vec<Precondition> = require.iter().copied().map(Into::into).collect();
    info!(dir = %dir.display(), ?preconditions, "Checking preconditions");

    let gate = ProjectGate::new(dir, config);
    gate.check_all(&preconditions, &ProcessCommandExecutor::new())
        .await
        .map_err(|e| {
            error!("Precondition failed: {}", e);
            anyhow::anyhow!("Precondition failed: {}", e)
        })?;

    println!("✅ All {} precondition(s) hold", preconditions.len());
    Ok(())
}

/// Runtime handler for the inspect command
async fn run_inspect(
    spec_path: &str,
    project_dir: Option<&Path>,
    config: Config,
) -> anyhow::Result<()> {
    // Gates resolve before any loading work starts
    if let Some(dir) = project_dir {
        ProjectGate::new(dir, config)
            .ensure_in_project()
            .context("Refusing to inspect outside a project")?;
    }

    info!(source = %spec_path, "Loading specification");
    let doc = load_async(spec_path, None)
        .await
        .context("Failed to load specification")?;
    let models = extract_models(&doc).context("Failed to read model definitions")?;

    if models.is_empty() {
        println!("No models defined in {}.", doc.origin());
        return Ok(());
    }

    for model in &models {
        println!("{}", model.name);
        for field in &model.fields {
            let default = field
                .default_literal_text()
                .with_context(|| format!("Invalid default for {}.{}", model.name, field.name))?;
            match default {
                Some(literal) => {
                    println!("  var {}: {} = {}", field.name, field.type_name(), literal)
                }
                None => println!("  var {}: {}", field.name, field.type_name()),
            }
        }
    }
    println!("\n✅ Found {} model(s)", models.len());
    Ok(())
}

/// Runtime handler for the service-name command
fn run_service_name(app: &str, service: &str) {
    let app = sanitize_app_name(app);
    let metadata = service_metadata(service);
    let name = generate_service_name(&app, service);

    println!("name:  {name}");
    println!("label: {}", metadata.catalog_label);
    println!("plan:  {}", metadata.default_plan);
}
