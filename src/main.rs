//! kimport - import YAML manifests into Kubernetes and review the results
//!
//! Reads one or more multi-document YAML files, creates every resource they
//! describe in one batch, and shows the outcome of each creation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kimport::cli::{self, ConfigSubcommand};
use kimport::config::ConfigLoader;
use kimport::import::{self, KubeResourceCreator, ResourceCreator};
use kimport::models::load_manifests;
use std::path::PathBuf;
use std::sync::Arc;

/// kimport - import YAML manifests into Kubernetes and review the results
#[derive(Parser, Debug)]
#[command(name = "kimport")]
#[command(about = "Import YAML manifests into Kubernetes and review creation results", long_about = None)]
struct Args {
    /// Manifest file to import; repeatable, `-` reads stdin
    #[arg(long, short = 'f', value_name = "FILE")]
    filename: Vec<PathBuf>,

    /// Namespace for resources that don't set one
    #[arg(long, short = 'n')]
    namespace: Option<String>,

    /// Kubeconfig context to use instead of the current one
    #[arg(long)]
    context: Option<String>,

    /// Validate creation server-side without persisting anything
    #[arg(long)]
    dry_run: bool,

    /// Print a plain-text report instead of starting the TUI
    #[arg(long)]
    no_tui: bool,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    /// Print version information
    #[arg(long)]
    version: bool,

    /// Configuration subcommand
    #[command(subcommand)]
    command: Option<Command>,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        cli::display_version();
        return Ok(());
    }

    if let Some(Command::Config { subcommand }) = args.command {
        return cli::handle_config_command(subcommand);
    }

    let log_file = cli::init_logging(args.debug);
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    if args.filename.is_empty() {
        anyhow::bail!("No manifests given; pass one or more -f FILE (use -f - for stdin)");
    }

    let resources = load_manifests(&args.filename).context("Failed to load manifests")?;
    tracing::debug!(
        "Loaded {} resources from {} sources",
        resources.len(),
        args.filename.len()
    );

    let context_name = args.context.clone().or_else(kimport::kube::current_context);
    let mut config = ConfigLoader::load(context_name.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Failed to load configuration: {}, using defaults", e);
        ConfigLoader::load_defaults()
    });
    if args.dry_run {
        config.dry_run = true;
    }

    tracing::debug!("Initializing Kubernetes client");
    let connection = kimport::kube::connect(args.context.as_deref()).await?;
    let namespace = kimport::kube::resolve_namespace(
        args.namespace.as_deref(),
        &config.default_namespace,
        &connection.default_namespace,
    );
    tracing::info!(
        "Connected to context '{}', default namespace '{}'",
        connection.context,
        namespace
    );

    let creator: Arc<dyn ResourceCreator> = Arc::new(
        KubeResourceCreator::new(connection.client.clone(), namespace.clone())
            .with_dry_run(config.dry_run)
            .with_field_manager(config.field_manager.clone()),
    );

    if args.no_tui || !cfg!(feature = "tui") {
        return run_headless(creator, resources).await;
    }

    #[cfg(feature = "tui")]
    {
        let mut app = kimport::tui::App::new(
            resources,
            args.filename.clone(),
            connection.context,
            namespace,
            config,
            kimport::tui::Theme::default(),
        );
        app.set_creator(creator);
        kimport::tui::run_tui(app).await?;
    }

    Ok(())
}

/// Import without a UI and print the report; exits 1 when any creation failed
async fn run_headless(
    creator: Arc<dyn ResourceCreator>,
    resources: Vec<kimport::models::ImportResource>,
) -> Result<()> {
    let results = import::run_import(creator, resources)
        .await
        .context("Import did not complete")?;
    print!("{}", kimport::render_report(&results));

    if results.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}
