//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to `AppCore`.
//!
//! All CLI code uses `CliContext` for dependency access - no direct
//! database or pool access outside of bootstrap.
//!
//! Commands that never touch the database (paths, template, manifest
//! check) skip bootstrap entirely, so they cannot create a database file
//! as a side effect. The serve command bootstraps inside the server.

use clap::Parser;

use provost_cli::handlers::import::ImportArgs;
use provost_cli::{
    Cli, CliConfig, CliContext, Commands, ManifestCommand, bootstrap, error, handlers,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        std::process::exit(error::exit_code_of(&err));
    }
}

async fn run() -> anyhow::Result<()> {
    // Load environment variables before parsing: clap reads PROVOST_DB
    // from the environment
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        provost_cli::Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Paths => {
            handlers::paths::execute(cli.db.as_deref())?;
        }
        Commands::Template { output } => {
            handlers::template::execute(&output)?;
        }
        Commands::Manifest { command } => match command {
            ManifestCommand::Check { files } => handlers::manifest::execute(&files)?,
        },
        Commands::Serve {
            host,
            port,
            allow_origins,
        } => {
            handlers::serve::execute(cli.db.as_deref(), host, port, allow_origins).await?;
        }
        Commands::Import {
            files,
            preview,
            force,
            department,
            curriculum,
        } => {
            let ctx = context(cli.db.as_deref()).await?;
            handlers::import::execute(
                &ctx,
                ImportArgs {
                    files,
                    preview,
                    force,
                    department,
                    curriculum,
                },
            )
            .await?;
        }
        Commands::Export {
            curriculum_code,
            output,
        } => {
            let ctx = context(cli.db.as_deref()).await?;
            handlers::export::execute(&ctx, &curriculum_code, &output).await?;
        }
        Commands::Curriculum { command } => {
            let ctx = context(cli.db.as_deref()).await?;
            handlers::curriculum::execute(&ctx, command).await?;
        }
        Commands::User { command } => {
            let ctx = context(cli.db.as_deref()).await?;
            handlers::user::execute(&ctx, command).await?;
        }
        Commands::Seed {
            professors_per_department,
            seed,
        } => {
            let ctx = context(cli.db.as_deref()).await?;
            handlers::seed::execute(&ctx, professors_per_department, seed).await?;
        }
    }

    Ok(())
}

/// Bootstrap the CLI context (composition root).
async fn context(db_override: Option<&str>) -> anyhow::Result<CliContext> {
    let config = CliConfig::with_defaults(db_override)?;
    bootstrap(config).await
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
