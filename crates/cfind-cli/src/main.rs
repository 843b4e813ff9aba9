//! CLI entry point - the composition root.
//!
//! This is the ONLY place where adapters are wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to the finder.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cfind_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    let mut config = CliConfig::from_cli(&cli);

    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let result = match command {
        Commands::List {
            json,
            ensure_no_id_clash,
        } => {
            config.finder.ensure_no_id_clash = ensure_no_id_clash;
            let ctx = bootstrap(config)?;
            handlers::list::execute(&ctx, json).await
        }
        Commands::Show { id, json } => {
            let ctx = bootstrap(config)?;
            handlers::show::execute(&ctx, &id, json).await
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
    Ok(())
}
