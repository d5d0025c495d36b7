use anyhow::Context;
use clap::Parser;
use ins_config::InsightConfig;
use ins_core::errors::CoreError;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("ins error: {error:#}");
        std::process::exit(exit_code(&error));
    }
}

/// `2` when the request itself was at fault, `1` for everything else.
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<CoreError>() {
        Some(core) if core.is_client_error() => 2,
        _ => 1,
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let mut config =
        InsightConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(dataset) = &flags.dataset {
        config.store.dataset_path.clone_from(dataset);
    }

    let ctx = context::AppContext::init(&config)
        .context("failed to initialize insight application context")?;

    commands::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("INSIGHT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
