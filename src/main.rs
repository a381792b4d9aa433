mod cli;
mod commands;
mod config;
mod domain;
mod services;

use clap::Parser;
use cli::Cli;
use domain::errors::FimError;
use services::output::print_error;
use tracing_subscriber::EnvFilter;

const INTERNAL_CODE: &str = "INTERNAL";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        report_failure(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = config::load_settings()?.with_api_base(cli.api_base.as_deref());
    tracing::debug!(api_base = %settings.api_base, "settings loaded");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = tokio::task::LocalSet::new();
    local.block_on(&rt, commands::dispatch(cli, &settings))
}

/// Logs go to stderr so `--json` stdout stays parseable.
fn init_tracing(verbose: bool) {
    let default = if verbose { "fim=debug" } else { "fim=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_failure(json: bool, err: &anyhow::Error) {
    match err.downcast_ref::<FimError>() {
        // Text mode already showed it as the region's status line.
        Some(fim) if !json => tracing::debug!(code = fim.code(), "command failed"),
        Some(fim) => print_error(true, fim.code(), &fim.to_string()),
        None => print_error(json, INTERNAL_CODE, &format!("{:#}", err)),
    }
}
