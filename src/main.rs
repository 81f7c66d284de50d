use std::path::Path;

use clap::Parser;
use tasktrack::api::ApiClient;
use tasktrack::cli::commands::Cli;
use tasktrack::cli::handlers;
use tasktrack::io::config_io::{API_BASE_ENV, load_config, resolve_api_base};
use tasktrack::io::logging::{LogTarget, init_logging};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(cli.config.as_deref().map(Path::new))?;

    // The TUI owns the terminal, so it only ever logs to a file
    let target = if cli.command.is_some() {
        LogTarget::Stderr
    } else {
        LogTarget::FileOnly
    };
    init_logging(&config.log, target)?;

    let env_base = std::env::var(API_BASE_ENV).ok();
    config.api.base_url = resolve_api_base(cli.api.as_deref(), env_base.as_deref(), &config);
    let client = ApiClient::from_config(&config.api)?;

    match cli.command {
        // No subcommand → launch TUI
        None => tasktrack::tui::run(client, &config),
        Some(command) => handlers::dispatch(command, &client, cli.json),
    }
}
