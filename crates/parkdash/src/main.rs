mod cli;
mod commands;
mod error;
mod output;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use parkdash_core::{Session, SessionConfig};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a backend connection
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "parkdash", &mut std::io::stdout());
            Ok(())
        }

        // All other commands talk to the backend
        cmd => {
            let session_config = build_session_config(&cli.global)?;
            let session = Session::new(&session_config)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &session, &cli.global).await
        }
    }
}

/// Build a `SessionConfig` from the config file with CLI flag overrides.
fn build_session_config(global: &cli::GlobalOpts) -> Result<SessionConfig, CliError> {
    let cfg = parkdash_config::load_config_or_default();
    let mut session_config = parkdash_config::session_config(&cfg)?;

    if let Some(ref url) = global.api_url {
        let _: url::Url = url.parse().map_err(|_| CliError::Validation {
            field: "api-url".into(),
            reason: format!("invalid URL: {url}"),
        })?;
        session_config.api_url = url.clone();
    }
    if let Some(timeout) = global.timeout {
        session_config.timeout = Duration::from_secs(timeout);
    }
    // One-shot invocations never run the background refresh.
    session_config.refresh_interval = Duration::ZERO;

    Ok(session_config)
}
