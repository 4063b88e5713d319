mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use homelab_api::TechnitiumClient;
use homelab_api::transport::TransportConfig;

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
    // Completions need no server connection
    if let Command::Completions(args) = cli.command {
        use clap::CommandFactory;
        use clap_complete::generate;

        let mut cmd = Cli::command();
        generate(args.shell, &mut cmd, "dns-manager", &mut std::io::stdout());
        return Ok(());
    }

    let mut client = build_client(&cli.global)?;
    let password = resolve_password(&cli.global)?;

    client.login(&password).await.map_err(|e| match e {
        homelab_api::Error::Authentication { message } => CliError::AuthFailed { message },
        other => CliError::from(other),
    })?;

    tracing::debug!(command = ?cli.command, "dispatching command");
    commands::dispatch(cli.command, &client, &cli.global).await
}

/// Build an unauthenticated client from the global flags.
fn build_client(global: &cli::GlobalOpts) -> Result<TechnitiumClient, CliError> {
    let url: url::Url = global.server.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {}", global.server),
    })?;

    let transport = TransportConfig::default();
    TechnitiumClient::new(url, global.username.clone(), &transport).map_err(CliError::from)
}

/// Resolve the password: flag or env first, interactive prompt otherwise.
fn resolve_password(global: &cli::GlobalOpts) -> Result<SecretString, CliError> {
    if let Some(ref password) = global.password {
        return Ok(SecretString::from(password.clone()));
    }
    let prompted = rpassword::prompt_password("Technitium password: ")?;
    Ok(SecretString::from(prompted))
}
