mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use homelab_api::UnifiClient;
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
    match cli.command {
        // Purely local commands need no controller connection
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "unifi-manager", &mut std::io::stdout());
            Ok(())
        }

        Command::GenerateTemplate { file } => commands::csv_cmd::template(&file, &cli.global),

        cmd => {
            let client = build_client(&cli.global)?;
            let password = resolve_password(&cli.global)?;

            client
                .login(&cli.global.username, &password)
                .await
                .map_err(|e| match e {
                    homelab_api::Error::Authentication { message } => {
                        CliError::AuthFailed { message }
                    }
                    other => CliError::from(other),
                })?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &client, &cli.global).await
        }
    }
}

/// Build an unauthenticated client from the global flags.
///
/// Certificate verification is off unless `--verify-tls` is passed;
/// local controllers almost always present self-signed certificates.
fn build_client(global: &cli::GlobalOpts) -> Result<UnifiClient, CliError> {
    let url: url::Url = global.controller.parse().map_err(|_| CliError::Validation {
        field: "controller".into(),
        reason: format!("invalid URL: {}", global.controller),
    })?;

    let mut transport = TransportConfig::default().with_cookie_jar();
    if !global.verify_tls {
        transport = transport.with_danger_accept_invalid_certs();
    }

    UnifiClient::new(url, global.site.clone(), &transport).map_err(CliError::from)
}

/// Resolve the password: flag or env first, interactive prompt otherwise.
fn resolve_password(global: &cli::GlobalOpts) -> Result<SecretString, CliError> {
    if let Some(ref password) = global.password {
        return Ok(SecretString::from(password.clone()));
    }
    let prompted = rpassword::prompt_password("UniFi controller password: ")?;
    Ok(SecretString::from(prompted))
}
