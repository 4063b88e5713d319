//! CLI error types with miette diagnostics.
//!
//! Maps `homelab_api::Error` variants into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes. Clap owns code 2 for usage errors.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Could not connect to DNS server")]
    #[diagnostic(
        code(dns_manager::connection_failed),
        help(
            "Check that the server is reachable and the URL is correct.\n\
             Set it with --server or the TECHNITIUM_URL environment variable."
        )
    )]
    ConnectionFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(dns_manager::auth_failed),
        help("Verify the username and password (--username / --password).")
    )]
    AuthFailed { message: String },

    #[error("DNS server reported an error: {message}")]
    #[diagnostic(code(dns_manager::api_error))]
    ApiError { message: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(dns_manager::validation))]
    Validation { field: String, reason: String },

    #[error("Provisioned {succeeded} of {total} records")]
    #[diagnostic(
        code(dns_manager::provision_incomplete),
        help("Failed records are listed above; re-run once the cause is fixed.")
    )]
    ProvisionIncomplete { succeeded: usize, total: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            _ => exit_code::GENERAL,
        }
    }
}

impl From<homelab_api::Error> for CliError {
    fn from(err: homelab_api::Error) -> Self {
        use homelab_api::Error;

        match err {
            Error::Authentication { message } => CliError::AuthFailed { message },
            Error::NotAuthenticated => CliError::AuthFailed {
                message: "not logged in".into(),
            },
            Error::Transport(e) => CliError::ConnectionFailed { source: e.into() },
            Error::Tls(msg) => CliError::ConnectionFailed { source: msg.into() },
            Error::Api { message } => CliError::ApiError { message },
            other => CliError::ApiError {
                message: other.to_string(),
            },
        }
    }
}
