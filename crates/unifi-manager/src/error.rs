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
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Could not connect to controller")]
    #[diagnostic(
        code(unifi_manager::connection_failed),
        help(
            "Check that the controller is reachable and the URL is correct.\n\
             Set it with --controller or the UNIFI_CONTROLLER environment variable."
        )
    )]
    ConnectionFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(unifi_manager::auth_failed),
        help("Verify the username and password (--username / --password).")
    )]
    AuthFailed { message: String },

    #[error("Client with MAC {mac} not found")]
    #[diagnostic(
        code(unifi_manager::client_not_found),
        help("Run: unifi-manager list-clients to see tracked devices.")
    )]
    ClientNotFound { mac: String },

    #[error("Controller request failed: {message}")]
    #[diagnostic(code(unifi_manager::api_error))]
    ApiError { message: String },

    #[error("CSV file error: {message}")]
    #[diagnostic(
        code(unifi_manager::csv_error),
        help("Check the file path and column headers; see generate-template.")
    )]
    CsvError { message: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(unifi_manager::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::ClientNotFound { .. } => exit_code::NOT_FOUND,
            _ => exit_code::GENERAL,
        }
    }
}

impl From<homelab_api::Error> for CliError {
    fn from(err: homelab_api::Error) -> Self {
        use homelab_api::Error;

        match err {
            Error::Authentication { message } => CliError::AuthFailed { message },
            Error::Transport(e) => CliError::ConnectionFailed { source: e.into() },
            Error::Tls(msg) => CliError::ConnectionFailed { source: msg.into() },
            Error::ClientNotFound { mac } => CliError::ClientNotFound { mac },
            Error::Status { status } => CliError::ApiError {
                message: format!("controller returned HTTP {status}"),
            },
            Error::Csv(e) => CliError::CsvError {
                message: e.to_string(),
            },
            Error::Io(e) => CliError::Io(e),
            other => CliError::ApiError {
                message: other.to_string(),
            },
        }
    }
}
