use thiserror::Error;

/// Top-level error type for the `homelab-api` crate.
///
/// Covers every failure mode across both API surfaces: authentication,
/// transport, application-level errors, and CSV interchange. The CLI
/// binaries map these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed (wrong credentials, account locked, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// An operation was attempted before a successful `login`.
    #[error("Not logged in -- call login() first")]
    NotAuthenticated,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Application ─────────────────────────────────────────────────
    /// Error reported by the Technitium API (`status != "ok"`).
    #[error("DNS API error: {message}")]
    Api { message: String },

    /// Non-success HTTP status from the UniFi controller.
    #[error("Controller returned HTTP {status}")]
    Status { status: u16 },

    /// MAC address not present in the controller's client list.
    #[error("Client with MAC {mac} not found")]
    ClientNotFound { mac: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// CSV read/write failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if this error indicates a failed or missing login.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::NotAuthenticated)
    }
}
