// Technitium API HTTP client
//
// Wraps `reqwest::Client` with token handling and body-status decoding.
// Endpoint groups (zones, records) are implemented as inherent methods in
// separate files to keep this module focused on transport mechanics.

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::technitium::models::LoginResponse;
use crate::transport::TransportConfig;

/// HTTP client for the Technitium DNS Server API.
///
/// The server reports success via `status == "ok"` in the JSON body and
/// carries application errors in `errorMessage`; the HTTP status code is
/// not meaningful and is deliberately ignored. All authenticated calls
/// pass the opaque session token as a request parameter.
pub struct TechnitiumClient {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    token: Option<String>,
}

impl TechnitiumClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the server root, e.g. `http://127.0.0.1:5380`.
    pub fn new(
        base_url: Url,
        username: impl Into<String>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            username: username.into(),
            token: None,
        })
    }

    /// Create a client with a pre-built `reqwest::Client` and an existing
    /// token. Used by tests and by callers that manage their own transport.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        username: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url,
            username: username.into(),
            token,
        }
    }

    /// The server base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether a login has succeeded on this client.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Authenticate and store the session token.
    ///
    /// `POST /api/user/login` with form fields `user` and `pass`. Success
    /// is determined solely by `status == "ok"` in the body; a failed
    /// login surfaces the server's `errorMessage`. One attempt, no retry.
    pub async fn login(&mut self, password: &SecretString) -> Result<(), Error> {
        let url = self.api_url("user/login")?;
        debug!(user = %self.username, "logging in at {url}");

        let form = [
            ("user", self.username.as_str()),
            ("pass", password.expose_secret()),
        ];
        let resp: LoginResponse = self.post_form(url, &form).await?;

        if resp.status != "ok" {
            return Err(Error::Authentication {
                message: resp
                    .error_message
                    .unwrap_or_else(|| "unknown error".into()),
            });
        }

        match resp.token {
            Some(token) => {
                self.token = Some(token);
                debug!("login successful");
                Ok(())
            }
            None => Err(Error::Authentication {
                message: "server returned no token".into(),
            }),
        }
    }

    // ── URL / token helpers ──────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/api/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(&format!("api/{path}"))
            .map_err(Error::InvalidUrl)
    }

    /// The stored session token, or `NotAuthenticated`.
    pub(crate) fn token(&self) -> Result<&str, Error> {
        self.token.as_deref().ok_or(Error::NotAuthenticated)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    ///
    /// The HTTP status code is ignored: Technitium signals errors through
    /// the body's `status` field, which each caller inspects.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        debug!("GET {url}");

        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::decode_body(resp).await
    }

    /// Send a form-encoded POST request and decode the JSON body.
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        url: Url,
        form: &[(&str, &str)],
    ) -> Result<T, Error> {
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::decode_body(resp).await
    }

    async fn decode_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
