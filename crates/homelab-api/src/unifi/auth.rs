// UniFi OS authentication
//
// Cookie-based session login. The login endpoint sets a session cookie in
// the client's jar; subsequent requests use that cookie automatically.
// Success is determined solely by the HTTP status code -- the response
// body is not consulted. This is the controller's contract and must not
// be unified with the Technitium body-status convention.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::error::Error;
use crate::unifi::client::UnifiClient;

impl UnifiClient {
    /// Authenticate with the controller using username/password.
    ///
    /// `POST /api/auth/login` with JSON `{username, password, remember}`.
    /// On success the session cookie is stored in the cookie jar. One
    /// attempt, no retry.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        let url = self
            .base_url()
            .join("api/auth/login")
            .map_err(Error::InvalidUrl)?;

        debug!(username, "logging in at {url}");

        let body = json!({
            "username": username,
            "password": password.expose_secret(),
            "remember": true,
        });

        let resp = self
            .http()
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {body}"),
            });
        }

        debug!("login successful");
        Ok(())
    }
}
