// UniFi controller HTTP client
//
// Wraps `reqwest::Client` with UniFi OS URL construction (the network
// application sits behind the `/proxy/network` prefix) and status-code
// based error mapping. Endpoint groups (sites, clients, devmgr) are
// implemented as inherent methods in separate files.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::unifi::models::DataEnvelope;

/// HTTP client for a UniFi OS network controller.
///
/// Session state lives in the transport's cookie jar; after `login` all
/// requests are authenticated implicitly. The controller signals failure
/// through HTTP status codes, so every helper here checks the status
/// before touching the body.
pub struct UnifiClient {
    http: reqwest::Client,
    base_url: Url,
    site: String,
}

impl UnifiClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// A cookie jar is created automatically if the config lacks one
    /// (session auth requires cookies). `base_url` is the controller
    /// root, e.g. `https://192.168.1.1`.
    pub fn new(base_url: Url, site: String, transport: &TransportConfig) -> Result<Self, Error> {
        let config = if transport.cookie_jar.is_some() {
            transport.clone()
        } else {
            transport.clone().with_cookie_jar()
        };
        let http = config.build_client()?;
        Ok(Self {
            http,
            base_url,
            site,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, site: String) -> Self {
        Self {
            http,
            base_url,
            site,
        }
    }

    /// The current site identifier.
    pub fn site(&self) -> &str {
        &self.site
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The underlying HTTP client (for the login flow).
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a controller-level network API URL:
    /// `{base}/proxy/network/api/{path}`
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(&format!("proxy/network/api/{path}"))
            .map_err(Error::InvalidUrl)
    }

    /// Build a site-scoped URL: `{base}/proxy/network/api/s/{site}/{path}`
    pub(crate) fn site_url(&self, path: &str) -> Result<Url, Error> {
        self.api_url(&format!("s/{}/{path}", self.site))
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and unwrap the `{ data: [...] }` envelope.
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, Error> {
        debug!("GET {url}");

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        let resp = Self::check_status(resp)?;

        let body = resp.text().await.map_err(Error::Transport)?;
        let envelope: DataEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body,
            })?;
        Ok(envelope.data)
    }

    /// Send a PUT request with a JSON body; only the status is checked.
    pub(crate) async fn put_checked(&self, url: Url, body: &impl Serialize) -> Result<(), Error> {
        debug!("PUT {url}");

        let resp = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_status(resp)?;
        Ok(())
    }

    /// Send a POST request with a JSON body; only the status is checked.
    pub(crate) async fn post_checked(&self, url: Url, body: &impl Serialize) -> Result<(), Error> {
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_status(resp)?;
        Ok(())
    }

    /// Map non-success statuses to errors; 401 means the session died.
    fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "session expired or invalid credentials".into(),
            });
        }
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }
        Ok(resp)
    }
}
