// Zone endpoints
//
// Listing and creation. Zone lifecycle is owned by the server; creating
// an already-existing zone surfaces the server's own error unchanged.

use tracing::debug;

use crate::error::Error;
use crate::technitium::client::TechnitiumClient;
use crate::technitium::models::{StatusResponse, Zone, ZoneListResponse, ZoneType};

impl TechnitiumClient {
    /// List all zones hosted on the server.
    ///
    /// `GET /api/zones/list?token=...`
    pub async fn list_zones(&self) -> Result<Vec<Zone>, Error> {
        let url = self.api_url("zones/list")?;
        let token = self.token()?;
        debug!("listing zones");

        let resp: ZoneListResponse = self.get_json(url, &[("token", token)]).await?;

        if resp.status != "ok" {
            return Err(Error::Api {
                message: resp
                    .error_message
                    .unwrap_or_else(|| format!("status={}", resp.status)),
            });
        }
        Ok(resp.zones)
    }

    /// Create a new zone.
    ///
    /// `POST /api/zones/create` with form fields `token`, `zone`, `type`.
    pub async fn create_zone(&self, zone: &str, zone_type: ZoneType) -> Result<(), Error> {
        let url = self.api_url("zones/create")?;
        let token = self.token()?;
        debug!(zone, %zone_type, "creating zone");

        let form = [
            ("token", token),
            ("zone", zone),
            ("type", zone_type.as_str()),
        ];
        let resp: StatusResponse = self.post_form(url, &form).await?;
        resp.into_result()
    }
}
