// Client (station) endpoints
//
// Listing via stat/sta, settings updates via the rest/user collection.
// Updates are keyed by the controller's internal `_id`, so every mutation
// first resolves the MAC against the current client list.

use std::collections::HashMap;

use serde_json::json;
use tracing::{debug, warn};

use crate::error::Error;
use crate::unifi::client::UnifiClient;
use crate::unifi::models::ClientEntry;

impl UnifiClient {
    /// List all tracked clients on the site.
    ///
    /// `GET /proxy/network/api/s/{site}/stat/sta`
    pub async fn list_clients(&self) -> Result<Vec<ClientEntry>, Error> {
        let url = self.site_url("stat/sta")?;
        debug!("listing clients");
        self.get_data(url).await
    }

    /// Assign a fixed IP (DHCP reservation) to the client with `mac`.
    ///
    /// Resolves the MAC against the current client list (case-insensitive);
    /// an unknown MAC fails with `ClientNotFound` before any update is
    /// issued. `hostname`, when given, also updates the display name.
    ///
    /// `PUT /proxy/network/api/s/{site}/rest/user/{id}`
    pub async fn set_static_ip(
        &self,
        mac: &str,
        ip: &str,
        hostname: Option<&str>,
    ) -> Result<(), Error> {
        let clients = self.list_clients().await?;
        let client = clients
            .iter()
            .find(|c| c.mac_matches(mac))
            .ok_or_else(|| Error::ClientNotFound { mac: mac.into() })?;

        debug!(mac, ip, id = %client.id, "setting fixed IP");

        let mut body = json!({
            "mac": mac,
            "use_fixedip": true,
            "fixed_ip": ip,
        });
        if let Some(name) = hostname.filter(|h| !h.is_empty()) {
            body["name"] = json!(name);
        }

        let url = self.site_url(&format!("rest/user/{}", client.id))?;
        self.put_checked(url, &body).await
    }

    /// Update a client's display name, keyed by internal id.
    ///
    /// `PUT /proxy/network/api/s/{site}/rest/user/{id}` with `{name}`
    pub async fn set_client_name(&self, id: &str, name: &str) -> Result<(), Error> {
        debug!(id, name, "setting client name");
        let url = self.site_url(&format!("rest/user/{id}"))?;
        self.put_checked(url, &json!({ "name": name })).await
    }

    /// Rename every client whose MAC appears in `hostname_map`.
    ///
    /// Fetches the client list once, then issues one update per matched
    /// client. Map keys are compared lowercased. Per-client failures are
    /// logged and skipped; the return value counts successful updates.
    pub async fn bulk_hostname_update(
        &self,
        hostname_map: &HashMap<String, String>,
    ) -> Result<usize, Error> {
        let clients = self.list_clients().await?;

        let mut updated = 0;
        for client in &clients {
            let Some(new_name) = hostname_map.get(&client.mac.to_lowercase()) else {
                continue;
            };
            match self.set_client_name(&client.id, new_name).await {
                Ok(()) => {
                    debug!(mac = %client.mac, name = %new_name, "hostname updated");
                    updated += 1;
                }
                Err(e) => {
                    warn!(mac = %client.mac, "hostname update failed: {e}");
                }
            }
        }
        Ok(updated)
    }
}
