// Device manager commands
//
// Fire-and-forget controller commands via cmd/devmgr. The controller
// acknowledges the command; it does not report whether the effect took.

use serde_json::json;
use tracing::debug;

use crate::error::Error;
use crate::unifi::client::UnifiClient;

impl UnifiClient {
    /// Force-provision site devices, flushing cached ARP state.
    ///
    /// `POST /proxy/network/api/s/{site}/cmd/devmgr` with
    /// `{"cmd": "force-provision"}`
    pub async fn clear_arp_table(&self) -> Result<(), Error> {
        let url = self.site_url("cmd/devmgr")?;
        debug!("requesting force-provision");
        self.post_checked(url, &json!({ "cmd": "force-provision" }))
            .await
    }
}
