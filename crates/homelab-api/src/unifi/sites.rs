// Site-level read endpoints
//
// Site listing is controller-scoped (`/api/self/sites`); routing and
// user-group listings are site-scoped REST collections.

use tracing::debug;

use crate::error::Error;
use crate::unifi::client::UnifiClient;
use crate::unifi::models::{Site, StaticRoute, UserGroup};

impl UnifiClient {
    /// List all sites visible to the authenticated user.
    ///
    /// `GET /proxy/network/api/self/sites`
    pub async fn list_sites(&self) -> Result<Vec<Site>, Error> {
        let url = self.api_url("self/sites")?;
        debug!("listing sites");
        self.get_data(url).await
    }

    /// List static routes configured on the site.
    ///
    /// `GET /proxy/network/api/s/{site}/rest/routing`
    pub async fn list_static_routes(&self) -> Result<Vec<StaticRoute>, Error> {
        let url = self.site_url("rest/routing")?;
        debug!("listing static routes");
        self.get_data(url).await
    }

    /// List user groups (bandwidth profiles) on the site.
    ///
    /// `GET /proxy/network/api/s/{site}/rest/usergroup`
    pub async fn list_user_groups(&self) -> Result<Vec<UserGroup>, Error> {
        let url = self.site_url("rest/usergroup")?;
        debug!("listing user groups");
        self.get_data(url).await
    }
}
