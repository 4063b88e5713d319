// Record endpoints
//
// The record value travels under a type-specific form field; see
// `RecordType::value_field` for the dispatch.

use tracing::debug;

use crate::error::Error;
use crate::technitium::client::TechnitiumClient;
use crate::technitium::models::{RecordType, StatusResponse};

/// Default record time-to-live in seconds.
pub const DEFAULT_TTL: u32 = 3600;

impl TechnitiumClient {
    /// Add a record to a zone.
    ///
    /// `POST /api/zones/records/add` with form fields `token`, `zone`,
    /// `name`, `type`, `ttl`, plus the value under the field selected by
    /// the record type (`ipAddress`, `cname`, `text`, or `rdata`).
    pub async fn add_record(
        &self,
        zone: &str,
        name: &str,
        rtype: &RecordType,
        value: &str,
        ttl: u32,
    ) -> Result<(), Error> {
        let url = self.api_url("zones/records/add")?;
        let token = self.token()?;
        debug!(zone, name, %rtype, value, ttl, "adding record");

        let ttl = ttl.to_string();
        let form = [
            ("token", token),
            ("zone", zone),
            ("name", name),
            ("type", rtype.as_str()),
            ("ttl", ttl.as_str()),
            (rtype.value_field(), value),
        ];
        let resp: StatusResponse = self.post_form(url, &form).await?;
        resp.into_result()
    }
}
