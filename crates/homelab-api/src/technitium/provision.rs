// Service provisioning workflow
//
// Composes zone and record calls into the fixed record set used for a
// GitLab deployment: one address record for the primary host and two
// aliases pointing at it. Record failures do not stop the remaining
// additions; the outcome reports each attempt individually.

use tracing::{debug, warn};

use crate::error::Error;
use crate::technitium::client::TechnitiumClient;
use crate::technitium::models::{RecordType, ZoneType};
use crate::technitium::records::DEFAULT_TTL;

/// Primary hostname the service records point at.
pub const SERVICE_HOST: &str = "gitlab";

/// Alias hostnames created as CNAMEs of the primary host.
pub const SERVICE_ALIASES: [&str; 2] = ["git", "registry"];

/// Result of a single record addition within `setup_service_records`.
#[derive(Debug)]
pub struct RecordOutcome {
    pub name: String,
    pub rtype: RecordType,
    pub value: String,
    /// `None` on success.
    pub error: Option<Error>,
}

impl RecordOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate result of `setup_service_records`.
#[derive(Debug)]
pub struct ServiceSetup {
    /// Whether the zone had to be created first.
    pub zone_created: bool,
    /// One entry per attempted record, in attempt order.
    pub records: Vec<RecordOutcome>,
}

impl ServiceSetup {
    /// `true` iff every record addition succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.records.iter().all(RecordOutcome::succeeded)
    }

    pub fn succeeded_count(&self) -> usize {
        self.records.iter().filter(|r| r.succeeded()).count()
    }
}

impl TechnitiumClient {
    /// Provision the service record set for `zone`, pointing at `target_ip`.
    ///
    /// Ensures the zone exists (listing first, creating a Primary zone if
    /// absent), then attempts all three records even when an earlier one
    /// fails. A zone-ensure failure aborts before any record is attempted.
    pub async fn setup_service_records(
        &self,
        zone: &str,
        target_ip: &str,
    ) -> Result<ServiceSetup, Error> {
        debug!(zone, target_ip, "setting up service records");

        let zones = self.list_zones().await?;
        let zone_exists = zones.iter().any(|z| z.name == zone);

        if !zone_exists {
            self.create_zone(zone, ZoneType::Primary).await?;
        }

        let primary_fqdn = format!("{SERVICE_HOST}.{zone}");
        let mut planned: Vec<(String, RecordType, String)> = vec![(
            SERVICE_HOST.to_owned(),
            RecordType::A,
            target_ip.to_owned(),
        )];
        for alias in SERVICE_ALIASES {
            planned.push((alias.to_owned(), RecordType::Cname, primary_fqdn.clone()));
        }

        let mut records = Vec::with_capacity(planned.len());
        for (name, rtype, value) in planned {
            let error = match self
                .add_record(zone, &name, &rtype, &value, DEFAULT_TTL)
                .await
            {
                Ok(()) => None,
                Err(e) => {
                    warn!(zone, %name, %rtype, "record addition failed: {e}");
                    Some(e)
                }
            };
            records.push(RecordOutcome {
                name,
                rtype,
                value,
                error,
            });
        }

        Ok(ServiceSetup {
            zone_created: !zone_exists,
            records,
        })
    }
}
