//! Record command handlers.

use homelab_api::TechnitiumClient;
use homelab_api::technitium::RecordType;

use crate::cli::GlobalOpts;
use crate::error::CliError;

#[allow(clippy::too_many_arguments)]
pub async fn add(
    client: &TechnitiumClient,
    zone: &str,
    name: &str,
    rtype: &RecordType,
    value: &str,
    ttl: u32,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    client.add_record(zone, name, rtype, value, ttl).await?;

    if !global.quiet {
        eprintln!("Record '{name}.{zone}' ({rtype}: {value}) added");
    }
    Ok(())
}
