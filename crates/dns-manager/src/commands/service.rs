//! Service provisioning handler.

use owo_colors::OwoColorize;

use homelab_api::TechnitiumClient;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub async fn setup(
    client: &TechnitiumClient,
    zone: &str,
    ip: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Setting up service records for {zone}...");
    }

    let setup = client.setup_service_records(zone, ip).await?;

    if !global.quiet {
        if setup.zone_created {
            eprintln!("Zone '{zone}' created");
        }
        for record in &setup.records {
            let status = if record.succeeded() {
                "ok".green().to_string()
            } else {
                "failed".red().to_string()
            };
            let mut line = format!(
                "  {status}  {}.{zone} ({} -> {})",
                record.name, record.rtype, record.value
            );
            if let Some(ref err) = record.error {
                line.push_str(&format!(": {err}"));
            }
            eprintln!("{line}");
        }
    }

    if setup.all_succeeded() {
        if !global.quiet {
            eprintln!("All {} records in place", setup.records.len());
        }
        Ok(())
    } else {
        Err(CliError::ProvisionIncomplete {
            succeeded: setup.succeeded_count(),
            total: setup.records.len(),
        })
    }
}
