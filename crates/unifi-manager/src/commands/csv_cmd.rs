//! CSV workflow handlers: export, import, template, bulk hostnames.

use std::path::Path;

use owo_colors::OwoColorize;

use homelab_api::UnifiClient;
use homelab_api::unifi::csv::read_hostname_map;
use homelab_api::unifi::write_static_ip_template;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub async fn export(
    client: &UnifiClient,
    file: &Path,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let count = client.export_clients_to_csv(file).await?;

    if !global.quiet {
        eprintln!(
            "{} exported {count} clients to {}",
            "ok".green(),
            file.display()
        );
        eprintln!("Edit the file and apply changes with: unifi-manager import-csv");
    }
    Ok(())
}

pub async fn import(
    client: &UnifiClient,
    file: &Path,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let summary = client.import_clients_from_csv(file).await?;

    if !global.quiet {
        eprintln!(
            "{} updated {} clients ({} skipped, {} failed)",
            "ok".green(),
            summary.updated,
            summary.skipped,
            summary.failed
        );
    }
    Ok(())
}

pub async fn bulk_hostnames(
    client: &UnifiClient,
    file: &Path,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let map = read_hostname_map(file)?;
    if map.is_empty() {
        return Err(CliError::CsvError {
            message: format!("no MAC,Hostname rows found in {}", file.display()),
        });
    }

    let updated = client.bulk_hostname_update(&map).await?;

    if !global.quiet {
        eprintln!(
            "{} updated {updated} of {} hostnames",
            "ok".green(),
            map.len()
        );
    }
    Ok(())
}

pub fn template(file: &Path, global: &GlobalOpts) -> Result<(), CliError> {
    write_static_ip_template(file)?;

    if !global.quiet {
        eprintln!("{} created template file {}", "ok".green(), file.display());
        eprintln!("Fill in your devices and apply with: unifi-manager import-csv");
    }
    Ok(())
}
