//! Zone command handlers.

use tabled::Tabled;

use homelab_api::TechnitiumClient;
use homelab_api::technitium::Zone;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ZoneRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    zone_type: String,
}

impl From<&Zone> for ZoneRow {
    fn from(z: &Zone) -> Self {
        Self {
            name: z.name.clone(),
            zone_type: z.zone_type.clone(),
        }
    }
}

pub async fn list(client: &TechnitiumClient, global: &GlobalOpts) -> Result<(), CliError> {
    let zones = client.list_zones().await?;

    if zones.is_empty() {
        if !global.quiet {
            eprintln!("No zones found");
        }
        return Ok(());
    }

    let out = output::render_list(&global.output, &zones, |z| ZoneRow::from(z), |z| {
        z.name.clone()
    });
    output::print_output(&out, global.quiet);

    if !global.quiet {
        eprintln!("{} zones", zones.len());
    }
    Ok(())
}
