//! Client command handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use homelab_api::UnifiClient;
use homelab_api::unifi::ClientEntry;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Static")]
    fixed: String,
    #[tabled(rename = "Network")]
    network: String,
}

impl From<&ClientEntry> for ClientRow {
    fn from(c: &ClientEntry) -> Self {
        Self {
            status: (if c.is_online { "online" } else { "offline" }).to_owned(),
            mac: c.mac.clone(),
            name: c.display_name().to_owned(),
            ip: c.ip.clone().unwrap_or_default(),
            fixed: if c.use_fixedip {
                c.fixed_ip.clone().unwrap_or_default()
            } else {
                String::new()
            },
            network: c.network.clone().unwrap_or_default(),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn list(client: &UnifiClient, global: &GlobalOpts) -> Result<(), CliError> {
    let clients = client.list_clients().await?;

    if clients.is_empty() {
        if !global.quiet {
            eprintln!("No clients found");
        }
        return Ok(());
    }

    let out = output::render_list(&global.output, &clients, |c| ClientRow::from(c), |c| {
        c.mac.clone()
    });
    output::print_output(&out, global.quiet);

    if !global.quiet {
        let online = clients.iter().filter(|c| c.is_online).count();
        eprintln!("{} clients ({online} online)", clients.len());
    }
    Ok(())
}

pub async fn set_static_ip(
    client: &UnifiClient,
    mac: &str,
    ip: &str,
    hostname: Option<&str>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    client.set_static_ip(mac, ip, hostname).await?;

    if !global.quiet {
        eprintln!("{} static IP {ip} set for {mac}", "ok".green());
    }
    Ok(())
}
